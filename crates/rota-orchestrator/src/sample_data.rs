use anyhow::Result;
use anyhow::ensure;
use rand::Rng;
use rand::SeedableRng;
use rand::rngs::StdRng;
use rota_configuration::sample_generation::SampleGeneration;
use rota_scheduling_environment::Interval;
use rota_scheduling_environment::IntervalId;
use rota_scheduling_environment::Intervals;

/// Random intervals with ids `0..number_of_entries`.
///
/// The start is drawn from `[t_min, t_max)` and the end from
/// `(start, t_max]`, so long intervals are more likely for early starts.
pub fn generate_intervals(sample_generation: &SampleGeneration) -> Result<Intervals>
{
    ensure!(
        sample_generation.t_min < sample_generation.t_max,
        "Cannot generate intervals in the empty range [{}, {})",
        sample_generation.t_min,
        sample_generation.t_max
    );

    let mut rng = match sample_generation.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    (0..sample_generation.number_of_entries)
        .map(|id| {
            let start = rng.random_range(sample_generation.t_min..sample_generation.t_max);
            let end = rng.random_range(start + 1..=sample_generation.t_max);
            Interval::new(IntervalId(id), start, end)
        })
        .collect()
}
