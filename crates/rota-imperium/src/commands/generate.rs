use std::path::PathBuf;

use clap::Args;
use rota_configuration::sample_generation::SampleGeneration;

/// Overrides for the `[sample_generation]` section of the configuration.
#[derive(Args, Debug, Clone, Default)]
pub struct GenerateArgs
{
    /// Number of intervals
    #[arg(long)]
    pub entries: Option<u64>,
    /// Earliest start
    #[arg(long, allow_negative_numbers = true)]
    pub t_min: Option<i64>,
    /// Latest end
    #[arg(long, allow_negative_numbers = true)]
    pub t_max: Option<i64>,
    /// Seed for reproducible data
    #[arg(long)]
    pub seed: Option<u64>,
    /// Interval file to write
    #[arg(long)]
    pub output: Option<PathBuf>,
}

impl GenerateArgs
{
    pub fn sample_generation(&self, configured: &SampleGeneration) -> SampleGeneration
    {
        SampleGeneration {
            t_min: self.t_min.unwrap_or(configured.t_min),
            t_max: self.t_max.unwrap_or(configured.t_max),
            number_of_entries: self.entries.unwrap_or(configured.number_of_entries),
            seed: self.seed.or(configured.seed),
        }
    }
}
