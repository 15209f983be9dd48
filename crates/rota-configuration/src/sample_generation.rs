use serde::Deserialize;
use serde::Serialize;

/// Bounds for randomly generated intervals. Every generated interval
/// satisfies `t_min <= start < end <= t_max`.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct SampleGeneration
{
    pub t_min: i64,
    pub t_max: i64,
    pub number_of_entries: u64,
    pub seed: Option<u64>,
}

impl Default for SampleGeneration
{
    fn default() -> Self
    {
        Self {
            t_min: 0,
            t_max: 10_000,
            number_of_entries: 10_000,
            seed: None,
        }
    }
}
