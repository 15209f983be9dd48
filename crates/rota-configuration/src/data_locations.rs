use std::path::PathBuf;

use serde::Deserialize;
use serde::Serialize;

#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug)]
#[serde(default)]
pub struct DataLocations
{
    /// CSV file with the columns `id,start,end`.
    pub intervals: PathBuf,
    /// CSV file with the columns `interval_id,worker_id`. Overwritten on
    /// every run.
    pub schedule: PathBuf,
}

impl Default for DataLocations
{
    fn default() -> Self
    {
        Self {
            intervals: PathBuf::from("./temp_scheduling_environment_database/intervals.csv"),
            schedule: PathBuf::from("./temp_scheduling_environment_database/schedule.csv"),
        }
    }
}
