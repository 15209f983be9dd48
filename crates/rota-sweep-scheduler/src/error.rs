use rota_scheduling_environment::IntervalId;
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Error, Serialize, PartialEq, Eq, Clone)]
pub enum SchedulingError
{
    #[error("Interval {id} is malformed, start ({start}) has to be strictly before end ({end})")]
    InvalidInterval { id: IntervalId, start: i64, end: i64 },
    #[error("Interval id {0} occurs more than once in the input")]
    DuplicateIntervalId(IntervalId),
    #[error("The scheduler was configured to require at least one interval")]
    EmptyInput,
}
