//! Minimum worker assignment for a collection of intervals.
//!
//! Every interval is split into a start and an end event, the events are
//! swept in time order and workers are recycled through a FIFO idle pool.
//! The number of workers used equals the maximum overlap depth, which is
//! optimal for interval graphs.
pub mod assert_functions;
pub mod error;
pub mod idle_pool;
pub mod overlap;
pub mod preprocessor;
pub mod schedule_result;
pub mod sweep;

pub use error::SchedulingError;
pub use overlap::overlap_depth;
pub use schedule_result::ScheduleResult;
pub use sweep::SchedulerOptions;
pub use sweep::SweepScheduler;
pub use sweep::compute_schedule;
