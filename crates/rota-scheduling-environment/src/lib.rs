pub mod boundary_event;
pub mod interval;
pub mod worker;

pub use boundary_event::BoundaryEvent;
pub use boundary_event::BoundaryKind;
pub use interval::Interval;
pub use interval::IntervalId;
pub use interval::Intervals;
pub use interval::IntervalsBuilder;
pub use worker::WorkerId;
