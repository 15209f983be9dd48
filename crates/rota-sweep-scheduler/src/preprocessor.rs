use std::collections::HashSet;

use rota_scheduling_environment::BoundaryEvent;
use rota_scheduling_environment::Interval;

use crate::error::SchedulingError;

/// Expands every interval into its `Start` and `End` event.
///
/// The returned vector has exactly `2 * intervals.len()` events and is in
/// input order, start event first. Sorting is left to the sweep.
pub fn boundary_events<'a, I>(intervals: I) -> Result<Vec<BoundaryEvent>, SchedulingError>
where
    I: IntoIterator<Item = &'a Interval>,
{
    let intervals = intervals.into_iter();
    let mut seen = HashSet::with_capacity(intervals.size_hint().0);
    let mut events = Vec::with_capacity(2 * intervals.size_hint().0);

    for interval in intervals {
        if !interval.is_well_formed() {
            return Err(SchedulingError::InvalidInterval {
                id: interval.id,
                start: interval.start,
                end: interval.end,
            });
        }
        if !seen.insert(interval.id) {
            return Err(SchedulingError::DuplicateIntervalId(interval.id));
        }

        events.push(interval.start_event());
        events.push(interval.end_event());
    }

    Ok(events)
}
