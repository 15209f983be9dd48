use std::collections::HashMap;

use anyhow::Context;
use anyhow::Result;
use anyhow::ensure;
use colored::Colorize;
use itertools::Itertools;
use rota_scheduling_environment::Interval;
use rota_scheduling_environment::IntervalId;
use rota_scheduling_environment::Intervals;

use crate::overlap::overlap_depth;
use crate::schedule_result::ScheduleResult;

/// Every interval has a worker and the schedule has no entries for unknown
/// intervals.
pub fn assert_all_assigned(intervals: &Intervals, schedule_result: &ScheduleResult) -> Result<()>
{
    for interval in intervals {
        schedule_result.worker_of(&interval.id).with_context(|| {
            format!(
                "{} has no worker assigned",
                interval.to_string().bright_yellow()
            )
        })?;
    }
    ensure!(
        schedule_result.len() == intervals.len(),
        "The schedule has {} assignments for {} intervals",
        schedule_result.len(),
        intervals.len()
    );
    Ok(())
}

/// No worker covers two strictly overlapping intervals.
pub fn assert_no_conflicts(intervals: &Intervals, schedule_result: &ScheduleResult) -> Result<()>
{
    assert_all_assigned(intervals, schedule_result)?;

    let intervals_by_id: HashMap<IntervalId, &Interval> = intervals
        .iter()
        .map(|interval| (interval.id, interval))
        .collect();

    for (worker_id, interval_ids) in schedule_result.intervals_per_worker() {
        let mut worker_intervals: Vec<&Interval> = interval_ids
            .iter()
            .map(|interval_id| {
                intervals_by_id
                    .get(interval_id)
                    .copied()
                    .with_context(|| format!("Interval {} is not part of the input", interval_id))
            })
            .collect::<Result<_>>()?;
        worker_intervals.sort_by_key(|interval| (interval.start, interval.end));

        for (interval_1, interval_2) in worker_intervals.iter().tuple_windows() {
            ensure!(
                !interval_1.overlaps(interval_2),
                "worker {} covers overlapping intervals\ninterval_1: {}\ninterval_2: {}",
                worker_id.to_string().bright_blue(),
                interval_1,
                interval_2
            );
        }
    }
    Ok(())
}

/// The schedule uses exactly as many workers as the overlap depth demands.
pub fn assert_optimal(intervals: &Intervals, schedule_result: &ScheduleResult) -> Result<()>
{
    let depth = overlap_depth(intervals);
    ensure!(
        schedule_result.worker_count() == depth,
        "The schedule uses {} workers while the overlap depth is {}",
        schedule_result.worker_count(),
        depth
    );
    Ok(())
}
