use rota_scheduling_environment::BoundaryEvent;
use rota_scheduling_environment::BoundaryKind;
use rota_scheduling_environment::Intervals;
use serde::Deserialize;
use serde::Serialize;
use tracing::Level;
use tracing::event;
use tracing::instrument;

use crate::error::SchedulingError;
use crate::idle_pool::IdlePool;
use crate::preprocessor::boundary_events;
use crate::schedule_result::ScheduleResult;

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Debug, Default)]
#[serde(default)]
pub struct SchedulerOptions
{
    /// Treat an empty interval collection as an error instead of an empty
    /// schedule.
    pub require_non_empty: bool,
}

/// Greedy sweep over the boundary events of an interval collection.
///
/// All state of a run (idle pool, worker counter, assignments) lives on the
/// stack of [`SweepScheduler::compute_schedule`], so one scheduler can be
/// shared between threads.
#[derive(Clone, Debug, Default)]
pub struct SweepScheduler
{
    options: SchedulerOptions,
}

impl SweepScheduler
{
    pub fn new(options: SchedulerOptions) -> Self
    {
        Self { options }
    }

    /// Assigns a worker to every interval using as few workers as the
    /// maximum overlap depth allows.
    ///
    /// Events are ordered by time and, at equal time, `End` before `Start`.
    /// A worker freed by an interval ending at `t` is therefore available to
    /// an interval starting at `t`.
    #[instrument(level = "debug", skip_all, fields(intervals = intervals.len()))]
    pub fn compute_schedule(&self, intervals: &Intervals) -> Result<ScheduleResult, SchedulingError>
    {
        if intervals.is_empty() && self.options.require_non_empty {
            return Err(SchedulingError::EmptyInput);
        }

        let mut events = boundary_events(intervals)?;
        events.sort_by_key(BoundaryEvent::sort_key);

        let mut idle_pool = IdlePool::new();
        let mut schedule_result = ScheduleResult::new();

        for event in events {
            match event.kind {
                BoundaryKind::Start => {
                    let worker_id = idle_pool.acquire();
                    event!(Level::TRACE, interval = %event.owner, time = event.time, worker = %worker_id, "assigned");
                    schedule_result.assign(event.owner, worker_id);
                }
                BoundaryKind::End => {
                    let worker_id = schedule_result
                        .worker_of(&event.owner)
                        .expect("boundary_events rejects start >= end, so the Start of an interval is swept before its End");
                    event!(Level::TRACE, interval = %event.owner, time = event.time, worker = %worker_id, "released");
                    idle_pool.release(worker_id);
                }
            }
        }

        event!(
            Level::DEBUG,
            workers = idle_pool.minted_workers(),
            assignments = schedule_result.len(),
            "sweep finished"
        );
        Ok(schedule_result)
    }
}

/// [`SweepScheduler::compute_schedule`] with default options.
pub fn compute_schedule(intervals: &Intervals) -> Result<ScheduleResult, SchedulingError>
{
    SweepScheduler::default().compute_schedule(intervals)
}

#[cfg(test)]
mod tests
{
    use itertools::Itertools;
    use proptest::prelude::*;
    use rota_scheduling_environment::Interval;
    use rota_scheduling_environment::IntervalId;
    use rota_scheduling_environment::WorkerId;

    use super::*;
    use crate::assert_functions::assert_no_conflicts;
    use crate::overlap::overlap_depth;

    fn workers(schedule_result: &ScheduleResult) -> Vec<(u64, u64)>
    {
        schedule_result
            .iter()
            .map(|(interval_id, worker_id)| (interval_id.0, worker_id.0))
            .collect()
    }

    #[test]
    fn test_touching_interval_reuses_worker()
    {
        let intervals = Intervals::builder()
            .interval(0, 1, 5)
            .interval(1, 2, 6)
            .interval(2, 5, 8)
            .build();

        let schedule_result = compute_schedule(&intervals).unwrap();

        assert_eq!(workers(&schedule_result), vec![(0, 1), (1, 2), (2, 1)]);
        assert_eq!(schedule_result.worker_count(), 2);
    }

    #[test]
    fn test_touching_pair_shares_single_worker()
    {
        // Listed with the later interval first, the tie-break has to come
        // from the event kind and not from the input order.
        let intervals = Intervals::builder()
            .interval(1, 5, 8)
            .interval(0, 1, 5)
            .build();

        let schedule_result = compute_schedule(&intervals).unwrap();

        assert_eq!(workers(&schedule_result), vec![(0, 1), (1, 1)]);
    }

    #[test]
    fn test_mutually_overlapping_intervals_get_one_worker_each()
    {
        let intervals = Intervals::builder()
            .interval(0, 0, 10)
            .interval(1, 1, 9)
            .interval(2, 2, 8)
            .build();

        let schedule_result = compute_schedule(&intervals).unwrap();

        assert_eq!(workers(&schedule_result), vec![(0, 1), (1, 2), (2, 3)]);
        assert_eq!(schedule_result.worker_count(), 3);
    }

    #[test]
    fn test_disjoint_intervals_reuse_one_worker()
    {
        let intervals = Intervals::builder()
            .interval(0, 0, 1)
            .interval(1, 2, 3)
            .interval(2, 4, 5)
            .build();

        let schedule_result = compute_schedule(&intervals).unwrap();

        assert_eq!(workers(&schedule_result), vec![(0, 1), (1, 1), (2, 1)]);
        assert_eq!(schedule_result.worker_count(), 1);
    }

    #[test]
    fn test_empty_input_gives_empty_schedule()
    {
        let schedule_result = compute_schedule(&Intervals::default()).unwrap();

        assert!(schedule_result.is_empty());
        assert_eq!(schedule_result.worker_count(), 0);
    }

    #[test]
    fn test_empty_input_rejected_when_required()
    {
        let sweep_scheduler = SweepScheduler::new(SchedulerOptions {
            require_non_empty: true,
        });

        assert_eq!(
            sweep_scheduler.compute_schedule(&Intervals::default()),
            Err(SchedulingError::EmptyInput)
        );
    }

    #[test]
    fn test_malformed_interval_is_rejected()
    {
        let intervals = Intervals::builder()
            .interval(0, 1, 5)
            .interval(1, 9, 3)
            .build();

        assert_eq!(
            compute_schedule(&intervals),
            Err(SchedulingError::InvalidInterval {
                id: IntervalId(1),
                start: 9,
                end: 3
            })
        );
    }

    #[test]
    fn test_sparse_ids()
    {
        let intervals = Intervals::builder()
            .interval(7, 0, 4)
            .interval(1000, 2, 6)
            .interval(42, 4, 9)
            .build();

        let schedule_result = compute_schedule(&intervals).unwrap();

        assert_eq!(schedule_result.worker_of(&IntervalId(7)), Some(WorkerId(1)));
        assert_eq!(schedule_result.worker_of(&IntervalId(1000)), Some(WorkerId(2)));
        assert_eq!(schedule_result.worker_of(&IntervalId(42)), Some(WorkerId(1)));
    }

    #[test]
    fn test_idle_worker_released_first_is_reused_first()
    {
        // Worker 2 goes idle at 3 and worker 1 at 4, so the interval starting
        // at 5 gets worker 2 and the one starting at 6 gets worker 1.
        let intervals = Intervals::builder()
            .interval(0, 0, 4)
            .interval(1, 1, 3)
            .interval(2, 5, 7)
            .interval(3, 6, 8)
            .build();

        let schedule_result = compute_schedule(&intervals).unwrap();

        assert_eq!(workers(&schedule_result), vec![(0, 1), (1, 2), (2, 2), (3, 1)]);
    }

    #[test]
    fn test_schedule_is_deterministic()
    {
        let intervals = Intervals::builder()
            .interval(0, 3, 9)
            .interval(1, 3, 9)
            .interval(2, 9, 12)
            .interval(3, 0, 3)
            .interval(4, 1, 10)
            .build();

        let first = compute_schedule(&intervals).unwrap();
        let second = compute_schedule(&intervals).unwrap();

        assert_eq!(first, second);
    }

    #[test]
    fn test_extreme_bounds()
    {
        let intervals = Intervals::builder()
            .interval(0, i64::MIN, i64::MAX)
            .interval(1, i64::MIN, 0)
            .interval(2, 0, i64::MAX)
            .build();

        let schedule_result = compute_schedule(&intervals).unwrap();

        assert_eq!(workers(&schedule_result), vec![(0, 1), (1, 2), (2, 2)]);
        assert_eq!(overlap_depth(&intervals), 2);
    }

    // Ids are drawn sparse and in random order. Repeated ids are dropped as
    // the scheduler rejects them.
    fn arbitrary_intervals() -> impl Strategy<Value = Intervals>
    {
        prop::collection::vec((0u64..100_000, -50i64..50, 1i64..30), 0..60).prop_map(|rows| {
            rows.into_iter()
                .unique_by(|(id, _, _)| *id)
                .map(|(id, start, length)| Interval {
                    id: IntervalId(id),
                    start,
                    end: start + length,
                })
                .collect::<Intervals>()
        })
    }

    proptest! {
        #[test]
        fn test_schedule_is_deterministic_for_any_input(intervals in arbitrary_intervals()) {
            let first = compute_schedule(&intervals).unwrap();
            let second = compute_schedule(&intervals).unwrap();

            prop_assert_eq!(first, second);
        }
    }

    proptest! {
        #[test]
        fn test_worker_count_equals_overlap_depth(intervals in arbitrary_intervals()) {
            let schedule_result = compute_schedule(&intervals).unwrap();

            prop_assert_eq!(schedule_result.worker_count(), overlap_depth(&intervals));
            prop_assert_eq!(schedule_result.len(), intervals.len());
        }
    }

    proptest! {
        #[test]
        fn test_overlapping_intervals_never_share_a_worker(intervals in arbitrary_intervals()) {
            let schedule_result = compute_schedule(&intervals).unwrap();

            for interval_1 in &intervals {
                for interval_2 in &intervals {
                    if interval_1.id != interval_2.id && interval_1.overlaps(interval_2) {
                        prop_assert_ne!(
                            schedule_result.worker_of(&interval_1.id),
                            schedule_result.worker_of(&interval_2.id)
                        );
                    }
                }
            }
            prop_assert!(assert_no_conflicts(&intervals, &schedule_result).is_ok());
        }
    }

    proptest! {
        #[test]
        fn test_worker_ids_are_minted_densely(intervals in arbitrary_intervals()) {
            let schedule_result = compute_schedule(&intervals).unwrap();

            let max_worker_id = schedule_result.max_worker_id().map_or(0, |worker_id| worker_id.0);
            prop_assert_eq!(max_worker_id as usize, schedule_result.worker_count());
        }
    }
}
