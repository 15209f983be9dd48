use rota_scheduling_environment::Intervals;

/// Maximum number of intervals active at the same instant.
///
/// This is a lower bound for any valid schedule and the exact worker count of
/// the sweep. It is computed with a plain counter, independent of the idle
/// pool, so it can serve as a reference for the scheduler. Intervals are
/// assumed to be well formed.
pub fn overlap_depth(intervals: &Intervals) -> usize
{
    // -1 sorts before +1, so touching intervals are not counted as overlapping.
    let mut deltas: Vec<(i64, i64)> = intervals
        .iter()
        .flat_map(|interval| [(interval.start, 1), (interval.end, -1)])
        .collect();
    deltas.sort_unstable();

    let mut active: i64 = 0;
    let mut depth: i64 = 0;
    for (_, delta) in deltas {
        active += delta;
        depth = depth.max(active);
    }
    depth as usize
}
