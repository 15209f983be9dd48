use std::collections::BTreeMap;
use std::collections::btree_map;

use itertools::Itertools;
use rota_scheduling_environment::IntervalId;
use rota_scheduling_environment::WorkerId;
use serde::Deserialize;
use serde::Serialize;

/// Worker assignment per interval id. Keyed explicitly by id, so sparse and
/// non contiguous ids are fine.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct ScheduleResult
{
    assignments: BTreeMap<IntervalId, WorkerId>,
}

impl ScheduleResult
{
    pub fn new() -> Self
    {
        Self::default()
    }

    pub(crate) fn assign(&mut self, interval_id: IntervalId, worker_id: WorkerId)
    {
        self.assignments.insert(interval_id, worker_id);
    }

    pub fn worker_of(&self, interval_id: &IntervalId) -> Option<WorkerId>
    {
        self.assignments.get(interval_id).copied()
    }

    pub fn len(&self) -> usize
    {
        self.assignments.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.assignments.is_empty()
    }

    /// Assignments ordered by interval id.
    pub fn iter(&self) -> btree_map::Iter<'_, IntervalId, WorkerId>
    {
        self.assignments.iter()
    }

    /// Number of distinct workers used. This is the value the scheduler
    /// minimizes.
    pub fn worker_count(&self) -> usize
    {
        self.assignments.values().unique().count()
    }

    /// Largest worker id handed out. Equal to `worker_count` for every
    /// result of the sweep, as workers are minted densely from 1.
    pub fn max_worker_id(&self) -> Option<WorkerId>
    {
        self.assignments.values().max().copied()
    }

    /// The intervals each worker covers, in interval id order.
    pub fn intervals_per_worker(&self) -> BTreeMap<WorkerId, Vec<IntervalId>>
    {
        let mut intervals_per_worker: BTreeMap<WorkerId, Vec<IntervalId>> = BTreeMap::new();
        for (interval_id, worker_id) in &self.assignments {
            intervals_per_worker
                .entry(*worker_id)
                .or_default()
                .push(*interval_id);
        }
        intervals_per_worker
    }
}

impl FromIterator<(IntervalId, WorkerId)> for ScheduleResult
{
    fn from_iter<T: IntoIterator<Item = (IntervalId, WorkerId)>>(iter: T) -> Self
    {
        ScheduleResult {
            assignments: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ScheduleResult
{
    type IntoIter = btree_map::Iter<'a, IntervalId, WorkerId>;
    type Item = (&'a IntervalId, &'a WorkerId);

    fn into_iter(self) -> Self::IntoIter
    {
        self.assignments.iter()
    }
}
