use serde::Deserialize;
use serde::Serialize;
use strum_macros::Display;
use strum_macros::EnumIter;

use crate::interval::IntervalId;

/// Which side of an interval a [`BoundaryEvent`] marks.
///
/// The variant order is load bearing: `End` compares less than `Start`, so
/// sorting by `(time, kind)` frees a worker before a touching interval
/// claims one.
#[derive(Serialize, Deserialize, Display, EnumIter, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub enum BoundaryKind
{
    End,
    Start,
}

#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Debug)]
pub struct BoundaryEvent
{
    pub owner: IntervalId,
    pub time: i64,
    pub kind: BoundaryKind,
}

impl BoundaryEvent
{
    pub fn new(owner: IntervalId, time: i64, kind: BoundaryKind) -> Self
    {
        Self { owner, time, kind }
    }

    /// Key for a stable sort. The owner is deliberately left out so that
    /// events with the same time and kind keep their input order.
    pub fn sort_key(&self) -> (i64, BoundaryKind)
    {
        (self.time, self.kind)
    }
}

#[cfg(test)]
mod tests
{
    use strum::IntoEnumIterator;

    use super::*;

    #[test]
    fn test_end_sorts_before_start()
    {
        let kinds: Vec<BoundaryKind> = BoundaryKind::iter().collect();

        assert_eq!(kinds, vec![BoundaryKind::End, BoundaryKind::Start]);
        assert!(BoundaryKind::End < BoundaryKind::Start);
    }

    #[test]
    fn test_sort_key_orders_by_time_then_kind()
    {
        let start = BoundaryEvent::new(IntervalId(1), 5, BoundaryKind::Start);
        let end = BoundaryEvent::new(IntervalId(0), 5, BoundaryKind::End);
        let earlier = BoundaryEvent::new(IntervalId(2), 4, BoundaryKind::Start);

        let mut events = vec![start, end, earlier];
        events.sort_by_key(BoundaryEvent::sort_key);

        assert_eq!(events, vec![earlier, end, start]);
    }

    #[test]
    fn test_boundary_kind_display()
    {
        assert_eq!(BoundaryKind::Start.to_string(), "Start");
        assert_eq!(BoundaryKind::End.to_string(), "End");
    }
}
