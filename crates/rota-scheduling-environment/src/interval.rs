use std::fmt;

use anyhow::Result;
use anyhow::ensure;
use serde::Deserialize;
use serde::Serialize;

use crate::boundary_event::BoundaryEvent;
use crate::boundary_event::BoundaryKind;

/// Caller supplied key of an [`Interval`]. The ids do not have to be dense
/// or contiguous, they only have to be unique within one scheduling call.
#[derive(Serialize, Deserialize, Copy, Clone, PartialOrd, Ord, Hash, PartialEq, Eq, Debug, Default)]
#[serde(transparent)]
pub struct IntervalId(pub u64);

impl fmt::Display for IntervalId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}

/// Half open time span `[start, end)` that has to be covered by exactly one
/// worker. Two intervals that only share an endpoint do not overlap.
#[derive(Serialize, Deserialize, Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct Interval
{
    pub id: IntervalId,
    pub start: i64,
    pub end: i64,
}

impl Interval
{
    pub fn new(id: IntervalId, start: i64, end: i64) -> Result<Self>
    {
        ensure!(
            start < end,
            "Interval {} has to start before it ends, got start: {} and end: {}",
            id,
            start,
            end
        );
        Ok(Self { id, start, end })
    }

    pub fn is_well_formed(&self) -> bool
    {
        self.start < self.end
    }

    /// Strict overlap. Sharing only an endpoint is not an overlap.
    pub fn overlaps(&self, other: &Interval) -> bool
    {
        self.start < other.end && other.start < self.end
    }

    pub fn start_event(&self) -> BoundaryEvent
    {
        BoundaryEvent::new(self.id, self.start, BoundaryKind::Start)
    }

    pub fn end_event(&self) -> BoundaryEvent
    {
        BoundaryEvent::new(self.id, self.end, BoundaryKind::End)
    }
}

impl fmt::Display for Interval
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "Interval({}: [{}, {}))", self.id, self.start, self.end)
    }
}

/// The collection handed to the scheduler. Insertion order is kept as it
/// decides the order of boundary events with identical time and kind.
#[derive(Serialize, Deserialize, Clone, PartialEq, Eq, Debug, Default)]
pub struct Intervals
{
    pub inner: Vec<Interval>,
}

impl Intervals
{
    pub fn new(inner: Vec<Interval>) -> Self
    {
        Self { inner }
    }

    pub fn builder() -> IntervalsBuilder
    {
        IntervalsBuilder::default()
    }

    pub fn len(&self) -> usize
    {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool
    {
        self.inner.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Interval>
    {
        self.inner.iter()
    }
}

impl From<Vec<Interval>> for Intervals
{
    fn from(value: Vec<Interval>) -> Self
    {
        Intervals { inner: value }
    }
}

impl FromIterator<Interval> for Intervals
{
    fn from_iter<T: IntoIterator<Item = Interval>>(iter: T) -> Self
    {
        Intervals {
            inner: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Intervals
{
    type IntoIter = std::slice::Iter<'a, Interval>;
    type Item = &'a Interval;

    fn into_iter(self) -> Self::IntoIter
    {
        self.inner.iter()
    }
}

impl IntoIterator for Intervals
{
    type IntoIter = std::vec::IntoIter<Interval>;
    type Item = Interval;

    fn into_iter(self) -> Self::IntoIter
    {
        self.inner.into_iter()
    }
}

#[derive(Default)]
pub struct IntervalsBuilder
{
    inner: Vec<Interval>,
}

impl IntervalsBuilder
{
    pub fn build(self) -> Intervals
    {
        Intervals { inner: self.inner }
    }

    // The builder does not validate. Malformed intervals are rejected by the
    // scheduler, which is what the collaborators rely on.
    pub fn interval(mut self, id: u64, start: i64, end: i64) -> Self
    {
        self.inner.push(Interval {
            id: IntervalId(id),
            start,
            end,
        });
        self
    }
}
