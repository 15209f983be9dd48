use std::fmt;

use serde::Deserialize;
use serde::Serialize;

/// Opaque worker identity. Workers are fungible, the number only tells them
/// apart. Ids are minted from 1 in the order the sweep needs them.
#[derive(Serialize, Deserialize, Copy, Clone, PartialOrd, Ord, Hash, PartialEq, Eq, Debug)]
#[serde(transparent)]
pub struct WorkerId(pub u64);

impl WorkerId
{
    /// The first worker a sweep mints. Smaller ids are never assigned.
    pub const FIRST: WorkerId = WorkerId(1);
}

impl fmt::Display for WorkerId
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
    {
        write!(f, "{}", self.0)
    }
}
