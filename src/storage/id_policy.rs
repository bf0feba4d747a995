use serde::{Deserialize, Serialize};
use std::fmt;

/// How a collection picks the id of a newly appended record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IdPolicy {
    /// `len + 1`. After a deletion this can hand out an id that is still in
    /// use further down the collection.
    #[default]
    Length,
    /// One past the highest id the collection has ever held. Deleted ids are
    /// never handed out again.
    Monotonic,
}

impl IdPolicy {
    pub fn next_id(self, len: usize, highest_seen: i32) -> i32 {
        match self {
            IdPolicy::Length => i32::try_from(len).unwrap_or(i32::MAX).saturating_add(1),
            IdPolicy::Monotonic => highest_seen.saturating_add(1),
        }
    }
}

impl fmt::Display for IdPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            IdPolicy::Length => write!(f, "length"),
            IdPolicy::Monotonic => write!(f, "monotonic"),
        }
    }
}
