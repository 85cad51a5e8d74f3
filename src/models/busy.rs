use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// An externally sourced `[start, end)` commitment during which booking is
/// disallowed. Owned by the calendar collaborator, read-only here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BusyInterval {
    pub start: NaiveDateTime,
    pub end: NaiveDateTime,
}

impl BusyInterval {
    /// Half-open intersection test against a candidate `[start, end)` range.
    /// Adjacent intervals (one ending exactly when the other starts) do not
    /// overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start < self.end && self.start < end
    }
}
