use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{day_slots, BusyInterval, TimeSlot};

/// One catalogue slot with its availability flag for a particular day.
#[derive(Debug, Clone, Serialize)]
pub struct SlotAvailability {
    pub label: String,
    pub available: bool,
}

/// A slot is available unless it intersects a busy interval on a half-open
/// basis. An empty busy list means every slot is available — that is also
/// the fail-open path when no calendar is connected.
pub fn slot_is_available(date: NaiveDate, slot: &TimeSlot, busy: &[BusyInterval]) -> bool {
    let (start, end) = slot.on(date);
    !busy.iter().any(|b| b.overlaps(start, end))
}

/// Marks the full day catalogue busy/free against the reported intervals.
pub fn day_availability(date: NaiveDate, busy: &[BusyInterval]) -> Vec<SlotAvailability> {
    day_slots()
        .iter()
        .map(|slot| SlotAvailability {
            label: slot.label(),
            available: slot_is_available(date, slot, busy),
        })
        .collect()
}
