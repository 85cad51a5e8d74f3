use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

/// Business hours are fixed: bookable slots run 08:00-16:00 every day.
pub const OPEN_HOUR: u32 = 8;
pub const CLOSE_HOUR: u32 = 16;
pub const SLOT_MINUTES: u32 = 30;

/// A half-open `[start, end)` interval of fixed width within a single
/// business day. Identified by its label, e.g. `"09:00 - 09:30"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeSlot {
    pub start: NaiveTime,
    pub end: NaiveTime,
}

impl TimeSlot {
    pub fn label(&self) -> String {
        format!(
            "{} - {}",
            self.start.format("%H:%M"),
            self.end.format("%H:%M")
        )
    }

    /// Parses a `"HH:MM - HH:MM"` label back into a slot.
    pub fn from_label(label: &str) -> anyhow::Result<Self> {
        let (start, end) = label
            .split_once(" - ")
            .ok_or_else(|| anyhow::anyhow!("invalid slot label: {label}"))?;
        let start = NaiveTime::parse_from_str(start, "%H:%M")
            .map_err(|_| anyhow::anyhow!("invalid start time in: {label}"))?;
        let end = NaiveTime::parse_from_str(end, "%H:%M")
            .map_err(|_| anyhow::anyhow!("invalid end time in: {label}"))?;
        if end <= start {
            anyhow::bail!("slot end must be after start: {label}");
        }
        Ok(Self { start, end })
    }

    /// Anchors the slot to a calendar date.
    pub fn on(&self, date: NaiveDate) -> (NaiveDateTime, NaiveDateTime) {
        (date.and_time(self.start), date.and_time(self.end))
    }
}

/// The fixed slot catalogue for a business day: every 30-minute boundary
/// from 08:00 up to (not including) 16:00. Identical for every date.
pub fn day_slots() -> Vec<TimeSlot> {
    let mut slots = Vec::with_capacity(((CLOSE_HOUR - OPEN_HOUR) * 60 / SLOT_MINUTES) as usize);
    let mut minute = OPEN_HOUR * 60;
    while minute < CLOSE_HOUR * 60 {
        let start = NaiveTime::from_num_seconds_from_midnight_opt(minute * 60, 0);
        let end = NaiveTime::from_num_seconds_from_midnight_opt((minute + SLOT_MINUTES) * 60, 0);
        if let (Some(start), Some(end)) = (start, end) {
            slots.push(TimeSlot { start, end });
        }
        minute += SLOT_MINUTES;
    }
    slots
}
