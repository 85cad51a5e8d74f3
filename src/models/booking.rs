use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::service::ServiceKind;
use super::slot::TimeSlot;

/// A validated booking request, ready to hand to the delivery and calendar
/// collaborators. Built once per attempt and discarded after submission;
/// nothing is persisted locally.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingRequest {
    pub id: Uuid,
    pub service: ServiceKind,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub message: String,
    pub date: NaiveDate,
    pub time_slot: String,
}

impl BookingRequest {
    /// The chosen slot, parsed from its label.
    pub fn slot(&self) -> anyhow::Result<TimeSlot> {
        TimeSlot::from_label(&self.time_slot)
    }
}
