use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::{BookingRequest, ServiceKind, TimeSlot, VoiceExtraction};
use crate::services::calendar::CalendarProvider;
use crate::services::delivery::DeliveryProvider;

/// Raw form fields as the booking widget submits them. Everything arrives
/// as strings; validation happens in `BookingBuilder::build`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BookingForm {
    pub service: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub date: String,
    pub time_slot: String,
}

impl BookingForm {
    fn is_empty(&self) -> bool {
        self.service.is_empty()
            && self.name.is_empty()
            && self.email.is_empty()
            && self.phone.is_empty()
            && self.message.is_empty()
            && self.date.is_empty()
            && self.time_slot.is_empty()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Empty,
    Editing,
    Submitted,
}

/// User-input problems surfaced synchronously, before any external call.
#[derive(Debug, thiserror::Error)]
pub enum ValidationError {
    #[error("required field missing: {0}")]
    MissingField(&'static str),

    #[error("no date or time slot chosen")]
    NoSlotChosen,

    #[error("invalid date: {0}")]
    InvalidDate(String),

    #[error("invalid time slot: {0}")]
    InvalidSlot(String),
}

/// Assembles one booking attempt from form fields plus an optional
/// AI-extracted partial record, then hands the result to the delivery and
/// calendar collaborators. Per attempt: `Empty → Editing → Submitted →
/// Empty`; the reset happens regardless of delivery outcome.
pub struct BookingBuilder {
    form: BookingForm,
    state: FormState,
}

impl Default for BookingBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl BookingBuilder {
    pub fn new() -> Self {
        Self {
            form: BookingForm::default(),
            state: FormState::Empty,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn form(&self) -> &BookingForm {
        &self.form
    }

    /// Pre-fills from a voice extraction. The service guess is resolved
    /// against the catalogue (falling back to "andet"), the summary becomes
    /// the message text.
    pub fn apply_extraction(&mut self, extraction: &VoiceExtraction) {
        if let Some(service) = extraction.service.as_deref() {
            self.form.service = ServiceKind::resolve(service).id().to_string();
        }
        if let Some(name) = extraction.name.as_deref() {
            self.form.name = name.to_string();
        }
        if !extraction.summary.is_empty() {
            self.form.message = extraction.summary.clone();
        }
        if !self.form.is_empty() {
            self.state = FormState::Editing;
        }
    }

    /// Applies explicit form fields; non-empty values override whatever the
    /// extraction pre-filled.
    pub fn apply_fields(&mut self, fields: BookingForm) {
        if !fields.service.is_empty() {
            self.form.service = fields.service;
        }
        if !fields.name.is_empty() {
            self.form.name = fields.name;
        }
        if !fields.email.is_empty() {
            self.form.email = fields.email;
        }
        if !fields.phone.is_empty() {
            self.form.phone = fields.phone;
        }
        if !fields.message.is_empty() {
            self.form.message = fields.message;
        }
        if !fields.date.is_empty() {
            self.form.date = fields.date;
        }
        if !fields.time_slot.is_empty() {
            self.form.time_slot = fields.time_slot;
        }
        if !self.form.is_empty() {
            self.state = FormState::Editing;
        }
    }

    /// Validates the current fields into a submittable request. Required
    /// fields must be non-empty and a date plus slot must be chosen; no
    /// deeper format validation of email or phone happens here.
    pub fn build(&self) -> Result<BookingRequest, ValidationError> {
        if self.form.name.trim().is_empty() {
            return Err(ValidationError::MissingField("name"));
        }
        if self.form.email.trim().is_empty() {
            return Err(ValidationError::MissingField("email"));
        }
        if self.form.phone.trim().is_empty() {
            return Err(ValidationError::MissingField("phone"));
        }
        if self.form.date.is_empty() || self.form.time_slot.is_empty() {
            return Err(ValidationError::NoSlotChosen);
        }

        let date = NaiveDate::parse_from_str(&self.form.date, "%Y-%m-%d")
            .map_err(|_| ValidationError::InvalidDate(self.form.date.clone()))?;
        let slot = TimeSlot::from_label(&self.form.time_slot)
            .map_err(|_| ValidationError::InvalidSlot(self.form.time_slot.clone()))?;

        Ok(BookingRequest {
            id: Uuid::new_v4(),
            service: ServiceKind::resolve(&self.form.service),
            name: self.form.name.trim().to_string(),
            email: self.form.email.trim().to_string(),
            phone: self.form.phone.trim().to_string(),
            message: self.form.message.clone(),
            date,
            time_slot: slot.label(),
        })
    }

    /// Submits the attempt. Calendar sync and delivery failures are logged
    /// but never surfaced; the acknowledgment stays optimistic and the form
    /// always comes back empty.
    pub async fn submit(
        &mut self,
        calendar: &dyn CalendarProvider,
        delivery: &dyn DeliveryProvider,
    ) -> Result<BookingRequest, ValidationError> {
        let booking = self.build()?;
        self.state = FormState::Submitted;

        if calendar.is_connected() {
            if let Err(e) = calendar.create_event(&booking).await {
                tracing::warn!(error = %e, booking_id = %booking.id, "calendar event creation failed");
            }
        }

        if let Err(e) = delivery.deliver(&booking).await {
            tracing::warn!(error = %e, booking_id = %booking.id, "booking delivery failed");
        }

        self.reset();
        Ok(booking)
    }

    pub fn reset(&mut self) {
        self.form = BookingForm::default();
        self.state = FormState::Empty;
    }
}
