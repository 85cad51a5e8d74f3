use std::sync::Arc;

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use uuid::Uuid;

use crate::errors::AppError;
use crate::services::booking::{BookingBuilder, BookingForm};
use crate::state::AppState;

#[derive(Serialize)]
pub struct BookingAck {
    pub success: bool,
    pub id: Uuid,
    pub message: String,
}

/// Submits a booking attempt. Validation problems come back synchronously
/// as 422; collaborator failures are logged inside the builder and the
/// acknowledgment stays optimistic.
pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(form): Json<BookingForm>,
) -> Result<Json<BookingAck>, AppError> {
    let mut builder = BookingBuilder::new();
    builder.apply_fields(form);

    let booking = builder
        .submit(state.calendar.as_ref(), state.delivery.as_ref())
        .await?;

    tracing::info!(
        booking_id = %booking.id,
        service = booking.service.id(),
        date = %booking.date,
        slot = %booking.time_slot,
        "booking request submitted"
    );

    Ok(Json(BookingAck {
        success: true,
        id: booking.id,
        message: format!(
            "Booking anmodning sendt for {}! Tak fordi du valgte Lyth Ejendomsservice.",
            booking.service.title()
        ),
    }))
}
