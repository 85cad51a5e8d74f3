use std::sync::Arc;

use axum::extract::{Query, State};
use axum::Json;
use chrono::{Duration, NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::services::availability::{day_availability, SlotAvailability};
use crate::state::AppState;

#[derive(Deserialize)]
pub struct AvailabilityQuery {
    pub date: String,
}

#[derive(Serialize)]
pub struct AvailabilityResponse {
    pub date: NaiveDate,
    /// Whether the busy-interval feed was actually consulted. False means
    /// the flags below are the fail-open default.
    pub calendar_synced: bool,
    pub slots: Vec<SlotAvailability>,
}

/// Slot availability for one day. Calendar trouble of any kind degrades to
/// "not connected": every slot reports available rather than failing the
/// booking flow.
pub async fn get_availability(
    State(state): State<Arc<AppState>>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let date = NaiveDate::parse_from_str(&query.date, "%Y-%m-%d")
        .map_err(|_| AppError::BadRequest(format!("invalid date: {}", query.date)))?;

    let day_start = date.and_time(NaiveTime::MIN);
    let day_end = day_start + Duration::days(1);

    let (busy, calendar_synced) = if state.calendar.is_connected() {
        match state.calendar.fetch_busy(day_start, day_end).await {
            Ok(busy) => (busy, true),
            Err(e) => {
                tracing::warn!(error = %e, %date, "busy-interval fetch failed, failing open");
                (vec![], false)
            }
        }
    } else {
        (vec![], false)
    };

    Ok(Json(AvailabilityResponse {
        date,
        calendar_synced,
        slots: day_availability(date, &busy),
    }))
}
