pub mod google;

use async_trait::async_trait;
use chrono::NaiveDateTime;

use crate::models::{BookingRequest, BusyInterval};

/// Seam to the external calendar. The session (access token) lives inside
/// the provider value held by `AppState`, never in module-level state.
#[async_trait]
pub trait CalendarProvider: Send + Sync {
    /// Whether a calendar session is established. When false, callers skip
    /// the feed entirely and availability fails open.
    fn is_connected(&self) -> bool;

    /// Busy intervals overlapping `[from, to)`.
    async fn fetch_busy(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> anyhow::Result<Vec<BusyInterval>>;

    /// Creates a calendar entry for a confirmed booking. Failure here is
    /// non-fatal to the booking flow.
    async fn create_event(&self, booking: &BookingRequest) -> anyhow::Result<()>;
}
