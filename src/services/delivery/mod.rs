pub mod webhook;

use async_trait::async_trait;

use crate::models::BookingRequest;

/// Seam to the notification endpoint that forwards booking requests to the
/// back office. Fire-and-forget from the booking flow's perspective.
#[async_trait]
pub trait DeliveryProvider: Send + Sync {
    async fn deliver(&self, booking: &BookingRequest) -> anyhow::Result<()>;
}
