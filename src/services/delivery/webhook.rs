use anyhow::Context;
use async_trait::async_trait;

use super::DeliveryProvider;
use crate::models::BookingRequest;

pub struct WebhookDelivery {
    url: String,
    client: reqwest::Client,
}

impl WebhookDelivery {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl DeliveryProvider for WebhookDelivery {
    async fn deliver(&self, booking: &BookingRequest) -> anyhow::Result<()> {
        if self.url.is_empty() {
            anyhow::bail!("delivery webhook URL not configured");
        }

        let resp = self
            .client
            .post(&self.url)
            .json(booking)
            .send()
            .await
            .context("failed to call delivery webhook")?
            .error_for_status()
            .context("delivery webhook returned error")?;

        // Only the success flag matters; an endpoint replying with a body
        // that explicitly says success=false counts as a failed delivery.
        if let Ok(body) = resp.json::<serde_json::Value>().await {
            if body.get("success").and_then(|v| v.as_bool()) == Some(false) {
                anyhow::bail!("delivery webhook reported failure");
            }
        }

        Ok(())
    }
}
