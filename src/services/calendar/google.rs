use anyhow::Context;
use async_trait::async_trait;
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::Deserialize;
use serde_json::json;

use super::CalendarProvider;
use crate::models::{BookingRequest, BusyInterval};

pub struct GoogleCalendarProvider {
    access_token: String,
    calendar_id: String,
    client: reqwest::Client,
}

impl GoogleCalendarProvider {
    pub fn new(access_token: String, calendar_id: String) -> Self {
        Self {
            access_token,
            calendar_id,
            client: reqwest::Client::new(),
        }
    }

    fn events_url(&self) -> String {
        format!(
            "https://www.googleapis.com/calendar/v3/calendars/{}/events",
            self.calendar_id
        )
    }
}

#[derive(Deserialize)]
struct EventList {
    #[serde(default)]
    items: Vec<Event>,
}

#[derive(Deserialize)]
struct Event {
    start: EventTime,
    end: EventTime,
}

/// Google events carry either a timed `dateTime` or an all-day `date`.
#[derive(Deserialize, Default)]
struct EventTime {
    #[serde(rename = "dateTime")]
    date_time: Option<String>,
    date: Option<String>,
}

impl EventTime {
    fn to_naive(&self) -> Option<NaiveDateTime> {
        if let Some(dt) = &self.date_time {
            return chrono::DateTime::parse_from_rfc3339(dt)
                .ok()
                .map(|d| d.naive_local());
        }
        // All-day bounds are dates; Google's end date is already exclusive,
        // so midnight keeps the interval half-open.
        self.date
            .as_deref()
            .and_then(|d| NaiveDate::parse_from_str(d, "%Y-%m-%d").ok())
            .map(|d| d.and_time(NaiveTime::MIN))
    }
}

#[async_trait]
impl CalendarProvider for GoogleCalendarProvider {
    fn is_connected(&self) -> bool {
        !self.access_token.is_empty()
    }

    async fn fetch_busy(
        &self,
        from: NaiveDateTime,
        to: NaiveDateTime,
    ) -> anyhow::Result<Vec<BusyInterval>> {
        let resp = self
            .client
            .get(self.events_url())
            .bearer_auth(&self.access_token)
            .query(&[
                ("timeMin", format!("{}Z", from.format("%Y-%m-%dT%H:%M:%S"))),
                ("timeMax", format!("{}Z", to.format("%Y-%m-%dT%H:%M:%S"))),
                ("singleEvents", "true".to_string()),
                ("orderBy", "startTime".to_string()),
                ("showDeleted", "false".to_string()),
            ])
            .send()
            .await
            .context("failed to call Google Calendar events.list")?
            .error_for_status()
            .context("Google Calendar events.list returned error")?;

        let list: EventList = resp
            .json()
            .await
            .context("failed to parse Google Calendar event list")?;

        let busy = list
            .items
            .iter()
            .filter_map(|e| {
                let start = e.start.to_naive()?;
                let end = e.end.to_naive()?;
                Some(BusyInterval { start, end })
            })
            .collect();

        Ok(busy)
    }

    async fn create_event(&self, booking: &BookingRequest) -> anyhow::Result<()> {
        let slot = booking.slot().context("booking has no parseable slot")?;
        let (start, end) = slot.on(booking.date);

        let event = json!({
            "summary": format!("Lyth Service: {}", booking.service.id()),
            "location": "Kunde Lokation",
            "description": format!(
                "Kunde: {}\nEmail: {}\nTlf: {}\nBesked: {}",
                booking.name, booking.email, booking.phone, booking.message
            ),
            "start": {
                "dateTime": start.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "timeZone": "Europe/Copenhagen",
            },
            "end": {
                "dateTime": end.format("%Y-%m-%dT%H:%M:%S").to_string(),
                "timeZone": "Europe/Copenhagen",
            },
        });

        self.client
            .post(self.events_url())
            .bearer_auth(&self.access_token)
            .json(&event)
            .send()
            .await
            .context("failed to call Google Calendar events.insert")?
            .error_for_status()
            .context("Google Calendar events.insert returned error")?;

        Ok(())
    }
}
