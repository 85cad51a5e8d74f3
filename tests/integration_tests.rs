use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::routing::{get, post};
use axum::Router;
use chrono::NaiveDateTime;
use tower::ServiceExt;

use bookingdesk::config::AppConfig;
use bookingdesk::handlers;
use bookingdesk::models::{BookingRequest, BusyInterval, VoiceExtraction};
use bookingdesk::services::ai::VoiceProvider;
use bookingdesk::services::calendar::CalendarProvider;
use bookingdesk::services::delivery::DeliveryProvider;
use bookingdesk::state::AppState;

// ── Mock Providers ──

struct MockCalendar {
    connected: bool,
    fetch_fails: bool,
    busy: Vec<BusyInterval>,
    created: Arc<Mutex<Vec<BookingRequest>>>,
}

impl MockCalendar {
    fn disconnected() -> Self {
        Self {
            connected: false,
            fetch_fails: false,
            busy: vec![],
            created: Arc::new(Mutex::new(vec![])),
        }
    }

    fn with_busy(busy: Vec<BusyInterval>) -> Self {
        Self {
            connected: true,
            fetch_fails: false,
            busy,
            created: Arc::new(Mutex::new(vec![])),
        }
    }

    fn failing() -> Self {
        Self {
            connected: true,
            fetch_fails: true,
            busy: vec![],
            created: Arc::new(Mutex::new(vec![])),
        }
    }
}

#[async_trait]
impl CalendarProvider for MockCalendar {
    fn is_connected(&self) -> bool {
        self.connected
    }

    async fn fetch_busy(
        &self,
        _from: NaiveDateTime,
        _to: NaiveDateTime,
    ) -> anyhow::Result<Vec<BusyInterval>> {
        if self.fetch_fails {
            anyhow::bail!("calendar feed unavailable");
        }
        Ok(self.busy.clone())
    }

    async fn create_event(&self, booking: &BookingRequest) -> anyhow::Result<()> {
        self.created.lock().unwrap().push(booking.clone());
        Ok(())
    }
}

struct MockDelivery {
    fail: bool,
    delivered: Arc<Mutex<Vec<BookingRequest>>>,
}

impl MockDelivery {
    fn new(fail: bool) -> Self {
        Self {
            fail,
            delivered: Arc::new(Mutex::new(vec![])),
        }
    }
}

#[async_trait]
impl DeliveryProvider for MockDelivery {
    async fn deliver(&self, booking: &BookingRequest) -> anyhow::Result<()> {
        if self.fail {
            anyhow::bail!("webhook unreachable");
        }
        self.delivered.lock().unwrap().push(booking.clone());
        Ok(())
    }
}

struct MockVoice {
    fail: bool,
}

#[async_trait]
impl VoiceProvider for MockVoice {
    async fn analyze_booking(
        &self,
        _audio: &[u8],
        _mime_type: &str,
    ) -> anyhow::Result<VoiceExtraction> {
        if self.fail {
            anyhow::bail!("transcription API down");
        }
        Ok(VoiceExtraction {
            service: Some("snerydning".to_string()),
            date: Some("10. december".to_string()),
            name: Some("Anders".to_string()),
            summary: "Anders ønsker snerydning d. 10. december.".to_string(),
        })
    }
}

// ── Helpers ──

fn test_config() -> AppConfig {
    AppConfig {
        port: 3000,
        google_access_token: "".to_string(),
        google_calendar_id: "primary".to_string(),
        gemini_api_key: "".to_string(),
        gemini_model: "gemini-2.5-flash".to_string(),
        notify_webhook_url: "http://localhost/webhook".to_string(),
    }
}

fn test_state(
    calendar: MockCalendar,
    delivery: MockDelivery,
    voice: MockVoice,
) -> Arc<AppState> {
    Arc::new(AppState {
        config: test_config(),
        calendar: Box::new(calendar),
        delivery: Box::new(delivery),
        voice: Box::new(voice),
    })
}

fn test_app(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::services::list_services))
        .route(
            "/api/availability",
            get(handlers::availability::get_availability),
        )
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/voice/analyze", post(handlers::voice::analyze_voice))
        .with_state(state)
}

async fn json_body(res: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

fn busy(start: &str, end: &str) -> BusyInterval {
    let parse = |s| NaiveDateTime::parse_from_str(s, "%Y-%m-%d %H:%M").unwrap();
    BusyInterval {
        start: parse(start),
        end: parse(end),
    }
}

fn booking_json() -> serde_json::Value {
    serde_json::json!({
        "service": "snerydning",
        "name": "Anders Jensen",
        "email": "anders@example.com",
        "phone": "+45 22 65 19 96",
        "message": "Indkørsel og fortov",
        "date": "2025-12-10",
        "time_slot": "09:00 - 09:30"
    })
}

fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn get_req(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ── Health & catalogue ──

#[tokio::test]
async fn test_health() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let res = app.oneshot(get_req("/health")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_service_catalogue() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let res = app.oneshot(get_req("/api/services")).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    let services = body.as_array().unwrap();
    assert_eq!(services.len(), 10);
    assert_eq!(services[0]["id"], "tømrer");
    assert_eq!(services[9]["id"], "andet");
    assert_eq!(services[3]["title"], "Snerydning");
}

// ── Availability ──

#[tokio::test]
async fn test_availability_without_calendar_fails_open() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let res = app
        .oneshot(get_req("/api/availability?date=2025-12-10"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["calendar_synced"], false);
    let slots = body["slots"].as_array().unwrap();
    assert_eq!(slots.len(), 16);
    assert!(slots.iter().all(|s| s["available"] == true));
}

#[tokio::test]
async fn test_availability_marks_busy_slot() {
    let calendar =
        MockCalendar::with_busy(vec![busy("2025-12-10 09:00", "2025-12-10 09:30")]);
    let app = test_app(test_state(
        calendar,
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let res = app
        .oneshot(get_req("/api/availability?date=2025-12-10"))
        .await
        .unwrap();
    let body = json_body(res).await;
    assert_eq!(body["calendar_synced"], true);

    let slots = body["slots"].as_array().unwrap();
    let available = |label: &str| {
        slots
            .iter()
            .find(|s| s["label"] == label)
            .map(|s| s["available"] == true)
            .unwrap()
    };
    assert!(!available("09:00 - 09:30"));
    assert!(available("08:00 - 08:30"));
    assert!(available("09:30 - 10:00"));
}

#[tokio::test]
async fn test_availability_fetch_error_fails_open() {
    let app = test_app(test_state(
        MockCalendar::failing(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let res = app
        .oneshot(get_req("/api/availability?date=2025-12-10"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["calendar_synced"], false);
    let slots = body["slots"].as_array().unwrap();
    assert!(slots.iter().all(|s| s["available"] == true));
}

#[tokio::test]
async fn test_availability_rejects_bad_date() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let res = app
        .oneshot(get_req("/api/availability?date=10-12-2025"))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}

// ── Booking submission ──

#[tokio::test]
async fn test_booking_delivers_and_creates_event() {
    let calendar = MockCalendar::with_busy(vec![]);
    let created = Arc::clone(&calendar.created);
    let delivery = MockDelivery::new(false);
    let delivered = Arc::clone(&delivery.delivered);

    let app = test_app(test_state(calendar, delivery, MockVoice { fail: false }));

    let res = app
        .oneshot(post_json("/api/bookings", &booking_json()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["success"], true);

    let delivered = delivered.lock().unwrap();
    assert_eq!(delivered.len(), 1);
    assert_eq!(delivered[0].name, "Anders Jensen");
    assert_eq!(delivered[0].time_slot, "09:00 - 09:30");
    assert_eq!(created.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn test_booking_optimistic_when_delivery_fails() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(true),
        MockVoice { fail: false },
    ));

    let res = app
        .oneshot(post_json("/api/bookings", &booking_json()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["success"], true);
}

#[tokio::test]
async fn test_booking_skips_calendar_when_disconnected() {
    let calendar = MockCalendar::disconnected();
    let created = Arc::clone(&calendar.created);

    let app = test_app(test_state(
        calendar,
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let res = app
        .oneshot(post_json("/api/bookings", &booking_json()))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    assert!(created.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_rejects_missing_required_field() {
    let delivery = MockDelivery::new(false);
    let delivered = Arc::clone(&delivery.delivered);

    let app = test_app(test_state(
        MockCalendar::disconnected(),
        delivery,
        MockVoice { fail: false },
    ));

    let mut body = booking_json();
    body["email"] = serde_json::json!("");
    let res = app.oneshot(post_json("/api/bookings", &body)).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
    assert!(delivered.lock().unwrap().is_empty());
}

#[tokio::test]
async fn test_booking_rejects_missing_slot() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let mut body = booking_json();
    body["time_slot"] = serde_json::json!("");
    let res = app.oneshot(post_json("/api/bookings", &body)).await.unwrap();

    assert_eq!(res.status(), StatusCode::UNPROCESSABLE_ENTITY);
}

#[tokio::test]
async fn test_booking_unknown_service_falls_back_to_other() {
    let delivery = MockDelivery::new(false);
    let delivered = Arc::clone(&delivery.delivered);

    let app = test_app(test_state(
        MockCalendar::disconnected(),
        delivery,
        MockVoice { fail: false },
    ));

    let mut body = booking_json();
    body["service"] = serde_json::json!("vinduespudsning");
    let res = app.oneshot(post_json("/api/bookings", &body)).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let delivered = delivered.lock().unwrap();
    assert_eq!(delivered[0].service.id(), "andet");
}

// ── Voice analysis ──

#[tokio::test]
async fn test_voice_analysis_returns_extraction() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let req = Request::builder()
        .method("POST")
        .uri("/api/voice/analyze")
        .header("Content-Type", "audio/webm")
        .body(Body::from(vec![0u8; 64]))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["service"], "snerydning");
    assert_eq!(body["name"], "Anders");
}

#[tokio::test]
async fn test_voice_analysis_degrades_when_provider_fails() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: true },
    ));

    let req = Request::builder()
        .method("POST")
        .uri("/api/voice/analyze")
        .header("Content-Type", "audio/webm")
        .body(Body::from(vec![0u8; 64]))
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(body["service"], serde_json::Value::Null);
    assert_eq!(
        body["summary"],
        "Kunne ikke forstå beskeden. Prøv venligst igen."
    );
}

#[tokio::test]
async fn test_voice_analysis_empty_body_is_unrecognized() {
    let app = test_app(test_state(
        MockCalendar::disconnected(),
        MockDelivery::new(false),
        MockVoice { fail: false },
    ));

    let req = Request::builder()
        .method("POST")
        .uri("/api/voice/analyze")
        .body(Body::empty())
        .unwrap();

    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);

    let body = json_body(res).await;
    assert_eq!(
        body["summary"],
        "Kunne ikke forstå beskeden. Prøv venligst igen."
    );
}
