use std::sync::Arc;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use bookingdesk::config::AppConfig;
use bookingdesk::handlers;
use bookingdesk::services::ai::gemini::GeminiProvider;
use bookingdesk::services::calendar::google::GoogleCalendarProvider;
use bookingdesk::services::calendar::CalendarProvider;
use bookingdesk::services::delivery::webhook::WebhookDelivery;
use bookingdesk::state::AppState;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let config = AppConfig::from_env();

    let calendar = GoogleCalendarProvider::new(
        config.google_access_token.clone(),
        config.google_calendar_id.clone(),
    );
    if calendar.is_connected() {
        tracing::info!(calendar_id = %config.google_calendar_id, "calendar session configured");
    } else {
        tracing::info!("no calendar session, availability will fail open");
    }
    if config.notify_webhook_url.is_empty() {
        tracing::warn!("NOTIFY_WEBHOOK_URL not set, booking deliveries will be logged and dropped");
    }

    let delivery = WebhookDelivery::new(config.notify_webhook_url.clone());
    let voice = GeminiProvider::new(config.gemini_api_key.clone(), config.gemini_model.clone());

    let state = Arc::new(AppState {
        config: config.clone(),
        calendar: Box::new(calendar),
        delivery: Box::new(delivery),
        voice: Box::new(voice),
    });

    let app = Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/services", get(handlers::services::list_services))
        .route(
            "/api/availability",
            get(handlers::availability::get_availability),
        )
        .route("/api/bookings", post(handlers::booking::create_booking))
        .route("/api/voice/analyze", post(handlers::voice::analyze_voice))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
        .with_state(state);

    let addr = format!("0.0.0.0:{}", config.port);
    tracing::info!("starting server on {addr}");

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
