use std::sync::Arc;

use axum::body::Bytes;
use axum::extract::State;
use axum::http::{header, HeaderMap};
use axum::Json;

use crate::models::VoiceExtraction;
use crate::state::AppState;

/// Analyzes a recorded voice booking request. The body is the raw audio;
/// the content type tells the transcription collaborator what it is.
/// Transcription trouble never becomes an HTTP error — the customer just
/// gets the "could not understand" summary and can retry.
pub async fn analyze_voice(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<VoiceExtraction> {
    let mime_type = headers
        .get(header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .unwrap_or("audio/webm");

    if body.is_empty() {
        return Json(VoiceExtraction::unrecognized());
    }

    match state.voice.analyze_booking(&body, mime_type).await {
        Ok(extraction) => Json(extraction),
        Err(e) => {
            tracing::warn!(error = %e, "voice analysis failed");
            Json(VoiceExtraction::unrecognized())
        }
    }
}
