pub mod gemini;

use async_trait::async_trait;

use crate::models::VoiceExtraction;

/// Seam to the voice-transcription collaborator: recorded audio in, partial
/// booking record out. Every extracted field is best-effort.
#[async_trait]
pub trait VoiceProvider: Send + Sync {
    async fn analyze_booking(
        &self,
        audio: &[u8],
        mime_type: &str,
    ) -> anyhow::Result<VoiceExtraction>;
}
