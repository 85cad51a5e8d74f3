use anyhow::Context;
use async_trait::async_trait;
use base64::Engine;
use serde_json::json;

use super::VoiceProvider;
use crate::models::VoiceExtraction;

const SYSTEM_INSTRUCTION: &str = "You are a helpful AI assistant for Lyth Ejendomsservice. \
    Your job is to extract booking details from Danish audio.";

const USER_PROMPT: &str = "Listen to this audio booking request for a property service company. \
    Extract the service type, date, and customer name if present. Return JSON.";

pub struct GeminiProvider {
    api_key: String,
    model: String,
    client: reqwest::Client,
}

impl GeminiProvider {
    pub fn new(api_key: String, model: String) -> Self {
        Self {
            api_key,
            model,
            client: reqwest::Client::new(),
        }
    }

    fn response_schema() -> serde_json::Value {
        json!({
            "type": "OBJECT",
            "properties": {
                "service": {
                    "type": "STRING",
                    "description": "The type of service requested (e.g. 'snerydning', 'havearbejde', 'tømrer', 'rengøring'). Normalize to Danish lowercase.",
                },
                "date": {
                    "type": "STRING",
                    "description": "The requested date or time expressed as a string (e.g. 'next Friday', 'tomorrow').",
                },
                "name": {
                    "type": "STRING",
                    "description": "The name of the person booking if mentioned.",
                },
                "summary": {
                    "type": "STRING",
                    "description": "A very short, polite summary of what was understood in Danish.",
                },
            },
            "required": ["summary"],
        })
    }
}

#[async_trait]
impl VoiceProvider for GeminiProvider {
    async fn analyze_booking(
        &self,
        audio: &[u8],
        mime_type: &str,
    ) -> anyhow::Result<VoiceExtraction> {
        anyhow::ensure!(!self.api_key.is_empty(), "GEMINI_API_KEY is not configured");

        let audio_b64 = base64::engine::general_purpose::STANDARD.encode(audio);

        let body = json!({
            "contents": [{
                "parts": [
                    {
                        "inlineData": {
                            "mimeType": mime_type,
                            "data": audio_b64,
                        }
                    },
                    { "text": USER_PROMPT },
                ]
            }],
            "systemInstruction": {
                "parts": [{ "text": SYSTEM_INSTRUCTION }]
            },
            "generationConfig": {
                "responseMimeType": "application/json",
                "responseSchema": Self::response_schema(),
            },
        });

        let url = format!(
            "https://generativelanguage.googleapis.com/v1beta/models/{}:generateContent",
            self.model
        );

        let resp = self
            .client
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&body)
            .send()
            .await
            .context("failed to call Gemini API")?;

        let status = resp.status();
        let data: serde_json::Value = resp
            .json()
            .await
            .context("failed to parse Gemini response")?;

        if !status.is_success() {
            anyhow::bail!("Gemini API error ({}): {}", status, data);
        }

        let text = data["candidates"][0]["content"]["parts"][0]["text"]
            .as_str()
            .ok_or_else(|| anyhow::anyhow!("missing text in Gemini response"))?;

        // A transcription that comes back as non-JSON is "nothing recognized",
        // not an error: the customer just gets asked to try again.
        match serde_json::from_str::<VoiceExtraction>(text) {
            Ok(extraction) => Ok(extraction),
            Err(e) => {
                tracing::warn!(error = %e, "unparseable Gemini extraction, treating as unrecognized");
                Ok(VoiceExtraction::unrecognized())
            }
        }
    }
}
