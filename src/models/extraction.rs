use serde::{Deserialize, Serialize};

/// Partial booking record extracted from a recorded voice request. Every
/// field is best-effort; only the summary is always present, and it is the
/// text shown back to the customer.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VoiceExtraction {
    #[serde(default)]
    pub service: Option<String>,
    #[serde(default)]
    pub date: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    pub summary: String,
}

impl VoiceExtraction {
    /// The "no booking data recognized" result: shown when the transcription
    /// collaborator is unreachable or returns something unparseable, so the
    /// customer is prompted to retry instead of seeing an error.
    pub fn unrecognized() -> Self {
        Self {
            service: None,
            date: None,
            name: None,
            summary: "Kunne ikke forstå beskeden. Prøv venligst igen.".to_string(),
        }
    }
}
