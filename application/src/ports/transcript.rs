//! Port for recording backend exchanges.
//!
//! Separate from `tracing` diagnostics: tracing carries human-readable
//! operation logs, the transcript captures every prompt and response in a
//! machine-readable form (e.g. JSONL).

use duet_domain::{BackendResponse, Model, Stage};
use serde_json::{Map, Value};

/// One recorded backend exchange event
#[derive(Debug, Clone)]
pub enum TranscriptEvent {
    /// A prompt is about to be sent
    Request {
        stage: Stage,
        model: Model,
        prompt: String,
    },
    /// The backend call finished (successfully or not)
    Response {
        stage: Stage,
        model: Model,
        response: BackendResponse,
        elapsed_ms: u64,
    },
}

impl TranscriptEvent {
    pub fn event_type(&self) -> &'static str {
        match self {
            TranscriptEvent::Request { .. } => "backend_request",
            TranscriptEvent::Response { .. } => "backend_response",
        }
    }

    /// Event-specific fields as a JSON object
    pub fn payload(&self) -> Map<String, Value> {
        let mut fields = Map::new();
        match self {
            TranscriptEvent::Request {
                stage,
                model,
                prompt,
            } => {
                fields.insert("stage".to_string(), stage.as_str().into());
                fields.insert("model".to_string(), model.as_str().into());
                fields.insert("prompt".to_string(), prompt.as_str().into());
            }
            TranscriptEvent::Response {
                stage,
                model,
                response,
                elapsed_ms,
            } => {
                fields.insert("stage".to_string(), stage.as_str().into());
                fields.insert("model".to_string(), model.as_str().into());
                fields.insert("success".to_string(), response.is_success().into());
                fields.insert("text".to_string(), response.display_text().into());
                fields.insert("elapsed_ms".to_string(), (*elapsed_ms).into());
            }
        }
        fields
    }
}

/// Sink for [`TranscriptEvent`]s
///
/// `record` is synchronous and infallible; a failing sink must not disturb
/// the call being recorded.
pub trait TranscriptLogger: Send + Sync {
    fn record(&self, event: &TranscriptEvent);
}

/// Discards every event
pub struct NoTranscript;

impl TranscriptLogger for NoTranscript {
    fn record(&self, _event: &TranscriptEvent) {}
}
