//! Backend client
//!
//! Wraps an [`LlmGateway`] and absorbs every gateway failure into an
//! in-band [`BackendResponse::Error`]. Orchestrators built on top of it
//! never see an `Err` from a backend call.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::transcript::{NoTranscript, TranscriptEvent, TranscriptLogger};
use duet_domain::{BackendResponse, Model, Stage};
use std::sync::Arc;
use std::time::Instant;
use tracing::{debug, warn};

/// Single-attempt backend caller with in-band error reporting
#[derive(Clone)]
pub struct BackendClient {
    gateway: Arc<dyn LlmGateway>,
    transcript: Arc<dyn TranscriptLogger>,
}

impl BackendClient {
    pub fn new(gateway: Arc<dyn LlmGateway>) -> Self {
        Self {
            gateway,
            transcript: Arc::new(NoTranscript),
        }
    }

    /// Record every exchange to the given transcript
    pub fn with_transcript(mut self, transcript: Arc<dyn TranscriptLogger>) -> Self {
        self.transcript = transcript;
        self
    }

    /// Send `prompt` to `model` and return its answer or an in-band error
    pub async fn invoke(&self, model: &Model, prompt: &str) -> BackendResponse {
        self.invoke_in(Stage::Query, model, prompt).await
    }

    /// Like [`invoke`](Self::invoke), tagging the transcript with `stage`
    pub async fn invoke_in(&self, stage: Stage, model: &Model, prompt: &str) -> BackendResponse {
        debug!(
            "[{}] sending {} bytes to {}",
            stage.as_str(),
            prompt.len(),
            model
        );
        self.transcript.record(&TranscriptEvent::Request {
            stage,
            model: model.clone(),
            prompt: prompt.to_string(),
        });

        let started = Instant::now();
        let response = match self.gateway.generate(model, prompt).await {
            Ok(text) => BackendResponse::Text(text),
            Err(e) => {
                warn!("[{}] call to {} failed: {}", stage.as_str(), model, e);
                BackendResponse::Error(e.to_string())
            }
        };
        let elapsed_ms = u64::try_from(started.elapsed().as_millis()).unwrap_or(u64::MAX);

        debug!(
            "[{}] {} answered in {}ms (success: {})",
            stage.as_str(),
            model,
            elapsed_ms,
            response.is_success()
        );
        self.transcript.record(&TranscriptEvent::Response {
            stage,
            model: model.clone(),
            response: response.clone(),
            elapsed_ms,
        });

        response
    }
}
