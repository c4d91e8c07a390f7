//! Test doubles shared by the use case tests

use crate::ports::llm_gateway::{GatewayError, LlmGateway};
use crate::ports::progress::ProgressNotifier;
use crate::ports::transcript::{TranscriptEvent, TranscriptLogger};
use async_trait::async_trait;
use duet_domain::{Model, Stage};
use std::sync::Mutex;
use tokio::sync::Barrier;

/// Echoes prompts back: `G:<prompt>` for the general model, `C:<prompt>`
/// for the code model. Records every call in order.
pub struct EchoGateway {
    general: Model,
    code: Model,
    failing: Option<Model>,
    calls: Mutex<Vec<(Model, String)>>,
}

impl EchoGateway {
    pub fn new() -> Self {
        Self {
            general: Model::default_general(),
            code: Model::default_code(),
            failing: None,
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Calls to `model` fail with a connection error
    pub fn failing_for(mut self, model: Model) -> Self {
        self.failing = Some(model);
        self
    }

    pub fn calls(&self) -> Vec<(Model, String)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl LlmGateway for EchoGateway {
    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        self.calls
            .lock()
            .unwrap()
            .push((model.clone(), prompt.to_string()));

        if self.failing.as_ref() == Some(model) {
            return Err(GatewayError::ConnectionError("backend down".to_string()));
        }

        let prefix = if *model == self.general {
            "G"
        } else if *model == self.code {
            "C"
        } else {
            "?"
        };
        Ok(format!("{}:{}", prefix, prompt))
    }
}

/// Every call fails with a connection error
pub struct FailingGateway {
    message: String,
}

impl FailingGateway {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[async_trait]
impl LlmGateway for FailingGateway {
    async fn generate(&self, _model: &Model, _prompt: &str) -> Result<String, GatewayError> {
        Err(GatewayError::ConnectionError(self.message.clone()))
    }
}

/// The first `parties` calls block until all of them have arrived.
///
/// Only completes if those calls are in flight at the same time.
pub struct BarrierGateway {
    barrier: Barrier,
    parties: usize,
    arrived: Mutex<usize>,
}

impl BarrierGateway {
    pub fn new(parties: usize) -> Self {
        Self {
            barrier: Barrier::new(parties),
            parties,
            arrived: Mutex::new(0),
        }
    }
}

#[async_trait]
impl LlmGateway for BarrierGateway {
    async fn generate(&self, model: &Model, prompt: &str) -> Result<String, GatewayError> {
        let must_wait = {
            let mut arrived = self.arrived.lock().unwrap();
            *arrived += 1;
            *arrived <= self.parties
        };
        if must_wait {
            self.barrier.wait().await;
        }
        Ok(format!("{}:{}", model, prompt))
    }
}

/// Collects transcript event types
#[derive(Default)]
pub struct RecordingTranscript {
    events: Mutex<Vec<&'static str>>,
}

impl RecordingTranscript {
    pub fn event_types(&self) -> Vec<&'static str> {
        self.events.lock().unwrap().clone()
    }
}

impl TranscriptLogger for RecordingTranscript {
    fn record(&self, event: &TranscriptEvent) {
        self.events.lock().unwrap().push(event.event_type());
    }
}

/// Collects progress callbacks as strings like `start:fanout:2`
#[derive(Default)]
pub struct RecordingProgress {
    events: Mutex<Vec<String>>,
}

impl RecordingProgress {
    pub fn events(&self) -> Vec<String> {
        self.events.lock().unwrap().clone()
    }
}

impl ProgressNotifier for RecordingProgress {
    fn on_stage_start(&self, stage: Stage, total_calls: usize) {
        self.events
            .lock()
            .unwrap()
            .push(format!("start:{}:{}", stage.as_str(), total_calls));
    }

    fn on_call_complete(&self, stage: Stage, model: &Model, success: bool) {
        self.events
            .lock()
            .unwrap()
            .push(format!("call:{}:{}:{}", stage.as_str(), model, success));
    }

    fn on_stage_complete(&self, stage: Stage) {
        self.events
            .lock()
            .unwrap()
            .push(format!("done:{}", stage.as_str()));
    }
}
