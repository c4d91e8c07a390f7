//! Ollama LLM Gateway implementation
//!
//! One non-streamed `POST {base_url}/api/generate` per call:
//!
//! ```json
//! {"model": "llama3.2:3b", "prompt": "...", "stream": false}
//! ```
//!
//! Only the `response` field of the reply is read. A reply without it
//! yields [`BackendResponse::NO_RESPONSE`].

use super::error::{OllamaError, Result};
use async_trait::async_trait;
use duet_application::ports::llm_gateway::{GatewayError, LlmGateway};
use duet_domain::{BackendResponse, Model};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::{debug, info};

/// Longest error body kept in an [`OllamaError::Status`]
const MAX_ERROR_BODY: usize = 512;

#[derive(Debug, Serialize)]
struct GenerateRequest<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

#[derive(Debug, Deserialize)]
struct GenerateResponse {
    #[serde(default)]
    response: Option<String>,
}

/// LLM Gateway implementation for a local or remote Ollama server
pub struct OllamaGateway {
    client: reqwest::Client,
    base_url: String,
    timeout: Duration,
}

impl OllamaGateway {
    /// Build a gateway with one reusable HTTP client
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| OllamaError::ClientBuild(e.to_string()))?;

        let base_url = base_url.into().trim_end_matches('/').to_string();
        info!(
            "OllamaGateway initialized ({}, timeout {}s)",
            base_url,
            timeout.as_secs()
        );

        Ok(Self {
            client,
            base_url,
            timeout,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn generate_url(&self) -> String {
        format!("{}/api/generate", self.base_url)
    }

    /// Send one prompt and return the `response` text
    pub async fn generate_text(&self, model: &Model, prompt: &str) -> Result<String> {
        let url = self.generate_url();
        let request = GenerateRequest {
            model: model.as_str(),
            prompt,
            stream: false,
        };

        debug!("POST {} (model {})", url, model);
        let response = self
            .client
            .post(&url)
            .json(&request)
            .send()
            .await
            .map_err(|e| self.classify(&url, e))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| self.classify(&url, e))?;

        if !status.is_success() {
            return Err(OllamaError::Status {
                status: status.as_u16(),
                body: truncate(&body, MAX_ERROR_BODY),
            });
        }

        let parsed: GenerateResponse =
            serde_json::from_str(&body).map_err(|e| OllamaError::Decode(e.to_string()))?;

        Ok(parsed
            .response
            .unwrap_or_else(|| BackendResponse::NO_RESPONSE.to_string()))
    }

    fn classify(&self, url: &str, err: reqwest::Error) -> OllamaError {
        if err.is_timeout() {
            OllamaError::Timeout(self.timeout.as_secs())
        } else if err.is_connect() {
            OllamaError::Connection {
                url: url.to_string(),
                message: err.to_string(),
            }
        } else if err.is_decode() || err.is_body() {
            OllamaError::Decode(err.to_string())
        } else {
            OllamaError::Request(err.to_string())
        }
    }
}

fn truncate(text: &str, max: usize) -> String {
    match text.char_indices().nth(max) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

#[async_trait]
impl LlmGateway for OllamaGateway {
    async fn generate(
        &self,
        model: &Model,
        prompt: &str,
    ) -> std::result::Result<String, GatewayError> {
        self.generate_text(model, prompt).await.map_err(Into::into)
    }
}
