//! Client for the suggestion/routine generation collaborator.
//!
//! The contract is deliberately thin: a free-text prompt goes in, generated
//! text comes out. Handlers depend on the trait so tests can stub the
//! collaborator without a network.

use std::time::Duration;

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use rollcall_core::errors::{RollcallError, RollcallResult};

#[async_trait]
pub trait SuggestionClient: Send + Sync {
    /// Free-text completion: prompt in, generated text out.
    async fn complete(&self, prompt: &str) -> RollcallResult<String>;
}

/// HTTP implementation posting to a configured completion endpoint.
pub struct HttpSuggestionClient {
    http: reqwest::Client,
    endpoint: String,
    api_key: Option<String>,
    model: String,
}

#[derive(Serialize)]
struct CompletionRequest<'a> {
    model: &'a str,
    prompt: &'a str,
}

#[derive(Deserialize)]
struct CompletionResponse {
    text: String,
}

impl HttpSuggestionClient {
    pub fn new(endpoint: String, api_key: Option<String>, model: String) -> RollcallResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(60))
            .build()
            .map_err(|e| RollcallError::Internal(Box::new(e)))?;

        Ok(Self {
            http,
            endpoint,
            api_key,
            model,
        })
    }
}

#[async_trait]
impl SuggestionClient for HttpSuggestionClient {
    async fn complete(&self, prompt: &str) -> RollcallResult<String> {
        tracing::debug!(endpoint = %self.endpoint, "requesting completion");

        let mut request = self.http.post(&self.endpoint).json(&CompletionRequest {
            model: &self.model,
            prompt,
        });
        if let Some(key) = &self.api_key {
            request = request.bearer_auth(key);
        }

        let response = request
            .send()
            .await
            .and_then(|response| response.error_for_status())
            .map_err(|e| RollcallError::Internal(Box::new(e)))?;

        let body: CompletionResponse = response
            .json()
            .await
            .map_err(|e| RollcallError::Internal(Box::new(e)))?;

        Ok(body.text)
    }
}
