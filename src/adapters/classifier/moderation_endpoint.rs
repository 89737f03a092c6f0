//! HTTP moderation endpoint for the chat safety gate.
//!
//! Speaks the common `/moderations` shape: the first result's
//! `categories` map carries a `self-harm` flag.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::time::Duration;

use crate::domain::foundation::{DomainError, ErrorCode};
use crate::ports::ModerationProvider;

const SELF_HARM_CATEGORIES: [&str; 3] = ["self-harm", "self-harm/intent", "self-harm/instructions"];

#[derive(Debug, Serialize)]
struct ModerationRequest<'a> {
    input: &'a str,
}

#[derive(Debug, Deserialize)]
struct ModerationResponse {
    results: Vec<ModerationResult>,
}

#[derive(Debug, Deserialize)]
struct ModerationResult {
    #[serde(default)]
    categories: HashMap<String, bool>,
}

impl ModerationResponse {
    fn flags_self_harm(&self) -> bool {
        self.results.first().is_some_and(|r| {
            SELF_HARM_CATEGORIES
                .iter()
                .any(|c| r.categories.get(*c).copied().unwrap_or(false))
        })
    }
}

pub struct HttpModerationProvider {
    endpoint: String,
    api_key: Option<Secret<String>>,
    client: Client,
}

impl HttpModerationProvider {
    pub fn new(
        endpoint: impl Into<String>,
        api_key: Option<Secret<String>>,
        timeout: Duration,
    ) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| provider_error(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self {
            endpoint: endpoint.into(),
            api_key,
            client,
        })
    }
}

fn provider_error(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::ModerationProviderError, message)
}

#[async_trait]
impl ModerationProvider for HttpModerationProvider {
    async fn flags_self_harm(&self, text: &str) -> Result<bool, DomainError> {
        let mut request = self
            .client
            .post(&self.endpoint)
            .json(&ModerationRequest { input: text });
        if let Some(key) = &self.api_key {
            request = request.header("Authorization", format!("Bearer {}", key.expose_secret()));
        }

        let response = request
            .send()
            .await
            .map_err(|e| provider_error(format!("Moderation request failed: {}", e)))?;
        let status = response.status();
        if !status.is_success() {
            return Err(provider_error(format!("Moderation returned status {}", status)));
        }

        let body: ModerationResponse = response
            .json()
            .await
            .map_err(|e| provider_error(format!("Failed to parse moderation response: {}", e)))?;
        Ok(body.flags_self_harm())
    }
}
