//! HTTP text classifier.
//!
//! POSTs `{"text": ...}` to the configured endpoint and expects
//! `{"label": "...", "confidence": 0.0..1.0}` back.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;
use tracing::debug;

use crate::domain::foundation::{DomainError, ErrorCode, Timestamp};
use crate::domain::moderation::Classification;
use crate::ports::TextClassifier;

/// Connection settings for [`HttpTextClassifier`].
#[derive(Debug, Clone)]
pub struct HttpClassifierConfig {
    pub endpoint: String,
    api_key: Option<Secret<String>>,
    pub timeout: Duration,
}

impl HttpClassifierConfig {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            api_key: None,
            timeout: Duration::from_millis(5_000),
        }
    }

    pub fn with_api_key(mut self, api_key: Secret<String>) -> Self {
        self.api_key = Some(api_key);
        self
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[derive(Debug, Serialize)]
struct ClassifyRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct ClassifyResponse {
    label: String,
    confidence: f64,
}

pub struct HttpTextClassifier {
    config: HttpClassifierConfig,
    client: Client,
}

impl HttpTextClassifier {
    pub fn new(config: HttpClassifierConfig) -> Result<Self, DomainError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| unavailable(format!("Failed to build HTTP client: {}", e)))?;
        Ok(Self { config, client })
    }
}

fn unavailable(message: impl Into<String>) -> DomainError {
    DomainError::new(ErrorCode::ClassifierUnavailable, message)
}

#[async_trait]
impl TextClassifier for HttpTextClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, DomainError> {
        let mut request = self
            .client
            .post(&self.config.endpoint)
            .json(&ClassifyRequest { text });
        if let Some(key) = &self.config.api_key {
            request = request.header("Authorization", format!("Bearer {}", key.expose_secret()));
        }

        let response = request.send().await.map_err(|e| {
            if e.is_timeout() {
                unavailable(format!(
                    "Classifier timed out after {} ms",
                    self.config.timeout.as_millis()
                ))
            } else {
                unavailable(format!("Classifier request failed: {}", e))
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(unavailable(format!("Classifier returned status {}", status)));
        }

        let body: ClassifyResponse = response
            .json()
            .await
            .map_err(|e| unavailable(format!("Failed to parse classifier response: {}", e)))?;
        debug!(label = %body.label, confidence = body.confidence, "Text classified");

        Classification::new(body.label, body.confidence, Timestamp::now())
            .map_err(|e| unavailable(format!("Classifier returned invalid verdict: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_defaults_to_five_second_timeout() {
        let config = HttpClassifierConfig::new("http://localhost:9000/classify");
        assert_eq!(config.timeout, Duration::from_millis(5_000));
        assert!(config.api_key.is_none());
    }

    #[test]
    fn response_parses_label_and_confidence() {
        let body: ClassifyResponse =
            serde_json::from_str(r#"{"label":"Toxic","confidence":0.82}"#).unwrap();
        assert_eq!(body.label, "Toxic");
        assert_eq!(body.confidence, 0.82);
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_classifier_unavailable() {
        let classifier = HttpTextClassifier::new(
            HttpClassifierConfig::new("http://127.0.0.1:9/classify")
                .with_timeout(Duration::from_millis(200)),
        )
        .unwrap();

        let err = classifier.classify("hello").await.unwrap_err();
        assert_eq!(err.code, ErrorCode::ClassifierUnavailable);
    }
}
