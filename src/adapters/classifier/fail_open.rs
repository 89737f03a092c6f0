//! Fail-open classifier wrapper.
//!
//! Bounds the inner classifier with a timeout and substitutes
//! `Safe` / 1.0 on any failure, so an outage never blocks posting.

use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;
use tracing::warn;

use crate::domain::foundation::{DomainError, Timestamp};
use crate::domain::moderation::Classification;
use crate::ports::TextClassifier;

pub struct FailOpenClassifier {
    inner: Arc<dyn TextClassifier>,
    timeout: Duration,
}

impl FailOpenClassifier {
    pub fn new(inner: Arc<dyn TextClassifier>, timeout: Duration) -> Self {
        Self { inner, timeout }
    }

    /// Classifies `text`, falling back to the safe verdict.
    pub async fn classify_or_safe(&self, text: &str) -> Classification {
        match tokio::time::timeout(self.timeout, self.inner.classify(text)).await {
            Ok(Ok(classification)) => classification,
            Ok(Err(e)) => {
                warn!(error = %e, "Classifier failed, treating content as safe");
                Classification::safe_fallback(Timestamp::now())
            }
            Err(_) => {
                warn!(
                    timeout_ms = self.timeout.as_millis() as u64,
                    "Classifier timed out, treating content as safe"
                );
                Classification::safe_fallback(Timestamp::now())
            }
        }
    }
}

#[async_trait]
impl TextClassifier for FailOpenClassifier {
    async fn classify(&self, text: &str) -> Result<Classification, DomainError> {
        Ok(self.classify_or_safe(text).await)
    }
}
