//! External text classification and moderation adapters.

mod fail_open;
mod http;
mod moderation_endpoint;

pub use fail_open::FailOpenClassifier;
pub use http::{HttpClassifierConfig, HttpTextClassifier};
pub use moderation_endpoint::HttpModerationProvider;

use std::sync::Arc;

use crate::config::ClassifierConfig;
use crate::domain::foundation::DomainError;
use crate::ports::TextClassifier;

/// Builds the configured text classifier, or `None` when no URL is set.
///
/// With `fail_open` the HTTP classifier is wrapped in [`FailOpenClassifier`];
/// without it, timeouts and errors reach the caller.
pub fn text_classifier_from_config(
    config: &ClassifierConfig,
) -> Result<Option<Arc<dyn TextClassifier>>, DomainError> {
    let Some(url) = &config.url else {
        return Ok(None);
    };

    let mut http_config = HttpClassifierConfig::new(url.clone()).with_timeout(config.timeout());
    if let Some(key) = &config.api_key {
        http_config = http_config.with_api_key(key.clone());
    }
    let http: Arc<dyn TextClassifier> = Arc::new(HttpTextClassifier::new(http_config)?);

    if config.fail_open {
        Ok(Some(Arc::new(FailOpenClassifier::new(http, config.timeout()))))
    } else {
        Ok(Some(http))
    }
}
