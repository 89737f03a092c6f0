//! Text classifier port.
//!
//! An external model labels user text (e.g. `Safe`, `Toxic`) with a
//! confidence. Callers that must not block on outages wrap an
//! implementation in the fail-open adapter.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::moderation::Classification;

#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// # Errors
    ///
    /// - `ClassifierUnavailable` on transport failure or a bad response
    async fn classify(&self, text: &str) -> Result<Classification, DomainError>;
}
