//! Coping strategy catalog port.
//!
//! The catalog is shared by all users and maintained by admins.

use async_trait::async_trait;

use crate::domain::foundation::DomainError;
use crate::domain::recommendation::CopingStrategy;

#[async_trait]
pub trait StrategyCatalog: Send + Sync {
    /// Every published strategy in stable catalog order.
    ///
    /// Ranking ties keep this order, so implementations must not shuffle.
    async fn list_all(&self) -> Result<Vec<CopingStrategy>, DomainError>;
}
