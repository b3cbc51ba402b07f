//! Notification delivery abstraction

use async_trait::async_trait;

use crate::Result;

/// Trait for delivering a notification to the configured chat
#[async_trait]
pub trait Notifier: Send + Sync + std::fmt::Debug {
    /// Deliver a message
    async fn notify(&self, message: &str) -> Result<()>;
}
