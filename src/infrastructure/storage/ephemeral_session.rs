//! Session restore adapter for builds without persisted sessions.

use std::time::Duration;

use async_trait::async_trait;
use tracing::debug;

use crate::domain::entities::UserId;
use crate::domain::errors::AuthError;
use crate::domain::ports::SessionRestorePort;

/// Restore source that never remembers anyone.
///
/// Only simulates the time a storage read would take.
pub struct EphemeralSessionStore {
    latency: Duration,
}

impl EphemeralSessionStore {
    /// Creates new stub storage.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            latency: Duration::ZERO,
        }
    }

    /// Delays every check by `latency`.
    #[must_use]
    pub const fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for EphemeralSessionStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SessionRestorePort for EphemeralSessionStore {
    async fn restore(&self) -> Result<Option<UserId>, AuthError> {
        if !self.latency.is_zero() {
            tokio::time::sleep(self.latency).await;
        }
        debug!("Session persistence disabled - nothing to restore");
        Ok(None)
    }
}
