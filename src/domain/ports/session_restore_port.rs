//! Session restore port definition.

use async_trait::async_trait;

use crate::domain::entities::UserId;
use crate::domain::errors::AuthError;

/// Port for recovering a session left over from a previous run.
#[async_trait]
pub trait SessionRestorePort: Send + Sync {
    /// Returns the member id of a remembered session, if there is one.
    async fn restore(&self) -> Result<Option<UserId>, AuthError>;
}

#[cfg(test)]
pub mod mock {
    use super::*;
    use parking_lot::Mutex;

    /// Mock restore port returning a fixed result.
    pub struct MockSessionRestore {
        result: Mutex<Result<Option<UserId>, AuthError>>,
    }

    impl MockSessionRestore {
        /// Creates mock with no remembered session.
        pub fn empty() -> Self {
            Self {
                result: Mutex::new(Ok(None)),
            }
        }

        /// Creates mock remembering the given member.
        pub fn remembering(id: impl Into<UserId>) -> Self {
            Self {
                result: Mutex::new(Ok(Some(id.into()))),
            }
        }

        /// Creates mock that fails every restore.
        pub fn failing(message: &str) -> Self {
            Self {
                result: Mutex::new(Err(AuthError::restore_failed(message))),
            }
        }
    }

    #[async_trait]
    impl SessionRestorePort for MockSessionRestore {
        async fn restore(&self) -> Result<Option<UserId>, AuthError> {
            self.result.lock().clone()
        }
    }
}
