//! Session restore use case.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::domain::ports::{CredentialStorePort, SessionRestorePort};

/// Recovers the member of a remembered session.
pub struct RestoreSessionUseCase {
    restore_port: Arc<dyn SessionRestorePort>,
    credentials: Arc<dyn CredentialStorePort>,
}

impl RestoreSessionUseCase {
    /// Creates new use case.
    #[must_use]
    pub const fn new(
        restore_port: Arc<dyn SessionRestorePort>,
        credentials: Arc<dyn CredentialStorePort>,
    ) -> Self {
        Self {
            restore_port,
            credentials,
        }
    }

    /// Resolves the remembered member, if any.
    ///
    /// A failing or stale restore source leaves the session anonymous rather
    /// than erroring.
    ///
    /// # Errors
    /// Returns error only if the member lookup itself fails.
    pub async fn execute(&self) -> Result<Option<User>, AuthError> {
        debug!("Checking for a remembered session");
        let id = match self.restore_port.restore().await {
            Ok(Some(id)) => id,
            Ok(None) => {
                debug!("No remembered session");
                return Ok(None);
            }
            Err(e) => {
                warn!(error = %e, "Failed to read remembered session");
                return Ok(None);
            }
        };

        match self.credentials.find_by_id(&id).await? {
            Some(user) => {
                info!(user_id = %user.id(), "Remembered session restored");
                Ok(Some(user))
            }
            None => {
                warn!(user_id = %id, "Remembered member no longer exists");
                Ok(None)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::UserId;
    use crate::domain::ports::mocks::{MockCredentialStorePort, MockSessionRestore};
    use chrono::NaiveDate;

    fn john() -> User {
        User::new(
            "1",
            "John Doe",
            "john@example.com",
            NaiveDate::from_ymd_opt(2022, 5, 15).unwrap(),
        )
    }

    #[tokio::test]
    async fn test_nothing_remembered() {
        let mut store = MockCredentialStorePort::new();
        store.expect_find_by_id().never();

        let use_case =
            RestoreSessionUseCase::new(Arc::new(MockSessionRestore::empty()), Arc::new(store));

        assert_eq!(use_case.execute().await, Ok(None));
    }

    #[tokio::test]
    async fn test_remembered_member_restored() {
        let mut store = MockCredentialStorePort::new();
        store
            .expect_find_by_id()
            .withf(|id: &UserId| id.as_str() == "1")
            .returning(|_| Ok(Some(john())));

        let use_case = RestoreSessionUseCase::new(
            Arc::new(MockSessionRestore::remembering("1")),
            Arc::new(store),
        );

        let user = use_case.execute().await.unwrap().unwrap();
        assert_eq!(user.email(), "john@example.com");
    }

    #[tokio::test]
    async fn test_stale_member_stays_anonymous() {
        let mut store = MockCredentialStorePort::new();
        store.expect_find_by_id().returning(|_| Ok(None));

        let use_case = RestoreSessionUseCase::new(
            Arc::new(MockSessionRestore::remembering("gone")),
            Arc::new(store),
        );

        assert_eq!(use_case.execute().await, Ok(None));
    }

    #[tokio::test]
    async fn test_restore_source_failure_stays_anonymous() {
        let store = MockCredentialStorePort::new();

        let use_case = RestoreSessionUseCase::new(
            Arc::new(MockSessionRestore::failing("corrupt state")),
            Arc::new(store),
        );

        assert_eq!(use_case.execute().await, Ok(None));
    }
}
