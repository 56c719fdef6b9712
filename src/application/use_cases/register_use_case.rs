//! Registration use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::RegisterRequest;
use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::domain::ports::CredentialStorePort;

/// Creates new member accounts.
#[derive(Clone)]
pub struct RegisterUseCase {
    credentials: Arc<dyn CredentialStorePort>,
}

impl RegisterUseCase {
    /// Creates new register use case.
    #[must_use]
    pub const fn new(credentials: Arc<dyn CredentialStorePort>) -> Self {
        Self { credentials }
    }

    /// Registers the account described by the request.
    ///
    /// # Errors
    /// Returns [`AuthError::EmailTaken`] if the email is in use, or the store's
    /// error if it fails.
    pub async fn execute(&self, request: RegisterRequest) -> Result<User, AuthError> {
        debug!(email = %request.email, "Attempting registration");

        match self.credentials.register(request.into_account()).await {
            Ok(user) => {
                info!(user_id = %user.id(), "Account registered");
                Ok(user)
            }
            Err(e @ AuthError::EmailTaken { .. }) => {
                info!("Registration rejected, email already registered");
                Err(e)
            }
            Err(e) => {
                warn!(error = %e, "Registration failed");
                Err(e)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ports::NewAccount;
    use crate::domain::ports::mocks::MockCredentialStorePort;
    use chrono::NaiveDate;

    fn request() -> RegisterRequest {
        RegisterRequest::new("Ann Lee", "ann@example.com", "espresso42", "espresso42").unwrap()
    }

    #[tokio::test]
    async fn test_successful_registration() {
        let mut store = MockCredentialStorePort::new();
        store
            .expect_register()
            .withf(|account: &NewAccount| {
                account.name == "Ann Lee" && account.email.as_str() == "ann@example.com"
            })
            .times(1)
            .returning(|account| {
                Ok(User::new(
                    "new-id",
                    account.name,
                    account.email.as_str(),
                    NaiveDate::from_ymd_opt(2026, 1, 2).unwrap(),
                ))
            });

        let use_case = RegisterUseCase::new(Arc::new(store));
        let user = use_case.execute(request()).await.unwrap();

        assert_eq!(user.name(), "Ann Lee");
        assert_eq!(user.points(), 0);
    }

    #[tokio::test]
    async fn test_email_taken_is_distinct_from_backend_failure() {
        let mut taken = MockCredentialStorePort::new();
        taken
            .expect_register()
            .returning(|account| Err(AuthError::email_taken(account.email.as_str())));

        let mut broken = MockCredentialStorePort::new();
        broken
            .expect_register()
            .returning(|_| Err(AuthError::backend("disk full")));

        let taken = RegisterUseCase::new(Arc::new(taken)).execute(request()).await;
        let broken = RegisterUseCase::new(Arc::new(broken)).execute(request()).await;

        assert!(matches!(taken, Err(AuthError::EmailTaken { .. })));
        assert!(matches!(broken, Err(AuthError::Backend { .. })));
    }
}
