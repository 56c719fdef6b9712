//! Login use case implementation.

use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::application::dto::LoginRequest;
use crate::domain::entities::User;
use crate::domain::errors::AuthError;
use crate::domain::ports::CredentialStorePort;

/// Checks credentials against the credential store.
#[derive(Clone)]
pub struct LoginUseCase {
    credentials: Arc<dyn CredentialStorePort>,
}

impl LoginUseCase {
    /// Creates new login use case.
    #[must_use]
    pub const fn new(credentials: Arc<dyn CredentialStorePort>) -> Self {
        Self { credentials }
    }

    /// Executes login with provided request.
    ///
    /// # Errors
    /// Returns error if the credentials match no account or the store fails.
    pub async fn execute(&self, request: &LoginRequest) -> Result<User, AuthError> {
        debug!(email = %request.email, "Attempting login");

        let user = self
            .credentials
            .authenticate(&request.email, &request.password)
            .await
            .map_err(|e| {
                warn!(error = %e, "Credential check failed");
                e
            })?;

        info!(
            user_id = %user.id(),
            points = user.points(),
            level = %user.level(),
            "Credentials accepted"
        );

        Ok(user)
    }
}
