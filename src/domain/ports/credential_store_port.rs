//! Credential store port definition.

use async_trait::async_trait;

use crate::domain::entities::{Email, Password, User, UserId};
use crate::domain::errors::AuthError;

/// Sign-up data handed to the credential store.
#[derive(Debug, Clone)]
pub struct NewAccount {
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: Email,
    /// Chosen password.
    pub password: Password,
}

/// Port for account lookup and creation.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CredentialStorePort: Send + Sync {
    /// Returns the member whose email and password both match.
    ///
    /// Unknown email and wrong password are reported identically as
    /// [`AuthError::InvalidCredentials`].
    async fn authenticate(&self, email: &Email, password: &Password) -> Result<User, AuthError>;

    /// Creates an account if no account uses the email yet.
    ///
    /// The uniqueness check and the insert are one atomic step.
    async fn register(&self, account: NewAccount) -> Result<User, AuthError>;

    /// Looks up a member by id.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError>;
}
