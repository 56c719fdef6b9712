//! Authentication error types.

use thiserror::Error;

/// Authentication error variants.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum AuthError {
    #[error("email or password did not match any account")]
    InvalidCredentials,

    #[error("an account already exists for {email}")]
    EmailTaken { email: String },

    #[error("another session request is already in flight")]
    Busy,

    #[error("request was superseded before it completed")]
    Superseded,

    #[error("credential backend error: {message}")]
    Backend { message: String },

    #[error("failed to restore saved session: {message}")]
    RestoreFailed { message: String },
}

impl AuthError {
    /// Creates email taken error.
    #[must_use]
    pub fn email_taken(email: impl Into<String>) -> Self {
        Self::EmailTaken {
            email: email.into(),
        }
    }

    /// Creates backend error.
    #[must_use]
    pub fn backend(message: impl Into<String>) -> Self {
        Self::Backend {
            message: message.into(),
        }
    }

    /// Creates restore failed error.
    #[must_use]
    pub fn restore_failed(message: impl Into<String>) -> Self {
        Self::RestoreFailed {
            message: message.into(),
        }
    }

    /// Returns whether the user can simply try again.
    ///
    /// Every session error is recoverable by retrying; only the account
    /// conflict needs different input.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        !matches!(self, Self::EmailTaken { .. })
    }

    /// Returns whether error is a rejection of the supplied credentials.
    #[must_use]
    pub const fn is_credential_error(&self) -> bool {
        matches!(self, Self::InvalidCredentials | Self::EmailTaken { .. })
    }

    /// Returns whether the request never reached a result that could be applied.
    #[must_use]
    pub const fn is_concurrency_error(&self) -> bool {
        matches!(self, Self::Busy | Self::Superseded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classification() {
        assert!(AuthError::InvalidCredentials.is_credential_error());
        assert!(AuthError::email_taken("john@example.com").is_credential_error());
        assert!(!AuthError::backend("timeout").is_credential_error());

        assert!(AuthError::Busy.is_concurrency_error());
        assert!(AuthError::Superseded.is_concurrency_error());

        assert!(AuthError::backend("timeout").is_recoverable());
        assert!(!AuthError::email_taken("john@example.com").is_recoverable());
    }

    #[test]
    fn test_messages_carry_context() {
        let err = AuthError::email_taken("john@example.com");
        assert!(err.to_string().contains("john@example.com"));
    }
}
