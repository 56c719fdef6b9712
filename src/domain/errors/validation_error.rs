//! Input validation error types.

use thiserror::Error;

/// Form field names used in validation errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    /// Display name.
    Name,
    /// Sign-in email.
    Email,
    /// Password.
    Password,
    /// Password confirmation.
    ConfirmPassword,
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Name => write!(f, "name"),
            Self::Email => write!(f, "email"),
            Self::Password => write!(f, "password"),
            Self::ConfirmPassword => write!(f, "password confirmation"),
        }
    }
}

/// Rejections raised before a request reaches the session manager.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// A required field is empty.
    #[error("{0} is required")]
    MissingField(Field),

    /// The email is not shaped like an address.
    #[error("email address is not valid")]
    MalformedEmail,

    /// The password is shorter than `min` characters.
    #[error("password must be at least {min} characters")]
    PasswordTooShort {
        /// Minimum accepted length.
        min: usize,
    },

    /// Password and confirmation differ.
    #[error("passwords do not match")]
    PasswordMismatch,
}
