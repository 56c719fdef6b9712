//! Authentication DTOs.

use crate::domain::entities::{Email, Password, User};
use crate::domain::errors::{Field, ValidationError};
use crate::domain::ports::NewAccount;

/// Login request data.
#[derive(Debug, Clone)]
pub struct LoginRequest {
    /// Sign-in email, matched exactly.
    pub email: Email,
    /// Password, matched exactly.
    pub password: Password,
}

impl LoginRequest {
    /// Creates new login request after the empty-field check.
    ///
    /// The email is kept as typed; sign-in compares it byte-for-byte.
    ///
    /// # Errors
    /// Returns error if either field is empty.
    pub fn new(email: &str, password: &str) -> Result<Self, ValidationError> {
        if email.is_empty() {
            return Err(ValidationError::MissingField(Field::Email));
        }
        if password.is_empty() {
            return Err(ValidationError::MissingField(Field::Password));
        }

        Ok(Self {
            email: Email::new_unchecked(email),
            password: Password::new(password),
        })
    }
}

/// Registration request data.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    /// Display name.
    pub name: String,
    /// Sign-in email.
    pub email: Email,
    /// Chosen password.
    pub password: Password,
}

impl RegisterRequest {
    /// Creates new registration request.
    ///
    /// Checks run in the order the sign-up screen reports them: missing
    /// fields, confirmation mismatch, password length, email shape.
    ///
    /// # Errors
    /// Returns the first validation failure.
    pub fn new(
        name: &str,
        email: &str,
        password: &str,
        confirm_password: &str,
    ) -> Result<Self, ValidationError> {
        let required = [
            (Field::Name, name.trim().is_empty()),
            (Field::Email, email.trim().is_empty()),
            (Field::Password, password.is_empty()),
            (Field::ConfirmPassword, confirm_password.is_empty()),
        ];
        if let Some((field, _)) = required.into_iter().find(|(_, missing)| *missing) {
            return Err(ValidationError::MissingField(field));
        }

        if password != confirm_password {
            return Err(ValidationError::PasswordMismatch);
        }

        let password = Password::new(password);
        if !password.meets_min_length() {
            return Err(ValidationError::PasswordTooShort {
                min: Password::MIN_LENGTH,
            });
        }

        let email = Email::parse(email).ok_or(ValidationError::MalformedEmail)?;

        Ok(Self {
            name: name.trim().to_string(),
            email,
            password,
        })
    }

    pub(crate) fn into_account(self) -> NewAccount {
        NewAccount {
            name: self.name,
            email: self.email,
            password: self.password,
        }
    }
}

/// Registration response data.
#[derive(Debug, Clone)]
pub struct RegisterResponse {
    /// Newly created member.
    pub user: User,
    /// Whether the caller is now signed in as that member.
    pub signed_in: bool,
}

impl RegisterResponse {
    /// Creates new registration response.
    #[must_use]
    pub const fn new(user: User, signed_in: bool) -> Self {
        Self { user, signed_in }
    }
}
