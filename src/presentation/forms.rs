//! Sign-in and sign-up form handling.
//!
//! Forms validate input before calling the session manager and turn every
//! outcome into the text the screen shows. Credential failures are reported
//! with deliberately vague wording so the screens do not reveal which emails
//! have accounts; logs keep the precise cause.

use thiserror::Error;
use tracing::{debug, warn};

use super::navigation::Route;
use crate::application::{LoginRequest, RegisterRequest, RegisterResponse, SessionManager};
use crate::domain::entities::User;
use crate::domain::errors::{AuthError, ValidationError};

/// Sign-in with an empty field.
pub const MSG_LOGIN_FIELDS_REQUIRED: &str = "Please enter both email and password";
/// Sign-up with an empty field.
pub const MSG_ALL_FIELDS_REQUIRED: &str = "All fields are required";
/// Sign-up whose confirmation differs.
pub const MSG_PASSWORD_MISMATCH: &str = "Passwords do not match";
/// Sign-up with a short password.
pub const MSG_PASSWORD_TOO_SHORT: &str = "Password must be at least 8 characters";
/// Sign-up with a malformed email.
pub const MSG_INVALID_EMAIL: &str = "Please enter a valid email address";
/// Sign-in that matched no account.
pub const MSG_INVALID_CREDENTIALS: &str = "Invalid email or password";
/// Sign-up refused by the store.
pub const MSG_REGISTRATION_FAILED: &str = "Email already exists or registration failed";
/// Request refused while another is pending.
pub const MSG_BUSY: &str = "Please wait for the current request to finish";
/// Request replaced by a newer one or by sign-out.
pub const MSG_CANCELLED: &str = "Request was cancelled";
/// Any other failure.
pub const MSG_GENERIC: &str = "An error occurred. Please try again.";

/// Failure of a form submission.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormError {
    /// Input was rejected before reaching the session manager.
    #[error(transparent)]
    Invalid(#[from] ValidationError),
    /// The session manager refused the request.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

fn auth_message(error: &AuthError) -> &'static str {
    match error {
        AuthError::InvalidCredentials => MSG_INVALID_CREDENTIALS,
        AuthError::EmailTaken { .. } => MSG_REGISTRATION_FAILED,
        AuthError::Busy => MSG_BUSY,
        AuthError::Superseded => MSG_CANCELLED,
        AuthError::Backend { .. } | AuthError::RestoreFailed { .. } => MSG_GENERIC,
    }
}

/// Sign-in screen input.
#[derive(Debug, Default, Clone)]
pub struct LoginForm {
    /// Email as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
}

impl LoginForm {
    /// Creates a filled-in form.
    #[must_use]
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }

    /// Validates and submits the form.
    ///
    /// # Errors
    /// Returns error if a field is empty or the session manager rejects the
    /// credentials.
    pub async fn submit(&self, manager: &SessionManager) -> Result<User, FormError> {
        let request = LoginRequest::new(&self.email, &self.password).inspect_err(|e| {
            debug!(error = %e, "Login form rejected");
        })?;

        Ok(manager.login(&request).await?)
    }

    /// Text shown for a failed submission.
    #[must_use]
    pub fn message_for(error: &FormError) -> &'static str {
        match error {
            FormError::Invalid(_) => MSG_LOGIN_FIELDS_REQUIRED,
            FormError::Auth(e) => auth_message(e),
        }
    }
}

/// Sign-up screen input.
#[derive(Debug, Default, Clone)]
pub struct RegisterForm {
    /// Display name as typed.
    pub name: String,
    /// Email as typed.
    pub email: String,
    /// Password as typed.
    pub password: String,
    /// Password typed a second time.
    pub confirm_password: String,
}

impl RegisterForm {
    /// Creates a filled-in form.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
        confirm_password: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password: password.into(),
            confirm_password: confirm_password.into(),
        }
    }

    /// Validates and submits the form.
    ///
    /// # Errors
    /// Returns error if validation fails or the session manager rejects the
    /// registration.
    pub async fn submit(&self, manager: &SessionManager) -> Result<RegisterResponse, FormError> {
        let request = RegisterRequest::new(
            &self.name,
            &self.email,
            &self.password,
            &self.confirm_password,
        )
        .inspect_err(|e| debug!(error = %e, "Registration form rejected"))?;

        manager.register(request).await.map_err(|e| {
            if !e.is_credential_error() {
                warn!(error = %e, "Registration could not be completed");
            }
            FormError::Auth(e)
        })
    }

    /// Text shown for a failed submission.
    #[must_use]
    pub fn message_for(error: &FormError) -> &'static str {
        match error {
            FormError::Invalid(ValidationError::MissingField(_)) => MSG_ALL_FIELDS_REQUIRED,
            FormError::Invalid(ValidationError::PasswordMismatch) => MSG_PASSWORD_MISMATCH,
            FormError::Invalid(ValidationError::PasswordTooShort { .. }) => MSG_PASSWORD_TOO_SHORT,
            FormError::Invalid(ValidationError::MalformedEmail) => MSG_INVALID_EMAIL,
            FormError::Auth(e) => auth_message(e),
        }
    }

    /// Screen to show after a successful registration.
    ///
    /// A member who was not signed in goes back to the sign-in screen.
    #[must_use]
    pub const fn route_after(response: &RegisterResponse) -> Route {
        if response.signed_in {
            Route::Home
        } else {
            Route::Login
        }
    }
}
