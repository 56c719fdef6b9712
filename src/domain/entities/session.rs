//! Session state published to observers.

use super::User;

/// Authentication state of the single client session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Nobody is signed in.
    #[default]
    Anonymous,
    /// A member is signed in.
    Authenticated(User),
}

impl SessionState {
    /// Returns whether a member is signed in.
    #[must_use]
    pub const fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// Returns the signed-in member, if any.
    #[must_use]
    pub const fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Anonymous => None,
        }
    }
}
