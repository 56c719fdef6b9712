//! Sign-in credential value objects.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use zeroize::{Zeroize, ZeroizeOnDrop};

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("Invalid regex"));

/// Email address used as the sign-in identifier.
///
/// Compared byte-for-byte; no case folding.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Email(String);

impl Email {
    /// Creates an email after a shape check.
    #[must_use]
    pub fn parse(value: impl Into<String>) -> Option<Self> {
        let value = value.into().trim().to_string();
        EMAIL_RE.is_match(&value).then_some(Self(value))
    }

    /// Creates an email without validation.
    #[must_use]
    pub fn new_unchecked(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Address as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Email {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Plaintext password held only as long as needed and wiped on drop.
#[derive(Clone, PartialEq, Eq, Zeroize, ZeroizeOnDrop)]
pub struct Password {
    value: String,
}

impl Password {
    /// Minimum length accepted at registration.
    pub const MIN_LENGTH: usize = 8;

    /// Wraps a plaintext password.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            value: value.into(),
        }
    }

    /// Plaintext value.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.value
    }

    /// Length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.value.chars().count()
    }

    /// Returns whether the password is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Returns whether the password is long enough to register.
    #[must_use]
    pub fn meets_min_length(&self) -> bool {
        self.len() >= Self::MIN_LENGTH
    }

    /// Compares against a candidate without short-circuiting on the first
    /// differing byte.
    #[must_use]
    pub fn matches(&self, candidate: &Self) -> bool {
        let a = self.value.as_bytes();
        let b = candidate.value.as_bytes();
        if a.len() != b.len() {
            return false;
        }
        a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Password").field("value", &"***").finish()
    }
}

impl fmt::Display for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", "*".repeat(self.len()))
    }
}
