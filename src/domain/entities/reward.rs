//! Rewards granted to a member.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::errors::RewardError;

/// Reward identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RewardId(String);

impl RewardId {
    /// Identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RewardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for RewardId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for RewardId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Lifecycle state of a granted reward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RewardStatus {
    /// Can be redeemed.
    Available,
    /// Already used.
    Redeemed,
    /// No longer usable.
    Expired,
}

impl std::fmt::Display for RewardStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available => write!(f, "available"),
            Self::Redeemed => write!(f, "redeemed"),
            Self::Expired => write!(f, "expired"),
        }
    }
}

/// Reward granted to a member.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reward {
    id: RewardId,
    date: NaiveDate,
    name: String,
    points: u64,
    status: RewardStatus,
}

impl Reward {
    /// Creates a reward.
    #[must_use]
    pub fn new(
        id: impl Into<RewardId>,
        date: NaiveDate,
        name: impl Into<String>,
        points: u64,
        status: RewardStatus,
    ) -> Self {
        Self {
            id: id.into(),
            date,
            name: name.into(),
            points,
            status,
        }
    }

    /// Reward id.
    #[must_use]
    pub const fn id(&self) -> &RewardId {
        &self.id
    }

    /// Date the reward was granted.
    #[must_use]
    pub const fn date(&self) -> NaiveDate {
        self.date
    }

    /// Reward name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Star cost.
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Current status.
    #[must_use]
    pub const fn status(&self) -> RewardStatus {
        self.status
    }

    /// Returns whether the reward can still be redeemed.
    #[must_use]
    pub const fn is_available(&self) -> bool {
        matches!(self.status, RewardStatus::Available)
    }

    /// Marks an available reward as redeemed.
    ///
    /// # Errors
    /// Returns error if the reward was already redeemed or has expired.
    pub fn redeem(&mut self) -> Result<(), RewardError> {
        if !self.is_available() {
            return Err(RewardError::NotAvailable {
                id: self.id.clone(),
                status: self.status,
            });
        }
        self.status = RewardStatus::Redeemed;
        Ok(())
    }

    /// Marks the reward as expired regardless of its current status.
    pub const fn expire(&mut self) {
        self.status = RewardStatus::Expired;
    }
}
