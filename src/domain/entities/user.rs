//! Loyalty member entity.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::{Reward, RewardId, Tier, Transaction};
use crate::domain::errors::RewardError;

/// Member identifier.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(String);

impl UserId {
    /// Wraps an existing identifier.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Generates a fresh identifier for a newly registered member.
    #[must_use]
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    /// Identifier as text.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for UserId {
    fn from(value: &str) -> Self {
        Self(value.to_string())
    }
}

impl From<String> for UserId {
    fn from(value: String) -> Self {
        Self(value)
    }
}

/// Member profile and loyalty state.
///
/// Carries no credential material; passwords live only in the credential store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct User {
    id: UserId,
    name: String,
    email: String,
    points: u64,
    level: Tier,
    member_since: NaiveDate,
    #[serde(default)]
    transactions: Vec<Transaction>,
    #[serde(default)]
    rewards: Vec<Reward>,
}

impl User {
    /// Creates a Green member with no Stars, purchases or rewards.
    #[must_use]
    pub fn new(
        id: impl Into<UserId>,
        name: impl Into<String>,
        email: impl Into<String>,
        member_since: NaiveDate,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            email: email.into(),
            points: 0,
            level: Tier::Green,
            member_since,
            transactions: Vec::new(),
            rewards: Vec::new(),
        }
    }

    /// Sets the Star balance without recording a transaction.
    #[must_use]
    pub const fn with_points(mut self, points: u64) -> Self {
        self.points = points;
        self
    }

    /// Sets the stored tier label.
    #[must_use]
    pub const fn with_level(mut self, level: Tier) -> Self {
        self.level = level;
        self
    }

    /// Sets the purchase history without crediting Stars.
    #[must_use]
    pub fn with_transactions(mut self, transactions: Vec<Transaction>) -> Self {
        self.transactions = transactions;
        self
    }

    /// Sets the granted rewards.
    #[must_use]
    pub fn with_rewards(mut self, rewards: Vec<Reward>) -> Self {
        self.rewards = rewards;
        self
    }

    /// Member id.
    #[must_use]
    pub const fn id(&self) -> &UserId {
        &self.id
    }

    /// Display name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Sign-in email.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Star balance.
    #[must_use]
    pub const fn points(&self) -> u64 {
        self.points
    }

    /// Tier label as stored on the member record.
    ///
    /// This is not recomputed from [`Self::points`]; see [`Tier::for_points`].
    #[must_use]
    pub const fn level(&self) -> Tier {
        self.level
    }

    /// Date the account was created.
    #[must_use]
    pub const fn member_since(&self) -> NaiveDate {
        self.member_since
    }

    /// Purchase history in stored order.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Granted rewards.
    #[must_use]
    pub fn rewards(&self) -> &[Reward] {
        &self.rewards
    }

    /// Appends a purchase to the history and credits its Stars.
    pub fn record_transaction(&mut self, transaction: Transaction) {
        self.points = self.points.saturating_add(transaction.points());
        self.transactions.push(transaction);
    }

    /// Redeems a granted reward by id.
    ///
    /// # Errors
    /// Returns error if the member holds no such reward or it is not available.
    pub fn redeem_reward(&mut self, id: &RewardId) -> Result<&Reward, RewardError> {
        let reward = self
            .rewards
            .iter_mut()
            .find(|r| r.id() == id)
            .ok_or_else(|| RewardError::NotFound { id: id.clone() })?;
        reward.redeem()?;
        Ok(&*reward)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::RewardStatus;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn member() -> User {
        User::new("1", "John Doe", "john@example.com", date(2022, 5, 15))
    }

    #[test]
    fn test_new_member_defaults() {
        let user = member();

        assert_eq!(user.id().as_str(), "1");
        assert_eq!(user.points(), 0);
        assert_eq!(user.level(), Tier::Green);
        assert!(user.transactions().is_empty());
        assert!(user.rewards().is_empty());
    }

    #[test]
    fn test_record_transaction_credits_points() {
        let mut user = member().with_points(230);

        user.record_transaction(Transaction::purchase("t4", date(2023, 10, 20), "Central Mall", 40));

        assert_eq!(user.points(), 270);
        assert_eq!(user.transactions().len(), 1);
        assert_eq!(user.transactions()[0].store(), "Central Mall");
    }

    #[test]
    fn test_redeem_reward() {
        let mut user = member().with_rewards(vec![Reward::new(
            "r2",
            date(2023, 9, 15),
            "Cake Slice",
            150,
            RewardStatus::Available,
        )]);

        let redeemed = user.redeem_reward(&RewardId::from("r2")).unwrap();
        assert_eq!(redeemed.status(), RewardStatus::Redeemed);

        let again = user.redeem_reward(&RewardId::from("r2"));
        assert!(matches!(again, Err(RewardError::NotAvailable { .. })));
    }

    #[test]
    fn test_redeem_unknown_reward() {
        let mut user = member();
        let result = user.redeem_reward(&RewardId::from("missing"));
        assert!(matches!(result, Err(RewardError::NotFound { .. })));
    }

    #[test]
    fn test_serialized_member_has_no_password() {
        let json = serde_json::to_string(&member()).unwrap();

        assert!(json.contains("\"memberSince\":\"2022-05-15\""));
        assert!(!json.to_lowercase().contains("password"));
    }
}
