//! Reward lifecycle error types.

use thiserror::Error;

use crate::domain::entities::{RewardId, RewardStatus};

/// Reward redemption failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[allow(missing_docs)]
pub enum RewardError {
    /// The member holds no reward with this id.
    #[error("reward {id} not found")]
    NotFound { id: RewardId },

    /// The reward was already redeemed or has expired.
    #[error("reward {id} is {status} and cannot be redeemed")]
    NotAvailable { id: RewardId, status: RewardStatus },
}
