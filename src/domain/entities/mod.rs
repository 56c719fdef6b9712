//! Domain entity definitions.

mod credentials;
mod reward;
mod session;
mod tier;
mod transaction;
mod user;

pub use credentials::{Email, Password};
pub use reward::{Reward, RewardId, RewardStatus};
pub use session::SessionState;
pub use tier::{Tier, TierProgress};
pub use transaction::Transaction;
pub use user::{User, UserId};
