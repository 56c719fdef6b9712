//! Domain error types.

mod auth_error;
mod reward_error;
mod validation_error;

pub use auth_error::AuthError;
pub use reward_error::RewardError;
pub use validation_error::{Field, ValidationError};
