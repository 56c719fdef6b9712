//! Application services.

mod session_manager;

pub use session_manager::{ConcurrencyPolicy, SessionManager, SessionOptions};
