//! Application layer with use cases, DTOs and the session manager.

/// Data transfer objects.
pub mod dto;
/// Long-lived application services.
pub mod services;
/// Use case implementations.
pub mod use_cases;

pub use dto::{LoginRequest, RegisterRequest, RegisterResponse};
pub use services::{ConcurrencyPolicy, SessionManager, SessionOptions};
pub use use_cases::{LoginUseCase, RegisterUseCase, RestoreSessionUseCase};
