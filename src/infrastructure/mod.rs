//! Infrastructure layer with adapters for configuration, credentials and
//! session restore.

/// Application configuration.
pub mod config;
/// Credential store adapters.
pub mod credentials;
/// Session restore adapters.
pub mod storage;

pub use config::{AppConfig, CliArgs, Command, LogLevel, StorageManager};
pub use credentials::InMemoryCredentialStore;
pub use storage::EphemeralSessionStore;
