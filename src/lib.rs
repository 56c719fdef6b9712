//! Brewcard - session core for a coffee-shop loyalty program client.
//!
//! Owns the signed-in member, exposes sign-in, sign-up and sign-out, and
//! publishes session state for screens to render and route from.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing use cases, DTOs and the session manager.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for configuration and backends.
pub mod infrastructure;
/// Presentation layer containing forms, views and routing.
pub mod presentation;

/// Current version of the application.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "brewcard";
