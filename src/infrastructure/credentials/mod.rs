//! Credential store adapters.

pub mod demo;
mod in_memory_store;

pub use demo::{DEMO_EMAIL, DEMO_PASSWORD};
pub use in_memory_store::{CredentialRecord, InMemoryCredentialStore, StoreLatency};
