//! Session restore adapters.

mod ephemeral_session;

pub use ephemeral_session::EphemeralSessionStore;
