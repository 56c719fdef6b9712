//! Ports implemented by infrastructure adapters.

mod credential_store_port;
mod session_restore_port;

pub use credential_store_port::{CredentialStorePort, NewAccount};
pub use session_restore_port::SessionRestorePort;

#[cfg(test)]
pub mod mocks {
    pub use super::credential_store_port::MockCredentialStorePort;
    pub use super::session_restore_port::mock::MockSessionRestore;
}
