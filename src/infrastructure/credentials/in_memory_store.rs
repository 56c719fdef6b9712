//! In-memory credential store with simulated latency.

use std::time::Duration;

use async_trait::async_trait;
use chrono::Local;
use parking_lot::RwLock;
use tracing::debug;

use crate::domain::entities::{Email, Password, User, UserId};
use crate::domain::errors::AuthError;
use crate::domain::ports::{CredentialStorePort, NewAccount};

use super::demo;

/// Stored account: credentials plus the member they unlock.
#[derive(Debug, Clone)]
pub struct CredentialRecord {
    /// Sign-in email.
    pub email: Email,
    /// Sign-in password.
    pub password: Password,
    /// Member the credentials belong to.
    pub user: User,
}

/// Simulated round-trip time for each store operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StoreLatency {
    /// Delay before `authenticate` answers.
    pub authenticate: Duration,
    /// Delay before `register` answers.
    pub register: Duration,
    /// Delay before `find_by_id` answers.
    pub lookup: Duration,
}

impl StoreLatency {
    /// Same delay for every operation.
    #[must_use]
    pub const fn uniform(latency: Duration) -> Self {
        Self {
            authenticate: latency,
            register: latency,
            lookup: latency,
        }
    }
}

/// Credential store backed by a process-local account list.
pub struct InMemoryCredentialStore {
    records: RwLock<Vec<CredentialRecord>>,
    latency: StoreLatency,
}

impl InMemoryCredentialStore {
    /// Creates an empty store with no latency.
    #[must_use]
    pub fn new() -> Self {
        Self::from_records(Vec::new())
    }

    /// Creates a store holding `records`.
    #[must_use]
    pub fn from_records(records: Vec<CredentialRecord>) -> Self {
        Self {
            records: RwLock::new(records),
            latency: StoreLatency::default(),
        }
    }

    /// Creates a store seeded with the demo member.
    #[must_use]
    pub fn with_demo_accounts() -> Self {
        Self::from_records(demo::accounts())
    }

    /// Delays every call by `latency`, like a round trip to a server.
    #[must_use]
    pub const fn with_latency(self, latency: Duration) -> Self {
        self.with_store_latency(StoreLatency::uniform(latency))
    }

    /// Delays each operation by its own round-trip time.
    #[must_use]
    pub const fn with_store_latency(mut self, latency: StoreLatency) -> Self {
        self.latency = latency;
        self
    }

    /// Number of stored accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.read().len()
    }

    /// Returns whether no account is stored.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.read().is_empty()
    }

    async fn simulate_round_trip(latency: Duration) {
        if !latency.is_zero() {
            tokio::time::sleep(latency).await;
        }
    }
}

impl Default for InMemoryCredentialStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CredentialStorePort for InMemoryCredentialStore {
    async fn authenticate(&self, email: &Email, password: &Password) -> Result<User, AuthError> {
        Self::simulate_round_trip(self.latency.authenticate).await;

        let records = self.records.read();
        let user = records
            .iter()
            .find(|r| r.email == *email && r.password.matches(password))
            .map(|r| r.user.clone());

        user.ok_or(AuthError::InvalidCredentials)
    }

    async fn register(&self, account: NewAccount) -> Result<User, AuthError> {
        Self::simulate_round_trip(self.latency.register).await;

        let mut records = self.records.write();
        if records.iter().any(|r| r.email == account.email) {
            debug!(email = %account.email, "Email already registered");
            return Err(AuthError::email_taken(account.email.as_str()));
        }

        let user = User::new(
            UserId::generate(),
            account.name.clone(),
            account.email.as_str(),
            Local::now().date_naive(),
        );
        records.push(CredentialRecord {
            email: account.email.clone(),
            password: account.password.clone(),
            user: user.clone(),
        });
        debug!(user_id = %user.id(), total = records.len(), "Account stored");

        Ok(user)
    }

    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, AuthError> {
        Self::simulate_round_trip(self.latency.lookup).await;

        Ok(self
            .records
            .read()
            .iter()
            .find(|r| r.user.id() == id)
            .map(|r| r.user.clone()))
    }
}
