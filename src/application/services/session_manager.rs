//! Session manager: the single owner of the signed-in member.
//!
//! Async requests (restore, login, register) share one in-flight slot. Every
//! request records the session epoch when it starts; `logout` and
//! supersession bump the epoch, and a result is only applied if its epoch is
//! still current. The epoch check and the state write happen under the same
//! lock, so a late login can never undo an explicit logout.

use std::sync::Arc;

use parking_lot::Mutex;
use serde::{Deserialize, Serialize};
use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::application::dto::{LoginRequest, RegisterRequest, RegisterResponse};
use crate::application::use_cases::{LoginUseCase, RegisterUseCase, RestoreSessionUseCase};
use crate::domain::entities::{SessionState, User};
use crate::domain::errors::AuthError;
use crate::domain::ports::{CredentialStorePort, SessionRestorePort};

/// What to do when a request arrives while another is in flight.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum ConcurrencyPolicy {
    /// Fail the new request with [`AuthError::Busy`].
    #[default]
    Reject,
    /// Start the new request; the pending one resolves with
    /// [`AuthError::Superseded`].
    LatestWins,
}

impl std::fmt::Display for ConcurrencyPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Reject => write!(f, "reject"),
            Self::LatestWins => write!(f, "latest-wins"),
        }
    }
}

/// Session manager behaviour switches.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SessionOptions {
    /// Handling of a request made while another is pending.
    pub concurrency: ConcurrencyPolicy,
    /// Sign the caller in after a successful registration.
    pub sign_in_after_register: bool,
}

#[derive(Debug, Default)]
struct Control {
    epoch: u64,
    next_ticket: u64,
    in_flight: Option<u64>,
}

/// Holds the in-flight slot until dropped.
struct Flight<'a> {
    control: &'a Mutex<Control>,
    ticket: u64,
    epoch: u64,
}

impl Drop for Flight<'_> {
    fn drop(&mut self) {
        let mut control = self.control.lock();
        if control.in_flight == Some(self.ticket) {
            control.in_flight = None;
        }
    }
}

/// Owns the current session and exposes sign-in, sign-up and sign-out.
///
/// Construct one per process and share it through `Arc`. Observers use
/// [`SessionManager::subscribe`] to react to state changes; the manager itself
/// performs no navigation.
pub struct SessionManager {
    login: LoginUseCase,
    register: RegisterUseCase,
    restore: RestoreSessionUseCase,
    options: SessionOptions,
    state: watch::Sender<SessionState>,
    control: Mutex<Control>,
}

impl SessionManager {
    /// Creates an anonymous session manager.
    #[must_use]
    pub fn new(
        credentials: Arc<dyn CredentialStorePort>,
        restore_port: Arc<dyn SessionRestorePort>,
        options: SessionOptions,
    ) -> Self {
        let (state, _) = watch::channel(SessionState::Anonymous);
        Self {
            login: LoginUseCase::new(credentials.clone()),
            register: RegisterUseCase::new(credentials.clone()),
            restore: RestoreSessionUseCase::new(restore_port, credentials),
            options,
            state,
            control: Mutex::new(Control::default()),
        }
    }

    /// Switches the manager was built with.
    #[must_use]
    pub const fn options(&self) -> SessionOptions {
        self.options
    }

    /// Returns a receiver that observes every session transition.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Returns a copy of the current session state.
    #[must_use]
    pub fn snapshot(&self) -> SessionState {
        self.state.borrow().clone()
    }

    /// Returns the signed-in member, or `None` while anonymous.
    #[must_use]
    pub fn current_user(&self) -> Option<User> {
        self.state.borrow().user().cloned()
    }

    /// Returns whether a member is signed in.
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        self.state.borrow().is_authenticated()
    }

    /// Returns whether a restore, login or register request is pending.
    #[must_use]
    pub fn is_busy(&self) -> bool {
        self.control.lock().in_flight.is_some()
    }

    /// Checks for a remembered session and signs it in.
    ///
    /// # Errors
    /// Returns error if another request holds the slot, the result was
    /// superseded, or the member lookup failed.
    pub async fn restore(&self) -> Result<Option<User>, AuthError> {
        let flight = self.begin("restore")?;

        let Some(user) = self.restore.execute().await? else {
            return Ok(None);
        };

        self.commit(&flight, user.clone())?;
        Ok(Some(user))
    }

    /// Signs in with email and password.
    ///
    /// State changes only after the credential store confirms the match.
    ///
    /// # Errors
    /// Returns [`AuthError::InvalidCredentials`] on mismatch,
    /// [`AuthError::Busy`] or [`AuthError::Superseded`] on concurrent use, or
    /// the store's error.
    pub async fn login(&self, request: &LoginRequest) -> Result<User, AuthError> {
        let flight = self.begin("login")?;

        let user = self.login.execute(request).await?;

        self.commit(&flight, user.clone())?;
        info!(user_id = %user.id(), "Signed in");
        Ok(user)
    }

    /// Creates an account.
    ///
    /// The caller stays anonymous unless `sign_in_after_register` is set.
    /// A registration that completes after being superseded still reports
    /// the created account, but does not sign in.
    ///
    /// # Errors
    /// Returns [`AuthError::EmailTaken`] on conflict, [`AuthError::Busy`] if
    /// the slot is held, or the store's error.
    pub async fn register(&self, request: RegisterRequest) -> Result<RegisterResponse, AuthError> {
        let flight = self.begin("register")?;

        let user = self.register.execute(request).await?;

        if !self.options.sign_in_after_register {
            return Ok(RegisterResponse::new(user, false));
        }

        match self.commit(&flight, user.clone()) {
            Ok(()) => {
                info!(user_id = %user.id(), "Signed in after registration");
                Ok(RegisterResponse::new(user, true))
            }
            Err(e) => {
                debug!(error = %e, "Skipping sign-in after registration");
                Ok(RegisterResponse::new(user, false))
            }
        }
    }

    /// Signs out. A no-op while anonymous.
    ///
    /// Any request still in flight is invalidated and will not sign in, and
    /// its slot is released so a new request can start right away.
    pub fn logout(&self) {
        let mut control = self.control.lock();
        control.epoch += 1;
        control.in_flight = None;

        let signed_out = self.state.send_if_modified(|state| {
            if state.is_authenticated() {
                *state = SessionState::Anonymous;
                true
            } else {
                false
            }
        });

        if signed_out {
            info!(epoch = control.epoch, "Signed out");
        } else {
            debug!(epoch = control.epoch, "Logout while anonymous");
        }
    }

    fn begin(&self, operation: &'static str) -> Result<Flight<'_>, AuthError> {
        let mut control = self.control.lock();

        if control.in_flight.is_some() {
            match self.options.concurrency {
                ConcurrencyPolicy::Reject => {
                    warn!(operation, "Rejecting request, another is in flight");
                    return Err(AuthError::Busy);
                }
                ConcurrencyPolicy::LatestWins => {
                    control.epoch += 1;
                    debug!(operation, epoch = control.epoch, "Superseding pending request");
                }
            }
        }

        control.next_ticket += 1;
        let ticket = control.next_ticket;
        control.in_flight = Some(ticket);
        debug!(operation, ticket, epoch = control.epoch, "Request started");

        Ok(Flight {
            control: &self.control,
            ticket,
            epoch: control.epoch,
        })
    }

    fn commit(&self, flight: &Flight<'_>, user: User) -> Result<(), AuthError> {
        let control = self.control.lock();
        if control.epoch != flight.epoch {
            info!(
                ticket = flight.ticket,
                started = flight.epoch,
                current = control.epoch,
                "Discarding stale session result"
            );
            return Err(AuthError::Superseded);
        }

        self.state.send_replace(SessionState::Authenticated(user));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use super::*;
    use crate::domain::entities::Tier;
    use crate::domain::ports::mocks::{MockCredentialStorePort, MockSessionRestore};
    use crate::infrastructure::credentials::InMemoryCredentialStore;
    use tokio_test::{assert_pending, assert_ready, task};

    const LATENCY: Duration = Duration::from_millis(1000);

    fn manager_with(options: SessionOptions) -> SessionManager {
        SessionManager::new(
            Arc::new(InMemoryCredentialStore::with_demo_accounts().with_latency(LATENCY)),
            Arc::new(MockSessionRestore::empty()),
            options,
        )
    }

    fn manager() -> SessionManager {
        manager_with(SessionOptions::default())
    }

    fn john() -> LoginRequest {
        LoginRequest::new("john@example.com", "password123").unwrap()
    }

    #[tokio::test(start_paused = true)]
    async fn test_initial_state_is_anonymous() {
        let manager = manager();

        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
        assert_eq!(manager.snapshot(), SessionState::Anonymous);
    }

    #[tokio::test(start_paused = true)]
    async fn test_unknown_credentials_stay_anonymous() {
        let manager = manager();

        for (email, password) in [
            ("john@example.com", "password124"),
            ("jane@example.com", "password123"),
            ("JOHN@example.com", "password123"),
        ] {
            let request = LoginRequest::new(email, password).unwrap();
            let result = manager.login(&request).await;

            assert_eq!(result, Err(AuthError::InvalidCredentials));
            assert!(!manager.is_authenticated());
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_demo_login_matches_stored_record() {
        let manager = manager();

        let user = manager.login(&john()).await.unwrap();

        assert_eq!(user.id().as_str(), "1");
        assert_eq!(user.points(), 230);
        assert_eq!(user.level(), Tier::Gold);
        assert_eq!(manager.current_user(), Some(user));
        assert!(manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_takes_simulated_latency() {
        let manager = manager();
        let started = tokio::time::Instant::now();

        manager.login(&john()).await.unwrap();

        assert!(started.elapsed() >= LATENCY);
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_after_login() {
        let manager = manager();
        manager.login(&john()).await.unwrap();

        manager.logout();

        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_while_anonymous_is_noop() {
        let manager = manager();
        let mut rx = manager.subscribe();

        manager.logout();
        manager.logout();

        assert_eq!(manager.snapshot(), SessionState::Anonymous);
        assert!(!rx.has_changed().unwrap());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_taken_and_novel_email() {
        let manager = manager();

        let taken = RegisterRequest::new("John", "john@example.com", "password123", "password123")
            .unwrap();
        let novel =
            RegisterRequest::new("Ann Lee", "ann@example.com", "espresso42", "espresso42").unwrap();

        assert!(matches!(
            manager.register(taken).await,
            Err(AuthError::EmailTaken { .. })
        ));

        let response = manager.register(novel).await.unwrap();
        assert!(!response.signed_in);
        assert!(!manager.is_authenticated());

        let login = LoginRequest::new("ann@example.com", "espresso42").unwrap();
        let user = manager.login(&login).await.unwrap();
        assert_eq!(user.id(), response.user.id());
    }

    #[tokio::test(start_paused = true)]
    async fn test_register_can_sign_in() {
        let manager = manager_with(SessionOptions {
            sign_in_after_register: true,
            ..SessionOptions::default()
        });
        let request =
            RegisterRequest::new("Ann Lee", "ann@example.com", "espresso42", "espresso42").unwrap();

        let response = manager.register(request).await.unwrap();

        assert!(response.signed_in);
        assert_eq!(manager.current_user().map(|u| u.name().to_string()), Some("Ann Lee".into()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_logout_during_login_wins() {
        let manager = manager();

        let request = john();
        let mut login = task::spawn(manager.login(&request));
        assert_pending!(login.poll());
        assert!(manager.is_busy());

        manager.logout();

        tokio::time::advance(LATENCY).await;
        let result = assert_ready!(login.poll());

        assert_eq!(result, Err(AuthError::Superseded));
        assert!(!manager.is_authenticated());
        assert!(manager.current_user().is_none());
        assert!(!manager.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_login_after_logout_with_request_pending() {
        let manager = manager();

        let request = john();
        let mut stale = task::spawn(manager.login(&request));
        assert_pending!(stale.poll());

        manager.logout();
        assert!(!manager.is_busy());

        let user = manager.login(&request).await.unwrap();
        assert_eq!(user.name(), "John Doe");
        assert!(manager.is_authenticated());

        assert_eq!(assert_ready!(stale.poll()), Err(AuthError::Superseded));
        assert!(manager.is_authenticated());
        assert!(!manager.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_reject_policy_refuses_second_login() {
        let manager = manager();

        let request = john();
        let mut first = task::spawn(manager.login(&request));
        assert_pending!(first.poll());

        let second = manager.login(&john()).await;
        assert_eq!(second, Err(AuthError::Busy));

        tokio::time::advance(LATENCY).await;
        assert!(assert_ready!(first.poll()).is_ok());
        assert!(manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_latest_wins_policy_supersedes_pending_login() {
        let manager = manager_with(SessionOptions {
            concurrency: ConcurrencyPolicy::LatestWins,
            ..SessionOptions::default()
        });

        let request = john();
        let mut first = task::spawn(manager.login(&request));
        assert_pending!(first.poll());

        let mut second = task::spawn(manager.login(&request));
        assert_pending!(second.poll());

        tokio::time::advance(LATENCY).await;

        assert_eq!(assert_ready!(first.poll()), Err(AuthError::Superseded));
        assert!(assert_ready!(second.poll()).is_ok());
        assert!(manager.is_authenticated());
        assert!(!manager.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_dropped_request_releases_slot() {
        let manager = manager();

        let request = john();
        let mut login = task::spawn(manager.login(&request));
        assert_pending!(login.poll());
        drop(login);

        assert!(!manager.is_busy());
        assert!(manager.login(&john()).await.is_ok());
    }

    #[tokio::test(start_paused = true)]
    async fn test_backend_failure_leaves_state_untouched() {
        let mut store = MockCredentialStorePort::new();
        store
            .expect_authenticate()
            .returning(|_, _| Err(AuthError::backend("connection reset")));

        let manager = SessionManager::new(
            Arc::new(store),
            Arc::new(MockSessionRestore::empty()),
            SessionOptions::default(),
        );

        let result = manager.login(&john()).await;

        assert!(matches!(result, Err(AuthError::Backend { .. })));
        assert!(!manager.is_authenticated());
        assert!(!manager.is_busy());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_signs_in_remembered_member() {
        let manager = SessionManager::new(
            Arc::new(InMemoryCredentialStore::with_demo_accounts()),
            Arc::new(MockSessionRestore::remembering("1")),
            SessionOptions::default(),
        );

        let user = manager.restore().await.unwrap();

        assert_eq!(user.map(|u| u.id().as_str().to_string()), Some("1".into()));
        assert!(manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_restore_without_saved_session() {
        let manager = manager();

        assert_eq!(manager.restore().await, Ok(None));
        assert!(!manager.is_authenticated());
    }

    #[tokio::test(start_paused = true)]
    async fn test_subscribers_observe_transitions() {
        let manager = manager();
        let mut rx = manager.subscribe();

        manager.login(&john()).await.unwrap();
        assert!(rx.has_changed().unwrap());
        assert!(rx.borrow_and_update().is_authenticated());

        manager.logout();
        assert!(rx.has_changed().unwrap());
        assert!(!rx.borrow_and_update().is_authenticated());
    }
}
