//! Route selection driven by session state.

use tokio::sync::watch;

use crate::application::SessionManager;
use crate::domain::entities::SessionState;

/// Top-level screen groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// Sign-in and sign-up screens.
    Login,
    /// Member tabs: home, stores, rewards, history, profile.
    Home,
}

impl Route {
    /// Route a session in this state belongs on.
    #[must_use]
    pub const fn for_state(state: &SessionState) -> Self {
        if state.is_authenticated() {
            Self::Home
        } else {
            Self::Login
        }
    }
}

/// Follows session transitions and reports when the route must change.
pub struct Navigator {
    rx: watch::Receiver<SessionState>,
    current: Route,
}

impl Navigator {
    /// Starts following the manager from its current state.
    #[must_use]
    pub fn new(manager: &SessionManager) -> Self {
        let mut rx = manager.subscribe();
        let current = Route::for_state(&rx.borrow_and_update());
        Self { rx, current }
    }

    /// Route last reported.
    #[must_use]
    pub const fn current(&self) -> Route {
        self.current
    }

    /// Waits until the session moves to a different route.
    ///
    /// Returns `None` once the session manager is gone.
    pub async fn next_route(&mut self) -> Option<Route> {
        loop {
            self.rx.changed().await.ok()?;
            let route = Route::for_state(&self.rx.borrow_and_update());
            if route != self.current {
                self.current = route;
                return Some(route);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::application::{LoginRequest, SessionOptions};
    use crate::domain::ports::mocks::MockSessionRestore;
    use crate::infrastructure::credentials::InMemoryCredentialStore;

    fn manager() -> SessionManager {
        SessionManager::new(
            Arc::new(InMemoryCredentialStore::with_demo_accounts()),
            Arc::new(MockSessionRestore::empty()),
            SessionOptions::default(),
        )
    }

    #[tokio::test]
    async fn test_routes_follow_login_and_logout() {
        let manager = manager();
        let mut navigator = Navigator::new(&manager);
        assert_eq!(navigator.current(), Route::Login);

        let request = LoginRequest::new("john@example.com", "password123").unwrap();
        manager.login(&request).await.unwrap();
        assert_eq!(navigator.next_route().await, Some(Route::Home));

        manager.logout();
        assert_eq!(navigator.next_route().await, Some(Route::Login));
        assert_eq!(navigator.current(), Route::Login);
    }

    #[tokio::test]
    async fn test_navigator_ends_with_manager() {
        let manager = manager();
        let mut navigator = Navigator::new(&manager);

        drop(manager);

        assert_eq!(navigator.next_route().await, None);
    }
}
