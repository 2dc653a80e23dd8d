use std::sync::{PoisonError, RwLock};

use tasklog_core::Session;
use tokio::sync::watch;

use crate::error::SessionError;
use crate::store::SessionStore;

/// Which screen the client should be showing.
///
/// Stands in for browser navigation: the gateway moves the route to
/// `Login` when the server rejects the token, login moves it to `Tasks`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    Login,
    Tasks,
}

/// The single owner of session state, injected into the gateway and flows.
///
/// Lifecycle: [`SessionContext::init`] at startup (restores any persisted
/// session), [`set_session`](Self::set_session) on login,
/// [`clear_session`](Self::clear_session) on logout or auth failure. There is
/// no expiry timer; expiry is only ever detected from a server response.
pub struct SessionContext {
    store: Box<dyn SessionStore>,
    current: RwLock<Option<Session>>,
    route: watch::Sender<Route>,
}

impl SessionContext {
    /// Restore the persisted session (if any) and pick the starting route.
    pub fn init(store: impl SessionStore + 'static) -> Self {
        let current = store.load();
        let route = if current.is_some() {
            Route::Tasks
        } else {
            Route::Login
        };
        tracing::debug!(restored = current.is_some(), "session context initialized");
        Self {
            store: Box::new(store),
            current: RwLock::new(current),
            route: watch::Sender::new(route),
        }
    }

    /// Persist and activate `session`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::Store` if the session cannot be persisted; the
    /// in-memory session is left unchanged in that case.
    pub fn set_session(&self, session: Session) -> Result<(), SessionError> {
        self.store.save(&session)?;
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = Some(session);
        Ok(())
    }

    /// Current session, or `None` when anonymous.
    #[must_use]
    pub fn get_session(&self) -> Option<Session> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current session or `SessionError::NotAuthenticated`.
    ///
    /// # Errors
    ///
    /// Returns `SessionError::NotAuthenticated` when no session is active.
    pub fn require_session(&self) -> Result<Session, SessionError> {
        self.get_session().ok_or(SessionError::NotAuthenticated)
    }

    /// Bearer token of the current session.
    #[must_use]
    pub fn token(&self) -> Option<String> {
        self.current
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .map(|s| s.token.clone())
    }

    /// Drop the session from memory and from the store. Never fails:
    /// a store error is logged and the in-memory session is still cleared.
    pub fn clear_session(&self) {
        *self.current.write().unwrap_or_else(PoisonError::into_inner) = None;
        if let Err(error) = self.store.clear() {
            tracing::warn!(%error, "failed to clear persisted session");
        }
    }

    #[must_use]
    pub fn route(&self) -> Route {
        *self.route.borrow()
    }

    pub fn navigate(&self, route: Route) {
        self.route.send_replace(route);
    }

    /// Watch route changes (e.g. to bounce a UI back to the login screen).
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Route> {
        self.route.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemorySessionStore;
    use tasklog_core::UserProfile;
    use tasklog_core::enums::Role;

    fn session(token: &str) -> Session {
        Session {
            token: token.into(),
            user: UserProfile {
                id: 1,
                name: "Asha".into(),
                username: "asha".into(),
                role: Role::Manager,
            },
        }
    }

    #[test]
    fn starts_on_login_without_stored_session() {
        let ctx = SessionContext::init(MemorySessionStore::new());
        assert!(ctx.get_session().is_none());
        assert!(ctx.token().is_none());
        assert_eq!(ctx.route(), Route::Login);
        assert!(matches!(ctx.require_session(), Err(SessionError::NotAuthenticated)));
    }

    #[test]
    fn restores_stored_session_at_startup() {
        let ctx = SessionContext::init(MemorySessionStore::with_session(session("abc")));
        assert_eq!(ctx.token().as_deref(), Some("abc"));
        assert_eq!(ctx.route(), Route::Tasks);
    }

    #[test]
    fn set_then_clear() {
        let ctx = SessionContext::init(MemorySessionStore::new());
        ctx.set_session(session("t1")).expect("set");
        assert_eq!(ctx.token().as_deref(), Some("t1"));

        ctx.clear_session();
        assert!(ctx.get_session().is_none());
    }

    #[test]
    fn subscribers_see_route_changes() {
        let ctx = SessionContext::init(MemorySessionStore::new());
        let mut rx = ctx.subscribe();
        ctx.navigate(Route::Tasks);
        assert!(rx.has_changed().expect("sender alive"));
        assert_eq!(*rx.borrow_and_update(), Route::Tasks);
    }
}
