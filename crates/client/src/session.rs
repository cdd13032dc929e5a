//! Persisted session state and session-expiry notification.
//!
//! The bearer token and the serialized user profile live in an injected
//! [`SessionStore`]. [`Session`] wraps the store with the login, logout and
//! expiry transitions, and broadcasts [`SessionEvent::Expired`] when the
//! backend answers 401 so that the host can route back to its login entry
//! point.

use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, PoisonError, RwLock};

use tokio::sync::broadcast;

/// Session store key of the bearer token.
pub const TOKEN_KEY: &str = "token";

/// Session store key of the serialized user profile.
pub const USER_KEY: &str = "user";

/// Session store key of the last authentication error shown to the user.
pub const AUTH_ERROR_KEY: &str = "auth_error";

/// Buffer capacity of the session event channel.
const EVENT_CAPACITY: usize = 16;

/// Key/value storage for session data.
pub trait SessionStore: Send + Sync {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    /// Remove `key`. Removing an absent key is a no-op.
    fn clear(&self, key: &str);
}

/// Process-local [`SessionStore`].
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    entries: RwLock<HashMap<String, String>>,
}

impl MemorySessionStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SessionStore for MemorySessionStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(key)
            .cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key.to_string(), value.to_string());
    }

    fn clear(&self, key: &str) {
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(key);
    }
}

/// Notifications emitted by the transport layer to the host application.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionEvent {
    /// The backend rejected the credential; the session has been cleared.
    Expired,
}

/// Session state shared by every in-flight request.
pub struct Session {
    store: Arc<dyn SessionStore>,
    events: broadcast::Sender<SessionEvent>,
    /// Set once `Expired` has been emitted; re-armed by the next login.
    expired: AtomicBool,
}

impl Session {
    pub fn new(store: Arc<dyn SessionStore>) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self {
            store,
            events,
            expired: AtomicBool::new(false),
        }
    }

    pub fn store(&self) -> &Arc<dyn SessionStore> {
        &self.store
    }

    /// Receive session events from now on.
    pub fn subscribe(&self) -> broadcast::Receiver<SessionEvent> {
        self.events.subscribe()
    }

    /// The current bearer token, if one is stored and non-empty.
    pub fn token(&self) -> Option<String> {
        self.store.get(TOKEN_KEY).filter(|t| !t.trim().is_empty())
    }

    /// The stored user profile JSON.
    pub fn user_json(&self) -> Option<String> {
        self.store.get(USER_KEY)
    }

    /// Record a successful login.
    pub fn begin(&self, token: &str, user_json: &str) {
        self.store.set(TOKEN_KEY, token);
        self.store.set(USER_KEY, user_json);
        self.store.clear(AUTH_ERROR_KEY);
        self.expired.store(false, Ordering::SeqCst);
    }

    /// Replace the token after a refresh.
    pub fn set_token(&self, token: &str) {
        self.store.set(TOKEN_KEY, token);
        self.expired.store(false, Ordering::SeqCst);
    }

    /// Explicit logout. Emits no event.
    pub fn end(&self) {
        self.store.clear(TOKEN_KEY);
        self.store.clear(USER_KEY);
        self.store.clear(AUTH_ERROR_KEY);
    }

    /// Handle a 401 from the backend.
    ///
    /// Always clears the token and user. Emits [`SessionEvent::Expired`] only
    /// for the first 401 since the last login, however many requests
    /// observe it concurrently. Returns whether this call emitted the event.
    pub fn expire(&self) -> bool {
        self.store.clear(TOKEN_KEY);
        self.store.clear(USER_KEY);

        if self.expired.swap(true, Ordering::SeqCst) {
            return false;
        }

        tracing::warn!("Session expired, credentials cleared");
        // Ignore the SendError; it only means nobody is subscribed.
        let _ = self.events.send(SessionEvent::Expired);
        true
    }
}

impl std::fmt::Debug for Session {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Session")
            .field("authenticated", &self.token().is_some())
            .field("expired", &self.expired.load(Ordering::SeqCst))
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> Session {
        Session::new(Arc::new(MemorySessionStore::new()))
    }

    #[test]
    fn memory_store_set_get_clear() {
        let store = MemorySessionStore::new();
        assert_eq!(store.get("token"), None);
        store.set("token", "abc");
        assert_eq!(store.get("token").as_deref(), Some("abc"));
        store.clear("token");
        store.clear("token");
        assert_eq!(store.get("token"), None);
    }

    #[test]
    fn blank_token_is_treated_as_absent() {
        let session = session();
        session.set_token("   ");
        assert_eq!(session.token(), None);
    }

    #[test]
    fn begin_stores_credentials() {
        let session = session();
        session.store().set(AUTH_ERROR_KEY, "bad password");
        session.begin("tok-1", r#"{"id":1}"#);
        assert_eq!(session.token().as_deref(), Some("tok-1"));
        assert_eq!(session.user_json().as_deref(), Some(r#"{"id":1}"#));
        assert_eq!(session.store().get(AUTH_ERROR_KEY), None);
    }

    #[test]
    fn end_clears_everything_without_event() {
        let session = session();
        let mut rx = session.subscribe();
        session.begin("tok-1", "{}");
        session.end();
        assert_eq!(session.token(), None);
        assert_eq!(session.user_json(), None);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn expire_emits_once_until_next_login() {
        let session = session();
        let mut rx = session.subscribe();
        session.begin("tok-1", "{}");

        assert!(session.expire());
        assert!(!session.expire());
        assert_eq!(session.token(), None);
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Expired);
        assert!(rx.try_recv().is_err());

        session.begin("tok-2", "{}");
        assert!(session.expire());
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Expired);
    }

    #[test]
    fn concurrent_expiry_emits_single_event() {
        let session = Arc::new(session());
        let mut rx = session.subscribe();
        session.begin("tok-1", "{}");

        let handles: Vec<_> = (0..8)
            .map(|_| {
                let session = Arc::clone(&session);
                std::thread::spawn(move || session.expire())
            })
            .collect();
        let emitted = handles
            .into_iter()
            .map(|h| h.join().unwrap())
            .filter(|emitted| *emitted)
            .count();

        assert_eq!(emitted, 1);
        assert_eq!(rx.try_recv().unwrap(), SessionEvent::Expired);
        assert!(rx.try_recv().is_err());
        assert_eq!(session.token(), None);
    }
}
