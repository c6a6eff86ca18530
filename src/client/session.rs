//! Session state for the authenticated viewer.
//!
//! The session is a token plus a role, persisted in tab-scoped storage under two keys. Views
//! never touch the storage directly: they read through [`SessionContext`], and only the login
//! and logout flows call its two mutators, [`SessionContext::establish_session`] and
//! [`SessionContext::clear_session`].

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dioxus_logger::tracing;
use serde::{Deserialize, Serialize};

/// Storage key holding the opaque session token.
pub const SESSION_TOKEN_KEY: &str = "token";

/// Storage key holding the session role.
pub const SESSION_ROLE_KEY: &str = "role";

/// Viewer role governing which protected views are reachable.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Role {
    /// Full access, including user management and the audit log.
    #[serde(rename = "administrator", alias = "administrador", alias = "admin")]
    Administrator,
    /// Restricted access to the operational collections.
    #[serde(rename = "operator", alias = "operador")]
    Operator,
}

impl Role {
    /// Value written to session storage.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Administrator => "administrator",
            Self::Operator => "operator",
        }
    }

    /// Parses a stored or wire role, accepting the backend's Spanish spellings.
    pub fn from_wire(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "administrator" | "administrador" | "admin" => Some(Self::Administrator),
            "operator" | "operador" => Some(Self::Operator),
            _ => None,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Self::Administrator => "Administrador",
            Self::Operator => "Operador",
        }
    }
}

/// The authenticated viewer's credential and role.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Session {
    token: String,
    role: Role,
}

impl Session {
    /// Creates a session, or `None` when the token is blank.
    pub fn new(token: impl Into<String>, role: Role) -> Option<Self> {
        let token = token.into();
        if token.trim().is_empty() {
            return None;
        }

        Some(Self { token, role })
    }

    pub fn token(&self) -> &str {
        &self.token
    }

    pub fn role(&self) -> Role {
        self.role
    }
}

/// Resolution state of the tab's session.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    /// Storage has not been read yet; no gating decision can be made.
    #[default]
    Resolving,
    /// No valid session exists.
    Anonymous,
    Authenticated(Session),
}

impl SessionState {
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            _ => None,
        }
    }

    pub fn is_resolving(&self) -> bool {
        matches!(self, Self::Resolving)
    }
}

/// Key/value storage backing the session.
///
/// The browser implementation is tab-scoped (`window.sessionStorage`), so the session is
/// gone when the tab closes.
pub trait SessionStorage {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&self, key: &str, value: &str);
    fn remove(&self, key: &str);
}

/// In-memory storage, used by tests and non-browser targets.
#[derive(Clone, Debug, Default)]
pub struct MemorySessionStorage {
    entries: Rc<RefCell<HashMap<String, String>>>,
}

impl MemorySessionStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }
}

impl SessionStorage for MemorySessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn set(&self, key: &str, value: &str) {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
    }

    fn remove(&self, key: &str) {
        self.entries.borrow_mut().remove(key);
    }
}

/// Storage backed by the browser tab's `sessionStorage`.
#[cfg(feature = "web")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStorage;

#[cfg(feature = "web")]
impl BrowserSessionStorage {
    fn storage() -> Option<web_sys::Storage> {
        web_sys::window().and_then(|window| window.session_storage().ok().flatten())
    }
}

#[cfg(feature = "web")]
impl SessionStorage for BrowserSessionStorage {
    fn get(&self, key: &str) -> Option<String> {
        Self::storage().and_then(|storage| storage.get_item(key).ok().flatten())
    }

    fn set(&self, key: &str, value: &str) {
        match Self::storage() {
            Some(storage) => {
                if storage.set_item(key, value).is_err() {
                    tracing::warn!(key = %key, "Failed to write session storage entry");
                }
            }
            None => tracing::warn!("Session storage is unavailable"),
        }
    }

    fn remove(&self, key: &str) {
        if let Some(storage) = Self::storage() {
            if storage.remove_item(key).is_err() {
                tracing::warn!(key = %key, "Failed to remove session storage entry");
            }
        }
    }
}

/// Explicit session context injected into every view that needs the session.
#[derive(Clone, Debug)]
pub struct SessionContext<S> {
    storage: S,
    state: SessionState,
}

impl<S: SessionStorage> SessionContext<S> {
    /// Creates an unresolved context over `storage`.
    pub fn new(storage: S) -> Self {
        Self {
            storage,
            state: SessionState::Resolving,
        }
    }

    /// Reads the persisted session, if any, and settles the state.
    ///
    /// A token without a recognised role (or the reverse) is treated as no session and the
    /// leftover entries are removed.
    pub fn resolve(&mut self) -> &SessionState {
        let token = self.storage.get(SESSION_TOKEN_KEY);
        let role = self
            .storage
            .get(SESSION_ROLE_KEY)
            .and_then(|role| Role::from_wire(&role));

        self.state = match (token, role) {
            (Some(token), Some(role)) => match Session::new(token, role) {
                Some(session) => SessionState::Authenticated(session),
                None => self.discard_partial(),
            },
            (None, None) => SessionState::Anonymous,
            _ => self.discard_partial(),
        };

        &self.state
    }

    fn discard_partial(&self) -> SessionState {
        tracing::debug!("Discarding incomplete session entries");
        self.storage.remove(SESSION_TOKEN_KEY);
        self.storage.remove(SESSION_ROLE_KEY);

        SessionState::Anonymous
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    pub fn session(&self) -> Option<&Session> {
        self.state.session()
    }

    pub fn token(&self) -> Option<&str> {
        self.session().map(Session::token)
    }

    pub fn role(&self) -> Option<Role> {
        self.session().map(Session::role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.session().is_some()
    }

    /// Persists `session` and makes it current. Only the login flow calls this.
    pub fn establish_session(&mut self, session: Session) {
        self.storage.set(SESSION_TOKEN_KEY, session.token());
        self.storage.set(SESSION_ROLE_KEY, session.role().as_str());

        tracing::info!(role = %session.role().as_str(), "Session established");

        self.state = SessionState::Authenticated(session);
    }

    /// Removes the persisted session. Only the logout flow calls this.
    pub fn clear_session(&mut self) {
        self.storage.remove(SESSION_TOKEN_KEY);
        self.storage.remove(SESSION_ROLE_KEY);

        tracing::info!("Session cleared");

        self.state = SessionState::Anonymous;
    }
}

#[cfg(test)]
mod tests {

    mod resolve {
        use crate::client::session::{
            MemorySessionStorage, Role, SessionContext, SessionState, SessionStorage,
            SESSION_ROLE_KEY, SESSION_TOKEN_KEY,
        };

        #[test]
        /// Expected: a fresh context is resolving until storage is read
        fn starts_resolving() {
            let context = SessionContext::new(MemorySessionStorage::new());

            assert!(context.state().is_resolving());
            assert!(context.session().is_none());
        }

        #[test]
        /// Expected: empty storage resolves to Anonymous
        fn resolves_anonymous_without_entries() {
            let mut context = SessionContext::new(MemorySessionStorage::new());

            assert_eq!(context.resolve(), &SessionState::Anonymous);
        }

        #[test]
        /// Expected: stored token and role resolve to an authenticated session
        fn resolves_stored_session() {
            let storage = MemorySessionStorage::new();
            storage.set(SESSION_TOKEN_KEY, "abc");
            storage.set(SESSION_ROLE_KEY, "operator");
            let mut context = SessionContext::new(storage);

            context.resolve();

            assert_eq!(context.token(), Some("abc"));
            assert_eq!(context.role(), Some(Role::Operator));
        }

        #[test]
        /// Expected: a token with an unknown role is discarded from storage
        fn discards_unknown_role() {
            let storage = MemorySessionStorage::new();
            storage.set(SESSION_TOKEN_KEY, "abc");
            storage.set(SESSION_ROLE_KEY, "superuser");
            let mut context = SessionContext::new(storage.clone());

            assert_eq!(context.resolve(), &SessionState::Anonymous);
            assert!(storage.is_empty());
        }
    }

    mod establish_session {
        use crate::client::session::{
            MemorySessionStorage, Role, Session, SessionContext, SessionStorage,
            SESSION_ROLE_KEY, SESSION_TOKEN_KEY,
        };

        #[test]
        /// Expected: token and role written under their storage keys
        fn persists_token_and_role() {
            let storage = MemorySessionStorage::new();
            let mut context = SessionContext::new(storage.clone());

            context.establish_session(Session::new("abc", Role::Administrator).unwrap());

            assert_eq!(storage.get(SESSION_TOKEN_KEY).as_deref(), Some("abc"));
            assert_eq!(storage.get(SESSION_ROLE_KEY).as_deref(), Some("administrator"));
            assert!(context.is_authenticated());
        }
    }

    mod clear_session {
        use crate::client::session::{
            MemorySessionStorage, Role, Session, SessionContext, SessionState,
        };

        #[test]
        /// Expected: storage emptied and state Anonymous
        fn removes_persisted_session() {
            let storage = MemorySessionStorage::new();
            let mut context = SessionContext::new(storage.clone());
            context.establish_session(Session::new("abc", Role::Operator).unwrap());

            context.clear_session();

            assert!(storage.is_empty());
            assert_eq!(context.state(), &SessionState::Anonymous);
        }
    }

    mod role {
        use crate::client::session::{Role, Session};

        #[test]
        /// Expected: backend spellings map onto the two roles
        fn parses_wire_spellings() {
            assert_eq!(Role::from_wire("Administrador"), Some(Role::Administrator));
            assert_eq!(Role::from_wire("admin"), Some(Role::Administrator));
            assert_eq!(Role::from_wire("operador"), Some(Role::Operator));
            assert_eq!(Role::from_wire("guest"), None);
        }

        #[test]
        /// Expected: serde accepts aliases and writes the canonical value
        fn serde_round_trips_aliases() {
            let role: Role = serde_json::from_str("\"administrador\"").unwrap();

            assert_eq!(role, Role::Administrator);
            assert_eq!(serde_json::to_string(&role).unwrap(), "\"administrator\"");
        }

        #[test]
        /// Expected: a blank token never forms a session
        fn blank_token_is_rejected() {
            assert!(Session::new("  ", Role::Operator).is_none());
        }
    }
}
