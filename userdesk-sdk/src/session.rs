//! session token and theme preference, kept behind a trait so the
//! list screen can run against browser storage or an in-memory map

use std::{cell::RefCell, collections::HashMap, fmt::Debug, ops::Deref, rc::Rc};

use crate::error::Result;
use crate::model::{DARK_MODE, TOKEN};

pub trait SessionStore {
    fn get_item(&self, key: &str) -> Option<String>;

    fn set_item(&self, key: &str, value: &str) -> Result<()>;

    fn remove_item(&self, key: &str) -> Result<()>;

    /// an empty token counts as no token
    fn token(&self) -> Option<String> {
        self.get_item(TOKEN).filter(|token| !token.is_empty())
    }

    fn set_token(&self, token: &str) -> Result<()> {
        self.set_item(TOKEN, token)
    }

    fn clear_token(&self) -> Result<()> {
        self.remove_item(TOKEN)
    }

    fn dark_mode(&self) -> bool {
        self.get_item(DARK_MODE)
            .and_then(|value| serde_json::from_str::<bool>(&value).ok())
            .unwrap_or(false)
    }

    fn set_dark_mode(&self, dark: bool) -> Result<()> {
        self.set_item(DARK_MODE, &serde_json::to_string(&dark)?)
    }
}

/// browser local storage
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalSession;

impl SessionStore for LocalSession {
    fn get_item(&self, key: &str) -> Option<String> {
        utils::get_local_storage(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        Ok(utils::set_local_storage(key, value)?)
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        Ok(utils::remove_local_storage(key)?)
    }
}

#[derive(Debug, Default)]
pub struct MemorySession {
    items: RefCell<HashMap<String, String>>,
}

impl MemorySession {
    pub fn with_token(token: &str) -> Self {
        let session = Self::default();
        session
            .items
            .borrow_mut()
            .insert(TOKEN.to_string(), token.to_string());
        session
    }
}

impl SessionStore for MemorySession {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.borrow().get(key).cloned()
    }

    fn set_item(&self, key: &str, value: &str) -> Result<()> {
        self.items
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> Result<()> {
        self.items.borrow_mut().remove(key);
        Ok(())
    }
}

/// shared handle passed down as a component property;
/// two handles are equal when they point at the same store
#[derive(Clone)]
pub struct SessionHandle(Rc<dyn SessionStore>);

impl SessionHandle {
    pub fn new(store: impl SessionStore + 'static) -> Self {
        Self(Rc::new(store))
    }
}

impl Default for SessionHandle {
    fn default() -> Self {
        Self::new(LocalSession)
    }
}

impl Deref for SessionHandle {
    type Target = dyn SessionStore;

    fn deref(&self) -> &Self::Target {
        self.0.as_ref()
    }
}

impl PartialEq for SessionHandle {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }
}

impl Debug for SessionHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SessionHandle")
            .field("has_token", &self.token().is_some())
            .finish()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SessionGate {
    Granted(String),
    Redirect,
}

/// one-time guard run when the list screen mounts
pub fn require_session(store: &dyn SessionStore) -> SessionGate {
    match store.token() {
        Some(token) => SessionGate::Granted(token),
        None => {
            log::debug!("no session token, redirect to login");
            SessionGate::Redirect
        }
    }
}

/// forget the token locally; the server is never told
pub fn logout(store: &dyn SessionStore) -> Result<()> {
    store.clear_token()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_or_empty_token_redirects() {
        let session = MemorySession::default();
        assert_eq!(require_session(&session), SessionGate::Redirect);

        session.set_token("").unwrap();
        assert_eq!(require_session(&session), SessionGate::Redirect);
    }

    #[test]
    fn stored_token_grants_access_until_logout() {
        let session = MemorySession::with_token("QpwL5tke4Pnpja7X4");
        assert_eq!(
            require_session(&session),
            SessionGate::Granted("QpwL5tke4Pnpja7X4".to_string())
        );

        logout(&session).unwrap();
        assert_eq!(session.token(), None);
        assert_eq!(require_session(&session), SessionGate::Redirect);
    }

    #[test]
    fn dark_mode_is_a_json_boolean_defaulting_to_false() {
        let session = MemorySession::default();
        assert!(!session.dark_mode());

        session.set_dark_mode(true).unwrap();
        assert_eq!(session.get_item(DARK_MODE).as_deref(), Some("true"));
        assert!(session.dark_mode());

        session.set_item(DARK_MODE, "not json").unwrap();
        assert!(!session.dark_mode());
    }

    #[test]
    fn handles_compare_by_identity() {
        let first = SessionHandle::new(MemorySession::default());
        let second = SessionHandle::new(MemorySession::default());
        assert_eq!(first, first.clone());
        assert_ne!(first, second);
    }
}
