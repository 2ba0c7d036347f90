//! Persistent single-slot storage for the session token.
//!
//! DESIGN
//! ======
//! The auth lifecycle depends on the [`SessionStore`] trait rather than on
//! `localStorage` directly, so tests substitute [`MemorySessionStore`]. At
//! most one token is held at a time; holding one says nothing about whether
//! the backend still accepts it.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use std::sync::{Arc, Mutex};

#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    #[error("session storage unavailable")]
    Unavailable,
    #[error("session token not saved: {0}")]
    Write(String),
}

/// Read/write/clear access to the stored session token.
pub trait SessionStore: Send + Sync {
    fn token(&self) -> Option<String>;

    /// Persist `token`, replacing any previous one.
    ///
    /// # Errors
    ///
    /// Returns [`SessionError`] when the token could not be stored.
    fn set_token(&self, token: &str) -> Result<(), SessionError>;

    fn clear(&self);
}

pub type SharedSessionStore = Arc<dyn SessionStore>;

/// `localStorage`-backed store under [`crate::config::SESSION_TOKEN_KEY`].
///
/// Outside the browser every read is empty and writes fail with
/// [`SessionError::Unavailable`].
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserSessionStore;

#[cfg(feature = "hydrate")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl SessionStore for BrowserSessionStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .get_item(crate::config::SESSION_TOKEN_KEY)
                .ok()
                .flatten()
                .filter(|token| !token.is_empty())
        }
        #[cfg(not(feature = "hydrate"))]
        {
            None
        }
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = local_storage().ok_or(SessionError::Unavailable)?;
            storage
                .set_item(crate::config::SESSION_TOKEN_KEY, token)
                .map_err(|e| SessionError::Write(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = token;
            Err(SessionError::Unavailable)
        }
    }

    fn clear(&self) {
        #[cfg(feature = "hydrate")]
        {
            if let Some(storage) = local_storage() {
                let _ = storage.remove_item(crate::config::SESSION_TOKEN_KEY);
            }
        }
    }
}

/// In-process store, used by tests and anywhere persistence is not wanted.
#[derive(Debug, Default)]
pub struct MemorySessionStore {
    slot: Mutex<Option<String>>,
}

impl MemorySessionStore {
    pub fn with_token(token: &str) -> Self {
        Self { slot: Mutex::new(Some(token.to_owned())) }
    }
}

impl SessionStore for MemorySessionStore {
    fn token(&self) -> Option<String> {
        self.slot.lock().ok().and_then(|slot| slot.clone())
    }

    fn set_token(&self, token: &str) -> Result<(), SessionError> {
        let mut slot = self.slot.lock().map_err(|_| SessionError::Unavailable)?;
        *slot = Some(token.to_owned());
        Ok(())
    }

    fn clear(&self) {
        if let Ok(mut slot) = self.slot.lock() {
            *slot = None;
        }
    }
}
