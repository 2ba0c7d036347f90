//! Auth-session lifecycle for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! [`AuthController`] owns the transitions: startup resolution from the stored
//! token, login redirect, logout, and completion of the identity-provider
//! callback. [`AuthPhase`] is the observable result, held in a signal by
//! [`AuthContext`] and threaded explicitly to every page and component that
//! renders identity-dependent UI.
//!
//! ERROR HANDLING
//! ==============
//! Profile and login-URL failures are logged and degrade (to
//! `Unauthenticated` or a no-op); nothing here hands an error to the view
//! layer except callback completion, which needs it for its error state.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;

use super::session::{SessionError, SharedSessionStore};
use crate::net::api::ApiClient;
use crate::net::transport::ApiError;
use crate::net::types::User;
use crate::util::view_route::session_id_from_fragment;

/// Tri-state authentication status. `Loading` always resolves to one of the
/// other two states once startup resolution finishes.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum AuthPhase {
    #[default]
    Loading,
    Authenticated(User),
    Unauthenticated,
}

impl AuthPhase {
    pub fn user(&self) -> Option<&User> {
        match self {
            Self::Authenticated(user) => Some(user),
            Self::Loading | Self::Unauthenticated => None,
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }
}

/// Why the identity-provider callback could not be completed.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum CallbackError {
    #[error(transparent)]
    Exchange(#[from] ApiError),
    #[error(transparent)]
    Session(#[from] SessionError),
}

/// Result of handling the identity-provider callback fragment.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CallbackOutcome {
    /// No `session_id` in the fragment; nothing was requested.
    NoSession,
    /// Token stored; the caller should navigate to `/`.
    Completed,
    /// Exchange rejected or unreachable, or the token could not be stored.
    Failed(CallbackError),
}

/// Drives auth transitions against the API and the session store.
#[derive(Clone)]
pub struct AuthController {
    api: ApiClient,
    store: SharedSessionStore,
}

impl std::fmt::Debug for AuthController {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AuthController").field("api", &self.api).finish_non_exhaustive()
    }
}

impl AuthController {
    pub fn new(api: ApiClient, store: SharedSessionStore) -> Self {
        Self { api, store }
    }

    pub fn api(&self) -> &ApiClient {
        &self.api
    }

    /// Currently stored session token, if any.
    pub fn token(&self) -> Option<String> {
        self.store.token()
    }

    /// Startup transition: resolve `Loading` from the stored token.
    ///
    /// Issues at most one profile request. A rejected or unreadable profile
    /// discards the token.
    pub async fn resolve(&self) -> AuthPhase {
        let Some(token) = self.store.token() else {
            return AuthPhase::Unauthenticated;
        };
        match self.api.user_profile(&token).await {
            Ok(user) => AuthPhase::Authenticated(user),
            Err(e) => {
                log::warn!("error fetching user profile: {e}");
                self.store.clear();
                AuthPhase::Unauthenticated
            }
        }
    }

    /// Ask the backend where to send the browser for sign-in.
    pub async fn login_url(&self) -> Option<String> {
        match self.api.login_url().await {
            Ok(url) => Some(url),
            Err(e) => {
                log::error!("login error: {e}");
                None
            }
        }
    }

    /// Start sign-in: full-page navigation to the provider. No-op on failure.
    pub async fn login(&self) {
        if let Some(url) = self.login_url().await {
            crate::util::browser::navigate_to(&url);
        }
    }

    /// Forget the session locally. Synchronous, idempotent, no request.
    pub fn logout(&self) -> AuthPhase {
        self.store.clear();
        AuthPhase::Unauthenticated
    }

    /// Exchange the one-time id for a session token and persist it.
    ///
    /// # Errors
    ///
    /// Returns [`CallbackError::Exchange`] for a failed exchange (the store is
    /// untouched) and [`CallbackError::Session`] when the token cannot be saved.
    pub async fn complete_callback(&self, session_id: &str) -> Result<(), CallbackError> {
        let token = self.api.exchange_session(session_id).await?;
        self.store.set_token(&token)?;
        Ok(())
    }

    /// Handle the profile-view URL fragment (`#session_id=...`).
    pub async fn complete_from_fragment(&self, fragment: &str) -> CallbackOutcome {
        let Some(session_id) = session_id_from_fragment(fragment) else {
            return CallbackOutcome::NoSession;
        };
        match self.complete_callback(&session_id).await {
            Ok(()) => CallbackOutcome::Completed,
            Err(e) => {
                log::error!("error during authentication: {e}");
                CallbackOutcome::Failed(e)
            }
        }
    }
}

/// Auth state handed explicitly to pages and components. `Copy`, so event
/// handlers can capture it freely.
#[derive(Clone, Copy, Debug)]
pub struct AuthContext {
    pub phase: RwSignal<AuthPhase>,
    controller: StoredValue<AuthController>,
}

impl AuthContext {
    pub fn new(controller: AuthController) -> Self {
        Self { phase: RwSignal::new(AuthPhase::Loading), controller: StoredValue::new(controller) }
    }

    pub fn controller(&self) -> AuthController {
        self.controller.get_value()
    }

    /// Run startup resolution once and publish the result.
    pub fn start(&self) {
        let phase = self.phase;
        let controller = self.controller();
        crate::util::scope::spawn_detached(async move {
            let resolved = controller.resolve().await;
            phase.set(resolved);
        });
    }

    pub fn login(&self) {
        let controller = self.controller();
        crate::util::scope::spawn_detached(async move { controller.login().await });
    }

    pub fn logout(&self) {
        self.phase.set(self.controller().logout());
    }
}
