//! Build-time client configuration.
//!
//! SYSTEM CONTEXT
//! ==============
//! The WASM bundle has no process environment at runtime, so the backend
//! origin is baked in at compile time from `DEVSET_BACKEND_URL`. An empty
//! origin means API paths are requested relative to the page.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// `localStorage` key holding the session token.
pub const SESSION_TOKEN_KEY: &str = "session_token";

/// Query used when the job search box is left empty.
pub const DEFAULT_JOB_QUERY: &str = "software developer";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientConfig {
    /// Backend origin without a trailing slash, e.g. `https://api.devset.io`.
    pub backend_url: String,
}

impl ClientConfig {
    /// Read the compile-time backend origin.
    pub fn from_build_env() -> Self {
        Self::with_backend_url(option_env!("DEVSET_BACKEND_URL").unwrap_or_default())
    }

    pub fn with_backend_url(raw: &str) -> Self {
        Self { backend_url: normalize_backend_url(raw) }
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

fn normalize_backend_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_owned()
}
