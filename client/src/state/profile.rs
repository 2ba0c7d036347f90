//! Profile view state: callback completion and the signed-in user card.
//!
//! The view starts in [`CallbackPhase::Exchanging`] when the load-time
//! fragment carries a `session_id`, otherwise in [`CallbackPhase::Idle`].

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use super::auth::CallbackOutcome;
use crate::net::types::User;
use crate::util::view_route::session_id_from_fragment;

pub const SIGN_IN_FAILED: &str = "We couldn't complete your sign-in.";

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum CallbackPhase {
    /// No callback in progress; show the profile or a sign-in prompt.
    #[default]
    Idle,
    /// Token exchange in flight.
    Exchanging,
    /// Token stored; the browser is being sent to `/`.
    Redirecting,
    /// Exchange failed; carries the error detail for display.
    Failed(String),
}

impl CallbackPhase {
    pub fn for_fragment(fragment: &str) -> Self {
        if session_id_from_fragment(fragment).is_some() { Self::Exchanging } else { Self::Idle }
    }

    pub fn after(outcome: &CallbackOutcome) -> Self {
        match outcome {
            CallbackOutcome::NoSession => Self::Idle,
            CallbackOutcome::Completed => Self::Redirecting,
            CallbackOutcome::Failed(e) => Self::Failed(e.to_string()),
        }
    }

    pub fn is_busy(&self) -> bool {
        matches!(self, Self::Exchanging | Self::Redirecting)
    }
}

/// Avatar fallback letter for users without a picture.
pub fn avatar_initial(user: &User) -> String {
    user.name.chars().next().map(|c| c.to_uppercase().collect()).unwrap_or_else(|| "?".to_owned())
}
