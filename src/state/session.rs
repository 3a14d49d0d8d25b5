//! Auth-session state for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! Populated once per page load by probing `/api/auth/me`; `ready` flips true
//! when the probe resolves, whether or not a user came back. Route effects and
//! the auth panel read the derived [`SessionStatus`] to gate submission and
//! drive redirects.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::User;

/// Where the session stands relative to the auth backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionStatus {
    /// The backend probe has not resolved; submission is refused.
    NotReady,
    /// Backend reachable, no signed-in user.
    Unauthenticated,
    /// Backend reachable and a user is signed in; the landing page hands off
    /// to `/hackathons` on observing this.
    Authenticated,
}

/// Session state tracking the current user and backend readiness.
///
/// Wrapped in an `RwSignal` and provided via context by [`crate::app::App`];
/// the fields themselves are plain so transitions stay unit-testable.
#[derive(Clone, Debug, Default)]
pub struct SessionState {
    pub user: Option<User>,
    pub ready: bool,
}

impl SessionState {
    pub fn status(&self) -> SessionStatus {
        if !self.ready {
            SessionStatus::NotReady
        } else if self.user.is_some() {
            SessionStatus::Authenticated
        } else {
            SessionStatus::Unauthenticated
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.status() == SessionStatus::Authenticated
    }
}
