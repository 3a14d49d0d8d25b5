//! Shared auth redirect helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! The landing page and the hackathons page apply mirrored redirect behavior:
//! authenticated sessions leave the landing page, unauthenticated sessions
//! leave the hackathons page. Both wait for the session probe to resolve.

#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::state::session::SessionState;

/// Route authenticated users land on.
pub const HACKATHONS_ROUTE: &str = "/hackathons";

/// Whether the landing page should hand off to `/hackathons` right now.
///
/// A successful in-flight submission and the session-state transition can
/// both observe `Authenticated` close together; the `already_navigated`
/// guard keeps the hand-off to a single navigation per page instance.
pub fn should_redirect_to_hackathons(session: &SessionState, already_navigated: bool) -> bool {
    !already_navigated && session.is_authenticated()
}

/// Whether a protected route should send the user back to the landing page.
pub fn should_redirect_to_landing(session: &SessionState) -> bool {
    session.ready && session.user.is_none()
}

/// Redirect to `/hackathons` (once) whenever the session becomes authenticated.
pub fn install_authenticated_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    let navigated = StoredValue::new(false);
    Effect::new(move || {
        let state = session.get();
        if should_redirect_to_hackathons(&state, navigated.get_value()) {
            navigated.set_value(true);
            navigate(HACKATHONS_ROUTE, NavigateOptions::default());
        }
    });
}

/// Redirect to `/` whenever auth has loaded and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if should_redirect_to_landing(&state) {
            navigate("/", NavigateOptions::default());
        }
    });
}
