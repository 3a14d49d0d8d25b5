//! Hackathons page — the destination route for authenticated sessions.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the authenticated landing route the sign-in flow hands off to.
//! Listing content is served elsewhere; this route exists so the hand-off has
//! a real destination and a way back out (logout).

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;

/// Hackathons page — greets the signed-in user and offers logout.
/// Redirects to `/` once the session resolves without a user.
#[component]
pub fn HackathonsPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    let display_name = move || {
        session
            .get()
            .user
            .map_or_else(|| "there".to_owned(), |user| user.name)
    };

    let on_logout = move |_| {
        #[cfg(feature = "hydrate")]
        {
            leptos::task::spawn_local(async move {
                crate::net::api::logout().await;
                session.update(|s| s.user = None);
                if let Some(w) = web_sys::window() {
                    let _ = w.location().set_href("/");
                }
            });
        }
    };

    view! {
        <Show
            when=move || session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="hackathons-page">
                        <p>
                            {move || {
                                if session.get().ready { "Redirecting..." } else { "Loading..." }
                            }}
                        </p>
                    </div>
                }
            }
        >
            <div class="hackathons-page">
                <header class="hackathons-page__header">
                    <span class="hackathons-page__title">"Hackathons"</span>
                    <span class="hackathons-page__spacer"></span>
                    <span class="hackathons-page__self">{display_name}</span>
                    <button class="hackathons-page__logout" on:click=on_logout title="Logout">
                        "Logout"
                    </button>
                </header>
                <p class="hackathons-page__empty">"Upcoming hackathons will appear here."</p>
            </div>
        </Show>
    }
}
