//! Combined sign-in/sign-up card for the landing page.
//!
//! SYSTEM CONTEXT
//! ==============
//! Owns the submit handlers for all three authentication attempts. Each
//! handler follows the same contract: busy guard, pure `prepare_*` gate,
//! `begin_submit`, spawn the backend call (hydrate only), resolve with
//! `succeed`/`fail`. At most one attempt is in flight per panel; buttons are
//! also disabled while loading or while the backend initializes.

use leptos::prelude::*;

use crate::state::auth_form::{AuthField, AuthFormState};
use crate::state::session::{SessionState, SessionStatus};

/// Dispatch a Google sign-in attempt. Shared by the panel's Google button and
/// the hero CTA. A successful attempt updates the session, which triggers the
/// landing page's redirect effect.
pub fn submit_google(form: RwSignal<AuthFormState>, session: RwSignal<SessionState>) {
    if form.get_untracked().loading {
        return;
    }
    let ready = session.get_untracked().ready;
    if let Err(err) = AuthFormState::prepare_google_submit(ready) {
        form.update(|f| f.fail(&err));
        return;
    }
    form.update(AuthFormState::begin_submit);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::auth_form::{AttemptKind, SubmitError};
        match crate::net::api::sign_in_with_google().await {
            Ok(user) => {
                form.update(|f| f.succeed(AttemptKind::Google));
                session.update(|s| s.user = Some(user));
            }
            Err(message) => {
                log::error!("google sign-in failed: {message}");
                form.update(|f| f.fail(&SubmitError::provider(AttemptKind::Google, &message)));
            }
        }
    });
}

/// Dispatch the email form, signing in or signing up per the active mode.
pub fn submit_email(form: RwSignal<AuthFormState>, session: RwSignal<SessionState>) {
    if form.get_untracked().loading {
        return;
    }
    let ready = session.get_untracked().ready;
    let plan = match form.get_untracked().prepare_email_submit(ready) {
        Ok(plan) => plan,
        Err(err) => {
            form.update(|f| f.fail(&err));
            return;
        }
    };
    form.update(AuthFormState::begin_submit);
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        use crate::state::auth_form::{EmailSubmit, SubmitError};
        let kind = plan.kind();
        let result = match plan {
            EmailSubmit::SignIn { email, password } => {
                crate::net::api::sign_in_with_email(&email, &password).await
            }
            EmailSubmit::SignUp { email, password, name } => {
                crate::net::api::sign_up_with_email(&email, &password, &name).await
            }
        };
        match result {
            Ok(user) => {
                form.update(|f| f.succeed(kind));
                session.update(|s| s.user = Some(user));
            }
            Err(message) => {
                log::error!("email auth failed: {message}");
                form.update(|f| f.fail(&SubmitError::provider(kind, &message)));
            }
        }
    });
    #[cfg(not(feature = "hydrate"))]
    let _ = plan;
}

/// The auth card: Google button, email form, mode toggle, and status banners.
#[component]
pub fn AuthPanel(form: RwSignal<AuthFormState>) -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    let not_ready = move || session.get().status() == SessionStatus::NotReady;
    let disabled = move || form.get().loading || not_ready();

    let on_google = move |_| submit_google(form, session);
    let on_email_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        submit_email(form, session);
    };

    view! {
        <div class="auth-panel" id="auth-panel">
            <div class="auth-panel__header">
                <span class="auth-panel__brand">"SkillSync Academy"</span>
                <h2>
                    {move || if form.get().is_sign_up() { "Create Account" } else { "Welcome Back" }}
                </h2>
                <p class="auth-panel__subtitle">
                    {move || {
                        if form.get().is_sign_up() {
                            "Join thousands of tech learners"
                        } else {
                            "Continue your learning journey"
                        }
                    }}
                </p>
            </div>

            <Show when=move || !form.get().error.is_empty()>
                <p class="auth-panel__banner auth-panel__banner--error">{move || form.get().error}</p>
            </Show>
            <Show when=move || !form.get().success.is_empty()>
                <p class="auth-panel__banner auth-panel__banner--success">
                    {move || form.get().success}
                </p>
            </Show>

            <button class="auth-panel__google" disabled=disabled on:click=on_google>
                {move || if form.get().loading { "Working..." } else { "Continue with Google" }}
            </button>

            <div class="auth-panel__divider">
                <span>"or"</span>
            </div>

            <form class="auth-panel__form" on:submit=on_email_submit>
                <Show when=move || form.get().is_sign_up()>
                    <label class="auth-panel__label">
                        "Full Name"
                        <input
                            class="auth-panel__input"
                            type="text"
                            placeholder="Enter your full name"
                            prop:value=move || form.get().name
                            on:input=move |ev| {
                                form.update(|f| f.set_field(AuthField::Name, event_target_value(&ev)));
                            }
                        />
                    </label>
                </Show>

                <label class="auth-panel__label">
                    "Email Address"
                    <input
                        class="auth-panel__input"
                        type="email"
                        placeholder="Enter your email"
                        prop:value=move || form.get().email
                        on:input=move |ev| {
                            form.update(|f| f.set_field(AuthField::Email, event_target_value(&ev)));
                        }
                    />
                </label>

                <label class="auth-panel__label">
                    "Password"
                    <div class="auth-panel__password">
                        <input
                            class="auth-panel__input"
                            type=move || if form.get().show_password { "text" } else { "password" }
                            placeholder="Enter your password"
                            prop:value=move || form.get().password
                            on:input=move |ev| {
                                form.update(|f| f.set_field(AuthField::Password, event_target_value(&ev)));
                            }
                        />
                        <button
                            class="auth-panel__reveal"
                            type="button"
                            on:click=move |_| form.update(AuthFormState::toggle_password_visibility)
                        >
                            {move || if form.get().show_password { "Hide" } else { "Show" }}
                        </button>
                    </div>
                </label>

                <button class="auth-panel__submit" type="submit" disabled=disabled>
                    {move || if form.get().is_sign_up() { "Create Account" } else { "Sign In" }}
                </button>
            </form>

            <button
                class="auth-panel__mode-toggle"
                on:click=move |_| form.update(AuthFormState::toggle_mode)
            >
                {move || {
                    if form.get().is_sign_up() {
                        "Already have an account? Sign in"
                    } else {
                        "Don't have an account? Sign up"
                    }
                }}
            </button>

            <Show when=not_ready>
                <p class="auth-panel__notice">"Setting up authentication service..."</p>
            </Show>
        </div>
    }
}
