//! Landing page: animated hero, feature highlights, and the auth panel.
//!
//! SYSTEM CONTEXT
//! ==============
//! This is the unauthenticated entry route. It owns the auth-form signal and
//! the pointer-tracking state the decorative layers consume, and it installs
//! the one-shot redirect to `/hackathons` for authenticated sessions.

#[cfg(test)]
#[path = "landing_test.rs"]
mod landing_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::components::auth_panel::{AuthPanel, submit_google};
use crate::components::feature_highlights::FeatureHighlights;
use crate::components::hero_background::HeroBackground;
use crate::state::auth_form::AuthFormState;
use crate::state::session::SessionState;
use crate::util::auth::install_authenticated_redirect;

/// Landing page — renders the hero for signed-out visitors and hands off to
/// `/hackathons` as soon as the session reports an authenticated user.
#[component]
pub fn LandingPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let form = RwSignal::new(AuthFormState::default());
    let pointer = RwSignal::new((50.0_f64, 50.0_f64));
    let hero_ref = NodeRef::<leptos::html::Section>::new();

    let navigate = use_navigate();
    install_authenticated_redirect(session, navigate);

    let on_mouse_move = move |ev: leptos::ev::MouseEvent| {
        #[cfg(feature = "hydrate")]
        {
            use crate::util::hero_math::pointer_percent;
            if let Some(hero) = hero_ref.get() {
                let rect = hero.get_bounding_client_rect();
                pointer.set((
                    pointer_percent(f64::from(ev.client_x()), rect.left(), rect.width()),
                    pointer_percent(f64::from(ev.client_y()), rect.top(), rect.height()),
                ));
            }
        }
        #[cfg(not(feature = "hydrate"))]
        let _ = &ev;
    };

    let cta_disabled = move || form.get().loading || !session.get().ready;

    view! {
        <Show
            when=move || !session.get().is_authenticated()
            fallback=move || {
                view! {
                    <div class="hero hero--handoff">
                        <p>"Redirecting to hackathons..."</p>
                    </div>
                }
            }
        >
            <section
                class="hero"
                node_ref=hero_ref
                on:mousemove=on_mouse_move
                style=move || hero_section_style(pointer.get())
            >
                <HeroBackground pointer=pointer/>

                <div class="hero__content">
                    <div class="hero__copy">
                        <div class="hero__tagline">"Join the Tech Revolution"</div>
                        <h1 class="hero__headline">
                            "Master Every "
                            <span class="hero__accent">"Technology"</span>
                            " Domain"
                        </h1>
                        <p class="hero__lede">
                            "From programming fundamentals to cutting-edge AI, join thousands of \
                             students building their tech careers with interactive courses, live \
                             hackathons, and real-world projects."
                        </p>

                        <FeatureHighlights pointer=pointer/>

                        <div class="hero__cta">
                            <button
                                class="hero__cta-primary"
                                disabled=cta_disabled
                                on:click=move |_| submit_google(form, session)
                            >
                                {move || if form.get().loading { "Working..." } else { "Start Learning Now" }}
                            </button>
                            <a class="hero__cta-secondary" href="/hackathons">
                                "View Hackathons"
                            </a>
                        </div>
                    </div>

                    <div class="hero__form">
                        <AuthPanel form=form/>
                    </div>
                </div>

                <div class="hero__stats">
                    <span class="hero__stat hero__stat--learners">
                        <strong>"2,847"</strong>
                        " students learning now"
                    </span>
                    <span class="hero__stat hero__stat--rating">
                        <strong>"4.9/5"</strong>
                        " average student rating"
                    </span>
                </div>
            </section>
        </Show>
    }
}

/// Pointer-following radial glow layered over the fixed hero gradient.
fn hero_section_style((x, y): (f64, f64)) -> String {
    format!(
        "background: radial-gradient(circle at {x:.2}% {y:.2}%, \
         rgba(139, 92, 246, 0.15) 0%, rgba(59, 130, 246, 0.1) 25%, \
         rgba(16, 185, 129, 0.05) 50%, transparent 70%), \
         linear-gradient(135deg, #0f172a 0%, #581c87 25%, #1e1b4b 50%, \
         #0f172a 75%, #164e63 100%);"
    )
}
