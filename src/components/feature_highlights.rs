//! Feature-highlight cards with a pointer-driven float effect.

#[cfg(test)]
#[path = "feature_highlights_test.rs"]
mod feature_highlights_test;

use leptos::prelude::*;

use crate::util::hero_math;

const FEATURES: [(&str, &str); 3] = [
    ("500+ Courses", "feature-card--courses"),
    ("Global Hackathons", "feature-card--hackathons"),
    ("50K+ Students", "feature-card--students"),
];

/// Row of headline feature cards under the hero copy.
#[component]
pub fn FeatureHighlights(pointer: RwSignal<(f64, f64)>) -> impl IntoView {
    let cards = FEATURES
        .iter()
        .enumerate()
        .map(|(index, (label, modifier))| {
            view! {
                <div
                    class=format!("feature-card {modifier}")
                    style=move || card_style(index, pointer.get())
                >
                    <span class="feature-card__label">{*label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! { <div class="feature-highlights">{cards}</div> }
}

fn card_style(index: usize, (x, y): (f64, f64)) -> String {
    format!(
        "transform: translateY({:.2}px);",
        hero_math::feature_float_offset(x, y, index)
    )
}
