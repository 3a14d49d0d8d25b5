//! Decorative hero layers: particles, gradient orbs, floating tech icons.
//!
//! Purely cosmetic — consumes pointer percentages, renders nothing
//! interactive. Placement comes from the deterministic `hero_math` helpers so
//! server-rendered and hydrated markup agree.

#[cfg(test)]
#[path = "hero_background_test.rs"]
mod hero_background_test;

use leptos::prelude::*;

use crate::util::hero_math;

const TECH_CATEGORIES: [(&str, &str); 9] = [
    ("Programming", "hero-icon--programming"),
    ("AI & ML", "hero-icon--ai"),
    ("Data Science", "hero-icon--data"),
    ("Cybersecurity", "hero-icon--security"),
    ("Cloud Computing", "hero-icon--cloud"),
    ("Web Development", "hero-icon--web"),
    ("Mobile Dev", "hero-icon--mobile"),
    ("Game Dev", "hero-icon--games"),
    ("Blockchain", "hero-icon--blockchain"),
];

/// Animated background layer stack for the hero section.
#[component]
pub fn HeroBackground(pointer: RwSignal<(f64, f64)>) -> impl IntoView {
    let particles = (0..hero_math::PARTICLE_COUNT)
        .map(|index| {
            view! {
                <div class="hero-particle" style=move || particle_style(index, pointer.get())></div>
            }
        })
        .collect::<Vec<_>>();

    let icons = TECH_CATEGORIES
        .iter()
        .enumerate()
        .map(|(index, (label, modifier))| {
            view! {
                <div
                    class=format!("hero-icon {modifier}")
                    style=move || icon_style(index, pointer.get())
                >
                    <span class="hero-icon__label">{*label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="hero-background" aria-hidden="true">
            {particles}
            <div class="hero-orb hero-orb--primary" style=move || orb_primary_style(pointer.get())></div>
            <div
                class="hero-orb hero-orb--secondary"
                style=move || orb_secondary_style(pointer.get())
            ></div>
            {icons}
        </div>
    }
}

fn particle_style(index: usize, (x, y): (f64, f64)) -> String {
    format!(
        "left: {left:.2}%; top: {top:.2}%; animation-delay: {delay:.2}s; \
         animation-duration: {duration:.2}s; transform: translate({dx:.2}px, {dy:.2}px);",
        left = hero_math::particle_left(index),
        top = hero_math::particle_top(index),
        delay = hero_math::particle_delay_s(index),
        duration = hero_math::particle_duration_s(index),
        dx = hero_math::parallax_offset(x, hero_math::PARTICLE_PARALLAX_FACTOR),
        dy = hero_math::parallax_offset(y, hero_math::PARTICLE_PARALLAX_FACTOR),
    )
}

fn icon_style(index: usize, (x, y): (f64, f64)) -> String {
    format!(
        "left: {left:.2}%; top: {top:.2}%; transform: translate({dx:.2}px, {dy:.2}px);",
        left = hero_math::icon_left(index),
        top = hero_math::icon_top(index),
        dx = hero_math::parallax_offset(x, hero_math::ICON_PARALLAX_FACTOR),
        dy = hero_math::parallax_offset(y, hero_math::ICON_PARALLAX_FACTOR),
    )
}

fn orb_primary_style((x, y): (f64, f64)) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%;",
        hero_math::orb_primary_position(x),
        hero_math::orb_primary_position(y),
    )
}

fn orb_secondary_style((x, y): (f64, f64)) -> String {
    format!(
        "left: {:.2}%; top: {:.2}%;",
        hero_math::orb_secondary_position(x),
        hero_math::orb_secondary_position(y),
    )
}
