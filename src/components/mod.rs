//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the landing-page surfaces while reading/writing shared
//! state from Leptos context providers; pages own route-level orchestration.

pub mod auth_panel;
pub mod feature_highlights;
pub mod hero_background;
