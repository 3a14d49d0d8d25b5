//! Application state shared through Leptos context providers.
//!
//! ARCHITECTURE
//! ============
//! State types are plain structs; the app boundary wraps them in `RwSignal`
//! and provides them via context (`auth_form` is page-owned instead, since no
//! other route needs it).

pub mod auth_form;
pub mod session;
