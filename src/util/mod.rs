//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate redirect policy and layout math from page and
//! component code so both stay testable without a browser.

pub mod auth;
pub mod hero_math;
