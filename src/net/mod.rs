//! Networking modules for the auth REST boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` wraps the backend's auth endpoints; `types` defines the shared wire
//! schema. This crate owns no protocol of its own — the backend is an
//! external collaborator.

pub mod api;
pub mod types;
