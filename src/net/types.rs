//! DTOs for the auth REST boundary.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON payloads so serde round-trips stay lossless;
//! the client adds no interpretation beyond defaults for older responses.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// The signed-in user as reported by `/api/auth/me` and the sign-in/sign-up
/// endpoints.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique user identifier (UUID string).
    pub id: String,
    /// Display name.
    pub name: String,
    /// Account email address.
    pub email: String,
    /// Authentication method used to create the session (e.g. `"google"`, `"email"`).
    #[serde(default = "default_auth_method")]
    pub auth_method: String,
}

fn default_auth_method() -> String {
    "email".to_owned()
}
