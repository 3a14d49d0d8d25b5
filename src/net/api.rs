//! REST calls to the authentication backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/error since these endpoints are
//! only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `Option`/`Result<_, String>` instead of panics. A
//! non-OK response is mapped to the server's `{"message": ...}` body when one
//! is present, else to a status-code fallback string; the form controller
//! wraps either in `SubmitError::Provider`.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::User;

#[cfg(any(test, feature = "hydrate"))]
fn sign_in_failed_message(status: u16) -> String {
    format!("sign in failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn sign_up_failed_message(status: u16) -> String {
    format!("sign up failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn google_sign_in_failed_message(status: u16) -> String {
    format!("google sign in failed: {status}")
}

/// Pull the `message` field out of an error-response body, if it parses.
#[cfg(any(test, feature = "hydrate"))]
fn extract_error_message(body: &str) -> Option<String> {
    #[derive(serde::Deserialize)]
    struct ErrorBody {
        message: String,
    }
    serde_json::from_str::<ErrorBody>(body)
        .ok()
        .map(|b| b.message)
        .filter(|m| !m.trim().is_empty())
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get("/api/auth/me")
            .send()
            .await
            .ok()?;
        if !resp.ok() {
            return None;
        }
        resp.json::<User>().await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout")
            .send()
            .await;
    }
}

/// Start a Google sign-in via `POST /api/auth/google`.
///
/// # Errors
///
/// Returns the backend's `message`, or a status fallback, when the attempt is
/// rejected; the transport error string when the request never completed.
pub async fn sign_in_with_google() -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post("/api/auth/google")
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_user_response(resp, google_sign_in_failed_message).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Sign in with email + password via `POST /api/auth/email/sign-in`.
///
/// # Errors
///
/// Same failure contract as [`sign_in_with_google`].
pub async fn sign_in_with_email(email: &str, password: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password });
        let resp = gloo_net::http::Request::post("/api/auth/email/sign-in")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_user_response(resp, sign_in_failed_message).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password);
        Err("not available on server".to_owned())
    }
}

/// Create an account via `POST /api/auth/email/sign-up`.
///
/// # Errors
///
/// Same failure contract as [`sign_in_with_google`].
pub async fn sign_up_with_email(email: &str, password: &str, name: &str) -> Result<User, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "password": password, "name": name });
        let resp = gloo_net::http::Request::post("/api/auth/email/sign-up")
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        read_user_response(resp, sign_up_failed_message).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, password, name);
        Err("not available on server".to_owned())
    }
}

/// Shared response handling for the three auth mutations: non-OK statuses
/// become the body's `message` (else the status fallback), OK bodies must
/// parse as a [`User`].
#[cfg(feature = "hydrate")]
async fn read_user_response(
    resp: gloo_net::http::Response,
    fallback: fn(u16) -> String,
) -> Result<User, String> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        return Err(extract_error_message(&body).unwrap_or_else(|| fallback(status)));
    }
    resp.json::<User>().await.map_err(|e| e.to_string())
}
