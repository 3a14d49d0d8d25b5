use super::*;

#[test]
fn sign_in_failed_message_formats_status() {
    assert_eq!(sign_in_failed_message(401), "sign in failed: 401");
}

#[test]
fn sign_up_failed_message_formats_status() {
    assert_eq!(sign_up_failed_message(409), "sign up failed: 409");
}

#[test]
fn google_sign_in_failed_message_formats_status() {
    assert_eq!(google_sign_in_failed_message(502), "google sign in failed: 502");
}

#[test]
fn extract_error_message_reads_message_field() {
    assert_eq!(
        extract_error_message(r#"{"message":"email already registered"}"#),
        Some("email already registered".to_owned())
    );
}

#[test]
fn extract_error_message_ignores_blank_and_malformed_bodies() {
    assert_eq!(extract_error_message(r#"{"message":"   "}"#), None);
    assert_eq!(extract_error_message("not json"), None);
    assert_eq!(extract_error_message(r#"{"error":"other shape"}"#), None);
}
