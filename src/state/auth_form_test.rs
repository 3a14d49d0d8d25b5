use super::*;

fn ready_sign_in_form() -> AuthFormState {
    let mut form = AuthFormState::default();
    form.set_field(AuthField::Email, "a@b.com".to_owned());
    form.set_field(AuthField::Password, "secret123".to_owned());
    form
}

// =============================================================
// Field updates
// =============================================================

#[test]
fn set_field_updates_each_known_member() {
    let mut form = AuthFormState::default();
    form.set_field(AuthField::Name, "Ada".to_owned());
    form.set_field(AuthField::Email, "ada@example.com".to_owned());
    form.set_field(AuthField::Password, "hunter2".to_owned());
    assert_eq!(form.name, "Ada");
    assert_eq!(form.email, "ada@example.com");
    assert_eq!(form.password, "hunter2");
}

#[test]
fn set_field_clears_existing_error() {
    for field in [AuthField::Name, AuthField::Email, AuthField::Password] {
        let mut form = AuthFormState::default();
        form.fail(&SubmitError::MissingFields);
        form.set_field(field, "x".to_owned());
        assert!(form.error.is_empty());
    }
}

#[test]
fn toggle_password_visibility_flips_flag() {
    let mut form = AuthFormState::default();
    assert!(!form.show_password);
    form.toggle_password_visibility();
    assert!(form.show_password);
    form.toggle_password_visibility();
    assert!(!form.show_password);
}

// =============================================================
// Mode toggle
// =============================================================

#[test]
fn toggle_mode_flips_between_sign_in_and_sign_up() {
    let mut form = AuthFormState::default();
    assert_eq!(form.mode, AuthMode::SignIn);
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::SignUp);
    assert!(form.is_sign_up());
    form.toggle_mode();
    assert_eq!(form.mode, AuthMode::SignIn);
}

#[test]
fn toggle_mode_resets_fields_and_both_banners() {
    let mut form = AuthFormState::default();
    form.set_field(AuthField::Name, "Ada".to_owned());
    form.set_field(AuthField::Email, "ada@example.com".to_owned());
    form.set_field(AuthField::Password, "hunter2".to_owned());
    form.error = "stale error".to_owned();
    form.success = "stale success".to_owned();
    form.toggle_mode();
    assert!(form.name.is_empty());
    assert!(form.email.is_empty());
    assert!(form.password.is_empty());
    assert!(form.error.is_empty());
    assert!(form.success.is_empty());
}

// =============================================================
// Readiness gate — no backend call while the service initializes
// =============================================================

#[test]
fn google_submit_refused_while_not_ready() {
    let err = AuthFormState::prepare_google_submit(false).unwrap_err();
    assert_eq!(err, SubmitError::ServiceNotReady);
    assert_eq!(
        err.to_string(),
        "Authentication service is not ready. Please try again."
    );
}

#[test]
fn email_submit_refused_while_not_ready_regardless_of_form_content() {
    let form = ready_sign_in_form();
    assert_eq!(
        form.prepare_email_submit(false),
        Err(SubmitError::ServiceNotReady)
    );
}

#[test]
fn google_submit_allowed_once_ready() {
    assert_eq!(AuthFormState::prepare_google_submit(true), Ok(()));
}

// =============================================================
// Validation
// =============================================================

#[test]
fn sign_in_with_empty_password_yields_no_dispatch_plan() {
    let mut form = AuthFormState::default();
    form.set_field(AuthField::Email, "a@b.com".to_owned());
    assert_eq!(form.prepare_email_submit(true), Err(SubmitError::MissingFields));
}

#[test]
fn sign_in_with_empty_email_yields_no_dispatch_plan() {
    let mut form = AuthFormState::default();
    form.set_field(AuthField::Password, "secret123".to_owned());
    assert_eq!(form.prepare_email_submit(true), Err(SubmitError::MissingFields));
}

#[test]
fn whitespace_only_fields_count_as_missing() {
    let mut form = AuthFormState::default();
    form.set_field(AuthField::Email, "   ".to_owned());
    form.set_field(AuthField::Password, "secret123".to_owned());
    assert_eq!(form.prepare_email_submit(true), Err(SubmitError::MissingFields));
}

#[test]
fn sign_up_without_name_yields_no_dispatch_plan() {
    let mut form = AuthFormState::default();
    form.toggle_mode();
    form.set_field(AuthField::Email, "a@b.com".to_owned());
    form.set_field(AuthField::Password, "secret123".to_owned());
    let err = form.prepare_email_submit(true).unwrap_err();
    assert_eq!(err, SubmitError::MissingName);
    assert_eq!(err.to_string(), "Please enter your name");
}

#[test]
fn sign_in_does_not_require_a_name() {
    let form = ready_sign_in_form();
    assert_eq!(
        form.prepare_email_submit(true),
        Ok(EmailSubmit::SignIn {
            email: "a@b.com".to_owned(),
            password: "secret123".to_owned(),
        })
    );
}

#[test]
fn sign_up_plan_carries_trimmed_values() {
    let mut form = AuthFormState::default();
    form.toggle_mode();
    form.set_field(AuthField::Name, "  Ada Lovelace ".to_owned());
    form.set_field(AuthField::Email, " ada@example.com ".to_owned());
    form.set_field(AuthField::Password, "hunter2".to_owned());
    let plan = form.prepare_email_submit(true).unwrap();
    assert_eq!(
        plan,
        EmailSubmit::SignUp {
            email: "ada@example.com".to_owned(),
            password: "hunter2".to_owned(),
            name: "Ada Lovelace".to_owned(),
        }
    );
    assert_eq!(plan.kind(), AttemptKind::EmailSignUp);
}

// =============================================================
// Attempt lifecycle: Idle -> Submitting -> (Success | Failed) -> Idle
// =============================================================

#[test]
fn begin_submit_sets_loading_and_clears_banners() {
    let mut form = ready_sign_in_form();
    form.error = "old error".to_owned();
    form.begin_submit();
    assert!(form.loading);
    assert!(form.error.is_empty());
    assert!(form.success.is_empty());
}

#[test]
fn successful_sign_in_attempt_reaches_the_specified_final_state() {
    let mut form = ready_sign_in_form();
    let plan = form.prepare_email_submit(true).unwrap();
    form.begin_submit();
    form.succeed(plan.kind());
    assert!(!form.loading);
    assert_eq!(form.error, "");
    assert_eq!(form.success, "Successfully signed in! Redirecting to hackathons...");
}

#[test]
fn successful_sign_up_attempt_sets_account_created_banner() {
    let mut form = AuthFormState::default();
    form.begin_submit();
    form.succeed(AttemptKind::EmailSignUp);
    assert_eq!(
        form.success,
        "Account created successfully! Redirecting to hackathons..."
    );
}

#[test]
fn google_success_banner_names_google() {
    let mut form = AuthFormState::default();
    form.begin_submit();
    form.succeed(AttemptKind::Google);
    assert!(!form.loading);
    assert_eq!(form.success, "Successfully signed in with Google!");
}

#[test]
fn failed_attempt_clears_loading_and_sets_error() {
    let mut form = ready_sign_in_form();
    form.begin_submit();
    form.fail(&SubmitError::provider(AttemptKind::EmailSignIn, "auth/wrong-password"));
    assert!(!form.loading);
    assert_eq!(form.error, "auth/wrong-password");
    assert!(form.success.is_empty());
}

#[test]
fn error_and_success_are_never_simultaneously_non_empty() {
    let mut form = ready_sign_in_form();
    form.begin_submit();
    form.fail(&SubmitError::provider(AttemptKind::EmailSignIn, "nope"));
    form.begin_submit();
    form.succeed(AttemptKind::EmailSignIn);
    assert!(form.error.is_empty());
    assert!(!form.success.is_empty());
    form.begin_submit();
    form.fail(&SubmitError::provider(AttemptKind::EmailSignIn, "nope again"));
    assert!(form.success.is_empty());
    assert!(!form.error.is_empty());
}

#[test]
fn failed_attempt_leaves_form_resubmittable() {
    let mut form = ready_sign_in_form();
    form.begin_submit();
    form.fail(&SubmitError::provider(AttemptKind::EmailSignIn, ""));
    assert!(!form.loading);
    assert!(form.prepare_email_submit(true).is_ok());
}

// =============================================================
// Provider error mapping
// =============================================================

#[test]
fn provider_error_surfaces_backend_message_as_given() {
    let err = SubmitError::provider(AttemptKind::Google, "popup closed by user");
    assert_eq!(err.to_string(), "popup closed by user");
}

#[test]
fn provider_error_falls_back_per_attempt_kind_when_message_is_blank() {
    assert_eq!(
        SubmitError::provider(AttemptKind::Google, "  ").to_string(),
        "Failed to sign in with Google"
    );
    assert_eq!(
        SubmitError::provider(AttemptKind::EmailSignIn, "").to_string(),
        "Failed to sign in"
    );
    assert_eq!(
        SubmitError::provider(AttemptKind::EmailSignUp, "").to_string(),
        "Failed to create account"
    );
}
