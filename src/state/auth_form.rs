//! Combined sign-in/sign-up form state for the landing page.
//!
//! DESIGN
//! ======
//! The controller is a plain struct so every transition is testable without a
//! browser. Submission is split into a pure `prepare_*` gate (readiness +
//! validation, no side effects) and explicit `begin_submit`/`succeed`/`fail`
//! transitions driven by the page handlers. Per attempt the state walks
//! `Idle -> Submitting -> (Success | Failed) -> Idle`; the handlers refuse to
//! start a new attempt while one is in flight.

#[cfg(test)]
#[path = "auth_form_test.rs"]
mod auth_form_test;

/// Which variant of the form is active. Controls required fields and which
/// backend call a submission dispatches to.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum AuthMode {
    #[default]
    SignIn,
    SignUp,
}

/// Known form fields addressable through [`AuthFormState::set_field`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AuthField {
    Name,
    Email,
    Password,
}

/// The three kinds of authentication attempt the panel can dispatch.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AttemptKind {
    Google,
    EmailSignIn,
    EmailSignUp,
}

impl AttemptKind {
    /// Banner text shown when the backend accepts the attempt.
    pub fn success_message(self) -> &'static str {
        match self {
            Self::Google => "Successfully signed in with Google!",
            Self::EmailSignIn => "Successfully signed in! Redirecting to hackathons...",
            Self::EmailSignUp => "Account created successfully! Redirecting to hackathons...",
        }
    }

    /// Banner text used when the backend rejects the attempt without a
    /// human-readable message of its own.
    pub fn fallback_message(self) -> &'static str {
        match self {
            Self::Google => "Failed to sign in with Google",
            Self::EmailSignIn => "Failed to sign in",
            Self::EmailSignUp => "Failed to create account",
        }
    }
}

/// Why a submission was refused or rejected. Every variant is recoverable by
/// the user editing the form and resubmitting; nothing here propagates past
/// the panel.
#[derive(thiserror::Error, Clone, Debug, PartialEq, Eq)]
pub enum SubmitError {
    /// The auth backend has not finished initializing; no call was made.
    #[error("Authentication service is not ready. Please try again.")]
    ServiceNotReady,
    /// Email or password missing; no call was made.
    #[error("Please fill in all fields")]
    MissingFields,
    /// Sign-up requires a display name; no call was made.
    #[error("Please enter your name")]
    MissingName,
    /// The backend rejected the attempt. Carries the user-visible message.
    #[error("{0}")]
    Provider(String),
}

impl SubmitError {
    /// Wrap a backend failure, falling back to a generic per-attempt message
    /// when the backend supplied nothing readable.
    pub fn provider(kind: AttemptKind, message: &str) -> Self {
        let message = message.trim();
        if message.is_empty() {
            Self::Provider(kind.fallback_message().to_owned())
        } else {
            Self::Provider(message.to_owned())
        }
    }
}

/// A validated email submission, ready to hand to the network layer.
///
/// Producing this value is the only way past validation, so a dispatch site
/// cannot call the backend with missing fields.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum EmailSubmit {
    SignIn { email: String, password: String },
    SignUp { email: String, password: String, name: String },
}

impl EmailSubmit {
    pub fn kind(&self) -> AttemptKind {
        match self {
            Self::SignIn { .. } => AttemptKind::EmailSignIn,
            Self::SignUp { .. } => AttemptKind::EmailSignUp,
        }
    }
}

/// Form state for the combined sign-in/sign-up card.
///
/// In the Leptos tree this lives in an `RwSignal` owned by the landing page.
/// Invariants: at most one of `error`/`success` is non-empty, and `loading`
/// is true only between `begin_submit` and `succeed`/`fail`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct AuthFormState {
    pub mode: AuthMode,
    pub name: String,
    pub email: String,
    pub password: String,
    pub show_password: bool,
    pub loading: bool,
    pub error: String,
    pub success: String,
}

impl AuthFormState {
    /// Update one field from an input event. Clears any stale error so the
    /// user is not scolded while correcting the form.
    pub fn set_field(&mut self, field: AuthField, value: String) {
        match field {
            AuthField::Name => self.name = value,
            AuthField::Email => self.email = value,
            AuthField::Password => self.password = value,
        }
        self.error.clear();
    }

    pub fn toggle_password_visibility(&mut self) {
        self.show_password = !self.show_password;
    }

    /// Switch between sign-in and sign-up. Drops all entered values and both
    /// banners so the other variant starts from a clean slate.
    pub fn toggle_mode(&mut self) {
        self.mode = match self.mode {
            AuthMode::SignIn => AuthMode::SignUp,
            AuthMode::SignUp => AuthMode::SignIn,
        };
        self.name.clear();
        self.email.clear();
        self.password.clear();
        self.error.clear();
        self.success.clear();
    }

    pub fn is_sign_up(&self) -> bool {
        self.mode == AuthMode::SignUp
    }

    /// Gate for the Google button. Pure and independent of the form fields:
    /// refuses when the backend is not ready, otherwise clears the way for
    /// `begin_submit`.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::ServiceNotReady`] when `ready` is false.
    pub fn prepare_google_submit(ready: bool) -> Result<(), SubmitError> {
        if ready {
            Ok(())
        } else {
            Err(SubmitError::ServiceNotReady)
        }
    }

    /// Gate + validation for the email form. Pure: checks readiness, then
    /// required fields for the active mode, and only then yields a dispatch
    /// plan carrying the trimmed values.
    ///
    /// # Errors
    ///
    /// Returns [`SubmitError::ServiceNotReady`], [`SubmitError::MissingFields`],
    /// or [`SubmitError::MissingName`]; in all three cases no backend call may
    /// be made.
    pub fn prepare_email_submit(&self, ready: bool) -> Result<EmailSubmit, SubmitError> {
        if !ready {
            return Err(SubmitError::ServiceNotReady);
        }
        let email = self.email.trim();
        let password = self.password.trim();
        if email.is_empty() || password.is_empty() {
            return Err(SubmitError::MissingFields);
        }
        match self.mode {
            AuthMode::SignIn => Ok(EmailSubmit::SignIn {
                email: email.to_owned(),
                password: password.to_owned(),
            }),
            AuthMode::SignUp => {
                let name = self.name.trim();
                if name.is_empty() {
                    return Err(SubmitError::MissingName);
                }
                Ok(EmailSubmit::SignUp {
                    email: email.to_owned(),
                    password: password.to_owned(),
                    name: name.to_owned(),
                })
            }
        }
    }

    /// Enter the Submitting state. Only reachable after a `prepare_*` gate
    /// passed.
    pub fn begin_submit(&mut self) {
        self.loading = true;
        self.error.clear();
        self.success.clear();
    }

    /// Resolve the in-flight attempt as accepted.
    pub fn succeed(&mut self, kind: AttemptKind) {
        self.success = kind.success_message().to_owned();
        self.error.clear();
        self.loading = false;
    }

    /// Resolve the in-flight attempt (or a refused gate) as failed.
    pub fn fail(&mut self, error: &SubmitError) {
        self.error = error.to_string();
        self.success.clear();
        self.loading = false;
    }
}
