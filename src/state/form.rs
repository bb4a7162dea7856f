//! Auth form state: input validation and duplicate-submit protection.
//!
//! DESIGN
//! ======
//! Login and registration share one form component; everything that differs
//! between them hangs off [`FormMode`].

#[cfg(test)]
#[path = "form_test.rs"]
mod form_test;

use crate::net::types::Credentials;
use crate::state::auth_flow::AuthError;
use crate::util::route::AppRoute;

/// Minimum password length accepted by the registration form.
pub const MIN_REGISTER_PASSWORD_LEN: usize = 8;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FormMode {
    Login,
    Register,
}

impl FormMode {
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::Login => "Log In",
            Self::Register => "Register",
        }
    }

    #[must_use]
    pub fn busy_label(self) -> &'static str {
        match self {
            Self::Login => "Signing in...",
            Self::Register => "Creating account...",
        }
    }

    /// Prompt and target of the link to the other form.
    #[must_use]
    pub fn switch_link(self) -> (&'static str, &'static str, AppRoute) {
        match self {
            Self::Login => ("Don't have an account?", "Sign up", AppRoute::Register),
            Self::Register => ("Already have an account?", "Sign in", AppRoute::Login),
        }
    }

    #[must_use]
    pub fn password_autocomplete(self) -> &'static str {
        match self {
            Self::Login => "current-password",
            Self::Register => "new-password",
        }
    }
}

/// Trim and check form input.
///
/// # Errors
///
/// Returns the message to show inline when a field is missing or the
/// registration password is too short.
pub fn validate_credentials(mode: FormMode, username: &str, password: &str) -> Result<Credentials, &'static str> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err("Enter both username and password.");
    }
    if mode == FormMode::Register && password.chars().count() < MIN_REGISTER_PASSWORD_LEN {
        return Err("Password must be at least 8 characters.");
    }
    Ok(Credentials { username: username.to_owned(), password: password.to_owned() })
}

/// Submit-control state for one form.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FormState {
    pub busy: bool,
    pub error: Option<String>,
}

impl FormState {
    /// Mark a request as outstanding. Returns `false` if one already is, in
    /// which case the submission must be dropped.
    pub fn begin(&mut self) -> bool {
        if self.busy {
            return false;
        }
        self.busy = true;
        self.error = None;
        true
    }

    /// Re-enable the form and record the outcome.
    pub fn finish<T>(&mut self, result: &Result<T, AuthError>) {
        self.busy = false;
        self.error = result.as_ref().err().map(AuthError::user_message);
    }

    /// Show a validation message without touching `busy`.
    pub fn reject(&mut self, message: &str) {
        self.error = Some(message.to_owned());
    }

    #[must_use]
    pub fn submit_disabled(&self, username: &str, password: &str) -> bool {
        self.busy || username.is_empty() || password.is_empty()
    }
}
