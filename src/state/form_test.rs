use super::*;
use crate::net::api::ApiError;

#[test]
fn validate_trims_username() {
    assert_eq!(
        validate_credentials(FormMode::Login, "  alice ", "pw"),
        Ok(Credentials { username: "alice".to_owned(), password: "pw".to_owned() })
    );
}

#[test]
fn validate_requires_both_fields() {
    assert_eq!(validate_credentials(FormMode::Login, "   ", "pw"), Err("Enter both username and password."));
    assert_eq!(validate_credentials(FormMode::Login, "alice", ""), Err("Enter both username and password."));
}

#[test]
fn register_requires_eight_char_password() {
    assert_eq!(
        validate_credentials(FormMode::Register, "alice", "short"),
        Err("Password must be at least 8 characters.")
    );
    assert!(validate_credentials(FormMode::Register, "alice", "longenough").is_ok());
}

#[test]
fn login_accepts_short_password() {
    assert!(validate_credentials(FormMode::Login, "alice", "short").is_ok());
}

#[test]
fn begin_rejects_duplicate_submission() {
    let mut form = FormState::default();
    assert!(form.begin());
    assert!(form.busy);
    assert!(!form.begin());
}

#[test]
fn begin_clears_previous_error() {
    let mut form = FormState { busy: false, error: Some("old".to_owned()) };
    assert!(form.begin());
    assert_eq!(form.error, None);
}

#[test]
fn finish_reenables_on_success() {
    let mut form = FormState::default();
    form.begin();
    form.finish::<AppRoute>(&Ok(AppRoute::Home));
    assert_eq!(form, FormState::default());
}

#[test]
fn finish_reenables_and_records_failure() {
    let mut form = FormState::default();
    form.begin();
    form.finish::<AppRoute>(&Err(AuthError::Api(ApiError::Rejected {
        status: 401,
        detail: Some("Bad credentials".to_owned()),
    })));
    assert!(!form.busy);
    assert_eq!(form.error.as_deref(), Some("Bad credentials"));
    assert!(form.begin());
}

#[test]
fn submit_disabled_while_busy_or_incomplete() {
    let mut form = FormState::default();
    assert!(form.submit_disabled("", "pw"));
    assert!(form.submit_disabled("alice", ""));
    assert!(!form.submit_disabled("alice", "pw"));
    form.begin();
    assert!(form.submit_disabled("alice", "pw"));
}

#[test]
fn mode_labels() {
    assert_eq!(FormMode::Login.title(), "Log In");
    assert_eq!(FormMode::Register.busy_label(), "Creating account...");
    assert_eq!(FormMode::Login.switch_link().2, AppRoute::Register);
    assert_eq!(FormMode::Register.switch_link().2, AppRoute::Login);
}
