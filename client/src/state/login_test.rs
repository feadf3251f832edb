use super::*;

fn filled() -> LoginFormState {
    let mut form = LoginFormState::default();
    form.set_field(LoginField::Identifier, "12345-1234567-1");
    form.set_field(LoginField::Password, "hunter22");
    form
}

#[test]
fn default_form_remembers_user() {
    let form = LoginFormState::default();
    assert!(form.remember_me);
    assert_eq!(form.error, None);
    assert!(!form.is_submitting());
}

#[test]
fn validate_login_reports_first_missing_field() {
    assert_eq!(validate_login("", ""), Err(IDENTIFIER_REQUIRED));
    assert_eq!(validate_login("", "pw"), Err(IDENTIFIER_REQUIRED));
    assert_eq!(validate_login("a@b.com", ""), Err(PASSWORD_REQUIRED));
    assert_eq!(validate_login("anything", "pw"), Ok(()));
}

#[test]
fn validate_login_does_not_trim() {
    assert_eq!(validate_login("   ", " "), Ok(()));
}

#[test]
fn submit_without_identifier_sets_message() {
    let mut form = LoginFormState::default();
    let mut called = false;
    assert_eq!(form.submit(|_| called = true), SubmitOutcome::Invalid);
    assert!(!called);
    assert_eq!(form.error.as_deref(), Some("CNIC or Email is required"));
}

#[test]
fn any_edit_clears_message() {
    let mut form = LoginFormState::default();
    form.set_field(LoginField::Identifier, "user@example.com");
    form.submit(|_| {});
    assert_eq!(form.error.as_deref(), Some("Password is required"));

    form.set_field(LoginField::Identifier, "user@example.org");
    assert_eq!(form.error, None);
}

#[test]
fn valid_submit_hands_over_credentials_once() {
    let mut form = filled();
    let mut calls = Vec::new();
    assert_eq!(form.submit(|data| calls.push(data)), SubmitOutcome::Submitted);
    assert_eq!(
        calls,
        vec![LoginData { identifier: "12345-1234567-1".to_owned(), password: "hunter22".to_owned() }]
    );
    assert!(form.is_submitting());
    assert_eq!(form.submit(|data| calls.push(data)), SubmitOutcome::Busy);
    assert_eq!(calls.len(), 1);
}

#[test]
fn complete_returns_to_idle() {
    let mut form = filled();
    form.submit(|_| {});
    form.complete(Ok(()));
    assert!(!form.is_submitting());
    assert_eq!(form.error, None);
}

#[test]
fn failed_completion_surfaces_message() {
    let mut form = filled();
    form.submit(|_| {});
    form.complete(Err(SubmitError::Failed("bad credentials".to_owned())));
    assert_eq!(form.error.as_deref(), Some("submission failed: bad credentials"));
}

#[test]
fn classify_identifier_kinds() {
    assert_eq!(classify_identifier("a@b.co"), IdentifierKind::Email);
    assert_eq!(classify_identifier("12345-1234567-1"), IdentifierKind::Cnic);
    assert_eq!(classify_identifier("1234567890123"), IdentifierKind::Cnic);
    assert_eq!(classify_identifier("jdoe"), IdentifierKind::Unknown);
    assert_eq!(IdentifierKind::Cnic.as_str(), "cnic");
}

#[test]
fn login_data_debug_hides_password() {
    let data = LoginData { identifier: "a@b.co".to_owned(), password: "hunter22".to_owned() };
    let rendered = format!("{data:?}");
    assert!(rendered.contains("a@b.co"));
    assert!(!rendered.contains("hunter22"));
}

#[test]
fn login_data_serializes_identifier_as_cnic_or_email() {
    let data = LoginData { identifier: "a@b.co".to_owned(), password: "pw".to_owned() };
    assert_eq!(
        serde_json::to_value(&data).unwrap(),
        serde_json::json!({ "cnicOrEmail": "a@b.co", "password": "pw" })
    );
}
