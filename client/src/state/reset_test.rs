use super::*;

fn at_verify() -> PasswordReset {
    let mut reset = PasswordReset::default();
    reset.set_email("user@example.com");
    let ticket = reset.request_code().unwrap();
    assert!(reset.code_sent(ticket));
    reset
}

#[test]
fn starts_on_email_step() {
    let reset = PasswordReset::default();
    assert_eq!(reset.step, ResetStep::Email);
    assert!(!reset.is_loading());
    assert_eq!(reset.step.subtitle(), "Enter your email to receive reset instructions");
}

#[test]
fn request_code_requires_email() {
    let mut reset = PasswordReset::default();
    assert_eq!(reset.request_code(), Err(ResetError::EmailRequired));
    assert_eq!(reset.error, Some(ResetError::EmailRequired));
    assert!(!reset.is_loading());

    reset.set_email("a@b.c");
    assert_eq!(reset.error, None);
}

#[test]
fn full_flow_moves_forward() {
    let mut reset = at_verify();
    assert_eq!(reset.step, ResetStep::Verify);
    assert!(!reset.is_loading());

    reset.set_code("123456");
    let ticket = reset.verify().unwrap();
    assert!(reset.is_loading());
    assert!(reset.verified(ticket));
    assert_eq!(reset.step, ResetStep::Success);
    assert_eq!(reset.email, "user@example.com");
}

#[test]
fn request_while_loading_is_busy() {
    let mut reset = PasswordReset::default();
    reset.set_email("a@b.c");
    reset.request_code().unwrap();
    assert_eq!(reset.request_code(), Err(ResetError::Busy));
}

#[test]
fn verify_requires_code() {
    let mut reset = at_verify();
    assert_eq!(reset.verify(), Err(ResetError::CodeRequired));
    assert_eq!(reset.step, ResetStep::Verify);
}

#[test]
fn code_is_truncated_to_six_chars() {
    let mut reset = at_verify();
    reset.set_code("12345678");
    assert_eq!(reset.code, "123456");
}

#[test]
fn inputs_are_locked_outside_their_step() {
    let mut reset = PasswordReset::default();
    reset.set_code("123456");
    assert!(reset.code.is_empty());

    let mut reset = at_verify();
    reset.set_email("other@example.com");
    assert_eq!(reset.email, "user@example.com");
}

#[test]
fn actions_out_of_order_are_rejected() {
    let mut reset = PasswordReset::default();
    assert_eq!(
        reset.verify(),
        Err(ResetError::WrongStep { expected: ResetStep::Verify, actual: ResetStep::Email })
    );

    let mut reset = at_verify();
    assert_eq!(
        reset.request_code(),
        Err(ResetError::WrongStep { expected: ResetStep::Email, actual: ResetStep::Verify })
    );
}

#[test]
fn completions_only_advance_their_own_step() {
    let mut reset = PasswordReset::default();
    reset.set_email("a@b.c");
    let ticket = reset.request_code().unwrap();
    assert!(!reset.verified(ticket));
    assert_eq!(reset.step, ResetStep::Email);
    assert!(reset.code_sent(ticket));
    assert!(!reset.code_sent(ticket));
    assert_eq!(reset.step, ResetStep::Verify);
}

#[test]
fn cancel_returns_to_initial_state() {
    let mut reset = at_verify();
    reset.set_code("12");
    reset.cancel();
    assert_eq!(reset.step, ResetStep::Email);
    assert!(reset.email.is_empty());
    assert!(reset.code.is_empty());
    assert!(!reset.is_loading());
}

#[test]
fn cancel_from_success() {
    let mut reset = at_verify();
    reset.set_code("654321");
    let ticket = reset.verify().unwrap();
    reset.verified(ticket);
    reset.cancel();
    assert_eq!(reset.step, ResetStep::Email);
}

#[test]
fn completion_after_cancel_is_ignored() {
    let mut reset = PasswordReset::default();
    reset.set_email("a@b.c");
    let stale = reset.request_code().unwrap();
    reset.cancel();
    assert!(!reset.code_sent(stale));
    assert_eq!(reset.step, ResetStep::Email);

    reset.set_email("a@b.c");
    let fresh = reset.request_code().unwrap();
    assert!(!reset.code_sent(stale));
    assert!(reset.code_sent(fresh));
}

#[test]
fn failed_request_releases_gate_and_allows_retry() {
    let mut reset = PasswordReset::default();
    reset.set_email("a@b.c");
    let ticket = reset.request_code().unwrap();
    assert!(reset.failed(ticket, &SubmitError::Failed("network down".to_owned())));

    assert!(!reset.is_loading());
    assert_eq!(reset.step, ResetStep::Email);
    assert_eq!(reset.email, "a@b.c");
    assert_eq!(reset.error, Some(ResetError::Failed("submission failed: network down".to_owned())));

    let retry = reset.request_code().unwrap();
    assert_eq!(reset.error, None);
    assert!(reset.code_sent(retry));
    assert_eq!(reset.step, ResetStep::Verify);
}

#[test]
fn failed_verify_stays_on_verify_step() {
    let mut reset = at_verify();
    reset.set_code("123456");
    let ticket = reset.verify().unwrap();
    assert!(reset.failed(ticket, &SubmitError::Failed("timeout".to_owned())));
    assert!(!reset.is_loading());
    assert_eq!(reset.step, ResetStep::Verify);
    assert_eq!(reset.code, "123456");
    assert!(reset.verify().is_ok());
}

#[test]
fn stale_failure_is_ignored() {
    let mut reset = PasswordReset::default();
    reset.set_email("a@b.c");
    let stale = reset.request_code().unwrap();
    reset.cancel();
    assert!(!reset.failed(stale, &SubmitError::Failed("late".to_owned())));
    assert_eq!(reset.error, None);

    reset.set_email("a@b.c");
    let fresh = reset.request_code().unwrap();
    assert!(!reset.failed(stale, &SubmitError::Failed("late".to_owned())));
    assert!(reset.is_loading());
    assert!(reset.code_sent(fresh));
}

#[test]
fn error_messages() {
    assert_eq!(ResetError::EmailRequired.to_string(), "Enter your email first.");
    assert_eq!(ResetError::CodeRequired.to_string(), "Enter the verification code.");
}
