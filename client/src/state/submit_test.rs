use super::*;

#[test]
fn gate_starts_idle() {
    let gate = SubmitGate::default();
    assert_eq!(gate.phase, SubmitPhase::Idle);
    assert!(!gate.is_submitting());
    assert_eq!(gate.submitted, 0);
}

#[test]
fn begin_refuses_while_submitting() {
    let mut gate = SubmitGate::default();
    assert!(gate.begin());
    assert!(!gate.begin());
    assert_eq!(gate.submitted, 1);
}

#[test]
fn finish_allows_immediate_resubmit() {
    let mut gate = SubmitGate::default();
    assert!(gate.begin());
    assert!(gate.finish());
    assert_eq!(gate.phase, SubmitPhase::Idle);
    assert!(gate.begin());
    assert_eq!(gate.submitted, 2);
}

#[test]
fn finish_when_idle_is_rejected() {
    let mut gate = SubmitGate::default();
    assert!(!gate.finish());
}

#[test]
fn submit_error_messages() {
    let rejected = SubmitError::Rejected { fields: vec!["email".to_owned(), "cnic".to_owned()] };
    assert_eq!(rejected.to_string(), "submission rejected for: email, cnic");
    assert_eq!(SubmitError::Failed("timeout".to_owned()).to_string(), "submission failed: timeout");
}
