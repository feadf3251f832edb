use super::*;

#[test]
fn submit_label_reflects_loading() {
    assert_eq!(submit_label(false), "Sign In");
    assert_eq!(submit_label(true), "Signing in...");
}
