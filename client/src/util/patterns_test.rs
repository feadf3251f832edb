use super::*;

#[test]
fn email_accepts_basic_addresses() {
    assert!(is_email("a@b.c"));
    assert!(is_email("x@y.com"));
    assert!(is_email("first.last@sub.example.org"));
}

#[test]
fn email_rejects_missing_at_or_dot() {
    assert!(!is_email(""));
    assert!(!is_email("ab.c"));
    assert!(!is_email("a@bc"));
    assert!(!is_email("a.b@c"));
    assert!(!is_email("a@@b.c"));
}

#[test]
fn email_does_not_trim_whitespace() {
    assert!(!is_email(" x@y.com"));
    assert!(!is_email("x@y.com "));
    assert!(!is_email("x @y.com"));
}

#[test]
fn cnic_accepts_dashed_and_plain_forms() {
    assert!(is_cnic("12345-1234567-1"));
    assert!(is_cnic("1234567890123"));
}

#[test]
fn cnic_rejects_wrong_grouping_and_lengths() {
    assert!(!is_cnic("1234-567-1"));
    assert!(!is_cnic("123456789012"));
    assert!(!is_cnic("12345678901234"));
    assert!(!is_cnic("12345-1234567-12"));
    assert!(!is_cnic("12345--1234567-1"));
    assert!(!is_cnic("12345-1234567-1-"));
    assert!(!is_cnic("abcde-fghijkl-m"));
    assert!(!is_cnic(""));
}

#[test]
fn cnic_rejects_non_ascii_digits() {
    // Arabic-Indic digits are `\d` in Unicode regex mode but not valid here.
    assert!(!is_cnic("١٢٣٤٥٦٧٨٩٠١٢٣"));
}
