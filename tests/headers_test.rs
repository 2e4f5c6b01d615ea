mod common;

use common::message;
use mail_signal::*;

#[test]
fn test_get_headers_missing_payload() {
    let msg = Message::default();
    assert!(get_headers(&msg).is_none());
    assert_eq!(get_header_value(&msg, "Subject"), "");
}

#[test]
fn test_first_header_wins() {
    let msg = message(&[("Subject", "First"), ("Subject", "Second")], None);
    assert_eq!(get_subject(&msg), "First");
}

#[test]
fn test_header_name_case_sensitive() {
    let msg = message(&[("subject", "lower")], None);
    assert_eq!(get_subject(&msg), "");
    assert_eq!(get_header_value(&msg, "subject"), "lower");
}

#[test]
fn test_from_address_angle_brackets() {
    let msg = message(&[("From", "Jane Doe <jane@acme.com>")], None);
    assert_eq!(get_from_address(&msg), "jane@acme.com");
}

#[test]
fn test_from_address_bare() {
    let msg = message(&[("From", "jane@acme.com")], None);
    assert_eq!(get_from_address(&msg), "jane@acme.com");
}

#[test]
fn test_from_address_missing() {
    let msg = message(&[("Subject", "Hi")], None);
    assert_eq!(get_from_address(&msg), "");
}

#[test]
fn test_received_at_from_header() {
    let msg = message(&[("Date", "Wed, 01 Jan 2025 12:00:00 +0000")], None);
    let received = get_received_at(&msg);

    assert_eq!(
        received,
        ReceivedAt::Header("Wed, 01 Jan 2025 12:00:00 +0000".into())
    );
    assert_eq!(received.to_string(), "Wed, 01 Jan 2025 12:00:00 +0000");
    assert!(received.parsed().is_some());
}

#[test]
fn test_received_at_fallback() {
    let msg = message(&[], None);
    let received = get_received_at(&msg);

    assert!(received.is_fallback());
    assert!(received.parsed().is_some());
}

#[test]
fn test_received_at_unparseable_header() {
    let msg = message(&[("Date", "sometime last week")], None);
    let received = get_received_at(&msg);

    assert!(!received.is_fallback());
    assert!(received.parsed().is_none());
}
