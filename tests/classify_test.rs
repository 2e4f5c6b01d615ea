mod common;

use common::{message, text_part};
use mail_signal::*;

#[test]
fn test_classify_automated_message() {
    let msg = message(
        &[
            ("From", "Acme Widgets <no-reply@acmewidgets.com>"),
            ("Subject", "Your order shipped"),
            ("Date", "Wed, 01 Jan 2025 12:00:00 +0000"),
        ],
        Some(vec![text_part(
            "text/plain",
            "Acme Widgets shipped your order. Track it on Acme Widgets.",
        )]),
    );

    let result = classify(&msg);

    assert!(result.is_automated);
    assert_eq!(result.company_name, "Acme Widgets");
    assert_eq!(result.subject, "Your order shipped");
    assert_eq!(result.from_address, "no-reply@acmewidgets.com");
    assert_eq!(result.received_at.to_string(), "Wed, 01 Jan 2025 12:00:00 +0000");
}

#[test]
fn test_classify_personal_message() {
    let msg = message(&[("From", "Jane Doe <jane.doe@initech.com>")], None);
    let result = classify(&msg);

    assert!(!result.is_automated);
    assert_eq!(result.company_name, "initech");
    assert_eq!(result.subject, "");
    assert!(result.received_at.is_fallback());
}

#[test]
fn test_classify_empty_message() {
    let result = classify(&Message::default());

    assert!(!result.is_automated);
    assert_eq!(result.company_name, "");
    assert_eq!(result.from_address, "");
}

#[test]
fn test_classify_all_keeps_order() {
    let messages = vec![
        message(&[("From", "a@alpha.com")], None),
        Message::default(),
        message(&[("From", "notifications@beta.io")], None),
    ];

    let results = classify_all(&messages);

    assert_eq!(results.len(), 3);
    assert_eq!(results[0].company_name, "alpha");
    assert_eq!(results[1].company_name, "");
    assert!(results[2].is_automated);
    assert_eq!(results[2].company_name, "beta");
}

#[test]
fn test_extractor_custom_bulk_domain() {
    let extractor = Extractor::new(ExtractorConfig::default().with_bulk_domain("mailer.initech.com"));
    let msg = message(&[("From", "Bill <bill@mailer.initech.com>")], None);

    assert!(extractor.classify(&msg).is_automated);
    assert!(!classify(&msg).is_automated);
}

#[test]
fn test_config_from_json() {
    let config: ExtractorConfig =
        serde_json::from_str(r#"{"body_scan": "recursive", "domain_fallback": false}"#).unwrap();

    assert_eq!(config.body_scan, BodyScan::Recursive);
    assert!(!config.domain_fallback);
    assert!(config.bulk_domains.iter().any(|d| d == "smartrecruiters.com"));
}

#[test]
fn test_message_from_json() {
    let json = r#"{
        "id": "18c0ffee",
        "threadId": "18c0ffee",
        "payload": {
            "mimeType": "multipart/alternative",
            "headers": [
                {"name": "From", "value": "Globex <careers@globex.com>"},
                {"name": "Subject", "value": "Application received"}
            ],
            "parts": [
                {"mimeType": "text/plain", "body": {"size": 31, "data": "R2xvYmV4IHRoYW5rcyB5b3UuIEdsb2JleA=="}}
            ]
        }
    }"#;

    let msg = Message::from_json(json).unwrap();
    assert_eq!(msg.id(), Some("18c0ffee"));

    let result = classify(&msg);
    assert_eq!(result.company_name, "Globex");
    assert_eq!(result.subject, "Application received");
}

#[test]
fn test_message_from_invalid_json() {
    assert!(matches!(
        Message::from_json("{not json"),
        Err(ExtractError::Json(_))
    ));
}
