//! Typed access to message headers

use crate::types::{Header, Message, ReceivedAt};
use chrono::Utc;
use tracing::debug;

/// Header list of a message, if the payload carries one
#[must_use]
pub fn get_headers(message: &Message) -> Option<&[Header]> {
    message
        .payload
        .as_ref()
        .and_then(|p| p.headers.as_deref())
}

/// Value of the first header named exactly `name`, or empty
#[must_use]
pub fn get_header_value<'a>(message: &'a Message, name: &str) -> &'a str {
    get_headers(message)
        .and_then(|headers| headers.iter().find(|h| h.name == name))
        .map_or("", |h| h.value.as_str())
}

#[must_use]
pub fn get_subject(message: &Message) -> &str {
    get_header_value(message, "Subject")
}

/// Bare sender address from the `From` header.
///
/// `Jane <jane@acme.com>` gives `jane@acme.com`; a value without angle
/// brackets is returned as is. A missing header gives an empty string.
#[must_use]
pub fn get_from_address(message: &Message) -> &str {
    let from = get_header_value(message, "From");
    if from.is_empty() {
        debug!("msg {}: no From header", message.log_id());
        return "";
    }

    match from.split_once('<') {
        Some((_, rest)) => rest.split('>').next().unwrap_or_default(),
        None => from,
    }
}

/// `Date` header verbatim, or the current time when absent
#[must_use]
pub fn get_received_at(message: &Message) -> ReceivedAt {
    let date = get_header_value(message, "Date");
    if date.is_empty() {
        debug!("msg {}: no Date header, using current time", message.log_id());
        ReceivedAt::Fallback(Utc::now())
    } else {
        ReceivedAt::Header(date.to_string())
    }
}
