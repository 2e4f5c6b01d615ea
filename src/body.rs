//! Plain-text extraction from message body parts

use crate::config::BodyScan;
use crate::error::Result;
use crate::types::{Message, Part};
use base64::Engine;
use base64::alphabet;
use base64::engine::{DecodePaddingMode, GeneralPurpose, GeneralPurposeConfig};
use scraper::{Html, Node};
use tracing::{debug, warn};

/// Base64url engine that accepts bodies with or without `=` padding
const URL_SAFE_LENIENT: GeneralPurpose = GeneralPurpose::new(
    &alphabet::URL_SAFE,
    GeneralPurposeConfig::new().with_decode_padding_mode(DecodePaddingMode::Indifferent),
);

/// Plain text of the first `text/plain` or `text/html` part.
///
/// Only the direct children of `payload.parts` are inspected; see
/// [`extract_plain_text_with`] for nested multiparts. The result holds at
/// most one element and is empty when nothing usable was found.
#[must_use]
pub fn extract_plain_text(message: &Message) -> Vec<String> {
    extract_plain_text_with(message, BodyScan::Shallow)
}

/// Plain text of the first text part, walking parts according to `scan`
#[must_use]
pub fn extract_plain_text_with(message: &Message, scan: BodyScan) -> Vec<String> {
    let Some(parts) = message.payload.as_ref().and_then(|p| p.parts.as_deref()) else {
        debug!("msg {}: no body parts", message.log_id());
        return Vec::new();
    };

    let Some(part) = find_text_part(parts, scan) else {
        debug!("msg {}: no text/plain or text/html part", message.log_id());
        return Vec::new();
    };

    match part_text(part) {
        Ok(text) => vec![text],
        Err(e) => {
            warn!("msg {}: undecodable {} part: {e}", message.log_id(), part.mime_type());
            Vec::new()
        }
    }
}

fn find_text_part(parts: &[Part], scan: BodyScan) -> Option<&Part> {
    for part in parts {
        if is_text_part(part) && part.data().is_some() {
            return Some(part);
        }

        if scan == BodyScan::Recursive
            && let Some(nested) = part.parts.as_deref()
            && let Some(found) = find_text_part(nested, scan)
        {
            return Some(found);
        }
    }

    None
}

fn is_text_part(part: &Part) -> bool {
    let mime = part.mime_type();
    mime.eq_ignore_ascii_case("text/plain") || is_html(mime)
}

fn is_html(mime: &str) -> bool {
    mime.eq_ignore_ascii_case("text/html")
}

/// Decode a part body and reduce HTML to its text content
fn part_text(part: &Part) -> Result<String> {
    let data = part.data().unwrap_or_default();
    let text = decode_body(data)?;

    if is_html(part.mime_type()) {
        Ok(html_to_text(&text))
    } else {
        Ok(text)
    }
}

/// Decode base64url body data into UTF-8 text
pub fn decode_body(data: &str) -> Result<String> {
    let bytes = URL_SAFE_LENIENT.decode(data.trim())?;
    Ok(String::from_utf8(bytes)?)
}

/// Concatenated text nodes of an HTML document, minus scripts and styles
#[must_use]
pub fn html_to_text(html: &str) -> String {
    let document = Html::parse_document(html);

    document
        .root_element()
        .descendants()
        .filter_map(|node| {
            let text = node.value().as_text()?;
            let hidden = node
                .parent()
                .and_then(|parent| match parent.value() {
                    Node::Element(el) => Some(matches!(el.name(), "script" | "style")),
                    _ => None,
                })
                .unwrap_or(false);
            (!hidden).then_some(&**text)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_accepts_unpadded_and_padded() {
        assert_eq!(decode_body("SGk").unwrap(), "Hi");
        assert_eq!(decode_body("SGk=").unwrap(), "Hi");
    }

    #[test]
    fn decode_uses_url_safe_alphabet() {
        // "??>" encodes to "Pz8-" in the URL-safe alphabet
        assert_eq!(decode_body("Pz8-").unwrap(), "??>");
        assert!(decode_body("Pz8+").is_err());
    }

    #[test]
    fn html_to_text_drops_markup_and_scripts() {
        let text = html_to_text(
            "<html><head><style>p { color: red; }</style></head>\
             <body><p>Acme</p> <script>var x = 1;</script><b>Corp</b></body></html>",
        );
        assert!(text.contains("Acme"));
        assert!(text.contains("Corp"));
        assert!(!text.contains("color"));
        assert!(!text.contains("var x"));
        assert!(!text.contains('<'));
    }
}
