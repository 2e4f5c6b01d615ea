//! Raw RFC 5322 ingestion into the provider message shape

use crate::error::{ExtractError, Result};
use crate::types::{Header, Message, Part, PartBody, Payload};
use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use mailparse::ParsedMail;
use tracing::debug;

/// Parse raw email bytes into a [`Message`].
///
/// Headers keep their order and original names. Leaf bodies are decoded
/// from their transfer encoding and stored base64url, the same way a
/// provider API returns them. A multipart message populates
/// `payload.parts`; a single-part one populates `payload.body`.
pub fn parse_raw_message(raw: &[u8]) -> Result<Message> {
    let parsed = mailparse::parse_mail(raw).map_err(|e| ExtractError::Structure(e.to_string()))?;

    let headers = parsed
        .headers
        .iter()
        .map(|h| Header::new(h.get_key(), h.get_value()))
        .collect();

    let (body, parts) = if parsed.subparts.is_empty() {
        (Some(encode_body(&parsed)?), None)
    } else {
        (None, Some(convert_parts(&parsed.subparts)?))
    };

    debug!(
        "Parsed raw message: {} with {} top-level parts",
        parsed.ctype.mimetype,
        parsed.subparts.len()
    );

    Ok(Message {
        id: None,
        thread_id: None,
        payload: Some(Payload {
            mime_type: Some(parsed.ctype.mimetype.to_lowercase()),
            headers: Some(headers),
            body,
            parts,
        }),
    })
}

fn convert_parts(subparts: &[ParsedMail]) -> Result<Vec<Part>> {
    subparts.iter().map(convert_part).collect()
}

fn convert_part(parsed: &ParsedMail) -> Result<Part> {
    let filename = parsed
        .get_content_disposition()
        .params
        .get("filename")
        .cloned();

    if parsed.subparts.is_empty() {
        Ok(Part {
            mime_type: Some(parsed.ctype.mimetype.to_lowercase()),
            filename,
            body: Some(encode_body(parsed)?),
            parts: None,
        })
    } else {
        Ok(Part {
            mime_type: Some(parsed.ctype.mimetype.to_lowercase()),
            filename,
            body: None,
            parts: Some(convert_parts(&parsed.subparts)?),
        })
    }
}

/// Text parts are charset-decoded to UTF-8; everything else stays as bytes
fn encode_body(parsed: &ParsedMail) -> Result<PartBody> {
    let bytes = if parsed.ctype.mimetype.to_lowercase().starts_with("text/") {
        parsed
            .get_body()
            .map_err(|e| ExtractError::Structure(e.to_string()))?
            .into_bytes()
    } else {
        parsed
            .get_body_raw()
            .map_err(|e| ExtractError::Structure(e.to_string()))?
    };

    Ok(PartBody {
        size: Some(bytes.len() as u64),
        data: Some(URL_SAFE.encode(&bytes)),
        attachment_id: None,
    })
}
