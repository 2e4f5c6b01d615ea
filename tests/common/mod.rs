#![allow(dead_code)]

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE;
use mail_signal::{Header, Message, Part, PartBody, Payload};

pub fn encode(text: &str) -> String {
    URL_SAFE.encode(text.as_bytes())
}

pub fn text_part(mime_type: &str, text: &str) -> Part {
    Part {
        mime_type: Some(mime_type.to_string()),
        body: Some(PartBody {
            data: Some(encode(text)),
            ..PartBody::default()
        }),
        ..Part::default()
    }
}

pub fn multipart(mime_type: &str, parts: Vec<Part>) -> Part {
    Part {
        mime_type: Some(mime_type.to_string()),
        parts: Some(parts),
        ..Part::default()
    }
}

pub fn message(headers: &[(&str, &str)], parts: Option<Vec<Part>>) -> Message {
    Message {
        id: Some("msg-1".to_string()),
        thread_id: None,
        payload: Some(Payload {
            mime_type: Some("multipart/alternative".to_string()),
            headers: Some(
                headers
                    .iter()
                    .map(|(name, value)| Header::new(*name, *value))
                    .collect(),
            ),
            body: None,
            parts,
        }),
    }
}
