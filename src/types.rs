//! Core types for messages and extraction results

use crate::error::Result;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

/// A fetched email message in the provider's JSON shape
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    /// Provider message ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Provider thread ID
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub thread_id: Option<String>,

    /// Headers and body tree
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub payload: Option<Payload>,
}

impl Message {
    /// Deserialize a single message from provider JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Provider message ID, if the fetch layer supplied one
    #[must_use]
    pub fn id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    /// ID used to tag log lines
    pub(crate) fn log_id(&self) -> &str {
        self.id().unwrap_or("-")
    }
}

/// Top-level message payload
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    /// Ordered headers; names may repeat and the first match wins
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub headers: Option<Vec<Header>>,

    /// Body of a single-part message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PartBody>,

    /// Child parts of a multipart message
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

/// A single message header
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Header {
    pub name: String,
    pub value: String,
}

impl Header {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

/// A node of the body tree
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Part {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mime_type: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub body: Option<PartBody>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parts: Option<Vec<Part>>,
}

impl Part {
    #[must_use]
    pub fn mime_type(&self) -> &str {
        self.mime_type.as_deref().unwrap_or("")
    }

    /// Base64url body data, if present
    #[must_use]
    pub fn data(&self) -> Option<&str> {
        self.body.as_ref().and_then(|b| b.data.as_deref())
    }
}

/// Body content of a part
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PartBody {
    /// Base64url-encoded content
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_id: Option<String>,
}

/// Token counts ordered by count descending, ties in first-seen order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenFrequency(Vec<(String, usize)>);

impl TokenFrequency {
    pub fn iter(&self) -> impl Iterator<Item = (&str, usize)> {
        self.0.iter().map(|(token, count)| (token.as_str(), *count))
    }

    #[must_use]
    pub fn as_slice(&self) -> &[(String, usize)] {
        &self.0
    }

    #[must_use]
    pub const fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Token with the highest count
    #[must_use]
    pub fn top(&self) -> Option<(&str, usize)> {
        self.iter().next()
    }
}

impl From<Vec<(String, usize)>> for TokenFrequency {
    fn from(entries: Vec<(String, usize)>) -> Self {
        Self(entries)
    }
}

impl<'a> From<Vec<(&'a str, usize)>> for TokenFrequency {
    fn from(entries: Vec<(&'a str, usize)>) -> Self {
        Self(
            entries
                .into_iter()
                .map(|(token, count)| (token.to_string(), count))
                .collect(),
        )
    }
}

/// When the message was received
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReceivedAt {
    /// `Date` header value, verbatim
    Header(String),

    /// No `Date` header; wall-clock time at extraction
    Fallback(DateTime<Utc>),
}

impl ReceivedAt {
    /// Interpret the value as a timestamp.
    ///
    /// Header values are read as RFC 2822; anything else yields `None`.
    #[must_use]
    pub fn parsed(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Header(raw) => DateTime::parse_from_rfc2822(raw.trim())
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
            Self::Fallback(at) => Some(*at),
        }
    }

    #[must_use]
    pub const fn is_fallback(&self) -> bool {
        matches!(self, Self::Fallback(_))
    }
}

impl fmt::Display for ReceivedAt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Header(raw) => write!(f, "{raw}"),
            Self::Fallback(at) => write!(f, "{}", at.to_rfc3339()),
        }
    }
}

/// Derived fields for a single message
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Sender looks like a system rather than a person
    pub is_automated: bool,

    /// Best-guess company name, empty when there is no signal
    pub company_name: String,

    /// Subject line, empty if absent
    pub subject: String,

    /// Bare sender address, empty if absent
    pub from_address: String,

    pub received_at: ReceivedAt,
}
