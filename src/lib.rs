// Enforce at crate level
#![deny(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]
#![allow(clippy::module_name_repetitions)]

//! Mail Signal
//!
//! Rule-based classification of fetched email messages. For each message
//! it decides whether the sender is automated and guesses the associated
//! company name from the body text alone, with no external lookups.
//!
//! # Pipeline
//!
//! - Body extraction: first `text/plain` or `text/html` part, decoded and
//!   stripped of markup
//! - Cleaning: tokenize, drop stopwords, punctuation and numbers
//! - Ranking: token counts, descending, ties in first-seen order
//! - Company name: leading run of equally frequent capitalized tokens,
//!   falling back to the sender's domain
//!
//! Every step degrades to an empty result instead of failing, so one bad
//! message never aborts a batch.
//!
//! # Example
//!
//! ```rust
//! use mail_signal::{Message, classify};
//!
//! let json = r#"{"payload": {"headers": [
//!     {"name": "From", "value": "Acme <no-reply@acme.com>"},
//!     {"name": "Subject", "value": "Welcome"}
//! ]}}"#;
//! let message = Message::from_json(json).unwrap();
//! let result = classify(&message);
//!
//! assert!(result.is_automated);
//! assert_eq!(result.company_name, "acme");
//! ```

mod address;
mod body;
mod classify;
mod cleaner;
mod company;
mod config;
mod error;
mod frequency;
mod headers;
mod parser;
mod stopwords;
mod types;

pub use address::{
    DEFAULT_BULK_DOMAINS, domain_of, is_automated_email, is_automated_with, is_valid_email,
    organization_label,
};
pub use body::{decode_body, extract_plain_text, extract_plain_text_with, html_to_text};
pub use classify::{Extractor, classify, classify_all};
pub use cleaner::{TextModel, clean_text, init as init_text_model};
pub use company::{get_company_name, top_consecutive_capitalized_words};
pub use config::{BodyScan, ExtractorConfig};
pub use error::{ExtractError, Result};
pub use frequency::rank_frequency;
pub use headers::{get_from_address, get_header_value, get_headers, get_received_at, get_subject};
pub use parser::parse_raw_message;
pub use types::*;
