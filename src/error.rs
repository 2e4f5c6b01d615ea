//! Error types for message extraction

use thiserror::Error;

/// Errors raised inside the extraction pipeline.
///
/// The public extraction operations never return these to the caller; they
/// are logged and converted into an empty signal. Ingestion helpers such as
/// [`crate::Message::from_json`] do surface them.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// Failed to parse the message structure
    #[error("Failed to parse message structure: {0}")]
    Structure(String),

    /// Failed to decode a base64url body
    #[error("Failed to decode content: {0}")]
    Decode(#[from] base64::DecodeError),

    /// Decoded body was not valid UTF-8
    #[error("Body is not valid UTF-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),

    /// Message JSON did not match the expected shape
    #[error("Invalid message JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// The text model could not be loaded
    #[error("Text model unavailable: {0}")]
    Model(String),
}

/// Result type for extraction operations
pub type Result<T> = std::result::Result<T, ExtractError>;
