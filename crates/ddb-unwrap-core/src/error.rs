//! Error types for document-level conversion failures.
//!
//! Only problems with the document as a whole surface here. A single
//! attribute that is malformed for its tag is dropped by the decoder and
//! never becomes an error.

use thiserror::Error;

/// Errors that abort a whole conversion.
#[derive(Error, Debug)]
pub enum DecodeError {
    /// The input string was not valid JSON.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// The input parsed, but its root is not an object of attributes.
    #[error("expected a JSON object of attributes at the root, found {found}")]
    NotAnObject { found: &'static str },

    /// The decoded document could not be serialized back to JSON text.
    #[error("Serialization error: {0}")]
    Serialize(String),
}

/// Convenience alias used throughout ddb-unwrap-core.
pub type Result<T> = std::result::Result<T, DecodeError>;
