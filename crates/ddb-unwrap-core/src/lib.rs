//! # ddb-unwrap-core
//!
//! Decoder for **DynamoDB-style typed-attribute JSON**.
//!
//! Every attribute in the source document is a single-key object whose key is a
//! type tag (`S`, `N`, `BOOL`, `NULL`, `L`, `M`) and whose value is the payload,
//! usually a string. The decoder turns that into plain, natively-typed JSON:
//! numbers become numbers, booleans become booleans, RFC 3339 timestamps become
//! Unix epoch seconds, and lists and maps are unwrapped recursively. Attributes
//! that fail validation for their tag are dropped, never reported.
//!
//! ## Quick start
//!
//! ```rust
//! use ddb_unwrap_core::convert_str;
//!
//! let typed = r#"{"name":{"S":" Alice "},"age":{"N":"030"},"tags":{"L":[{"S":"a"},{"X":"?"}]}}"#;
//! let plain = convert_str(typed).unwrap();
//! assert_eq!(plain, r#"{"age":30,"name":"Alice","tags":["a"]}"#);
//! ```
//!
//! ## Modules
//!
//! - [`decoder`] — tag dispatch and whole-document conversion
//! - [`handlers`] — per-tag validation and parsing rules
//! - [`tag`] — the recognized type tags
//! - [`types`] — `NativeValue` and `Document`, the decoded output
//! - [`error`] — fatal, document-level errors

pub mod decoder;
pub mod error;
pub mod handlers;
pub mod tag;
pub mod types;

pub use decoder::{convert, convert_str, decode, decode_entry};
pub use error::DecodeError;
pub use tag::{Tag, UnknownTag};
pub use types::{Document, NativeValue};
