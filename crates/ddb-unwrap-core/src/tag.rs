//! The six recognized attribute type tags.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// A type tag from the typed-attribute convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    /// `S` — string, promoted to epoch seconds when it is an RFC 3339 timestamp.
    S,
    /// `N` — number, carried as a decimal string.
    N,
    /// `BOOL`
    Bool,
    /// `NULL` — kept only when truthy, as the `"null"` marker.
    Null,
    /// `L` — list of tagged entries.
    L,
    /// `M` — map of field name to tagged entry.
    M,
}

impl Tag {
    /// Every tag, in wire order.
    pub const ALL: [Tag; 6] = [Tag::S, Tag::N, Tag::Bool, Tag::Null, Tag::L, Tag::M];

    /// Parse a tag after trimming surrounding whitespace.
    ///
    /// Matching is exact and case-sensitive: `" BOOL "` is `Bool`, `"bool"` is not a tag.
    pub fn parse(raw: &str) -> Option<Tag> {
        match raw.trim() {
            "S" => Some(Tag::S),
            "N" => Some(Tag::N),
            "BOOL" => Some(Tag::Bool),
            "NULL" => Some(Tag::Null),
            "L" => Some(Tag::L),
            "M" => Some(Tag::M),
            _ => None,
        }
    }

    /// The wire spelling of the tag.
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::S => "S",
            Tag::N => "N",
            Tag::Bool => "BOOL",
            Tag::Null => "NULL",
            Tag::L => "L",
            Tag::M => "M",
        }
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Returned by [`Tag::from_str`] for anything that is not a recognized tag.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown type tag: '{0}'")]
pub struct UnknownTag(pub String);

impl FromStr for Tag {
    type Err = UnknownTag;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tag::parse(s).ok_or_else(|| UnknownTag(s.to_string()))
    }
}
