//! Error types for parsing and document-model access.

use crate::scanner::QUOTE_SENTINEL;
use thiserror::Error;

/// Longest fragment excerpt carried inside an error message.
const EXCERPT_LEN: usize = 64;

/// Errors that can occur while parsing JSON text or indexing into a [`JsonArray`].
///
/// Accessor type mismatches are not errors: typed getters return `None`
/// instead of failing.
///
/// [`JsonArray`]: crate::JsonArray
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Brackets, braces, or quotes do not close correctly within a fragment.
    #[error("unbalanced brackets or quotes in `{fragment}`")]
    UnbalancedFragment { fragment: String },

    /// A balanced fragment that is not a literal, string, number, object, or array.
    #[error("unrecognized value `{fragment}`")]
    InvalidFragment { fragment: String },

    /// An object member lacks its `:` separator or its quoted key.
    #[error("malformed object member `{member}`")]
    MalformedMember { member: String },

    /// The document root is not a single JSON object.
    #[error("document root must be a single JSON object")]
    NotAnObject,

    /// A number literal that does not fit in an `i64`, or a float literal too
    /// large to be finite.
    #[error("integer literal `{literal}` is out of range")]
    NumberOutOfRange { literal: String },

    /// Objects and arrays are nested deeper than the configured limit.
    #[error("nesting depth exceeds the limit of {limit}")]
    DepthLimitExceeded { limit: usize },

    /// The input contains U+FFFF, which the parser reserves for escaped quotes.
    #[error("reserved character U+FFFF at byte offset {offset}")]
    ReservedCharacter { offset: usize },

    /// Array access beyond the current bounds.
    #[error("index {index} out of range for array of size {len}")]
    IndexOutOfRange { index: usize, len: usize },
}

/// Fieldless mirror of [`ParseError`] for callers that only branch on the cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    UnbalancedFragment,
    InvalidFragment,
    MalformedMember,
    NotAnObject,
    NumberOutOfRange,
    DepthLimitExceeded,
    ReservedCharacter,
    IndexOutOfRange,
}

impl ParseError {
    /// The cause of this error without its payload.
    pub fn kind(&self) -> ErrorKind {
        match self {
            ParseError::UnbalancedFragment { .. } => ErrorKind::UnbalancedFragment,
            ParseError::InvalidFragment { .. } => ErrorKind::InvalidFragment,
            ParseError::MalformedMember { .. } => ErrorKind::MalformedMember,
            ParseError::NotAnObject => ErrorKind::NotAnObject,
            ParseError::NumberOutOfRange { .. } => ErrorKind::NumberOutOfRange,
            ParseError::DepthLimitExceeded { .. } => ErrorKind::DepthLimitExceeded,
            ParseError::ReservedCharacter { .. } => ErrorKind::ReservedCharacter,
            ParseError::IndexOutOfRange { .. } => ErrorKind::IndexOutOfRange,
        }
    }

    pub(crate) fn unbalanced(fragment: &str) -> Self {
        ParseError::UnbalancedFragment {
            fragment: excerpt(fragment),
        }
    }

    pub(crate) fn invalid(fragment: &str) -> Self {
        ParseError::InvalidFragment {
            fragment: excerpt(fragment),
        }
    }

    pub(crate) fn out_of_range(literal: &str) -> Self {
        ParseError::NumberOutOfRange {
            literal: excerpt(literal),
        }
    }

    pub(crate) fn malformed_member(member: &str) -> Self {
        ParseError::MalformedMember {
            member: excerpt(member),
        }
    }
}

/// Shorten `text` to at most [`EXCERPT_LEN`] characters, marking the cut with `...`.
/// Masked quotes are shown as plain `"` again.
fn excerpt(text: &str) -> String {
    let mut out: String = text
        .chars()
        .take(EXCERPT_LEN)
        .map(|c| if c == QUOTE_SENTINEL { '"' } else { c })
        .collect();
    if text.chars().nth(EXCERPT_LEN).is_some() {
        out.push_str("...");
    }
    out
}

/// Convenience alias used throughout simplejson-core.
pub type Result<T> = std::result::Result<T, ParseError>;
