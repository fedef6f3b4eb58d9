//! Value classifier: decides what a stripped text fragment represents.

use crate::error::{ParseError, Result};
use crate::scanner;

/// The shape of a fragment, borrowing from the text it was classified from.
///
/// Containers carry their interior (the text between the outer delimiters) so the
/// parser can split and recurse without copying.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Fragment<'a> {
    Null,
    Boolean(bool),
    /// Raw string content between the outer quotes, escaped quotes still masked.
    String(&'a str),
    Integer(i64),
    Float(f64),
    Object(&'a str),
    Array(&'a str),
}

/// Classify a whitespace-stripped fragment.
///
/// Checks run in priority order: `null`, booleans, a single quoted string, a
/// numeric literal (float when it has a `.`), then `{...}` and `[...]`.
/// Anything else is an [`InvalidFragment`](ParseError::InvalidFragment).
pub fn classify(fragment: &str) -> Result<Fragment<'_>> {
    match fragment {
        "null" => return Ok(Fragment::Null),
        "true" => return Ok(Fragment::Boolean(true)),
        "false" => return Ok(Fragment::Boolean(false)),
        _ => {}
    }

    if scanner::is_one_quoted_string(fragment) {
        return Ok(Fragment::String(&fragment[1..fragment.len() - 1]));
    }

    if scanner::is_numeric_literal(fragment) {
        return classify_number(fragment);
    }

    if let Some(body) = interior(fragment, '{', '}') {
        return Ok(Fragment::Object(body));
    }
    if let Some(body) = interior(fragment, '[', ']') {
        return Ok(Fragment::Array(body));
    }

    Err(ParseError::invalid(fragment))
}

/// Convert a literal already accepted by [`scanner::is_numeric_literal`].
fn classify_number(literal: &str) -> Result<Fragment<'_>> {
    if literal.contains('.') {
        let f = literal
            .parse::<f64>()
            .map_err(|_| ParseError::invalid(literal))?;
        // Overflow to infinity would render as `null`.
        if !f.is_finite() {
            return Err(ParseError::out_of_range(literal));
        }
        return Ok(Fragment::Float(f));
    }
    literal
        .parse::<i64>()
        .map(Fragment::Integer)
        .map_err(|_| ParseError::out_of_range(literal))
}

/// Text between `open` and `close` when `fragment` is wrapped in that pair.
fn interior(fragment: &str, open: char, close: char) -> Option<&str> {
    fragment.strip_prefix(open)?.strip_suffix(close)
}
