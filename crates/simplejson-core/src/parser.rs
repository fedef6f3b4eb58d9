//! Recursive descent parser: JSON text → [`JsonObject`].
//!
//! Parsing runs in two phases:
//!
//! 1. **Normalize** the whole input once: reject the reserved sentinel, decode
//!    backslash escapes (escaped quotes become [`QUOTE_SENTINEL`]), then strip all
//!    whitespace outside quoted strings.
//! 2. **Descend** over borrowed slices of that one buffer. Each fragment is
//!    balance-checked and classified; primitives are returned directly, containers
//!    are split at their top-level commas and each piece is parsed recursively.
//!
//! # Key design decisions
//!
//! - **No escape look-behind in the scanners**: masking escaped quotes up front
//!   means every `"` the scanners see is a real delimiter.
//! - **Empty bodies**: `{}` and `[]` produce empty containers rather than one empty
//!   fragment, which would otherwise fail classification.
//! - **Depth limit**: each nested container counts one level against
//!   [`ParseOptions::max_depth`].

use tracing::{debug, trace};

use crate::array::JsonArray;
use crate::classify::{classify, Fragment};
use crate::error::{ParseError, Result};
use crate::object::JsonObject;
use crate::options::ParseOptions;
use crate::scanner::{self, QUOTE_SENTINEL};
use crate::value::Value;

/// Parse JSON text whose root is an object, using default [`ParseOptions`].
///
/// Arrays, bare primitives, empty input, and trailing content after the root
/// object are rejected with [`ParseError::NotAnObject`]. Every failure is
/// returned as an error; no partial tree is ever produced.
///
/// # Example
/// ```
/// use simplejson_core::parse;
///
/// let doc = parse(r#"{"name": "Alice", "scores": [95, 87]}"#).unwrap();
/// assert_eq!(doc.get_string("name"), Some("Alice"));
/// assert_eq!(doc.get_array("scores").unwrap().size(), 2);
/// ```
pub fn parse(text: &str) -> Result<JsonObject> {
    parse_with_options(text, &ParseOptions::default())
}

/// Parse JSON text whose root is an object.
pub fn parse_with_options(text: &str, options: &ParseOptions) -> Result<JsonObject> {
    let result = parse_document(text, options);
    if let Err(err) = &result {
        debug!(error = %err, kind = ?err.kind(), "failed to parse document");
    }
    result
}

fn parse_document(text: &str, options: &ParseOptions) -> Result<JsonObject> {
    if let Some(offset) = text.find(QUOTE_SENTINEL) {
        return Err(ParseError::ReservedCharacter { offset });
    }

    let masked = scanner::mask_escapes(text);
    let normalized = scanner::strip_unquoted_whitespace(&masked);

    if !scanner::is_balanced(&normalized) {
        return Err(ParseError::unbalanced(&normalized));
    }
    if !scanner::is_single_wrapped_object(&normalized) {
        return Err(ParseError::NotAnObject);
    }

    let parser = Parser {
        max_depth: options.max_depth,
    };
    match parser.parse_value(&normalized, 0)? {
        Value::Object(object) => Ok(object),
        _ => Err(ParseError::NotAnObject),
    }
}

/// Split a container body at its top-level commas.
///
/// An empty body yields no fragments. After each cut the remainder must still be
/// balanced; a trailing comma leaves an empty final fragment.
pub fn split_top_level(body: &str) -> Result<Vec<&str>> {
    let mut fragments = Vec::new();
    if body.is_empty() {
        return Ok(fragments);
    }

    let mut rest = body;
    while let Some(index) = scanner::find_top_level_separator(rest) {
        fragments.push(&rest[..index]);
        rest = &rest[index + 1..];
        if !scanner::is_balanced(rest) {
            return Err(ParseError::unbalanced(rest));
        }
    }
    fragments.push(rest);
    Ok(fragments)
}

struct Parser {
    max_depth: usize,
}

impl Parser {
    /// Parse one normalized fragment. `depth` is the number of enclosing containers.
    fn parse_value(&self, fragment: &str, depth: usize) -> Result<Value> {
        if !scanner::is_balanced(fragment) {
            return Err(ParseError::unbalanced(fragment));
        }

        match classify(fragment)? {
            Fragment::Null => Ok(Value::Null),
            Fragment::Boolean(b) => Ok(Value::Boolean(b)),
            Fragment::Integer(n) => Ok(Value::Integer(n)),
            Fragment::Float(f) => Ok(Value::Float(f)),
            Fragment::String(raw) => Ok(Value::String(scanner::unmask_quotes(raw).into_owned())),
            Fragment::Object(body) => {
                let depth = self.descend(depth)?;
                self.parse_object(body, depth).map(Value::Object)
            }
            Fragment::Array(body) => {
                let depth = self.descend(depth)?;
                self.parse_array(body, depth).map(Value::Array)
            }
        }
    }

    fn descend(&self, depth: usize) -> Result<usize> {
        let next = depth + 1;
        if next > self.max_depth {
            return Err(ParseError::DepthLimitExceeded {
                limit: self.max_depth,
            });
        }
        Ok(next)
    }

    /// Build an object from `"key":value` members; a repeated key keeps the last value.
    fn parse_object(&self, body: &str, depth: usize) -> Result<JsonObject> {
        let mut object = JsonObject::new();
        for member in split_top_level(body)? {
            let (key, value) = split_member(member)?;
            trace!(depth, key = %key, "parsing object member");
            object.put(key, self.parse_value(value, depth)?);
        }
        Ok(object)
    }

    fn parse_array(&self, body: &str, depth: usize) -> Result<JsonArray> {
        let mut array = JsonArray::new();
        for (index, element) in split_top_level(body)?.into_iter().enumerate() {
            trace!(depth, index, "parsing array element");
            array.add(self.parse_value(element, depth)?);
        }
        Ok(array)
    }
}

/// Split `"key":value` at the first unquoted colon, returning the unquoted,
/// unmasked key and the raw value text.
fn split_member(member: &str) -> Result<(String, &str)> {
    let colon =
        scanner::find_unquoted(member, b':').ok_or_else(|| ParseError::malformed_member(member))?;
    let (key, value) = (&member[..colon], &member[colon + 1..]);
    if !scanner::is_one_quoted_string(key) {
        return Err(ParseError::malformed_member(member));
    }
    let key = scanner::unmask_quotes(&key[1..key.len() - 1]).into_owned();
    Ok((key, value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_empty_body_has_no_fragments() {
        assert!(split_top_level("").unwrap().is_empty());
    }

    #[test]
    fn split_keeps_nested_commas_together() {
        let parts = split_top_level(r#""a,b",{"c":1,"d":2},[3,4],5"#).unwrap();
        assert_eq!(parts, vec![r#""a,b""#, r#"{"c":1,"d":2}"#, "[3,4]", "5"]);
    }

    #[test]
    fn split_trailing_comma_leaves_empty_fragment() {
        assert_eq!(split_top_level("1,").unwrap(), vec!["1", ""]);
    }

    #[test]
    fn split_member_at_first_unquoted_colon() {
        let (key, value) = split_member(r#""a:b":"c:d""#).unwrap();
        assert_eq!(key, "a:b");
        assert_eq!(value, r#""c:d""#);
    }

    #[test]
    fn member_without_colon_is_malformed() {
        assert!(matches!(
            split_member(r#""a""#),
            Err(ParseError::MalformedMember { .. })
        ));
    }

    #[test]
    fn member_with_unquoted_key_is_malformed() {
        assert!(matches!(
            split_member("a:1"),
            Err(ParseError::MalformedMember { .. })
        ));
    }

    #[test]
    fn depth_counts_root_object() {
        let parser = Parser { max_depth: 1 };
        assert!(parser.parse_value("{}", 0).is_ok());
        assert_eq!(
            parser.parse_value(r#"{"a":[]}"#, 0).unwrap_err(),
            ParseError::DepthLimitExceeded { limit: 1 }
        );
    }
}
