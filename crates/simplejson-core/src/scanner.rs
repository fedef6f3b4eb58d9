//! Text scanner primitives.
//!
//! Stateless functions over a text buffer that the parser is built from: balance
//! checking, top-level separator search, literal detection, whitespace stripping,
//! and backslash-escape encoding/decoding.
//!
//! Every structural character (`{ } [ ] " , :`) is ASCII, so the scans walk bytes.
//! Indices returned here always fall on a char boundary.
//!
//! None of the scans look behind for a backslash before a `"`. The parser instead
//! runs [`mask_escapes`] over the whole input first, which replaces every escaped
//! quote with [`QUOTE_SENTINEL`], so the only `"` characters left are delimiters.

use std::borrow::Cow;

/// Stand-in for an escaped quote (`\"`) between masking and value construction.
///
/// U+FFFF is a Unicode noncharacter, reserved for exactly this kind of internal use.
pub const QUOTE_SENTINEL: char = '\u{FFFF}';

/// Bracket depths plus the in-quote flag, advanced one byte at a time.
///
/// Depths are signed so that a stray closer is observable instead of wrapping.
#[derive(Debug, Default)]
struct Nesting {
    curly: isize,
    square: isize,
    in_quote: bool,
}

impl Nesting {
    /// Feed one byte. Inside quotes only another `"` has any effect.
    fn step(&mut self, b: u8) {
        if self.in_quote && b != b'"' {
            return;
        }
        match b {
            b'{' => self.curly += 1,
            b'}' => self.curly -= 1,
            b'[' => self.square += 1,
            b']' => self.square -= 1,
            b'"' => self.in_quote = !self.in_quote,
            _ => {}
        }
    }

    fn at_top_level(&self) -> bool {
        self.curly == 0 && self.square == 0 && !self.in_quote
    }

    fn went_negative(&self) -> bool {
        self.curly < 0 || self.square < 0
    }
}

/// Check that curly braces, square brackets, and quotes are balanced.
///
/// Fails as soon as a closer outside quotes has no matching opener, and at the end
/// if a quote is still open or an opener was never closed. Braces and brackets
/// inside quoted strings are ignored.
pub fn is_balanced(text: &str) -> bool {
    let mut nesting = Nesting::default();
    for b in text.bytes() {
        nesting.step(b);
        if nesting.went_negative() {
            return false;
        }
    }
    nesting.at_top_level()
}

/// Index of the first `,` that is outside every brace, bracket, and quoted string.
pub fn find_top_level_separator(text: &str) -> Option<usize> {
    let mut nesting = Nesting::default();
    for (i, b) in text.bytes().enumerate() {
        if b == b',' && nesting.at_top_level() {
            return Some(i);
        }
        nesting.step(b);
    }
    None
}

/// Index of the first `needle` byte outside quoted strings.
///
/// Used to find the `:` between an object member's key and its value.
pub fn find_unquoted(text: &str, needle: u8) -> Option<usize> {
    let mut in_quote = false;
    for (i, b) in text.bytes().enumerate() {
        if b == b'"' {
            in_quote = !in_quote;
        } else if b == needle && !in_quote {
            return Some(i);
        }
    }
    None
}

/// Check that `text` is exactly one `{...}` object with nothing after it.
///
/// The curly depth must not return to zero before the final character. Braces
/// inside quoted strings do not count, so `{"a":"}"}` is a single object.
pub fn is_single_wrapped_object(text: &str) -> bool {
    if text.len() < 2 || !text.starts_with('{') || !text.ends_with('}') {
        return false;
    }
    let last = text.len() - 1;
    let mut depth = 0isize;
    let mut in_quote = false;
    for (i, b) in text.bytes().enumerate() {
        match b {
            b'"' => in_quote = !in_quote,
            b'{' if !in_quote => depth += 1,
            b'}' if !in_quote => depth -= 1,
            _ => {}
        }
        if depth <= 0 && i < last {
            return false;
        }
    }
    depth == 0
}

/// Check that `text` is a single `"..."` literal with no other quote inside it.
pub fn is_one_quoted_string(text: &str) -> bool {
    text.len() >= 2
        && text.starts_with('"')
        && text.ends_with('"')
        && !text[1..text.len() - 1].contains('"')
}

/// Check that `text` is a plain decimal literal: `[-+]?[0-9]*\.?[0-9]+`.
///
/// There is no exponent form. `.5` and `-.5` are accepted, `5.` is not.
pub fn is_numeric_literal(text: &str) -> bool {
    let body = text.strip_prefix(|c: char| c == '-' || c == '+').unwrap_or(text);
    let (whole, fraction) = body.split_once('.').unwrap_or(("", body));
    !fraction.is_empty()
        && whole.bytes().all(|b| b.is_ascii_digit())
        && fraction.bytes().all(|b| b.is_ascii_digit())
}

/// Remove every whitespace character that is not inside a quoted string.
pub fn strip_unquoted_whitespace(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut in_quote = false;
    for c in text.chars() {
        if c == '"' {
            in_quote = !in_quote;
        }
        if in_quote || !c.is_whitespace() {
            out.push(c);
        }
    }
    out
}

/// Escape backslashes, double quotes, and tabs for output inside a JSON string.
pub fn encode_escapes(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\t' => out.push_str("\\t"),
            _ => out.push(c),
        }
    }
    out
}

/// Turn backslash escapes back into the characters they stand for.
///
/// `\\`, `\"`, `\t`, `\n`, and `\r` are recognized. Any other escaped character is
/// kept without its backslash. A lone backslash at the very end stays as is.
pub fn decode_escapes(text: &str) -> String {
    decode_with(text, '"')
}

/// Like [`decode_escapes`], except that `\"` becomes [`QUOTE_SENTINEL`].
pub fn mask_escapes(text: &str) -> String {
    decode_with(text, QUOTE_SENTINEL)
}

/// Replace every [`QUOTE_SENTINEL`] with a literal `"`.
pub fn unmask_quotes(text: &str) -> Cow<'_, str> {
    if text.contains(QUOTE_SENTINEL) {
        Cow::Owned(text.replace(QUOTE_SENTINEL, "\""))
    } else {
        Cow::Borrowed(text)
    }
}

fn decode_with(text: &str, quote: char) -> String {
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('\\') => out.push('\\'),
            Some('"') => out.push(quote),
            Some('t') => out.push('\t'),
            Some('n') => out.push('\n'),
            Some('r') => out.push('\r'),
            Some(other) => out.push(other),
            None => out.push('\\'),
        }
    }
    out
}
