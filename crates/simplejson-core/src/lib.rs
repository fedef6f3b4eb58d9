//! # simplejson-core
//!
//! A minimal recursive-descent JSON parser and an ordered in-memory document model.
//!
//! The parser normalizes the input once (escape decoding, whitespace stripping),
//! then descends over slices of that buffer: every fragment is balance-checked,
//! classified, and either returned as a primitive or split at its top-level commas
//! and parsed piece by piece. The result is a tree of [`Value`]s rooted in a
//! [`JsonObject`], which renders back into pretty-printed JSON text.
//!
//! ## Quick start
//!
//! ```rust
//! use simplejson_core::{parse, Value};
//!
//! let doc = parse(r#"{"a": 1, "b": true, "c": null}"#).unwrap();
//! assert_eq!(doc.get_integer("a"), Some(1));
//! assert_eq!(doc.get_boolean("b"), Some(true));
//! assert!(doc.is_null("c"));
//!
//! // Typed getters return None on a variant mismatch rather than failing.
//! assert_eq!(doc.get_string("a"), None);
//!
//! // Render → parse roundtrip
//! let back = parse(&doc.render()).unwrap();
//! assert_eq!(back, doc);
//! assert_eq!(back.get("a"), Some(&Value::Integer(1)));
//! ```
//!
//! ## Grammar
//!
//! Looser than RFC 8259 in places: numbers are `[-+]?[0-9]*\.?[0-9]+` with no
//! exponent form, string escapes are limited to `\\ \" \t \n \r` (any other escaped
//! character loses its backslash, there is no `\u`), and the document root must
//! be an object.
//!
//! ## Modules
//!
//! - [`scanner`]: text primitives: balance, separators, literals, escapes
//! - [`classify`]: fragment classification
//! - [`parser`]: `parse`, `parse_with_options`, top-level splitting
//! - [`render`]: document model → JSON text
//! - [`error`]: error types for parse and access failures
//! - [`value`], [`object`], [`array`]: the document model
//! - [`interop`]: conversions to and from `serde_json::Value`
//! - [`options`]: `ParseOptions`

pub mod array;
pub mod classify;
pub mod error;
pub mod interop;
pub mod object;
pub mod options;
pub mod parser;
pub mod render;
pub mod scanner;
pub mod value;

pub use array::JsonArray;
pub use error::{ErrorKind, ParseError, Result};
pub use object::JsonObject;
pub use options::ParseOptions;
pub use parser::{parse, parse_with_options};
pub use value::{Value, ValueKind};
