//! `JsonArray`: an ordered sequence of values.

use std::fmt;

use serde::Serialize;

use crate::error::{ParseError, Result};
use crate::object::JsonObject;
use crate::render;
use crate::value::Value;

/// A JSON array. Elements are indexed `0..size()` without gaps.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonArray {
    elements: Vec<Value>,
}

impl JsonArray {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a value of any variant.
    pub fn add(&mut self, value: impl Into<Value>) {
        self.elements.push(value.into());
    }

    /// The element at `index`, or [`ParseError::IndexOutOfRange`].
    pub fn get(&self, index: usize) -> Result<&Value> {
        self.elements.get(index).ok_or(ParseError::IndexOutOfRange {
            index,
            len: self.elements.len(),
        })
    }

    /// The object at `index`.
    ///
    /// An index past the end is an error; an element of another variant is `Ok(None)`.
    pub fn get_object(&self, index: usize) -> Result<Option<&JsonObject>> {
        self.get(index).map(Value::as_object)
    }

    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.elements.iter()
    }

    /// Pretty-printed JSON text, one element per line.
    pub fn render(&self) -> String {
        render::render_array(self)
    }
}

impl fmt::Display for JsonArray {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl<V: Into<Value>> FromIterator<V> for JsonArray {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            elements: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl IntoIterator for JsonArray {
    type Item = Value;
    type IntoIter = std::vec::IntoIter<Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonArray {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.elements.iter()
    }
}
