//! `JsonObject`: an insertion-ordered mapping from string keys to values.

use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::Serialize;

use crate::array::JsonArray;
use crate::error::ParseError;
use crate::render;
use crate::value::Value;

/// A JSON object.
///
/// Members keep the order they were first inserted in. Putting an existing key
/// replaces its value in place.
///
/// Typed getters return `None` both for a missing key and for a key holding a
/// different variant, so optional fields can be read without error handling.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct JsonObject {
    members: IndexMap<String, Value>,
}

impl JsonObject {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.members.get(key)
    }

    pub fn get_string(&self, key: &str) -> Option<&str> {
        self.get(key).and_then(Value::as_str)
    }

    pub fn get_integer(&self, key: &str) -> Option<i64> {
        self.get(key).and_then(Value::as_integer)
    }

    pub fn get_float(&self, key: &str) -> Option<f64> {
        self.get(key).and_then(Value::as_float)
    }

    pub fn get_boolean(&self, key: &str) -> Option<bool> {
        self.get(key).and_then(Value::as_boolean)
    }

    pub fn get_object(&self, key: &str) -> Option<&JsonObject> {
        self.get(key).and_then(Value::as_object)
    }

    pub fn get_array(&self, key: &str) -> Option<&JsonArray> {
        self.get(key).and_then(Value::as_array)
    }

    pub fn has(&self, key: &str) -> bool {
        self.members.contains_key(key)
    }

    /// True only when `key` is present and holds `null`. A missing key is not null.
    pub fn is_null(&self, key: &str) -> bool {
        self.get(key).is_some_and(Value::is_null)
    }

    /// Keys in insertion order.
    pub fn keys(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.members.keys().map(String::as_str)
    }

    /// Insert or overwrite a member, returning the value it replaced.
    pub fn put(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.members.insert(key.into(), value.into())
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, Value> {
        self.members.iter()
    }

    /// Pretty-printed JSON text, one member per line.
    pub fn render(&self) -> String {
        render::render_object(self)
    }
}

impl fmt::Display for JsonObject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl FromStr for JsonObject {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse(s)
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for JsonObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut object = JsonObject::new();
        for (key, value) in iter {
            object.put(key, value);
        }
        object
    }
}

impl IntoIterator for JsonObject {
    type Item = (String, Value);
    type IntoIter = indexmap::map::IntoIter<String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.into_iter()
    }
}

impl<'a> IntoIterator for &'a JsonObject {
    type Item = (&'a String, &'a Value);
    type IntoIter = indexmap::map::Iter<'a, String, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.members.iter()
    }
}
