//! Conversions between the document model and `serde_json::Value`.
//!
//! Going to `serde_json` never fails; non-finite floats become `null` since
//! `serde_json::Number` cannot hold them. Coming from `serde_json` fails only for
//! unsigned integers above `i64::MAX`, or for a non-object root when a
//! [`JsonObject`] is requested.

use serde_json::{Map, Number};

use crate::array::JsonArray;
use crate::error::ParseError;
use crate::object::JsonObject;
use crate::value::Value;

impl From<&Value> for serde_json::Value {
    fn from(value: &Value) -> Self {
        match value {
            Value::Null => serde_json::Value::Null,
            Value::Boolean(b) => serde_json::Value::Bool(*b),
            Value::Integer(n) => serde_json::Value::Number((*n).into()),
            Value::Float(f) => Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            Value::String(s) => serde_json::Value::String(s.clone()),
            Value::Array(a) => a.into(),
            Value::Object(o) => o.into(),
        }
    }
}

impl From<Value> for serde_json::Value {
    fn from(value: Value) -> Self {
        (&value).into()
    }
}

impl From<&JsonArray> for serde_json::Value {
    fn from(array: &JsonArray) -> Self {
        serde_json::Value::Array(array.iter().map(Into::into).collect())
    }
}

impl From<&JsonObject> for serde_json::Value {
    fn from(object: &JsonObject) -> Self {
        let map: Map<String, serde_json::Value> = object
            .iter()
            .map(|(key, value)| (key.clone(), value.into()))
            .collect();
        serde_json::Value::Object(map)
    }
}

impl From<JsonObject> for serde_json::Value {
    fn from(object: JsonObject) -> Self {
        (&object).into()
    }
}

impl TryFrom<serde_json::Value> for Value {
    type Error = ParseError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        Ok(match value {
            serde_json::Value::Null => Value::Null,
            serde_json::Value::Bool(b) => Value::Boolean(b),
            serde_json::Value::Number(n) => number_to_value(&n)?,
            serde_json::Value::String(s) => Value::String(s),
            serde_json::Value::Array(items) => Value::Array(
                items
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<JsonArray, _>>()?,
            ),
            serde_json::Value::Object(map) => Value::Object(map_to_object(map)?),
        })
    }
}

impl TryFrom<serde_json::Value> for JsonObject {
    type Error = ParseError;

    fn try_from(value: serde_json::Value) -> Result<Self, Self::Error> {
        match value {
            serde_json::Value::Object(map) => map_to_object(map),
            _ => Err(ParseError::NotAnObject),
        }
    }
}

fn map_to_object(map: Map<String, serde_json::Value>) -> Result<JsonObject, ParseError> {
    let mut object = JsonObject::new();
    for (key, value) in map {
        object.put(key, Value::try_from(value)?);
    }
    Ok(object)
}

fn number_to_value(n: &Number) -> Result<Value, ParseError> {
    if let Some(i) = n.as_i64() {
        return Ok(Value::Integer(i));
    }
    if n.is_u64() {
        return Err(ParseError::out_of_range(&n.to_string()));
    }
    n.as_f64()
        .map(Value::Float)
        .ok_or_else(|| ParseError::invalid(&n.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn nan_becomes_null() {
        let v: serde_json::Value = Value::Float(f64::NAN).into();
        assert_eq!(v, serde_json::Value::Null);
    }

    #[test]
    fn large_unsigned_is_out_of_range() {
        let err = Value::try_from(json!(u64::MAX)).unwrap_err();
        assert!(matches!(err, ParseError::NumberOutOfRange { .. }));
    }

    #[test]
    fn non_object_root_is_rejected() {
        assert_eq!(
            JsonObject::try_from(json!([1, 2])).unwrap_err(),
            ParseError::NotAnObject
        );
    }

    #[test]
    fn integers_and_floats_stay_distinct() {
        let o = JsonObject::try_from(json!({"i": 2, "f": 2.0})).unwrap();
        assert_eq!(o.get_integer("i"), Some(2));
        assert_eq!(o.get_float("f"), Some(2.0));
        assert_eq!(o.get_integer("f"), None);
    }
}
