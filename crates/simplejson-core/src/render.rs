//! Rendering of the document model back into JSON text.
//!
//! Output is pretty-printed in a fixed layout:
//!
//! ```text
//! {
//! "name" : "Alice",
//! "tags" : [
//! "a",
//! "b"
//! ]
//! }
//! ```
//!
//! Members and elements sit on their own lines with no indentation. Strings and
//! keys go through [`encode_escapes`], floats always carry a decimal point, so the
//! output parses back into an equal tree.

use crate::array::JsonArray;
use crate::object::JsonObject;
use crate::scanner::encode_escapes;
use crate::value::Value;

pub fn render_object(object: &JsonObject) -> String {
    let mut out = String::new();
    write_object(object, &mut out);
    out
}

pub fn render_array(array: &JsonArray) -> String {
    let mut out = String::new();
    write_array(array, &mut out);
    out
}

pub fn render_value(value: &Value) -> String {
    let mut out = String::new();
    write_value(value, &mut out);
    out
}

/// `{`, then `"key" : value` per line with a comma after all but the last, then `}`.
fn write_object(object: &JsonObject, out: &mut String) {
    out.push_str("{\n");
    let len = object.len();
    for (i, (key, value)) in object.iter().enumerate() {
        write_string(key, out);
        out.push_str(" : ");
        write_value(value, out);
        if i + 1 < len {
            out.push(',');
        }
        out.push('\n');
    }
    out.push('}');
}

/// `[`, newline, elements joined by `,\n`, newline, `]`.
fn write_array(array: &JsonArray, out: &mut String) {
    out.push_str("[\n");
    for (i, value) in array.iter().enumerate() {
        if i > 0 {
            out.push_str(",\n");
        }
        write_value(value, out);
    }
    out.push_str("\n]");
}

fn write_value(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str("null"),
        Value::Boolean(b) => out.push_str(if *b { "true" } else { "false" }),
        Value::Integer(n) => out.push_str(&n.to_string()),
        Value::Float(f) => write_float(*f, out),
        Value::String(s) => write_string(s, out),
        Value::Array(a) => write_array(a, out),
        Value::Object(o) => write_object(o, out),
    }
}

fn write_string(s: &str, out: &mut String) {
    out.push('"');
    out.push_str(&encode_escapes(s));
    out.push('"');
}

/// Write a float so that it reads back as a float.
///
/// Whole values get an explicit `.0`; `f64`'s `Display` never uses exponents.
/// NaN and infinities have no literal form and are written as `null`.
fn write_float(f: f64, out: &mut String) {
    if !f.is_finite() {
        out.push_str("null");
    } else if f.fract() == 0.0 {
        out.push_str(&format!("{:.1}", f));
    } else {
        out.push_str(&f.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn whole_floats_keep_decimal_point() {
        assert_eq!(render_value(&Value::Float(1.0)), "1.0");
        assert_eq!(render_value(&Value::Float(-20.0)), "-20.0");
        assert_eq!(render_value(&Value::Float(2.5)), "2.5");
    }

    #[test]
    fn tiny_and_huge_floats_avoid_exponents() {
        let tiny = render_value(&Value::Float(1e-7));
        let huge = render_value(&Value::Float(1e21));
        assert!(!tiny.contains('e'), "{tiny}");
        assert!(!huge.contains('e'), "{huge}");
    }

    #[test]
    fn non_finite_floats_render_as_null() {
        assert_eq!(render_value(&Value::Float(f64::NAN)), "null");
        assert_eq!(render_value(&Value::Float(f64::INFINITY)), "null");
    }

    #[test]
    fn empty_containers() {
        assert_eq!(render_object(&JsonObject::new()), "{\n}");
        assert_eq!(render_array(&JsonArray::new()), "[\n\n]");
    }

    #[test]
    fn keys_are_escaped() {
        let mut o = JsonObject::new();
        o.put("say \"hi\"", 1);
        assert_eq!(render_object(&o), "{\n\"say \\\"hi\\\"\" : 1\n}");
    }
}
