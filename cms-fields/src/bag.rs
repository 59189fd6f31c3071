//! Loosely-typed input for field builders.
//!
//! A data bag is whatever the caller authored for a field: string keys mapped
//! to arbitrary JSON values. Builders only read from it; nothing here
//! validates shapes. Defaulting rules treat `null` like a missing key.

use serde_json::{Map, Value};

use crate::error::{FieldsError, Result};

/// Attribute bag handed to every field builder.
pub type DataBag = Map<String, Value>;

/// Loose truthiness used by every "input or default" rule.
///
/// `null`, `false`, `0`, NaN and `""` are falsy. Arrays and objects are
/// truthy even when empty.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// The value under `key` when it is truthy.
pub fn truthy_value<'a>(bag: &'a DataBag, key: &str) -> Option<&'a Value> {
    bag.get(key).filter(|v| is_truthy(v))
}

/// The value under `key` when it is a non-empty string.
///
/// Non-string values count as absent for string-typed attributes.
pub fn truthy_str<'a>(bag: &'a DataBag, key: &str) -> Option<&'a str> {
    bag.get(key)
        .and_then(Value::as_str)
        .filter(|s| !s.is_empty())
}

/// Strict boolean coercion of `key`; absent is `false`.
pub fn flag(bag: &DataBag, key: &str) -> bool {
    bag.get(key).is_some_and(is_truthy)
}

/// Turn an arbitrary value into a bag. Anything but an object yields an empty bag.
pub fn bag_from_value(value: Value) -> DataBag {
    match value {
        Value::Object(map) => map,
        _ => DataBag::new(),
    }
}

/// Parse a JSON document whose top level is an object.
pub fn parse_json(text: &str) -> Result<DataBag> {
    let value: Value = serde_json::from_str(text)?;
    into_bag(value)
}

/// Parse a YAML document whose top level is a mapping.
pub fn parse_yaml(text: &str) -> Result<DataBag> {
    let value: Value = serde_yaml_ng::from_str(text)?;
    into_bag(value)
}

fn into_bag(value: Value) -> Result<DataBag> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(FieldsError::NotAnObject {
            found: kind_name(&other).to_string(),
        }),
    }
}

fn kind_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
