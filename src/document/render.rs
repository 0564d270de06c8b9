//! Rendering values back to YAML or JSON text.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use super::node::{Number, Value};
use crate::pick::container::yaml_key;
use crate::pick::Key;

/// Text format of a document or of rendered output.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Format {
    #[default]
    Yaml,
    Json,
}

/// Converts a value into a `serde_yaml::Value`.
///
/// Symbols are written in `:name` form.
pub fn to_serde_yaml(value: &Value) -> serde_yaml::Value {
    match value {
        Value::Mapping(entries) => serde_yaml::Value::Mapping(
            entries
                .iter()
                .map(|(k, v)| (yaml_key(k), to_serde_yaml(v)))
                .collect(),
        ),
        Value::Sequence(items) => {
            serde_yaml::Value::Sequence(items.iter().map(to_serde_yaml).collect())
        }
        Value::String(s) => serde_yaml::Value::String(s.clone()),
        Value::Symbol(sym) => serde_yaml::Value::String(sym.to_string()),
        Value::Number(Number::Integer(i)) => serde_yaml::Value::Number((*i).into()),
        Value::Number(Number::Float(f)) => serde_yaml::Value::Number((*f).into()),
        Value::Bool(b) => serde_yaml::Value::Bool(*b),
        Value::Null => serde_yaml::Value::Null,
    }
}

/// JSON object keys must be strings; nil keys are written as `"null"`.
fn json_key(key: &Key) -> String {
    match key {
        Key::Null => "null".to_string(),
        Key::Symbol(sym) => sym.as_str().to_string(),
        other => other.to_string(),
    }
}

/// Converts a value into a `serde_json::Value`.
///
/// Symbols lose their marker and become plain strings. Non-finite floats
/// become `null`.
pub fn to_serde_json(value: &Value) -> serde_json::Value {
    match value {
        Value::Mapping(entries) => serde_json::Value::Object(
            entries
                .iter()
                .map(|(k, v)| (json_key(k), to_serde_json(v)))
                .collect(),
        ),
        Value::Sequence(items) => {
            serde_json::Value::Array(items.iter().map(to_serde_json).collect())
        }
        Value::String(s) => serde_json::Value::String(s.clone()),
        Value::Symbol(sym) => serde_json::Value::String(sym.as_str().to_string()),
        Value::Number(Number::Integer(i)) => serde_json::Value::Number((*i).into()),
        Value::Number(Number::Float(f)) => serde_json::Number::from_f64(*f)
            .map(serde_json::Value::Number)
            .unwrap_or(serde_json::Value::Null),
        Value::Bool(b) => serde_json::Value::Bool(*b),
        Value::Null => serde_json::Value::Null,
    }
}

pub fn to_yaml_string(value: &Value) -> Result<String> {
    serde_yaml::to_string(&to_serde_yaml(value)).context("Failed to serialize YAML")
}

pub fn to_json_string(value: &Value) -> Result<String> {
    serde_json::to_string_pretty(&to_serde_json(value)).context("Failed to serialize JSON")
}

/// Renders `value` in `format`, always ending with a newline.
pub fn render(value: &Value, format: Format) -> Result<String> {
    let mut text = match format {
        Format::Yaml => to_yaml_string(value)?,
        Format::Json => to_json_string(value)?,
    };
    if !text.ends_with('\n') {
        text.push('\n');
    }
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::parser::parse_yaml;

    #[test]
    fn test_render_scalar_json() {
        assert_eq!(render(&Value::from("v"), Format::Json).unwrap(), "\"v\"\n");
    }

    #[test]
    fn test_symbols_keep_marker_in_yaml() {
        let doc = parse_yaml(":a: :b\n").unwrap();
        let yaml = to_yaml_string(&doc).unwrap();
        assert_eq!(parse_yaml(&yaml).unwrap(), doc);
    }

    #[test]
    fn test_json_stringifies_keys() {
        let doc = parse_yaml("1: a\n~: b\n:c: d\n").unwrap();
        let json = to_serde_json(&doc);
        assert_eq!(json, serde_json::json!({"1": "a", "null": "b", "c": "d"}));
    }

    #[test]
    fn test_nan_becomes_null() {
        assert_eq!(to_serde_json(&Value::from(f64::NAN)), serde_json::Value::Null);
    }
}
