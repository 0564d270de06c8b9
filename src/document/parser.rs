//! Parsing YAML and JSON text into `Value` trees.
//!
//! YAML is read through `serde_yaml` and JSON through `serde_json`; both are
//! then converted into our own `Value` so that symbol keys survive.
//!
//! # Symbols
//!
//! A plain YAML scalar written as `:name`, or a scalar tagged
//! `!ruby/symbol`, loads as `Value::Symbol` (or `Key::Symbol` in key
//! position). JSON has no symbols.
//!
//! # Example
//!
//! ```
//! use yamlpick::document::parser::parse_yaml;
//! use yamlpick::pick::{Key, KeyedContainer, Symbol};
//!
//! let doc = parse_yaml(":name: Alice\nname: Bob\n").unwrap();
//! assert!(doc.has_key(&Key::Symbol(Symbol::new("name"))));
//! assert!(doc.has_key(&Key::from("name")));
//! ```

use anyhow::{bail, Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;

use super::node::{Number, Value};
use crate::pick::{Key, Symbol};

/// Parses a single YAML document.
///
/// # Errors
///
/// Fails if the text is not valid YAML, holds more than one document, or
/// uses a sequence or mapping as a mapping key.
pub fn parse_yaml(yaml_str: &str) -> Result<Value> {
    let yaml: YamlValue = serde_yaml::from_str(yaml_str).context("Failed to parse YAML")?;
    convert_yaml(yaml)
}

/// Parses every document of a YAML stream, in order.
pub fn parse_yaml_documents(yaml_str: &str) -> Result<Vec<Value>> {
    let mut documents = Vec::new();
    for (index, document) in serde_yaml::Deserializer::from_str(yaml_str).enumerate() {
        let yaml = YamlValue::deserialize(document)
            .with_context(|| format!("Failed to parse YAML document {}", index + 1))?;
        documents.push(convert_yaml(yaml)?);
    }
    Ok(documents)
}

/// Parses a JSON document.
pub fn parse_json(json_str: &str) -> Result<Value> {
    let json: JsonValue = serde_json::from_str(json_str).context("Failed to parse JSON")?;
    Ok(convert_json(json))
}

/// Returns the symbol name if `s` is written in `:name` form.
fn symbol_name(s: &str) -> Option<&str> {
    let name = s.strip_prefix(':')?;
    match name.chars().next() {
        Some(c) if c != ':' && !c.is_whitespace() => Some(name),
        _ => None,
    }
}

fn is_symbol_tag(tag: &serde_yaml::value::Tag) -> bool {
    let tag = tag.to_string();
    matches!(tag.trim_start_matches('!'), "ruby/symbol" | "ruby/sym")
}

fn convert_number(n: &serde_yaml::Number) -> Number {
    match n.as_i64() {
        Some(i) => Number::Integer(i),
        None => Number::Float(n.as_f64().unwrap_or(0.0)),
    }
}

fn convert_yaml(value: YamlValue) -> Result<Value> {
    let converted = match value {
        YamlValue::Null => Value::Null,
        YamlValue::Bool(b) => Value::Bool(b),
        YamlValue::Number(n) => Value::Number(convert_number(&n)),
        YamlValue::String(s) => match symbol_name(&s) {
            Some(name) => Value::Symbol(Symbol::new(name)),
            None => Value::String(s),
        },
        YamlValue::Sequence(items) => Value::Sequence(
            items
                .into_iter()
                .map(convert_yaml)
                .collect::<Result<Vec<_>>>()?,
        ),
        YamlValue::Mapping(map) => {
            let mut entries = IndexMap::with_capacity(map.len());
            for (k, v) in map {
                entries.insert(convert_key(k)?, convert_yaml(v)?);
            }
            Value::Mapping(entries)
        }
        YamlValue::Tagged(tagged) => {
            let serde_yaml::value::TaggedValue { tag, value } = *tagged;
            match value {
                YamlValue::String(s) if is_symbol_tag(&tag) => Value::Symbol(Symbol::new(s)),
                other => convert_yaml(other)?,
            }
        }
    };
    Ok(converted)
}

fn convert_key(key: YamlValue) -> Result<Key> {
    let converted = match key {
        YamlValue::Null => Key::Null,
        YamlValue::Bool(b) => Key::Bool(b),
        YamlValue::Number(n) => match convert_number(&n) {
            Number::Integer(i) => Key::Integer(i),
            Number::Float(f) => Key::from(f),
        },
        YamlValue::String(s) => match symbol_name(&s) {
            Some(name) => Key::Symbol(Symbol::new(name)),
            None => Key::String(s),
        },
        YamlValue::Tagged(tagged) => {
            let serde_yaml::value::TaggedValue { tag, value } = *tagged;
            match value {
                YamlValue::String(s) if is_symbol_tag(&tag) => Key::Symbol(Symbol::new(s)),
                other => convert_key(other)?,
            }
        }
        YamlValue::Sequence(_) => bail!("Unsupported mapping key: sequence"),
        YamlValue::Mapping(_) => bail!("Unsupported mapping key: mapping"),
    };
    Ok(converted)
}

fn convert_json(value: JsonValue) -> Value {
    match value {
        JsonValue::Null => Value::Null,
        JsonValue::Bool(b) => Value::Bool(b),
        JsonValue::Number(n) => match n.as_i64() {
            Some(i) => Value::Number(Number::Integer(i)),
            None => Value::Number(Number::Float(n.as_f64().unwrap_or(0.0))),
        },
        JsonValue::String(s) => Value::String(s),
        JsonValue::Array(items) => Value::Sequence(items.into_iter().map(convert_json).collect()),
        JsonValue::Object(map) => Value::Mapping(
            map.into_iter()
                .map(|(k, v)| (Key::String(k), convert_json(v)))
                .collect(),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_name() {
        assert_eq!(symbol_name(":a"), Some("a"));
        assert_eq!(symbol_name(":snake_case"), Some("snake_case"));
        assert_eq!(symbol_name("a"), None);
        assert_eq!(symbol_name(":"), None);
        assert_eq!(symbol_name("::1"), None);
        assert_eq!(symbol_name(": x"), None);
    }

    #[test]
    fn test_parse_scalar_root() {
        assert_eq!(parse_yaml("42").unwrap(), Value::Number(Number::Integer(42)));
        assert_eq!(parse_yaml("~").unwrap(), Value::Null);
    }

    #[test]
    fn test_parse_typed_keys() {
        let doc = parse_yaml("1: one\ntrue: yes\n~: nothing\n").unwrap();
        let map = doc.as_mapping().unwrap();
        assert_eq!(map.get(&Key::Integer(1)), Some(&Value::from("one")));
        assert_eq!(map.get(&Key::Bool(true)), Some(&Value::from("yes")));
        assert_eq!(map.get(&Key::Null), Some(&Value::from("nothing")));
    }

    #[test]
    fn test_parse_ruby_symbol_tag() {
        let doc = parse_yaml("!ruby/symbol id: 7\nkind: !ruby/symbol user\n").unwrap();
        let map = doc.as_mapping().unwrap();
        assert_eq!(
            map.get(&Key::Symbol(Symbol::new("id"))),
            Some(&Value::from(7))
        );
        assert_eq!(
            map.get(&Key::from("kind")),
            Some(&Value::Symbol(Symbol::new("user")))
        );
    }

    #[test]
    fn test_complex_key_rejected() {
        assert!(parse_yaml("? [a, b]\n: c\n").is_err());
    }

    #[test]
    fn test_parse_json_keys_are_strings() {
        let doc = parse_json(r#"{":a": {"1": true}}"#).unwrap();
        let map = doc.as_mapping().unwrap();
        assert!(map.contains_key(&Key::from(":a")));
    }
}
