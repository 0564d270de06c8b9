//! In-memory representation of a loaded YAML or JSON document.
//!
//! Mappings keep their insertion order and may use keys of any scalar kind,
//! including symbols, so a document loaded from Ruby-flavoured YAML keeps the
//! distinction between `:name` and `name`.
//!
//! # Example
//!
//! ```
//! use yamlpick::document::node::{Number, Value};
//! use yamlpick::pick::Key;
//!
//! let user: Value = vec![
//!     (Key::from("name"), Value::from("Alice")),
//!     (Key::from("age"), Value::Number(Number::Integer(30))),
//! ]
//! .into_iter()
//! .collect();
//! assert!(user.is_mapping());
//! ```

use indexmap::IndexMap;

use crate::pick::{Key, KeyedContainer, Symbol};

/// Represents YAML numbers (integer or float)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    Integer(i64),
    Float(f64),
}

impl std::fmt::Display for Number {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Number::Integer(i) => write!(f, "{}", i),
            Number::Float(fl) => write!(f, "{}", fl),
        }
    }
}

impl Number {
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Integer(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }

    pub fn is_integer(&self) -> bool {
        matches!(self, Number::Integer(_))
    }
}

/// A document value.
///
/// Only `Mapping` supports key lookup. Sequences are deliberately not indexed
/// by position.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// Key-value pairs in document order
    Mapping(IndexMap<Key, Value>),
    /// An ordered list of values
    Sequence(Vec<Value>),
    String(String),
    Symbol(Symbol),
    Number(Number),
    Bool(bool),
    Null,
}

impl Value {
    pub fn is_mapping(&self) -> bool {
        matches!(self, Value::Mapping(_))
    }

    pub fn is_sequence(&self) -> bool {
        matches!(self, Value::Sequence(_))
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_mapping(&self) -> Option<&IndexMap<Key, Value>> {
        match self {
            Value::Mapping(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the text of a string or symbol value.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            Value::Symbol(sym) => Some(sym.as_str()),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Number(Number::Integer(i)) => Some(*i),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns a short name for the kind of value, for messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Mapping(_) => "mapping",
            Value::Sequence(_) => "sequence",
            Value::String(_) => "string",
            Value::Symbol(_) => "symbol",
            Value::Number(_) => "number",
            Value::Bool(_) => "boolean",
            Value::Null => "null",
        }
    }
}

impl KeyedContainer for Value {
    fn is_container(&self) -> bool {
        self.is_mapping()
    }

    fn has_key(&self, key: &Key) -> bool {
        self.as_mapping()
            .map(|map| map.contains_key(key))
            .unwrap_or(false)
    }

    fn get_key(&self, key: &Key) -> Option<&Self> {
        self.as_mapping()?.get(key)
    }

    fn kind(&self) -> &'static str {
        self.type_name()
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<Symbol> for Value {
    fn from(sym: Symbol) -> Self {
        Value::Symbol(sym)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Number(Number::Integer(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Number(Number::Float(f))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl FromIterator<(Key, Value)> for Value {
    fn from_iter<I: IntoIterator<Item = (Key, Value)>>(iter: I) -> Self {
        Value::Mapping(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Value {
        vec![
            (Key::from("name"), Value::from("test")),
            (Key::Null, Value::from(1)),
            (Key::Symbol(Symbol::new("tags")), Value::Sequence(vec![])),
        ]
        .into_iter()
        .collect()
    }

    #[test]
    fn test_mapping_is_container() {
        assert!(sample().is_container());
        assert!(!Value::Sequence(vec![]).is_container());
        assert!(!Value::from("x").is_container());
    }

    #[test]
    fn test_has_key_uses_exact_key() {
        let value = sample();
        assert!(value.has_key(&Key::from("name")));
        assert!(value.has_key(&Key::Null));
        assert!(!value.has_key(&Key::from("tags")));
        assert!(value.has_key(&Key::Symbol(Symbol::new("tags"))));
    }

    #[test]
    fn test_get_key_on_scalar() {
        assert_eq!(Value::Null.get_key(&Key::from("a")), None);
    }

    #[test]
    fn test_mapping_preserves_order() {
        let value = sample();
        let keys: Vec<String> = value
            .as_mapping()
            .unwrap()
            .keys()
            .map(|k| k.to_string())
            .collect();
        assert_eq!(keys, vec!["name", "~", ":tags"]);
    }

    #[test]
    fn test_accessors() {
        assert_eq!(Value::from(3).as_i64(), Some(3));
        assert_eq!(Value::from(true).as_bool(), Some(true));
        assert_eq!(Value::Symbol(Symbol::new("s")).as_str(), Some("s"));
        assert_eq!(Value::from(2.5).type_name(), "number");
    }
}
