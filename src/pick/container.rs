//! The keyed-container capability and adapters for external value trees.
//!
//! The walker only ever talks to `KeyedContainer`. `document::Value`
//! implements it directly; `serde_json::Value` and `serde_yaml::Value` are
//! adapted here so already-deserialized data can be queried without
//! conversion.

use serde_yaml::value::{Tag, TaggedValue};

use super::key::Key;

/// A value that can be indexed by `Key`.
///
/// Values of the same type form a tree: `get_key` returns another `Self`,
/// which may or may not be a container itself.
pub trait KeyedContainer {
    /// Returns true if this value supports key lookup.
    fn is_container(&self) -> bool;

    /// Returns true if `key` is present under exact equality.
    fn has_key(&self, key: &Key) -> bool;

    /// Returns the value stored under `key`.
    fn get_key(&self, key: &Key) -> Option<&Self>;

    /// Short name of this value's kind, used in error messages.
    fn kind(&self) -> &'static str {
        std::any::type_name::<Self>()
    }
}

impl KeyedContainer for serde_json::Value {
    fn is_container(&self) -> bool {
        self.is_object()
    }

    fn has_key(&self, key: &Key) -> bool {
        self.get_key(key).is_some()
    }

    // JSON object keys are always strings, so a symbol matches the string with
    // the same name and every other key kind misses.
    fn get_key(&self, key: &Key) -> Option<&Self> {
        let map = self.as_object()?;
        match key {
            Key::String(s) => map.get(s),
            Key::Symbol(sym) => map.get(sym.as_str()),
            _ => None,
        }
    }

    fn kind(&self) -> &'static str {
        match self {
            serde_json::Value::Null => "null",
            serde_json::Value::Bool(_) => "boolean",
            serde_json::Value::Number(_) => "number",
            serde_json::Value::String(_) => "string",
            serde_json::Value::Array(_) => "array",
            serde_json::Value::Object(_) => "object",
        }
    }
}

/// Converts a key into the `serde_yaml` scalar that would be written for it.
///
/// Symbols become `:name` strings, the spelling Ruby emitters use.
pub(crate) fn yaml_key(key: &Key) -> serde_yaml::Value {
    match key {
        Key::Null => serde_yaml::Value::Null,
        Key::Bool(b) => serde_yaml::Value::Bool(*b),
        Key::Integer(i) => serde_yaml::Value::Number((*i).into()),
        Key::Float(f) => serde_yaml::Value::Number(f.value().into()),
        Key::String(s) => serde_yaml::Value::String(s.clone()),
        Key::Symbol(sym) => serde_yaml::Value::String(sym.to_string()),
    }
}

/// Tag spellings under which Ruby emitters write a symbol.
const SYMBOL_TAGS: [&str; 2] = ["ruby/symbol", "ruby/sym"];

impl KeyedContainer for serde_yaml::Value {
    fn is_container(&self) -> bool {
        self.is_mapping()
    }

    fn has_key(&self, key: &Key) -> bool {
        self.get_key(key).is_some()
    }

    // A symbol is stored either as a `:name` string or as a `!ruby/symbol`
    // tagged name; both spellings are tried.
    fn get_key(&self, key: &Key) -> Option<&Self> {
        let map = self.as_mapping()?;
        if let Some(value) = map.get(&yaml_key(key)) {
            return Some(value);
        }
        let Key::Symbol(sym) = key else {
            return None;
        };
        SYMBOL_TAGS.iter().find_map(|tag| {
            let tagged = serde_yaml::Value::Tagged(Box::new(TaggedValue {
                tag: Tag::new(*tag),
                value: serde_yaml::Value::String(sym.as_str().to_string()),
            }));
            map.get(&tagged)
        })
    }

    fn kind(&self) -> &'static str {
        match self {
            serde_yaml::Value::Null => "null",
            serde_yaml::Value::Bool(_) => "boolean",
            serde_yaml::Value::Number(_) => "number",
            serde_yaml::Value::String(_) => "string",
            serde_yaml::Value::Sequence(_) => "sequence",
            serde_yaml::Value::Mapping(_) => "mapping",
            serde_yaml::Value::Tagged(_) => "tagged value",
        }
    }
}
