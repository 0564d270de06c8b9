//! Lookup keys and their canonical string and symbolic forms.
//!
//! A `Key` indexes one level of a keyed container. Keys of different kinds can
//! be mixed freely within a single path, since every level of a loosely-typed
//! document may use its own key style.
//!
//! # Example
//!
//! ```
//! use yamlpick::pick::{Key, Symbol};
//!
//! let key = Key::from("name");
//! assert_eq!(key.to_interned_key(), Some(Key::Symbol(Symbol::new("name"))));
//! assert_eq!(Key::Null.to_string_key(), None);
//! ```

use std::fmt;

/// A symbolic key, distinct from a plain string with the same text.
///
/// YAML documents produced by Ruby tooling write these as `:name`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Symbol(String);

impl Symbol {
    pub fn new(name: impl Into<String>) -> Self {
        Symbol(name.into())
    }

    /// Returns the symbol name without the leading colon.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, ":{}", self.0)
    }
}

/// A floating point key compared by bit pattern.
///
/// Negative zero is folded into positive zero so `0.0` and `-0.0` address the
/// same entry. Every NaN is folded into one canonical NaN.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FloatKey(u64);

impl FloatKey {
    pub fn new(value: f64) -> Self {
        let value = if value == 0.0 {
            0.0
        } else if value.is_nan() {
            f64::NAN
        } else {
            value
        };
        FloatKey(value.to_bits())
    }

    pub fn value(&self) -> f64 {
        f64::from_bits(self.0)
    }
}

// Always keeps a decimal point or exponent, so `1.0` never reads as the
// integer `1`.
impl fmt::Display for FloatKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.value())
    }
}

/// A single step of a lookup path.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    /// The absence value. Valid for exact lookups only.
    Null,
    Bool(bool),
    Integer(i64),
    Float(FloatKey),
    String(String),
    Symbol(Symbol),
}

impl Key {
    pub fn is_null(&self) -> bool {
        matches!(self, Key::Null)
    }

    /// Returns the text a key coerces to, or `None` for `Key::Null`.
    fn coerced_text(&self) -> Option<String> {
        match self {
            Key::Null => None,
            Key::Bool(b) => Some(b.to_string()),
            Key::Integer(i) => Some(i.to_string()),
            Key::Float(f) => Some(f.to_string()),
            Key::String(s) => Some(s.clone()),
            Key::Symbol(sym) => Some(sym.as_str().to_string()),
        }
    }

    /// Converts this key to its string form.
    ///
    /// Returns `None` for `Key::Null`, which has no string form.
    ///
    /// # Example
    ///
    /// ```
    /// use yamlpick::pick::{Key, Symbol};
    ///
    /// assert_eq!(Key::Integer(7).to_string_key(), Some(Key::from("7")));
    /// assert_eq!(
    ///     Key::Symbol(Symbol::new("id")).to_string_key(),
    ///     Some(Key::from("id"))
    /// );
    /// ```
    pub fn to_string_key(&self) -> Option<Key> {
        self.coerced_text().map(Key::String)
    }

    /// Converts this key to its symbolic form.
    ///
    /// Returns `None` for `Key::Null`.
    pub fn to_interned_key(&self) -> Option<Key> {
        match self {
            Key::Symbol(_) => Some(self.clone()),
            _ => self.coerced_text().map(|s| Key::Symbol(Symbol(s))),
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Null => write!(f, "~"),
            Key::Bool(b) => write!(f, "{}", b),
            Key::Integer(i) => write!(f, "{}", i),
            Key::Float(fl) => write!(f, "{}", fl),
            Key::String(s) => write!(f, "{}", s),
            Key::Symbol(sym) => write!(f, "{}", sym),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::String(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::String(s)
    }
}

impl From<Symbol> for Key {
    fn from(sym: Symbol) -> Self {
        Key::Symbol(sym)
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Integer(i)
    }
}

impl From<bool> for Key {
    fn from(b: bool) -> Self {
        Key::Bool(b)
    }
}

impl From<f64> for Key {
    fn from(f: f64) -> Self {
        Key::Float(FloatKey::new(f))
    }
}
