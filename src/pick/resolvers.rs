//! The four named lookup policies built on `pick`.

use serde::{Deserialize, Serialize};

use super::container::KeyedContainer;
use super::error::PickError;
use super::key::Key;
use super::validation::{coerce_path, ensure_no_nil_keys};
use super::walker::{pick, Lookup};

/// Resolves `key` in `container` under exact equality.
pub fn object_step<'a, C: KeyedContainer>(container: &'a C, key: &Key) -> Lookup<&'a C> {
    if container.has_key(key) {
        container.get_key(key).into()
    } else {
        Lookup::Absent
    }
}

/// Resolves `key` by its symbolic form, then by its string form.
///
/// Nil keys resolve to `Lookup::Absent`; `indifferent` rejects them before
/// the walk starts.
pub fn indifferent_step<'a, C: KeyedContainer>(container: &'a C, key: &Key) -> Lookup<&'a C> {
    let candidates = [key.to_interned_key(), key.to_string_key()];
    for candidate in candidates.iter().flatten() {
        if container.has_key(candidate) {
            return container.get_key(candidate).into();
        }
    }
    Lookup::Absent
}

/// Looks up `path` using each key exactly as given.
///
/// `Key::Null` is an ordinary key here.
pub fn object<'a, C: KeyedContainer>(
    container: &'a C,
    path: &[Key],
) -> Result<Option<&'a C>, PickError> {
    pick(container, path, object_step)
}

/// Looks up `path` after converting every key to its string form.
///
/// # Errors
///
/// `PickError::NilKey` if any key is `Key::Null`, checked before the
/// container is touched.
pub fn string<'a, C: KeyedContainer>(
    container: &'a C,
    path: &[Key],
) -> Result<Option<&'a C>, PickError> {
    let path = coerce_path(path, Key::to_string_key)?;
    pick(container, &path, object_step)
}

/// Looks up `path` after converting every key to its symbolic form.
///
/// # Errors
///
/// Same nil-key rule as [`string`].
pub fn symbol<'a, C: KeyedContainer>(
    container: &'a C,
    path: &[Key],
) -> Result<Option<&'a C>, PickError> {
    let path = coerce_path(path, Key::to_interned_key)?;
    pick(container, &path, object_step)
}

/// Looks up `path` trying each key as a symbol first, then as a string.
///
/// This suits documents whose levels mix symbol and string keys. When both
/// forms are present at one level the symbol entry wins.
///
/// # Errors
///
/// Same nil-key rule as [`string`].
///
/// # Example
///
/// ```
/// use yamlpick::document::parse_yaml;
/// use yamlpick::pick::{indifferent, Key};
///
/// let doc = parse_yaml(":a:\n  b: v\n").unwrap();
/// let found = indifferent(&doc, &[Key::from("a"), Key::from("b")]).unwrap();
/// assert_eq!(found.and_then(|v| v.as_str()), Some("v"));
/// ```
pub fn indifferent<'a, C: KeyedContainer>(
    container: &'a C,
    path: &[Key],
) -> Result<Option<&'a C>, PickError> {
    ensure_no_nil_keys(path)?;
    pick(container, path, indifferent_step)
}

/// Shorthand for [`indifferent`] on any keyed container.
pub trait Dig: KeyedContainer + Sized {
    fn dig(&self, path: &[Key]) -> Result<Option<&Self>, PickError> {
        indifferent(self, path)
    }
}

impl<C: KeyedContainer> Dig for C {}

/// A named lookup policy, selectable from configuration or the command line.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum Strategy {
    /// Keys are used exactly as given.
    Object,
    /// Keys are converted to strings.
    String,
    /// Keys are converted to symbols.
    Symbol,
    /// Symbols first, then strings.
    #[default]
    Indifferent,
}

impl Strategy {
    /// Runs the lookup policy this strategy names.
    pub fn lookup<'a, C: KeyedContainer>(
        self,
        container: &'a C,
        path: &[Key],
    ) -> Result<Option<&'a C>, PickError> {
        match self {
            Strategy::Object => object(container, path),
            Strategy::String => string(container, path),
            Strategy::Symbol => symbol(container, path),
            Strategy::Indifferent => indifferent(container, path),
        }
    }
}
