//! Argument checks shared by the walker and the coercing resolvers.

use super::container::KeyedContainer;
use super::error::PickError;
use super::key::Key;

/// Fails with `PickError::NotAContainer` unless `container` supports key lookup.
pub fn ensure_container<C: KeyedContainer>(container: &C) -> Result<(), PickError> {
    if container.is_container() {
        Ok(())
    } else {
        Err(PickError::NotAContainer {
            found: container.kind(),
        })
    }
}

/// Fails with `PickError::NilKey` at the first nil key in `path`.
pub fn ensure_no_nil_keys(path: &[Key]) -> Result<(), PickError> {
    match path.iter().position(Key::is_null) {
        Some(index) => Err(PickError::NilKey { index }),
        None => Ok(()),
    }
}

/// Maps every key of `path` through `convert`, failing on the first nil key.
///
/// `convert` returns `None` exactly for keys that have no coerced form.
pub fn coerce_path<F>(path: &[Key], convert: F) -> Result<Vec<Key>, PickError>
where
    F: Fn(&Key) -> Option<Key>,
{
    path.iter()
        .enumerate()
        .map(|(index, key)| convert(key).ok_or(PickError::NilKey { index }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_nil_keys_accepts_empty_path() {
        assert_eq!(ensure_no_nil_keys(&[]), Ok(()));
    }

    #[test]
    fn test_no_nil_keys_reports_first_position() {
        let path = [Key::from("a"), Key::Null, Key::Null];
        assert_eq!(
            ensure_no_nil_keys(&path),
            Err(PickError::NilKey { index: 1 })
        );
    }

    #[test]
    fn test_coerce_path_converts_every_key() {
        let path = [Key::Integer(1), Key::Bool(false)];
        let coerced = coerce_path(&path, Key::to_string_key).unwrap();
        assert_eq!(coerced, vec![Key::from("1"), Key::from("false")]);
    }

    #[test]
    fn test_coerce_path_rejects_nil() {
        let path = [Key::Null];
        assert_eq!(
            coerce_path(&path, Key::to_interned_key),
            Err(PickError::NilKey { index: 0 })
        );
    }

    #[test]
    fn test_ensure_container_rejects_scalar() {
        let value = serde_json::json!(5);
        assert_eq!(
            ensure_container(&value),
            Err(PickError::NotAContainer { found: "number" })
        );
    }
}
