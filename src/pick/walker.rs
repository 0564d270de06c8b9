//! The generic path walker.

use log::{debug, trace};

use super::container::KeyedContainer;
use super::error::PickError;
use super::key::Key;
use super::validation::ensure_container;

/// Outcome of resolving a single key against a container.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup<T> {
    /// The key resolved to a value.
    Found(T),
    /// The key isn't there; the walk stops.
    Absent,
}

impl<T> Lookup<T> {
    pub fn into_option(self) -> Option<T> {
        match self {
            Lookup::Found(value) => Some(value),
            Lookup::Absent => None,
        }
    }
}

impl<T> From<Option<T>> for Lookup<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Lookup::Found(value),
            None => Lookup::Absent,
        }
    }
}

/// Walks `path` through `container`, resolving each key with `resolver`.
///
/// Returns `Ok(Some(value))` once every key has been consumed, and `Ok(None)`
/// when the walk stops early: either a key remains but the current value is
/// not a container, or the resolver reports `Lookup::Absent`. An empty path
/// returns `container` itself.
///
/// # Errors
///
/// Returns `PickError::NotAContainer` if `container` doesn't support key
/// lookup. Resolver misses are never errors.
///
/// # Example
///
/// ```
/// use yamlpick::document::parse_yaml;
/// use yamlpick::pick::{object_step, pick, Key};
///
/// let doc = parse_yaml("server:\n  port: 8080\n").unwrap();
/// let path = [Key::from("server"), Key::from("port")];
/// let port = pick(&doc, &path, object_step).unwrap();
/// assert!(port.is_some());
/// ```
pub fn pick<'a, C, R>(
    container: &'a C,
    path: &[Key],
    mut resolver: R,
) -> Result<Option<&'a C>, PickError>
where
    C: KeyedContainer,
    R: FnMut(&'a C, &Key) -> Lookup<&'a C>,
{
    ensure_container(container)?;

    let mut current = container;
    for (depth, key) in path.iter().enumerate() {
        if !current.is_container() {
            debug!(
                "pick stopped at depth {}: {} cannot be indexed by {}",
                depth,
                current.kind(),
                key
            );
            return Ok(None);
        }
        match resolver(current, key) {
            Lookup::Found(next) => {
                trace!("pick resolved {} at depth {}", key, depth);
                current = next;
            }
            Lookup::Absent => {
                debug!("pick stopped at depth {}: key {} is absent", depth, key);
                return Ok(None);
            }
        }
    }

    Ok(Some(current))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn json_step<'a>(value: &'a serde_json::Value, key: &Key) -> Lookup<&'a serde_json::Value> {
        value.get_key(key).into()
    }

    #[test]
    fn test_empty_path_returns_root() {
        let root = json!({"a": 1});
        let result = pick(&root, &[], json_step).unwrap();
        assert!(std::ptr::eq(result.unwrap(), &root));
    }

    #[test]
    fn test_root_must_be_container() {
        let root = json!([1, 2]);
        let err = pick(&root, &[], json_step).unwrap_err();
        assert_eq!(err, PickError::NotAContainer { found: "array" });
    }

    #[test]
    fn test_absent_stops_walk() {
        let root = json!({"a": {"b": 1}});
        let mut calls = 0;
        let result = pick(&root, &[Key::from("x"), Key::from("b")], |value, key| {
            calls += 1;
            json_step(value, key)
        })
        .unwrap();
        assert_eq!(result, None);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_scalar_before_last_key_is_not_found() {
        let root = json!({"a": 5});
        let result = pick(&root, &[Key::from("a"), Key::from("b")], json_step).unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn test_scalar_reached_by_last_key_is_returned() {
        let root = json!({"a": 5});
        let result = pick(&root, &[Key::from("a")], json_step).unwrap();
        assert_eq!(result, Some(&json!(5)));
    }

    #[test]
    fn test_lookup_from_option() {
        assert_eq!(Lookup::from(Some(1)), Lookup::Found(1));
        assert_eq!(Lookup::<i32>::from(None), Lookup::Absent);
        assert_eq!(Lookup::Found(2).into_option(), Some(2));
    }
}
