//! Error types for key-path lookups.

use thiserror::Error;

/// Invalid-argument failures raised before a lookup touches the container.
///
/// A key that simply isn't there is not an error; lookups report it as
/// `Ok(None)`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PickError {
    /// The root value doesn't support key lookup.
    #[error("invalid argument: container must support key lookup, got {found}")]
    NotAContainer { found: &'static str },
    /// A coercing lookup was given a nil key.
    #[error("invalid argument: path contains a nil key at position {index}")]
    NilKey { index: usize },
}
