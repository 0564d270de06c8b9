//! Nested key-path lookup over keyed containers.
//!
//! A lookup walks a path of [`Key`]s through a tree of values, one key per
//! level, and returns the value at the end of the path. Misses are reported
//! as `Ok(None)`; only misuse of the API (a root that can't be indexed, or a
//! nil key given to a coercing lookup) is an error.
//!
//! # Lookup policies
//!
//! - [`object`] - keys are used exactly as given, nil keys included
//! - [`string`] - keys are converted to strings first
//! - [`symbol`] - keys are converted to symbols first
//! - [`indifferent`] - symbol form first, string form second (also [`Dig::dig`])
//! - [`pick`] - the underlying walker, for custom per-step resolvers
//!
//! # Examples
//!
//! ```
//! use yamlpick::document::parse_yaml;
//! use yamlpick::pick::{Dig, Key};
//!
//! let doc = parse_yaml("db:\n  :host: localhost\n").unwrap();
//! let host = doc.dig(&[Key::from("db"), Key::from("host")]).unwrap();
//! assert_eq!(host.and_then(|v| v.as_str()), Some("localhost"));
//! ```

pub mod container;
pub mod error;
pub mod key;
pub mod resolvers;
pub mod validation;
pub mod walker;

pub use container::KeyedContainer;
pub use error::PickError;
pub use key::{FloatKey, Key, Symbol};
pub use resolvers::{
    indifferent, indifferent_step, object, object_step, string, symbol, Dig, Strategy,
};
pub use walker::{pick, Lookup};
