//! Path expressions for naming a lookup path on the command line.
//!
//! # Supported Syntax
//!
//! - `a.b.c` or `$.a.b.c` - string keys (`$` alone is the document root)
//! - `:name` - symbol key
//! - `~` - nil key
//! - `['a.b']` or `["a b"]` - quoted string key
//! - `[:name]` or `[:'a b']` - symbol key in brackets
//! - `[42]`, `[-1]`, `[1.5]` - numeric mapping keys (never sequence positions)
//! - `[NaN]`, `[inf]`, `[-inf]` - non-finite float keys
//! - `[true]`, `[false]`, `[null]` - boolean and nil keys
//!
//! # Examples
//!
//! ```
//! use yamlpick::path::parse_path;
//! use yamlpick::pick::{Key, Symbol};
//!
//! let keys = parse_path("servers.:primary[8080]").unwrap();
//! assert_eq!(
//!     keys,
//!     vec![
//!         Key::from("servers"),
//!         Key::Symbol(Symbol::new("primary")),
//!         Key::Integer(8080),
//!     ]
//! );
//! ```

pub mod error;
pub mod parser;

pub use error::PathError;
pub use parser::{format_path, PathParser};

use crate::pick::Key;

/// Parses a path expression into keys.
pub fn parse_path(expr: &str) -> Result<Vec<Key>, PathError> {
    PathParser::parse(expr)
}
