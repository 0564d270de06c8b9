//! Document model, parsing and rendering.
//!
//! Loaded documents are `Value` trees. Only mappings can be indexed by key,
//! which is what the lookup functions in [`crate::pick`] walk through.

pub mod node;
pub mod parser;
pub mod render;

pub use node::{Number, Value};
pub use parser::{parse_json, parse_yaml, parse_yaml_documents};
pub use render::{render, Format};
