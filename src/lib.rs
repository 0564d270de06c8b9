//! yamlpick - nested key-path lookup for YAML and JSON documents.
//!
//! The [`pick`] module holds the lookup engine: a path walker over any
//! [`pick::KeyedContainer`] plus four lookup policies. The remaining modules
//! load documents, parse path expressions, hold the configuration
//! and run the `yamlpick` command.

pub mod cli;
pub mod config;
pub mod document;
pub mod file;
pub mod path;
pub mod pick;
