//! Loading documents from files and stdin.

pub mod loader;
