//! Core pipeline for generating nixrun LSP package specs.
//!
//! Reads a `gen.txt` style mapping (`<server>=<package>[,<package>...]`),
//! classifies each line by how many packages it carries, and renders one Lua
//! file per server that maps to exactly one package.

mod error;
mod file;
mod generate;
mod lua;
mod mapping;
mod tally;

pub use error::{Error, Result};
// File operations
pub use file::{GeneratedFile, ensure_dir};
// Pipeline
pub use generate::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR, open_input, scan};
pub use lua::{EXTENSION, PackageSpec, lua_string};
pub use mapping::{Classification, PACKAGE_DELIMITER, Record, VALUE_DELIMITER, classify};
pub use tally::Tally;
