//! Core operations.
//!
//! Business logic for lspgen, separated from CLI argument parsing and
//! output rendering.

pub mod generate;

pub use generate::generate;
