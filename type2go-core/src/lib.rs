//! Core utilities and types for the type2go model generator.
//!
//! This crate provides fundamental types and utilities used across
//! the type2go ecosystem.

mod file;
mod naming_style;
mod utils;

// File operations
pub use file::File;
// Identifier casing
pub use naming_style::NamingStyle;
// String utilities
pub use utils::{to_camel_case, to_pascal_case, to_snake_case};
