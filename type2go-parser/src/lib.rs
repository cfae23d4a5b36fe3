//! Parser for the TypeScript model-declaration subset consumed by type2go.
//!
//! Model files contain annotated class declarations:
//!
//! ```text
//! @GoModel({ generateTags: ['json', 'gorm'] })
//! class User extends Base {
//!     @ExtraTags({ json: 'omitempty' })
//!     id: string
//!
//!     someNullable?: string
//!     someMap: Map<string, int[]>
//!     someInlineType: { a: int, b: string }
//! }
//! ```
//!
//! Annotation arguments go through a dedicated literal-only grammar:
//! identifiers, calls, and any other non-literal expression are a fatal
//! parse diagnostic, never evaluated.

// Miette's derive macro generates code that triggers these warnings
#![allow(unused_assignments)]

mod error;
mod lexer;
mod literal;
mod parse;

pub use error::{Error, Result};
pub use parse::{parse_file, parse_source};
