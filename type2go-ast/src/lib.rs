//! Parsed model representation for the type2go generator.
//!
//! This crate provides the types produced by `type2go-parser` and consumed
//! by `type2go-codegen`. They serve as the single source of truth for what
//! a model file declares.
//!
//! # Architecture
//!
//! ```text
//! *.ts model files → type2go-parser → type2go-ast → type2go-codegen → *.go
//! ```
//!
//! The types are deliberately plain data: no spans, no source text, no
//! target-language concerns. Ordered mappings use `IndexMap` because
//! declaration order is semantically meaningful for annotations and tags.

mod class;
mod literal;
mod types;

pub use class::{Annotations, ClassDecl, FieldDecl};
pub use literal::Literal;
pub use types::TypeExpr;
