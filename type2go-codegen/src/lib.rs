//! Go struct generation from parsed model declarations.
//!
//! The entry point is [`emit_model`]: given one annotated class and a
//! [`NamingRegistry`], it produces the complete text of one generated Go
//! file (banner, package clause, import block, struct definition). Writing
//! that text to disk is the driver's job.
//!
//! Generation is a single synchronous pass per class. The only state
//! threaded through a class's emission is its [`GenerationContext`], which
//! carries the indent depth and the imports required by translated types;
//! it is created when the class's emission starts and discarded with it.

mod context;
mod emitter;
mod error;
mod model_config;
mod naming;
mod tags;
mod type_mapper;

pub use context::GenerationContext;
pub use emitter::{UNKNOWN_TYPE, emit_model};
pub use error::{Error, Result};
pub use model_config::ModelConfig;
pub use naming::NamingRegistry;
