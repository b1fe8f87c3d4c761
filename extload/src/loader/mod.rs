//! Collaborator contracts on the compile/storage side
//!
//! The coordinator does not parse, compile, or persist anything itself. All
//! of that work lives behind the traits in this module:
//!
//! - [`ExtensionCompiler`] - the load/unload primitives that turn a project's
//!   extension definitions into attached runtime units (and detach them)
//! - [`FunctionCodeWriter`] - where the compiler puts generated code
//! - [`ExtensionWriter`] / [`ExtensionOpener`] - definition import/export,
//!   exposed through the coordinator handle for UI descendants
//!
//! Load failures cross the boundary as [`LoadError`].

mod codewriter;
mod compiler;
mod storage;

pub use codewriter::FunctionCodeWriter;
pub use compiler::{ExtensionCompiler, LoadError};
pub use storage::{ExtensionOpener, ExtensionWriter};

#[cfg(test)]
pub use compiler::mock;
