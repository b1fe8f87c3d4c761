//! ExtensionCompiler trait definition

use async_trait::async_trait;
use thiserror::Error;

use crate::project::ProjectHandle;
use crate::ui::Localizer;

use super::codewriter::FunctionCodeWriter;

/// Errors raised by the compile/load primitive
#[derive(Debug, Error)]
pub enum LoadError {
    /// Generated code could not be written where the code writer points
    #[error("I/O failure while writing generated code: {0}")]
    Io(String),

    /// One of the project's extensions did not compile
    #[error("extension `{extension}` failed to compile: {reason}")]
    Compile { extension: String, reason: String },

    /// Any other failure reported by the load primitive
    #[error("{0}")]
    Other(String),
}

impl From<std::io::Error> for LoadError {
    fn from(err: std::io::Error) -> Self {
        LoadError::Io(err.to_string())
    }
}

/// The compile/load primitives for a project's extensions
///
/// This is the boundary to the code-generation engine. A load call parses the
/// project's extension definitions, generates and compiles their code, and
/// attaches the resulting extension units to the project. The coordinator
/// guarantees that `load_project_extensions` never runs concurrently with
/// itself: implementations may assume exclusive access to the generation
/// pipeline for the duration of a call.
///
/// The unload primitives are synchronous and infallible by contract. An
/// implementation that can fail internally must handle the failure itself
/// rather than surface it through this interface.
#[async_trait]
pub trait ExtensionCompiler: Send + Sync {
    /// Parse, compile, and attach all extension units of `project`.
    ///
    /// Generated code is handed to `code_writer`; user-facing strings baked
    /// into the generated units go through `localizer`.
    async fn load_project_extensions(
        &self,
        project: &ProjectHandle,
        code_writer: &dyn FunctionCodeWriter,
        localizer: &dyn Localizer,
    ) -> Result<(), LoadError>;

    /// Detach and dispose every extension unit of `project`.
    fn unload_project_extensions(&self, project: &ProjectHandle);

    /// Detach and dispose the single extension unit named `extension_name`.
    fn unload_project_extension(&self, project: &ProjectHandle, extension_name: &str);
}
