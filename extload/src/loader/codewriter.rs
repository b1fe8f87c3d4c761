//! FunctionCodeWriter - destination for generated extension code

use async_trait::async_trait;

use super::compiler::LoadError;

/// Destination for the code the compiler generates
///
/// Implementations decide where generated function code lives (a temporary
/// directory on desktop, an in-memory filesystem in a browser host). The
/// coordinator only checks for the writer's presence - a session without one
/// cannot load extensions and load requests degrade to no-ops - and passes it
/// through to the compiler untouched.
#[async_trait]
pub trait FunctionCodeWriter: Send + Sync {
    /// Include file under which the code generated for `function_name` is
    /// expected by the runtime.
    fn include_file_for(&self, function_name: &str) -> String;

    /// Persist one generated code unit at `include_file`.
    async fn write_function_code(&self, include_file: &str, code: &str) -> Result<(), LoadError>;
}
