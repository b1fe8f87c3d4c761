//! Storage-side collaborators for extension definitions
//!
//! Import/export of extension definitions is host-specific (file dialogs on
//! desktop, blob downloads in a browser). The coordinator holds these
//! collaborators only to hand them to UI descendants through its handle; it
//! never invokes them itself.

use async_trait::async_trait;

use crate::project::ProjectHandle;

use super::compiler::LoadError;

/// Exports one extension's definition out of the project
#[async_trait]
pub trait ExtensionWriter: Send + Sync {
    /// Serialize the definition of `extension_name` and write it to a
    /// host-chosen destination. Returns the destination location.
    async fn write_extension(
        &self,
        project: &ProjectHandle,
        extension_name: &str,
    ) -> Result<String, LoadError>;
}

/// Imports an extension definition from outside the project
#[async_trait]
pub trait ExtensionOpener: Send + Sync {
    /// Read a previously exported extension definition from `location` and
    /// return its serialized form.
    async fn open_extension(&self, location: &str) -> Result<String, LoadError>;
}
