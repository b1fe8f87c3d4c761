//! Extload - serialized load coordinator for project-scoped generated extensions
//!
//! A project carries declarative extension definitions that are turned into
//! loadable code by an external generation engine. UI actions, startup
//! sequences, and editors all trigger (re)loads of that code at arbitrary,
//! overlapping times; extload is the coordinator that keeps those requests
//! sane.
//!
//! # Core Guarantees
//!
//! - **One load at a time**: every load request joins a single in-order
//!   chain; the compile primitive never runs concurrently with itself
//! - **Program order**: requests execute in submission order, whoever
//!   submitted them
//! - **Failures are state, not panics**: a failed load lands in `last_error`
//!   and the error presenter; it never crashes a caller awaiting the chain
//! - **Deterministic quiescence**: any caller can wait for all currently
//!   pending loads before reading derived state
//! - **Synchronous unloads**: whole-project and single-unit unloads act
//!   immediately and never join the chain
//!
//! # Modules
//!
//! - [`coordinator`] - the serializer task and the caller-facing handle
//! - [`loader`] - collaborator contracts for compilation and storage
//! - [`ui`] - collaborator contracts for localization and error presentation
//! - [`events`] - broadcast bus for lifecycle observers
//! - [`project`] - the opaque project reference

pub mod coordinator;
pub mod events;
pub mod loader;
pub mod project;
pub mod ui;

// Re-export commonly used types
pub use coordinator::{
    Collaborators, CoordError, CoordRequest, CoordinatorConfig, CoordinatorMetrics, ExtensionsCoordinator,
    ExtensionsHandle,
};
pub use events::{EventBus, ExtensionsEvent};
pub use loader::{ExtensionCompiler, ExtensionOpener, ExtensionWriter, FunctionCodeWriter, LoadError};
pub use project::ProjectHandle;
pub use ui::{ErrorPresenter, Localizer, PassthroughLocalizer};
