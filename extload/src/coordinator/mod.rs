//! The extension load coordinator
//!
//! Serializes every load request into a single in-order chain executed by one
//! task, exposes synchronous unloads that bypass the chain, and lets any
//! caller wait for all pending work to finish:
//!
//! - **Serializer:** a single-consumer task reads requests off a queue and
//!   awaits each load step inline, so steps never overlap and run in
//!   submission order
//! - **State surface:** [`ExtensionsHandle`] with `load`, `unload_all`,
//!   `unload_one`, `reload`, `ensure_load_finished`, and a readable
//!   `last_error`

mod config;
mod core;
mod handle;
mod messages;

pub use config::CoordinatorConfig;
pub use core::{Collaborators, ExtensionsCoordinator};
pub use handle::ExtensionsHandle;
pub use messages::{CoordError, CoordRequest, CoordinatorMetrics};
