//! Lifecycle event stream for extension observers
//!
//! The coordinator emits an event for every observable transition in the
//! extension lifecycle: a load starting, succeeding, or failing, and units
//! being unloaded. Consumers that used to be notified implicitly (panels
//! re-rendering off shared state) subscribe to the bus instead:
//!
//! ```rust,ignore
//! let mut rx = handle.subscribe_events();
//! while let Ok(event) = rx.recv().await {
//!     println!("extensions: {:?}", event);
//! }
//! ```
//!
//! Emission is fire-and-forget: no subscribers means the event is dropped,
//! and a full channel drops the oldest events first.

mod bus;
mod types;

pub use bus::{DEFAULT_CHANNEL_CAPACITY, EventBus};
pub use types::ExtensionsEvent;
