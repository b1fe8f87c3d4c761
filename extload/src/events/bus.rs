//! Event bus for extension lifecycle observers
//!
//! Built on a tokio broadcast channel so every subscriber (project manager
//! panel, status bar, log sink) sees every event with minimal latency.

use tokio::sync::broadcast;
use tracing::debug;

use super::types::ExtensionsEvent;

/// Default channel capacity (events)
///
/// Load cycles emit a handful of events each; this covers bursts of reloads
/// while a slow subscriber catches up.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 256;

/// Central bus for extension lifecycle events
pub struct EventBus {
    tx: broadcast::Sender<ExtensionsEvent>,
}

impl EventBus {
    /// Create a new event bus with the given capacity
    pub fn new(capacity: usize) -> Self {
        debug!(capacity, "EventBus::new: creating event bus");
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Create a new event bus with default capacity
    pub fn with_default_capacity() -> Self {
        Self::new(DEFAULT_CHANNEL_CAPACITY)
    }

    /// Emit an event to all subscribers
    ///
    /// Fire-and-forget: with no subscribers the event is dropped, and a full
    /// channel drops its oldest events.
    pub fn emit(&self, event: ExtensionsEvent) {
        debug!(
            event_type = event.event_type(),
            project_id = event.project_id(),
            "EventBus::emit"
        );
        // Ignore send errors (no subscribers is OK)
        let _ = self.tx.send(event);
    }

    /// Subscribe to receive events emitted after this call
    pub fn subscribe(&self) -> broadcast::Receiver<ExtensionsEvent> {
        debug!("EventBus::subscribe: new subscriber");
        self.tx.subscribe()
    }

    /// Number of active subscribers
    pub fn subscriber_count(&self) -> usize {
        self.tx.receiver_count()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::with_default_capacity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::sync::broadcast::error::TryRecvError;

    #[test]
    fn test_event_bus_creation() {
        let bus = EventBus::new(16);
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn test_event_bus_subscribe() {
        let bus = EventBus::new(16);
        let _rx1 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 1);
        let _rx2 = bus.subscribe();
        assert_eq!(bus.subscriber_count(), 2);
    }

    #[tokio::test]
    async fn test_event_bus_emit_receive() {
        let bus = EventBus::new(16);
        let mut rx = bus.subscribe();

        bus.emit(ExtensionsEvent::LoadStarted {
            project_id: "p1".to_string(),
        });

        let event = rx.recv().await.unwrap();
        assert_eq!(event.event_type(), "LoadStarted");
        assert_eq!(event.project_id(), "p1");
    }

    #[tokio::test]
    async fn test_event_bus_no_subscribers() {
        let bus = EventBus::new(16);
        // Must not panic with nobody listening
        bus.emit(ExtensionsEvent::LoadSucceeded {
            project_id: "p1".to_string(),
        });
    }

    #[tokio::test]
    async fn test_multiple_subscribers_receive_same_event() {
        let bus = EventBus::new(16);
        let mut rx1 = bus.subscribe();
        let mut rx2 = bus.subscribe();

        bus.emit(ExtensionsEvent::AllExtensionsUnloaded {
            project_id: "p1".to_string(),
        });

        assert_eq!(rx1.recv().await.unwrap().project_id(), "p1");
        assert_eq!(rx2.recv().await.unwrap().project_id(), "p1");
        assert!(matches!(rx1.try_recv(), Err(TryRecvError::Empty)));
    }
}
