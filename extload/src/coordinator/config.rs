//! Coordinator configuration

use serde::{Deserialize, Serialize};

/// Coordinator configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoordinatorConfig {
    /// Channel buffer size for coordinator requests
    #[serde(default = "default_channel_buffer")]
    pub channel_buffer: usize,

    /// Broadcast capacity for lifecycle events
    #[serde(default = "default_event_capacity")]
    pub event_capacity: usize,
}

fn default_channel_buffer() -> usize {
    64
}

fn default_event_capacity() -> usize {
    crate::events::DEFAULT_CHANNEL_CAPACITY
}

impl Default for CoordinatorConfig {
    fn default() -> Self {
        Self {
            channel_buffer: default_channel_buffer(),
            event_capacity: default_event_capacity(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = CoordinatorConfig::default();
        assert_eq!(config.channel_buffer, 64);
        assert_eq!(config.event_capacity, 256);
    }

    #[test]
    fn test_config_deserializes_with_defaults() {
        let config: CoordinatorConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.channel_buffer, 64);

        let config: CoordinatorConfig = serde_json::from_str(r#"{"channel_buffer": 8}"#).unwrap();
        assert_eq!(config.channel_buffer, 8);
        assert_eq!(config.event_capacity, 256);
    }
}
