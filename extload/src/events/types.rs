//! Event types for the extension lifecycle

use serde::{Deserialize, Serialize};

/// The vocabulary of observable extension activity
///
/// Load events are emitted by the coordinator task in chain order; unload
/// events are emitted synchronously from the calling thread.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum ExtensionsEvent {
    /// A load step has started executing
    LoadStarted { project_id: String },
    /// A load step completed and all extension units are attached
    LoadSucceeded { project_id: String },
    /// A load step failed; the error is also recorded in `last_error`
    LoadFailed { project_id: String, message: String },
    /// Every extension unit of the project was detached
    AllExtensionsUnloaded { project_id: String },
    /// A single named extension unit was detached
    ExtensionUnloaded {
        project_id: String,
        extension_name: String,
    },
}

impl ExtensionsEvent {
    /// Event type name for filtering and logging
    pub fn event_type(&self) -> &'static str {
        match self {
            ExtensionsEvent::LoadStarted { .. } => "LoadStarted",
            ExtensionsEvent::LoadSucceeded { .. } => "LoadSucceeded",
            ExtensionsEvent::LoadFailed { .. } => "LoadFailed",
            ExtensionsEvent::AllExtensionsUnloaded { .. } => "AllExtensionsUnloaded",
            ExtensionsEvent::ExtensionUnloaded { .. } => "ExtensionUnloaded",
        }
    }

    /// Project this event belongs to
    pub fn project_id(&self) -> &str {
        match self {
            ExtensionsEvent::LoadStarted { project_id }
            | ExtensionsEvent::LoadSucceeded { project_id }
            | ExtensionsEvent::LoadFailed { project_id, .. }
            | ExtensionsEvent::AllExtensionsUnloaded { project_id }
            | ExtensionsEvent::ExtensionUnloaded { project_id, .. } => project_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_accessors() {
        let event = ExtensionsEvent::ExtensionUnloaded {
            project_id: "p1".to_string(),
            extension_name: "Physics".to_string(),
        };
        assert_eq!(event.event_type(), "ExtensionUnloaded");
        assert_eq!(event.project_id(), "p1");
    }

    #[test]
    fn test_event_serialization() {
        let event = ExtensionsEvent::LoadFailed {
            project_id: "p1".to_string(),
            message: "extension `Physics` failed to compile: bad declaration".to_string(),
        };

        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"type\":\"LoadFailed\""));
        assert!(json.contains("p1"));

        let deserialized: ExtensionsEvent = serde_json::from_str(&json).unwrap();
        match deserialized {
            ExtensionsEvent::LoadFailed { project_id, message } => {
                assert_eq!(project_id, "p1");
                assert!(message.contains("Physics"));
            }
            _ => panic!("Wrong variant"),
        }
    }
}
