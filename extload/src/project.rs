//! Opaque project reference

use serde::{Deserialize, Serialize};

/// Cheap, cloneable reference to an open project.
///
/// The coordinator never inspects a project's contents. The handle exists so
/// that load and unload requests can be dispatched to the collaborators and
/// correlated in logs and events; hosts map the id back to their own project
/// registry.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ProjectHandle {
    id: String,
}

impl ProjectHandle {
    pub fn new(id: impl Into<String>) -> Self {
        Self { id: id.into() }
    }

    pub fn id(&self) -> &str {
        &self.id
    }
}

impl std::fmt::Display for ProjectHandle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_project_handle_id() {
        let project = ProjectHandle::new("project-1");
        assert_eq!(project.id(), "project-1");
        assert_eq!(project.to_string(), "project-1");
    }

    #[test]
    fn test_project_handle_equality() {
        let a = ProjectHandle::new("p");
        let b = ProjectHandle::new("p");
        let c = ProjectHandle::new("q");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }
}
