//! Message types for the extensions coordinator

use thiserror::Error;
use tokio::sync::oneshot;

use crate::project::ProjectHandle;

/// Errors from the coordinator surface itself
///
/// Load failures never appear here: they are recorded in `last_error` and
/// forwarded to the error presenter, so one caller's failed reload cannot
/// crash an unrelated caller awaiting the chain.
#[derive(Debug, Error)]
pub enum CoordError {
    #[error("extensions coordinator channel closed")]
    ChannelError,
}

/// Internal requests to the coordinator task
///
/// The queue order of these requests is the chain: the task processes them
/// one at a time, so a `Wait` resolves only after every `Load` that entered
/// the queue before it has completed.
#[derive(Debug)]
pub enum CoordRequest {
    /// Schedule a load step for `project` after the currently queued steps
    Load {
        project: ProjectHandle,
        reply: oneshot::Sender<()>,
    },

    /// Resolve once all loads scheduled before this request have completed
    Wait { reply: oneshot::Sender<()> },

    /// Get current metrics
    GetMetrics {
        reply: oneshot::Sender<CoordinatorMetrics>,
    },

    /// Shutdown the coordinator after draining earlier requests
    Shutdown,
}

/// Coordinator metrics for observability
#[derive(Debug, Clone, Default)]
pub struct CoordinatorMetrics {
    pub requests_received: u64,
    pub loads_succeeded: u64,
    pub loads_failed: u64,
    pub waits_served: u64,
}
