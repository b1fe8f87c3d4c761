//! ExtensionsHandle - caller-facing surface of the coordinator

use std::sync::{Arc, RwLock};

use tokio::sync::{broadcast, mpsc, oneshot};
use tracing::{debug, info};

use crate::events::{EventBus, ExtensionsEvent};
use crate::loader::{ExtensionOpener, ExtensionWriter, LoadError};
use crate::project::ProjectHandle;

use super::core::Collaborators;
use super::messages::{CoordError, CoordRequest, CoordinatorMetrics};

/// Handle for callers to drive the extension lifecycle
///
/// Cloneable; clones share the same chain, error state, and event bus, so
/// unrelated UI actions can request loads without coordinating with each
/// other. Load and reload suspend until their step completes; unloads are
/// synchronous and act on the externally owned units immediately.
#[derive(Clone)]
pub struct ExtensionsHandle {
    tx: mpsc::Sender<CoordRequest>,
    collaborators: Collaborators,
    last_error: Arc<RwLock<Option<Arc<LoadError>>>>,
    events: Arc<EventBus>,
}

impl ExtensionsHandle {
    pub(crate) fn new(
        tx: mpsc::Sender<CoordRequest>,
        collaborators: Collaborators,
        last_error: Arc<RwLock<Option<Arc<LoadError>>>>,
        events: Arc<EventBus>,
    ) -> Self {
        debug!("ExtensionsHandle::new: called");
        Self {
            tx,
            collaborators,
            last_error,
            events,
        }
    }

    /// Schedule a (re)compilation of every extension of `project`
    ///
    /// The request is appended after all currently scheduled loads and the
    /// call resolves once its own step, including error handling, has
    /// completed. With no project open or no code writer available this is a
    /// no-op that resolves immediately.
    ///
    /// A failed step never surfaces here: it lands in [`last_error`], the
    /// error presenter, and a `LoadFailed` event. The only error this method
    /// returns is [`CoordError::ChannelError`] for a coordinator that is
    /// gone.
    ///
    /// [`last_error`]: ExtensionsHandle::last_error
    pub async fn load(&self, project: Option<&ProjectHandle>) -> Result<(), CoordError> {
        let Some(project) = project else {
            debug!("load: no project open, nothing to do");
            return Ok(());
        };
        if self.collaborators.code_writer.is_none() {
            debug!(project_id = %project.id(), "load: no code writer available, nothing to do");
            return Ok(());
        }

        debug!(project_id = %project.id(), "load: scheduling load step");
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(CoordRequest::Load {
                project: project.clone(),
                reply: reply_tx,
            })
            .await
            .map_err(|_| CoordError::ChannelError)?;

        reply_rx.await.map_err(|_| CoordError::ChannelError)
    }

    /// Synchronously detach every extension unit of `project`
    ///
    /// Bypasses the chain entirely: safe to call while loads are pending,
    /// with no ordering guarantee relative to them. Callers that need
    /// tear-down-then-rebuild sequencing use [`reload`] instead.
    ///
    /// [`reload`]: ExtensionsHandle::reload
    pub fn unload_all(&self, project: &ProjectHandle) {
        debug!(project_id = %project.id(), "unload_all: called");
        self.collaborators.compiler.unload_project_extensions(project);
        self.events.emit(ExtensionsEvent::AllExtensionsUnloaded {
            project_id: project.id().to_string(),
        });
    }

    /// Synchronously detach the single extension unit named `extension_name`
    pub fn unload_one(&self, project: &ProjectHandle, extension_name: &str) {
        debug!(project_id = %project.id(), %extension_name, "unload_one: called");
        self.collaborators
            .compiler
            .unload_project_extension(project, extension_name);
        self.events.emit(ExtensionsEvent::ExtensionUnloaded {
            project_id: project.id().to_string(),
            extension_name: extension_name.to_string(),
        });
    }

    /// Tear down and rebuild the project's extensions
    ///
    /// Unloads everything synchronously, then schedules a fresh load. The
    /// two halves cannot be interleaved by an unrelated unload call, but the
    /// unload does not wait for loads already in the chain from earlier
    /// callers - a still-pending stale load can complete after this reload's
    /// fresh one begins.
    pub async fn reload(&self, project: Option<&ProjectHandle>) -> Result<(), CoordError> {
        debug!("reload: called");
        if let Some(project) = project {
            self.unload_all(project);
        }
        self.load(project).await
    }

    /// Resolve once every load scheduled before this call has completed
    ///
    /// Resolves immediately when nothing is pending. Never schedules work
    /// and does not affect the ordering of later submissions.
    pub async fn ensure_load_finished(&self) -> Result<(), CoordError> {
        debug!("ensure_load_finished: waiting on scheduled loads");
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(CoordRequest::Wait { reply: reply_tx })
            .await
            .map_err(|_| CoordError::ChannelError)?;
        reply_rx.await.map_err(|_| CoordError::ChannelError)?;

        info!("ensure_load_finished: extensions are ready");
        Ok(())
    }

    /// Error from the most recently completed load attempt, if any
    ///
    /// `None` means the last attempt succeeded or none has run yet. Written
    /// only by the coordinator task, after a step resolves and never during
    /// one.
    pub fn last_error(&self) -> Option<Arc<LoadError>> {
        self.last_error.read().ok().and_then(|slot| slot.clone())
    }

    /// Subscribe to lifecycle events emitted after this call
    pub fn subscribe_events(&self) -> broadcast::Receiver<ExtensionsEvent> {
        self.events.subscribe()
    }

    /// Get current coordinator metrics
    pub async fn metrics(&self) -> Result<CoordinatorMetrics, CoordError> {
        debug!("ExtensionsHandle::metrics: called");
        let (reply_tx, reply_rx) = oneshot::channel();
        self.tx
            .send(CoordRequest::GetMetrics { reply: reply_tx })
            .await
            .map_err(|_| CoordError::ChannelError)?;
        reply_rx.await.map_err(|_| CoordError::ChannelError)
    }

    /// Shutdown the coordinator
    ///
    /// Requests queued before this call still run to completion; loads
    /// submitted afterwards fail with [`CoordError::ChannelError`].
    pub async fn shutdown(&self) -> Result<(), CoordError> {
        debug!("ExtensionsHandle::shutdown: called");
        self.tx
            .send(CoordRequest::Shutdown)
            .await
            .map_err(|_| CoordError::ChannelError)
    }

    /// Storage collaborator for exporting extension definitions, when the
    /// host provides one
    pub fn extension_writer(&self) -> Option<Arc<dyn ExtensionWriter>> {
        self.collaborators.extension_writer.clone()
    }

    /// Storage collaborator for importing extension definitions, when the
    /// host provides one
    pub fn extension_opener(&self) -> Option<Arc<dyn ExtensionOpener>> {
        self.collaborators.extension_opener.clone()
    }
}
