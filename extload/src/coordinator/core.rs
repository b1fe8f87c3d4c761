//! Main coordinator task implementation

use std::sync::{Arc, RwLock};

use tokio::sync::mpsc;
use tracing::{debug, info, warn};

use crate::events::{EventBus, ExtensionsEvent};
use crate::loader::{ExtensionCompiler, ExtensionOpener, ExtensionWriter, FunctionCodeWriter, LoadError};
use crate::project::ProjectHandle;
use crate::ui::{ErrorPresenter, Localizer};

use super::config::CoordinatorConfig;
use super::handle::ExtensionsHandle;
use super::messages::{CoordRequest, CoordinatorMetrics};

/// Advisory shown once per failed load attempt, alongside the error detail
pub(crate) const LOAD_FAILED_ADVISORY: &str = "An error occurred during extension code generation. \
     Verify that nothing is preventing the application from writing on disk, \
     then reload the extensions from the project manager.";

/// External collaborators the coordinator dispatches to
///
/// Bound once for the lifetime of the coordinator, which matches one open
/// project session. The code writer may be absent (a host without a place to
/// put generated code); load requests degrade to no-ops while it is.
#[derive(Clone)]
pub struct Collaborators {
    /// The compile/load primitives
    pub compiler: Arc<dyn ExtensionCompiler>,

    /// Destination for generated code
    pub code_writer: Option<Arc<dyn FunctionCodeWriter>>,

    /// Translates the advisory message before presentation
    pub localizer: Arc<dyn Localizer>,

    /// Shows load failures to the user
    pub error_presenter: Arc<dyn ErrorPresenter>,

    /// Definition export, exposed through the handle only
    pub extension_writer: Option<Arc<dyn ExtensionWriter>>,

    /// Definition import, exposed through the handle only
    pub extension_opener: Option<Arc<dyn ExtensionOpener>>,
}

/// The coordinator task that serializes extension loads
///
/// One instance per open project session. All shared mutable state - the
/// request queue and the last-error slot - is owned by this task; handles
/// only send requests and read the error mirror. Processing requests one at
/// a time is what makes the guarantees hold: load steps never overlap, run
/// in submission order, and a `Wait` resolves only after everything queued
/// before it.
pub struct ExtensionsCoordinator {
    config: CoordinatorConfig,
    tx: mpsc::Sender<CoordRequest>,
    rx: mpsc::Receiver<CoordRequest>,
    collaborators: Collaborators,
    last_error: Arc<RwLock<Option<Arc<LoadError>>>>,
    events: Arc<EventBus>,
}

impl ExtensionsCoordinator {
    /// Create a new coordinator with the given configuration
    pub fn new(config: CoordinatorConfig, collaborators: Collaborators) -> Self {
        debug!(
            channel_buffer = config.channel_buffer,
            event_capacity = config.event_capacity,
            "ExtensionsCoordinator::new: called"
        );
        let (tx, rx) = mpsc::channel(config.channel_buffer);
        let events = Arc::new(EventBus::new(config.event_capacity));

        Self {
            config,
            tx,
            rx,
            collaborators,
            last_error: Arc::new(RwLock::new(None)),
            events,
        }
    }

    /// Create a handle for callers
    ///
    /// Handles are cheap to clone and every clone talks to the same chain.
    pub fn handle(&self) -> ExtensionsHandle {
        ExtensionsHandle::new(
            self.tx.clone(),
            self.collaborators.clone(),
            Arc::clone(&self.last_error),
            Arc::clone(&self.events),
        )
    }

    /// Spawn the coordinator task and return a handle to it
    ///
    /// Must be called from within a tokio runtime.
    pub fn spawn(config: CoordinatorConfig, collaborators: Collaborators) -> ExtensionsHandle {
        let coordinator = Self::new(config, collaborators);
        let handle = coordinator.handle();
        tokio::spawn(coordinator.run());
        handle
    }

    /// Run the coordinator task
    ///
    /// Consumes the coordinator and runs until `Shutdown` is received.
    /// Requests queued before the shutdown are drained in order first.
    pub async fn run(mut self) {
        info!(
            channel_buffer = self.config.channel_buffer,
            "extensions coordinator started"
        );
        let mut metrics = CoordinatorMetrics::default();

        while let Some(req) = self.rx.recv().await {
            metrics.requests_received += 1;

            match req {
                CoordRequest::Load { project, reply } => {
                    debug!(project_id = %project.id(), "run: load request");
                    if self.run_load_step(&project).await {
                        metrics.loads_succeeded += 1;
                    } else {
                        metrics.loads_failed += 1;
                    }
                    // The reply fires only after the step and its error
                    // handling completed; callers awaiting load() resolve
                    // here. A dropped receiver just means nobody waited.
                    let _ = reply.send(());
                }

                CoordRequest::Wait { reply } => {
                    debug!("run: wait request");
                    // FIFO processing: every load queued before this request
                    // has already completed by the time we see it.
                    metrics.waits_served += 1;
                    let _ = reply.send(());
                }

                CoordRequest::GetMetrics { reply } => {
                    debug!("run: metrics request");
                    let _ = reply.send(metrics.clone());
                }

                CoordRequest::Shutdown => {
                    info!("extensions coordinator shutting down");
                    break;
                }
            }
        }

        debug!("extensions coordinator stopped");
    }

    /// Execute one load step to completion
    ///
    /// Returns false when the step failed. Failures are converted into state
    /// and presentation side effects here and never escape.
    async fn run_load_step(&self, project: &ProjectHandle) -> bool {
        // A request can sit in the queue while the host has no code writer;
        // the step degrades to a silent no-op but still holds its slot in the
        // chain so later submissions keep their order.
        let Some(code_writer) = self.collaborators.code_writer.as_deref() else {
            debug!(project_id = %project.id(), "run_load_step: no code writer, skipping");
            return true;
        };

        self.events.emit(ExtensionsEvent::LoadStarted {
            project_id: project.id().to_string(),
        });

        let result = self
            .collaborators
            .compiler
            .load_project_extensions(project, code_writer, self.collaborators.localizer.as_ref())
            .await;

        match result {
            Ok(()) => {
                debug!(project_id = %project.id(), "run_load_step: load succeeded");
                self.set_last_error(None);
                self.events.emit(ExtensionsEvent::LoadSucceeded {
                    project_id: project.id().to_string(),
                });
                true
            }
            Err(err) => {
                warn!(project_id = %project.id(), error = %err, "run_load_step: load failed");
                let err = Arc::new(err);
                self.set_last_error(Some(Arc::clone(&err)));

                let message = self.collaborators.localizer.translate(LOAD_FAILED_ADVISORY);
                self.collaborators.error_presenter.present_error(&message, err.as_ref());

                self.events.emit(ExtensionsEvent::LoadFailed {
                    project_id: project.id().to_string(),
                    message: err.to_string(),
                });
                false
            }
        }
    }

    fn set_last_error(&self, value: Option<Arc<LoadError>>) {
        // Only the coordinator task writes this slot; handles read it.
        if let Ok(mut slot) = self.last_error.write() {
            *slot = value;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::loader::mock::{MockCompiler, NullCodeWriter};
    use crate::ui::mock::RecordingPresenter;
    use crate::ui::PassthroughLocalizer;

    fn collaborators(compiler: Arc<MockCompiler>, presenter: Arc<RecordingPresenter>) -> Collaborators {
        Collaborators {
            compiler,
            code_writer: Some(Arc::new(NullCodeWriter)),
            localizer: Arc::new(PassthroughLocalizer),
            error_presenter: presenter,
            extension_writer: None,
            extension_opener: None,
        }
    }

    #[tokio::test]
    async fn test_load_success_clears_last_error() {
        let compiler = Arc::new(MockCompiler::with_results(vec![
            Err(LoadError::Other("first failure".to_string())),
            Ok(()),
        ]));
        let presenter = Arc::new(RecordingPresenter::new());
        let handle = ExtensionsCoordinator::spawn(
            CoordinatorConfig::default(),
            collaborators(Arc::clone(&compiler), Arc::clone(&presenter)),
        );

        let project = ProjectHandle::new("p1");
        handle.load(Some(&project)).await.unwrap();
        assert!(handle.last_error().is_some());

        handle.load(Some(&project)).await.unwrap();
        assert!(handle.last_error().is_none());

        assert_eq!(compiler.load_count(), 2);
        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_load_failure_presents_advisory_once() {
        let compiler = Arc::new(MockCompiler::with_results(vec![Err(LoadError::Compile {
            extension: "Physics".to_string(),
            reason: "bad declaration".to_string(),
        })]));
        let presenter = Arc::new(RecordingPresenter::new());
        let handle = ExtensionsCoordinator::spawn(
            CoordinatorConfig::default(),
            collaborators(Arc::clone(&compiler), Arc::clone(&presenter)),
        );

        let project = ProjectHandle::new("p1");
        handle.load(Some(&project)).await.unwrap();

        let notifications = presenter.notifications();
        assert_eq!(notifications.len(), 1);
        assert_eq!(notifications[0].0, LOAD_FAILED_ADVISORY);
        assert!(notifications[0].1.contains("Physics"));

        handle.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_step_without_code_writer_is_silent() {
        let compiler = Arc::new(MockCompiler::new());
        let presenter = Arc::new(RecordingPresenter::new());
        let mut collaborators = collaborators(Arc::clone(&compiler), Arc::clone(&presenter));
        collaborators.code_writer = None;

        let coordinator = ExtensionsCoordinator::new(CoordinatorConfig::default(), collaborators);
        let ok = coordinator.run_load_step(&ProjectHandle::new("p1")).await;

        assert!(ok);
        assert_eq!(compiler.load_count(), 0);
        assert!(presenter.notifications().is_empty());
    }
}
