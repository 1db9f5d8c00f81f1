use std::path::PathBuf;
use std::sync::Arc;

use tokio::sync::{mpsc, Semaphore};
use tracing::{debug, error};

use crate::controller::pipeline::{self, FormInput};
use crate::controller::{ControllerEvent, ControllerPhase};
use crate::error::{RecipeError, Result};
use crate::store::RecordSink;

/// Runs calculations off the form's task, at most one at a time.
///
/// A submission while another calculation is in flight is rejected with
/// [`RecipeError::Busy`]. Progress and results arrive on the event channel
/// returned by [`TaskController::new`]; the slot is free again by the time
/// `Finished` is received.
pub struct TaskController {
    output_dir: PathBuf,
    sink: Arc<dyn RecordSink>,
    slot: Arc<Semaphore>,
    events: mpsc::UnboundedSender<ControllerEvent>,
}

impl TaskController {
    pub fn new(
        output_dir: PathBuf,
        sink: Arc<dyn RecordSink>,
    ) -> (Self, mpsc::UnboundedReceiver<ControllerEvent>) {
        let (events, rx) = mpsc::unbounded_channel();
        let controller = Self {
            output_dir,
            sink,
            slot: Arc::new(Semaphore::new(1)),
            events,
        };
        (controller, rx)
    }

    pub fn is_busy(&self) -> bool {
        self.slot.available_permits() == 0
    }

    /// Start a calculation in the background. Must be called inside a tokio runtime.
    pub fn submit(&self, input: FormInput) -> Result<()> {
        let permit = self
            .slot
            .clone()
            .try_acquire_owned()
            .map_err(|_| RecipeError::Busy)?;

        let _ = self.events.send(ControllerEvent::Phase(ControllerPhase::Calculating));

        let events = self.events.clone();
        let progress = self.events.clone();
        let sink = Arc::clone(&self.sink);
        let output_dir = self.output_dir.clone();

        tokio::spawn(async move {
            let worker = tokio::spawn(async move {
                let on_phase = move |phase| {
                    let _ = progress.send(ControllerEvent::Phase(phase));
                };
                pipeline::run_calculation_with_progress(input, &output_dir, sink.as_ref(), &on_phase)
                    .await
            });

            let result = match worker.await {
                Ok(result) => result,
                Err(join_err) => {
                    error!(error = %join_err, "calculation task failed");
                    Err(RecipeError::TaskFailed(join_err.to_string()))
                }
            };

            drop(permit);
            debug!(ok = result.is_ok(), "calculation finished");
            let _ = events.send(ControllerEvent::Finished(result));
        });

        Ok(())
    }
}
