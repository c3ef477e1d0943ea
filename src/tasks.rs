use std::sync::{Arc, Mutex};
use std::thread::JoinHandle;

use crate::data::error::ApiError;
use crate::data::store::SampleStore;
use crate::state::command::{Command, Outcome};

type Slot = Arc<Mutex<Option<Outcome>>>;

/// A request running on its own thread.
struct PendingTask {
    /// Kept so a worker that dies without writing its slot still reports back.
    command: Command,
    slot: Slot,
    handle: JoinHandle<()>,
}

/// Runs store requests on background threads so the UI stays responsive.
/// Finished outcomes are picked up by polling [`TaskRunner::drain`] once per frame.
pub struct TaskRunner {
    store: Arc<dyn SampleStore>,
    pending: Vec<PendingTask>,
}

impl TaskRunner {
    pub fn new(store: Arc<dyn SampleStore>) -> Self {
        Self {
            store,
            pending: Vec::new(),
        }
    }

    pub fn dispatch(&mut self, command: Command) {
        if command.is_mutation() {
            tracing::info!("Sending {command:?}");
        } else {
            tracing::debug!("Dispatching {command:?}");
        }
        let slot: Slot = Arc::new(Mutex::new(None));
        let slot_clone = Arc::clone(&slot);
        let store = Arc::clone(&self.store);
        let worker_command = command.clone();

        let handle = std::thread::spawn(move || {
            let outcome = worker_command.execute(store.as_ref());
            if let Ok(mut guard) = slot_clone.lock() {
                *guard = Some(outcome);
            }
        });

        self.pending.push(PendingTask {
            command,
            slot,
            handle,
        });
    }

    pub fn dispatch_all(&mut self, commands: impl IntoIterator<Item = Command>) {
        for command in commands {
            self.dispatch(command);
        }
    }

    /// Take every outcome that has finished since the last call, in dispatch order.
    /// A worker that exited without an outcome is reported as a failed request.
    pub fn drain(&mut self) -> Vec<Outcome> {
        let mut finished = Vec::new();
        let mut still_running = Vec::with_capacity(self.pending.len());

        for task in self.pending.drain(..) {
            // Read `is_finished` before the slot: a worker writes its slot
            // before exiting, so an empty slot after exit means it was lost.
            let exited = task.handle.is_finished();
            let outcome = task
                .slot
                .lock()
                .map(|mut guard| guard.take())
                .unwrap_or_else(|poisoned| poisoned.into_inner().take());

            match outcome {
                Some(outcome) => finished.push(outcome),
                None if exited => {
                    tracing::error!("Request worker for {:?} exited without a result", task.command);
                    finished.push(task.command.into_failure(ApiError::WorkerLost));
                }
                None => still_running.push(task),
            }
        }

        self.pending = still_running;
        finished
    }

    pub fn has_pending(&self) -> bool {
        !self.pending.is_empty()
    }
}
