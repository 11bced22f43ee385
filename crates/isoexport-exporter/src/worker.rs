//! Background batch worker.
//!
//! One OS thread exports the selected entries sequentially, emitting an
//! event after each completed item. The stop flag is checked once per
//! iteration, so cancellation lands between items, never in the middle of
//! one. A failing item is reported and ends the run; nothing is retried.

use crate::session::ExportEntry;
use crate::task;
use isoexport_core::{FormatSelection, GridBounds};
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, warn};

/// Cooperative stop flag shared between the worker and the UI.
///
/// Write-once-read-many per run: the UI's cancel button sets it, the
/// worker polls it before each item.
#[derive(Clone, Default)]
pub struct CancelToken(Arc<AtomicBool>);

impl CancelToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Progress events emitted by the worker.
#[derive(Debug)]
pub enum ExportEvent {
    /// One entry finished; `completed` counts items done so far.
    ItemFinished {
        index: usize,
        completed: usize,
        stem: String,
        paths: Vec<PathBuf>,
    },
    /// An entry failed; the run stops after this event.
    ItemFailed { stem: String, error: String },
    /// Terminal event: the loop ended, normally or by cancellation.
    Finished { written: usize, cancelled: bool },
}

/// Everything the worker thread needs, detached from the session.
pub struct ExportPlan {
    pub entries: Vec<ExportEntry>,
    pub bounds: GridBounds,
    pub formats: FormatSelection,
    pub smoothing_sigma: f64,
    pub directory: PathBuf,
}

/// A running export: the receiving end of the worker's event channel plus
/// its stop flag.
pub struct ExportJob {
    pub total: usize,
    pub cancel: CancelToken,
    pub events: Receiver<ExportEvent>,
    handle: JoinHandle<()>,
}

impl ExportJob {
    /// Block until the worker thread exits. Used by tests and headless
    /// callers; the dialog polls `events` instead.
    pub fn join(self) {
        let _ = self.handle.join();
    }
}

/// Spawn the batch worker with a fresh stop flag.
pub fn spawn(plan: ExportPlan) -> ExportJob {
    spawn_with_cancel(plan, CancelToken::new())
}

/// Spawn the batch worker with a caller-supplied stop flag.
pub fn spawn_with_cancel(plan: ExportPlan, cancel: CancelToken) -> ExportJob {
    let (tx, rx) = mpsc::channel();
    let total = plan.entries.len();
    let token = cancel.clone();
    let handle = thread::spawn(move || run(plan, token, tx));

    ExportJob {
        total,
        cancel,
        events: rx,
        handle,
    }
}

fn run(plan: ExportPlan, cancel: CancelToken, tx: Sender<ExportEvent>) {
    let mut written = 0usize;
    let mut cancelled = false;

    for (index, entry) in plan.entries.iter().enumerate() {
        if cancel.is_cancelled() {
            debug!("Export cancelled after {} of {} items", written, plan.entries.len());
            cancelled = true;
            break;
        }

        match task::export_entry(
            entry,
            &plan.bounds,
            plan.formats,
            plan.smoothing_sigma,
            &plan.directory,
        ) {
            Ok(paths) => {
                written += 1;
                let _ = tx.send(ExportEvent::ItemFinished {
                    index,
                    completed: written,
                    stem: entry.stem.clone(),
                    paths,
                });
            }
            Err(err) => {
                warn!("Export of '{}' failed: {}", entry.stem, err);
                let _ = tx.send(ExportEvent::ItemFailed {
                    stem: entry.stem.clone(),
                    error: err.to_string(),
                });
                let _ = tx.send(ExportEvent::Finished {
                    written,
                    cancelled: false,
                });
                return;
            }
        }
    }

    let _ = tx.send(ExportEvent::Finished { written, cancelled });
}
