//! Export orchestration: the selection session, the per-layer export
//! operation, and the background batch worker.
//!
//! The session is built when the export dialog opens and owns the dialog's
//! state (entries, format flags, destination). Saving hands the selected
//! entries to a worker thread that exports them one by one, reporting
//! progress over a channel and honoring a cooperative stop flag between
//! items.

pub mod session;
pub mod task;
pub mod worker;

pub use session::{ExportEntry, ExportSession, DEFAULT_SMOOTHING_SIGMA};
pub use task::export_entry;
pub use worker::{CancelToken, ExportEvent, ExportJob, ExportPlan};
