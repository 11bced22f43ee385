//! # isoexport
//!
//! Exports a volume viewer's isosurfaces to STL/OBJ mesh files.
//!
//! The tool adds a menu action to a 3D-data-visualization host: it lists
//! the current view's layers, lets the user pick per-layer isosurface
//! levels and output formats, and writes one mesh file pair per selected
//! layer into a chosen directory, off the GUI thread with a cancellable
//! progress dialog.
//!
//! ## Architecture
//!
//! The workspace is organized as one crate per concern:
//!
//! 1. **isoexport-core** - shared types, the host-viewer traits, errors
//! 2. **isoexport-volume** - smoothing, spatial grid, isosurface extraction
//! 3. **isoexport-meshio** - triangle meshes and STL/OBJ writers
//! 4. **isoexport-exporter** - session, per-layer pipeline, batch worker
//! 5. **isoexport-settings** - persisted user preferences
//! 6. **isoexport-ui** - GTK4 selection and progress dialogs
//! 7. **isoexport** - this facade plus the demo binary

pub mod tool;

pub use isoexport_core::{
    AxisRange, ExportError, FormatSelection, GridBounds, LayerColor, MeshFormat, Result,
    ScalarField, ValueRange, VolumeLayer, VolumeViewer,
};
pub use isoexport_exporter::{
    export_entry, CancelToken, ExportEntry, ExportEvent, ExportJob, ExportSession,
};
pub use isoexport_meshio::{read_stl, write_obj, write_stl, Triangle3D, TriangleMesh};
pub use isoexport_settings::{ExportConfig, SettingsManager};
pub use isoexport_volume::{extract_isosurface, gaussian_smooth, UniformGrid};
pub use tool::IsosurfaceExportTool;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Initialize logging with the default configuration
///
/// Sets up structured logging with console output, `RUST_LOG` environment
/// variable support, and thread names (the export worker shows up next to
/// the GTK main thread in the log).
pub fn init_logging() -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::from_default_env().add_directive(tracing::Level::INFO.into());

    let fmt_layer = fmt::layer()
        .with_writer(std::io::stdout)
        .with_target(true)
        .with_level(true)
        .with_thread_names(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();

    Ok(())
}
