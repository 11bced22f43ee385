//! The viewer-tool hook.
//!
//! Hosts register the tool against their volume viewer; activating it
//! snapshots the viewer's layers and bounds and opens the selection
//! dialog. The host's GTK main loop must already be running.

use isoexport_core::VolumeViewer;

/// Menu tool that exports the current volumetric view's isosurfaces.
#[derive(Debug, Default)]
pub struct IsosurfaceExportTool;

impl IsosurfaceExportTool {
    /// Identifier the host registers the tool under.
    pub const TOOL_ID: &'static str = "isosurface_exporter";
    /// Menu entry text.
    pub const ACTION_TEXT: &'static str = "Isosurface Exporter";
    /// Hover text.
    pub const TOOL_TIP: &'static str = "Export visible layers as STL/OBJ meshes";

    pub fn new() -> Self {
        Self
    }

    /// Open the export dialog for the viewer's current state.
    pub fn activate(&self, viewer: &dyn VolumeViewer) {
        isoexport_ui::dialog::present(viewer, None);
    }
}
