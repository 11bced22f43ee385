// On Windows, hide the console window for GUI applications
#![cfg_attr(
    all(target_os = "windows", not(debug_assertions)),
    windows_subsystem = "windows"
)]

mod demo;

use isoexport::init_logging;
use std::sync::Arc;

fn main() -> anyhow::Result<()> {
    // Initialize logging
    init_logging()?;

    // Launch the export dialog over a synthetic demo volume. Hosts embed
    // the tool via `IsosurfaceExportTool` instead of running this binary.
    isoexport_ui::app::run(Arc::new(demo::DemoViewer::new()));

    Ok(())
}
