//! Standalone application wrapper.
//!
//! Hosts normally open the dialog from their own GTK main loop via
//! [`dialog::present`](crate::dialog::present); this wrapper provides a
//! main loop of its own for development and demos.

use gtk4::prelude::*;
use isoexport_core::VolumeViewer;
use std::sync::Arc;

const APP_ID: &str = "io.github.isoexport.Exporter";

/// Run a GTK application whose sole window is the export dialog over the
/// given viewer.
pub fn run(viewer: Arc<dyn VolumeViewer>) -> glib::ExitCode {
    let app = gtk4::Application::builder().application_id(APP_ID).build();

    app.connect_activate(move |app| {
        crate::dialog::present(viewer.as_ref(), Some(app));
    });

    app.run()
}
