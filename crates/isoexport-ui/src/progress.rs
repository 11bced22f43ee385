//! Progress dialog for a running export.
//!
//! A modal window fed by polling the worker's event channel on a `glib`
//! timeout. The Cancel button trips the worker's stop flag; the worker
//! finishes its current item and stops before the next one.

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, Label, Orientation, ProgressBar};
use isoexport_exporter::{ExportEvent, ExportJob};
use std::sync::mpsc::TryRecvError;
use std::time::Duration;
use tracing::info;

use crate::helpers::show_error_dialog;

/// Show the progress window for `job`. `formats_label` is the session's
/// format fragment, e.g. `"STL and OBJ "`.
pub fn present(job: ExportJob, formats_label: &str, app: Option<&gtk4::Application>) {
    let window = gtk4::Window::builder()
        .title(format!("{formats_label}Export"))
        .modal(true)
        .default_width(400)
        .default_height(120)
        .resizable(false)
        .build();
    if let Some(app) = app {
        window.set_application(Some(app));
    }

    let vbox = Box::new(Orientation::Vertical, 12);
    vbox.set_margin_top(24);
    vbox.set_margin_bottom(24);
    vbox.set_margin_start(24);
    vbox.set_margin_end(24);

    let status_label = Label::new(Some(&format!("Creating {formats_label}files...")));
    vbox.append(&status_label);

    let progress_bar = ProgressBar::new();
    progress_bar.set_show_text(true);
    vbox.append(&progress_bar);

    let button_box = Box::new(Orientation::Horizontal, 6);
    button_box.set_halign(Align::End);
    let cancel_button = Button::with_label("Cancel");
    button_box.append(&cancel_button);
    vbox.append(&button_box);

    window.set_child(Some(&vbox));
    window.show();

    let cancel = job.cancel.clone();
    {
        let status_label = status_label.clone();
        cancel_button.connect_clicked(move |btn| {
            cancel.cancel();
            btn.set_sensitive(false);
            status_label.set_text("Cancelling after the current layer...");
        });
    }

    let total = job.total.max(1);
    let window_poll = window.clone();
    let progress_poll = progress_bar.clone();
    let status_poll = status_label.clone();

    glib::timeout_add_local(Duration::from_millis(50), move || {
        loop {
            match job.events.try_recv() {
                Ok(ExportEvent::ItemFinished {
                    completed, stem, ..
                }) => {
                    progress_poll.set_fraction(completed as f64 / total as f64);
                    progress_poll.set_text(Some(&format!("{completed} / {total}")));
                    status_poll.set_text(&format!("Saved {stem}"));
                }
                Ok(ExportEvent::ItemFailed { stem, error }) => {
                    show_error_dialog(
                        "Export Failed",
                        &format!("Failed to export '{stem}': {error}"),
                        None,
                    );
                }
                Ok(ExportEvent::Finished { written, cancelled }) => {
                    info!("Export finished: {} written, cancelled={}", written, cancelled);
                    window_poll.close();
                    return glib::ControlFlow::Break;
                }
                Err(TryRecvError::Empty) => return glib::ControlFlow::Continue,
                Err(TryRecvError::Disconnected) => {
                    window_poll.close();
                    return glib::ControlFlow::Break;
                }
            }
        }
    });
}
