//! Layer-selection dialog.
//!
//! Lists the viewer's layers with inclusion checkboxes, shows a detail row
//! for the selected layer's isosurface level, and offers STL/OBJ format
//! toggles. Saving prompts for a destination folder; cancelling the prompt
//! aborts silently with nothing written.

use gtk4::prelude::*;
use gtk4::{Align, Box, Button, CheckButton, Label, Orientation, ScrolledWindow, SpinButton};
use isoexport_core::VolumeViewer;
use isoexport_exporter::ExportSession;
use isoexport_settings::SettingsManager;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::warn;

use crate::progress;

/// Open the selection dialog for the viewer's current state.
pub fn present(viewer: &dyn VolumeViewer, app: Option<&gtk4::Application>) {
    let mut session = ExportSession::from_layers(viewer.grid_bounds(), &viewer.layers());

    match SettingsManager::load() {
        Ok(config) => {
            session.set_formats(config.formats);
            session.set_smoothing_sigma(config.smoothing_sigma);
        }
        Err(err) => warn!("Failed to load settings, using defaults: {}", err),
    }

    present_session(session, app);
}

/// Open the selection dialog over an already-built session.
pub fn present_session(session: ExportSession, app: Option<&gtk4::Application>) {
    let session = Rc::new(RefCell::new(session));

    let window = gtk4::Window::builder()
        .title("Choose Layers and Sublayers to save")
        .default_width(320)
        .default_height(420)
        .build();
    if let Some(app) = app {
        window.set_application(Some(app));
    }

    let outer = Box::new(Orientation::Vertical, 8);
    outer.set_margin_top(12);
    outer.set_margin_bottom(12);
    outer.set_margin_start(12);
    outer.set_margin_end(12);

    // Format toggles
    let checkbox_obj = CheckButton::with_label("Export OBJ Files");
    let checkbox_stl = CheckButton::with_label("Export STL Files");
    {
        let formats = session.borrow().formats();
        checkbox_obj.set_active(formats.obj);
        checkbox_stl.set_active(formats.stl);
    }

    let session_obj = session.clone();
    checkbox_obj.connect_toggled(move |btn| {
        session_obj.borrow_mut().set_obj(btn.is_active());
    });
    let session_stl = session.clone();
    checkbox_stl.connect_toggled(move |btn| {
        session_stl.borrow_mut().set_stl(btn.is_active());
    });

    outer.append(&checkbox_obj);
    outer.append(&checkbox_stl);

    // Layer list
    let list = gtk4::ListBox::new();
    for (index, entry) in session.borrow().entries().iter().enumerate() {
        let check = CheckButton::with_label(&entry.stem);
        check.set_active(entry.included);

        let session_row = session.clone();
        check.connect_toggled(move |btn| {
            session_row.borrow_mut().set_included(index, btn.is_active());
        });

        list.append(&check);
    }

    let scroller = ScrolledWindow::builder()
        .hscrollbar_policy(gtk4::PolicyType::Never)
        .child(&list)
        .build();
    scroller.set_vexpand(true);
    outer.append(&scroller);

    // Detail row for the selected layer
    let detail = Box::new(Orientation::Horizontal, 8);
    let selected_label = Label::new(None);
    selected_label.set_hexpand(true);
    selected_label.set_xalign(0.0);

    let iso_label = Label::new(None);
    iso_label.set_halign(Align::End);

    let iso_input = SpinButton::with_range(-10_000_000.0, 10_000_000.0, 1.0);
    iso_input.set_digits(2);
    iso_input.set_sensitive(false);

    detail.append(&selected_label);
    detail.append(&iso_label);
    detail.append(&iso_input);
    outer.append(&detail);

    // Selection drives the detail row. The guard keeps the programmatic
    // set_value from being written back into whichever entry was current
    // before, which would leak levels between layers.
    let current_entry: Rc<Cell<Option<usize>>> = Rc::new(Cell::new(None));
    let syncing = Rc::new(Cell::new(false));

    {
        let session = session.clone();
        let current_entry = current_entry.clone();
        let syncing = syncing.clone();
        let selected_label = selected_label.clone();
        let iso_label = iso_label.clone();
        let iso_input = iso_input.clone();
        list.connect_row_selected(move |_, row| {
            let Some(row) = row else { return };
            let index = row.index();
            if index < 0 {
                return;
            }
            let index = index as usize;

            let session = session.borrow();
            let Some(entry) = session.entries().get(index) else {
                return;
            };

            selected_label.set_text(&entry.stem);
            iso_label.set_text("Isosurface level:");

            syncing.set(true);
            iso_input.set_value(entry.level);
            syncing.set(false);

            iso_input.set_sensitive(true);
            current_entry.set(Some(index));
        });
    }

    {
        let session = session.clone();
        let current_entry = current_entry.clone();
        let syncing = syncing.clone();
        iso_input.connect_value_changed(move |spin| {
            if syncing.get() {
                return;
            }
            if let Some(index) = current_entry.get() {
                session.borrow_mut().update_level(index, spin.value());
            }
        });
    }

    // Save / Cancel
    let buttons = Box::new(Orientation::Horizontal, 8);
    buttons.set_halign(Align::End);

    let button_cancel = Button::with_label("Cancel");
    let button_save = Button::with_label("Save");

    {
        let window = window.clone();
        button_cancel.connect_clicked(move |_| window.close());
    }

    {
        let session = session.clone();
        let window = window.clone();
        let app = app.cloned();
        button_save.connect_clicked(move |_| {
            let mut picker = rfd::FileDialog::new().set_title("Select export directory");
            if let Ok(config) = SettingsManager::load() {
                if let Some(last) = config.last_directory {
                    picker = picker.set_directory(last);
                }
            }

            // Cancelled prompt: abort silently, nothing written.
            let Some(directory) = picker.pick_folder() else {
                return;
            };

            match SettingsManager::load() {
                Ok(mut config) => {
                    config.formats = session.borrow().formats();
                    config.last_directory = Some(directory.clone());
                    if let Err(err) = SettingsManager::store(&config) {
                        warn!("Failed to store settings: {}", err);
                    }
                }
                Err(err) => warn!("Failed to load settings for update: {}", err),
            }

            session.borrow_mut().set_save_path(Some(directory));
            window.close();

            let title = session.borrow().describe_formats();
            if let Some(job) = session.borrow().start() {
                progress::present(job, &title, app.as_ref());
            }
        });
    }

    buttons.append(&button_cancel);
    buttons.append(&button_save);
    outer.append(&buttons);

    window.set_child(Some(&outer));
    window.show();
}
