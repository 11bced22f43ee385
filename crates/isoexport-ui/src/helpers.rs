//! Small shared widget helpers.

use gtk4::prelude::*;
use gtk4::{ButtonsType, MessageDialog, MessageType};

/// Show a modal-ish error dialog with a title and detail message.
pub fn show_error_dialog(title: &str, message: &str, parent: Option<&gtk4::Window>) {
    let mut builder = MessageDialog::builder()
        .message_type(MessageType::Error)
        .buttons(ButtonsType::Ok)
        .text(title)
        .secondary_text(message);

    if let Some(win) = parent {
        builder = builder.transient_for(win).modal(true);
    }

    let dialog = builder.build();
    dialog.connect_response(|d, _| d.destroy());
    dialog.show();
}
