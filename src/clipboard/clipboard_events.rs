use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::backend::copy_to_clipboard;
use crate::app::App;
use crate::config::ClipboardBackend;

/// Ctrl+Y copies the committed selection, one identifier per line
pub fn handle_clipboard_key(app: &mut App, key: KeyEvent, backend: ClipboardBackend) -> bool {
    if key.code == KeyCode::Char('y') && key.modifiers.contains(KeyModifiers::CONTROL) {
        copy_selection(app, backend);
        return true;
    }

    false
}

fn copy_selection(app: &mut App, backend: ClipboardBackend) {
    if app.props.value.is_empty() {
        app.notification.show("Nothing selected to copy");
        return;
    }

    let text = app.props.value.join("\n");
    match copy_to_clipboard(&text, backend) {
        Ok(()) => app.notification.show("Copied selection!"),
        Err(_) => app.notification.show_warning("Clipboard unavailable"),
    }
}
