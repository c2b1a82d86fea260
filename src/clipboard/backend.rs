use std::io::{self, Write};

use arboard::Clipboard;
use base64::{Engine as _, engine::general_purpose::STANDARD};

use crate::config::ClipboardBackend;

#[derive(Debug, PartialEq, Eq)]
pub enum ClipboardError {
    SystemUnavailable,
    WriteError,
}

pub fn copy_to_clipboard(text: &str, backend: ClipboardBackend) -> Result<(), ClipboardError> {
    match backend {
        ClipboardBackend::System => copy_system(text),
        ClipboardBackend::Osc52 => copy_osc52(text),
        ClipboardBackend::Auto => copy_system(text).or_else(|_| copy_osc52(text)),
    }
}

fn copy_system(text: &str) -> Result<(), ClipboardError> {
    let mut clipboard = Clipboard::new().map_err(|_| ClipboardError::SystemUnavailable)?;
    clipboard
        .set_text(text)
        .map_err(|_| ClipboardError::WriteError)
}

/// Write the OSC 52 sequence to stdout for the terminal to pick up
fn copy_osc52(text: &str) -> Result<(), ClipboardError> {
    let mut stdout = io::stdout();
    stdout
        .write_all(encode_osc52(text).as_bytes())
        .and_then(|_| stdout.flush())
        .map_err(|_| ClipboardError::WriteError)
}

/// `ESC ] 52 ; c ; <base64> BEL`
pub fn encode_osc52(text: &str) -> String {
    format!("\x1b]52;c;{}\x07", STANDARD.encode(text))
}
