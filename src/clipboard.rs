//! Clipboard module for hyfi
//!
//! Copies the committed selection with support for:
//! - System clipboard (via arboard)
//! - OSC 52 escape sequences (for remote terminals)
//! - Auto mode (system with OSC 52 fallback)

mod backend;
pub mod clipboard_events;

pub use backend::{ClipboardError, copy_to_clipboard};
