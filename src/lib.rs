//! hyfi library - Hybrid single/multi-select filter for the terminal
//!
//! This library exposes the core functionality of hyfi for the binary and for testing.

pub mod app;
pub mod clipboard;
pub mod config;
pub mod error;
pub mod filter;
pub mod layout;
pub mod notification;
pub mod options;

#[cfg(test)]
pub mod test_utils;
pub mod theme;
pub mod widgets;

// Re-export commonly used types for convenience
pub use app::{App, OutputMode};
pub use config::Config;
pub use filter::{FilterProps, FilterState, SelectionMode};
pub use options::FilterOption;
