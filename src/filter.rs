//! Hybrid single/multi-select filter
//!
//! `FilterState` is the staged-selection controller; `filter_events` turns terminal
//! input into controller operations and `filter_render` draws the trigger and menu.

pub mod filter_events;
mod filter_matcher;
pub mod filter_render;
mod filter_state;
pub mod focus;
pub mod selection;

pub use filter_state::{CloseReason, FilterProps, FilterState, SelectionMode};
pub use focus::{FocusDirection, FocusTarget};
