//! Shared test utilities for hyfi
//!
//! This module provides common test fixtures and helper functions
//! used across multiple test modules.

#[cfg(test)]
pub mod test_helpers {
    use crate::app::App;
    use crate::config::Config;
    use crate::filter::{FilterProps, SelectionMode};
    use crate::options::FilterOption;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers, ModifierKeyCode,
        MouseButton, MouseEvent, MouseEventKind,
    };

    /// Options shared by most app-level tests
    pub fn sample_options() -> Vec<FilterOption> {
        vec![
            FilterOption::new("one", "Option One"),
            FilterOption::new("two", "Option Two"),
            FilterOption::new("three", "Option Three"),
        ]
    }

    /// Searchable multiple-mode app with the given committed value
    pub fn test_app(value: &[&str]) -> App {
        test_app_with_mode(SelectionMode::Multiple, true, value)
    }

    pub fn test_app_with_mode(mode: SelectionMode, searchable: bool, value: &[&str]) -> App {
        let props = FilterProps {
            options: sample_options(),
            value: value.iter().map(|v| v.to_string()).collect(),
            mode,
            searchable,
        };
        App::new(props, &Config::default())
    }

    /// Helper to create a KeyEvent without modifiers
    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    /// Helper to create a KeyEvent with specific modifiers
    pub fn key_with_mods(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    /// Bare modifier key event as reported with keyboard enhancement enabled
    pub fn modifier_event(code: ModifierKeyCode, kind: KeyEventKind) -> KeyEvent {
        KeyEvent {
            code: KeyCode::Modifier(code),
            modifiers: KeyModifiers::empty(),
            kind,
            state: KeyEventState::empty(),
        }
    }

    /// Left click at the given cell
    pub fn click(column: u16, row: u16, modifiers: KeyModifiers) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers,
        }
    }
}
