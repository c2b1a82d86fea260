use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use tui_textarea::Input;

use super::focus::FocusDirection;
use super::filter_state::CloseReason;
use crate::app::App;

/// Handle a key press aimed at the filter, returns true if it was consumed
pub fn handle_filter_key(app: &mut App, key: KeyEvent) -> bool {
    if app.filter.is_open() {
        handle_open_key(app, key);
        true
    } else {
        handle_closed_key(app, key)
    }
}

fn handle_closed_key(app: &mut App, key: KeyEvent) -> bool {
    match key.code {
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down => {
            app.filter.open();
            true
        }
        _ => false,
    }
}

fn handle_open_key(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => {
            app.filter.cancel();
        }
        KeyCode::Up => {
            app.filter.move_focus(FocusDirection::Previous);
        }
        KeyCode::Down => {
            app.filter.move_focus(FocusDirection::Next);
        }
        KeyCode::Right => {
            app.filter.move_focus(FocusDirection::IntoCheckbox);
        }
        KeyCode::Left => {
            app.filter.move_focus(FocusDirection::OutOfCheckbox);
        }
        KeyCode::Enter => {
            let change = app.filter.activate_focused();
            app.on_change(change);
        }
        KeyCode::Char('s') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            if app.filter.mode().requires_apply() {
                let change = app.filter.commit();
                app.on_change(change);
            }
        }
        KeyCode::Char(' ') if app.filter.focus().is_checkbox() => {
            app.filter.toggle_focused();
        }
        KeyCode::Char(' ') if !app.filter.searchable() => {
            if app.filter.mode().is_multiple() {
                app.filter.toggle_focused();
            } else {
                let change = app.filter.activate_focused();
                app.on_change(change);
            }
        }
        _ => {
            if app.filter.searchable() {
                let input = Input::from(key);
                if app.filter.search_textarea_mut().input(input) {
                    app.filter.on_search_input_changed();
                }
            }
        }
    }
}

/// Press or release of the configured modifier key
///
/// Returns true when the event was the modifier itself. Release is reported only by
/// terminals that support keyboard enhancement.
pub fn handle_modifier_key(app: &mut App, key: KeyEvent) -> bool {
    let KeyCode::Modifier(code) = key.code else {
        return false;
    };
    if !app.modifier.matches_code(code) {
        return false;
    }

    match key.kind {
        KeyEventKind::Press | KeyEventKind::Repeat => app.filter.modifier_key_down(),
        KeyEventKind::Release => app.filter.modifier_key_up(),
    }
    true
}

/// Input focus left the terminal window
pub fn handle_focus_lost(app: &mut App) {
    app.filter.release_modifier();
    if app.close_on_focus_lost {
        app.filter.close(CloseReason::FocusLost);
    }
}

/// Bracketed paste goes straight into the search input
pub fn handle_paste(app: &mut App, text: &str) {
    if !app.filter.is_open() || !app.filter.searchable() {
        return;
    }
    let single_line: String = text.lines().collect::<Vec<_>>().join(" ");
    app.filter.search_textarea_mut().insert_str(&single_line);
    app.filter.on_search_input_changed();
}

#[cfg(test)]
#[path = "filter_events_tests.rs"]
mod filter_events_tests;
