//! Mouse click handling
//!
//! Maps clicks on the trigger, option rows, checkboxes and toolbar buttons onto filter
//! operations. A click anywhere outside the open menu closes it.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::filter::CloseReason;
use crate::filter::filter_render::CHECKBOX_WIDTH;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    if !app.filter.is_open() {
        if region == Some(Region::Trigger) {
            app.filter.open();
        }
        return;
    }

    match region {
        Some(Region::ApplyButton) => {
            let change = app.filter.commit();
            app.on_change(change);
        }
        Some(Region::CancelButton) | Some(Region::Trigger) => app.filter.cancel(),
        Some(Region::OptionList) => click_option_list(app, mouse),
        Some(Region::SearchInput) | Some(Region::FilterMenu) => {}
        Some(Region::SelectionPane) | None => app.filter.close(CloseReason::Outside),
    }
}

fn click_option_list(app: &mut App, mouse: MouseEvent) {
    let Some(list_rect) = app.layout_regions.option_list else {
        return;
    };

    if mouse.row < list_rect.y || mouse.row >= list_rect.y.saturating_add(list_rect.height) {
        return;
    }

    let relative_y = mouse.row.saturating_sub(list_rect.y) as usize;
    let clicked_row = app.filter.scroll_offset() + relative_y;
    let Some(value) = app
        .filter
        .visible_option(clicked_row)
        .map(|option| option.value.clone())
    else {
        return;
    };

    let on_checkbox = mouse.column < list_rect.x.saturating_add(CHECKBOX_WIDTH - 1);
    if app.filter.mode().is_multiple() && on_checkbox {
        app.filter.focus_checkbox(clicked_row);
        app.filter.toggle_multiple(&value);
        return;
    }

    app.filter.focus_row(clicked_row);

    // The click carries its own modifier state, which may differ from the last key event
    let modifier_in_click = mouse.modifiers.contains(app.modifier.key_modifiers());
    let transient = modifier_in_click && !app.filter.is_multi_key_held();
    if transient {
        app.filter.modifier_key_down();
    }

    let change = app.filter.row_activate(&value);

    if transient {
        app.filter.modifier_key_up();
    }
    app.on_change(change);
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
