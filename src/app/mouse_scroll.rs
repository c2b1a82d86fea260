//! Mouse wheel handling
//!
//! Scrolling over the open option list moves the focus one row at a time.

use super::app_state::App;
use crate::filter::FocusDirection;
use crate::layout::Region;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollDirection {
    Up,
    Down,
}

pub fn handle_scroll(app: &mut App, region: Option<Region>, direction: ScrollDirection) {
    if !matches!(region, Some(Region::OptionList)) {
        return;
    }

    let focus_direction = match direction {
        ScrollDirection::Up => FocusDirection::Previous,
        ScrollDirection::Down => FocusDirection::Next,
    };
    app.filter.move_focus(focus_direction);
}
