//! Keyboard focus within the open menu
//!
//! Focus indexes into the *visible* rows (after search filtering) and sits either on a
//! row body or on that row's checkbox cell.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    /// Nothing focusable, only when no rows are visible
    #[default]
    None,
    Row(usize),
    Checkbox(usize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FocusDirection {
    Next,
    Previous,
    IntoCheckbox,
    OutOfCheckbox,
}

impl FocusTarget {
    /// Row focus on `index`, or `None` when there are no rows
    pub fn first_or_none(visible_len: usize, index: usize) -> Self {
        if visible_len == 0 {
            FocusTarget::None
        } else {
            FocusTarget::Row(index.min(visible_len - 1))
        }
    }

    /// Visible-row index of the focus, regardless of column
    pub fn index(self) -> Option<usize> {
        match self {
            FocusTarget::None => None,
            FocusTarget::Row(i) | FocusTarget::Checkbox(i) => Some(i),
        }
    }

    pub fn is_checkbox(self) -> bool {
        matches!(self, FocusTarget::Checkbox(_))
    }

    /// Move focus one step
    ///
    /// Clamps at both ends of the list. `IntoCheckbox` only applies when rows carry a
    /// checkbox. Moving between rows keeps the current column.
    pub fn moved(self, direction: FocusDirection, visible_len: usize, has_checkbox: bool) -> Self {
        if visible_len == 0 {
            return FocusTarget::None;
        }

        let last = visible_len - 1;
        match (self, direction) {
            (FocusTarget::None, _) => FocusTarget::Row(0),
            (FocusTarget::Row(i), FocusDirection::Next) => FocusTarget::Row((i + 1).min(last)),
            (FocusTarget::Row(i), FocusDirection::Previous) => {
                FocusTarget::Row(i.saturating_sub(1))
            }
            (FocusTarget::Checkbox(i), FocusDirection::Next) => {
                FocusTarget::Checkbox((i + 1).min(last))
            }
            (FocusTarget::Checkbox(i), FocusDirection::Previous) => {
                FocusTarget::Checkbox(i.saturating_sub(1))
            }
            (FocusTarget::Row(i), FocusDirection::IntoCheckbox) if has_checkbox => {
                FocusTarget::Checkbox(i)
            }
            (FocusTarget::Checkbox(i), FocusDirection::OutOfCheckbox) => FocusTarget::Row(i),
            (focus, _) => focus,
        }
    }
}
