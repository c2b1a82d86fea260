use ratatui::style::Style;
use tui_textarea::TextArea;

use super::filter_matcher::FilterMatcher;
use super::focus::{FocusDirection, FocusTarget};
use super::selection::StagedSelection;
use crate::options::FilterOption;
use crate::theme;

/// How many options a committed value may hold and when it is committed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SelectionMode {
    /// At most one identifier. With `commit_on_select`, picking a row commits at once.
    Single { commit_on_select: bool },
    /// Any number of identifiers, committed through Apply.
    #[default]
    Multiple,
}

impl SelectionMode {
    pub fn from_flags(multiple: bool, commit_on_select: bool) -> Self {
        if multiple {
            SelectionMode::Multiple
        } else {
            SelectionMode::Single { commit_on_select }
        }
    }

    pub fn is_multiple(self) -> bool {
        matches!(self, SelectionMode::Multiple)
    }

    /// Whether the menu shows Apply / Cancel
    pub fn requires_apply(self) -> bool {
        match self {
            SelectionMode::Single { commit_on_select } => !commit_on_select,
            SelectionMode::Multiple => true,
        }
    }
}

/// Why the menu is being closed without an explicit Apply or Cancel
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    /// The terminal (or the menu's input surface) lost focus
    FocusLost,
    /// Interaction outside the open menu
    Outside,
    /// The owner is discarding the filter
    Unmount,
}

/// Owner-supplied configuration of one filter
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterProps {
    pub options: Vec<FilterOption>,
    /// Committed selection, owned by the caller
    pub value: Vec<String>,
    pub mode: SelectionMode,
    pub searchable: bool,
}

fn create_search_textarea() -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_cursor_line_style(Style::default());
    textarea.set_cursor_style(theme::palette::CURSOR);
    textarea.set_placeholder_text("Search…");
    textarea
}

/// Staged selection controller for a hybrid single/multi-select menu
///
/// The committed value belongs to the owner: every open session copies it into a
/// staged selection, and `commit` hands the staged selection back as the one outbound
/// change notification. The owner re-supplies the new value through [`set_value`].
///
/// [`set_value`]: FilterState::set_value
pub struct FilterState {
    options: Vec<FilterOption>,
    mode: SelectionMode,
    searchable: bool,
    committed: Vec<String>,
    staged: StagedSelection,
    open: bool,
    focus: FocusTarget,
    multi_key_held: bool,
    awaiting_value: bool,
    unmounted: bool,
    visible: Vec<usize>,
    search_textarea: TextArea<'static>,
    matcher: FilterMatcher,
    scroll_offset: usize,
    visible_count: usize,
}

impl FilterState {
    pub fn new(props: &FilterProps) -> Self {
        Self {
            options: props.options.clone(),
            mode: props.mode,
            searchable: props.searchable,
            committed: props.value.clone(),
            staged: StagedSelection::new(),
            open: false,
            focus: FocusTarget::None,
            multi_key_held: false,
            awaiting_value: false,
            unmounted: false,
            visible: (0..props.options.len()).collect(),
            search_textarea: create_search_textarea(),
            matcher: FilterMatcher::new(),
            scroll_offset: 0,
            visible_count: 10,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    pub fn searchable(&self) -> bool {
        self.searchable
    }

    pub fn options(&self) -> &[FilterOption] {
        &self.options
    }

    pub fn committed(&self) -> &[String] {
        &self.committed
    }

    pub fn staged(&self) -> &StagedSelection {
        &self.staged
    }

    pub fn focus(&self) -> FocusTarget {
        self.focus
    }

    pub fn is_multi_key_held(&self) -> bool {
        self.multi_key_held
    }

    pub fn is_awaiting_value(&self) -> bool {
        self.awaiting_value
    }

    pub fn is_unmounted(&self) -> bool {
        self.unmounted
    }

    fn accepts_input(&self) -> bool {
        self.open && !self.unmounted
    }

    /// Re-supply the committed value after a change was handed to the owner
    ///
    /// An open session keeps its staged selection; the new value seeds the next one.
    pub fn set_value(&mut self, value: Vec<String>) {
        if self.unmounted {
            return;
        }
        self.committed = value;
        self.awaiting_value = false;
    }

    /// Start a staged session seeded from the committed value
    pub fn open(&mut self) {
        if self.unmounted || self.open {
            return;
        }
        if self.awaiting_value {
            #[cfg(debug_assertions)]
            log::debug!("Ignoring open: committed value not yet re-supplied");
            return;
        }

        self.staged = StagedSelection::from_values(self.committed.iter().cloned());
        if !self.mode.is_multiple() {
            self.staged.truncate_to_first();
        }

        self.search_textarea.select_all();
        self.search_textarea.cut();
        self.visible = (0..self.options.len()).collect();
        self.scroll_offset = 0;
        self.multi_key_held = false;
        self.focus = self.initial_focus();
        self.open = true;
        self.adjust_scroll_to_focus();

        #[cfg(debug_assertions)]
        log::debug!(
            "Filter opened: {} staged, focus {:?}",
            self.staged.len(),
            self.focus
        );
    }

    fn initial_focus(&self) -> FocusTarget {
        let first_staged_row = self
            .staged
            .iter()
            .find_map(|value| self.visible_position(value));

        match first_staged_row {
            Some(pos) => FocusTarget::Row(pos),
            None => FocusTarget::first_or_none(self.visible.len(), 0),
        }
    }

    fn visible_position(&self, value: &str) -> Option<usize> {
        self.visible
            .iter()
            .position(|&idx| self.options[idx].value == value)
    }

    /// Pick exactly one identifier in single mode
    ///
    /// Commits immediately when the mode is configured to do so.
    pub fn select_single(&mut self, value: &str) -> Option<Vec<String>> {
        if !self.accepts_input() {
            return None;
        }
        let SelectionMode::Single { commit_on_select } = self.mode else {
            return None;
        };

        self.staged.replace_with(value);
        if commit_on_select {
            self.commit()
        } else {
            None
        }
    }

    /// Add or remove one identifier in multiple mode
    pub fn toggle_multiple(&mut self, value: &str) {
        if !self.accepts_input() || !self.mode.is_multiple() {
            return;
        }
        self.staged.toggle(value);
    }

    /// Activation of a row body (not its checkbox)
    ///
    /// In multiple mode a plain activation is a fresh single pick that commits at once;
    /// with the modifier held it toggles the row into or out of the staged selection.
    pub fn row_activate(&mut self, value: &str) -> Option<Vec<String>> {
        if !self.accepts_input() {
            return None;
        }

        match self.mode {
            SelectionMode::Single { .. } => self.select_single(value),
            SelectionMode::Multiple if self.multi_key_held => {
                self.toggle_multiple(value);
                None
            }
            SelectionMode::Multiple => {
                self.staged.replace_with(value);
                self.commit()
            }
        }
    }

    pub fn modifier_key_down(&mut self) {
        if self.accepts_input() {
            self.multi_key_held = true;
        }
    }

    pub fn modifier_key_up(&mut self) {
        self.multi_key_held = false;
    }

    /// Force-release the modifier, used when the input surface loses focus
    pub fn release_modifier(&mut self) {
        self.multi_key_held = false;
    }

    pub fn move_focus(&mut self, direction: FocusDirection) {
        if !self.accepts_input() {
            return;
        }
        self.focus = self
            .focus
            .moved(direction, self.visible.len(), self.mode.is_multiple());
        self.adjust_scroll_to_focus();
    }

    /// Focus a visible row directly (pointer interaction)
    pub fn focus_row(&mut self, visible_index: usize) {
        if !self.accepts_input() || visible_index >= self.visible.len() {
            return;
        }
        self.focus = FocusTarget::Row(visible_index);
        self.adjust_scroll_to_focus();
    }

    /// Focus the checkbox of a visible row directly (pointer interaction)
    pub fn focus_checkbox(&mut self, visible_index: usize) {
        if !self.accepts_input() || !self.mode.is_multiple() || visible_index >= self.visible.len()
        {
            return;
        }
        self.focus = FocusTarget::Checkbox(visible_index);
        self.adjust_scroll_to_focus();
    }

    /// Restrict visible rows to labels containing `query`, ignoring case
    ///
    /// Staged selection is untouched; focus resets to the first match.
    pub fn search(&mut self, query: &str) {
        if !self.accepts_input() {
            return;
        }
        self.visible = self.matcher.filter(query, &self.options);
        self.focus = FocusTarget::first_or_none(self.visible.len(), 0);
        self.scroll_offset = 0;
    }

    pub fn search_query(&self) -> &str {
        self.search_textarea
            .lines()
            .first()
            .map(|s| s.as_str())
            .unwrap_or("")
    }

    pub fn search_textarea_mut(&mut self) -> &mut TextArea<'static> {
        &mut self.search_textarea
    }

    pub fn on_search_input_changed(&mut self) {
        let query = self.search_query().to_string();
        self.search(&query);
    }

    /// Hand the staged selection to the owner and close
    ///
    /// Returns the full new selection in staged insertion order. The committed value is
    /// left alone until the owner calls [`set_value`](FilterState::set_value).
    pub fn commit(&mut self) -> Option<Vec<String>> {
        if !self.accepts_input() {
            return None;
        }

        let selection = self.staged.to_vec();
        self.end_session();
        self.awaiting_value = true;

        #[cfg(debug_assertions)]
        log::debug!("Filter committed: {:?}", selection);

        Some(selection)
    }

    /// Discard the staged selection and close
    pub fn cancel(&mut self) {
        if !self.accepts_input() {
            return;
        }
        self.end_session();

        #[cfg(debug_assertions)]
        log::debug!("Filter cancelled");
    }

    pub fn close(&mut self, reason: CloseReason) {
        match reason {
            CloseReason::Unmount => {
                self.unmounted = true;
                #[cfg(debug_assertions)]
                log::debug!("Filter unmounted");
            }
            CloseReason::FocusLost | CloseReason::Outside => self.cancel(),
        }
    }

    fn end_session(&mut self) {
        self.staged.clear();
        self.open = false;
        self.multi_key_held = false;
        self.focus = FocusTarget::None;
    }

    /// Activate whatever is focused: a row body or its checkbox
    pub fn activate_focused(&mut self) -> Option<Vec<String>> {
        let value = self.focused_option()?.value.clone();
        match self.focus {
            FocusTarget::Row(_) => self.row_activate(&value),
            FocusTarget::Checkbox(_) => {
                self.toggle_multiple(&value);
                None
            }
            FocusTarget::None => None,
        }
    }

    /// Toggle the focused row's checkbox without replacing the selection
    pub fn toggle_focused(&mut self) {
        if let Some(value) = self.focused_option().map(|o| o.value.clone()) {
            self.toggle_multiple(&value);
        }
    }

    pub fn focused_option(&self) -> Option<&FilterOption> {
        let pos = self.focus.index()?;
        self.visible.get(pos).map(|&idx| &self.options[idx])
    }

    /// Visible rows after search filtering, in option-list order
    pub fn visible_options(&self) -> impl Iterator<Item = &FilterOption> {
        self.visible.iter().map(|&idx| &self.options[idx])
    }

    pub fn visible_len(&self) -> usize {
        self.visible.len()
    }

    pub fn visible_option(&self, visible_index: usize) -> Option<&FilterOption> {
        self.visible.get(visible_index).map(|&idx| &self.options[idx])
    }

    /// Checked state of a row while open
    pub fn is_checked(&self, value: &str) -> bool {
        self.open && self.staged.contains(value)
    }

    /// Number of staged identifiers that match an option row
    ///
    /// Identifiers without a row are tolerated and simply not counted.
    pub fn checked_option_count(&self) -> usize {
        self.options
            .iter()
            .filter(|option| self.staged.contains(&option.value))
            .count()
    }

    /// Short text describing the committed value, shown on the trigger
    pub fn summary(&self) -> String {
        let label_of = |value: &str| {
            self.options
                .iter()
                .find(|option| option.value == value)
                .map(|option| option.label.clone())
                .unwrap_or_else(|| value.to_string())
        };

        match self.committed.as_slice() {
            [] => "All".to_string(),
            [only] => label_of(only),
            [first, rest @ ..] => format!("{} +{}", label_of(first), rest.len()),
        }
    }

    pub fn set_visible_count(&mut self, count: usize) {
        self.visible_count = count.max(1);
        self.adjust_scroll_to_focus();
    }

    pub fn visible_count(&self) -> usize {
        self.visible_count
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    fn adjust_scroll_to_focus(&mut self) {
        let Some(index) = self.focus.index() else {
            self.scroll_offset = 0;
            return;
        };
        if index >= self.scroll_offset + self.visible_count {
            self.scroll_offset = index + 1 - self.visible_count;
        } else if index < self.scroll_offset {
            self.scroll_offset = index;
        }
        let max_offset = self.visible.len().saturating_sub(self.visible_count);
        self.scroll_offset = self.scroll_offset.min(max_offset);
    }
}

#[cfg(test)]
#[path = "filter_state_tests.rs"]
mod filter_state_tests;
