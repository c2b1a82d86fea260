//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

use crate::filter::filter_render::MenuRegions;

/// Identifies a UI component region
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    // Base layout
    Trigger,
    SelectionPane,

    // Open filter menu and its sub-regions
    FilterMenu,
    SearchInput,
    OptionList,
    ApplyButton,
    CancelButton,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` when the component is not visible.
/// Used by mouse event handlers to determine which component is under the cursor.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    // Base layout
    pub trigger: Option<Rect>,
    pub selection_pane: Option<Rect>,

    // Menu (only populated when open)
    pub filter_menu: Option<Rect>,
    pub search_input: Option<Rect>,
    pub option_list: Option<Rect>,
    pub apply_button: Option<Rect>,
    pub cancel_button: Option<Rect>,
}

impl LayoutRegions {
    /// Create a new empty LayoutRegions
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Record the areas of a freshly rendered menu
    pub fn set_menu(&mut self, menu: MenuRegions) {
        self.filter_menu = Some(menu.menu);
        self.search_input = menu.search;
        self.option_list = Some(menu.list);
        self.apply_button = menu.apply;
        self.cancel_button = menu.cancel;
    }
}
