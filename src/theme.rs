//! Centralized theme configuration for all UI components.
//!
//! All colors and styles are defined here. Render files use `theme::module::CONSTANT`
//! rather than hardcoding `Color::*` values.
//!
//! Theme: Galaxy - Purple/pink accents with deep space blue background

use ratatui::style::{Color, Modifier, Style};

/// Core color palette - shared base colors.
pub mod palette {
    use super::*;

    pub const TEXT: Color = Color::Rgb(236, 236, 244);
    pub const TEXT_DIM: Color = Color::Rgb(90, 92, 119);
    pub const TEXT_MUTED: Color = Color::Rgb(130, 133, 158);

    pub const BG_DARK: Color = Color::Rgb(26, 26, 46);
    pub const BG_SURFACE: Color = Color::Rgb(35, 35, 58);
    pub const BG_HIGHLIGHT: Color = Color::Rgb(55, 55, 85);

    pub const CYAN: Color = Color::Rgb(0, 217, 255);
    pub const YELLOW: Color = Color::Rgb(255, 217, 61);
    pub const GREEN: Color = Color::Rgb(107, 203, 119);
    pub const PINK: Color = Color::Rgb(255, 107, 157);
    pub const PURPLE: Color = Color::Rgb(189, 147, 249);

    // Shared cursor style for textarea widgets
    pub const CURSOR: Style = Style::new().add_modifier(Modifier::REVERSED);
}

/// Trigger button and committed selection pane
pub mod trigger {
    use super::*;

    pub const BORDER: Color = palette::TEXT_DIM;
    pub const BORDER_EXPANDED: Color = palette::CYAN;
    pub const TITLE: Color = palette::TEXT_MUTED;
    pub const LABEL: Color = palette::TEXT;
    pub const ARROW: Color = palette::CYAN;

    pub const SELECTION_BORDER: Color = palette::TEXT_DIM;
    pub const SELECTION_ITEM: Color = palette::TEXT;
    pub const SELECTION_EMPTY: Color = palette::TEXT_DIM;
}

/// Open filter menu
pub mod menu {
    use super::*;

    pub const BORDER: Color = palette::CYAN;
    pub const BACKGROUND: Color = palette::BG_DARK;
    pub const COUNT: Color = palette::TEXT_MUTED;

    pub const ROW_TEXT: Color = palette::TEXT;
    pub const ROW_FOCUSED_BG: Color = palette::BG_HIGHLIGHT;
    pub const ROW_FOCUSED_FG: Color = Color::White;
    pub const CHECKBOX: Color = palette::TEXT_MUTED;
    pub const CHECKBOX_CHECKED: Color = palette::GREEN;
    pub const CHECKBOX_FOCUSED: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::CYAN)
        .add_modifier(Modifier::BOLD);
    pub const SINGLE_MARK: Color = palette::GREEN;
    pub const EMPTY: Color = palette::TEXT_DIM;

    pub const SEARCH_BORDER: Color = palette::PURPLE;
    pub const SEARCH_TEXT: Color = palette::TEXT;

    pub const APPLY_BUTTON: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::GREEN)
        .add_modifier(Modifier::BOLD);
    pub const CANCEL_BUTTON: Style = Style::new().fg(palette::TEXT).bg(palette::BG_SURFACE);

    pub const MULTI_INDICATOR: Style = Style::new()
        .fg(palette::BG_DARK)
        .bg(palette::PINK)
        .add_modifier(Modifier::BOLD);
}

/// Bottom key hint line
pub mod hints {
    use super::*;

    pub const KEY: Color = palette::YELLOW;
    pub const DESCRIPTION: Color = palette::TEXT_DIM;
    pub const BACKGROUND: Color = palette::BG_DARK;
}
