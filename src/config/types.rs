// Configuration type definitions

use ratatui::crossterm::event::{KeyModifiers, ModifierKeyCode};
use serde::Deserialize;

/// Clipboard backend selection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ClipboardBackend {
    #[default]
    Auto,
    System,
    Osc52,
}

/// Clipboard configuration section
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClipboardConfig {
    #[serde(default)]
    pub backend: ClipboardBackend,
}

/// Key that switches row activation from "replace" to "toggle"
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ModifierKey {
    #[default]
    Control,
    Super,
    Alt,
}

impl ModifierKey {
    /// Whether a bare modifier key event is this modifier (either side)
    pub fn matches_code(self, code: ModifierKeyCode) -> bool {
        matches!(
            (self, code),
            (
                ModifierKey::Control,
                ModifierKeyCode::LeftControl | ModifierKeyCode::RightControl
            ) | (
                ModifierKey::Super,
                ModifierKeyCode::LeftSuper | ModifierKeyCode::RightSuper
            ) | (
                ModifierKey::Alt,
                ModifierKeyCode::LeftAlt | ModifierKeyCode::RightAlt
            )
        )
    }

    /// Modifier bits carried by mouse and key events
    pub fn key_modifiers(self) -> KeyModifiers {
        match self {
            ModifierKey::Control => KeyModifiers::CONTROL,
            ModifierKey::Super => KeyModifiers::SUPER,
            ModifierKey::Alt => KeyModifiers::ALT,
        }
    }
}

/// Filter behavior section
#[derive(Debug, Clone, Deserialize)]
pub struct FilterConfig {
    #[serde(default = "default_true")]
    pub multiple: bool,
    #[serde(default = "default_true")]
    pub searchable: bool,
    #[serde(default = "default_true")]
    pub commit_on_select: bool,
    #[serde(default = "default_true")]
    pub close_on_focus_lost: bool,
    #[serde(default)]
    pub modifier: ModifierKey,
}

fn default_true() -> bool {
    true
}

impl Default for FilterConfig {
    fn default() -> Self {
        FilterConfig {
            multiple: true,
            searchable: true,
            commit_on_select: true,
            close_on_focus_lost: true,
            modifier: ModifierKey::Control,
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub filter: FilterConfig,
    #[serde(default)]
    pub clipboard: ClipboardConfig,
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
