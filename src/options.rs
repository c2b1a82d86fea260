//! Option list for the filter
//!
//! Options are supplied externally and never mutated by the filter. Identifiers must be
//! unique within one list; labels are free text used for display and search.

mod options_loader;

pub use options_loader::{OptionsReader, parse_options};

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOption {
    pub value: String,
    pub label: String,
}

impl FilterOption {
    pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            value: value.into(),
            label: label.into(),
        }
    }

    /// Option whose label is its identifier
    pub fn plain(value: impl Into<String>) -> Self {
        let value = value.into();
        Self {
            label: value.clone(),
            value,
        }
    }
}
