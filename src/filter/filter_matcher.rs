use crate::options::FilterOption;

/// Case-insensitive substring matching on option labels
#[derive(Debug, Default, Clone, Copy)]
pub struct FilterMatcher;

impl FilterMatcher {
    pub fn new() -> Self {
        Self
    }

    /// Indices of options whose label contains `query`, in option-list order
    pub fn filter(&self, query: &str, options: &[FilterOption]) -> Vec<usize> {
        if query.is_empty() {
            return (0..options.len()).collect();
        }

        let needle = query.to_lowercase();
        options
            .iter()
            .enumerate()
            .filter(|(_, option)| option.label.to_lowercase().contains(&needle))
            .map(|(idx, _)| idx)
            .collect()
    }
}
