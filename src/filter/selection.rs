//! Insertion-ordered identifier set backing the staged selection

/// Set of option identifiers that remembers insertion order
///
/// Commit materializes identifiers in the order they were added, not the order of the
/// option list. Lists are short, so membership is a linear scan.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StagedSelection {
    values: Vec<String>,
}

impl StagedSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut selection = Self::new();
        for value in values {
            selection.insert(value.into());
        }
        selection
    }

    pub fn contains(&self, value: &str) -> bool {
        self.values.iter().any(|v| v == value)
    }

    /// Add a value, returns false if it was already present
    pub fn insert(&mut self, value: String) -> bool {
        if self.contains(&value) {
            return false;
        }
        self.values.push(value);
        true
    }

    /// Remove a value, returns false if it was absent
    pub fn remove(&mut self, value: &str) -> bool {
        let before = self.values.len();
        self.values.retain(|v| v != value);
        self.values.len() != before
    }

    /// Add the value if absent, remove it if present
    pub fn toggle(&mut self, value: &str) {
        if !self.remove(value) {
            self.values.push(value.to_string());
        }
    }

    /// Replace the whole selection with exactly one value
    pub fn replace_with(&mut self, value: &str) {
        self.values.clear();
        self.values.push(value.to_string());
    }

    /// Keep only the first value
    pub fn truncate_to_first(&mut self) {
        self.values.truncate(1);
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.values.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.values.clone()
    }
}
