//! Expanded/collapsed flags keyed by topic id.

use std::collections::HashMap;

/// Which topics are currently shown expanded.
///
/// An id without an entry reads as collapsed, so toggling an id twice always
/// restores the value it read as before.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExpansionState {
    entries: HashMap<String, bool>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is currently expanded.
    pub fn is_expanded(&self, id: &str) -> bool {
        self.entries.get(id).copied().unwrap_or(false)
    }

    /// Raw entry for `id`, if one was ever written.
    pub fn get(&self, id: &str) -> Option<bool> {
        self.entries.get(id).copied()
    }

    /// Flip `id` and return its new value.
    pub fn toggle(&mut self, id: &str) -> bool {
        let value = !self.is_expanded(id);
        self.entries.insert(id.to_string(), value);
        value
    }

    /// Mark `id` expanded.
    pub fn expand(&mut self, id: &str) {
        self.entries.insert(id.to_string(), true);
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Number of entries (expanded or explicitly collapsed).
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Ids whose entry is `true`, in no particular order.
    pub fn expanded_ids(&self) -> impl Iterator<Item = &str> {
        self.entries
            .iter()
            .filter(|(_, expanded)| **expanded)
            .map(|(id, _)| id.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_entry_reads_collapsed() {
        let state = ExpansionState::new();
        assert!(!state.is_expanded("sql"));
        assert_eq!(state.get("sql"), None);
    }

    #[test]
    fn test_toggle_returns_new_value() {
        let mut state = ExpansionState::new();
        assert!(state.toggle("sql"));
        assert!(state.is_expanded("sql"));
        assert!(!state.toggle("sql"));
        assert_eq!(state.get("sql"), Some(false));
    }

    #[test]
    fn test_expanded_ids_skips_collapsed_entries() {
        let mut state = ExpansionState::new();
        state.expand("a");
        state.expand("b");
        state.toggle("b");
        let ids: Vec<&str> = state.expanded_ids().collect();
        assert_eq!(ids, vec!["a"]);
        assert_eq!(state.len(), 2);
    }

    #[test]
    fn test_clear() {
        let mut state = ExpansionState::new();
        state.expand("a");
        state.clear();
        assert!(state.is_empty());
    }
}
