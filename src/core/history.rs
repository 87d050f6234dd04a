//! # History Store
//!
//! Ordered list of submitted URLs. Position 0 is always the most recent
//! submission. Duplicates are kept as independent entries; the only identity
//! an entry has is its current position.

use log::debug;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HistoryStore {
    entries: Vec<String>,
}

impl HistoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `url` at position 0, shifting everything else down by one.
    pub fn prepend(&mut self, url: impl Into<String>) {
        self.entries.insert(0, url.into());
        debug!("History list updated: {:?}", self.entries);
    }

    /// Remove the entry at `position`, closing the gap.
    ///
    /// Positions come from the last rendered frame, so they can be stale by the
    /// time they arrive. Out-of-range positions are ignored and return `None`.
    pub fn remove_at(&mut self, position: usize) -> Option<String> {
        if position >= self.entries.len() {
            debug!(
                "Ignoring delete at position {} (history has {} entries)",
                position,
                self.entries.len()
            );
            return None;
        }
        let removed = self.entries.remove(position);
        debug!("History list updated: {:?}", self.entries);
        Some(removed)
    }

    pub fn get(&self, position: usize) -> Option<&str> {
        self.entries.get(position).map(String::as_str)
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
