//! The log of lottery winners.

use serde::{Deserialize, Serialize};

use lg_core::{EntryId, NameEntry};

/// Past winners, most recent first.
///
/// Entries are copies taken at draw time. Editing the roster afterwards does
/// not touch the history.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DrawHistory {
    entries: Vec<NameEntry>,
}

impl DrawHistory {
    /// Create an empty history.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a new winner at the front.
    pub fn record(&mut self, winner: NameEntry) {
        self.entries.insert(0, winner);
    }

    /// Whether the entry with this id has already won.
    pub fn contains(&self, id: EntryId) -> bool {
        self.entries.iter().any(|e| e.id == id)
    }

    /// The most recent winner.
    pub fn latest(&self) -> Option<&NameEntry> {
        self.entries.first()
    }

    /// Winners, most recent first.
    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Winners paired with their draw number, most recent first.
    /// The oldest draw is number 1.
    pub fn numbered(&self) -> impl Iterator<Item = (usize, &NameEntry)> {
        let total = self.entries.len();
        self.entries
            .iter()
            .enumerate()
            .map(move |(i, e)| (total - i, e))
    }

    /// Number of draws recorded.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if nobody has won yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every winner.
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
