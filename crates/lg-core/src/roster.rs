use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::entry::{EntryId, NameEntry};
use crate::error::{LgError, LgResult};
use crate::parse::{split_lines, split_text};
use crate::sample::SAMPLE_NAMES;

/// The user's answer to a destructive prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Confirmation {
    /// The user agreed.
    Confirmed,
    /// The user backed out.
    Declined,
}

/// The working list of participants.
///
/// Insertion order is display order. Values may repeat; ids never do.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Roster {
    entries: Vec<NameEntry>,
}

impl Roster {
    /// Create an empty roster.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a roster from display values, one entry per value.
    pub fn from_values<I, S>(values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            entries: values.into_iter().map(NameEntry::new).collect(),
        }
    }

    // -----------------------------------------------------------------------
    // Adding entries
    // -----------------------------------------------------------------------

    /// Add names from pasted text (split on newlines or commas).
    /// Returns how many entries were added.
    pub fn add_from_text(&mut self, raw: &str) -> usize {
        let added = self.append(split_text(raw));
        tracing::debug!(added, total = self.len(), "added names from text");
        added
    }

    /// Add names from file contents (one name per non-blank line).
    /// Returns how many entries were added.
    pub fn add_from_file(&mut self, raw: &str) -> usize {
        let added = self.append(split_lines(raw));
        tracing::debug!(added, total = self.len(), "added names from file contents");
        added
    }

    /// Read a `.csv` or `.txt` file and add one entry per non-blank line.
    pub fn add_from_path(&mut self, path: &Path) -> LgResult<usize> {
        let raw = std::fs::read_to_string(path).map_err(|source| LgError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(self.add_from_file(&raw))
    }

    /// Append the built-in sample list. Returns how many entries were added.
    pub fn add_sample(&mut self) -> usize {
        self.append(SAMPLE_NAMES)
    }

    fn append<I, S>(&mut self, values: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let before = self.entries.len();
        self.entries.extend(values.into_iter().map(NameEntry::new));
        self.entries.len() - before
    }

    // -----------------------------------------------------------------------
    // Removing entries
    // -----------------------------------------------------------------------

    /// Keep only the first entry for each distinct value, in first-seen
    /// order. Returns how many entries were dropped.
    pub fn remove_duplicates(&mut self) -> usize {
        let before = self.entries.len();
        let mut seen = HashSet::new();
        self.entries.retain(|e| seen.insert(e.value.clone()));
        let removed = before - self.entries.len();
        tracing::debug!(removed, "removed duplicate names");
        removed
    }

    /// Remove exactly the entry with this id.
    pub fn remove_entry(&mut self, id: EntryId) -> LgResult<NameEntry> {
        let index = self
            .entries
            .iter()
            .position(|e| e.id == id)
            .ok_or(LgError::EntryNotFound(id))?;
        Ok(self.entries.remove(index))
    }

    /// Empty the roster if the user confirmed. Returns how many entries were
    /// removed (0 when declined).
    pub fn clear(&mut self, confirmation: Confirmation) -> usize {
        match confirmation {
            Confirmation::Confirmed => {
                let removed = self.entries.len();
                self.entries.clear();
                tracing::debug!(removed, "cleared roster");
                removed
            }
            Confirmation::Declined => 0,
        }
    }

    // -----------------------------------------------------------------------
    // Queries
    // -----------------------------------------------------------------------

    /// All entries in display order.
    pub fn entries(&self) -> &[NameEntry] {
        &self.entries
    }

    /// Look up an entry by id.
    pub fn get(&self, id: EntryId) -> Option<&NameEntry> {
        self.entries.iter().find(|e| e.id == id)
    }

    /// Number of entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if the roster has no entries.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Every value that occurs at least twice.
    pub fn duplicate_values(&self) -> HashSet<&str> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        for entry in &self.entries {
            *counts.entry(entry.value.as_str()).or_default() += 1;
        }
        counts
            .into_iter()
            .filter(|(_, n)| *n > 1)
            .map(|(value, _)| value)
            .collect()
    }

    /// Whether this entry's value appears more than once. Every occurrence
    /// is flagged, including the first.
    pub fn is_duplicate(&self, entry: &NameEntry) -> bool {
        self.entries
            .iter()
            .filter(|e| e.value == entry.value)
            .nth(1)
            .is_some()
    }

    /// Number of distinct values that are duplicated.
    pub fn duplicate_count(&self) -> usize {
        self.duplicate_values().len()
    }
}

impl<'a> IntoIterator for &'a Roster {
    type Item = &'a NameEntry;
    type IntoIter = std::slice::Iter<'a, NameEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;
    use proptest::prelude::*;

    fn values(roster: &Roster) -> Vec<&str> {
        roster.entries().iter().map(|e| e.value.as_str()).collect()
    }

    #[test]
    fn add_from_text_splits_and_trims() {
        let mut roster = Roster::new();
        let added = roster.add_from_text("Alice, Bob\n\n  Carol ,");
        assert_eq!(added, 3);
        assert_eq!(values(&roster), vec!["Alice", "Bob", "Carol"]);
    }

    #[test]
    fn add_from_text_keeps_duplicates() {
        let mut roster = Roster::new();
        roster.add_from_text("Alice,Alice");
        assert_eq!(roster.len(), 2);
        assert_ne!(roster.entries()[0].id, roster.entries()[1].id);
    }

    #[test]
    fn add_from_file_keeps_commas() {
        let mut roster = Roster::new();
        roster.add_from_file("Smith, John\r\nDoe\r\n\r\n");
        assert_eq!(values(&roster), vec!["Smith, John", "Doe"]);
    }

    #[test]
    fn add_from_path_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "Alice\nBob\n\nCarol").unwrap();
        let mut roster = Roster::new();
        assert_eq!(roster.add_from_path(file.path()).unwrap(), 3);
    }

    #[test]
    fn add_from_missing_path_errors() {
        let mut roster = Roster::new();
        let err = roster
            .add_from_path(Path::new("/definitely/not/here.csv"))
            .unwrap_err();
        assert!(matches!(err, LgError::Io { .. }));
        assert!(err.to_string().contains("here.csv"));
    }

    #[test]
    fn add_sample_appends_twenty() {
        let mut roster = Roster::from_values(["Existing"]);
        assert_eq!(roster.add_sample(), 20);
        assert_eq!(roster.len(), 21);
        assert_eq!(roster.entries()[1].value, "陳小明");
    }

    #[test]
    fn remove_duplicates_keeps_first_occurrence() {
        let mut roster = Roster::from_values(["A", "B", "A", "C", "B"]);
        let first_a = roster.entries()[0].id;
        assert_eq!(roster.remove_duplicates(), 2);
        assert_eq!(values(&roster), vec!["A", "B", "C"]);
        assert_eq!(roster.entries()[0].id, first_a);
    }

    #[test]
    fn remove_entry_by_id_only() {
        let mut roster = Roster::from_values(["A", "A", "B"]);
        let second = roster.entries()[1].id;
        let removed = roster.remove_entry(second).unwrap();
        assert_eq!(removed.id, second);
        assert_eq!(values(&roster), vec!["A", "B"]);
        assert!(roster.get(second).is_none());
    }

    #[test]
    fn remove_unknown_entry_errors() {
        let mut roster = Roster::from_values(["A"]);
        let err = roster.remove_entry(EntryId::new()).unwrap_err();
        assert!(matches!(err, LgError::EntryNotFound(_)));
        assert_eq!(roster.len(), 1);
    }

    #[test]
    fn clear_requires_confirmation() {
        let mut roster = Roster::from_values(["A", "B"]);
        assert_eq!(roster.clear(Confirmation::Declined), 0);
        assert_eq!(roster.len(), 2);
        assert_eq!(roster.clear(Confirmation::Confirmed), 2);
        assert!(roster.is_empty());
    }

    #[test]
    fn duplicates_flag_every_occurrence() {
        let roster = Roster::from_values(["A", "B", "A", "C", "A"]);
        let dups = roster.duplicate_values();
        assert_eq!(dups.len(), 1);
        assert!(dups.contains("A"));
        let flagged: Vec<bool> = roster.entries().iter().map(|e| roster.is_duplicate(e)).collect();
        assert_eq!(flagged, vec![true, false, true, false, true]);
        assert_eq!(roster.duplicate_count(), 1);
    }

    #[test]
    fn serializes_as_array() {
        let roster = Roster::from_values(["A", "B"]);
        let json = serde_json::to_value(&roster).unwrap();
        assert_eq!(json.as_array().map(Vec::len), Some(2));
    }

    proptest! {
        #[test]
        fn every_token_becomes_one_fresh_entry(names in proptest::collection::vec("[a-z]{1,6}", 0..30)) {
            let mut roster = Roster::new();
            let added = roster.add_from_file(&names.join("\n"));
            prop_assert_eq!(added, names.len());
            let ids: HashSet<EntryId> = roster.entries().iter().map(|e| e.id).collect();
            prop_assert_eq!(ids.len(), names.len());
        }

        #[test]
        fn remove_duplicates_is_idempotent(names in proptest::collection::vec("[a-d]", 0..30)) {
            let mut once = Roster::from_values(names.clone());
            once.remove_duplicates();
            let mut twice = once.clone();
            prop_assert_eq!(twice.remove_duplicates(), 0);
            prop_assert_eq!(&once, &twice);
            prop_assert_eq!(once.duplicate_count(), 0);

            let mut expected: Vec<&str> = Vec::new();
            for n in &names {
                if !expected.contains(&n.as_str()) {
                    expected.push(n);
                }
            }
            prop_assert_eq!(values(&once), expected);
        }
    }
}
