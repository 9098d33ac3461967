use std::fmt;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for every entry in a roster.
///
/// Two entries with the same display value still carry different ids, which
/// is what lets the lottery exclude a specific winner rather than every
/// namesake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntryId(pub Uuid);

impl EntryId {
    /// Generate a new random entry ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for EntryId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for EntryId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", &self.0.to_string()[..8])
    }
}

/// A single participant: an id plus the name shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NameEntry {
    /// Identity of this entry.
    pub id: EntryId,
    /// The display string.
    pub value: String,
}

impl NameEntry {
    /// Create an entry with a freshly generated id.
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            id: EntryId::new(),
            value: value.into(),
        }
    }
}

impl fmt::Display for NameEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.value)
    }
}
