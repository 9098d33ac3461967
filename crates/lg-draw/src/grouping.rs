//! Random grouping of a roster.
//!
//! The roster is shuffled once, then either cut into consecutive chunks of a
//! fixed size or dealt round-robin into a fixed number of groups like cards.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

use lg_core::{NameEntry, Roster};

use crate::config::GroupingConfig;
use crate::random::shuffled;

/// How the roster is divided into groups.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GroupMethod {
    /// Fixed number of members per group; the last group may be smaller.
    #[default]
    BySize,
    /// Fixed number of groups; sizes differ by at most one.
    ByCount,
}

impl GroupMethod {
    /// Parse a method from a string like "size" or "count".
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "size" | "by_size" | "by-size" => Some(Self::BySize),
            "count" | "by_count" | "by-count" => Some(Self::ByCount),
            _ => None,
        }
    }

    /// The other method.
    pub fn toggle(self) -> Self {
        match self {
            Self::BySize => Self::ByCount,
            Self::ByCount => Self::BySize,
        }
    }

    /// Label for the numeric parameter of this method.
    pub fn value_label(self) -> &'static str {
        match self {
            Self::BySize => "members per group",
            Self::ByCount => "number of groups",
        }
    }
}

impl std::fmt::Display for GroupMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::BySize => write!(f, "by size"),
            Self::ByCount => write!(f, "by count"),
        }
    }
}

/// One group of a partition.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    /// 1-based group number.
    pub number: usize,
    /// Members in the order they were dealt.
    pub members: Vec<NameEntry>,
}

impl Group {
    /// Create an empty group.
    pub fn new(number: usize) -> Self {
        Self {
            number,
            members: Vec::new(),
        }
    }

    /// Number of members.
    pub fn len(&self) -> usize {
        self.members.len()
    }

    /// Returns true if the group has no members.
    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

/// Effective group size for a requested value.
pub fn effective_size(requested: usize) -> usize {
    requested.max(1)
}

/// Effective group count for a requested value over `len` entries.
pub fn effective_count(len: usize, requested: usize) -> usize {
    requested.min(len).max(1)
}

/// Shuffle `entries` and divide them into groups.
///
/// An empty input produces no groups.
pub fn partition<R: Rng>(
    entries: &[NameEntry],
    method: GroupMethod,
    n: usize,
    rng: &mut R,
) -> Vec<Group> {
    if entries.is_empty() {
        return Vec::new();
    }

    let shuffled = shuffled(entries, rng);

    match method {
        GroupMethod::BySize => shuffled
            .chunks(effective_size(n))
            .enumerate()
            .map(|(i, chunk)| Group {
                number: i + 1,
                members: chunk.to_vec(),
            })
            .collect(),
        GroupMethod::ByCount => {
            let count = effective_count(shuffled.len(), n);
            let mut groups: Vec<Group> = (1..=count).map(Group::new).collect();
            for (i, entry) in shuffled.into_iter().enumerate() {
                groups[i % count].members.push(entry);
            }
            groups
        }
    }
}

/// The result of one grouping run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Partition {
    /// Method used.
    pub method: GroupMethod,
    /// The size or count asked for (at least 1; ByCount is further capped
    /// at the roster length).
    pub requested: usize,
    /// Groups in order.
    pub groups: Vec<Group>,
    /// When the partition was generated.
    pub generated_at: DateTime<Utc>,
}

impl Partition {
    /// Partition the roster according to `config`.
    pub fn generate<R: Rng>(roster: &Roster, config: &GroupingConfig, rng: &mut R) -> Self {
        let groups = partition(roster.entries(), config.method, config.value, rng);
        tracing::info!(
            method = %config.method,
            requested = config.value,
            groups = groups.len(),
            members = roster.len(),
            "generated groups"
        );
        Self {
            method: config.method,
            requested: config.value,
            groups,
            generated_at: Utc::now(),
        }
    }

    /// Number of groups.
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    /// Returns true if there are no groups.
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total members across all groups.
    pub fn member_count(&self) -> usize {
        self.groups.iter().map(Group::len).sum()
    }
}
