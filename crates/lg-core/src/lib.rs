//! Core types for LuckyGroup: name entries and the roster they live in.
//!
//! This crate owns the participant list that both the lottery and the
//! grouping engine read from. It is independent of any frontend; a
//! [`Roster`] can be built from pasted text, imported files, or the
//! built-in sample list.

/// Name entries and their identifiers.
pub mod entry;
/// Error types used throughout the crate.
pub mod error;
/// Splitting raw text and file contents into name tokens.
pub mod parse;
/// The ordered, editable list of entries.
pub mod roster;
/// Built-in sample names.
pub mod sample;

/// Re-export entry types.
pub use entry::{EntryId, NameEntry};
/// Re-export error types.
pub use error::{LgError, LgResult};
/// Re-export roster types.
pub use roster::{Confirmation, Roster};
/// Re-export the sample list.
pub use sample::SAMPLE_NAMES;
