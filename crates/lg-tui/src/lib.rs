//! Terminal UI for LuckyGroup.
//!
//! A ratatui interface with three tabs sharing one roster: name input,
//! an animated lottery, and random grouping with CSV export.

pub mod app;
pub mod shared;
pub mod tabs;
pub mod terminal;
