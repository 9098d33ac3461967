pub mod dedupe;
pub mod draw;
pub mod group;
pub mod list;
pub mod tui;

use std::path::PathBuf;

use clap::Args;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lg_core::Roster;

/// Where the roster comes from. Sources are applied in order: files, then
/// pasted names, then the sample list.
#[derive(Args, Debug, Clone, Default)]
pub struct RosterArgs {
    /// Name files (.csv or .txt), one name per line
    pub files: Vec<PathBuf>,

    /// Names separated by commas or newlines (repeatable)
    #[arg(short, long = "names", value_name = "TEXT")]
    pub names: Vec<String>,

    /// Append the built-in sample list of 20 names
    #[arg(long)]
    pub sample: bool,

    /// Collapse duplicate names before running the command
    #[arg(long)]
    pub dedupe: bool,
}

impl RosterArgs {
    /// Build the roster from every configured source.
    pub fn load(&self) -> Result<Roster, String> {
        let mut roster = Roster::new();

        for path in &self.files {
            let added = roster.add_from_path(path).map_err(|e| e.to_string())?;
            tracing::debug!(path = %path.display(), added, "loaded name file");
        }
        for text in &self.names {
            roster.add_from_text(text);
        }
        if self.sample {
            roster.add_sample();
        }
        if self.dedupe {
            roster.remove_duplicates();
        }

        Ok(roster)
    }
}

/// A seeded RNG when a seed is given, otherwise one seeded from the OS.
pub fn make_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    }
}

/// Printed when a command has nothing to work on.
pub const EMPTY_ROSTER_NOTICE: &str =
    "  No names in the roster. Add files, --names, or --sample.";
