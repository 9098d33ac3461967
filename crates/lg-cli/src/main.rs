//! CLI frontend for LuckyGroup: lottery draws and random grouping.

mod commands;
mod logging;

use std::path::PathBuf;
use std::process;

use clap::{Parser, Subcommand};

use commands::RosterArgs;

#[derive(Parser)]
#[command(
    name = "lg",
    about = "LuckyGroup: lottery draws and random grouping for name lists",
    version,
    propagate_version = true
)]
struct Cli {
    /// Log debug output to stderr (RUST_LOG overrides)
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the roster, flagging duplicate names
    List {
        #[command(flatten)]
        roster: RosterArgs,

        /// Print the roster as JSON
        #[arg(long)]
        json: bool,
    },

    /// Remove duplicate names, keeping the first occurrence
    Dedupe {
        #[command(flatten)]
        roster: RosterArgs,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Draw lottery winners one at a time
    Draw {
        #[command(flatten)]
        roster: RosterArgs,

        /// Number of draws to run
        #[arg(short, long, default_value = "1")]
        count: usize,

        /// Allow a past winner to win again
        #[arg(long)]
        allow_repeats: bool,

        /// RNG seed for reproducible draws
        #[arg(short, long)]
        seed: Option<u64>,

        /// Play the reveal animation on stderr
        #[arg(long)]
        animate: bool,
    },

    /// Split the roster into random groups
    Group {
        #[command(flatten)]
        roster: RosterArgs,

        /// Grouping method: size, count
        #[arg(short, long, default_value = "size")]
        by: String,

        /// Members per group (size) or number of groups (count)
        #[arg(short = 'k', long, default_value = "3")]
        value: usize,

        /// RNG seed for reproducible grouping
        #[arg(short, long)]
        seed: Option<u64>,

        /// Output format: table, csv, json
        #[arg(short, long, default_value = "table")]
        format: String,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Also write grouping_result_<date>.csv into this directory
        #[arg(long, value_name = "DIR")]
        export: Option<PathBuf>,
    },

    /// Launch the interactive terminal UI
    Tui {
        #[command(flatten)]
        roster: RosterArgs,

        /// Start on a specific tab (input, lottery, grouping)
        #[arg(long, default_value = "input")]
        tab: String,

        /// RNG seed for draws and grouping
        #[arg(short, long)]
        seed: Option<u64>,
    },
}

fn main() {
    let cli = Cli::parse();
    if !matches!(cli.command, Commands::Tui { .. }) {
        logging::init(cli.verbose);
    }

    let result = match cli.command {
        Commands::List { roster, json } => commands::list::run(&roster, json),
        Commands::Dedupe { roster, output } => commands::dedupe::run(&roster, output.as_deref()),
        Commands::Draw {
            roster,
            count,
            allow_repeats,
            seed,
            animate,
        } => commands::draw::run(&roster, count, allow_repeats, seed, animate),
        Commands::Group {
            roster,
            by,
            value,
            seed,
            format,
            output,
            export,
        } => commands::group::run(
            &roster,
            &commands::group::GroupOptions {
                by: &by,
                value,
                seed,
                format: &format,
                output: output.as_deref(),
                export_dir: export.as_deref(),
            },
        ),
        Commands::Tui { roster, tab, seed } => commands::tui::run(&roster, &tab, seed),
    };

    if let Err(e) = result {
        tracing::debug!(error = %e, "command failed");
        eprintln!("error: {e}");
        process::exit(1);
    }
}
