//! Standalone TUI binary for LuckyGroup.

use std::path::PathBuf;
use std::process;

use clap::Parser;
use rand::SeedableRng;
use rand::rngs::StdRng;

use lg_core::Roster;

#[derive(Parser)]
#[command(
    name = "lg-tui",
    about = "Terminal UI for LuckyGroup lotteries and grouping",
    version
)]
struct Args {
    /// Name lists to preload (.csv or .txt, one name per line)
    files: Vec<PathBuf>,

    /// Preload the built-in sample names
    #[arg(long)]
    sample: bool,

    /// Start on a specific tab (input, lottery, grouping)
    #[arg(long, default_value = "input")]
    tab: String,

    /// RNG seed for reproducible draws and groups
    #[arg(long)]
    seed: Option<u64>,
}

fn main() {
    let args = Args::parse();

    let mut roster = Roster::new();
    for path in &args.files {
        if let Err(e) = roster.add_from_path(path) {
            eprintln!("error: {e}");
            process::exit(1);
        }
    }
    if args.sample {
        roster.add_sample();
    }

    let Some(tab) = lg_tui::tabs::TabId::from_name(&args.tab) else {
        eprintln!(
            "error: unknown tab: \"{}\". Use: input, lottery, grouping",
            args.tab
        );
        process::exit(1);
    };
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };

    let app = lg_tui::app::TuiApp::new(roster, tab, rng);

    if let Err(e) = lg_tui::terminal::run(app) {
        eprintln!("error: {e}");
        process::exit(1);
    }
}
