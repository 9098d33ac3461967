//! Launch the terminal UI preloaded with the roster.

use lg_tui::app::TuiApp;
use lg_tui::tabs::TabId;

use super::RosterArgs;

pub fn run(args: &RosterArgs, tab: &str, seed: Option<u64>) -> Result<(), String> {
    let roster = args.load()?;
    let tab = TabId::from_name(tab)
        .ok_or_else(|| format!("unknown tab: \"{tab}\". Use: input, lottery, grouping"))?;

    let app = TuiApp::new(roster, tab, super::make_rng(seed));
    lg_tui::terminal::run(app)
}
