use colored::Colorize;
use comfy_table::{ContentArrangement, Table};

use super::RosterArgs;

pub fn run(args: &RosterArgs, json: bool) -> Result<(), String> {
    let roster = args.load()?;

    if json {
        let out = serde_json::to_string_pretty(&roster)
            .map_err(|e| format!("JSON serialization error: {e}"))?;
        println!("{out}");
        return Ok(());
    }

    if roster.is_empty() {
        println!("{}", super::EMPTY_ROSTER_NOTICE);
        return Ok(());
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["#", "ID", "Name", "Duplicate"]);

    for (i, entry) in roster.entries().iter().enumerate() {
        let dup = if roster.is_duplicate(entry) { "yes" } else { "" };
        table.add_row(vec![
            (i + 1).to_string(),
            entry.id.to_string(),
            entry.value.clone(),
            dup.to_string(),
        ]);
    }

    println!("{table}");
    println!();
    println!("  {} entries", roster.len());

    let dups = roster.duplicate_count();
    if dups > 0 {
        println!(
            "  {}",
            format!(
                "{dups} duplicated name{} (run `lg dedupe` to collapse)",
                if dups == 1 { "" } else { "s" }
            )
            .yellow()
        );
    }

    Ok(())
}
