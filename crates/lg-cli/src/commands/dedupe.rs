use std::path::Path;

use super::RosterArgs;

pub fn run(args: &RosterArgs, output: Option<&Path>) -> Result<(), String> {
    let mut roster = args.load()?;
    let removed = roster.remove_duplicates();

    let mut content = String::new();
    for entry in roster.entries() {
        content.push_str(&entry.value);
        content.push('\n');
    }

    if let Some(path) = output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!(
            "  Wrote {} names to {} ({removed} duplicates removed)",
            roster.len(),
            path.display()
        );
    } else {
        print!("{content}");
    }

    Ok(())
}
