use std::path::Path;

use chrono::Utc;
use comfy_table::{ContentArrangement, Table};

use lg_draw::export;
use lg_draw::{GroupMethod, GroupingConfig, Partition};

use super::RosterArgs;

/// Options for `lg group` beyond the roster sources.
pub struct GroupOptions<'a> {
    pub by: &'a str,
    pub value: usize,
    pub seed: Option<u64>,
    pub format: &'a str,
    pub output: Option<&'a Path>,
    pub export_dir: Option<&'a Path>,
}

pub fn run(args: &RosterArgs, opts: &GroupOptions<'_>) -> Result<(), String> {
    let method = GroupMethod::parse(opts.by)
        .ok_or_else(|| format!("unsupported method: \"{}\". Use: size, count", opts.by))?;
    if !matches!(opts.format, "table" | "csv" | "json") {
        return Err(format!(
            "unsupported format: \"{}\". Use: table, csv, json",
            opts.format
        ));
    }

    let roster = args.load()?;
    if roster.is_empty() {
        println!("{}", super::EMPTY_ROSTER_NOTICE);
        return Ok(());
    }

    let config = GroupingConfig::default()
        .with_method(method)
        .with_value(opts.value);
    let mut rng = super::make_rng(opts.seed);
    let partition = Partition::generate(&roster, &config, &mut rng);

    let content = match opts.format {
        "csv" => export::to_csv(&partition.groups).map_err(|e| e.to_string())?,
        "json" => {
            let mut json = export::to_json(&partition).map_err(|e| e.to_string())?;
            json.push('\n');
            json
        }
        _ => render_table(&partition),
    };

    if let Some(path) = opts.output {
        std::fs::write(path, &content)
            .map_err(|e| format!("cannot write to {}: {e}", path.display()))?;
        println!("  Wrote {} groups to {}", partition.len(), path.display());
    } else {
        print!("{content}");
    }

    if let Some(dir) = opts.export_dir {
        let path = export::export_csv_to_dir(&partition, dir, Utc::now().date_naive())
            .map_err(|e| format!("cannot export to {}: {e}", dir.display()))?;
        println!("  Exported to {}", path.display());
    }

    Ok(())
}

fn render_table(partition: &Partition) -> String {
    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec!["Group", "Size", "Members"]);

    for group in &partition.groups {
        let members: Vec<&str> = group.members.iter().map(|m| m.value.as_str()).collect();
        table.add_row(vec![
            format!("Group {}", group.number),
            group.len().to_string(),
            members.join(", "),
        ]);
    }

    format!(
        "{table}\n\n  {} groups, {} names ({}, {} {})\n",
        partition.len(),
        partition.member_count(),
        partition.method,
        partition.method.value_label(),
        partition.requested,
    )
}
