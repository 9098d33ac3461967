//! Exporting groups as CSV or JSON.
//!
//! The CSV layout is one row per member: a `第 N 組` group label followed by
//! the member's name, under a `組別,姓名` header.

use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;

use crate::error::{DrawError, DrawResult};
use crate::grouping::{Group, Partition};

/// Header row of the CSV export.
pub const CSV_HEADER: [&str; 2] = ["組別", "姓名"];

/// The label written in the group column.
pub fn group_label(number: usize) -> String {
    format!("第 {number} 組")
}

/// Write groups as CSV to any writer.
pub fn write_csv<W: Write>(groups: &[Group], writer: W) -> DrawResult<()> {
    let mut wtr = csv::Writer::from_writer(writer);
    wtr.write_record(CSV_HEADER)?;
    for group in groups {
        let label = group_label(group.number);
        for member in &group.members {
            wtr.write_record([label.as_str(), member.value.as_str()])?;
        }
    }
    wtr.flush()?;
    Ok(())
}

/// Render groups as a CSV string.
pub fn to_csv(groups: &[Group]) -> DrawResult<String> {
    let mut buf = Vec::new();
    write_csv(groups, &mut buf)?;
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

/// Render a partition as pretty-printed JSON.
pub fn to_json(partition: &Partition) -> DrawResult<String> {
    Ok(serde_json::to_string_pretty(partition)?)
}

/// File name for a CSV export made on `date`.
pub fn export_filename(date: NaiveDate) -> String {
    format!("grouping_result_{}.csv", date.format("%Y-%m-%d"))
}

/// Write the partition as `grouping_result_<date>.csv` inside `dir` and
/// return the path written. Refuses an empty partition.
pub fn export_csv_to_dir(partition: &Partition, dir: &Path, date: NaiveDate) -> DrawResult<PathBuf> {
    if partition.is_empty() {
        return Err(DrawError::NothingToExport);
    }
    let path = dir.join(export_filename(date));
    let file = std::fs::File::create(&path)?;
    write_csv(&partition.groups, file)?;
    tracing::info!(path = %path.display(), groups = partition.len(), "exported groups");
    Ok(path)
}
