//! Integration tests for the lg CLI commands.

#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

/// Create a temp directory with a roster file of seven names, one repeated.
fn test_roster() -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join("names.txt"),
        "Alice\nBob\n\n  Carol  \nDave\nEve\nFrank\nBob\n",
    )
    .unwrap();
    fs::write(
        dir.path().join("class.csv"),
        "Smith, John\nDoe, Jane\n",
    )
    .unwrap();
    dir
}

fn lg() -> Command {
    Command::cargo_bin("lg").unwrap()
}

// ---------------------------------------------------------------------------
// list
// ---------------------------------------------------------------------------

#[test]
fn list_shows_all_entries() {
    let dir = test_roster();
    lg().arg("list")
        .arg(dir.path().join("names.txt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"))
        .stdout(predicate::str::contains("Carol"))
        .stdout(predicate::str::contains("7 entries"));
}

#[test]
fn list_flags_duplicates() {
    lg().args(["list", "-n", "Ann, Ben, Ann"])
        .assert()
        .success()
        .stdout(predicate::str::contains("yes"))
        .stdout(predicate::str::contains("duplicated name"));
}

#[test]
fn list_keeps_commas_from_files() {
    let dir = test_roster();
    lg().arg("list")
        .arg(dir.path().join("class.csv"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Smith, John"))
        .stdout(predicate::str::contains("2 entries"));
}

#[test]
fn list_json() {
    lg().args(["list", "--json", "-n", "Ann,Ben"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"value\": \"Ann\""));
}

#[test]
fn list_sample() {
    lg().args(["list", "--sample"])
        .assert()
        .success()
        .stdout(predicate::str::contains("陳小明"))
        .stdout(predicate::str::contains("20 entries"));
}

#[test]
fn list_empty_roster() {
    lg().arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("No names in the roster"));
}

#[test]
fn list_fails_missing_file() {
    lg().args(["list", "/nonexistent/names.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"))
        .stderr(predicate::str::contains("names.txt"));
}

// ---------------------------------------------------------------------------
// dedupe
// ---------------------------------------------------------------------------

#[test]
fn dedupe_prints_unique_names() {
    lg().args(["dedupe", "-n", "Ann,Ben,Ann,Cat,Ben"])
        .assert()
        .success()
        .stdout("Ann\nBen\nCat\n");
}

#[test]
fn dedupe_writes_file() {
    let dir = test_roster();
    let out = dir.path().join("unique.txt");
    lg().arg("dedupe")
        .arg(dir.path().join("names.txt"))
        .arg("-o")
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 6 names"))
        .stdout(predicate::str::contains("1 duplicates removed"));
    assert_eq!(
        fs::read_to_string(&out).unwrap(),
        "Alice\nBob\nCarol\nDave\nEve\nFrank\n"
    );
}

// ---------------------------------------------------------------------------
// draw
// ---------------------------------------------------------------------------

#[test]
fn draw_single_winner() {
    lg().args(["draw", "-n", "Solo"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Winners (1)"))
        .stdout(predicate::str::contains("Solo"))
        .stdout(predicate::str::contains("pool: 0 / 1"));
}

#[test]
fn draw_animated_still_reports_winner() {
    lg().args(["draw", "-n", "Solo", "--animate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Winners (1)"))
        .stdout(predicate::str::contains("Solo"))
        .stdout(predicate::str::contains("pool: 0 / 1"));
}

#[test]
fn draw_without_repeats_exhausts_pool() {
    lg().args(["draw", "-n", "A,B,C", "-c", "5", "-s", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Winners (3)"))
        .stdout(predicate::str::contains("All names have been drawn."));
}

#[test]
fn draw_with_repeats_keeps_going() {
    lg().args(["draw", "-n", "A,B", "-c", "5", "--allow-repeats", "-s", "7"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Winners (5)"))
        .stdout(predicate::str::contains("pool: 2 / 2"))
        .stdout(predicate::str::contains("All names have been drawn.").not());
}

#[test]
fn draw_is_reproducible_with_seed() {
    let run = || {
        lg().args(["draw", "--sample", "-c", "3", "-s", "42"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn draw_empty_roster() {
    lg().arg("draw")
        .assert()
        .success()
        .stdout(predicate::str::contains("No names in the roster"));
}

// ---------------------------------------------------------------------------
// group
// ---------------------------------------------------------------------------

#[test]
fn group_by_size() {
    lg().args(["group", "-n", "A,B,C,D,E,F,G", "-k", "3", "-s", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Group 3"))
        .stdout(predicate::str::contains("3 groups, 7 names"));
}

#[test]
fn group_by_count() {
    lg().args(["group", "-n", "A,B,C,D,E", "-b", "count", "-k", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("2 groups, 5 names"))
        .stdout(predicate::str::contains("number of groups 2"));
}

#[test]
fn group_csv_output() {
    lg().args(["group", "-n", "A,B,C,D", "-k", "2", "-f", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("組別,姓名\n"))
        .stdout(predicate::str::contains("第 1 組,"))
        .stdout(predicate::str::contains("第 2 組,"));
}

#[test]
fn group_json_output() {
    lg().args(["group", "-n", "A,B,C", "-f", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"method\": \"by_size\""))
        .stdout(predicate::str::contains("\"generated_at\""));
}

#[test]
fn group_writes_output_file() {
    let dir = TempDir::new().unwrap();
    let out = dir.path().join("groups.csv");
    lg().args(["group", "-n", "A,B,C", "-f", "csv", "-o"])
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote 1 groups"));
    let csv = fs::read_to_string(&out).unwrap();
    assert_eq!(csv.lines().count(), 4);
}

#[test]
fn group_export_creates_dated_file() {
    let dir = TempDir::new().unwrap();
    lg().args(["group", "-n", "A,B,C,D"])
        .arg("--export")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Exported to"));

    let names: Vec<String> = fs::read_dir(dir.path())
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    assert_eq!(names.len(), 1);
    assert!(names[0].starts_with("grouping_result_"));
    assert!(names[0].ends_with(".csv"));
}

#[test]
fn group_unsupported_format() {
    lg().args(["group", "-n", "A", "-f", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported format"));
}

#[test]
fn group_unsupported_method() {
    lg().args(["group", "-n", "A", "-b", "random"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unsupported method"));
}

#[test]
fn group_empty_roster() {
    lg().args(["group", "-n", " , ,"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No names in the roster"));
}

#[test]
fn group_dedupe_flag() {
    lg().args(["group", "-n", "A,A,B", "--dedupe", "-k", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("1 groups, 2 names"));
}

// ---------------------------------------------------------------------------
// tui
// ---------------------------------------------------------------------------

#[test]
fn tui_rejects_unknown_tab() {
    lg().args(["tui", "--tab", "dice"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tab"));
}

#[test]
fn verbose_logs_go_to_stderr_for_batch_commands() {
    lg().args(["-v", "list", "-n", "Ann"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stderr(predicate::str::contains("added names from text"));
}

#[test]
fn tui_installs_no_stderr_logger() {
    lg().args(["-v", "tui", "-n", "Ann", "--tab", "dice"])
        .env("RUST_LOG", "debug")
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown tab"))
        .stderr(predicate::str::contains("added names from text").not())
        .stderr(predicate::str::contains("DEBUG").not());
}
