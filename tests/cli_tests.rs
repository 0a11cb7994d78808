//! CLI boundary tests.
//!
//! These spawn the compiled binary and check exit statuses and the
//! user-facing error reporting: 0 on any completed comparison (ties
//! included), 1 on an invalid attribute selector or a bad card file.

use std::io::Write;
use std::process::{Command, Output};

fn run_trunfo(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_trunfo"))
        .args(args)
        .output()
        .expect("failed to spawn trunfo")
}

fn card_file(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file
}

#[test]
fn test_completed_comparison_exits_zero() {
    let output = run_trunfo(&["--attribute", "population"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Comparing cards on Population:"));
    assert!(stdout.contains("Result: Sao Paulo (SP) wins!"));
}

#[test]
fn test_quiet_skips_detail_blocks() {
    let output = run_trunfo(&["--attribute", "area", "--quiet"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(!stdout.contains("--- Card Details ---"));
    assert!(stdout.contains("Comparing cards on Area:"));
}

#[test]
fn test_tie_exits_zero() {
    let record = r#"{"state_code":"XX","card_code":"C000","city_name":"Twin",
                     "population":10,"area_km2":1.0,"gdp_billions":1.0,
                     "landmark_count":1}"#;
    let file = card_file(&format!("[{record},{record}]"));

    let output = run_trunfo(&["--cards", file.path().to_str().unwrap(), "--quiet"]);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert!(output.status.success());
    assert!(stdout.contains("Result: Tie!"));
}

#[test]
fn test_invalid_attribute_exits_one() {
    let output = run_trunfo(&["--attribute", "landmarks"]);
    let stderr = String::from_utf8_lossy(&output.stderr);
    let stdout = String::from_utf8_lossy(&output.stdout);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("invalid comparison attribute"));
    assert!(stderr.contains("landmarks"));
    // Fatal before any comparison or rendering runs.
    assert!(!stdout.contains("Comparing cards"));
}

#[test]
fn test_malformed_card_file_exits_one() {
    let file = card_file("not json at all");
    let output = run_trunfo(&["--cards", file.path().to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("failed to parse card file"));
}

#[test]
fn test_missing_card_file_exits_one() {
    let output = run_trunfo(&["--cards", "/nonexistent/cards.json"]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("failed to read card file"));
}

#[test]
fn test_wrong_card_count_exits_one() {
    let record = r#"{"state_code":"XX","card_code":"C000","city_name":"Solo",
                     "population":10,"area_km2":1.0,"gdp_billions":1.0,
                     "landmark_count":1}"#;
    let file = card_file(&format!("[{record}]"));

    let output = run_trunfo(&["--cards", file.path().to_str().unwrap()]);
    let stderr = String::from_utf8_lossy(&output.stderr);

    assert_eq!(output.status.code(), Some(1));
    assert!(stderr.contains("exactly two cards, found 1"));
}
