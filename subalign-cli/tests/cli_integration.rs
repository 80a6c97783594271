//! Integration tests for the subalign CLI

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Helper to get the absolute path to a test fixture
fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn subalign() -> Command {
    Command::cargo_bin("subalign").unwrap()
}

#[test]
fn align_writes_csv_with_matched_then_unmatched_rows() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("result.csv");

    subalign()
        .arg("align")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Matched 1 of 2 reference segments"));

    let content = fs::read_to_string(&output).unwrap();
    assert_eq!(
        content,
        "ref_text,cmp_text\nHello there.,안녕하세요.\nHow are you?,\n,잘 지내요?\n"
    );
}

#[test]
fn align_json_output_parses() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("result.json");

    subalign()
        .arg("align")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .arg("-o")
        .arg(&output)
        .arg("-f")
        .arg("json")
        .arg("-q")
        .assert()
        .success();

    let parsed: serde_json::Value =
        serde_json::from_slice(&fs::read(&output).unwrap()).unwrap();
    let rows = parsed.as_array().unwrap();
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0]["ref_text"], "Hello there.");
    assert_eq!(rows[0]["cmp_text"], "안녕하세요.");
    assert_eq!(rows[2]["ref_text"], "");
}

#[test]
fn align_rejects_out_of_range_shift() {
    let temp_dir = TempDir::new().unwrap();

    subalign()
        .current_dir(temp_dir.path())
        .arg("align")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .arg("--shift")
        .arg("7200")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid parameter 'shift'"));

    // The failed run must not leave a result file behind
    assert!(!temp_dir.path().join("matched_subtitles.csv").exists());
}

#[test]
fn align_applies_a_negative_shift() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("result.csv");

    // Shifting by -4.7s moves the late Korean segment (10.0s) to 14.7s and
    // the first one (0.3s) to 5.0s, exactly onto "How are you?"
    subalign()
        .arg("align")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .arg("--shift")
        .arg("-4.7")
        .arg("-o")
        .arg(&output)
        .arg("-q")
        .assert()
        .success();

    let content = fs::read_to_string(&output).unwrap();
    assert!(content.contains("How are you?,안녕하세요."));
}

#[test]
fn align_rejects_non_srt_files() {
    subalign()
        .arg("align")
        .arg("-r")
        .arg(fixture_path("notes.txt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("not an SRT file"));
}

#[test]
fn manual_pairs_print_interval() {
    subalign()
        .arg("manual")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .arg("--ref-indices")
        .arg("(0,1)")
        .arg("--cmp-indices")
        .arg("(0)")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "00:00:00.000\tHello there.\t00:00:00.300\t안녕하세요.\t00:00:00.300",
        ))
        // Zip truncates to the shorter list: no second data row
        .stdout(predicate::str::contains("How are you?").not());
}

#[test]
fn manual_rejects_malformed_index_literal() {
    subalign()
        .arg("manual")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .arg("--ref-indices")
        .arg("(2,x)")
        .arg("--cmp-indices")
        .arg("(0)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("malformed index list"));
}

#[test]
fn manual_rejects_out_of_range_index() {
    subalign()
        .arg("manual")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .arg("--ref-indices")
        .arg("(99)")
        .arg("--cmp-indices")
        .arg("(0)")
        .assert()
        .failure()
        .stderr(predicate::str::contains("out of bounds"));
}

#[test]
fn inspect_previews_both_tracks() {
    subalign()
        .arg("inspect")
        .arg("-r")
        .arg(fixture_path("english-sample.srt"))
        .arg("-c")
        .arg(fixture_path("korean-sample.srt"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Reference track (2 segments):"))
        .stdout(predicate::str::contains("Comparison track (2 segments):"))
        .stdout(predicate::str::contains("00:00:00.000\t00:00:02.000\tHello there."))
        .stdout(predicate::str::contains("00:00:10.000\t00:00:12.000\t잘 지내요?"));
}

#[test]
fn clean_is_idempotent() {
    let temp_dir = TempDir::new().unwrap();
    let output = temp_dir.path().join("result.csv");
    fs::write(&output, "ref_text,cmp_text\n").unwrap();

    subalign()
        .arg("clean")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Deleted"));
    assert!(!output.exists());

    // Second run is a no-op, still a success
    subalign()
        .arg("clean")
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::contains("Nothing to delete"));
}
