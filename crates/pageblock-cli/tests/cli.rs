//! End-to-end tests for the `pageblock` binary.

mod common;

use common::{parse_json, OutputAssertions, TestContext};
use predicates::prelude::*;

#[test]
fn compute_prints_every_field() {
    let ctx = TestContext::new();
    let output = ctx
        .command()
        .args(["compute", "--total", "200", "--per-page", "10", "--per-block", "5", "--page", "7"])
        .output()
        .unwrap();

    output.assert_success();
    for line in [
        "total_pages: 20",
        "current_page: 7",
        "prev_page: 6",
        "next_page: 8",
        "start_of_block: 6",
        "end_of_block: 10",
        "prev_block_page: 5",
        "next_block_page: 11",
        "start_of_slice: 60",
        "end_of_slice: 69",
        "length_of_slice: 10",
    ] {
        output.assert_stdout_contains(line);
    }
}

#[test]
fn compute_json_output() {
    let ctx = TestContext::new();
    let output = ctx
        .command()
        .args(["--format", "json", "compute", "-t", "200", "--per-page", "10", "--per-block", "5", "-p", "999"])
        .output()
        .unwrap();

    output.assert_success();
    let json = parse_json(&output.stdout);
    assert_eq!(json["current_page"], 20);
    assert_eq!(json["end_of_block"], 20);
    assert!(json["next_page"].is_null());
    assert!(json["next_block_page"].is_null());
}

#[test]
fn compute_clamps_negative_page() {
    TestContext::new()
        .command()
        .args(["compute", "--total", "50", "--page", "-3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("current_page: 1"))
        .stdout(predicate::str::contains("prev_page: -"));
}

#[test]
fn compute_uses_built_in_defaults() {
    // 10 entries per page, 10 pages per block
    TestContext::new()
        .command()
        .args(["compute", "--total", "250", "--page", "12"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_pages: 25"))
        .stdout(predicate::str::contains("start_of_block: 11"))
        .stdout(predicate::str::contains("end_of_block: 20"));
}

#[test]
fn compute_uses_project_config() {
    let ctx = TestContext::new().with_project_config(
        r#"
pagination:
  entries_per_page: 25
  pages_per_block: 3
"#,
    );

    ctx.command()
        .args(["compute", "--total", "100", "--page", "4"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_pages: 4"))
        .stdout(predicate::str::contains("start_of_block: 4"))
        .stdout(predicate::str::contains("start_of_slice: 75"));
}

#[test]
fn flags_override_config() {
    let ctx = TestContext::new().with_project_config("pagination:\n  entries_per_page: 25\n");

    ctx.command()
        .args(["compute", "--total", "100", "--per-page", "50"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_pages: 2"));
}

#[test]
fn explicit_config_file() {
    let ctx = TestContext::new();
    let path = ctx.write_file("paging.yaml", "pagination:\n  entries_per_page: 7\n");

    ctx.command()
        .arg("--config")
        .arg(&path)
        .args(["compute", "--total", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_pages: 3"));
}

#[test]
fn environment_overrides_config() {
    let ctx = TestContext::new().with_project_config("pagination:\n  entries_per_page: 25\n");

    ctx.command()
        .env("PAGEBLOCK_ENTRIES_PER_PAGE", "40")
        .args(["compute", "--total", "100"])
        .assert()
        .success()
        .stdout(predicate::str::contains("total_pages: 3"));
}

#[test]
fn invalid_divisor_exits_with_validation_code() {
    let output = TestContext::new()
        .command()
        .args(["compute", "--total", "200", "--per-page", "0"])
        .output()
        .unwrap();

    output.assert_exit_code(5);
    output.assert_stderr_contains("entries_per_page must be at least 1 (got 0)");
}

#[test]
fn empty_listing_exits_with_validation_code() {
    let output = TestContext::new()
        .command()
        .args(["compute", "--total", "0"])
        .output()
        .unwrap();

    output.assert_exit_code(5);
    output.assert_stderr_contains("total_entries must be at least 1");
}

#[test]
fn missing_config_file_exits_with_config_code() {
    let output = TestContext::new()
        .command()
        .args(["--config", "does-not-exist.yaml", "compute", "--total", "10"])
        .output()
        .unwrap();

    output.assert_exit_code(2);
    output.assert_stderr_contains("config file not found");
}

#[test]
fn invalid_config_value_exits_with_config_code() {
    let output = TestContext::new()
        .with_project_config("pagination:\n  pages_per_block: 0\n")
        .command()
        .args(["compute", "--total", "10"])
        .output()
        .unwrap();

    output.assert_exit_code(2);
    output.assert_stderr_contains("pages_per_block");
}

#[test]
fn dotenv_supplies_config_path() {
    let ctx = TestContext::new();
    ctx.write_file("paging.yaml", "pagination:\n  entries_per_page: 7\n");
    ctx.write_file(".env", "PAGEBLOCK_CONFIG=paging.yaml\n");

    ctx.command()
        .args(["compute", "--total", "20"])
        .assert()
        .success()
        .stdout(predicate::str::contains("entries_per_page: 7"))
        .stdout(predicate::str::contains("total_pages: 3"));
}

#[test]
fn dotenv_supplies_overrides() {
    let ctx = TestContext::new();
    ctx.write_file(".env", "PAGEBLOCK_PAGES_PER_BLOCK=3\n");

    ctx.command()
        .args(["compute", "--total", "100", "--page", "5"])
        .assert()
        .success()
        .stdout(predicate::str::contains("start_of_block: 4"))
        .stdout(predicate::str::contains("end_of_block: 6"));
}

#[test]
fn malformed_dotenv_exits_with_config_code() {
    let ctx = TestContext::new();
    ctx.write_file(".env", "PAGEBLOCK_ENTRIES_PER_PAGE='unterminated\n");

    let output = ctx
        .command()
        .args(["compute", "--total", "20"])
        .output()
        .unwrap();

    output.assert_exit_code(2);
    output.assert_stderr_contains("error[E002]");
    output.assert_stderr_contains("failed to load .env file");
}

#[test]
fn debug_logging_reports_loaded_config() {
    TestContext::new()
        .command()
        .args(["-vv", "compute", "--total", "20"])
        .assert()
        .success()
        .stderr(predicate::str::contains("configuration loaded"))
        .stderr(predicate::str::contains("operation completed"));
}

#[test]
fn config_command_shows_effective_config() {
    let ctx = TestContext::new().with_project_config("pagination:\n  pages_per_block: 4\n");
    let output = ctx
        .command()
        .args(["config", "--format", "json"])
        .output()
        .unwrap();

    output.assert_success();
    let json = parse_json(&output.stdout);
    assert_eq!(json["pagination"]["pages_per_block"], 4);
    assert_eq!(json["pagination"]["entries_per_page"], 10);
    assert_eq!(json["logging"]["format"], "pretty");
}

#[test]
fn no_arguments_prints_help() {
    TestContext::new()
        .command()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
