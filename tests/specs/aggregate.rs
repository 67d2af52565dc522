//! Behavioral specs for the aggregate command.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

// =============================================================================
// Result Set
// =============================================================================

#[test]
fn aggregates_fixture_rollups() {
    let run = aggregate().fixture("basic.jsonl").passes();
    let json = run.json();

    assert_eq!(json["total_tests"], 4);
    assert_eq!(json["passed_tests"], 2);
    assert_eq!(json["failed_tests"], 1);
    assert_eq!(json["skipped_tests"], 1);
    let total = json["total_duration"].as_f64().unwrap();
    assert!((total - 1.48).abs() < 1e-9, "total_duration = {total}");
    assert_eq!(
        json["sorted_root_names"],
        serde_json::json!(["TestAdd", "TestDivide", "TestParallel", "TestSlow"])
    );
}

#[test]
fn derives_duration_from_timestamps_without_elapsed() {
    let json = aggregate().fixture("basic.jsonl").passes().json();
    let duration = json["nodes"]["TestAdd"]["duration"].as_f64().unwrap();
    assert!((duration - 0.25).abs() < 1e-9);
}

#[test]
fn nests_subtests_under_parent() {
    let json = aggregate().fixture("basic.jsonl").passes().json();
    let divide = &json["nodes"]["TestDivide"];

    assert_eq!(divide["status"], "FAIL");
    assert_eq!(
        divide["child_names"],
        serde_json::json!(["TestDivide/by_zero", "TestDivide/positive"])
    );

    let by_zero = &json["nodes"]["TestDivide/by_zero"];
    assert_eq!(by_zero["parent_name"], "TestDivide");
    assert_eq!(by_zero["status"], "FAIL");
    assert_eq!(
        by_zero["output_lines"],
        serde_json::json!([
            "=== RUN   TestDivide/by_zero",
            "    calc_test.go:21: expected error, got 0",
            "    --- FAIL: TestDivide/by_zero (0.01s)"
        ])
    );
}

#[test]
fn skipped_test_keeps_output() {
    let json = aggregate().fixture("basic.jsonl").passes().json();
    let slow = &json["nodes"]["TestSlow"];
    assert_eq!(slow["status"], "SKIP");
    assert_eq!(slow["duration"], 0.0);
    assert_eq!(
        slow["output_lines"],
        serde_json::json!(["    calc_test.go:40: skipping in short mode"])
    );
}

#[test]
fn compact_output_is_exact() {
    aggregate().fixture("tiny.jsonl").args(&["--compact"]).passes().stdout_eq(concat!(
        r#"{"total_tests":1,"passed_tests":1,"failed_tests":0,"skipped_tests":0,"total_duration":1.5,"#,
        r#""nodes":{"TestA":{"name":"TestA","package":"example.com/pkg","status":"PASS","duration":1.5,"output_lines":[],"child_names":["TestA/sub"]},"#,
        r#""TestA/sub":{"name":"TestA/sub","package":"example.com/pkg","status":"PASS","duration":0.5,"output_lines":["ok"],"parent_name":"TestA","child_names":[]}},"#,
        r#""sorted_root_names":["TestA"]}"#,
        "\n"
    ));
}

#[test]
fn repeated_runs_are_byte_identical() {
    let first = aggregate().fixture("basic.jsonl").passes().stdout();
    let second = aggregate().fixture("basic.jsonl").passes().stdout();
    similar_asserts::assert_eq!(first, second);
}

#[test]
fn reads_events_from_stdin() {
    let input = std::fs::read_to_string(fixture("tiny.jsonl")).unwrap();
    let from_stdin = aggregate().stdin(&input).args(&["--compact"]).passes().stdout();
    let from_file = aggregate()
        .fixture("tiny.jsonl")
        .args(&["--compact"])
        .passes()
        .stdout();
    similar_asserts::assert_eq!(from_stdin, from_file);
}

#[test]
fn empty_stdin_yields_empty_result_set() {
    let json = aggregate().stdin("").passes().json();
    assert_eq!(json["total_tests"], 0);
    assert_eq!(json["nodes"], serde_json::json!({}));
    assert_eq!(json["sorted_root_names"], serde_json::json!([]));
}

// =============================================================================
// Output cap
// =============================================================================

#[test]
fn max_output_lines_flag_caps_output() {
    let json = aggregate()
        .fixture("noisy.jsonl")
        .args(&["--max-output-lines", "2"])
        .passes()
        .json();
    let noisy = &json["nodes"]["TestNoisy"];
    assert_eq!(noisy["output_lines"], serde_json::json!(["line 1", "line 2"]));
    assert_eq!(noisy["dropped_output_lines"], 3);
}

#[test]
fn output_is_uncapped_by_default() {
    let json = aggregate().fixture("noisy.jsonl").passes().json();
    let noisy = &json["nodes"]["TestNoisy"];
    assert_eq!(noisy["output_lines"].as_array().unwrap().len(), 5);
    assert!(noisy.get("dropped_output_lines").is_none());
}

// =============================================================================
// Errors
// =============================================================================

#[test]
fn malformed_line_fails_without_result() {
    aggregate()
        .fixture("malformed.jsonl")
        .exits(1)
        .stdout_empty()
        .stderr_has("malformed event on line 3");
}

#[test]
fn missing_input_file_is_internal_error() {
    aggregate()
        .args(&["--input", "/nonexistent/events.jsonl"])
        .exits(3)
        .stdout_empty()
        .stderr_has("/nonexistent/events.jsonl");
}

#[test]
fn logging_goes_to_stderr() {
    let run = aggregate()
        .fixture("tiny.jsonl")
        .env("GOTEST_SUMMARY_LOG", "info")
        .args(&["--compact"])
        .passes();
    let stderr = run.stderr();
    assert!(stderr.contains("aggregated 1 tests"), "stderr:\n{stderr}");
    // stdout stays machine-readable
    run.json();
}
