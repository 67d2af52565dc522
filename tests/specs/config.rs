//! Behavioral specs for configuration loading.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

#[test]
fn discovered_config_caps_output() {
    let dir = temp_project();
    std::fs::write(
        dir.path().join("gotest-summary.toml"),
        "version = 1\n[output]\nmax_lines_per_test = 1\n",
    )
    .unwrap();

    let json = aggregate()
        .fixture("noisy.jsonl")
        .pwd(dir.path())
        .passes()
        .json();
    assert_eq!(
        json["nodes"]["TestNoisy"]["output_lines"],
        serde_json::json!(["line 1"])
    );
}

#[test]
fn flag_overrides_config_cap() {
    let dir = temp_project();
    std::fs::write(
        dir.path().join("gotest-summary.toml"),
        "version = 1\n[output]\nmax_lines_per_test = 1\n",
    )
    .unwrap();

    let json = aggregate()
        .fixture("noisy.jsonl")
        .pwd(dir.path())
        .args(&["--max-output-lines", "4"])
        .passes()
        .json();
    assert_eq!(json["nodes"]["TestNoisy"]["dropped_output_lines"], 1);
}

#[test]
fn explicit_config_via_env() {
    let dir = temp_project();
    let config = dir.path().join("ci.toml");
    std::fs::write(&config, "version = 1\n[output]\nmax_lines_per_test = 0\n").unwrap();

    let json = aggregate()
        .fixture("noisy.jsonl")
        .pwd(dir.path())
        .env("GOTEST_SUMMARY_CONFIG", config.to_str().unwrap())
        .passes()
        .json();
    assert_eq!(json["nodes"]["TestNoisy"]["dropped_output_lines"], 5);
}

#[test]
fn missing_explicit_config_is_config_error() {
    let dir = temp_project();
    aggregate()
        .fixture("noisy.jsonl")
        .pwd(dir.path())
        .args(&["-C", "missing.toml"])
        .exits(2)
        .stderr_has("config file not found");
}

#[test]
fn unsupported_version_is_config_error() {
    let dir = temp_project();
    std::fs::write(dir.path().join("gotest-summary.toml"), "version = 9\n").unwrap();

    aggregate()
        .fixture("noisy.jsonl")
        .pwd(dir.path())
        .exits(2)
        .stderr_has("unsupported config version 9");
}

#[test]
fn unknown_keys_warn_but_succeed() {
    let dir = temp_project();
    std::fs::write(
        dir.path().join("gotest-summary.toml"),
        "version = 1\ntheme = \"dark\"\n",
    )
    .unwrap();

    aggregate()
        .fixture("noisy.jsonl")
        .pwd(dir.path())
        .passes()
        .stderr_has("unrecognized field `theme`");
}
