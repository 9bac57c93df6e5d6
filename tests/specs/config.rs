//! Behavioral specs for otabudget.toml.
//!
//! Tests that otabudget correctly handles:
//! - artifact.path (relative to the config file)
//! - output.format
//! - -C/--config and OTABUDGET_CONFIG
//! - version validation and unknown keys

#![allow(clippy::unwrap_used, clippy::expect_used)]

use crate::prelude::*;

/// > artifact.path overrides the default artifact
#[test]
fn config_artifact_path_is_used() {
    let temp = Project::empty();
    temp.config("[artifact]\npath = \"out/firmware.bin\"\n");
    temp.artifact("out/firmware.bin", 42);

    check(temp.path())
        .passes()
        .stdout_has("App binary: 42 bytes");
}

/// > artifact.path resolves against the config directory, not the cwd
#[test]
fn config_artifact_path_relative_to_config_dir() {
    let temp = Project::empty();
    temp.config("[artifact]\npath = \"out/firmware.bin\"\n");
    temp.artifact("out/firmware.bin", 42);
    std::fs::create_dir_all(temp.path().join("sub/dir")).unwrap();

    check(&temp.path().join("sub/dir"))
        .passes()
        .stdout_has("App binary: 42 bytes");
}

/// > A positional argument beats artifact.path
#[test]
fn positional_overrides_config_artifact() {
    let temp = Project::empty();
    temp.config("[artifact]\npath = \"out/firmware.bin\"\n");
    temp.artifact("out/firmware.bin", 42);
    temp.artifact("other.bin", BUDGET + 1);

    check(temp.path()).arg("other.bin").exceeds();
}

/// > output.format = "json" selects JSON output
#[test]
fn config_output_format_json() {
    let temp = Project::empty();
    temp.config("[output]\nformat = \"json\"\n");
    temp.artifact("build/main_app.bin", 7);

    let run = check(temp.path()).passes();
    let json: serde_json::Value = serde_json::from_str(&run.stdout()).unwrap();
    assert_eq!(json["size_bytes"], 7);
}

/// > --output beats output.format
#[test]
fn flag_overrides_config_output_format() {
    let temp = Project::empty();
    temp.config("[output]\nformat = \"json\"\n");
    temp.artifact("build/main_app.bin", 7);

    check(temp.path())
        .args(&["-o", "text"])
        .passes()
        .stdout_has("App binary: 7 bytes");
}

/// > --config loads a config from a custom location
#[test]
fn explicit_config_flag() {
    let temp = Project::empty();
    temp.file("ci/size.toml", "version = 1\n[artifact]\npath = \"fw.bin\"\n");
    temp.artifact("ci/fw.bin", 3);

    check(temp.path())
        .args(&["--config", "ci/size.toml"])
        .passes()
        .stdout_has("App binary: 3 bytes");
}

/// > OTABUDGET_CONFIG sets the config file location
#[test]
fn env_config_sets_path() {
    let temp = Project::empty();
    temp.file("ci/size.toml", "version = 1\n[artifact]\npath = \"fw.bin\"\n");
    temp.artifact("ci/fw.bin", 3);
    let config_path = temp.path().join("ci/size.toml");

    check(temp.path())
        .env("OTABUDGET_CONFIG", config_path.to_str().unwrap())
        .passes()
        .stdout_has("App binary: 3 bytes");
}

/// > A missing explicit config is a config error
#[test]
fn missing_explicit_config_is_error() {
    let temp = Project::empty();
    temp.artifact("build/main_app.bin", 1);

    check(temp.path())
        .args(&["--config", "missing.toml"])
        .exits(EXIT_CONFIG)
        .stderr_has("config file not found");
}

/// > Unsupported config versions are rejected
#[test]
fn unsupported_version_is_error() {
    let temp = Project::empty();
    temp.config("version = 2\n");
    temp.artifact("build/main_app.bin", 1);

    check(temp.path())
        .exits(EXIT_CONFIG)
        .stderr_has("unsupported config version 2");
}

/// > Unknown keys warn but do not fail the check
#[test]
fn unknown_key_warns() {
    let temp = Project::empty();
    temp.config("[budget]\nslot_bytes = 1\n");
    temp.artifact("build/main_app.bin", BUDGET);

    check(temp.path())
        .passes()
        .stderr_has("unrecognized field `budget`")
        .stdout_has("Budget:     4718592 bytes (slot 4980736 - margin 262144)");
}
