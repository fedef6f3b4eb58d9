//! Integration tests for the `sjson` CLI binary.
//!
//! These tests use `assert_cmd` and `predicates` to exercise the render, check,
//! get, keys, and to-json subcommands through the actual binary, including
//! stdin/stdout piping, file I/O, and error reporting.

// `Command::cargo_bin` was deprecated in assert_cmd 2.1.2 in favor of
// `cargo::cargo_bin_cmd!`. Allow it until we migrate.
#![allow(deprecated)]

use assert_cmd::Command;
use predicates::prelude::*;

/// Helper: path to the sample.json fixture.
fn sample_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/sample.json")
}

/// Helper: path to the invalid.json fixture.
fn invalid_json_path() -> &'static str {
    concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/invalid.json")
}

fn sjson() -> Command {
    Command::cargo_bin("sjson").unwrap()
}

// ─────────────────────────────────────────────────────────────────────────────
// render
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn render_stdin_to_stdout() {
    sjson()
        .arg("render")
        .write_stdin(r#"{"a":1,"b":"x"}"#)
        .assert()
        .success()
        .stdout("{\n\"a\" : 1,\n\"b\" : \"x\"\n}\n");
}

#[test]
fn render_file_to_stdout() {
    sjson()
        .args(["render", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"name\" : \"Alice\","))
        .stdout(predicate::str::contains("\"a,b:c{d}\""));
}

#[test]
fn render_file_to_file_reparses() {
    let output_path = std::env::temp_dir().join("sjson-test-render-output.json");
    let output = output_path.to_str().unwrap();
    let _ = std::fs::remove_file(&output_path);

    sjson()
        .args(["render", "-i", sample_json_path(), "-o", output])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let content = std::fs::read_to_string(&output_path).expect("output file must exist");
    let original = serde_parse(&std::fs::read_to_string(sample_json_path()).unwrap());
    let rendered = serde_parse(&content);
    assert_eq!(original, rendered);

    let _ = std::fs::remove_file(&output_path);
}

/// Parse via serde_json for an independent comparison of the two documents.
fn serde_parse(text: &str) -> serde_json::Value {
    serde_json::from_str(text).expect("rendered output must be valid JSON")
}

#[test]
fn render_invalid_input_fails() {
    sjson()
        .args(["render", "-i", invalid_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse JSON document"));
}

#[test]
fn render_missing_file_fails() {
    sjson()
        .args(["render", "-i", "/nonexistent/input.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

// ─────────────────────────────────────────────────────────────────────────────
// check
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn check_valid_document() {
    sjson()
        .args(["check", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("ok\n");
}

#[test]
fn check_unbalanced_document() {
    sjson()
        .args(["check", "-i", invalid_json_path()])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("UnbalancedFragment"));
}

#[test]
fn check_root_array() {
    sjson()
        .arg("check")
        .write_stdin("[1,2]")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("NotAnObject"));
}

#[test]
fn check_respects_max_depth() {
    sjson()
        .args(["--max-depth", "2", "check"])
        .write_stdin(r#"{"a":{"b":[1]}}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("DepthLimitExceeded"));
}

#[test]
fn check_verbose_logs_failure() {
    sjson()
        .args(["-v", "check"])
        .env_remove("RUST_LOG")
        .write_stdin(r#"{"a":}"#)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to parse document"));
}

// ─────────────────────────────────────────────────────────────────────────────
// get / keys
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn get_primitive_member() {
    sjson()
        .args(["get", "age", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("30\n");
}

#[test]
fn get_object_member() {
    sjson()
        .args(["get", "address", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("{\n\"city\" : \"Paris\",\n\"zip\" : \"75001\"\n}\n");
}

#[test]
fn get_missing_member_fails() {
    sjson()
        .args(["get", "nope", "-i", sample_json_path()])
        .assert()
        .failure()
        .stderr(predicate::str::contains("No top-level member named 'nope'"));
}

#[test]
fn keys_in_document_order() {
    sjson()
        .args(["keys", "-i", sample_json_path()])
        .assert()
        .success()
        .stdout("name\nage\nscore\nactive\nmanager\naddress\ntags\n");
}

// ─────────────────────────────────────────────────────────────────────────────
// to-json
// ─────────────────────────────────────────────────────────────────────────────

#[test]
fn to_json_compact() {
    sjson()
        .arg("to-json")
        .write_stdin("{ \"a\" : [1, 2.5, \"x\"], \"b\" : null }")
        .assert()
        .success()
        .stdout("{\"a\":[1,2.5,\"x\"],\"b\":null}\n");
}

#[test]
fn to_json_pretty_is_valid_json() {
    let output = sjson()
        .args(["to-json", "--pretty", "-i", sample_json_path()])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["address"]["city"], "Paris");
    assert_eq!(value["tags"][1], "a,b:c{d}");
}

#[test]
fn no_subcommand_shows_usage() {
    sjson()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}
