/// CLI binary integration tests using assert_cmd
///
/// These tests invoke the actual binary and verify command-line behavior
mod common;

use std::process::Command;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use serde_json::Value;

use common::{ClaudeDirBuilder, HistoryEntryBuilder, realistic_claude_dir};

fn reporter() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_claude-json-reporter"));
    cmd.env_remove("CLAUDE_CONFIG_DIR").env_remove("RUST_LOG");
    cmd
}

fn stdout_json(cmd: &mut Command) -> Value {
    let output = cmd.output().unwrap();
    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    serde_json::from_slice(&output.stdout).unwrap()
}

#[test]
fn test_cli_projects_command() {
    let claude_dir = realistic_claude_dir();

    let json = stdout_json(reporter().arg("--claude-dir").arg(claude_dir.path()).arg("projects"));

    assert_eq!(json["count"], 2);
    assert_eq!(json["projects"][0]["path"], "/Users/test/project1");
    assert_eq!(json["projects"][0]["encodedPath"], "-Users-test-project1");
    assert_eq!(json["projects"][0]["sessionCount"], 2);
}

#[test]
fn test_cli_claude_dir_from_environment() {
    let claude_dir = realistic_claude_dir();

    let json = stdout_json(reporter().env("CLAUDE_CONFIG_DIR", claude_dir.path()).arg("projects"));
    assert_eq!(json["count"], 2);
}

#[test]
fn test_cli_default_claude_dir_under_home() {
    let temp_home = tempfile::TempDir::new().unwrap();
    let claude_dir = temp_home.path().join(".claude");
    std::fs::create_dir(&claude_dir).unwrap();
    std::fs::write(
        claude_dir.join("history.jsonl"),
        HistoryEntryBuilder::new().display("from home").to_json(),
    )
    .unwrap();

    let json = stdout_json(reporter().env("HOME", temp_home.path()).arg("history"));
    assert_eq!(json["entries"][0]["display"], "from home");
}

#[test]
fn test_cli_sessions_command() {
    let claude_dir = realistic_claude_dir();

    let json = stdout_json(
        reporter()
            .arg("sessions")
            .arg("/Users/test/project1")
            .arg("--claude-dir")
            .arg(claude_dir.path()),
    );

    assert_eq!(json["projectPath"], "/Users/test/project1");
    assert_eq!(json["count"], 2);
    assert_eq!(json["sessions"][0]["id"], "550e8400-e29b-41d4-a716-446655440001");
}

#[test]
fn test_cli_history_command_with_filters() {
    let claude_dir = realistic_claude_dir();

    let json = stdout_json(
        reporter()
            .arg("--claude-dir")
            .arg(claude_dir.path())
            .args(["history", "--project", "/Users/test/project1", "--limit", "1"]),
    );

    assert_eq!(json["totalCount"], 2);
    assert_eq!(json["returnedCount"], 1);
    assert_eq!(json["entries"][0]["display"], "Third prompt");
    assert_eq!(json["entries"][0]["timestamp"], "2024-01-15T12:00:00.000Z");
}

#[test]
fn test_cli_history_invalid_date() {
    let claude_dir = ClaudeDirBuilder::new().with_history("").build();

    reporter()
        .arg("--claude-dir")
        .arg(claude_dir.path())
        .args(["history", "--start-date", "last tuesday"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid start_date"));
}

#[test]
fn test_cli_session_command() {
    let claude_dir = realistic_claude_dir();

    let json = stdout_json(reporter().arg("--claude-dir").arg(claude_dir.path()).args([
        "session",
        "/Users/test/project1",
        "550e8400-e29b-41d4-a716-446655440000",
    ]));

    assert_eq!(json["sessionId"], "550e8400-e29b-41d4-a716-446655440000");
    assert_eq!(json["summary"]["userMessageCount"], 1);
    assert_eq!(json["summary"]["assistantMessageCount"], 1);
    assert_eq!(json["summary"]["toolUseCount"], 1);
    assert_eq!(json["messages"][0]["role"], "user");
    assert_eq!(json["messages"][0]["text"], "Hello from project");
    assert_eq!(json["messages"][1]["text"], "Reading it");
}

#[test]
fn test_cli_session_not_found() {
    let claude_dir = realistic_claude_dir();

    reporter()
        .arg("--claude-dir")
        .arg(claude_dir.path())
        .args(["session", "/Users/test/project1", "nope"])
        .assert()
        .failure()
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Session not found: nope"));
}

#[test]
fn test_cli_corrupted_history_fails() {
    let claude_dir = ClaudeDirBuilder::new()
        .with_history("{\"display\":\"Valid 1\",\"timestamp\":1000}\ninvalid line\n")
        .build();

    reporter()
        .arg("--claude-dir")
        .arg(claude_dir.path())
        .arg("history")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse line 2"));
}

#[test]
fn test_cli_serve_over_stdio() {
    let claude_dir = realistic_claude_dir();
    let input = concat!(
        r#"{"jsonrpc":"2.0","id":1,"method":"initialize","params":{}}"#,
        "\n",
        r#"{"jsonrpc":"2.0","method":"notifications/initialized"}"#,
        "\n",
        r#"{"jsonrpc":"2.0","id":2,"method":"tools/call","params":{"name":"get_history","arguments":{"limit":2}}}"#,
        "\n",
    );

    let mut serve = reporter();
    serve.arg("--claude-dir").arg(claude_dir.path()).arg("serve");
    let output = assert_cmd::Command::from_std(serve).write_stdin(input).output().unwrap();
    assert!(output.status.success());

    let responses: Vec<Value> = String::from_utf8(output.stdout)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect();
    assert_eq!(responses.len(), 2);
    assert_eq!(responses[0]["result"]["serverInfo"]["name"], "claude-json-reporter");

    let text = responses[1]["result"]["content"][0]["text"].as_str().unwrap();
    let history: Value = serde_json::from_str(text).unwrap();
    assert_eq!(history["totalCount"], 3);
    assert_eq!(history["returnedCount"], 2);
}

#[test]
fn test_cli_no_command_shows_help_message() {
    reporter().assert().success().stdout(predicate::str::contains("Use --help for usage information"));
}

#[test]
fn test_cli_help_flag() {
    reporter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Claude Code"))
        .stdout(predicate::str::contains("projects"))
        .stdout(predicate::str::contains("serve"));
}

#[test]
fn test_cli_version_flag() {
    reporter()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn test_cli_invalid_command() {
    reporter().arg("invalid-command").assert().failure();
}
