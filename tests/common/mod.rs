//! Shared test utilities for integration tests
#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, SystemTime};

use tempfile::TempDir;

/// Builder for creating test .claude directory structures
pub struct ClaudeDirBuilder {
    temp_dir: TempDir,
}

impl ClaudeDirBuilder {
    /// Create a new builder with an empty .claude directory
    pub fn new() -> Self {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        Self { temp_dir }
    }

    /// Get the path to the .claude directory
    pub fn path(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Add a history.jsonl file with the given content
    pub fn with_history(self, content: &str) -> Self {
        fs::write(self.temp_dir.path().join("history.jsonl"), content)
            .expect("Failed to write history.jsonl");
        self
    }

    /// Add history entries programmatically
    pub fn with_history_entries(self, entries: &[HistoryEntryBuilder]) -> Self {
        let content = entries.iter().map(|e| e.to_json()).collect::<Vec<_>>().join("\n");
        self.with_history(&content)
    }

    /// Add a project directory under its encoded name, with the given session files
    pub fn with_project(self, project_path: &str, sessions: &[SessionFileBuilder]) -> Self {
        let project_dir = self.project_dir(project_path);
        fs::create_dir_all(&project_dir).expect("Failed to create project dir");

        for session in sessions {
            session.create_in(&project_dir);
        }

        self
    }

    /// Add an arbitrary entry under `projects/` (e.g. a non-project directory)
    pub fn with_projects_entry(self, name: &str, is_dir: bool) -> Self {
        let path = self.temp_dir.path().join("projects").join(name);
        if is_dir {
            fs::create_dir_all(path).expect("Failed to create projects entry");
        } else {
            fs::create_dir_all(self.temp_dir.path().join("projects"))
                .expect("Failed to create projects dir");
            fs::write(path, "").expect("Failed to write projects entry");
        }
        self
    }

    /// Directory holding the sessions of `project_path`
    pub fn project_dir(&self, project_path: &str) -> PathBuf {
        self.temp_dir.path().join("projects").join(project_path.replace('/', "-"))
    }

    /// Build and return the temp directory (consumes self)
    pub fn build(self) -> TempDir {
        self.temp_dir
    }
}

impl Default for ClaudeDirBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for history.jsonl entries
pub struct HistoryEntryBuilder {
    display: String,
    timestamp: i64,
    project: Option<String>,
}

impl HistoryEntryBuilder {
    /// Create a new history entry with default values
    pub fn new() -> Self {
        Self { display: "Test entry".to_string(), timestamp: 1_700_000_000_000, project: None }
    }

    /// Set the display text
    pub fn display(mut self, display: &str) -> Self {
        self.display = display.to_string();
        self
    }

    /// Set the timestamp (milliseconds since the epoch)
    pub fn timestamp(mut self, timestamp: i64) -> Self {
        self.timestamp = timestamp;
        self
    }

    /// Set the project path
    pub fn project(mut self, project: &str) -> Self {
        self.project = Some(project.to_string());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let project_field =
            self.project.as_ref().map(|p| format!(r#","project":"{}""#, p)).unwrap_or_default();

        format!(
            r#"{{"display":"{}","pastedContents":{{}},"timestamp":{}{}}}"#,
            self.display, self.timestamp, project_field
        )
    }
}

impl Default for HistoryEntryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Builder for session transcript files
pub struct SessionFileBuilder {
    session_id: String,
    lines: Vec<String>,
    modified: Option<SystemTime>,
}

impl SessionFileBuilder {
    /// Create a new session file for the given session ID
    pub fn new(session_id: &str) -> Self {
        Self { session_id: session_id.to_string(), lines: Vec::new(), modified: None }
    }

    /// Add a transcript entry
    pub fn with_entry(mut self, entry: SessionEntryBuilder) -> Self {
        self.lines.push(entry.to_json());
        self
    }

    /// Add a raw line, verbatim
    pub fn with_line(mut self, line: &str) -> Self {
        self.lines.push(line.to_string());
        self
    }

    /// Set the file modification time to `secs` seconds after the epoch
    pub fn modified_at(mut self, secs: u64) -> Self {
        self.modified = Some(SystemTime::UNIX_EPOCH + Duration::from_secs(secs));
        self
    }

    /// Create the file in the given directory
    pub fn create_in(&self, dir: &Path) {
        let file_path = dir.join(format!("{}.jsonl", self.session_id));
        fs::write(&file_path, self.lines.join("\n")).expect("Failed to write session file");

        if let Some(modified) = self.modified {
            fs::File::options()
                .write(true)
                .open(&file_path)
                .and_then(|file| file.set_modified(modified))
                .expect("Failed to set modification time");
        }
    }
}

/// Builder for session transcript entries
pub struct SessionEntryBuilder {
    entry_type: String,
    content: String,
    timestamp: Option<String>,
}

impl SessionEntryBuilder {
    /// Create a new user message
    pub fn user() -> Self {
        Self {
            entry_type: "user".to_string(),
            content: r#""Test message""#.to_string(),
            timestamp: None,
        }
    }

    /// Create a new assistant message
    pub fn assistant() -> Self {
        Self {
            entry_type: "assistant".to_string(),
            content: r#"[{"type":"text","text":"Test response"}]"#.to_string(),
            timestamp: None,
        }
    }

    /// Set the message content to a plain string
    pub fn text(mut self, text: &str) -> Self {
        self.content = serde_json::to_string(text).expect("Failed to encode text");
        self
    }

    /// Set content blocks (text, thinking, tool_use, etc.)
    pub fn content_blocks(mut self, blocks: Vec<String>) -> Self {
        self.content = format!("[{}]", blocks.join(","));
        self
    }

    /// A text block
    pub fn text_block(text: &str) -> String {
        format!(r#"{{"type":"text","text":"{}"}}"#, text)
    }

    /// A thinking block
    pub fn thinking_block(text: &str) -> String {
        format!(r#"{{"type":"thinking","thinking":"{}"}}"#, text)
    }

    /// A tool_use block
    pub fn tool_use_block(id: &str, name: &str, input_json: &str) -> String {
        format!(r#"{{"type":"tool_use","id":"{}","name":"{}","input":{}}}"#, id, name, input_json)
    }

    /// A tool_result block
    pub fn tool_result_block(tool_use_id: &str, content_json: &str) -> String {
        format!(r#"{{"type":"tool_result","tool_use_id":"{}","content":{}}}"#, tool_use_id, content_json)
    }

    /// Set the ISO-8601 timestamp
    pub fn timestamp(mut self, timestamp: &str) -> Self {
        self.timestamp = Some(timestamp.to_string());
        self
    }

    /// Convert to JSON string
    pub fn to_json(&self) -> String {
        let timestamp_field = self
            .timestamp
            .as_ref()
            .map(|t| format!(r#","timestamp":"{}""#, t))
            .unwrap_or_default();

        format!(
            r#"{{"type":"{}","message":{{"role":"{}","content":{}}}{}}}"#,
            self.entry_type, self.entry_type, self.content, timestamp_field
        )
    }
}

/// A file-history-snapshot line, as Claude Code writes between turns
pub fn snapshot_line() -> String {
    r#"{"type":"file-history-snapshot","messageId":"m1","snapshot":{"messageId":"m1","trackedFileBackups":{}},"isSnapshotUpdate":false}"#
        .to_string()
}

/// Helper to create a realistic .claude directory with sample data
pub fn realistic_claude_dir() -> TempDir {
    ClaudeDirBuilder::new()
        .with_history_entries(&[
            HistoryEntryBuilder::new()
                .display("First prompt")
                .timestamp(1_705_312_800_000)
                .project("/Users/test/project1"),
            HistoryEntryBuilder::new()
                .display("Second prompt")
                .timestamp(1_705_316_400_000)
                .project("/Users/test/project2"),
            HistoryEntryBuilder::new()
                .display("Third prompt")
                .timestamp(1_705_320_000_000)
                .project("/Users/test/project1"),
        ])
        .with_project(
            "/Users/test/project1",
            &[
                SessionFileBuilder::new("550e8400-e29b-41d4-a716-446655440000")
                    .with_line(&snapshot_line())
                    .with_entry(
                        SessionEntryBuilder::user()
                            .text("Hello from project")
                            .timestamp("2024-01-15T10:00:00.000Z"),
                    )
                    .with_entry(
                        SessionEntryBuilder::assistant()
                            .content_blocks(vec![
                                SessionEntryBuilder::text_block("Reading it"),
                                SessionEntryBuilder::tool_use_block(
                                    "toolu_1",
                                    "Read",
                                    r#"{"file_path":"/a.rs"}"#,
                                ),
                            ])
                            .timestamp("2024-01-15T10:00:05.000Z"),
                    )
                    .modified_at(1_705_312_900),
                SessionFileBuilder::new("550e8400-e29b-41d4-a716-446655440001")
                    .with_entry(SessionEntryBuilder::user().text("Later session"))
                    .modified_at(1_705_400_000),
            ],
        )
        .with_project(
            "/Users/test/project2",
            &[SessionFileBuilder::new("agent-2")
                .with_entry(SessionEntryBuilder::user().text("Another project"))],
        )
        .build()
}
