//! Claude JSON Reporter - Read-only queries over Claude Code history
//!
//! This library reads the conversation history Claude Code keeps under `~/.claude/`
//! and answers four questions about it:
//!
//! - Which projects have recorded sessions ([`list_projects`])
//! - Which sessions a project has, newest first ([`list_sessions`])
//! - What was typed, filtered by date range and project ([`get_history`])
//! - What happened in one session, with message and tool-use counts ([`get_session_detail`])
//!
//! The same queries are exposed as JSON tools through the [`tools`] module, the
//! `claude-json-reporter` CLI and a stdio JSON-RPC server in [`mcp`].
//!
//! # Example
//!
//! ```no_run
//! use claude_json_reporter::{HistoryOptions, get_history};
//! use std::path::PathBuf;
//!
//! let claude_dir = PathBuf::from("/Users/alice/.claude");
//! let options = HistoryOptions { limit: Some(10), ..Default::default() };
//! let history = get_history(&claude_dir, &options)?;
//! println!("{} of {} prompts", history.entries.len(), history.total_count);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod catalog;
pub mod cli;
pub mod mcp;
pub mod models;
pub mod parsers;
pub mod query;
pub mod tools;
pub mod utils;

// Re-export commonly used types
pub use catalog::{list_projects, list_sessions};
pub use parsers::read_jsonl_file;
pub use query::{HistoryOptions, HistoryResult, get_history, get_session_detail};
pub use utils::{decode_project_path, encode_project_path};
