//! JSONL reading for Claude Code history and session files
//!
//! # Error Handling Strategy
//!
//! Reads are **all-or-nothing**:
//!
//! - **Missing files** are normal (a project or session with no activity yet) and read as
//!   an empty sequence, or as `None` through [`read_jsonl_file_if_exists`] when the caller
//!   needs to tell "absent" from "empty".
//!
//! - **Malformed lines** (not valid JSON) abort the read of that file with an error naming
//!   the 1-based line number.
//!
//! - **Unexpected shapes** never do. Record fields that are missing, `null` or of the wrong
//!   type read as absent or empty (see [`deserializers::lenient`]), and a line that is not
//!   an object at all becomes a default record.
//!
//! - **Other I/O failures** (permissions, reading a directory) propagate via `anyhow`
//!   with the offending path as context. Nothing is retried.

pub mod deserializers;
pub mod jsonl;

pub use jsonl::{read_jsonl_file, read_jsonl_file_if_exists};
