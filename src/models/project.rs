use std::path::PathBuf;

use chrono::{DateTime, Utc};
use serde::Serialize;

/// A project directory under `projects/` and how many transcripts it holds
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectInfo {
    pub name: String,
    /// Decoded project path, approximate when segments contained hyphens
    pub path: String,
    pub encoded_path: String,
    pub session_count: usize,
}

/// One session transcript file of a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionInfo {
    pub id: String,
    pub project_path: String,
    pub file_path: PathBuf,
    pub modified_at: DateTime<Utc>,
}
