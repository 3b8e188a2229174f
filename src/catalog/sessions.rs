use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use tracing::{debug, warn};

use super::dir::read_dir_if_exists;
use crate::models::SessionInfo;
use crate::utils::{SESSION_FILE_EXTENSION, project_dir};

/// List the session transcripts of one project, most recently modified first
///
/// `project_path` is the caller's own project path; it is encoded to find the project
/// directory and echoed back unchanged in every [`SessionInfo`]. Only file metadata is
/// read. A project without a directory has no sessions.
///
/// # Errors
///
/// Returns an error if the project directory cannot be enumerated or a session file
/// cannot be stat'ed.
pub fn list_sessions(claude_dir: &Path, project_path: &str) -> Result<Vec<SessionInfo>> {
    let project_dir = project_dir(claude_dir, project_path);
    let Some(entries) = read_dir_if_exists(&project_dir)? else {
        debug!(path = %project_dir.display(), "Project directory not found");
        return Ok(Vec::new());
    };

    let mut sessions = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let file_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                warn!(name = ?name, "Skipping session file with non-UTF-8 name");
                continue;
            }
        };
        let Some(session_id) = file_name.strip_suffix(SESSION_FILE_EXTENSION) else {
            continue;
        };

        let file_path = entry.path();
        let metadata = fs::metadata(&file_path)
            .with_context(|| format!("Failed to read file metadata: {}", file_path.display()))?;
        if metadata.is_dir() {
            continue;
        }
        let modified = metadata.modified().with_context(|| {
            format!("Failed to read modification time: {}", file_path.display())
        })?;

        sessions.push(SessionInfo {
            id: session_id.to_string(),
            project_path: project_path.to_string(),
            file_path,
            modified_at: DateTime::<Utc>::from(modified),
        });
    }

    sessions.sort_by(|a, b| b.modified_at.cmp(&a.modified_at));
    Ok(sessions)
}
