use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use super::dir::read_dir_if_exists;
use crate::models::ProjectInfo;
use crate::utils::{
    SESSION_FILE_EXTENSION, decode_project_path, is_encoded_project_name, project_display_name,
    projects_dir,
};

/// List every project directory in `<claude_dir>/projects/`
///
/// A subdirectory counts as a project when its name starts with the `-` produced by
/// encoding an absolute path. Each project reports how many `.jsonl` session files it
/// contains; the files themselves are not opened.
///
/// # Returns
///
/// Projects sorted by decoded path. Returns an empty Vec if the projects directory
/// doesn't exist (not an error).
///
/// # Errors
///
/// Returns an error if the projects directory or a project directory exists but cannot
/// be enumerated.
pub fn list_projects(claude_dir: &Path) -> Result<Vec<ProjectInfo>> {
    let projects_dir = projects_dir(claude_dir);
    let Some(entries) = read_dir_if_exists(&projects_dir)? else {
        debug!(path = %projects_dir.display(), "Projects directory not found");
        return Ok(Vec::new());
    };

    let mut projects = Vec::new();
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to read file type: {}", entry.path().display()))?;
        if !file_type.is_dir() {
            continue;
        }

        let encoded_name = match entry.file_name().into_string() {
            Ok(name) => name,
            Err(name) => {
                warn!(name = ?name, "Skipping project directory with non-UTF-8 name");
                continue;
            }
        };
        if !is_encoded_project_name(&encoded_name) {
            continue;
        }

        // Removed between listing and counting
        let Some(session_count) = count_session_files(&entry.path())? else {
            continue;
        };

        let path = decode_project_path(&encoded_name);
        projects.push(ProjectInfo {
            name: project_display_name(&path),
            path,
            encoded_path: encoded_name,
            session_count,
        });
    }

    projects.sort_by(|a, b| a.path.cmp(&b.path));
    Ok(projects)
}

fn count_session_files(project_dir: &Path) -> Result<Option<usize>> {
    let Some(entries) = read_dir_if_exists(project_dir)? else {
        return Ok(None);
    };

    let mut count = 0;
    for entry in entries {
        let entry = entry.context("Failed to read directory entry")?;
        let file_type = entry
            .file_type()
            .with_context(|| format!("Failed to read file type: {}", entry.path().display()))?;
        if !file_type.is_dir() && entry.file_name().to_string_lossy().ends_with(SESSION_FILE_EXTENSION) {
            count += 1;
        }
    }
    Ok(Some(count))
}
