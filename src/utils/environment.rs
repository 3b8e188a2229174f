use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

/// Name of Claude's configuration directory inside the home directory
pub const CLAUDE_DIR_NAME: &str = ".claude";

/// Get the Claude directory path (~/.claude)
pub fn get_claude_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(claude_dir_in(&home))
}

/// Resolve the Claude directory, preferring an explicit override
///
/// The override comes from `--claude-dir` or `CLAUDE_CONFIG_DIR`; without one the
/// directory is looked up under the user's home.
pub fn resolve_claude_dir(override_dir: Option<&Path>) -> Result<PathBuf> {
    match override_dir {
        Some(dir) => Ok(dir.to_path_buf()),
        None => get_claude_dir(),
    }
}

fn claude_dir_in(home: &Path) -> PathBuf {
    home.join(CLAUDE_DIR_NAME)
}
