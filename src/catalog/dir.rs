use std::fs::{self, ReadDir};
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};

/// `fs::read_dir` that reports a missing directory as `None`
pub(crate) fn read_dir_if_exists(dir: &Path) -> Result<Option<ReadDir>> {
    match fs::read_dir(dir) {
        Ok(entries) => Ok(Some(entries)),
        Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
        Err(e) => Err(e).with_context(|| format!("Failed to read directory: {}", dir.display())),
    }
}
