use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Deserialize;
use serde::de::DeserializeOwned;
use serde_json::Value;
use tracing::debug;

/// Read a JSONL file into records, treating a missing file as an empty log
///
/// See [`read_jsonl_file_if_exists`] for the parsing rules.
pub fn read_jsonl_file<T: DeserializeOwned + Default>(path: &Path) -> Result<Vec<T>> {
    Ok(read_jsonl_file_if_exists(path)?.unwrap_or_default())
}

/// Read a JSONL file into records, returning `None` if the file does not exist
///
/// Blank and whitespace-only lines are skipped and every other line must be valid JSON.
/// The first line that is not fails the whole read. Each JSON line yields exactly one
/// record, in file order: a line whose shape does not fit `T` becomes `T::default()`.
/// I/O errors other than "not found" are returned with the path as context.
pub fn read_jsonl_file_if_exists<T: DeserializeOwned + Default>(
    path: &Path,
) -> Result<Option<Vec<T>>> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            debug!(path = %path.display(), "JSONL file not found");
            return Ok(None);
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to read file: {}", path.display()));
        }
    };

    let mut records = Vec::new();
    for (line_num, line) in content.split('\n').enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let value = serde_json::from_str::<Value>(line).with_context(|| {
            format!("Failed to parse line {} in {}", line_num + 1, path.display())
        })?;
        let record = T::deserialize(value).unwrap_or_else(|e| {
            debug!(
                path = %path.display(),
                line = line_num + 1,
                error = %e,
                "Unrecognised record shape"
            );
            T::default()
        });
        records.push(record);
    }

    debug!(path = %path.display(), records = records.len(), "Read JSONL file");
    Ok(Some(records))
}
