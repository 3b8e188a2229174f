use std::path::{Path, PathBuf};

/// Character Claude substitutes for every path separator in a project directory name
pub const ENCODED_SEPARATOR: char = '-';

/// Extension of session transcript files
pub const SESSION_FILE_EXTENSION: &str = ".jsonl";

const PATH_SEPARATOR: char = '/';
const HISTORY_FILE_NAME: &str = "history.jsonl";
const PROJECTS_DIR_NAME: &str = "projects";

/// `<claude_dir>/history.jsonl`
pub fn history_file_path(claude_dir: &Path) -> PathBuf {
    claude_dir.join(HISTORY_FILE_NAME)
}

/// `<claude_dir>/projects`
pub fn projects_dir(claude_dir: &Path) -> PathBuf {
    claude_dir.join(PROJECTS_DIR_NAME)
}

/// `<claude_dir>/projects/<encoded project path>`
pub fn project_dir(claude_dir: &Path, project_path: &str) -> PathBuf {
    projects_dir(claude_dir).join(encode_project_path(project_path))
}

/// `<claude_dir>/projects/<encoded project path>/<session id>.jsonl`
pub fn session_file_path(claude_dir: &Path, project_path: &str, session_id: &str) -> PathBuf {
    project_dir(claude_dir, project_path).join(format!("{}{}", session_id, SESSION_FILE_EXTENSION))
}

/// Encodes a project path into Claude's project directory name
///
/// Every `/` becomes `-`. Hyphens already present in the path are kept as they are,
/// so the encoding is lossy: `/work/my-app` and `/work/my/app` share a directory name.
/// This matches the names Claude writes under `~/.claude/projects/`.
///
/// # Examples
///
/// ```
/// use claude_json_reporter::encode_project_path;
///
/// assert_eq!(encode_project_path("/Users/foo/bar"), "-Users-foo-bar");
/// ```
pub fn encode_project_path(project_path: &str) -> String {
    project_path.replace(PATH_SEPARATOR, "-")
}

/// Decodes a project directory name back into an approximate project path
///
/// Names starting with `-` (the encoding of an absolute path) have every hyphen turned
/// back into `/`. Any other name is returned unchanged. The result is for display only:
/// hyphenated segments come back split (`-work-my-app` decodes to `/work/my/app`).
///
/// # Examples
///
/// ```
/// use claude_json_reporter::decode_project_path;
///
/// assert_eq!(decode_project_path("-Users-foo-bar"), "/Users/foo/bar");
/// assert_eq!(decode_project_path("scratch"), "scratch");
/// ```
pub fn decode_project_path(encoded: &str) -> String {
    if encoded.starts_with(ENCODED_SEPARATOR) {
        encoded.replace(ENCODED_SEPARATOR, "/")
    } else {
        encoded.to_string()
    }
}

/// Returns true if a directory name under `projects/` follows the project naming convention
pub fn is_encoded_project_name(name: &str) -> bool {
    name.starts_with(ENCODED_SEPARATOR)
}

/// Last segment of a decoded project path, used as the project's short name
pub fn project_display_name(decoded_path: &str) -> String {
    Path::new(decoded_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_default()
}
