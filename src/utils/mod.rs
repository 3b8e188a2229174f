pub mod environment;
pub mod paths;

pub use environment::{get_claude_dir, resolve_claude_dir};
pub use paths::{
    SESSION_FILE_EXTENSION, decode_project_path, encode_project_path, history_file_path,
    is_encoded_project_name, project_dir, project_display_name, projects_dir, session_file_path,
};
