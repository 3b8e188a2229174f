//! Catalog of projects and session transcripts under `<claude_dir>/projects/`
//!
//! Only directory listings and file metadata are read here; transcript contents are
//! left to [`crate::query`].
//!
//! # Error Handling Strategy
//!
//! - **Missing directories**: A missing `projects/` root or project directory yields an
//!   empty listing, never an error.
//! - **Everything else**: Enumeration and stat failures propagate with the path as
//!   context. Entries whose names are not valid UTF-8 are skipped with a warning.

mod dir;
pub mod projects;
pub mod sessions;

pub use projects::list_projects;
pub use sessions::list_sessions;
