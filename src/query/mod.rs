//! Read-side queries over the history files
//!
//! - [`history`] - Date/project filtering, newest-first ordering and paging of the
//!   global `history.jsonl` log
//! - [`session`] - Conversational entries of one session transcript plus its
//!   [`SessionSummary`](crate::models::SessionSummary)
//!
//! Every call re-reads its file: the logs are appended to by Claude between calls, so
//! nothing is cached.

pub mod history;
pub mod session;

pub use history::{HistoryOptions, HistoryResult, get_history, local_day_end, local_day_start};
pub use session::{get_session_detail, summarize_entries};
