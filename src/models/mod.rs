//! Data models for Claude Code conversation history.
//!
//! - [`GlobalHistoryEntry`] - One prompt from `history.jsonl`
//! - [`SessionHistoryEntry`] - One line of a session transcript, with its
//!   [`MessageContent`] modelled as [`ContentItem`]s and typed [`ContentBlock`]s
//! - [`ProjectInfo`] / [`SessionInfo`] - Catalog views of the `projects/` tree
//! - [`SessionSummary`] / [`SessionDetail`] - Derived per-session aggregates
//!
//! Records deserialize leniently: optional fields default, unknown entry and block
//! types fall into catch-all variants. Custom timestamp handling lives in
//! [`crate::parsers::deserializers`].

pub mod history;
pub mod project;
pub mod session;

pub use history::{
    ContentBlock, ContentItem, EntryKind, GlobalHistoryEntry, Message, MessageContent,
    SessionHistoryEntry,
};
pub use project::{ProjectInfo, SessionInfo};
pub use session::{SessionDetail, SessionSummary};
