//! Tool surface over the history readers
//!
//! Four tools are exposed, each with a typed argument struct, validation that runs
//! before any file is touched, and a camelCase JSON response:
//!
//! | Tool | Arguments | Response |
//! |---|---|---|
//! | `list_projects` | - | [`ListProjectsResponse`] |
//! | `list_sessions` | [`ListSessionsArgs`] | [`ListSessionsResponse`] |
//! | `get_history` | [`GetHistoryArgs`] | [`GetHistoryResponse`] |
//! | `get_session_detail` | [`GetSessionDetailArgs`] | [`SessionDetailResponse`] |
//!
//! Handlers are all-or-nothing: they return a full response or a [`ToolError`] whose
//! message is meant for the end user. [`call_tool`] and [`tool_result`] wrap that into
//! the MCP `tools/call` result shape.

pub mod definitions;
pub mod error;
pub mod handlers;

pub use definitions::{Tool, tools_json};
pub use error::ToolError;
pub use handlers::{
    DEFAULT_HISTORY_LIMIT, GetHistoryArgs, GetHistoryResponse, GetSessionDetailArgs,
    ListProjectsResponse, ListSessionsArgs, ListSessionsResponse, SessionDetailResponse,
    call_tool, get_history, get_session_detail, list_projects, list_sessions, tool_result,
};
