use serde::Serialize;

use super::history::SessionHistoryEntry;

/// Aggregate counts over the conversational entries of one session
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionSummary {
    pub user_message_count: usize,
    pub assistant_message_count: usize,
    pub tool_use_count: usize,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub start_time: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub end_time: Option<String>,
}

/// User and assistant entries of one session, in file order, with their summary
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetail {
    pub session_id: String,
    pub project_path: String,
    pub entries: Vec<SessionHistoryEntry>,
    pub summary: SessionSummary,
}
