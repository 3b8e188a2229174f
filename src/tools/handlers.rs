use std::path::Path;

use chrono::{DateTime, Local, NaiveDate, SecondsFormat, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::{Number, Value, json};
use tracing::warn;

use super::definitions::Tool;
use super::error::ToolError;
use crate::catalog;
use crate::models::{ProjectInfo, SessionHistoryEntry, SessionSummary};
use crate::query::{self, HistoryOptions, local_day_end, local_day_start};

/// Entries returned by `get_history` when the caller gives no limit
pub const DEFAULT_HISTORY_LIMIT: i64 = 100;

/// Characters of message text kept by `get_session_detail` before eliding
const MESSAGE_TEXT_LIMIT: usize = 500;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct ListSessionsArgs {
    #[serde(default)]
    pub project_path: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetHistoryArgs {
    #[serde(default)]
    pub start_date: Option<String>,
    #[serde(default)]
    pub end_date: Option<String>,
    #[serde(default)]
    pub project: Option<String>,
    #[serde(default, deserialize_with = "deserialize_limit")]
    pub limit: Option<i64>,
}

/// JSON clients may send an integral limit as `10.0`; fractions are truncated
fn deserialize_limit<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let number = Option::<Number>::deserialize(deserializer)?;
    Ok(number.and_then(|n| n.as_i64().or_else(|| n.as_f64().map(|f| f as i64))))
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct GetSessionDetailArgs {
    #[serde(default)]
    pub project_path: String,
    #[serde(default)]
    pub session_id: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct ListProjectsResponse {
    pub projects: Vec<ProjectInfo>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionListItem {
    pub id: String,
    pub modified_at: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListSessionsResponse {
    pub project_path: String,
    pub sessions: Vec<SessionListItem>,
    pub count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct HistoryItem {
    pub display: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GetHistoryResponse {
    pub entries: Vec<HistoryItem>,
    pub total_count: usize,
    pub returned_count: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct MessageItem {
    pub role: &'static str,
    pub text: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub timestamp: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionDetailResponse {
    pub session_id: String,
    pub project_path: String,
    pub summary: SessionSummary,
    pub messages: Vec<MessageItem>,
}

pub fn list_projects(claude_dir: &Path) -> Result<ListProjectsResponse, ToolError> {
    let projects = catalog::list_projects(claude_dir).map_err(ToolError::failed("list projects"))?;
    Ok(ListProjectsResponse { count: projects.len(), projects })
}

pub fn list_sessions(
    claude_dir: &Path,
    args: &ListSessionsArgs,
) -> Result<ListSessionsResponse, ToolError> {
    let project_path = required(&args.project_path, "project_path")?;

    let sessions = catalog::list_sessions(claude_dir, project_path)
        .map_err(ToolError::failed("list sessions"))?;
    let sessions: Vec<SessionListItem> = sessions
        .into_iter()
        .map(|session| SessionListItem {
            id: session.id,
            modified_at: iso_millis(&session.modified_at),
        })
        .collect();

    Ok(ListSessionsResponse {
        project_path: project_path.to_string(),
        count: sessions.len(),
        sessions,
    })
}

/// Query the global history
///
/// `start_date` and `end_date` are calendar days in local time and cover the whole day:
/// 00:00:00.000 through 23:59:59.999. `limit` defaults to [`DEFAULT_HISTORY_LIMIT`];
/// zero or a negative limit returns every match.
pub fn get_history(claude_dir: &Path, args: &GetHistoryArgs) -> Result<GetHistoryResponse, ToolError> {
    let start = optional(&args.start_date)
        .map(|value| parse_date(value, "start_date"))
        .transpose()?
        .map(local_day_start);
    let end = optional(&args.end_date)
        .map(|value| parse_date(value, "end_date"))
        .transpose()?
        .map(local_day_end);
    let limit = usize::try_from(args.limit.unwrap_or(DEFAULT_HISTORY_LIMIT)).ok();

    let options = HistoryOptions {
        start,
        end,
        project: optional(&args.project).map(str::to_string),
        limit,
    };
    let result =
        query::get_history(claude_dir, &options).map_err(ToolError::failed("read history"))?;

    let entries: Vec<HistoryItem> = result
        .entries
        .into_iter()
        .map(|entry| HistoryItem {
            display: entry.display,
            project: entry.project,
            timestamp: entry.timestamp.as_ref().map(iso_millis),
        })
        .collect();

    Ok(GetHistoryResponse {
        returned_count: entries.len(),
        total_count: result.total_count,
        entries,
    })
}

pub fn get_session_detail(
    claude_dir: &Path,
    args: &GetSessionDetailArgs,
) -> Result<SessionDetailResponse, ToolError> {
    let project_path = required(&args.project_path, "project_path")?;
    let session_id = required(&args.session_id, "session_id")?;
    if !is_single_path_component(session_id) {
        return Err(ToolError::InvalidArgument {
            field: "session_id",
            reason: "must be a session ID, not a path".to_string(),
        });
    }

    let detail = query::get_session_detail(claude_dir, project_path, session_id)
        .map_err(ToolError::failed("read session"))?
        .ok_or_else(|| ToolError::SessionNotFound {
            project_path: project_path.to_string(),
            session_id: session_id.to_string(),
        })?;

    Ok(SessionDetailResponse {
        messages: detail.entries.iter().map(message_item).collect(),
        session_id: detail.session_id,
        project_path: detail.project_path,
        summary: detail.summary,
    })
}

/// Run `tool` with JSON `arguments` and serialize its response
pub fn call_tool(claude_dir: &Path, tool: Tool, arguments: &Value) -> Result<Value, ToolError> {
    // Callers may send `null` or omit arguments for tools without required fields
    let arguments = if arguments.is_null() { json!({}) } else { arguments.clone() };

    let response = match tool {
        Tool::ListProjects => to_json(list_projects(claude_dir)?),
        Tool::ListSessions => {
            to_json(list_sessions(claude_dir, &serde_json::from_value(arguments)?)?)
        }
        Tool::GetHistory => to_json(get_history(claude_dir, &serde_json::from_value(arguments)?)?),
        Tool::GetSessionDetail => {
            to_json(get_session_detail(claude_dir, &serde_json::from_value(arguments)?)?)
        }
    };

    if let Err(e) = &response
        && !e.is_client_error()
    {
        warn!(tool = tool.name(), error = %e, "Tool call failed");
    }
    response
}

/// Wrap a tool outcome as an MCP `tools/call` result
///
/// Success carries the response as pretty-printed JSON text; failure carries the error
/// message with `isError: true`.
pub fn tool_result(outcome: Result<Value, ToolError>) -> Value {
    match outcome.and_then(|value| to_pretty(&value)) {
        Ok(text) => json!({ "content": [{ "type": "text", "text": text }] }),
        Err(e) => json!({ "content": [{ "type": "text", "text": e.to_string() }], "isError": true }),
    }
}

fn to_json<T: Serialize>(response: T) -> Result<Value, ToolError> {
    serde_json::to_value(response).map_err(|e| ToolError::Failed {
        operation: "serialize response",
        source: e.into(),
    })
}

fn to_pretty(value: &Value) -> Result<String, ToolError> {
    serde_json::to_string_pretty(value).map_err(|e| ToolError::Failed {
        operation: "serialize response",
        source: e.into(),
    })
}

fn required<'a>(value: &'a str, field: &'static str) -> Result<&'a str, ToolError> {
    if value.trim().is_empty() { Err(ToolError::MissingArgument(field)) } else { Ok(value) }
}

fn optional(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.trim().is_empty())
}

/// Accepts `YYYY-MM-DD`, or an RFC 3339 timestamp reduced to its local calendar day
fn parse_date(value: &str, field: &'static str) -> Result<NaiveDate, ToolError> {
    NaiveDate::parse_from_str(value.trim(), "%Y-%m-%d")
        .or_else(|_| {
            DateTime::parse_from_rfc3339(value.trim())
                .map(|timestamp| timestamp.with_timezone(&Local).date_naive())
        })
        .map_err(|_| ToolError::InvalidArgument {
            field,
            reason: format!("expected a date like 2024-01-31, got {:?}", value),
        })
}

fn is_single_path_component(value: &str) -> bool {
    !matches!(value, "." | "..") && !value.contains(['/', '\\', '\0'])
}

fn iso_millis(timestamp: &DateTime<Utc>) -> String {
    timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
}

fn message_item(entry: &SessionHistoryEntry) -> MessageItem {
    let text = entry.content().map(|content| content.plain_text()).unwrap_or_default();
    MessageItem {
        role: entry.entry_type.as_str(),
        text: truncate_text(&text, MESSAGE_TEXT_LIMIT),
        timestamp: entry.timestamp.clone(),
    }
}

fn truncate_text(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}...", &text[..cut]),
        None => text.to_string(),
    }
}
