use std::path::Path;

use anyhow::Result;

use crate::models::{
    ContentBlock, ContentItem, EntryKind, MessageContent, SessionDetail, SessionHistoryEntry,
    SessionSummary,
};
use crate::parsers::read_jsonl_file_if_exists;
use crate::utils::session_file_path;

/// Load one session transcript and summarize its conversation
///
/// Only `user` and `assistant` entries are kept, in file order; snapshots and other
/// bookkeeping lines are dropped from both the entries and the counts.
///
/// # Returns
///
/// `Ok(None)` if `<claude_dir>/projects/<encoded project_path>/<session_id>.jsonl` does
/// not exist.
///
/// # Errors
///
/// Returns an error if the transcript exists but cannot be read or has a malformed line.
pub fn get_session_detail(
    claude_dir: &Path,
    project_path: &str,
    session_id: &str,
) -> Result<Option<SessionDetail>> {
    let session_path = session_file_path(claude_dir, project_path, session_id);
    let Some(records) = read_jsonl_file_if_exists::<SessionHistoryEntry>(&session_path)? else {
        return Ok(None);
    };

    let entries: Vec<SessionHistoryEntry> =
        records.into_iter().filter(|entry| entry.entry_type.is_conversational()).collect();
    let summary = summarize_entries(&entries);

    Ok(Some(SessionDetail {
        session_id: session_id.to_string(),
        project_path: project_path.to_string(),
        entries,
        summary,
    }))
}

/// Count turns and tool invocations and find the time span of a set of entries
///
/// Timestamps are ISO-8601 strings, so the lexical minimum and maximum are also the
/// chronological ones.
pub fn summarize_entries(entries: &[SessionHistoryEntry]) -> SessionSummary {
    let mut summary = SessionSummary::default();

    for entry in entries {
        match entry.entry_type {
            EntryKind::User => summary.user_message_count += 1,
            EntryKind::Assistant => {
                summary.assistant_message_count += 1;
                summary.tool_use_count += entry.content().map(count_tool_uses).unwrap_or(0);
            }
            EntryKind::FileHistorySnapshot | EntryKind::Other => continue,
        }

        let Some(timestamp) = entry.timestamp.as_deref().filter(|ts| !ts.is_empty()) else {
            continue;
        };
        if summary.start_time.as_deref().is_none_or(|start| timestamp < start) {
            summary.start_time = Some(timestamp.to_string());
        }
        if summary.end_time.as_deref().is_none_or(|end| timestamp > end) {
            summary.end_time = Some(timestamp.to_string());
        }
    }

    summary
}

fn count_tool_uses(content: &MessageContent) -> usize {
    content.items().iter().filter(|item| is_tool_invocation(item)).count()
}

fn is_tool_invocation(item: &ContentItem) -> bool {
    match item {
        ContentItem::Block(ContentBlock::ToolUse { .. }) => true,
        ContentItem::Block(
            ContentBlock::Text { .. }
            | ContentBlock::Thinking { .. }
            | ContentBlock::ToolResult { .. }
            | ContentBlock::Unknown,
        )
        | ContentItem::Text(_)
        | ContentItem::Other(_) => false,
    }
}
