use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use crate::parsers::deserializers::{
    deserialize_optional_iso_timestamp, deserialize_optional_timestamp, lenient,
    lenient_or_default,
};

/// One prompt from the global `history.jsonl` log
///
/// Every field is optional on disk. Missing, `null` or wrongly typed values fall back
/// to empty, and an entry without a usable timestamp has `timestamp: None`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalHistoryEntry {
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub display: String,
    #[serde(default, deserialize_with = "lenient_or_default")]
    pub pasted_contents: Map<String, Value>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<DateTime<Utc>>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub project: Option<String>,
}

/// Kind of a line in a session transcript
///
/// Transcripts also carry `summary`, `system` and other bookkeeping lines; those all
/// land in [`EntryKind::Other`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EntryKind {
    User,
    Assistant,
    FileHistorySnapshot,
    #[default]
    #[serde(other)]
    Other,
}

impl EntryKind {
    /// True for the user and assistant turns of a conversation
    pub fn is_conversational(self) -> bool {
        matches!(self, EntryKind::User | EntryKind::Assistant)
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EntryKind::User => "user",
            EntryKind::Assistant => "assistant",
            EntryKind::FileHistorySnapshot => "file-history-snapshot",
            EntryKind::Other => "other",
        }
    }
}

/// Typed content block inside a message body
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum ContentBlock {
    Text {
        #[serde(default, deserialize_with = "lenient_or_default")]
        text: String,
    },
    Thinking {
        #[serde(default, deserialize_with = "lenient_or_default")]
        thinking: String,
    },
    ToolUse {
        #[serde(default, deserialize_with = "lenient_or_default")]
        id: String,
        #[serde(default, deserialize_with = "lenient_or_default")]
        name: String,
        #[serde(default)]
        input: Value,
    },
    ToolResult {
        #[serde(default, deserialize_with = "lenient_or_default")]
        tool_use_id: String,
        #[serde(default)]
        content: Value,
        #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
        is_error: Option<bool>,
    },
    /// Block types this crate does not interpret (images, documents, ...)
    #[serde(other)]
    Unknown,
}

/// One element of a message body: a bare string, a typed block, or something unrecognised
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ContentItem {
    Text(String),
    Block(ContentBlock),
    Other(Value),
}

/// Message body: either an ordered list of items or a single item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum MessageContent {
    Items(Vec<ContentItem>),
    Single(ContentItem),
}

impl MessageContent {
    /// The body as a sequence, with a single item normalised to a one-element slice
    pub fn items(&self) -> &[ContentItem] {
        match self {
            MessageContent::Items(items) => items,
            MessageContent::Single(item) => std::slice::from_ref(item),
        }
    }

    /// Readable text of the message
    ///
    /// A plain string body is returned as is. Otherwise the `text` blocks are joined
    /// with newlines; thinking, tool traffic and bare strings inside a list are left out.
    pub fn plain_text(&self) -> String {
        match self {
            MessageContent::Single(ContentItem::Text(text)) => text.clone(),
            _ => {
                let parts: Vec<&str> = self
                    .items()
                    .iter()
                    .filter_map(|item| match item {
                        ContentItem::Block(ContentBlock::Text { text }) => Some(text.as_str()),
                        ContentItem::Block(
                            ContentBlock::Thinking { .. }
                            | ContentBlock::ToolUse { .. }
                            | ContentBlock::ToolResult { .. }
                            | ContentBlock::Unknown,
                        )
                        | ContentItem::Text(_)
                        | ContentItem::Other(_) => None,
                    })
                    .collect();
                parts.join("\n")
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub role: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub content: Option<MessageContent>,
}

/// One line of a session transcript (`projects/<encoded>/<session>.jsonl`)
///
/// Bookkeeping lines reuse field names with other shapes (a `system` line may carry
/// `"message": "compacted"`), so a field that does not fit reads as absent.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionHistoryEntry {
    #[serde(rename = "type", default, deserialize_with = "lenient_or_default")]
    pub entry_type: EntryKind,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub message: Option<Message>,
    #[serde(
        default,
        deserialize_with = "deserialize_optional_iso_timestamp",
        skip_serializing_if = "Option::is_none"
    )]
    pub timestamp: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub session_id: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub git_branch: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub parent_uuid: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_sidechain: Option<bool>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub user_type: Option<String>,
    #[serde(default, deserialize_with = "lenient", skip_serializing_if = "Option::is_none")]
    pub is_meta: Option<bool>,
}

impl SessionHistoryEntry {
    pub fn content(&self) -> Option<&MessageContent> {
        self.message.as_ref().and_then(|message| message.content.as_ref())
    }
}
