use serde_json::{Value, json};

/// Tools exposed over the stdio server
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    ListProjects,
    ListSessions,
    GetHistory,
    GetSessionDetail,
}

impl Tool {
    pub const ALL: [Tool; 4] =
        [Tool::ListProjects, Tool::ListSessions, Tool::GetHistory, Tool::GetSessionDetail];

    /// Parse a tool name from a `tools/call` request
    pub fn parse(name: &str) -> Option<Self> {
        match name {
            "list_projects" => Some(Self::ListProjects),
            "list_sessions" => Some(Self::ListSessions),
            "get_history" => Some(Self::GetHistory),
            "get_session_detail" => Some(Self::GetSessionDetail),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::ListProjects => "list_projects",
            Self::ListSessions => "list_sessions",
            Self::GetHistory => "get_history",
            Self::GetSessionDetail => "get_session_detail",
        }
    }

    fn definition(self) -> Value {
        match self {
            Self::ListProjects => json!({
                "name": self.name(),
                "description": "List the projects that have Claude Code history, with the number of sessions recorded for each.",
                "inputSchema": { "type": "object", "properties": {}, "required": [] }
            }),
            Self::ListSessions => json!({
                "name": self.name(),
                "description": "List the sessions of a project, most recently modified first, with their IDs and modification times.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "project_path": {
                            "type": "string",
                            "description": "Project path (e.g. /Users/alice/projects/my-app)"
                        }
                    },
                    "required": ["project_path"]
                }
            }),
            Self::GetHistory => json!({
                "name": self.name(),
                "description": "Get the global Claude Code prompt history, newest first. Can be filtered by date range and project.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "start_date": {
                            "type": "string",
                            "description": "First day to include (ISO 8601 date, e.g. 2024-01-01)"
                        },
                        "end_date": {
                            "type": "string",
                            "description": "Last day to include (ISO 8601 date, e.g. 2024-01-31)"
                        },
                        "project": {
                            "type": "string",
                            "description": "Only include prompts from this project path"
                        },
                        "limit": {
                            "type": "integer",
                            "description": "Maximum number of entries to return (default: 100)"
                        }
                    },
                    "required": []
                }
            }),
            Self::GetSessionDetail => json!({
                "name": self.name(),
                "description": "Get the conversation of one session: user and assistant messages plus a summary with message and tool-use counts.",
                "inputSchema": {
                    "type": "object",
                    "properties": {
                        "project_path": { "type": "string", "description": "Project path" },
                        "session_id": { "type": "string", "description": "Session ID (UUID)" }
                    },
                    "required": ["project_path", "session_id"]
                }
            }),
        }
    }
}

/// `tools/list` payload describing every tool and its input schema
pub fn tools_json() -> Value {
    let tools: Vec<Value> = Tool::ALL.iter().map(|tool| tool.definition()).collect();
    json!({ "tools": tools })
}
