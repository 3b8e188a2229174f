use thiserror::Error;

/// Failure of a tool call, rendered to the caller through its `Display` text
#[derive(Debug, Error)]
pub enum ToolError {
    #[error("{0} is required")]
    MissingArgument(&'static str),

    #[error("Invalid {field}: {reason}")]
    InvalidArgument { field: &'static str, reason: String },

    #[error("Invalid arguments: {0}")]
    MalformedArguments(#[from] serde_json::Error),

    #[error("Session not found: {session_id} (project {project_path})")]
    SessionNotFound { project_path: String, session_id: String },

    #[error("Failed to {operation}: {source:#}")]
    Failed {
        operation: &'static str,
        source: anyhow::Error,
    },
}

impl ToolError {
    pub(crate) fn failed(operation: &'static str) -> impl FnOnce(anyhow::Error) -> Self {
        move |source| ToolError::Failed { operation, source }
    }

    /// True for errors caused by the caller's input rather than by reading the history
    pub fn is_client_error(&self) -> bool {
        match self {
            ToolError::MissingArgument(_)
            | ToolError::InvalidArgument { .. }
            | ToolError::MalformedArguments(_)
            | ToolError::SessionNotFound { .. } => true,
            ToolError::Failed { .. } => false,
        }
    }
}
