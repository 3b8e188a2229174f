//! Line-delimited JSON-RPC 2.0 server exposing the history tools over stdio
//!
//! One request per line, one response per line. Requests without an `id` are
//! notifications and are never answered. Tool failures are reported inside a successful
//! `tools/call` result with `isError: true`; protocol failures use JSON-RPC error codes.

use std::io::{BufRead, Write};
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use tracing::{debug, info, warn};

use crate::tools::{Tool, call_tool, tool_result, tools_json};

pub const PROTOCOL_VERSION: &str = "2024-11-05";
pub const SERVER_NAME: &str = "claude-json-reporter";

const PARSE_ERROR: i32 = -32700;
const INVALID_REQUEST: i32 = -32600;
const METHOD_NOT_FOUND: i32 = -32601;
const INVALID_PARAMS: i32 = -32602;

#[derive(Debug, Deserialize)]
struct RpcRequest {
    #[serde(default)]
    id: Option<Value>,
    method: String,
    #[serde(default)]
    params: Value,
}

#[derive(Debug, Serialize)]
pub struct RpcResponse {
    pub jsonrpc: &'static str,
    pub id: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub result: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<RpcError>,
}

#[derive(Debug, Serialize)]
pub struct RpcError {
    pub code: i32,
    pub message: String,
}

impl RpcResponse {
    fn ok(id: Value, result: Value) -> Self {
        Self { jsonrpc: "2.0", id, result: Some(result), error: None }
    }

    fn err(id: Value, code: i32, message: String) -> Self {
        Self { jsonrpc: "2.0", id, result: None, error: Some(RpcError { code, message }) }
    }
}

/// Serve requests from `reader` until end of input
///
/// # Errors
///
/// Returns an error only if reading a line or writing a response fails.
pub fn serve<R: BufRead, W: Write>(claude_dir: &Path, reader: R, mut writer: W) -> Result<()> {
    info!(claude_dir = %claude_dir.display(), "Server starting on stdio");

    for line in reader.lines() {
        let line = line.context("Failed to read request")?;
        if line.trim().is_empty() {
            continue;
        }

        if let Some(response) = handle_line(claude_dir, &line) {
            let encoded = serde_json::to_string(&response).context("Failed to encode response")?;
            writeln!(writer, "{}", encoded).context("Failed to write response")?;
            writer.flush().context("Failed to flush response")?;
        }
    }

    info!("Input closed, server stopping");
    Ok(())
}

/// Answer one raw request line; `None` for notifications
pub fn handle_line(claude_dir: &Path, line: &str) -> Option<RpcResponse> {
    let value: Value = match serde_json::from_str(line) {
        Ok(value) => value,
        Err(e) => {
            warn!(error = %e, "Unparseable request");
            return Some(RpcResponse::err(Value::Null, PARSE_ERROR, format!("Parse error: {}", e)));
        }
    };

    let request: RpcRequest = match serde_json::from_value(value.clone()) {
        Ok(request) => request,
        Err(e) => {
            let id = value.get("id").cloned().unwrap_or(Value::Null);
            return Some(RpcResponse::err(id, INVALID_REQUEST, format!("Invalid Request: {}", e)));
        }
    };

    let Some(id) = request.id else {
        debug!(method = %request.method, "Notification received");
        return None;
    };

    Some(match request.method.as_str() {
        "initialize" => RpcResponse::ok(
            id,
            json!({
                "protocolVersion": PROTOCOL_VERSION,
                "capabilities": { "tools": {} },
                "serverInfo": { "name": SERVER_NAME, "version": env!("CARGO_PKG_VERSION") }
            }),
        ),
        "ping" => RpcResponse::ok(id, json!({})),
        "tools/list" => RpcResponse::ok(id, tools_json()),
        "tools/call" => handle_tool_call(claude_dir, &request.params, id),
        other => RpcResponse::err(id, METHOD_NOT_FOUND, format!("Method not found: {}", other)),
    })
}

fn handle_tool_call(claude_dir: &Path, params: &Value, id: Value) -> RpcResponse {
    let name = params.get("name").and_then(Value::as_str).unwrap_or_default();
    let Some(tool) = Tool::parse(name) else {
        return RpcResponse::err(id, INVALID_PARAMS, format!("Unknown tool: {}", name));
    };

    debug!(tool = tool.name(), "Tool call");
    let arguments = params.get("arguments").cloned().unwrap_or(Value::Null);
    RpcResponse::ok(id, tool_result(call_tool(claude_dir, tool, &arguments)))
}
