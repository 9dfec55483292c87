//! MCP tool implementations.
//!
//! Handlers are split by capability area; each module implements its tools
//! as methods on [`McpServer`](super::server::McpServer), registered in the
//! server's tool router.

pub mod ai;
pub mod code;
pub mod deps;
pub mod docs;
pub mod github;

#[cfg(test)]
mod deps_test;

use std::path::PathBuf;

use miette::Diagnostic;
use rmcp::ErrorData as McpError;
use rmcp::model::{CallToolResult, Content};
use serde::Serialize;
use serde_json::json;

use crate::error::{GatewayError, GatewayResult};
use crate::paths::PathGuard;

/// Map a gateway error onto the MCP wire. Caller-fault kinds surface as
/// invalid_params, execution failures as internal errors; the taxonomy code
/// rides along in the error data either way.
pub(crate) fn to_mcp_error(err: GatewayError) -> McpError {
    let data = Diagnostic::code(&err).map(|code| json!({ "code": code.to_string() }));
    let message = err.to_string();
    if err.is_caller_fault() {
        McpError::invalid_params(message, data)
    } else {
        McpError::internal_error(message, data)
    }
}

/// Serialize a response struct into the tool result payload.
pub(crate) fn json_result<T: Serialize>(value: &T) -> Result<CallToolResult, McpError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| McpError::internal_error(e.to_string(), None))?;
    Ok(CallToolResult::success(vec![Content::text(text)]))
}

/// Read a file that has already passed the path guard.
pub(crate) fn read_file(path: PathBuf) -> GatewayResult<String> {
    match std::fs::read_to_string(&path) {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(GatewayError::NotFound { path })
        }
        Err(e) => Err(GatewayError::Io { path, source: e }),
    }
}

/// Guard a raw path argument and read the file it resolves to.
pub(crate) fn read_guarded(guard: &PathGuard, raw: &str) -> GatewayResult<String> {
    let path = guard.check(raw)?;
    read_file(path)
}
