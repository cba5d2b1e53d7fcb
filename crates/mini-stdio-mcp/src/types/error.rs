//! Error types and JSON-RPC error codes for the MCP server.

use mini_stdio_framing::FrameError;

use super::message::{JsonRpcError, RequestId};

/// JSON-RPC error codes used on the wire.
pub mod error_codes {
    pub const METHOD_NOT_FOUND: i32 = -32601;
    /// Generic server-side failure; covers everything without its own code.
    pub const SERVER_ERROR: i32 = -32000;
}

/// All errors that can occur in the MCP server.
#[derive(thiserror::Error, Debug)]
pub enum McpError {
    #[error(transparent)]
    Frame(#[from] FrameError),

    /// Decoded JSON that is not a usable message object.
    #[error("Invalid message: {0}")]
    InvalidMessage(String),

    #[error("Unknown method")]
    MethodNotFound(String),

    #[error("Unknown tool")]
    ToolNotFound(String),

    #[error("Invalid params: {0}")]
    InvalidParams(String),

    #[error("Tool '{tool}' failed: {message}")]
    HandlerFailure { tool: String, message: String },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl McpError {
    pub fn code(&self) -> i32 {
        use error_codes::*;
        match self {
            McpError::MethodNotFound(_) | McpError::ToolNotFound(_) => METHOD_NOT_FOUND,
            McpError::Frame(_)
            | McpError::InvalidMessage(_)
            | McpError::InvalidParams(_)
            | McpError::HandlerFailure { .. }
            | McpError::Json(_) => SERVER_ERROR,
        }
    }

    /// The only error that is allowed to end the receive loop.
    pub fn is_stream_closed(&self) -> bool {
        matches!(self, McpError::Frame(FrameError::StreamClosed))
    }

    pub fn to_json_rpc_error(&self, id: RequestId) -> JsonRpcError {
        JsonRpcError::new(id, self.code(), self.to_string())
    }
}

pub type McpResult<T> = Result<T, McpError>;
