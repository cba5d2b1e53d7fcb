//! Main request dispatcher — routes decoded messages to handlers.

use serde_json::{Map, Value};

use crate::tools::ToolRegistry;
use crate::types::*;

use super::negotiation;

/// Routes one message at a time to the handshake, listing, or tool handlers.
pub struct ProtocolHandler {
    tools: ToolRegistry,
}

impl ProtocolHandler {
    pub fn new(tools: ToolRegistry) -> Self {
        Self { tools }
    }

    pub fn tools(&self) -> &ToolRegistry {
        &self.tools
    }

    /// Handle one message. Notifications never produce a reply.
    pub fn handle_message(&self, msg: IncomingMessage) -> Option<JsonRpcReply> {
        if msg.is_notification() {
            self.handle_notification(msg.method_name());
            return None;
        }

        let method = msg.method_name().to_string();
        let id = msg.id.unwrap_or(RequestId::Null);
        Some(self.handle_request(id, &method, msg.params))
    }

    fn handle_request(&self, id: RequestId, method: &str, params: Option<Value>) -> JsonRpcReply {
        tracing::debug!("Request {id}: {method}");

        match self.dispatch_request(method, params) {
            Ok(result) => JsonRpcReply::Response(JsonRpcResponse::new(id, result)),
            Err(e) => {
                tracing::debug!("Request {id} failed: {e}");
                JsonRpcReply::Error(e.to_json_rpc_error(id))
            }
        }
    }

    fn dispatch_request(&self, method: &str, params: Option<Value>) -> McpResult<Value> {
        match method {
            "initialize" => Ok(serde_json::to_value(negotiation::negotiate(params.as_ref()))?),
            "tools/list" => self.handle_tools_list(),
            "tools/call" => self.handle_tools_call(params),
            _ => Err(McpError::MethodNotFound(method.to_string())),
        }
    }

    fn handle_notification(&self, method: &str) {
        match method {
            "initialized" | "notifications/initialized" => {
                tracing::info!("MCP handshake complete");
            }
            _ => {
                tracing::debug!("Ignoring notification: {method}");
            }
        }
    }

    fn handle_tools_list(&self) -> McpResult<Value> {
        let result = ToolListResult {
            tools: self.tools.list_tools(),
        };
        Ok(serde_json::to_value(result)?)
    }

    fn handle_tools_call(&self, params: Option<Value>) -> McpResult<Value> {
        let params = params.unwrap_or(Value::Object(Map::new()));
        if !params.is_object() {
            return Err(McpError::InvalidParams(
                "tools/call params must be an object".to_string(),
            ));
        }
        let call_params: ToolCallParams =
            serde_json::from_value(params).map_err(|e| McpError::InvalidParams(e.to_string()))?;

        let name = call_params.tool_name().to_string();
        let result = self.tools.call(&name, call_params.arguments)?;

        Ok(serde_json::to_value(result)?)
    }
}

impl Default for ProtocolHandler {
    fn default() -> Self {
        Self::new(ToolRegistry::builtin())
    }
}
