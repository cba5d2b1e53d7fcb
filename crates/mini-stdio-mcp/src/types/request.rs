//! MCP request parameter types.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Params of `tools/call`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ToolCallParams {
    #[serde(default)]
    pub name: Option<Value>,
    #[serde(default)]
    pub arguments: Option<Value>,
}

impl ToolCallParams {
    /// The tool name, or `""` when it is missing or not a string.
    pub fn tool_name(&self) -> &str {
        self.name.as_ref().and_then(Value::as_str).unwrap_or_default()
    }
}
