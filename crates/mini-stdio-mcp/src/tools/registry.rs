//! Tool registration and dispatch.

use serde_json::{Map, Value};

use crate::types::{McpError, McpResult, ToolCallResult, ToolDefinition};

use super::echo;

/// A tool body: arguments in, text out.
pub type ToolHandler = fn(Value) -> McpResult<String>;

pub struct RegisteredTool {
    pub definition: ToolDefinition,
    pub handler: ToolHandler,
}

/// Ordered set of tools the dispatcher can list and call.
///
/// Built once at startup; the dispatcher only reads it afterwards.
pub struct ToolRegistry {
    tools: Vec<RegisteredTool>,
}

impl ToolRegistry {
    pub fn empty() -> Self {
        Self { tools: Vec::new() }
    }

    /// Registry holding the tools shipped with the server.
    pub fn builtin() -> Self {
        let mut registry = Self::empty();
        registry.register(echo::definition(), echo::execute);
        registry
    }

    /// Add a tool, replacing any existing tool of the same name in place.
    pub fn register(&mut self, definition: ToolDefinition, handler: ToolHandler) -> &mut Self {
        if let Some(existing) = self
            .tools
            .iter_mut()
            .find(|t| t.definition.name == definition.name)
        {
            *existing = RegisteredTool { definition, handler };
        } else {
            self.tools.push(RegisteredTool { definition, handler });
        }
        self
    }

    pub fn get(&self, name: &str) -> Option<&RegisteredTool> {
        self.tools.iter().find(|t| t.definition.name == name)
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }

    pub fn list_tools(&self) -> Vec<ToolDefinition> {
        self.tools.iter().map(|t| t.definition.clone()).collect()
    }

    pub fn call(&self, name: &str, arguments: Option<Value>) -> McpResult<ToolCallResult> {
        let tool = self
            .get(name)
            .ok_or_else(|| McpError::ToolNotFound(name.to_string()))?;

        let args = arguments.unwrap_or(Value::Object(Map::new()));

        let text = (tool.handler)(args).map_err(|e| match e {
            McpError::HandlerFailure { .. } => e,
            other => McpError::HandlerFailure {
                tool: name.to_string(),
                message: other.to_string(),
            },
        })?;

        Ok(ToolCallResult::text(text))
    }
}

impl Default for ToolRegistry {
    fn default() -> Self {
        Self::builtin()
    }
}
