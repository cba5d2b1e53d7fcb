//! Tool: echo — Return the provided text unchanged.

use serde_json::{json, Value};

use crate::types::{McpError, McpResult, ToolDefinition};

pub const NAME: &str = "echo";

pub fn definition() -> ToolDefinition {
    ToolDefinition {
        name: NAME.to_string(),
        description: "Echo back the provided text.".to_string(),
        input: json!({
            "type": "object",
            "properties": {
                "text": { "type": "string" }
            },
            "required": ["text"]
        }),
    }
}

/// A missing `text` echoes as empty, a non-string one as its JSON form.
pub fn execute(args: Value) -> McpResult<String> {
    let Value::Object(args) = args else {
        return Err(McpError::InvalidParams(
            "echo arguments must be an object".to_string(),
        ));
    };

    Ok(match args.get("text") {
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
        None => String::new(),
    })
}
