//! MCP tool implementations.

pub mod echo;
pub mod registry;

pub use registry::{RegisteredTool, ToolHandler, ToolRegistry};
