//! Transport layer for MCP communication.

pub mod stdio;

pub use stdio::{StdioTransport, TransportStats};
