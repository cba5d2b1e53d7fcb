//! MCP handshake during initialization.

use serde_json::Value;

use crate::types::{InitializeParams, InitializeResult, MCP_VERSION};

/// Answer `initialize`. Always succeeds; client params are only logged.
pub fn negotiate(params: Option<&Value>) -> InitializeResult {
    let client = params
        .and_then(|p| serde_json::from_value::<InitializeParams>(p.clone()).ok())
        .unwrap_or_default();

    if let Some(version) = client.protocol_version.as_deref() {
        if version != MCP_VERSION {
            tracing::warn!(
                "Client requested protocol version {version}, server supports {MCP_VERSION}. Proceeding with server version."
            );
        }
    }

    match client.client_info {
        Some(info) => tracing::info!("Initialized with client: {} v{}", info.name, info.version),
        None => tracing::info!("Initialized with anonymous client"),
    }

    InitializeResult::default_result()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_result_is_fixed() {
        let with_params = negotiate(Some(&json!({
            "protocolVersion": "1999-01-01",
            "clientInfo": { "name": "test-client", "version": "1.0" }
        })));
        let without = negotiate(None);
        let garbage = negotiate(Some(&json!([1, 2, 3])));

        for result in [with_params, without, garbage] {
            assert_eq!(result.protocol_version, "2024-05-16");
            assert_eq!(result.server_info.name, "mini-stdio");
        }
    }
}
