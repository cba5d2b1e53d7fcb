//! Mini stdio MCP server — entry point.

use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::Shell;

use mini_stdio_mcp::config::resolve_max_header_bytes;
use mini_stdio_mcp::protocol::ProtocolHandler;
use mini_stdio_mcp::tools::ToolRegistry;
use mini_stdio_mcp::transport::StdioTransport;

#[derive(Parser)]
#[command(
    name = "mini-stdio-mcp",
    about = "Minimal MCP server over stdio with Content-Length framing",
    version
)]
struct Cli {
    /// Log level (trace, debug, info, warn, error). RUST_LOG takes precedence.
    #[arg(long, default_value = "info", global = true)]
    log_level: String,

    /// Maximum header block size in bytes.
    /// Also reads from MINI_STDIO_MAX_HEADER_BYTES env var.
    #[arg(long, global = true)]
    max_header_bytes: Option<usize>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start MCP server over stdio (default).
    Serve,

    /// Print server handshake and tools as JSON.
    Info,

    /// Generate shell completion scripts.
    Completions {
        /// Shell type (bash, zsh, fish, powershell, elvish).
        shell: Shell,
    },
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&cli.log_level));

    // stdout carries the protocol; logs go to stderr only.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    match cli.command.unwrap_or(Commands::Serve) {
        Commands::Serve => {
            let max_header_bytes = resolve_max_header_bytes(cli.max_header_bytes);
            tracing::info!("Mini stdio MCP server (header cap {max_header_bytes} bytes)");

            let handler = ProtocolHandler::new(ToolRegistry::builtin());
            let mut transport = StdioTransport::stdio(handler, max_header_bytes);
            let stats = transport.run().await;
            tracing::debug!("Final stats: {stats:?}");
        }

        Commands::Info => {
            let handshake = mini_stdio_mcp::types::InitializeResult::default_result();
            let tools = ProtocolHandler::default().tools().list_tools();
            let info = serde_json::json!({
                "server": handshake.server_info,
                "protocol_version": handshake.protocol_version,
                "capabilities": handshake.capabilities,
                "tools": tools.iter().map(|t| &t.name).collect::<Vec<_>>(),
                "tool_count": tools.len(),
            });
            println!("{}", serde_json::to_string_pretty(&info)?);
        }

        Commands::Completions { shell } => {
            let mut cmd = Cli::command();
            clap_complete::generate(shell, &mut cmd, "mini-stdio-mcp", &mut std::io::stdout());
        }
    }

    Ok(())
}
