//! Stdio transport — reads framed JSON-RPC from stdin, writes to stdout.

use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite, Stdin, Stdout};

use mini_stdio_framing::FramedStream;

use crate::protocol::ProtocolHandler;
use crate::types::{IncomingMessage, McpError, McpResult, RequestId};

/// Counters reported when the loop stops.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TransportStats {
    pub messages: u64,
    pub replies: u64,
    pub errors: u64,
}

/// Drives the read → route → respond loop over one stream pair.
pub struct StdioTransport<R, W> {
    stream: FramedStream<R, W>,
    handler: ProtocolHandler,
    stats: TransportStats,
}

impl StdioTransport<Stdin, Stdout> {
    /// Transport over the process's own stdin and stdout.
    pub fn stdio(handler: ProtocolHandler, max_header_bytes: usize) -> Self {
        Self::with_stream(
            handler,
            FramedStream::with_max_header_bytes(tokio::io::stdin(), tokio::io::stdout(), max_header_bytes),
        )
    }
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> StdioTransport<R, W> {
    pub fn new(handler: ProtocolHandler, input: R, output: W) -> Self {
        Self::with_stream(handler, FramedStream::new(input, output))
    }

    pub fn with_stream(handler: ProtocolHandler, stream: FramedStream<R, W>) -> Self {
        Self {
            stream,
            handler,
            stats: TransportStats::default(),
        }
    }

    pub fn stats(&self) -> TransportStats {
        self.stats
    }

    pub fn into_writer(self) -> W {
        self.stream.into_writer()
    }

    /// Run until the peer closes the input stream.
    ///
    /// Any other failure is answered with an `id: null` error and the loop
    /// carries on with the next message.
    pub async fn run(&mut self) -> TransportStats {
        tracing::info!("Stdio transport started");

        loop {
            let value = match self.stream.read_message().await.map_err(McpError::from) {
                Ok(value) => value,
                Err(e) if e.is_stream_closed() => {
                    tracing::info!("EOF on stdin, shutting down");
                    break;
                }
                Err(e) => {
                    self.report(e).await;
                    continue;
                }
            };

            self.stats.messages += 1;

            if let Err(e) = self.process(value).await {
                self.report(e).await;
            }
        }

        tracing::info!(
            "Stdio transport stopped: {} messages, {} replies, {} errors",
            self.stats.messages,
            self.stats.replies,
            self.stats.errors
        );
        self.stats
    }

    async fn process(&mut self, value: Value) -> McpResult<()> {
        let msg = IncomingMessage::from_value(value)?;

        if let Some(reply) = self.handler.handle_message(msg) {
            tracing::trace!("Replying to request {}", reply.id());
            self.stream.write_message(&reply).await?;
            self.stats.replies += 1;
        }

        Ok(())
    }

    /// Best-effort error reply. A failure to send it is logged and dropped.
    async fn report(&mut self, error: McpError) {
        self.stats.errors += 1;
        match &error {
            McpError::Frame(e) if e.is_framing() => tracing::warn!("Bad frame header: {e}"),
            _ => tracing::warn!("Recovered from error: {error}"),
        }

        let reply = error.to_json_rpc_error(RequestId::Null);
        if let Err(e) = self.stream.write_message(&reply).await {
            tracing::error!("Failed to send error reply: {e}");
        }
    }
}
