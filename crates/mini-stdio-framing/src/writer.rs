//! Frame writer — serialize, prefix with a header block, flush.

use serde::Serialize;
use tokio::io::{AsyncWrite, AsyncWriteExt};

use crate::error::FrameResult;

pub const CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Encode a payload as one complete frame.
///
/// Non-ASCII text is written as literal UTF-8, and `Content-Length` counts
/// body bytes, not characters.
pub fn encode_frame<T: Serialize + ?Sized>(payload: &T) -> FrameResult<Vec<u8>> {
    let body = serde_json::to_vec(payload)?;
    let header = format!(
        "Content-Length: {}\r\nContent-Type: {CONTENT_TYPE}\r\n\r\n",
        body.len()
    );

    let mut frame = Vec::with_capacity(header.len() + body.len());
    frame.extend_from_slice(header.as_bytes());
    frame.extend_from_slice(&body);
    Ok(frame)
}

/// Writes framed messages to a byte stream, flushing after each one.
pub struct FrameWriter<W> {
    inner: W,
}

impl<W: AsyncWrite + Unpin> FrameWriter<W> {
    pub fn new(inner: W) -> Self {
        Self { inner }
    }

    pub async fn write_message<T: Serialize + ?Sized>(&mut self, payload: &T) -> FrameResult<()> {
        let frame = encode_frame(payload)?;
        self.inner.write_all(&frame).await?;
        self.inner.flush().await?;
        Ok(())
    }

    pub fn get_ref(&self) -> &W {
        &self.inner
    }

    pub fn into_inner(self) -> W {
        self.inner
    }
}
