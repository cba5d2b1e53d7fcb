//! Frame reader — header scan, exact-length body read, JSON decode.

use std::io::ErrorKind;

use serde_json::Value;
use tokio::io::{AsyncRead, AsyncReadExt, BufReader};

use crate::error::{FrameError, FrameResult};
use crate::header::{content_length, is_terminated, DEFAULT_MAX_HEADER_BYTES};

/// Bodies are read into a buffer that grows with the bytes actually received,
/// never straight to the declared length.
const INITIAL_BODY_CAPACITY: usize = 64 * 1024;

/// Reads `Content-Length` framed messages from a byte stream.
pub struct FrameReader<R> {
    inner: BufReader<R>,
    max_header_bytes: usize,
}

impl<R: AsyncRead + Unpin> FrameReader<R> {
    pub fn new(inner: R) -> Self {
        Self::with_max_header_bytes(inner, DEFAULT_MAX_HEADER_BYTES)
    }

    pub fn with_max_header_bytes(inner: R, max_header_bytes: usize) -> Self {
        Self {
            inner: BufReader::new(inner),
            max_header_bytes,
        }
    }

    pub fn max_header_bytes(&self) -> usize {
        self.max_header_bytes
    }

    /// Read one frame and decode its body as a JSON value.
    pub async fn read_message(&mut self) -> FrameResult<Value> {
        let body = self.read_frame().await?;
        decode_body(&body)
    }

    /// Read one frame and return the raw body bytes.
    ///
    /// Consumes exactly one header block and `Content-Length` body bytes.
    pub async fn read_frame(&mut self) -> FrameResult<Vec<u8>> {
        let header = self.read_header().await?;
        let length = content_length(&header)?;
        tracing::trace!("Frame header parsed, body length {length}");
        self.read_body(length).await
    }

    async fn read_header(&mut self) -> FrameResult<Vec<u8>> {
        let mut buf = Vec::with_capacity(64);
        let mut byte = [0u8; 1];

        loop {
            let n = match self.inner.read(&mut byte).await {
                Ok(n) => n,
                Err(e) if e.kind() == ErrorKind::Interrupted => continue,
                Err(e) => return Err(e.into()),
            };

            if n == 0 {
                return Err(FrameError::StreamClosed);
            }

            buf.extend_from_slice(&byte);

            if is_terminated(&buf) {
                return Ok(buf);
            }

            if buf.len() > self.max_header_bytes {
                return Err(FrameError::HeaderTooLarge {
                    limit: self.max_header_bytes,
                });
            }
        }
    }

    async fn read_body(&mut self, length: usize) -> FrameResult<Vec<u8>> {
        let mut body = Vec::with_capacity(length.min(INITIAL_BODY_CAPACITY));
        let limit = u64::try_from(length).unwrap_or(u64::MAX);

        (&mut self.inner).take(limit).read_to_end(&mut body).await?;

        if body.len() != length {
            tracing::debug!("Stream ended mid-body: got {} of {length} bytes", body.len());
            return Err(FrameError::StreamClosed);
        }

        Ok(body)
    }
}

/// Decode a frame body as UTF-8 text holding exactly one JSON value.
pub fn decode_body(body: &[u8]) -> FrameResult<Value> {
    let text = std::str::from_utf8(body)
        .map_err(|e| FrameError::MalformedPayload(format!("body is not valid UTF-8: {e}")))?;

    serde_json::from_str(text).map_err(|e| FrameError::MalformedPayload(e.to_string()))
}
