//! A reader and writer pair owned together for one connection.

use serde::Serialize;
use serde_json::Value;
use tokio::io::{AsyncRead, AsyncWrite};

use crate::error::FrameResult;
use crate::header::DEFAULT_MAX_HEADER_BYTES;
use crate::reader::FrameReader;
use crate::writer::FrameWriter;

/// Exclusive owner of one input and one output stream.
pub struct FramedStream<R, W> {
    reader: FrameReader<R>,
    writer: FrameWriter<W>,
}

impl<R: AsyncRead + Unpin, W: AsyncWrite + Unpin> FramedStream<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self::with_max_header_bytes(input, output, DEFAULT_MAX_HEADER_BYTES)
    }

    pub fn with_max_header_bytes(input: R, output: W, max_header_bytes: usize) -> Self {
        Self {
            reader: FrameReader::with_max_header_bytes(input, max_header_bytes),
            writer: FrameWriter::new(output),
        }
    }

    pub async fn read_message(&mut self) -> FrameResult<Value> {
        self.reader.read_message().await
    }

    pub async fn write_message<T: Serialize + ?Sized>(&mut self, payload: &T) -> FrameResult<()> {
        self.writer.write_message(payload).await
    }

    /// Give back the output stream, e.g. to inspect what was written.
    pub fn into_writer(self) -> W {
        self.writer.into_inner()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::encode_frame;
    use crate::FrameError;
    use serde_json::json;

    #[tokio::test]
    async fn test_round_trip_through_stream() {
        let values = [
            json!(null),
            json!({"nested": {"list": [1, 2.5, "three", false]}}),
            json!("héllo→🎉"),
        ];
        let mut input = Vec::new();
        for value in &values {
            input.extend(encode_frame(value).unwrap());
        }

        let mut stream = FramedStream::new(input.as_slice(), Vec::new());
        for value in &values {
            let read = stream.read_message().await.unwrap();
            assert_eq!(&read, value);
            stream.write_message(&read).await.unwrap();
        }
        assert!(matches!(stream.read_message().await, Err(FrameError::StreamClosed)));
        assert_eq!(stream.into_writer(), input);
    }
}
