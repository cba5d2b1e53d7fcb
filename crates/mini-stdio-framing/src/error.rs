//! Error types for the framing layer.

use std::io::ErrorKind;

/// All errors that can occur while reading or writing a frame.
#[derive(thiserror::Error, Debug)]
pub enum FrameError {
    /// The peer ended the stream during a header or body read.
    #[error("stream closed")]
    StreamClosed,

    #[error("header too large: no terminator within {limit} bytes")]
    HeaderTooLarge { limit: usize },

    #[error("missing Content-Length")]
    MissingLength,

    #[error("invalid Content-Length: {0:?}")]
    InvalidLength(String),

    /// The body was not valid UTF-8 or not valid JSON.
    #[error("malformed payload: {0}")]
    MalformedPayload(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(std::io::Error),
}

impl FrameError {
    /// True for failures in the header/length layer, as opposed to the payload.
    pub fn is_framing(&self) -> bool {
        matches!(
            self,
            FrameError::HeaderTooLarge { .. } | FrameError::MissingLength | FrameError::InvalidLength(_)
        )
    }
}

impl From<std::io::Error> for FrameError {
    fn from(e: std::io::Error) -> Self {
        match e.kind() {
            ErrorKind::UnexpectedEof | ErrorKind::BrokenPipe | ErrorKind::ConnectionReset => {
                FrameError::StreamClosed
            }
            _ => FrameError::Io(e),
        }
    }
}

pub type FrameResult<T> = Result<T, FrameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_disconnect_kinds_map_to_stream_closed() {
        for kind in [ErrorKind::UnexpectedEof, ErrorKind::BrokenPipe, ErrorKind::ConnectionReset] {
            let err = FrameError::from(std::io::Error::new(kind, "gone"));
            assert!(matches!(err, FrameError::StreamClosed), "{kind:?} should close the stream");
        }
    }

    #[test]
    fn test_other_io_errors_are_kept() {
        let err = FrameError::from(std::io::Error::other("boom"));
        assert!(matches!(err, FrameError::Io(_)));
        assert_eq!(err.to_string(), "IO error: boom");
    }

    #[test]
    fn test_framing_category() {
        assert!(FrameError::MissingLength.is_framing());
        assert!(FrameError::HeaderTooLarge { limit: 8 }.is_framing());
        assert!(!FrameError::MalformedPayload("x".into()).is_framing());
        assert!(!FrameError::StreamClosed.is_framing());
    }
}
