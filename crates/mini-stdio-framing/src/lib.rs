//! Mini stdio framing — `Content-Length` delimited messages over raw byte streams.

pub mod error;
pub mod header;
pub mod reader;
pub mod stream;
pub mod writer;

pub use error::{FrameError, FrameResult};
pub use header::{content_length, DEFAULT_MAX_HEADER_BYTES};
pub use reader::{decode_body, FrameReader};
pub use stream::FramedStream;
pub use writer::{encode_frame, FrameWriter, CONTENT_TYPE};
