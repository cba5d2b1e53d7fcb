//! Header block scanning and `Content-Length` lookup.

use crate::error::{FrameError, FrameResult};

/// Upper bound on header bytes scanned before giving up on a terminator.
pub const DEFAULT_MAX_HEADER_BYTES: usize = 8192;

const CONTENT_LENGTH: &str = "content-length";

/// Whether the accumulated bytes end with `\r\n\r\n` or `\n\n`.
pub(crate) fn is_terminated(buf: &[u8]) -> bool {
    buf.ends_with(b"\r\n\r\n") || buf.ends_with(b"\n\n")
}

/// Decode header bytes one byte per character, so no byte value can fail.
pub(crate) fn decode_latin1(bytes: &[u8]) -> String {
    bytes.iter().copied().map(char::from).collect()
}

/// Find the first `Content-Length` field in a header block and parse its value.
///
/// Lines end at `\n`, `\r\n`, or a lone `\r`. The field name is matched
/// case-insensitively and must be followed directly by `:`. Every other field
/// is ignored.
pub fn content_length(header: &[u8]) -> FrameResult<usize> {
    let text = decode_latin1(header);

    let value = text
        .split(|c: char| c == '\r' || c == '\n')
        .find_map(|line| {
            let (name, value) = line.split_once(':')?;
            name.eq_ignore_ascii_case(CONTENT_LENGTH).then_some(value)
        })
        .ok_or(FrameError::MissingLength)?;

    let value = value.trim();
    value
        .parse::<usize>()
        .map_err(|_| FrameError::InvalidLength(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_terminators() {
        assert!(is_terminated(b"Content-Length: 2\r\n\r\n"));
        assert!(is_terminated(b"Content-Length: 2\n\n"));
        assert!(!is_terminated(b"Content-Length: 2\r\n"));
        assert!(!is_terminated(b"\r\n\r"));
    }

    #[test]
    fn test_case_insensitive_lookup() {
        assert_eq!(content_length(b"content-length: 12\r\n\r\n").unwrap(), 12);
        assert_eq!(content_length(b"CONTENT-LENGTH:7\n\n").unwrap(), 7);
    }

    #[test]
    fn test_other_fields_ignored() {
        let header = b"Content-Type: application/json\r\nX-Trace: abc\r\nContent-Length: 3\r\n\r\n";
        assert_eq!(content_length(header).unwrap(), 3);
    }

    #[test]
    fn test_first_field_wins() {
        assert_eq!(content_length(b"Content-Length: 1\nContent-Length: 9\n\n").unwrap(), 1);
    }

    #[test]
    fn test_lone_cr_ends_a_line() {
        assert_eq!(content_length(b"X: a\rContent-Length: 5\r\n\r\n").unwrap(), 5);
    }

    #[test]
    fn test_missing_field() {
        let err = content_length(b"Content-Type: text/plain\r\n\r\n").unwrap_err();
        assert!(matches!(err, FrameError::MissingLength));
    }

    #[test]
    fn test_space_before_colon_does_not_match() {
        let err = content_length(b"Content-Length : 4\r\n\r\n").unwrap_err();
        assert!(matches!(err, FrameError::MissingLength));
    }

    #[test]
    fn test_invalid_values() {
        for header in [
            &b"Content-Length: -1\r\n\r\n"[..],
            b"Content-Length: ten\r\n\r\n",
            b"Content-Length:\r\n\r\n",
        ] {
            let err = content_length(header).unwrap_err();
            assert!(matches!(err, FrameError::InvalidLength(_)), "{err}");
        }
    }

    #[test]
    fn test_high_bytes_never_fail_decoding() {
        let mut header = b"X-Junk: \xff\xfe\x80\r\n".to_vec();
        header.extend_from_slice(b"Content-Length: 5\r\n\r\n");
        assert_eq!(content_length(&header).unwrap(), 5);
        assert_eq!(decode_latin1(b"\xe9"), "\u{e9}");
    }
}
