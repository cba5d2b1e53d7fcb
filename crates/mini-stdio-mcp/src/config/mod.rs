//! Configuration loading and resolution.

use mini_stdio_framing::DEFAULT_MAX_HEADER_BYTES;

/// Environment variable consulted when no `--max-header-bytes` flag is given.
pub const MAX_HEADER_BYTES_ENV: &str = "MINI_STDIO_MAX_HEADER_BYTES";

/// Resolve the header size cap: explicit flag, then environment, then default.
pub fn resolve_max_header_bytes(explicit: Option<usize>) -> usize {
    match explicit {
        Some(0) => tracing::warn!("Ignoring --max-header-bytes 0"),
        Some(limit) => return limit,
        None => {}
    }

    parse_max_header_bytes(std::env::var(MAX_HEADER_BYTES_ENV).ok().as_deref())
        .unwrap_or(DEFAULT_MAX_HEADER_BYTES)
}

/// Parse a header cap from text. Zero and non-numbers are rejected.
fn parse_max_header_bytes(raw: Option<&str>) -> Option<usize> {
    let limit = raw?.trim().parse::<usize>().ok()?;
    if limit == 0 {
        tracing::warn!("Ignoring {MAX_HEADER_BYTES_ENV}=0");
        return None;
    }
    Some(limit)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_wins() {
        assert_eq!(resolve_max_header_bytes(Some(16)), 16);
    }

    #[test]
    fn test_explicit_zero_is_ignored() {
        let limit = resolve_max_header_bytes(Some(0));
        assert_ne!(limit, 0);
        assert_eq!(limit, resolve_max_header_bytes(None));
    }

    #[test]
    fn test_parse() {
        assert_eq!(parse_max_header_bytes(Some(" 4096 ")), Some(4096));
        assert_eq!(parse_max_header_bytes(Some("0")), None);
        assert_eq!(parse_max_header_bytes(Some("lots")), None);
        assert_eq!(parse_max_header_bytes(None), None);
    }
}
