//! Byte-bounded string helpers

/// Truncate `s` to at most `max_bytes` bytes without splitting a character
///
/// ASCII input is cut at exactly `max_bytes`. A multi-byte character that
/// would straddle the limit is dropped whole.
pub fn truncate_str(s: &str, max_bytes: usize) -> &str {
    if s.len() <= max_bytes {
        return s;
    }
    let mut end = max_bytes;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    &s[..end]
}

/// Text before the first NUL, as a C reader would see it
pub fn until_nul(s: &str) -> &str {
    match s.find('\0') {
        Some(pos) => &s[..pos],
        None => s,
    }
}
