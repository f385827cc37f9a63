//! URL path construction from caller-supplied identifiers.
//!
//! Resource names and IDs end up inside request paths, so every segment is
//! percent-escaped (a literal `/` becomes `%2F` and cannot split the path)
//! and dot segments are resolved before the path is assembled.

use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, utf8_percent_encode};

/// Escape everything outside RFC 3986 `unreserved`.
const SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

pub fn escape_segment(segment: &str) -> String {
    utf8_percent_encode(segment, SEGMENT).to_string()
}

/// Join path segments into a rooted request path.
///
/// Empty segments and `"."` are dropped, `".."` removes the segment before it,
/// anything else is percent-escaped. The result always starts with `/`.
pub fn join_path(segments: &[&str]) -> String {
    let mut parts: Vec<String> = Vec::with_capacity(segments.len());
    for segment in segments {
        match *segment {
            "" | "." => {}
            ".." => {
                parts.pop();
            }
            other => parts.push(escape_segment(other)),
        }
    }
    format!("/{}", parts.join("/"))
}
