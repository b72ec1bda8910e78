//! Percent-encoding for caller- or upstream-supplied path segments.
//!
//! Agent ids come straight out of an upstream listing and are interpolated
//! into the detail path, so anything that would change the path structure
//! (`/`, `?`, `#`, `%`) must be escaped.
//!
//! ```
//! use foundry_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("asst_abc123"), "asst_abc123");
//! assert_eq!(encode_path_segment("a/b"), "a%2Fb");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters escaped inside a single path segment.
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as one URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}
