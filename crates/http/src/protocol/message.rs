use bytes::Bytes;

use crate::protocol::HeaderMap;

/// A message preamble split into its first-line tokens and header block.
///
/// This is the common intermediate between the raw bytes and a typed
/// [`RequestHead`](crate::protocol::RequestHead) or
/// [`ResponseHead`](crate::protocol::ResponseHead). The first line is split on
/// at most two spaces, so the third token carries the rest of the line verbatim:
/// the version of a request line or the reason phrase of a status line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preamble {
    first_line: [Bytes; 3],
    headers: HeaderMap,
}

impl Preamble {
    pub fn new(first_line: [Bytes; 3], headers: HeaderMap) -> Self {
        Self { first_line, headers }
    }

    /// The three first-line tokens, each a view into the parsed input.
    pub fn first_line(&self) -> &[Bytes; 3] {
        &self.first_line
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_parts(self) -> ([Bytes; 3], HeaderMap) {
        (self.first_line, self.headers)
    }
}
