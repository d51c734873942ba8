//! Size limits applied while parsing a preamble.
//!
//! Parsing is linear in the input, so bounding the input bounds the work. The
//! defaults match the request header decoder of the micro-http codec.
//!
//! ```
//! use micro_http_parser::PreambleParser;
//! use micro_http_parser::limits::ParseLimits;
//!
//! let parser = PreambleParser::with_limits(ParseLimits { max_headers: 16, ..ParseLimits::default() });
//! assert!(parser.parse_request(&b"GET / HTTP/1.1\r\nHost: a\r\n\r\n"[..]).is_ok());
//! ```

/// Maximum number of headers allowed in a preamble
pub const MAX_HEADER_NUM: usize = 64;

/// Maximum size in bytes allowed for the entire preamble
pub const MAX_HEADER_BYTES: usize = 8 * 1024;

/// Maximum number of `name=value` pairs decoded from a query string
pub const MAX_QUERY_PARAMS: usize = 256;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ParseLimits {
    /// Largest accepted preamble, in bytes (default: `8 KiB`).
    pub max_header_bytes: usize,

    /// Most header lines accepted, duplicates included (default: `64`).
    pub max_headers: usize,

    /// Most query pairs decoded by [`PreambleParser::parse_path`](crate::PreambleParser::parse_path) (default: `256`).
    pub max_query_params: usize,
}

impl Default for ParseLimits {
    fn default() -> Self {
        Self { max_header_bytes: MAX_HEADER_BYTES, max_headers: MAX_HEADER_NUM, max_query_params: MAX_QUERY_PARAMS }
    }
}

impl ParseLimits {
    /// Limits that never trigger, for callers that bound their input elsewhere.
    pub const fn unbounded() -> Self {
        Self { max_header_bytes: usize::MAX, max_headers: usize::MAX, max_query_params: usize::MAX }
    }
}
