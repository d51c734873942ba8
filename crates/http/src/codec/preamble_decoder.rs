//! Preamble decoder splitting a message head into its first line and headers
//!
//! The decoder works in three stages:
//!
//! 1. Drop trailing CR/LF (the blank line that ends a preamble) and enforce the size limit
//! 2. Split into lines on LF, dropping one trailing CR per line, so CRLF and bare LF both work
//! 3. Split the first line on at most two spaces and hand the rest to the header list decoder
//!
//! [`PreambleParser`] carries [`ParseLimits`]; the free functions in [`crate::codec`]
//! apply none.

use bytes::Bytes;
use tracing::trace;

use crate::codec::header::decode_header_list;
use crate::codec::path::parse_path_with_limit;
use crate::codec::request_decoder::decode_request;
use crate::codec::response_decoder::decode_response;
use crate::codec::split;
use crate::ensure;
use crate::limits::ParseLimits;
use crate::protocol::{ParseError, Preamble, Query, RequestHead, ResponseHead};

/// Parses a preamble into first-line tokens and headers.
///
/// No size or count limits apply; callers bound their input first, or use a
/// [`PreambleParser`] configured with [`ParseLimits`].
///
/// # Errors
///
/// - [`ParseError::EmptyInput`] if `data` holds nothing but line terminators
/// - [`ParseError::MalformedFirstLine`] if the first line has fewer than three tokens
/// - any error of [`parse_header_list`](crate::codec::parse_header_list)
///
/// ```
/// use micro_http_parser::codec::parse_headers;
///
/// let preamble = parse_headers(&b"GET / HTTP/1.0"[..]).unwrap();
/// assert_eq!(preamble.first_line(), &["GET", "/", "HTTP/1.0"]);
/// assert!(preamble.headers().is_empty());
/// ```
pub fn parse_headers(data: impl Into<Bytes>) -> Result<Preamble, ParseError> {
    decode_preamble(data.into(), &ParseLimits::unbounded())
}

pub(crate) fn decode_preamble(data: Bytes, limits: &ParseLimits) -> Result<Preamble, ParseError> {
    ensure!(!data.is_empty(), ParseError::EmptyInput);
    ensure!(data.len() <= limits.max_header_bytes, ParseError::too_large_header(data.len(), limits.max_header_bytes));

    let end = data.iter().rposition(|b| *b != b'\r' && *b != b'\n').map_or(0, |index| index + 1);
    ensure!(end > 0, ParseError::EmptyInput);
    let data = data.slice(..end);

    let mut lines = split(&data, b"\n", 0).into_iter().map(strip_cr);
    // split always yields at least one part
    let first_line = lines.next().unwrap_or_default();
    let header_lines: Vec<Bytes> = lines.collect();

    let first_line = decode_first_line(&first_line)?;
    let headers = decode_header_list(&header_lines, limits.max_headers)?;

    trace!(preamble_size = end, header_count = headers.len(), "parsed preamble");
    Ok(Preamble::new(first_line, headers))
}

fn strip_cr(line: Bytes) -> Bytes {
    match line.last() {
        Some(b'\r') => line.slice(..line.len() - 1),
        _ => line,
    }
}

fn decode_first_line(line: &Bytes) -> Result<[Bytes; 3], ParseError> {
    <[Bytes; 3]>::try_from(split(line, b" ", 2)).map_err(|parts| {
        ParseError::malformed_first_line(format!("expected 3 space separated tokens, found {}", parts.len()))
    })
}

/// A preamble parser configured with [`ParseLimits`].
///
/// Stateless apart from its limits, so one instance can be shared freely.
///
/// ```
/// use micro_http_parser::{Method, PreambleParser};
///
/// let parser = PreambleParser::new();
/// let head = parser.parse_request(&b"GET /items?page=2 HTTP/1.1\r\nHost: localhost\r\n\r\n"[..]).unwrap();
/// assert_eq!(head.method(), Method::GET);
///
/// let (path, query) = parser.parse_path(head.path()).unwrap();
/// assert_eq!(path, "/items");
/// assert_eq!(query.get_first("page"), Some("2"));
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct PreambleParser {
    limits: ParseLimits,
}

impl PreambleParser {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_limits(limits: ParseLimits) -> Self {
        Self { limits }
    }

    pub fn limits(&self) -> &ParseLimits {
        &self.limits
    }

    /// Like [`parse_headers`], within this parser's limits.
    pub fn parse(&self, data: impl Into<Bytes>) -> Result<Preamble, ParseError> {
        decode_preamble(data.into(), &self.limits)
    }

    /// Like [`parse_request_headers`](crate::codec::parse_request_headers), within this parser's limits.
    pub fn parse_request(&self, data: impl Into<Bytes>) -> Result<RequestHead, ParseError> {
        decode_request(data.into(), &self.limits)
    }

    /// Like [`parse_response_headers`](crate::codec::parse_response_headers), within this parser's limits.
    pub fn parse_response(&self, data: impl Into<Bytes>) -> Result<ResponseHead, ParseError> {
        decode_response(data.into(), &self.limits)
    }

    /// Like [`parse_path`](crate::codec::parse_path), within this parser's limits.
    pub fn parse_path(&self, raw_target: &Bytes) -> Result<(Bytes, Query), ParseError> {
        parse_path_with_limit(raw_target, self.limits.max_query_params)
    }
}
