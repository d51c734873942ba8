//! Header block decoder turning `Name: Value` lines into a [`HeaderMap`]
//!
//! # Rules
//!
//! - The name is everything before the first `:`, taken verbatim. It must be a
//!   non-empty RFC 9110 token, so surrounding whitespace is an error rather than
//!   something to trim.
//! - The value is everything after the first `:` with leading SP/HTAB removed.
//!   [`HeaderMap::append`] refuses control bytes other than HTAB, which keeps
//!   stray CR and NUL out of the map.
//! - Repeated names are appended, never overwritten.
//!
//! Any bad line fails the whole block; a partial map is never returned.

use bytes::Bytes;
use memchr::memchr;
use tracing::trace;

use crate::ensure;
use crate::protocol::{HeaderMap, HeaderName, ParseError};

/// Parses header lines, already stripped of their line terminators.
///
/// An empty slice yields an empty map.
///
/// # Errors
///
/// Returns [`ParseError::MalformedHeaderLine`] if a line has no `:`, an empty or
/// invalid name, or a control byte in its value. No header count limit applies;
/// use [`PreambleParser`](crate::PreambleParser) for that.
pub fn parse_header_list(lines: &[Bytes]) -> Result<HeaderMap, ParseError> {
    decode_header_list(lines, usize::MAX)
}

pub(crate) fn decode_header_list(lines: &[Bytes], max_headers: usize) -> Result<HeaderMap, ParseError> {
    ensure!(lines.len() <= max_headers, ParseError::too_many_headers(max_headers));

    let mut headers = HeaderMap::with_capacity(lines.len());
    for line in lines {
        let (name, value) = decode_header_line(line)?;
        headers.append(name, value)?;
    }

    trace!(header_count = headers.len(), "parsed header list");
    Ok(headers)
}

fn decode_header_line(line: &Bytes) -> Result<(HeaderName, Bytes), ParseError> {
    let colon = memchr(b':', line).ok_or_else(|| {
        ParseError::malformed_header_line(format!("missing ':' in {:?}", String::from_utf8_lossy(line)))
    })?;

    let name = HeaderName::from_bytes(line.slice(..colon))?;

    let value_start = line[colon + 1..]
        .iter()
        .position(|b| *b != b' ' && *b != b'\t')
        .map_or(line.len(), |offset| colon + 1 + offset);
    Ok((name, line.slice(value_start..)))
}
