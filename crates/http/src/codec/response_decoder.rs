//! Status line validation on top of the preamble decoder
//!
//! ```text
//! status-line = HTTP-VERSION SP STATUS-CODE SP REASON-PHRASE
//! ```
//!
//! The reason phrase is whatever follows the second space, so it keeps its own
//! spaces and may be empty.

use bytes::Bytes;
use tracing::trace;

use crate::codec::preamble_decoder::decode_preamble;
use crate::ensure;
use crate::limits::ParseLimits;
use crate::protocol::{is_field_value_byte, HttpVersion, ParseError, ResponseHead};

/// Parses a response preamble.
///
/// Like [`parse_headers`](crate::codec::parse_headers), no size or count limits apply.
///
/// # Errors
///
/// Besides the errors of [`parse_headers`](crate::codec::parse_headers):
///
/// - [`ParseError::UnsupportedVersion`] for any version but `HTTP/1.0` and `HTTP/1.1`
/// - [`ParseError::InvalidStatusCode`] unless the code is three digits within `100..=599`
/// - [`ParseError::MalformedFirstLine`] if the reason phrase holds a control character
///
/// ```
/// use micro_http_parser::codec::parse_response_headers;
///
/// let head = parse_response_headers(&b"HTTP/1.0 404 NOT FOUND"[..]).unwrap();
/// assert_eq!(head.status(), 404);
/// assert_eq!(head.reason(), "NOT FOUND");
/// ```
pub fn parse_response_headers(data: impl Into<Bytes>) -> Result<ResponseHead, ParseError> {
    decode_response(data.into(), &ParseLimits::unbounded())
}

pub(crate) fn decode_response(data: Bytes, limits: &ParseLimits) -> Result<ResponseHead, ParseError> {
    let (first_line, headers) = decode_preamble(data, limits)?.into_parts();
    let [version, status, reason] = first_line;

    let version = HttpVersion::from_bytes(&version)?;
    let status = decode_status(&status)?;
    ensure!(
        reason.iter().all(|b| is_field_value_byte(*b)),
        ParseError::malformed_first_line("reason phrase contains control characters")
    );

    trace!(%version, status, header_count = headers.len(), "parsed status line");
    Ok(ResponseHead::new(status, reason, headers))
}

fn decode_status(token: &[u8]) -> Result<u16, ParseError> {
    let [hundreds, tens, ones] = token else {
        return Err(ParseError::InvalidStatusCode);
    };
    ensure!(
        hundreds.is_ascii_digit() && tens.is_ascii_digit() && ones.is_ascii_digit(),
        ParseError::InvalidStatusCode
    );

    let status = u16::from(hundreds - b'0') * 100 + u16::from(tens - b'0') * 10 + u16::from(ones - b'0');
    ensure!((100..=599).contains(&status), ParseError::InvalidStatusCode);
    Ok(status)
}
