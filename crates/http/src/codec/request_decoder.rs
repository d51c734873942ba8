//! Request line validation on top of the preamble decoder
//!
//! ```text
//! request-line = METHOD SP REQUEST-TARGET SP HTTP-VERSION
//! ```
//!
//! The method must be one of [`Method`], matched case-sensitively, and the
//! version must be exactly `HTTP/1.0` or `HTTP/1.1`. The version only gates the
//! parse; it is not kept in the resulting [`RequestHead`].

use bytes::Bytes;
use memchr::memchr;
use tracing::trace;

use crate::codec::preamble_decoder::decode_preamble;
use crate::ensure;
use crate::limits::ParseLimits;
use crate::protocol::{HttpVersion, Method, ParseError, RequestHead};

/// Parses a request preamble.
///
/// Like [`parse_headers`](crate::codec::parse_headers), no size or count limits apply.
///
/// # Errors
///
/// Besides the errors of [`parse_headers`](crate::codec::parse_headers):
///
/// - [`ParseError::MalformedFirstLine`] if the request line has more than three
///   tokens or a target that is empty or not visible ASCII
/// - [`ParseError::UnknownMethod`] if the method is not a [`Method`]
/// - [`ParseError::UnsupportedVersion`] for any version but `HTTP/1.0` and `HTTP/1.1`
pub fn parse_request_headers(data: impl Into<Bytes>) -> Result<RequestHead, ParseError> {
    decode_request(data.into(), &ParseLimits::unbounded())
}

pub(crate) fn decode_request(data: Bytes, limits: &ParseLimits) -> Result<RequestHead, ParseError> {
    let (first_line, headers) = decode_preamble(data, limits)?.into_parts();
    let [method, path, version] = first_line;

    // the preamble decoder stops after two splits, so extra tokens end up here
    ensure!(memchr(b' ', &version).is_none(), ParseError::malformed_first_line("request line has more than 3 tokens"));

    let method = Method::from_bytes(&method)?;

    ensure!(!path.is_empty(), ParseError::malformed_first_line("empty request target"));
    ensure!(
        path.iter().all(u8::is_ascii_graphic),
        ParseError::malformed_first_line("request target contains non visible characters")
    );

    let version = HttpVersion::from_bytes(&version)?;

    trace!(%method, %version, header_count = headers.len(), "parsed request line");
    Ok(RequestHead::new(method, path, headers))
}
