//! Preamble encoder serializing request and response heads back to wire form
//!
//! The output is exactly what the decoders accept: a first line, one
//! `name: value` line per header value (duplicates stay separate lines, in
//! order), and a terminating empty line, all CRLF-delimited. Decoding the output
//! of a head that was itself decoded yields an equal head.

use bytes::{BufMut, BytesMut};

use crate::protocol::{HeaderMap, HttpVersion, RequestHead, ResponseHead};

/// Initial buffer size reserved for the first line and headers
const INIT_HEADER_SIZE: usize = 1024;

#[derive(Debug, Clone, Copy, Default)]
pub struct HeaderEncoder {
    version: HttpVersion,
}

impl HeaderEncoder {
    pub fn new(version: HttpVersion) -> Self {
        Self { version }
    }

    pub fn encode_request(&self, head: &RequestHead, dst: &mut BytesMut) {
        dst.reserve(INIT_HEADER_SIZE);
        dst.put_slice(head.method().as_str().as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(head.path());
        dst.put_u8(b' ');
        dst.put_slice(self.version.as_str().as_bytes());
        dst.put_slice(b"\r\n");
        encode_headers(head.headers(), dst);
    }

    pub fn encode_response(&self, head: &ResponseHead, dst: &mut BytesMut) {
        dst.reserve(INIT_HEADER_SIZE);
        dst.put_slice(self.version.as_str().as_bytes());
        dst.put_u8(b' ');
        dst.put_slice(&status_digits(head.status()));
        dst.put_u8(b' ');
        dst.put_slice(head.reason());
        dst.put_slice(b"\r\n");
        encode_headers(head.headers(), dst);
    }
}

fn encode_headers(headers: &HeaderMap, dst: &mut BytesMut) {
    for (name, value) in headers.iter() {
        dst.put_slice(name.as_bytes());
        dst.put_slice(b": ");
        dst.put_slice(value);
        dst.put_slice(b"\r\n");
    }
    dst.put_slice(b"\r\n");
}

/// Status codes are validated to `100..=599`, so always three digits.
fn status_digits(status: u16) -> [u8; 3] {
    let digit = |n: u16| b'0' + (n % 10) as u8;
    [digit(status / 100), digit(status / 10), digit(status)]
}
