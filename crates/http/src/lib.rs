//! A strict HTTP/1.x preamble parser
//!
//! This crate turns the raw bytes of an HTTP message head into typed values: the
//! request line or status line, the header block, and the query parameters of a
//! request target. It sits between untrusted network bytes and application code,
//! so every entry point rejects malformed or adversarial input with a
//! [`ParseError`](protocol::ParseError) instead of panicking or guessing.
//!
//! # Features
//!
//! - Request line validation against a closed set of methods
//! - Status line validation with multi-word reason phrases
//! - Case-insensitive, insertion-ordered headers keeping duplicate fields
//! - Strict percent-decoding of query strings
//! - Zero-copy tokens: every byte field is a [`bytes::Bytes`] view of the input
//! - Configurable size limits
//! - Encoding heads back to wire form, round-tripping what was parsed
//!
//! # Example
//!
//! ```
//! use micro_http_parser::{Method, PreambleParser};
//!
//! let parser = PreambleParser::new();
//!
//! let request = parser
//!     .parse_request(&b"POST /submit?tag=a&tag=b HTTP/1.1\r\nHost: localhost\r\nContent-Type: text/plain\r\n\r\n"[..])
//!     .unwrap();
//! assert_eq!(request.method(), Method::POST);
//! assert_eq!(request.headers().get("content-type").unwrap(), "text/plain");
//!
//! let (path, query) = parser.parse_path(request.path()).unwrap();
//! assert_eq!(path, "/submit");
//! assert_eq!(query.get("tag").unwrap().iter().collect::<Vec<_>>(), vec!["a", "b"]);
//!
//! let response = parser.parse_response(&b"HTTP/1.0 404 NOT FOUND\r\n\r\n"[..]).unwrap();
//! assert_eq!(response.status(), 404);
//! assert_eq!(response.reason(), "NOT FOUND");
//! ```
//!
//! # Architecture
//!
//! - [`codec`]: the decoders (and the encoder), leaves first
//! - [`protocol`]: the values they produce and the error type
//! - [`limits`]: size limits applied while parsing
//!
//! # Scope
//!
//! Only the preamble is handled. Reading from sockets, buffering until the blank
//! line, bodies and connection management are left to the caller, who hands in a
//! complete preamble.
//!
//! # Logging
//!
//! Successful parses emit `trace` level [`tracing`] events. Failures are returned,
//! not logged.

pub mod codec;
pub mod limits;
pub mod protocol;

mod utils;
pub(crate) use utils::ensure;

pub use codec::PreambleParser;
pub use protocol::{HeaderMap, HeaderName, HttpVersion, Method, ParseError, Query, RequestHead, ResponseHead};
