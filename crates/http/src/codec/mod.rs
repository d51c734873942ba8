//! Decoders turning raw preamble bytes into typed values, and the encoder going back
//!
//! # Architecture
//!
//! The stages build on each other, leaves first:
//!
//! - [`split`]: delimiter splitting with an optional split bound, used everywhere below
//! - [`parse_path`]: request target into raw path and decoded [`Query`](crate::protocol::Query)
//! - [`parse_header_list`]: header lines into a [`HeaderMap`](crate::protocol::HeaderMap)
//! - [`parse_headers`]: a whole preamble into a [`Preamble`](crate::protocol::Preamble)
//! - [`parse_request_headers`]: a preamble validated as a [`RequestHead`](crate::protocol::RequestHead)
//! - [`parse_response_headers`]: a preamble validated as a [`ResponseHead`](crate::protocol::ResponseHead)
//! - [`HeaderEncoder`]: heads back into wire bytes
//!
//! ```text
//! bytes ──> parse_headers ──┬──> parse_request_headers  ──> RequestHead ──> parse_path
//!             │      │      └──> parse_response_headers ──> ResponseHead
//!           split  parse_header_list
//! ```
//!
//! # Example
//!
//! ```
//! use micro_http_parser::codec::{parse_path, parse_request_headers};
//! use micro_http_parser::protocol::Method;
//!
//! let head = parse_request_headers(&b"GET /search?q=rust%20http HTTP/1.1\r\nHost: localhost\r\n\r\n"[..]).unwrap();
//! assert_eq!(head.method(), Method::GET);
//! assert_eq!(head.headers().get("host").unwrap(), "localhost");
//!
//! let (path, query) = parse_path(head.path()).unwrap();
//! assert_eq!(path, "/search");
//! assert_eq!(query.get_first("q"), Some("rust http"));
//! ```
//!
//! Every function here is pure: no I/O, no shared state, and failures come back as
//! [`ParseError`](crate::protocol::ParseError) values without being logged.

mod header;
mod path;
mod percent;
mod preamble_decoder;
mod request_decoder;
mod response_decoder;
mod split;

pub use header::{parse_header_list, HeaderEncoder};
pub use path::parse_path;
pub use percent::percent_decode;
pub use preamble_decoder::{parse_headers, PreambleParser};
pub use request_decoder::parse_request_headers;
pub use response_decoder::parse_response_headers;
pub use split::split;
