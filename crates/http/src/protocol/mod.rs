//! Typed values produced by the parser.
//!
//! - **Preamble** ([`Preamble`]): first-line tokens plus header block, the shared
//!   intermediate of request and response parsing
//! - **Requests** ([`RequestHead`], [`Method`], [`Query`])
//! - **Responses** ([`ResponseHead`])
//! - **Headers** ([`HeaderMap`], [`HeaderName`]): case-insensitive, insertion-ordered
//! - **Versions** ([`HttpVersion`]): `HTTP/1.0` and `HTTP/1.1` only
//! - **Errors** ([`ParseError`], [`ParseErrorKind`])
//!
//! Every value is built fresh per parse and owned by the caller. Byte fields are
//! [`bytes::Bytes`] views that share the parsed input buffer.

mod message;
pub use message::Preamble;

mod request;
pub use request::RequestHead;

mod response;
pub use response::ResponseHead;

mod header;
pub use header::HeaderMap;
pub use header::HeaderName;
pub use header::Iter as HeaderIter;
pub(crate) use header::is_field_value_byte;

mod method;
pub use method::Method;

mod http_version;
pub use http_version::HttpVersion;

mod query;
pub use query::Query;
pub use query::Value as QueryValue;

mod error;
pub use error::ParseError;
pub use error::ParseErrorKind;
