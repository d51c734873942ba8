//! HTTP request preamble produced by the request-line validator.

use bytes::Bytes;

use crate::codec;
use crate::protocol::{HeaderMap, HttpVersion, Method, ParseError, Query};

/// A validated request line plus its headers.
///
/// The protocol version is checked while parsing but not retained. The path is
/// the raw request target; call [`RequestHead::parse_path`] to split off and
/// decode the query string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestHead {
    method: Method,
    path: Bytes,
    headers: HeaderMap,
}

impl RequestHead {
    pub(crate) fn new(method: Method, path: Bytes, headers: HeaderMap) -> Self {
        Self { method, path, headers }
    }

    pub fn method(&self) -> Method {
        self.method
    }

    /// The request target exactly as it appeared on the request line.
    pub fn path(&self) -> &Bytes {
        &self.path
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    /// Splits the request target into its undecoded path and decoded query.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::InvalidEncoding`] if the query string holds a bad escape.
    pub fn parse_path(&self) -> Result<(Bytes, Query), ParseError> {
        codec::parse_path(&self.path)
    }

    pub fn into_parts(self) -> (Method, Bytes, HeaderMap) {
        (self.method, self.path, self.headers)
    }

    /// Converts into an [`http::Request`] carrying `version`.
    ///
    /// # Errors
    ///
    /// Fails if `http` does not accept the path as a URI.
    pub fn into_http(self, version: HttpVersion) -> Result<http::Request<()>, http::Error> {
        let mut request = http::Request::new(());
        *request.method_mut() = self.method.into();
        *request.uri_mut() = http::Uri::from_maybe_shared(self.path)?;
        *request.version_mut() = version.into();
        *request.headers_mut() = self.headers.to_http()?;
        Ok(request)
    }
}
