//! HTTP response preamble produced by the status-line validator.

use bytes::Bytes;

use crate::protocol::{HeaderMap, HttpVersion};

/// A validated status line plus its headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseHead {
    status: u16,
    reason: Bytes,
    headers: HeaderMap,
}

impl ResponseHead {
    pub(crate) fn new(status: u16, reason: Bytes, headers: HeaderMap) -> Self {
        debug_assert!((100..=599).contains(&status));
        Self { status, reason, headers }
    }

    /// Status code, always within `100..=599`.
    pub fn status(&self) -> u16 {
        self.status
    }

    /// Reason phrase with its internal spaces intact; may be empty.
    pub fn reason(&self) -> &Bytes {
        &self.reason
    }

    pub fn headers(&self) -> &HeaderMap {
        &self.headers
    }

    pub fn into_parts(self) -> (u16, Bytes, HeaderMap) {
        (self.status, self.reason, self.headers)
    }

    /// Converts into an [`http::Response`] carrying `version`. The reason phrase
    /// has no slot in `http::Response` and is dropped.
    ///
    /// # Errors
    ///
    /// Fails if `http` rejects a header that the parser accepted.
    pub fn into_http(self, version: HttpVersion) -> Result<http::Response<()>, http::Error> {
        let mut response = http::Response::new(());
        *response.status_mut() = http::StatusCode::from_u16(self.status)?;
        *response.version_mut() = version.into();
        *response.headers_mut() = self.headers.to_http()?;
        Ok(response)
    }
}

#[cfg(test)]
mod tests {
    use indoc::indoc;

    use super::*;
    use crate::codec::parse_response_headers;

    #[test]
    fn from_nginx() {
        let str = indoc! {r##"
        HTTP/1.1 301 Moved Permanently
        Server: nginx
        Content-Type: text/html
        Location: https://example.com/
        "##};

        let head = parse_response_headers(str.as_bytes()).unwrap();
        assert_eq!(head.status(), 301);
        assert_eq!(head.reason(), "Moved Permanently");
        assert_eq!(head.headers().get("location").unwrap(), "https://example.com/");

        let response = head.into_http(HttpVersion::Http11).unwrap();
        assert_eq!(response.status(), http::StatusCode::MOVED_PERMANENTLY);
        assert_eq!(response.version(), http::Version::HTTP_11);
        assert_eq!(response.headers().get(http::header::SERVER).unwrap(), "nginx");
    }
}
