//! The closed set of request methods understood by the parser.

use std::fmt;

use crate::protocol::ParseError;

/// An HTTP request method.
///
/// Unlike [`http::Method`] this enum is closed: a token that is not one of the
/// variants below is rejected with [`ParseError::UnknownMethod`] instead of being
/// accepted as an extension method.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Method {
    GET,
    HEAD,
    POST,
    PUT,
    DELETE,
    CONNECT,
    OPTIONS,
    TRACE,
    PATCH,
}

/// Token text to variant, matched case-sensitively.
const METHODS: [(&[u8], Method); 9] = [
    (b"GET", Method::GET),
    (b"HEAD", Method::HEAD),
    (b"POST", Method::POST),
    (b"PUT", Method::PUT),
    (b"DELETE", Method::DELETE),
    (b"CONNECT", Method::CONNECT),
    (b"OPTIONS", Method::OPTIONS),
    (b"TRACE", Method::TRACE),
    (b"PATCH", Method::PATCH),
];

impl Method {
    pub fn from_bytes(token: &[u8]) -> Result<Self, ParseError> {
        METHODS
            .iter()
            .find(|(text, _)| *text == token)
            .map(|(_, method)| *method)
            .ok_or(ParseError::UnknownMethod)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Method::GET => "GET",
            Method::HEAD => "HEAD",
            Method::POST => "POST",
            Method::PUT => "PUT",
            Method::DELETE => "DELETE",
            Method::CONNECT => "CONNECT",
            Method::OPTIONS => "OPTIONS",
            Method::TRACE => "TRACE",
            Method::PATCH => "PATCH",
        }
    }
}

impl TryFrom<&str> for Method {
    type Error = ParseError;

    fn try_from(str: &str) -> Result<Self, Self::Error> {
        Self::from_bytes(str.as_bytes())
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Method> for http::Method {
    fn from(method: Method) -> Self {
        match method {
            Method::GET => http::Method::GET,
            Method::HEAD => http::Method::HEAD,
            Method::POST => http::Method::POST,
            Method::PUT => http::Method::PUT,
            Method::DELETE => http::Method::DELETE,
            Method::CONNECT => http::Method::CONNECT,
            Method::OPTIONS => http::Method::OPTIONS,
            Method::TRACE => http::Method::TRACE,
            Method::PATCH => http::Method::PATCH,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_method_from() {
        for (text, method) in METHODS {
            assert_eq!(Method::from_bytes(text), Ok(method));
            assert_eq!(method.as_str().as_bytes(), text);
        }
        assert_eq!(Method::try_from("PATCH"), Ok(Method::PATCH));
    }

    #[test]
    fn test_method_from_error() {
        {
            let result = Method::try_from("get");
            assert_eq!(result, Err(ParseError::UnknownMethod));
        }

        {
            let result = Method::try_from("");
            assert_eq!(result, Err(ParseError::UnknownMethod));
        }

        {
            let result = Method::try_from("GET ");
            assert_eq!(result, Err(ParseError::UnknownMethod));
        }
    }

    #[test]
    fn into_http_method() {
        assert_eq!(http::Method::from(Method::DELETE), http::Method::DELETE);
        assert_eq!(http::Method::from(Method::PATCH).as_str(), Method::PATCH.as_str());
    }
}
