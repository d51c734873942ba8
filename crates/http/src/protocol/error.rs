use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("empty preamble")]
    EmptyInput,

    #[error("malformed first line: {reason}")]
    MalformedFirstLine { reason: String },

    #[error("malformed header line: {reason}")]
    MalformedHeaderLine { reason: String },

    #[error("unknown http method")]
    UnknownMethod,

    #[error("unsupported http version")]
    UnsupportedVersion,

    #[error("invalid status code")]
    InvalidStatusCode,

    #[error("invalid percent encoding: {reason}")]
    InvalidEncoding { reason: String },

    #[error("header size too large, current: {current_size} exceed the limit {max_size}")]
    TooLargeHeader { current_size: usize, max_size: usize },

    #[error("header number exceed the limit {max_num}")]
    TooManyHeaders { max_num: usize },

    #[error("query parameter number exceed the limit {max_num}")]
    TooManyQueryParams { max_num: usize },
}

/// Fieldless discriminant of [`ParseError`], handy for matching in callers and tests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParseErrorKind {
    EmptyInput,
    MalformedFirstLine,
    MalformedHeaderLine,
    UnknownMethod,
    UnsupportedVersion,
    InvalidStatusCode,
    InvalidEncoding,
    TooLargeHeader,
    TooManyHeaders,
    TooManyQueryParams,
}

impl ParseError {
    pub fn malformed_first_line<S: ToString>(str: S) -> Self {
        Self::MalformedFirstLine { reason: str.to_string() }
    }

    pub fn malformed_header_line<S: ToString>(str: S) -> Self {
        Self::MalformedHeaderLine { reason: str.to_string() }
    }

    pub fn invalid_encoding<S: ToString>(str: S) -> Self {
        Self::InvalidEncoding { reason: str.to_string() }
    }

    pub fn too_large_header(current_size: usize, max_size: usize) -> Self {
        Self::TooLargeHeader { current_size, max_size }
    }

    pub fn too_many_headers(max_num: usize) -> Self {
        Self::TooManyHeaders { max_num }
    }

    pub fn too_many_query_params(max_num: usize) -> Self {
        Self::TooManyQueryParams { max_num }
    }

    pub fn kind(&self) -> ParseErrorKind {
        match self {
            Self::EmptyInput => ParseErrorKind::EmptyInput,
            Self::MalformedFirstLine { .. } => ParseErrorKind::MalformedFirstLine,
            Self::MalformedHeaderLine { .. } => ParseErrorKind::MalformedHeaderLine,
            Self::UnknownMethod => ParseErrorKind::UnknownMethod,
            Self::UnsupportedVersion => ParseErrorKind::UnsupportedVersion,
            Self::InvalidStatusCode => ParseErrorKind::InvalidStatusCode,
            Self::InvalidEncoding { .. } => ParseErrorKind::InvalidEncoding,
            Self::TooLargeHeader { .. } => ParseErrorKind::TooLargeHeader,
            Self::TooManyHeaders { .. } => ParseErrorKind::TooManyHeaders,
            Self::TooManyQueryParams { .. } => ParseErrorKind::TooManyQueryParams,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_carries_reason() {
        let error = ParseError::malformed_header_line("missing ':'");
        assert_eq!(error.to_string(), "malformed header line: missing ':'");

        let error = ParseError::too_large_header(9000, 8192);
        assert_eq!(error.to_string(), "header size too large, current: 9000 exceed the limit 8192");
    }

    #[test]
    fn kind_ignores_payload() {
        assert_eq!(ParseError::invalid_encoding("a").kind(), ParseError::invalid_encoding("b").kind());
        assert_eq!(ParseError::too_many_headers(3).kind(), ParseErrorKind::TooManyHeaders);
        assert_ne!(ParseError::UnknownMethod.kind(), ParseError::UnsupportedVersion.kind());
    }
}
