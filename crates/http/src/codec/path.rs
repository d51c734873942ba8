//! Request target decomposition into path and query parameters.

use bytes::Bytes;
use memchr::memchr;
use tracing::trace;

use crate::codec::{percent_decode, split};
use crate::ensure;
use crate::protocol::{ParseError, Query};

/// Splits a request target at the first `?` into the raw path and decoded query.
///
/// The query string is split on `&` and each pair on its first `=`; names and
/// values are percent-decoded. Empty pairs are skipped and a pair without `=`
/// maps to an empty value. The path is returned undecoded.
///
/// # Errors
///
/// Returns [`ParseError::InvalidEncoding`] for a malformed escape or non UTF-8
/// result. The number of pairs is not bounded here; use
/// [`PreambleParser::parse_path`](crate::PreambleParser::parse_path) for that.
///
/// ```
/// use bytes::Bytes;
/// use micro_http_parser::codec::parse_path;
///
/// let (path, query) = parse_path(&Bytes::from_static(b"/path?a=b")).unwrap();
/// assert_eq!(path, "/path");
/// assert_eq!(query.get_first("a"), Some("b"));
/// ```
pub fn parse_path(raw_target: &Bytes) -> Result<(Bytes, Query), ParseError> {
    parse_path_with_limit(raw_target, usize::MAX)
}

pub(crate) fn parse_path_with_limit(raw_target: &Bytes, max_params: usize) -> Result<(Bytes, Query), ParseError> {
    let Some(index) = memchr(b'?', raw_target) else {
        return Ok((raw_target.clone(), Query::new()));
    };

    let path = raw_target.slice(..index);
    let query_string = raw_target.slice(index + 1..);

    let mut query = Query::new();
    let mut param_count = 0;
    for pair in split(&query_string, b"&", 0) {
        if pair.is_empty() {
            continue;
        }
        param_count += 1;
        ensure!(param_count <= max_params, ParseError::too_many_query_params(max_params));

        let mut kv = split(&pair, b"=", 1).into_iter();
        let key = kv.next().unwrap_or_default();
        let value = kv.next().unwrap_or_default();

        query.insert(percent_decode(&key)?.into_owned(), percent_decode(&value)?.into_owned());
    }

    trace!(params = param_count, "parsed query string");
    Ok((path, query))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::QueryValue;

    fn parse(str: &'static str) -> Result<(Bytes, Query), ParseError> {
        parse_path(&Bytes::from_static(str.as_bytes()))
    }

    #[test]
    fn no_query_string() {
        let (path, query) = parse("/path").unwrap();
        assert_eq!(path, "/path");
        assert_eq!(query, Query::new());
    }

    #[test]
    fn single_parameter() {
        let (path, query) = parse("/path?a=b").unwrap();
        assert_eq!(path, "/path");
        assert_eq!(query, [("a", "b")].into_iter().collect::<Query>());
    }

    #[test]
    fn decodes_names_and_values() {
        let (path, query) = parse("/search%20here?q=rust%20lang&caf%C3%A9=1&eq=a%3Db=c").unwrap();
        assert_eq!(path, "/search%20here");
        assert_eq!(query.get_first("q"), Some("rust lang"));
        assert_eq!(query.get_first("caf\u{e9}"), Some("1"));
        // only the first '=' separates name from value
        assert_eq!(query.get_first("eq"), Some("a=b=c"));
    }

    #[test]
    fn edge_pairs() {
        let (_, query) = parse("/?flag&empty=&&=anon&a=1&a=2&").unwrap();
        assert_eq!(query.len(), 4);
        assert_eq!(query.get_first("flag"), Some(""));
        assert_eq!(query.get_first("empty"), Some(""));
        assert_eq!(query.get_first(""), Some("anon"));
        assert_eq!(query.get("a"), Some(&QueryValue::Multi(vec!["1".into(), "2".into()])));
    }

    #[test]
    fn empty_query_string() {
        let (path, query) = parse("/path?").unwrap();
        assert_eq!(path, "/path");
        assert!(query.is_empty());

        let (path, query) = parse("?a=1").unwrap();
        assert_eq!(path, "");
        assert_eq!(query.get_first("a"), Some("1"));
    }

    #[test]
    fn later_question_marks_belong_to_query() {
        let (path, query) = parse("/p?next=/q?x=1").unwrap();
        assert_eq!(path, "/p");
        assert_eq!(query.get_first("next"), Some("/q?x=1"));
    }

    #[test]
    fn invalid_encoding() {
        assert!(matches!(parse("/path?a=%zz"), Err(ParseError::InvalidEncoding { .. })));
        assert!(matches!(parse("/path?%4=b"), Err(ParseError::InvalidEncoding { .. })));
        // the path is not decoded here, so a bad escape in it is accepted
        assert!(parse("/bad%zz?a=b").is_ok());
    }

    #[test]
    fn too_many_params() {
        let target = Bytes::from_static(b"/?a=1&b=2&c=3");
        assert_eq!(parse_path_with_limit(&target, 2), Err(ParseError::too_many_query_params(2)));
        assert!(parse_path_with_limit(&target, 3).is_ok());

        let pairs: Vec<String> = (0..257).map(|n| format!("p{n}={n}")).collect();
        let (_, query) = parse_path(&Bytes::from(format!("/?{}", pairs.join("&")))).unwrap();
        assert_eq!(query.len(), 257);
        assert_eq!(query.get_first("p256"), Some("256"));
    }
}
