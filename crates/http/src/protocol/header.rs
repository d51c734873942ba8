//! Header field names and the header map produced by the preamble parser.
//!
//! [`HeaderName`] keeps the bytes exactly as they arrived on the wire but compares,
//! hashes and orders them ignoring ASCII case. [`HeaderMap`] is an insertion-ordered
//! multimap keyed by [`HeaderName`]: repeated fields are retained as separate values
//! in arrival order rather than overwritten.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};

use bytes::{BufMut, Bytes, BytesMut};

use crate::ensure;
use crate::protocol::ParseError;

/// A header field name compared case-insensitively.
#[derive(Clone)]
pub struct HeaderName {
    inner: Bytes,
}

impl HeaderName {
    /// Validates `bytes` as an RFC 9110 token and wraps it.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedHeaderLine`] if the name is empty or contains
    /// anything other than token characters (whitespace included).
    pub fn from_bytes(bytes: Bytes) -> Result<Self, ParseError> {
        ensure!(!bytes.is_empty(), ParseError::malformed_header_line("empty header name"));
        ensure!(
            bytes.iter().all(|b| is_token(*b)),
            ParseError::malformed_header_line(format!("invalid header name {:?}", String::from_utf8_lossy(&bytes)))
        );
        Ok(Self { inner: bytes })
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.inner
    }

    pub fn eq_ignore_case(&self, other: &[u8]) -> bool {
        self.inner.eq_ignore_ascii_case(other)
    }

    fn lowercase_bytes(&self) -> impl Iterator<Item = u8> + '_ {
        self.inner.iter().map(u8::to_ascii_lowercase)
    }
}

impl AsRef<[u8]> for HeaderName {
    fn as_ref(&self) -> &[u8] {
        &self.inner
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        self.eq_ignore_case(&other.inner)
    }
}

impl Eq for HeaderName {}

impl Hash for HeaderName {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.inner.len());
        for b in self.lowercase_bytes() {
            state.write_u8(b);
        }
    }
}

impl PartialOrd for HeaderName {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeaderName {
    fn cmp(&self, other: &Self) -> Ordering {
        self.lowercase_bytes().cmp(other.lowercase_bytes())
    }
}

impl fmt::Debug for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&String::from_utf8_lossy(&self.inner), f)
    }
}

impl fmt::Display for HeaderName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // validated as token characters, which are all ASCII
        f.write_str(&String::from_utf8_lossy(&self.inner))
    }
}

/// RFC 9110 `tchar`.
#[inline]
pub(crate) fn is_token(b: u8) -> bool {
    b.is_ascii_alphanumeric() || b"!#$%&'*+-.^_`|~".contains(&b)
}

/// Field values may carry visible ASCII, obs-text, SP and HTAB; any other control
/// byte (CR, NUL, DEL...) is refused.
#[inline]
pub(crate) fn is_field_value_byte(b: u8) -> bool {
    b == b'\t' || (b >= 0x20 && b != 0x7f)
}

/// Insertion-ordered, case-insensitive header multimap.
#[derive(Debug, Clone, Default)]
pub struct HeaderMap {
    entries: Vec<(HeaderName, Bytes)>,
}

impl HeaderMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self { entries: Vec::with_capacity(capacity) }
    }

    /// Number of stored values, counting every duplicate.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Appends a value, keeping any value already stored under the same name.
    ///
    /// # Errors
    ///
    /// Returns [`ParseError::MalformedHeaderLine`] if `value` holds a control byte
    /// other than HTAB, since CR or LF would split the line once encoded.
    pub fn append(&mut self, name: HeaderName, value: Bytes) -> Result<(), ParseError> {
        ensure!(
            value.iter().all(|b| is_field_value_byte(*b)),
            ParseError::malformed_header_line(format!("control character in value of {name}"))
        );
        self.entries.push((name, value));
        Ok(())
    }

    /// Returns the first value stored under `name`.
    pub fn get<K: AsRef<[u8]>>(&self, name: K) -> Option<&Bytes> {
        self.get_all(name).next()
    }

    /// Returns every value stored under `name`, in arrival order.
    pub fn get_all<K: AsRef<[u8]>>(&self, name: K) -> impl Iterator<Item = &Bytes> {
        self.entries.iter().filter(move |(key, _)| key.eq_ignore_case(name.as_ref())).map(|(_, value)| value)
    }

    /// Returns every value stored under `name` joined with `", "`, the
    /// combination RFC 9110 section 5.3 allows for list-based fields.
    pub fn get_joined<K: AsRef<[u8]>>(&self, name: K) -> Option<Bytes> {
        let mut values = self.get_all(name);
        let first = values.next()?;
        let mut joined = BytesMut::from(&first[..]);
        for value in values {
            joined.put_slice(b", ");
            joined.put_slice(value);
        }
        Some(joined.freeze())
    }

    pub fn contains_key<K: AsRef<[u8]>>(&self, name: K) -> bool {
        self.get(name).is_some()
    }

    pub fn iter(&self) -> Iter<'_> {
        Iter { inner: self.entries.iter() }
    }

    // stable sort keeps arrival order within a name
    fn sorted_by_name(&self) -> Vec<&(HeaderName, Bytes)> {
        let mut entries: Vec<_> = self.entries.iter().collect();
        entries.sort_by(|(a, _), (b, _)| a.cmp(b));
        entries
    }

    /// Converts into an [`http::HeaderMap`], preserving duplicates.
    ///
    /// # Errors
    ///
    /// Fails only if `http` rejects a name or value that this map accepted.
    pub fn to_http(&self) -> Result<http::HeaderMap, http::Error> {
        let mut headers = http::HeaderMap::with_capacity(self.entries.len());
        for (name, value) in &self.entries {
            let name = http::HeaderName::from_bytes(name.as_bytes())?;
            let value = http::HeaderValue::from_maybe_shared(value.clone())?;
            headers.append(name, value);
        }
        Ok(headers)
    }
}

/// Equal when both maps hold the same values per name; order only matters among
/// the values of a single name.
impl PartialEq for HeaderMap {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.sorted_by_name() == other.sorted_by_name()
    }
}

impl Eq for HeaderMap {}

impl<'a> IntoIterator for &'a HeaderMap {
    type Item = (&'a HeaderName, &'a Bytes);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Iterator over the `(name, value)` pairs of a [`HeaderMap`] in arrival order.
#[derive(Debug, Clone)]
pub struct Iter<'a> {
    inner: std::slice::Iter<'a, (HeaderName, Bytes)>,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a HeaderName, &'a Bytes);

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|(name, value)| (name, value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Iter<'_> {}

#[cfg(test)]
mod tests {
    use std::collections::hash_map::DefaultHasher;

    use super::*;

    fn name(str: &'static str) -> HeaderName {
        HeaderName::from_bytes(Bytes::from_static(str.as_bytes())).unwrap()
    }

    fn hash_of(name: &HeaderName) -> u64 {
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn name_ignores_ascii_case() {
        assert_eq!(name("Content-Type"), name("content-type"));
        assert_eq!(hash_of(&name("Content-Type")), hash_of(&name("CONTENT-TYPE")));
        assert_eq!(name("accept").cmp(&name("ACCEPT")), Ordering::Equal);
        assert!(name("Accept") < name("host"));
        assert_ne!(name("Accept"), name("Accepts"));
    }

    #[test]
    fn name_keeps_original_bytes() {
        assert_eq!(name("X-Request-Id").as_bytes(), b"X-Request-Id");
        assert_eq!(name("X-Request-Id").to_string(), "X-Request-Id");
    }

    #[test]
    fn name_rejects_non_token() {
        for bad in ["", " Host", "Host ", "Ho st", "Host:", "caf\u{e9}", "a\tb"] {
            let result = HeaderName::from_bytes(Bytes::from(bad));
            assert!(matches!(result, Err(ParseError::MalformedHeaderLine { .. })), "{bad:?} accepted");
        }
    }

    #[test]
    fn value_bytes() {
        assert!(is_field_value_byte(b'\t'));
        assert!(is_field_value_byte(b' '));
        assert!(is_field_value_byte(0x80));
        assert!(!is_field_value_byte(b'\r'));
        assert!(!is_field_value_byte(0));
        assert!(!is_field_value_byte(0x7f));
    }

    #[test]
    fn map_lookup_is_case_insensitive() {
        let mut headers = HeaderMap::new();
        headers.append(name("a"), Bytes::from_static(b"b")).unwrap();
        headers.append(name("c"), Bytes::from_static(b"d")).unwrap();

        assert_eq!(headers.len(), 2);
        assert_eq!(headers.get("A"), Some(&Bytes::from_static(b"b")));
        assert_eq!(headers.get("c"), Some(&Bytes::from_static(b"d")));
        assert_eq!(headers.get("e"), None);
        assert!(headers.contains_key(b"C"));
    }

    #[test]
    fn map_keeps_duplicates_in_order() {
        let mut headers = HeaderMap::new();
        headers.append(name("Accept"), Bytes::from_static(b"text/html")).unwrap();
        headers.append(name("Host"), Bytes::from_static(b"example.com")).unwrap();
        headers.append(name("accept"), Bytes::from_static(b"*/*")).unwrap();

        assert_eq!(headers.len(), 3);
        assert_eq!(headers.get("ACCEPT"), Some(&Bytes::from_static(b"text/html")));
        assert_eq!(headers.get_all("accept").collect::<Vec<_>>(), vec![&Bytes::from_static(b"text/html"), &Bytes::from_static(b"*/*")]);
        assert_eq!(headers.get_joined("Accept"), Some(Bytes::from_static(b"text/html, */*")));
        assert_eq!(headers.get_joined("Host"), Some(Bytes::from_static(b"example.com")));
        assert_eq!(headers.get_joined("Missing"), None);

        let names: Vec<_> = headers.iter().map(|(name, _)| name.to_string()).collect();
        assert_eq!(names, vec!["Accept", "Host", "accept"]);
    }

    #[test]
    fn append_rejects_control_bytes() {
        let mut headers = HeaderMap::new();
        for value in [&b"a\r\nEvil: 1"[..], b"a\nb", b"a\0", b"a\x7f"] {
            let result = headers.append(name("X-A"), Bytes::from_static(value));
            assert!(matches!(result, Err(ParseError::MalformedHeaderLine { .. })), "{value:?} accepted");
        }
        assert!(headers.is_empty());

        headers.append(name("X-A"), Bytes::from_static(b"a\tb \xff")).unwrap();
        assert_eq!(headers.len(), 1);
    }

    #[test]
    fn iter_in_arrival_order() {
        let mut headers = HeaderMap::new();
        headers.append(name("b"), Bytes::from_static(b"1")).unwrap();
        headers.append(name("a"), Bytes::from_static(b"2")).unwrap();

        let iter = headers.iter();
        assert_eq!(iter.len(), 2);
        let pairs: Vec<_> = iter.map(|(name, value)| (name.to_string(), value.clone())).collect();
        assert_eq!(pairs, vec![("b".to_string(), Bytes::from_static(b"1")), ("a".to_string(), Bytes::from_static(b"2"))]);
        assert_eq!((&headers).into_iter().count(), 2);
    }

    #[test]
    fn map_equality_ignores_order_between_names() {
        let mut left = HeaderMap::new();
        left.append(name("a"), Bytes::from_static(b"1")).unwrap();
        left.append(name("b"), Bytes::from_static(b"2")).unwrap();

        let mut right = HeaderMap::new();
        right.append(name("B"), Bytes::from_static(b"2")).unwrap();
        right.append(name("A"), Bytes::from_static(b"1")).unwrap();
        assert_eq!(left, right);

        let mut swapped = HeaderMap::new();
        swapped.append(name("a"), Bytes::from_static(b"1")).unwrap();
        swapped.append(name("a"), Bytes::from_static(b"2")).unwrap();
        let mut original = HeaderMap::new();
        original.append(name("a"), Bytes::from_static(b"2")).unwrap();
        original.append(name("a"), Bytes::from_static(b"1")).unwrap();
        assert_ne!(swapped, original);
    }

    #[test]
    fn map_to_http() {
        let mut headers = HeaderMap::new();
        headers.append(name("Set-Cookie"), Bytes::from_static(b"a=1")).unwrap();
        headers.append(name("set-cookie"), Bytes::from_static(b"b=2")).unwrap();
        headers.append(name("Host"), Bytes::from_static(b"localhost")).unwrap();

        let converted = headers.to_http().unwrap();
        assert_eq!(converted.len(), 3);
        assert_eq!(converted.get_all(http::header::SET_COOKIE).iter().count(), 2);
        assert_eq!(converted.get(http::header::HOST).unwrap(), "localhost");
    }
}
