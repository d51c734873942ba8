//! Delimiter splitting shared by every parsing stage.

use bytes::Bytes;
use memchr::memmem;

/// Splits `data` on each non-overlapping occurrence of `delimiter`.
///
/// At most `max_split` splits are performed (`0` means no bound); once the bound
/// is reached the rest of `data` becomes the last part verbatim, further
/// delimiters included. The result always holds at least one part and every part
/// is a zero-copy view into `data`.
///
/// `delimiter` must not be empty. Debug builds assert this; release builds return
/// `data` as the only part.
///
/// ```
/// use bytes::Bytes;
/// use micro_http_parser::codec::split;
///
/// let parts = split(&Bytes::from_static(b"a,a,a"), b",", 1);
/// assert_eq!(parts, vec!["a", "a,a"]);
/// ```
pub fn split(data: &Bytes, delimiter: &[u8], max_split: usize) -> Vec<Bytes> {
    debug_assert!(!delimiter.is_empty(), "split delimiter must not be empty");
    if delimiter.is_empty() {
        return vec![data.clone()];
    }

    let finder = memmem::Finder::new(delimiter);
    let mut parts = Vec::new();
    let mut start = 0;

    while max_split == 0 || parts.len() < max_split {
        let Some(offset) = finder.find(&data[start..]) else {
            break;
        };
        let end = start + offset;
        parts.push(data.slice(start..end));
        start = end + delimiter.len();
    }

    parts.push(data.slice(start..));
    parts
}
