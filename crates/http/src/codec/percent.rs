use std::borrow::Cow;

use crate::protocol::ParseError;

/// Percent-decodes `input` into a UTF-8 string.
///
/// Borrows when there is nothing to decode. `+` is left as is.
///
/// # Errors
///
/// Returns [`ParseError::InvalidEncoding`] if a `%` is not followed by two hex
/// digits or if the decoded bytes are not valid UTF-8.
pub fn percent_decode(input: &[u8]) -> Result<Cow<'_, str>, ParseError> {
    if !input.contains(&b'%') {
        return std::str::from_utf8(input).map(Cow::Borrowed).map_err(ParseError::invalid_encoding);
    }

    let mut result = Vec::with_capacity(input.len());
    let mut i = 0;
    while i < input.len() {
        match input[i] {
            b'%' => {
                let escape = input.get(i + 1..i + 3).unwrap_or(&input[i + 1..]);
                match escape {
                    [hi, lo] => match (hex_digit(*hi), hex_digit(*lo)) {
                        (Some(hi), Some(lo)) => result.push((hi << 4) | lo),
                        _ => {
                            return Err(ParseError::invalid_encoding(format!(
                                "invalid escape %{}",
                                String::from_utf8_lossy(escape)
                            )));
                        }
                    },
                    _ => return Err(ParseError::invalid_encoding("truncated escape at end of input")),
                }
                i += 3;
            }
            b => {
                result.push(b);
                i += 1;
            }
        }
    }

    String::from_utf8(result).map(Cow::Owned).map_err(ParseError::invalid_encoding)
}

fn hex_digit(b: u8) -> Option<u8> {
    match b {
        b'0'..=b'9' => Some(b - b'0'),
        b'a'..=b'f' => Some(b - b'a' + 10),
        b'A'..=b'F' => Some(b - b'A' + 10),
        _ => None,
    }
}
