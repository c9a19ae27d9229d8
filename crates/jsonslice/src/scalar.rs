//! Scalar decoders for values extracted from a document.
//!
//! Inputs are the raw bytes a reader hands out: string content with the
//! quotes stripped but escapes intact, and number and boolean literals
//! exactly as they appear in the buffer.

use alloc::borrow::{Cow, ToOwned};
use alloc::string::String;

use crate::error::Error;
use crate::escape::unescape;

/// Decodes string bytes into an owned, unescaped string.
///
/// # Errors
///
/// [`Error::MalformedStringEscape`] for broken escape sequences,
/// [`Error::MalformedString`] when the decoded bytes are not UTF-8.
pub fn parse_string(bytes: &[u8]) -> Result<String, Error> {
    match unescape(bytes)? {
        Cow::Borrowed(raw) => core::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| Error::MalformedString),
        Cow::Owned(raw) => String::from_utf8(raw).map_err(|_| Error::MalformedString),
    }
}

// Restricting the alphabet keeps `str::parse`'s `inf`/`NaN` extensions
// unreachable.
fn number_str(bytes: &[u8]) -> Result<&str, Error> {
    if bytes.is_empty()
        || !bytes
            .iter()
            .all(|b| b.is_ascii_digit() || matches!(b, b'+' | b'-' | b'.' | b'e' | b'E'))
    {
        return Err(Error::MalformedValue);
    }
    core::str::from_utf8(bytes).map_err(|_| Error::MalformedValue)
}

/// Parses an integer literal. Fractions, exponents and overflow are
/// errors.
///
/// # Errors
///
/// [`Error::MalformedValue`] when the bytes are not an integer in `i64`
/// range.
pub fn parse_int(bytes: &[u8]) -> Result<i64, Error> {
    number_str(bytes)?.parse().map_err(|_| Error::MalformedValue)
}

/// Parses a number literal into a float.
///
/// # Errors
///
/// [`Error::MalformedValue`] when the bytes are not a JSON number.
pub fn parse_float(bytes: &[u8]) -> Result<f64, Error> {
    number_str(bytes)?.parse().map_err(|_| Error::MalformedValue)
}

/// Parses the `true` or `false` literal.
///
/// # Errors
///
/// [`Error::MalformedValue`] for any other input.
pub fn parse_boolean(bytes: &[u8]) -> Result<bool, Error> {
    match bytes {
        b"true" => Ok(true),
        b"false" => Ok(false),
        _ => Err(Error::MalformedValue),
    }
}
