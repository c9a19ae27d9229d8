//! Value classification and the public read API.

use alloc::borrow::ToOwned;
use alloc::string::String;

use memchr::memchr;

use crate::error::Error;
use crate::kind::{ValueKind, ValueRef};
use crate::scalar::{parse_boolean, parse_float, parse_int, parse_string};
use crate::scanner::{block_end, next_token, string_end, token_end};
use crate::search::search_keys;

/// Classifies the value whose first byte sits at `data[offset]`.
///
/// The returned slice is the verbatim literal; for strings it includes
/// the surrounding quotes ([`get`] strips them).
pub(crate) fn classify(data: &[u8], offset: usize) -> Result<ValueRef<'_>, Error> {
    match data[offset] {
        b'"' => {
            let (inner, _) = string_end(&data[offset + 1..]);
            let inner = inner.ok_or(Error::MalformedString)?;
            let end = offset + 1 + inner;
            Ok(ValueRef {
                raw: &data[offset..end],
                kind: ValueKind::String,
                end,
            })
        }
        b'[' => {
            let len = block_end(&data[offset..], b'[', b']').ok_or(Error::MalformedArray)?;
            Ok(ValueRef {
                raw: &data[offset..offset + len],
                kind: ValueKind::Array,
                end: offset + len,
            })
        }
        b'{' => {
            let len = block_end(&data[offset..], b'{', b'}').ok_or(Error::MalformedObject)?;
            Ok(ValueRef {
                raw: &data[offset..offset + len],
                kind: ValueKind::Object,
                end: offset + len,
            })
        }
        b't' | b'f' => {
            let end = offset + token_end(&data[offset..]);
            let raw = &data[offset..end];
            if raw == b"true" || raw == b"false" {
                Ok(ValueRef {
                    raw,
                    kind: ValueKind::Boolean,
                    end,
                })
            } else {
                Err(Error::UnknownValueType)
            }
        }
        // `u` tolerated alongside `n`, a long-standing leniency
        b'n' | b'u' => {
            let end = offset + token_end(&data[offset..]);
            let raw = &data[offset..end];
            if raw == b"null" {
                Ok(ValueRef {
                    raw,
                    kind: ValueKind::Null,
                    end,
                })
            } else {
                Err(Error::UnknownValueType)
            }
        }
        b'-' | b'0'..=b'9' => {
            let end = offset + token_end(&data[offset..]);
            Ok(ValueRef {
                raw: &data[offset..end],
                kind: ValueKind::Number,
                end,
            })
        }
        _ => Err(Error::UnknownValueType),
    }
}

/// A located value plus the offset of its first byte, for callers that
/// splice the buffer around it.
pub(crate) struct Located<'a> {
    pub value: ValueRef<'a>,
    pub start: usize,
}

/// Resolves `keys` and classifies the addressed value. String values are
/// returned with the quotes stripped; `start` still points at the opening
/// quote.
pub(crate) fn internal_get<'a>(data: &'a [u8], keys: &[&str]) -> Result<Located<'a>, Error> {
    let mut offset = 0;
    if !keys.is_empty() {
        offset = search_keys(data, keys).ok_or(Error::KeyPathNotFound)?;
    }
    offset += next_token(&data[offset..]).ok_or(Error::MalformedJson)?;
    let mut value = classify(data, offset)?;
    if value.kind == ValueKind::String {
        value.raw = &value.raw[1..value.raw.len() - 1];
    }
    Ok(Located {
        value,
        start: offset,
    })
}

/// Returns the value addressed by `keys`.
///
/// An empty key-path addresses the document root. For strings the
/// returned slice excludes the quotes and leaves escapes intact; for all
/// other kinds it is the verbatim literal.
///
/// # Errors
///
/// [`Error::KeyPathNotFound`] when the path addresses nothing, the
/// `Malformed*` codes when the scan runs into structural damage.
///
/// # Examples
///
/// ```rust
/// use jsonslice::{get, ValueKind};
///
/// let doc = br#"{"a":{"b":{"c":42}}}"#;
/// let v = get(doc, &["a", "b", "c"]).unwrap();
/// assert_eq!((v.raw, v.kind), (&b"42"[..], ValueKind::Number));
/// ```
pub fn get<'a>(data: &'a [u8], keys: &[&str]) -> Result<ValueRef<'a>, Error> {
    let mut value = internal_get(data, keys)?.value;
    if value.kind == ValueKind::String {
        // keep `raw == data[end - raw.len()..end]`: the quotes sit just
        // outside that window
        value.end -= 1;
    }
    Ok(value)
}

fn expect<'a>(data: &'a [u8], keys: &[&str], expected: ValueKind) -> Result<&'a [u8], Error> {
    let value = get(data, keys)?;
    if value.kind != expected {
        return Err(Error::UnexpectedKind {
            expected,
            actual: value.kind,
        });
    }
    Ok(value.raw)
}

/// Returns the unescaped string at `keys`.
///
/// # Errors
///
/// [`Error::UnexpectedKind`] when the value is not a string, plus the
/// resolution and decoding errors of [`get`] and [`parse_string`].
pub fn get_string(data: &[u8], keys: &[&str]) -> Result<String, Error> {
    let raw = expect(data, keys, ValueKind::String)?;
    // No backslash means nothing to rewrite.
    if memchr(b'\\', raw).is_none() {
        return core::str::from_utf8(raw)
            .map(str::to_owned)
            .map_err(|_| Error::MalformedString);
    }
    parse_string(raw)
}

/// Returns the still-escaped string bytes at `keys`, borrowed from the
/// document. No allocation, no unescaping.
///
/// # Errors
///
/// [`Error::UnexpectedKind`] when the value is not a string,
/// [`Error::MalformedString`] when its bytes are not UTF-8.
pub fn get_raw_string<'a>(data: &'a [u8], keys: &[&str]) -> Result<&'a str, Error> {
    let raw = expect(data, keys, ValueKind::String)?;
    core::str::from_utf8(raw).map_err(|_| Error::MalformedString)
}

/// Returns the integer at `keys`.
///
/// # Errors
///
/// [`Error::UnexpectedKind`] when the value is not a number,
/// [`Error::MalformedValue`] when it is not an integer in `i64` range.
pub fn get_int(data: &[u8], keys: &[&str]) -> Result<i64, Error> {
    parse_int(expect(data, keys, ValueKind::Number)?)
}

/// Returns the float at `keys`.
///
/// # Errors
///
/// [`Error::UnexpectedKind`] when the value is not a number.
pub fn get_float(data: &[u8], keys: &[&str]) -> Result<f64, Error> {
    parse_float(expect(data, keys, ValueKind::Number)?)
}

/// Returns the boolean at `keys`.
///
/// # Errors
///
/// [`Error::UnexpectedKind`] when the value is not a boolean.
pub fn get_boolean(data: &[u8], keys: &[&str]) -> Result<bool, Error> {
    parse_boolean(expect(data, keys, ValueKind::Boolean)?)
}
