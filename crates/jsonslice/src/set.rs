//! In-place value installation without reserialization.

use alloc::vec::Vec;

use crate::classify::{Located, internal_get};
use crate::error::Error;
use crate::iter::array_each;
use crate::kind::ValueKind;
use crate::path::{ArrayIndex, index_segment};
use crate::scanner::{last_token, next_token};

/// Splices `parts` over `data[start..end]`.
fn splice(data: &[u8], start: usize, end: usize, parts: &[&[u8]]) -> Vec<u8> {
    let inserted: usize = parts.iter().map(|part| part.len()).sum();
    let mut out = Vec::with_capacity(data.len() - (end - start) + inserted);
    out.extend_from_slice(&data[..start]);
    for part in parts {
        out.extend_from_slice(part);
    }
    out.extend_from_slice(&data[end..]);
    out
}

/// Builds the JSON text that materializes `keys` around `set_value`:
/// `{"key":` for object segments, `[` plus `null,` padding for index
/// segments, closed in reverse order. With no keys this is `set_value`
/// itself.
fn build_nested(keys: &[&str], set_value: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(set_value.len() + keys.len() * 8);
    for segment in keys {
        match index_segment(segment) {
            Some(ArrayIndex::At(n)) => {
                out.push(b'[');
                for _ in 0..n {
                    out.extend_from_slice(b"null,");
                }
            }
            // append/prepend below the deepest prefix means a fresh
            // single-element array
            Some(_) => out.push(b'['),
            None => {
                out.push(b'{');
                out.push(b'"');
                out.extend_from_slice(segment.as_bytes());
                out.extend_from_slice(b"\":");
            }
        }
    }
    out.extend_from_slice(set_value);
    for segment in keys.iter().rev() {
        out.push(if index_segment(segment).is_some() {
            b']'
        } else {
            b'}'
        });
    }
    out
}

/// Builds the member text `"key":<nested value>` for insertion inside an
/// existing object.
fn build_member(keys: &[&str], set_value: &[u8]) -> Vec<u8> {
    let nested = build_nested(&keys[1..], set_value);
    let mut out = Vec::with_capacity(keys[0].len() + 3 + nested.len());
    out.push(b'"');
    out.extend_from_slice(keys[0].as_bytes());
    out.extend_from_slice(b"\":");
    out.extend_from_slice(&nested);
    out
}

/// True when the container literal `raw` (starting `{` or `[`) holds no
/// members.
fn container_is_empty(raw: &[u8]) -> bool {
    next_token(&raw[1..]).is_none_or(|skip| 1 + skip == raw.len() - 1)
}

/// Returns a new document with `set_value` installed at `keys`, creating
/// intermediate containers as needed. `set_value` must be valid JSON
/// text; it is spliced in verbatim and the surrounding formatting is
/// preserved. With an empty key-path the new document is `set_value`
/// itself.
///
/// # Errors
///
/// [`Error::KeyPathNotFound`] when the document root is empty or not an
/// object while the path requires creating a top-level member, plus any
/// `Malformed*` error met while resolving.
///
/// # Examples
///
/// ```rust
/// use jsonslice::set;
///
/// let doc = set(b"{}", br#""v""#, &["a", "b"]).unwrap();
/// assert_eq!(doc, br#"{"a":{"b":"v"}}"#);
/// ```
pub fn set(data: &[u8], set_value: &[u8], keys: &[&str]) -> Result<Vec<u8>, Error> {
    if keys.is_empty() {
        return Ok(set_value.to_vec());
    }

    match internal_get(data, keys) {
        // fast path: replace the existing value with a three-part splice
        Ok(found) => Ok(splice(data, found.start, found.value.end, &[set_value])),
        Err(Error::KeyPathNotFound) => set_create(data, set_value, keys),
        Err(err) => Err(err),
    }
}

/// The create path: anchor at the deepest resolvable prefix and build the
/// missing suffix there.
fn set_create(data: &[u8], set_value: &[u8], keys: &[&str]) -> Result<Vec<u8>, Error> {
    let mut depth = 0usize;
    let mut prefix: Option<Located<'_>> = None;
    for d in 1..keys.len() {
        match internal_get(data, &keys[..d]) {
            Ok(located) => {
                depth = d;
                prefix = Some(located);
            }
            Err(Error::KeyPathNotFound) => break,
            Err(err) => return Err(err),
        }
    }
    let remaining = &keys[depth..];

    let Some(anchor) = prefix else {
        // no prefix resolves: only an object root can grow a new member,
        // and an object member cannot be addressed by array index
        let root = next_token(data).ok_or(Error::KeyPathNotFound)?;
        if data[root] != b'{' || index_segment(remaining[0]).is_some() {
            return Err(Error::KeyPathNotFound);
        }
        let close = last_token(data).ok_or(Error::MalformedJson)?;
        if data[close] != b'}' {
            return Err(Error::MalformedObject);
        }
        let empty = next_token(&data[root + 1..]).map(|skip| root + 1 + skip) == Some(close);
        let member = build_member(remaining, set_value);
        let comma: &[u8] = if empty { b"" } else { b"," };
        return Ok(splice(data, close, close, &[comma, &member]));
    };

    match anchor.value.kind {
        ValueKind::Object if index_segment(remaining[0]).is_none() => {
            // grow the prefix object just before its closing brace
            let close = anchor.value.end - 1;
            let comma: &[u8] = if container_is_empty(anchor.value.raw) {
                b""
            } else {
                b","
            };
            let member = build_member(remaining, set_value);
            Ok(splice(data, close, close, &[comma, &member]))
        }
        ValueKind::Array if index_segment(remaining[0]).is_some() => {
            set_in_array(data, &anchor, remaining, set_value)
        }
        // a scalar, or a container addressed with the wrong segment
        // shape: replace it with a freshly synthesized one
        _ => Ok(splice(
            data,
            anchor.start,
            anchor.value.end,
            &[&build_nested(remaining, set_value)],
        )),
    }
}

/// Installs into the existing array `anchor` according to the index
/// segment leading `remaining`.
fn set_in_array(
    data: &[u8],
    anchor: &Located<'_>,
    remaining: &[&str],
    set_value: &[u8],
) -> Result<Vec<u8>, Error> {
    let Some(index) = index_segment(remaining[0]) else {
        return Err(Error::KeyPathNotFound);
    };
    let element = build_nested(&remaining[1..], set_value);
    let empty = container_is_empty(anchor.value.raw);
    let comma: &[u8] = if empty { b"" } else { b"," };

    match index {
        ArrayIndex::Prepend => {
            let open = anchor.start + 1;
            Ok(splice(data, open, open, &[&element, comma]))
        }
        ArrayIndex::Append => {
            let close = anchor.value.end - 1;
            Ok(splice(data, close, close, &[comma, &element]))
        }
        ArrayIndex::At(n) => {
            let mut count = 0usize;
            array_each(anchor.value.raw, |_, _, _| count += 1, &[])?;
            // n < count would have resolved as an existing element
            let close = anchor.value.end - 1;
            let mut text = Vec::new();
            text.extend_from_slice(comma);
            for _ in count..n {
                text.extend_from_slice(b"null,");
            }
            text.extend_from_slice(&element);
            Ok(splice(data, close, close, &[&text]))
        }
    }
}
