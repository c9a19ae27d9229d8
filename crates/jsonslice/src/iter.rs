//! Callback-driven array and object traversal.

use crate::classify::internal_get;
use crate::error::Error;
use crate::escape::{Scratch, unescape_or_borrow};
use crate::kind::ValueKind;
use crate::scanner::{next_token, string_end};
use crate::search::search_keys;

/// Walks the elements of the array at `keys` (or of `data` itself when
/// `keys` is empty), invoking `cb` once per element.
///
/// The callback receives the element's value bytes (quotes stripped for
/// strings, escapes intact), its kind, and the offset of the first byte
/// of the element's raw form in `data`; for strings that is the opening
/// quote. Returns the offset of the closing bracket.
///
/// # Errors
///
/// [`Error::KeyPathNotFound`] when `keys` resolves to nothing,
/// [`Error::MalformedArray`] when the value is not an array or its
/// delimiters are broken, plus any classification error for an element.
///
/// # Examples
///
/// ```rust
/// use jsonslice::array_each;
///
/// let doc = br#"{"ids":[1,2,3]}"#;
/// let mut sum = 0i64;
/// array_each(doc, |value, _, _| {
///     sum += jsonslice::parse_int(value).unwrap();
/// }, &["ids"]).unwrap();
/// assert_eq!(sum, 6);
/// ```
pub fn array_each<'a, F>(data: &'a [u8], mut cb: F, keys: &[&str]) -> Result<usize, Error>
where
    F: FnMut(&'a [u8], ValueKind, usize),
{
    let mut offset = if keys.is_empty() {
        next_token(data).ok_or(Error::MalformedJson)?
    } else {
        let at = search_keys(data, keys).ok_or(Error::KeyPathNotFound)?;
        at + next_token(&data[at..]).ok_or(Error::MalformedJson)?
    };
    if data[offset] != b'[' {
        return Err(Error::MalformedArray);
    }
    offset += 1;

    offset += next_token(&data[offset..]).ok_or(Error::MalformedArray)?;
    if data[offset] == b']' {
        return Ok(offset);
    }

    loop {
        let element = internal_get(&data[offset..], &[])?;
        cb(element.value.raw, element.value.kind, offset + element.start);
        offset += element.value.end;

        offset += next_token(&data[offset..]).ok_or(Error::MalformedArray)?;
        match data[offset] {
            b']' => return Ok(offset),
            b',' => offset += 1,
            _ => return Err(Error::MalformedArray),
        }
    }
}

/// Walks the members of the object at `keys` (or of `data` itself when
/// `keys` is empty), invoking `cb` once per member.
///
/// The callback receives the member key (unescaped when needed), the
/// value bytes as [`crate::get`] would return them, the value kind, and
/// the offset just past the value in `data`. A callback error stops the
/// iteration and is returned verbatim.
///
/// # Errors
///
/// [`Error::KeyPathNotFound`] when `keys` resolves to nothing,
/// [`Error::MalformedObject`] / [`Error::MalformedJson`] for structural
/// damage, or whatever the callback returns.
///
/// # Examples
///
/// ```rust
/// use jsonslice::{object_each, Error};
///
/// let doc = br#"{"a":1,"b":2}"#;
/// let mut names = Vec::new();
/// object_each(doc, |key, _, _, _| -> Result<(), Error> {
///     names.push(String::from_utf8(key.to_vec()).unwrap());
///     Ok(())
/// }, &[]).unwrap();
/// assert_eq!(names, ["a", "b"]);
/// ```
pub fn object_each<'a, E, F>(data: &'a [u8], mut cb: F, keys: &[&str]) -> Result<(), E>
where
    E: From<Error>,
    F: FnMut(&[u8], &'a [u8], ValueKind, usize) -> Result<(), E>,
{
    let mut offset = 0;
    if !keys.is_empty() {
        offset = search_keys(data, keys).ok_or(Error::KeyPathNotFound)?;
    }
    offset += next_token(&data[offset..]).ok_or(Error::MalformedObject)?;
    if data[offset] != b'{' {
        return Err(Error::MalformedObject.into());
    }
    offset += 1;

    offset += next_token(&data[offset..]).ok_or(Error::MalformedJson)?;
    if data[offset] == b'}' {
        return Ok(());
    }

    let mut scratch = Scratch::new();
    while offset < data.len() {
        match data[offset] {
            b'"' => offset += 1,
            b'}' => return Ok(()),
            _ => return Err(Error::MalformedObject.into()),
        }

        let (str_end, escaped) = string_end(&data[offset..]);
        let str_end = str_end.ok_or(Error::MalformedString)?;
        let key = &data[offset..offset + str_end - 1];
        offset += str_end;
        let key: &[u8] = if escaped {
            unescape_or_borrow(key, &mut scratch)?
        } else {
            key
        };

        offset += next_token(&data[offset..]).ok_or(Error::MalformedJson)?;
        if data[offset] != b':' {
            return Err(Error::MalformedJson.into());
        }
        offset += 1;

        let member = internal_get(&data[offset..], &[])?;
        cb(
            key,
            member.value.raw,
            member.value.kind,
            offset + member.value.end,
        )?;
        offset += member.value.end;

        offset += next_token(&data[offset..]).ok_or(Error::MalformedJson)?;
        match data[offset] {
            b'}' => return Ok(()),
            b',' => offset += 1,
            _ => return Err(Error::MalformedObject.into()),
        }

        offset += next_token(&data[offset..]).ok_or(Error::MalformedJson)?;
    }
    Err(Error::MalformedObject.into())
}
