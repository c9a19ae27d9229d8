//! Decoding of JSON string escape sequences.
//!
//! Short results stay on the stack: unescaping for key comparison runs
//! through a 64-byte [`Scratch`] buffer and only spills to the heap for
//! longer content.

use alloc::borrow::Cow;

use memchr::memchr;
use smallvec::SmallVec;

use crate::error::Error;

/// Stack scratch used when unescaping short strings for comparison.
pub(crate) type Scratch = SmallVec<[u8; 64]>;

/// Reads four ASCII hex digits into a UTF-16 code unit.
fn hex4(data: &[u8]) -> Result<u16, Error> {
    if data.len() < 4 {
        return Err(Error::MalformedStringEscape);
    }
    let mut unit: u16 = 0;
    for &b in &data[..4] {
        let digit = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => return Err(Error::MalformedStringEscape),
        };
        unit = unit << 4 | u16::from(digit);
    }
    Ok(unit)
}

/// Decodes the escape sequence starting at the backslash in `data[0]`.
/// Returns the denoted character and the number of input bytes consumed.
///
/// `\uXXXX` escapes encoding a UTF-16 high surrogate must be followed
/// immediately by a low surrogate escape; an unpaired surrogate is an
/// error.
fn decode_escape(data: &[u8]) -> Result<(char, usize), Error> {
    let &kind = data.get(1).ok_or(Error::MalformedStringEscape)?;
    match kind {
        b'"' => Ok(('"', 2)),
        b'\\' => Ok(('\\', 2)),
        b'/' => Ok(('/', 2)),
        b'b' => Ok(('\u{0008}', 2)),
        b'f' => Ok(('\u{000C}', 2)),
        b'n' => Ok(('\n', 2)),
        b'r' => Ok(('\r', 2)),
        b't' => Ok(('\t', 2)),
        b'u' => {
            let unit = hex4(data.get(2..).ok_or(Error::MalformedStringEscape)?)?;
            if (0xD800..=0xDBFF).contains(&unit) {
                let rest = data.get(6..).ok_or(Error::MalformedStringEscape)?;
                if rest.len() < 6 || rest[0] != b'\\' || rest[1] != b'u' {
                    return Err(Error::MalformedStringEscape);
                }
                let low = hex4(&rest[2..])?;
                if !(0xDC00..=0xDFFF).contains(&low) {
                    return Err(Error::MalformedStringEscape);
                }
                let cp =
                    0x10000 + ((u32::from(unit) - 0xD800) << 10) + (u32::from(low) - 0xDC00);
                let ch = char::from_u32(cp).ok_or(Error::MalformedStringEscape)?;
                Ok((ch, 12))
            } else if (0xDC00..=0xDFFF).contains(&unit) {
                Err(Error::MalformedStringEscape)
            } else {
                let ch = char::from_u32(u32::from(unit)).ok_or(Error::MalformedStringEscape)?;
                Ok((ch, 6))
            }
        }
        _ => Err(Error::MalformedStringEscape),
    }
}

fn unescape_to(input: &[u8], out: &mut Scratch) -> Result<(), Error> {
    let mut i = 0;
    while i < input.len() {
        let Some(adv) = memchr(b'\\', &input[i..]) else {
            out.extend_from_slice(&input[i..]);
            break;
        };
        let at = i + adv;
        out.extend_from_slice(&input[i..at]);
        let (ch, used) = decode_escape(&input[at..])?;
        let mut utf8 = [0u8; 4];
        out.extend_from_slice(ch.encode_utf8(&mut utf8).as_bytes());
        i = at + used;
    }
    Ok(())
}

/// Replaces escape sequences with the bytes they denote.
///
/// Borrows the input untouched when it contains no backslash.
///
/// # Errors
///
/// [`Error::MalformedStringEscape`] for an incomplete or invalid escape
/// sequence, including unpaired UTF-16 surrogates.
///
/// # Examples
///
/// ```rust
/// let out = jsonslice::unescape(br#"tab\there"#).unwrap();
/// assert_eq!(&out[..], b"tab\there");
/// ```
pub fn unescape(input: &[u8]) -> Result<Cow<'_, [u8]>, Error> {
    if memchr(b'\\', input).is_none() {
        return Ok(Cow::Borrowed(input));
    }
    let mut out = Scratch::new();
    unescape_to(input, &mut out)?;
    Ok(Cow::Owned(out.into_vec()))
}

/// Unescapes into the caller's scratch, or returns the input unchanged
/// when it has no backslash. Used on the key-comparison path so that
/// short keys never touch the heap.
pub(crate) fn unescape_or_borrow<'a>(
    input: &'a [u8],
    scratch: &'a mut Scratch,
) -> Result<&'a [u8], Error> {
    if memchr(b'\\', input).is_none() {
        return Ok(input);
    }
    scratch.clear();
    unescape_to(input, scratch)?;
    Ok(scratch.as_slice())
}
