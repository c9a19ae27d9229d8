//! Byte-level tokenization primitives shared by every accessor.
//!
//! These helpers operate on raw byte offsets and report absence as
//! `None` rather than a sentinel index. They are deliberately permissive:
//! whitespace handling accepts anything the four JSON whitespace bytes
//! allow, and no validation happens beyond what is needed to delimit a
//! token.

use memchr::memchr2;

/// JSON insignificant whitespace.
#[inline]
pub(crate) fn is_space(b: u8) -> bool {
    matches!(b, b' ' | b'\n' | b'\r' | b'\t')
}

/// Offset of the first non-whitespace byte, if any.
#[inline]
pub(crate) fn next_token(data: &[u8]) -> Option<usize> {
    data.iter().position(|&b| !is_space(b))
}

/// Offset of the last non-whitespace byte, if any.
#[inline]
pub(crate) fn last_token(data: &[u8]) -> Option<usize> {
    data.iter().rposition(|&b| !is_space(b))
}

/// Offset of the first byte that terminates an unquoted token:
/// whitespace, `,`, `}` or `]`. Equals `data.len()` when the token runs
/// to the end of the buffer.
pub(crate) fn token_end(data: &[u8]) -> usize {
    data.iter()
        .position(|&b| is_space(b) || matches!(b, b',' | b'}' | b']'))
        .unwrap_or(data.len())
}

/// Scans backward for `target`, giving up at the first `[` or `{`.
///
/// Used by delete to locate the comma preceding a removed member without
/// escaping the enclosing container.
pub(crate) fn find_token_start(data: &[u8], target: u8) -> Option<usize> {
    for (i, &b) in data.iter().enumerate().rev() {
        if b == target {
            return Some(i);
        }
        if matches!(b, b'[' | b'{') {
            return None;
        }
    }
    None
}

/// Finds the end of a quoted string.
///
/// `data` starts immediately after the opening quote. On success the
/// offset points one past the closing quote. The second field is an
/// escape hint: it is set whenever a backslash was scanned, not only when
/// one escaped the terminator, telling callers the content may need
/// unescaping before comparison.
///
/// A quote seen after any backslash only terminates the string when the
/// run of consecutive backslashes immediately before it has even length.
pub(crate) fn string_end(data: &[u8]) -> (Option<usize>, bool) {
    let mut escaped = false;
    let mut i = 0;
    while let Some(adv) = memchr2(b'"', b'\\', &data[i..]) {
        let at = i + adv;
        if data[at] == b'\\' {
            escaped = true;
            i = at + 1;
            continue;
        }
        if !escaped {
            return (Some(at + 1), false);
        }
        let run = data[..at].iter().rev().take_while(|&&b| b == b'\\').count();
        if run % 2 == 0 {
            return (Some(at + 1), true);
        }
        i = at + 1;
    }
    (None, escaped)
}

/// Offset one past the close bracket matching `open` at `data[0]`,
/// treating quoted strings as opaque. `None` when the brackets never
/// balance.
pub(crate) fn block_end(data: &[u8], open: u8, close: u8) -> Option<usize> {
    let mut level = 0usize;
    let mut i = 0;
    while i < data.len() {
        let b = data[i];
        if b == b'"' {
            let (end, _) = string_end(&data[i + 1..]);
            i += end?;
        } else if b == open {
            level += 1;
        } else if b == close {
            level = level.checked_sub(1)?;
            if level == 0 {
                return Some(i + 1);
            }
        }
        i += 1;
    }
    None
}
