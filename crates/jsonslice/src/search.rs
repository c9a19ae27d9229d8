//! Single-pass key-path resolution.

use crate::escape::{Scratch, unescape_or_borrow};
use crate::iter::array_each;
use crate::kind::ValueKind;
use crate::path::{ArrayIndex, index_segment};
use crate::scanner::{block_end, next_token, string_end};

/// Resolves `keys` against `data` in one scan.
///
/// Returns the offset of the located value region: after one whitespace
/// skip the byte there is the value's first byte. `None` means not found
/// or malformed.
///
/// Two counters drive the scan: `level`, the current object nesting
/// depth, and `key_level`, the number of leading path segments matched so
/// far. A key string only advances `key_level` when it sits exactly at
/// the next needed depth; leaving a matched subtree through `}` backs
/// `key_level` off so a later sibling may match again.
pub(crate) fn search_keys(data: &[u8], keys: &[&str]) -> Option<usize> {
    if keys.is_empty() {
        return Some(0);
    }

    let mut level = 0usize;
    let mut key_level = 0usize;
    let mut last_matched = true;
    let mut scratch = Scratch::new();
    let mut i = 0;

    while i < data.len() {
        match data[i] {
            b'"' => {
                i += 1;
                let key_begin = i;
                let (str_end, key_escaped) = string_end(&data[i..]);
                i += str_end?;
                let key_end = i - 1;

                i += next_token(&data[i..])?;

                if data[i] == b':' {
                    if level < 1 {
                        return None;
                    }
                    let key = &data[key_begin..key_end];
                    let key = if key_escaped {
                        unescape_or_borrow(key, &mut scratch).ok()?
                    } else {
                        key
                    };
                    if level <= keys.len() && key == keys[level - 1].as_bytes() {
                        last_matched = true;
                        if key_level == level - 1 {
                            key_level += 1;
                            if key_level == keys.len() {
                                return Some(i + 1);
                            }
                        }
                    } else {
                        last_matched = false;
                    }
                } else {
                    // a string value, not a key: re-examine the delimiter
                    i -= 1;
                }
            }
            b'{' => {
                if last_matched {
                    level += 1;
                } else {
                    // a sibling subtree the path cannot run through
                    i += block_end(&data[i..], b'{', b'}')? - 1;
                }
            }
            b'}' => {
                level = level.checked_sub(1)?;
                if level == key_level && key_level > 0 {
                    key_level -= 1;
                }
            }
            b'[' => {
                let segment = (key_level == level && level < keys.len())
                    .then(|| index_segment(keys[level]))
                    .flatten();
                match segment {
                    Some(ArrayIndex::At(target)) => {
                        return descend_array(data, i, target, keys, level);
                    }
                    // `[+]` / `[-]` never address an existing element
                    Some(_) => return None,
                    // keys are never searched inside arrays
                    None => i += block_end(&data[i..], b'[', b']')? - 1,
                }
            }
            // a colon outside of key handling means the document is broken
            b':' => return None,
            _ => {}
        }
        i += 1;
    }

    None
}

/// Picks element `target` of the array at `data[at]` and resolves the
/// remaining segments inside it.
fn descend_array(
    data: &[u8],
    at: usize,
    target: usize,
    keys: &[&str],
    level: usize,
) -> Option<usize> {
    let mut found: Option<(usize, usize)> = None;
    let mut index = 0usize;
    array_each(
        &data[at..],
        |value, kind, offset| {
            if index == target {
                let raw_len = if kind == ValueKind::String {
                    value.len() + 2
                } else {
                    value.len()
                };
                found = Some((offset, raw_len));
            }
            index += 1;
        },
        &[],
    )
    .ok()?;

    let (offset, raw_len) = found?;
    let element = &data[at + offset..at + offset + raw_len];
    let sub = search_keys(element, &keys[level + 1..])?;
    Some(at + offset + sub)
}

/// Finds the opening quote of `key` among the top-level members of the
/// object at the start of `data`. Nested containers are skipped whole.
pub(crate) fn find_key_start(data: &[u8], key: &str) -> Option<usize> {
    let mut i = next_token(data)?;
    if matches!(data[i], b'{' | b'[') {
        i += 1;
    }
    let mut scratch = Scratch::new();

    while i < data.len() {
        match data[i] {
            b'"' => {
                i += 1;
                let key_begin = i;
                let (str_end, escaped) = string_end(&data[i..]);
                i += str_end?;
                let key_end = i - 1;

                i += next_token(&data[i..])?;

                if data[i] == b':' {
                    let candidate = &data[key_begin..key_end];
                    let candidate = if escaped {
                        unescape_or_borrow(candidate, &mut scratch).ok()?
                    } else {
                        candidate
                    };
                    if candidate == key.as_bytes() {
                        return Some(key_begin - 1);
                    }
                }
            }
            b'{' => i += block_end(&data[i..], b'{', b'}')? - 1,
            b'[' => i += block_end(&data[i..], b'[', b']')? - 1,
            _ => {}
        }
        i += 1;
    }

    None
}
