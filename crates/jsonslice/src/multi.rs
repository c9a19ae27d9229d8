//! Multi-path resolution in a single document scan.

use alloc::vec;
use alloc::vec::Vec;

use crate::classify::internal_get;
use crate::error::Error;
use crate::escape::{Scratch, unescape_or_borrow};
use crate::iter::array_each;
use crate::kind::ValueKind;
use crate::path::{ArrayIndex, index_segment};
use crate::scanner::{block_end, next_token, string_end};

/// Returns true when `path` and the currently descended key sequence
/// agree on their common prefix.
fn same_tree(path: &[&str], descended: &[Vec<u8>]) -> bool {
    path.iter()
        .zip(descended)
        .all(|(segment, key)| segment.as_bytes() == key.as_slice())
}

/// Resolves many paths in one pass, invoking `cb` with the path index and
/// the located value. Each path's callback runs at most once, in document
/// order; a path that addresses nothing is silently left unsatisfied.
///
/// Returns the offset where the scan stopped: the position of the last
/// match when every path was satisfied, the end of the document
/// otherwise.
///
/// # Errors
///
/// The `Malformed*` codes when the scan runs into structural damage.
///
/// # Examples
///
/// ```rust
/// use jsonslice::each_key;
///
/// let doc = br#"{"a":1,"b":"x"}"#;
/// let mut seen = Vec::new();
/// each_key(doc, |path, value, _| {
///     seen.push((path, value.to_vec()));
/// }, &[&["a"], &["b"]]).unwrap();
/// assert_eq!(seen, [(0, b"1".to_vec()), (1, b"x".to_vec())]);
/// ```
pub fn each_key<'a, F>(data: &'a [u8], mut cb: F, paths: &[&[&str]]) -> Result<usize, Error>
where
    F: FnMut(usize, &'a [u8], ValueKind),
{
    if paths.is_empty() {
        return Ok(0);
    }

    let max_path = paths.iter().map(|p| p.len()).max().unwrap_or(0);
    let mut satisfied = vec![false; paths.len()];
    let mut satisfied_count = 0usize;
    let mut descended: Vec<Vec<u8>> = vec![Vec::new(); max_path];

    let mut level = 0usize;
    let mut scratch = Scratch::new();
    let mut i = 0;

    while i < data.len() {
        match data[i] {
            b'"' => {
                i += 1;
                let key_begin = i;
                let (str_end, escaped) = string_end(&data[i..]);
                i += str_end.ok_or(Error::MalformedString)?;
                let key_end = i - 1;

                i += next_token(&data[i..]).ok_or(Error::MalformedJson)?;

                if data[i] != b':' {
                    // a string value, not a key: re-examine the delimiter
                    i -= 1;
                } else if level >= 1 && level <= max_path {
                    let key = &data[key_begin..key_end];
                    let key = if escaped {
                        unescape_or_borrow(key, &mut scratch)?
                    } else {
                        key
                    };
                    descended[level - 1].clear();
                    descended[level - 1].extend_from_slice(key);

                    for (pi, path) in paths.iter().enumerate() {
                        if satisfied[pi]
                            || path.len() != level
                            || path[level - 1].as_bytes() != descended[level - 1].as_slice()
                            || !same_tree(path, &descended[..level])
                        {
                            continue;
                        }

                        satisfied[pi] = true;
                        satisfied_count += 1;

                        let value = internal_get(&data[i + 1..], &[])?.value;
                        cb(pi, value.raw, value.kind);

                        if satisfied_count == paths.len() {
                            return Ok(i);
                        }
                    }
                } else if level == 0 {
                    return Err(Error::MalformedJson);
                }
            }
            b'{' => level += 1,
            b'}' => level = level.checked_sub(1).ok_or(Error::MalformedJson)?,
            b'[' => {
                let interested = paths.iter().enumerate().any(|(pi, path)| {
                    !satisfied[pi]
                        && path.len() > level
                        && index_segment(path[level]).is_some()
                        && same_tree(path, &descended[..level])
                });

                if interested {
                    i = each_array_path(
                        data,
                        i,
                        level,
                        paths,
                        &descended,
                        &mut satisfied,
                        &mut satisfied_count,
                        &mut cb,
                    )?;
                    if satisfied_count == paths.len() {
                        return Ok(i);
                    }
                } else {
                    // keys are never searched inside arrays
                    i += block_end(&data[i..], b'[', b']').ok_or(Error::MalformedArray)? - 1;
                }
            }
            _ => {}
        }
        i += 1;
    }

    Ok(data.len())
}

/// Walks the array at `data[at]` once and satisfies every pending path
/// that addresses its elements by index. Returns the offset of the
/// array's closing bracket.
#[allow(clippy::too_many_arguments)]
fn each_array_path<'a, F>(
    data: &'a [u8],
    at: usize,
    level: usize,
    paths: &[&[&str]],
    descended: &[Vec<u8>],
    satisfied: &mut [bool],
    satisfied_count: &mut usize,
    cb: &mut F,
) -> Result<usize, Error>
where
    F: FnMut(usize, &'a [u8], ValueKind),
{
    let mut index = 0usize;
    let mut deferred: Option<Error> = None;

    let close = array_each(
        &data[at..],
        |value, kind, offset| {
            for (pi, path) in paths.iter().enumerate() {
                if satisfied[pi] || path.len() <= level || !same_tree(path, &descended[..level]) {
                    continue;
                }
                let Some(ArrayIndex::At(want)) = index_segment(path[level]) else {
                    continue;
                };
                if want != index {
                    continue;
                }

                let raw_len = if kind == ValueKind::String {
                    value.len() + 2
                } else {
                    value.len()
                };
                let element = &data[at + offset..at + offset + raw_len];

                if path.len() == level + 1 {
                    satisfied[pi] = true;
                    *satisfied_count += 1;
                    cb(pi, value, kind);
                } else {
                    match internal_get(element, &path[level + 1..]) {
                        Ok(located) => {
                            satisfied[pi] = true;
                            *satisfied_count += 1;
                            cb(pi, located.value.raw, located.value.kind);
                        }
                        Err(Error::KeyPathNotFound) => {}
                        Err(err) => {
                            deferred.get_or_insert(err);
                        }
                    }
                }
            }
            index += 1;
        },
        &[],
    )?;

    match deferred {
        Some(err) => Err(err),
        None => Ok(at + close),
    }
}
