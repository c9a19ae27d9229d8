//! Splicing members and elements out of a document.

use alloc::vec::Vec;

use crate::classify::internal_get;
use crate::path::index_segment;
use crate::scanner::{find_token_start, next_token};
use crate::search::find_key_start;

/// Returns a new document with the value at `keys` removed, fixing up the
/// surrounding comma. The input is returned unchanged (as a copy) when
/// the path addresses nothing or the document cannot be resolved; an
/// empty key-path deletes the whole document.
///
/// # Examples
///
/// ```rust
/// use jsonslice::delete;
///
/// let doc = br#"{"x":1,"y":2}"#;
/// assert_eq!(delete(doc, &["x"]), br#"{"y":2}"#);
/// assert_eq!(delete(doc, &["z"]), doc);
/// ```
pub fn delete(data: &[u8], keys: &[&str]) -> Vec<u8> {
    if keys.is_empty() {
        return Vec::new();
    }
    delete_span(data, keys).map_or_else(
        || data.to_vec(),
        |(start, end)| {
            let mut out = Vec::with_capacity(data.len() - (end - start));
            out.extend_from_slice(&data[..start]);
            out.extend_from_slice(&data[end..]);
            out
        },
    )
}

/// Computes the byte span to remove: the key and value of an object
/// member, or the element of an array, widened over one adjacent comma.
fn delete_span(data: &[u8], keys: &[&str]) -> Option<(usize, usize)> {
    let last = keys[keys.len() - 1];

    let (mut start, mut end) = if index_segment(last).is_some() {
        // the span is the array element itself
        let located = internal_get(data, keys).ok()?;
        (located.start, located.value.end)
    } else {
        // the span runs from the member's key to the end of its value
        let (parent_start, parent_end) = if keys.len() > 1 {
            let parent = internal_get(data, &keys[..keys.len() - 1]).ok()?;
            (parent.start, parent.value.end)
        } else {
            (0, data.len())
        };
        let parent = &data[parent_start..parent_end];
        let key_start = find_key_start(parent, last)?;
        let child = internal_get(parent, &keys[keys.len() - 1..]).ok()?;
        (parent_start + key_start, parent_start + child.value.end)
    };

    // Comma fix-up. Skip whitespace to the next significant byte; the end
    // of the buffer counts as a closing bracket.
    match next_token(&data[end..]).map(|skip| end + skip) {
        Some(after) if data[after] == b',' => end = after + 1,
        Some(after) if matches!(data[after], b'}' | b']') => {
            if let Some(comma) = find_token_start(&data[..start], b',') {
                start = comma;
            }
        }
        Some(_) => {}
        None => {
            if let Some(comma) = find_token_start(&data[..start], b',') {
                start = comma;
            }
        }
    }

    Some((start, end))
}
