//! Key-path segment interpretation.
//!
//! A path segment is an object key unless it has the exact shape of an
//! array-index segment: `[N]` with a non-negative integer, `[+]`
//! (append) or `[-]` (prepend). Anything else is matched as an object
//! key, including bracketed text that does not parse, such as `[x]`.

/// How an array-index segment addresses an array.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum ArrayIndex {
    /// A 0-based element index.
    At(usize),
    /// Append past the last element; only meaningful to `set`.
    Append,
    /// Prepend before the first element; only meaningful to `set`.
    Prepend,
}

/// Parses `segment` as an array-index segment, or `None` when it is an
/// object key.
pub(crate) fn index_segment(segment: &str) -> Option<ArrayIndex> {
    let inner = segment.strip_prefix('[')?.strip_suffix(']')?;
    match inner {
        "+" => Some(ArrayIndex::Append),
        "-" => Some(ArrayIndex::Prepend),
        _ => inner.parse().ok().map(ArrayIndex::At),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recognizes_index_segments() {
        assert_eq!(index_segment("[0]"), Some(ArrayIndex::At(0)));
        assert_eq!(index_segment("[17]"), Some(ArrayIndex::At(17)));
        assert_eq!(index_segment("[+]"), Some(ArrayIndex::Append));
        assert_eq!(index_segment("[-]"), Some(ArrayIndex::Prepend));
    }

    #[test]
    fn everything_else_is_a_key() {
        for seg in ["a", "", "[", "]", "[]", "[x]", "[-1]", "[1", "1]", "[1.5]"] {
            assert_eq!(index_segment(seg), None, "segment {seg:?}");
        }
    }
}
