use core::fmt;

use bstr::BStr;

/// The shape of a JSON value located in a document.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueKind {
    /// Nothing exists at the requested path.
    NotExist,
    /// A quoted string.
    String,
    /// An integer or floating point literal.
    Number,
    /// A `{...}` object.
    Object,
    /// A `[...]` array.
    Array,
    /// A `true` or `false` literal.
    Boolean,
    /// The `null` literal.
    Null,
    /// The leading byte matched no JSON shape.
    Unknown,
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ValueKind::NotExist => "non-existent",
            ValueKind::String => "string",
            ValueKind::Number => "number",
            ValueKind::Object => "object",
            ValueKind::Array => "array",
            ValueKind::Boolean => "boolean",
            ValueKind::Null => "null",
            ValueKind::Unknown => "unknown",
        })
    }
}

/// A value located in a document.
///
/// `raw` borrows the value's bytes from the document; for strings the
/// surrounding quotes are excluded and escape sequences are left intact.
/// `end` is the offset of the byte immediately after the value in the
/// document, so `raw` equals `document[end - raw.len()..end]`; for
/// strings that places `end` on the closing quote.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct ValueRef<'a> {
    /// The value's bytes, verbatim from the document.
    pub raw: &'a [u8],
    /// Which of the JSON shapes the value has.
    pub kind: ValueKind,
    /// Offset one past the value's last byte in the document.
    pub end: usize,
}

impl fmt::Debug for ValueRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValueRef")
            .field("raw", &BStr::new(self.raw))
            .field("kind", &self.kind)
            .field("end", &self.end)
            .finish()
    }
}
