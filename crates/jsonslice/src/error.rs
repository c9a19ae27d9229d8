use thiserror::Error;

use crate::kind::ValueKind;

/// Errors produced by the accessor and mutation operations.
///
/// `KeyPathNotFound` is a well-formed absence, not a defect: it is how a
/// reader reports that the document simply has no value at the requested
/// path. The `Malformed*` variants report structural or literal damage at
/// the point of detection, and `UnexpectedKind` is returned by the typed
/// getters when the addressed value has the wrong shape.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Error {
    /// The key-path does not address a value in the document.
    #[error("key path not found")]
    KeyPathNotFound,
    /// The document ended where a value or delimiter was required.
    #[error("malformed JSON document")]
    MalformedJson,
    /// A string literal has no closing quote.
    #[error("malformed string: missing closing quote")]
    MalformedString,
    /// An array has no matching closing bracket or a broken delimiter.
    #[error("malformed array: missing closing bracket")]
    MalformedArray,
    /// An object has no matching closing brace or a broken delimiter.
    #[error("malformed object: missing closing brace")]
    MalformedObject,
    /// A scalar literal does not parse as its expected shape.
    #[error("malformed value")]
    MalformedValue,
    /// A string escape sequence is incomplete or invalid.
    #[error("malformed string escape sequence")]
    MalformedStringEscape,
    /// The first byte of a value matches none of the six JSON shapes.
    #[error("unknown value type")]
    UnknownValueType,
    /// A typed getter addressed a value of a different kind.
    #[error("expected {expected} value, found {actual}")]
    UnexpectedKind {
        /// The kind the getter requires.
        expected: ValueKind,
        /// The kind actually present at the path.
        actual: ValueKind,
    },
}
