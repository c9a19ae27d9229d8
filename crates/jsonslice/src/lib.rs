//! Zero-copy, path-indexed accessors for JSON documents held in byte
//! buffers.
//!
//! No document tree is built. Every operation re-scans the original
//! buffer and returns either a sub-slice borrowing from it or a decoded
//! scalar. A key-path (a sequence of object keys and bracketed array
//! indices such as `"user"`, `"[2]"`) addresses nested values.
//!
//! # Examples
//!
//! ```rust
//! use jsonslice::{get, get_string, ValueKind};
//!
//! let doc = br#"{"user":{"name":"am\u00e9lie","visits":3}}"#;
//!
//! let visits = get(doc, &["user", "visits"]).unwrap();
//! assert_eq!(visits.raw, b"3");
//! assert_eq!(visits.kind, ValueKind::Number);
//!
//! assert_eq!(get_string(doc, &["user", "name"]).unwrap(), "am\u{e9}lie");
//! ```
//!
//! Mutations splice the original buffer instead of reserializing it, so
//! the surrounding formatting is preserved:
//!
//! ```rust
//! use jsonslice::{delete, set};
//!
//! let doc = br#"{"a":[1,2]}"#;
//! let doc = set(doc, b"9", &["a", "[5]"]).unwrap();
//! assert_eq!(doc, br#"{"a":[1,2,null,null,null,9]}"#);
//! let doc = delete(&doc, &["a"]);
//! assert_eq!(doc, b"{}");
//! ```
//!
//! Returned [`ValueRef`]s borrow from the input buffer and stay valid for
//! as long as it does; the borrow checker enforces that no mutation of
//! the buffer invalidates them.

#![no_std]
extern crate alloc;

#[cfg(test)]
extern crate std;

mod classify;
mod delete;
mod error;
mod escape;
mod iter;
mod kind;
mod multi;
mod path;
mod scalar;
mod scanner;
mod search;
mod set;

#[cfg(test)]
mod tests;

pub use classify::{get, get_boolean, get_float, get_int, get_raw_string, get_string};
pub use delete::delete;
pub use error::Error;
pub use escape::unescape;
pub use iter::{array_each, object_each};
pub use kind::{ValueKind, ValueRef};
pub use multi::each_key;
pub use scalar::{parse_boolean, parse_float, parse_int, parse_string};
pub use set::set;
