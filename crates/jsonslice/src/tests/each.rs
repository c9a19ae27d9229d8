use alloc::string::String;
use alloc::vec::Vec;
use alloc::vec;

use crate::{Error, ValueKind, array_each, each_key, get, object_each, parse_string};

#[test]
fn array_each_reports_raw_element_offsets() {
    let doc = br#"[10,"x",{"k":1},[2]]"#;
    let mut seen = Vec::new();
    let close = array_each(
        doc,
        |value, kind, offset| seen.push((value.to_vec(), kind, offset)),
        &[],
    )
    .unwrap();

    assert_eq!(close, doc.len() - 1);
    assert_eq!(seen.len(), 4);
    assert_eq!(seen[0], (b"10".to_vec(), ValueKind::Number, 1));
    // the offset of a string element points at its opening quote
    assert_eq!(seen[1], (b"x".to_vec(), ValueKind::String, 4));
    assert_eq!(seen[2], (br#"{"k":1}"#.to_vec(), ValueKind::Object, 8));
    assert_eq!(seen[3], (b"[2]".to_vec(), ValueKind::Array, 16));
}

#[test]
fn array_each_empty() {
    let mut calls = 0;
    let close = array_each(b" [ ] ", |_, _, _| calls += 1, &[]).unwrap();
    assert_eq!(calls, 0);
    assert_eq!(close, 3);
}

#[test]
fn array_each_resolves_keys_first() {
    let doc = br#"{"nums":[1,2,3],"other":true}"#;
    let mut sum = 0i64;
    array_each(
        doc,
        |value, _, _| sum += crate::parse_int(value).unwrap(),
        &["nums"],
    )
    .unwrap();
    assert_eq!(sum, 6);

    assert_eq!(
        array_each(doc, |_, _, _| {}, &["missing"]),
        Err(Error::KeyPathNotFound)
    );
    assert_eq!(
        array_each(doc, |_, _, _| {}, &["other"]),
        Err(Error::MalformedArray)
    );
}

#[test]
fn array_each_broken_delimiters() {
    assert_eq!(
        array_each(b"[1 2]", |_, _, _| {}, &[]),
        Err(Error::MalformedArray)
    );
    assert_eq!(
        array_each(b"[1,2", |_, _, _| {}, &[]),
        Err(Error::MalformedArray)
    );
}

#[test]
fn object_each_walks_members() {
    let doc = b"{\"a\":\"\\u00e9\",\"b\":[1],\"c\":null}";
    let mut seen = Vec::new();
    object_each(
        doc,
        |key, value, kind, offset| -> Result<(), Error> {
            seen.push((key.to_vec(), value.to_vec(), kind, offset));
            Ok(())
        },
        &[],
    )
    .unwrap();

    assert_eq!(seen.len(), 3);
    // the value is raw: still escaped, quotes stripped
    assert_eq!(seen[0].0, b"a");
    assert_eq!(seen[0].1, b"\\u00e9");
    assert_eq!(seen[0].2, ValueKind::String);
    assert_eq!(parse_string(&seen[0].1).unwrap(), "\u{e9}");
    // the offset points just past the value
    assert_eq!(&doc[..seen[0].3], b"{\"a\":\"\\u00e9\"");
    assert_eq!(seen[1].0, b"b");
    assert_eq!(seen[1].1, b"[1]");
    assert_eq!(seen[2], (b"c".to_vec(), b"null".to_vec(), ValueKind::Null, 30));
}

#[test]
fn object_each_unescapes_keys() {
    let doc = br#"{"ke\ny":1}"#;
    let mut keys = Vec::new();
    object_each(
        doc,
        |key, _, _, _| -> Result<(), Error> {
            keys.push(key.to_vec());
            Ok(())
        },
        &[],
    )
    .unwrap();
    assert_eq!(keys, [b"ke\ny".to_vec()]);
}

#[test]
fn object_each_empty_and_nested() {
    let mut calls = 0;
    object_each(b" { } ", |_, _, _, _| -> Result<(), Error> {
        calls += 1;
        Ok(())
    }, &[])
    .unwrap();
    assert_eq!(calls, 0);

    let doc = br#"{"outer":{"x":1,"y":2}}"#;
    let mut keys = Vec::new();
    object_each(
        doc,
        |key, _, _, _| -> Result<(), Error> {
            keys.push(String::from_utf8(key.to_vec()).unwrap());
            Ok(())
        },
        &["outer"],
    )
    .unwrap();
    assert_eq!(keys, ["x", "y"]);
}

#[derive(Debug, PartialEq)]
enum WalkError {
    Lib(Error),
    Enough,
}

impl From<Error> for WalkError {
    fn from(err: Error) -> Self {
        WalkError::Lib(err)
    }
}

#[test]
fn object_each_forwards_callback_errors() {
    let doc = br#"{"a":1,"b":2,"c":3}"#;
    let mut calls = 0;
    let result = object_each(
        doc,
        |_, _, _, _| -> Result<(), WalkError> {
            calls += 1;
            if calls == 2 { Err(WalkError::Enough) } else { Ok(()) }
        },
        &[],
    );
    assert_eq!(result, Err(WalkError::Enough));
    assert_eq!(calls, 2);
}

#[test]
fn object_each_rejects_non_objects() {
    assert_eq!(
        object_each(b"[1]", |_, _, _, _| -> Result<(), Error> { Ok(()) }, &[]),
        Err(Error::MalformedObject)
    );
    assert_eq!(
        object_each(br#"{"a" 1}"#, |_, _, _, _| -> Result<(), Error> { Ok(()) }, &[]),
        Err(Error::MalformedJson)
    );
}

#[test]
fn each_key_flat() {
    let doc = br#"{"a":1,"b":"x"}"#;
    let mut seen = Vec::new();
    each_key(
        doc,
        |path, value, kind| seen.push((path, value.to_vec(), kind)),
        &[&["a"], &["b"]],
    )
    .unwrap();
    assert_eq!(
        seen,
        [
            (0, b"1".to_vec(), ValueKind::Number),
            (1, b"x".to_vec(), ValueKind::String),
        ]
    );
}

#[test]
fn each_key_mixed_depths_and_arrays() {
    let doc = br#"{"user":{"name":"ada","tags":["x","y"]},"n":3}"#;
    let paths: &[&[&str]] = &[
        &["user", "name"],
        &["user", "tags", "[1]"],
        &["n"],
        &["user", "missing"],
    ];
    let mut seen = Vec::new();
    each_key(
        doc,
        |path, value, kind| seen.push((path, value.to_vec(), kind)),
        paths,
    )
    .unwrap();

    // document order, unmatched path silent
    assert_eq!(
        seen,
        [
            (0, b"ada".to_vec(), ValueKind::String),
            (1, b"y".to_vec(), ValueKind::String),
            (2, b"3".to_vec(), ValueKind::Number),
        ]
    );
}

#[test]
fn each_key_invokes_each_path_at_most_once() {
    // the same leaf is addressed twice through distinct paths
    let doc = br#"{"a":{"b":1},"c":2}"#;
    let paths: &[&[&str]] = &[&["a", "b"], &["a", "b"], &["c"]];
    let mut counts = vec![0usize; paths.len()];
    each_key(doc, |path, _, _| counts[path] += 1, paths).unwrap();
    assert_eq!(counts, [1, 1, 1]);
}

#[test]
fn each_key_agrees_with_get() {
    let doc = br#"{"a":{"x":true,"y":[1,{"z":"deep"}]},"b":null}"#;
    let paths: &[&[&str]] = &[&["a", "x"], &["a", "y", "[1]", "z"], &["b"]];
    let mut hits = 0;
    each_key(
        doc,
        |path, value, kind| {
            let direct = get(doc, paths[path]).unwrap();
            assert_eq!((direct.raw, direct.kind), (value, kind), "path {path}");
            hits += 1;
        },
        paths,
    )
    .unwrap();
    assert_eq!(hits, paths.len());
}

#[test]
fn each_key_sibling_keys_do_not_leak_matches() {
    // "b" under the wrong parent must not satisfy ["a","b"]
    let doc = br#"{"x":{"b":1},"a":{"b":2}}"#;
    let mut seen = Vec::new();
    each_key(doc, |_, value, _| seen.push(value.to_vec()), &[&["a", "b"]]).unwrap();
    assert_eq!(seen, [b"2".to_vec()]);
}

#[test]
fn each_key_no_paths() {
    assert_eq!(each_key(b"{}", |_, _, _| {}, &[]).unwrap(), 0);
}

#[test]
fn each_key_stops_early_once_satisfied() {
    let doc = br#"{"a":1,"b":2}"#;
    let stop = each_key(doc, |_, _, _| {}, &[&["a"]]).unwrap();
    assert!(stop < doc.len());

    // with an unsatisfied path the scan runs to the end
    let stop = each_key(doc, |_, _, _| {}, &[&["a"], &["zz"]]).unwrap();
    assert_eq!(stop, doc.len());
}
