use alloc::vec::Vec;

use crate::{Error, get, set};

fn set_str(data: &[u8], value: &[u8], keys: &[&str]) -> Vec<u8> {
    set(data, value, keys).unwrap()
}

#[test]
fn replaces_existing_values_in_place() {
    let doc = br#"{"a":1,"b":2}"#;
    assert_eq!(set_str(doc, b"42", &["a"]), br#"{"a":42,"b":2}"#);
    assert_eq!(set_str(doc, br#""s""#, &["b"]), br#"{"a":1,"b":"s"}"#);

    // surrounding formatting is preserved
    let doc = b"{ \"a\" : 1 , \"b\" : 2 }";
    assert_eq!(set_str(doc, b"9", &["a"]), b"{ \"a\" : 9 , \"b\" : 2 }");
}

#[test]
fn replaces_array_elements() {
    let doc = br#"{"a":[1,2,3]}"#;
    assert_eq!(set_str(doc, b"9", &["a", "[1]"]), br#"{"a":[1,9,3]}"#);
    assert_eq!(
        set_str(doc, br#"{"x":0}"#, &["a", "[0]"]),
        br#"{"a":[{"x":0},2,3]}"#
    );
}

#[test]
fn creates_nested_members() {
    assert_eq!(set_str(b"{}", br#""v""#, &["a", "b"]), br#"{"a":{"b":"v"}}"#);
    assert_eq!(
        set_str(br#"{"x":1}"#, b"2", &["a", "b"]),
        br#"{"x":1,"a":{"b":2}}"#
    );
    assert_eq!(
        set_str(br#"{"a":{"x":1}}"#, b"2", &["a", "y"]),
        br#"{"a":{"x":1,"y":2}}"#
    );
    assert_eq!(set_str(br#"{"a":{}}"#, b"2", &["a", "y"]), br#"{"a":{"y":2}}"#);
}

#[test]
fn pads_arrays_with_null() {
    let doc = br#"{"a":[1,2]}"#;
    assert_eq!(
        set_str(doc, b"9", &["a", "[5]"]),
        br#"{"a":[1,2,null,null,null,9]}"#
    );
    assert_eq!(set_str(doc, b"9", &["a", "[2]"]), br#"{"a":[1,2,9]}"#);
    assert_eq!(
        set_str(br#"{"a":[]}"#, b"9", &["a", "[2]"]),
        br#"{"a":[null,null,9]}"#
    );
}

#[test]
fn append_and_prepend() {
    let doc = br#"{"a":[1,2]}"#;
    assert_eq!(set_str(doc, b"9", &["a", "[+]"]), br#"{"a":[1,2,9]}"#);
    assert_eq!(set_str(doc, b"9", &["a", "[-]"]), br#"{"a":[9,1,2]}"#);
    assert_eq!(
        set_str(br#"{"a":[]}"#, b"9", &["a", "[+]"]),
        br#"{"a":[9]}"#
    );
    assert_eq!(
        set_str(br#"{"a":[]}"#, b"9", &["a", "[-]"]),
        br#"{"a":[9]}"#
    );
}

#[test]
fn creates_intermediate_arrays() {
    assert_eq!(
        set_str(b"{}", b"9", &["a", "[1]", "b"]),
        br#"{"a":[null,{"b":9}]}"#
    );
    // an existing element anchors deeper creation
    assert_eq!(
        set_str(br#"{"a":[1,2]}"#, b"9", &["a", "[0]", "b"]),
        br#"{"a":[{"b":9},2]}"#
    );
    // creation below the prefix array appends through padding
    assert_eq!(
        set_str(br#"{"a":[1,2]}"#, b"9", &["a", "[3]", "b"]),
        br#"{"a":[1,2,null,{"b":9}]}"#
    );
}

#[test]
fn overwrites_scalars_on_the_way() {
    assert_eq!(
        set_str(br#"{"a":5}"#, b"9", &["a", "b"]),
        br#"{"a":{"b":9}}"#
    );
    assert_eq!(
        set_str(br#"{"a":5}"#, b"9", &["a", "[1]"]),
        br#"{"a":[null,9]}"#
    );
}

#[test]
fn empty_key_path_returns_the_value() {
    assert_eq!(set_str(br#"{"a":1}"#, b"null", &[]), b"null");
}

#[test]
fn refuses_non_object_roots_for_creation() {
    assert_eq!(set(b"", b"1", &["a"]), Err(Error::KeyPathNotFound));
    assert_eq!(set(b"  ", b"1", &["a"]), Err(Error::KeyPathNotFound));
    assert_eq!(set(b"[1,2]", b"1", &["a"]), Err(Error::KeyPathNotFound));
    assert_eq!(set(b"3", b"1", &["a"]), Err(Error::KeyPathNotFound));
    // a root array still accepts writes to existing elements
    assert_eq!(set_str(b"[1,2]", b"9", &["[0]"]), b"[9,2]");
    assert_eq!(set(b"[1,2]", b"9", &["[5]"]), Err(Error::KeyPathNotFound));
    // an object member cannot be created through an index segment
    assert_eq!(set(b"{}", b"9", &["[0]"]), Err(Error::KeyPathNotFound));
}

#[test]
fn set_then_get_round_trips() {
    let cases: &[(&[u8], &[u8], &[&str])] = &[
        (br#"{}"#, br#""v""#, &["a", "b"]),
        (br#"{"a":[1,2]}"#, b"9", &["a", "[5]"]),
        (br#"{"a":{"b":1}}"#, b"true", &["a", "b"]),
        (br#"{"a":1}"#, br#"[1,2]"#, &["z"]),
    ];
    for &(doc, value, path) in cases {
        let out = set(doc, value, path).unwrap();
        let got = get(&out, path).unwrap();
        let expected: &[u8] = if value.first() == Some(&b'"') {
            &value[1..value.len() - 1]
        } else {
            value
        };
        assert_eq!(got.raw, expected, "doc {doc:?} path {path:?}");
    }
}

#[test]
fn mutation_output_reparses() {
    let out = set_str(br#"{"a":[1,2],"b":{"c":null}}"#, b"7", &["b", "d", "[1]"]);
    let parsed: serde_json::Value = serde_json::from_slice(&out).unwrap();
    assert_eq!(parsed["b"]["d"][1], serde_json::json!(7));
}
