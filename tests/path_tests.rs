//! Path expressions driving lookups end to end.

use yamlpick::document::{parse_yaml, Value};
use yamlpick::path::{format_path, parse_path, PathError};
use yamlpick::pick::{indifferent, object, Key};

#[test]
fn test_expression_with_typed_keys() {
    let doc = parse_yaml(":servers:\n  8080:\n    'a.b': web\n").unwrap();
    let keys = parse_path(":servers[8080]['a.b']").unwrap();
    assert_eq!(object(&doc, &keys), Ok(Some(&Value::from("web"))));
}

#[test]
fn test_plain_expression_with_indifferent_lookup() {
    let doc = parse_yaml(":db:\n  host: localhost\n").unwrap();
    let keys = parse_path("$.db.host").unwrap();
    assert_eq!(indifferent(&doc, &keys), Ok(Some(&Value::from("localhost"))));
}

#[test]
fn test_nil_key_expression() {
    let doc = parse_yaml("~: nothing\n").unwrap();
    let keys = parse_path("~").unwrap();
    assert_eq!(keys, vec![Key::Null]);
    assert_eq!(object(&doc, &keys), Ok(Some(&Value::from("nothing"))));
    assert!(indifferent(&doc, &keys).is_err());
}

#[test]
fn test_error_messages() {
    let err = parse_path("a[oops]").unwrap_err();
    assert!(matches!(err, PathError::InvalidSyntax { .. }));
    assert!(err.to_string().contains("oops"));

    let err = parse_path("a.").unwrap_err();
    assert_eq!(
        err.to_string(),
        "Unexpected end of input, expected key name"
    );
}

#[test]
fn test_format_round_trip() {
    let keys = parse_path("a.:b[1]['c d'][true].~").unwrap();
    assert_eq!(format_path(&keys), "a.:b[1]['c d'][true].~");
}
