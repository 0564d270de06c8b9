//! Tests for document parsing and rendering.

use yamlpick::document::{parse_json, parse_yaml, parse_yaml_documents, render, Format, Value};
use yamlpick::pick::{Key, KeyedContainer, Symbol};

#[test]
fn test_parse_nested_mapping() {
    let doc = parse_yaml("server:\n  host: localhost\n  port: 8080\n").unwrap();
    let server = doc.get_key(&Key::from("server")).unwrap();

    assert!(server.is_mapping());
    assert_eq!(server.get_key(&Key::from("host")), Some(&Value::from("localhost")));
    assert_eq!(server.get_key(&Key::from("port")).and_then(Value::as_i64), Some(8080));
}

#[test]
fn test_symbol_keys_and_values() {
    let doc = parse_yaml(":status: :active\n").unwrap();
    assert_eq!(
        doc.get_key(&Key::Symbol(Symbol::new("status"))),
        Some(&Value::Symbol(Symbol::new("active")))
    );
    assert!(!doc.has_key(&Key::from("status")));
}

#[test]
fn test_mapping_order_preserved() {
    let doc = parse_yaml("z: 1\na: 2\nm: 3\n").unwrap();
    let keys: Vec<String> = doc
        .as_mapping()
        .unwrap()
        .keys()
        .map(|k| k.to_string())
        .collect();
    assert_eq!(keys, vec!["z", "a", "m"]);
}

#[test]
fn test_multiple_documents() {
    let docs = parse_yaml_documents("a: 1\n---\na: 2\n---\nb: 3\n").unwrap();
    assert_eq!(docs.len(), 3);
    assert_eq!(docs[1].get_key(&Key::from("a")), Some(&Value::from(2)));
}

#[test]
fn test_single_document_parser_rejects_streams() {
    assert!(parse_yaml("a: 1\n---\na: 2\n").is_err());
}

#[test]
fn test_invalid_input() {
    assert!(parse_yaml("a: [1, 2\n").is_err());
    assert!(parse_json("{\"unclosed\": ").is_err());
}

#[test]
fn test_json_floats_and_integers() {
    let doc = parse_json(r#"{"i": 3, "f": 2.5}"#).unwrap();
    assert_eq!(doc.get_key(&Key::from("i")).and_then(Value::as_i64), Some(3));
    assert_eq!(doc.get_key(&Key::from("f")), Some(&Value::from(2.5)));
}

#[test]
fn test_render_yaml_and_json() {
    let doc = parse_yaml("name: Alice\ntags: [a, b]\n").unwrap();

    let yaml = render(&doc, Format::Yaml).unwrap();
    assert_eq!(parse_yaml(&yaml).unwrap(), doc);

    let json = render(&doc, Format::Json).unwrap();
    assert!(json.ends_with('\n'));
    assert_eq!(parse_json(&json).unwrap(), doc);
}
