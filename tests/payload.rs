use serde::Serialize;
use serde_json::json;
use tintlog::{Error, Payload, PayloadStyle};

#[derive(Serialize)]
struct Request {
    id: u32,
    tags: Vec<&'static str>,
}

#[test]
fn pretty_uses_configured_indent() {
    let payload = Payload::new(&json!({"a": {"b": 1}}));
    assert_eq!(
        PayloadStyle::Pretty { indent: 2 }.render(&payload).unwrap(),
        "{\n  \"a\": {\n    \"b\": 1\n  }\n}"
    );
    assert_eq!(
        PayloadStyle::Pretty { indent: 4 }.render(&payload).unwrap(),
        "{\n    \"a\": {\n        \"b\": 1\n    }\n}"
    );
}

#[test]
fn compact_is_single_line() {
    let payload = Payload::new(&Request {
        id: 7,
        tags: vec!["x", "y"],
    });
    assert_eq!(
        PayloadStyle::Compact.render(&payload).unwrap(),
        r#"{"id":7,"tags":["x","y"]}"#
    );
}

#[test]
fn conversion_failure_is_a_format_error() {
    let mut map = std::collections::HashMap::new();
    map.insert(vec![1u8], 1);
    let payload = Payload::new(&map);

    assert!(payload.value().is_err());
    assert!(matches!(
        PayloadStyle::default().render(&payload),
        Err(Error::Format(_))
    ));
}

#[test]
fn from_value() {
    let payload = Payload::from(json!([1, 2]));
    assert_eq!(payload.value().unwrap(), &json!([1, 2]));
}
