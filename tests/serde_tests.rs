#![cfg(feature = "serde")]

//! Integration tests for serde support on `Container`.
//!
//! A JSON array reads as a sequence and a JSON object reads as a mapping, so
//! values decoded from JSON can be fed straight to the traversal primitives.

use loscore::collection::{Container, map, pluck, size};
use rstest::rstest;
use std::collections::BTreeMap;

// =============================================================================
// Shape Detection
// =============================================================================

#[rstest]
fn test_json_array_is_sequence() {
    let container: Container<i32> = serde_json::from_str("[3, 1, 2]").unwrap();
    assert_eq!(container, Container::from(vec![3, 1, 2]));
    assert!(container.is_sequence());
}

#[rstest]
fn test_json_object_is_mapping() {
    let container: Container<i32> = serde_json::from_str(r#"{"b": 2, "a": 1}"#).unwrap();
    assert!(container.is_mapping());
    assert_eq!(map(&container, |value| value * 10), vec![10, 20]);
}

#[rstest]
fn test_json_scalar_is_rejected() {
    let result: Result<Container<i32>, _> = serde_json::from_str("7");
    assert!(result.is_err());
}

// =============================================================================
// Round Trips
// =============================================================================

#[rstest]
fn test_container_serializes_without_tag() {
    let sequence = Container::from(vec!["x".to_string()]);
    let mapping = Container::from(BTreeMap::from([("k".to_string(), "v".to_string())]));

    assert_eq!(serde_json::to_string(&sequence).unwrap(), r#"["x"]"#);
    assert_eq!(serde_json::to_string(&mapping).unwrap(), r#"{"k":"v"}"#);
}

#[rstest]
fn test_nested_containers_from_json() {
    let json = r#"[{"name": "moe"}, {"name": "larry"}, {"nick": "curly"}]"#;
    let people: Vec<Container<String>> = serde_json::from_str(json).unwrap();

    assert_eq!(size(&people), 3);
    assert_eq!(
        pluck(&people, "name"),
        vec![Some("moe".to_string()), Some("larry".to_string()), None]
    );
}
