#![cfg(feature = "object")]
//! Unit tests for `extend` and `extend_container`.

use loscore::LoscoreError;
use loscore::collection::Container;
use loscore::object::{extend, extend_container};
use rstest::rstest;
use std::collections::{BTreeMap, HashMap};

fn entries(pairs: &[(&str, i32)]) -> BTreeMap<String, i32> {
    pairs
        .iter()
        .map(|(key, value)| ((*key).to_string(), *value))
        .collect()
}

// =============================================================================
// extend
// =============================================================================

#[rstest]
fn extend_copies_every_source_entry() {
    let merged = extend(
        entries(&[("a", 1)]),
        [entries(&[("b", 2)]), entries(&[("c", 3)])],
    );
    assert_eq!(merged, entries(&[("a", 1), ("b", 2), ("c", 3)]));
}

#[rstest]
fn extend_later_sources_win() {
    let merged = extend(
        entries(&[("shared", 0), ("own", 9)]),
        [entries(&[("shared", 1)]), entries(&[("shared", 2)])],
    );
    assert_eq!(merged, entries(&[("own", 9), ("shared", 2)]));
}

#[rstest]
fn extend_with_empty_sources_changes_nothing() {
    let merged = extend(entries(&[("a", 1)]), [BTreeMap::new(), BTreeMap::new()]);
    assert_eq!(merged, entries(&[("a", 1)]));
}

#[rstest]
fn extend_accepts_mixed_pair_sources() {
    let destination: HashMap<&str, u8> = HashMap::new();
    let merged = extend(destination, [vec![("x", 1), ("y", 2)], vec![("x", 3)]]);
    assert_eq!(merged, HashMap::from([("x", 3), ("y", 2)]));
}

// =============================================================================
// extend_container
// =============================================================================

#[rstest]
fn extend_container_merges_mappings() {
    let merged = extend_container(
        Container::from(entries(&[("a", 1)])),
        [Container::from(entries(&[("a", 5), ("b", 6)]))],
    );
    assert_eq!(merged, Ok(Container::from(entries(&[("a", 5), ("b", 6)]))));
}

#[rstest]
fn extend_container_names_sequence_elements_by_index() {
    let merged = extend_container(
        Container::from(entries(&[("1", 100)])),
        [Container::from(vec![7, 8])],
    );
    assert_eq!(merged, Ok(Container::from(entries(&[("0", 7), ("1", 8)]))));
}

#[rstest]
fn extend_container_rejects_sequence_destination() {
    let error = extend_container(Container::from(vec![1]), Vec::new()).unwrap_err();
    assert!(matches!(
        error,
        LoscoreError::InvalidArgument {
            operation: "extend_container",
            ..
        }
    ));
    assert!(error.to_string().starts_with("invalid argument to extend_container"));
}
