#![cfg(feature = "array")]
//! Unit tests for the slice helpers.
//!
//! Tests cover:
//! - `head` and `tail` on empty and non-empty slices
//! - `take` and `take_right` with positive, negative and oversized counts
//! - `uniq` ordering and element types

use loscore::array::{head, tail, take, take_right, uniq};
use rstest::rstest;

// =============================================================================
// head / tail
// =============================================================================

#[rstest]
fn head_returns_first_element() {
    assert_eq!(head(&["first", "second"]), Some(&"first"));
    assert_eq!(head::<u8>(&[]), None);
}

#[rstest]
#[case(&[1, 2, 3], &[2, 3])]
#[case(&[1], &[])]
#[case(&[], &[])]
fn tail_drops_first_element(#[case] input: &[i32], #[case] expected: &[i32]) {
    assert_eq!(tail(input), expected);
}

#[rstest]
fn head_and_tail_rebuild_the_slice() {
    let values = vec!['a', 'b', 'c'];
    let mut rebuilt: Vec<char> = head(&values).copied().into_iter().collect();
    rebuilt.extend_from_slice(tail(&values));
    assert_eq!(rebuilt, values);
}

// =============================================================================
// take / take_right
// =============================================================================

#[rstest]
#[case(0, &[])]
#[case(2, &[1, 2])]
#[case(4, &[1, 2, 3, 4])]
#[case(9, &[1, 2, 3, 4])]
#[case(-1, &[4])]
#[case(-3, &[2, 3, 4])]
#[case(-9, &[1, 2, 3, 4])]
fn take_counts_from_the_front(#[case] count: isize, #[case] expected: &[i32]) {
    assert_eq!(take(&[1, 2, 3, 4], count), expected);
}

#[rstest]
#[case(0, &[])]
#[case(1, &[4])]
#[case(3, &[2, 3, 4])]
#[case(9, &[1, 2, 3, 4])]
#[case(-2, &[1, 2])]
fn take_right_counts_from_the_back(#[case] count: isize, #[case] expected: &[i32]) {
    assert_eq!(take_right(&[1, 2, 3, 4], count), expected);
}

#[rstest]
fn take_on_empty_slice_is_empty() {
    let empty: [String; 0] = [];
    assert!(take(&empty, 3).is_empty());
    assert!(take_right(&empty, -3).is_empty());
}

#[rstest]
fn take_borrows_without_copying() {
    let words = vec!["keep".to_string(), "these".to_string(), "words".to_string()];
    let taken = take(&words, 2);
    assert!(std::ptr::eq(&taken[0], &words[0]));
}

// =============================================================================
// uniq
// =============================================================================

#[rstest]
#[case(&[1, 1, 1], &[1])]
#[case(&[1, 2, 1, 3, 2], &[1, 2, 3])]
#[case(&[4, 3, 2, 1], &[4, 3, 2, 1])]
#[case(&[], &[])]
fn uniq_keeps_first_occurrences(#[case] input: &[i32], #[case] expected: &[i32]) {
    assert_eq!(uniq(input), expected);
}

#[rstest]
fn uniq_owned_strings() {
    let words = vec![
        "to".to_string(),
        "be".to_string(),
        "or".to_string(),
        "not".to_string(),
        "to".to_string(),
        "be".to_string(),
    ];
    assert_eq!(uniq(&words), vec!["to", "be", "or", "not"]);
}

#[rstest]
fn uniq_leaves_input_untouched() {
    let values = vec![2, 2, 1];
    let distinct = uniq(&values);
    assert_eq!(distinct, vec![2, 1]);
    assert_eq!(values, vec![2, 2, 1]);
}
