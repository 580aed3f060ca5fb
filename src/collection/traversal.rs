//! Single-pass traversal primitives.
//!
//! Every function here visits the container once, in native order, and
//! returns a new value; the container is only borrowed. `each` is the
//! primitive the others are expressed through.

use super::container::{Collection, Key, Measure, Record};

/// Calls `iteratee(value, key, collection)` for every entry in native order.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::each;
///
/// let mut visited = Vec::new();
/// each(&["a", "b"], |value, key, collection| {
///     visited.push((key.as_index(), *value, collection.len()));
/// });
/// assert_eq!(visited, vec![(Some(0), "a", 2), (Some(1), "b", 2)]);
/// ```
pub fn each<C, F>(collection: &C, mut iteratee: F)
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item, Key<'_>, &C),
{
    for (key, value) in collection.entries() {
        iteratee(value, key, collection);
    }
}

/// Applies `iteratee` to every value and collects the results in order.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::map;
///
/// assert_eq!(map(&[1, 2, 3], |value| value * 2), vec![2, 4, 6]);
/// ```
pub fn map<C, R, F>(collection: &C, mut iteratee: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> R,
{
    let mut results = Vec::with_capacity(collection.size());
    each(collection, |value, _, _| results.push(iteratee(value)));
    results
}

/// Like [`map`] for a fallible `iteratee`, stopping at the first error.
///
/// # Errors
///
/// Returns the first error produced by `iteratee`; later values are not
/// visited.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::try_map;
///
/// let parsed: Result<Vec<i32>, _> = try_map(&["1", "2"], |text| text.parse::<i32>());
/// assert_eq!(parsed, Ok(vec![1, 2]));
///
/// let failed: Result<Vec<i32>, _> = try_map(&["1", "x"], |text| text.parse::<i32>());
/// assert!(failed.is_err());
/// ```
pub fn try_map<C, R, E, F>(collection: &C, iteratee: F) -> Result<Vec<R>, E>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> Result<R, E>,
{
    collection.values().map(iteratee).collect()
}

/// Returns clones of the values for which `predicate` is `true`.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::filter;
///
/// assert_eq!(filter(&[1, 2, 3, 4], |value| value % 2 == 0), vec![2, 4]);
/// ```
pub fn filter<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    let mut kept = Vec::new();
    each(collection, |value, _, _| {
        if predicate(value) {
            kept.push(value.clone());
        }
    });
    kept
}

/// Returns clones of the values for which `predicate` is `false`.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::reject;
///
/// assert_eq!(reject(&[1, 2, 3, 4], |value| value % 2 == 0), vec![1, 3]);
/// ```
pub fn reject<C, P>(collection: &C, mut predicate: P) -> Vec<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    P: FnMut(&C::Item) -> bool,
{
    filter(collection, |value| !predicate(value))
}

/// Extracts the field `name` from every record.
///
/// Records without the field contribute `None`, so the output always has
/// one entry per input value.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::pluck;
/// use std::collections::BTreeMap;
///
/// let people = vec![
///     BTreeMap::from([("name".to_string(), "moe"), ("age".to_string(), "40")]),
///     BTreeMap::from([("name".to_string(), "larry")]),
/// ];
/// assert_eq!(pluck(&people, "name"), vec![Some("moe"), Some("larry")]);
/// assert_eq!(pluck(&people, "age"), vec![Some("40"), None]);
/// ```
pub fn pluck<C>(collection: &C, name: &str) -> Vec<Option<<C::Item as Record>::Value>>
where
    C: Collection + ?Sized,
    C::Item: Record,
    <C::Item as Record>::Value: Clone,
{
    map(collection, |record| record.field(name).cloned())
}

/// Folds the values left to right, starting from `accumulator`.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::reduce;
///
/// assert_eq!(reduce(&[1, 2, 3, 4], |total, value| total + value, 100), 110);
/// ```
pub fn reduce<C, A, F>(collection: &C, iterator: F, accumulator: A) -> A
where
    C: Collection + ?Sized,
    F: FnMut(A, &C::Item) -> A,
{
    collection.values().fold(accumulator, iterator)
}

/// Folds the values left to right, seeding the accumulator with the first
/// value.
///
/// Returns `None` for an empty container instead of failing.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::reduce_first;
///
/// assert_eq!(reduce_first(&[1, 2, 3, 4], |total, value| total + value), Some(10));
/// assert_eq!(reduce_first(&[7], |total, value| total + value), Some(7));
/// assert_eq!(reduce_first(&[] as &[i32], |total, value| total + value), None);
/// ```
pub fn reduce_first<C, F>(collection: &C, mut iterator: F) -> Option<C::Item>
where
    C: Collection + ?Sized,
    C::Item: Clone,
    F: FnMut(C::Item, &C::Item) -> C::Item,
{
    reduce(
        collection,
        |accumulator: Option<C::Item>, value| match accumulator {
            None => Some(value.clone()),
            Some(current) => Some(iterator(current, value)),
        },
        None,
    )
}

/// Returns `true` when any value equals `target`.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::contains;
///
/// assert!(contains(&[1, 2, 3], &2));
/// assert!(!contains(&[1, 2, 3], &5));
/// ```
pub fn contains<C>(collection: &C, target: &C::Item) -> bool
where
    C: Collection + ?Sized,
    C::Item: PartialEq,
{
    reduce(
        collection,
        |was_found, value| was_found || value == target,
        false,
    )
}

/// Returns `true` when every value satisfies `predicate`.
///
/// Every value is visited even after a failure; an empty container yields
/// `true`.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::every;
///
/// assert!(every(&[2, 4, 6], |value| value % 2 == 0));
/// assert!(!every(&[2, 4, 5], |value| value % 2 == 0));
/// ```
pub fn every<C, P>(collection: &C, mut predicate: P) -> bool
where
    C: Collection + ?Sized,
    P: FnMut(&C::Item) -> bool,
{
    reduce(
        collection,
        |all_passed, value| predicate(value) && all_passed,
        true,
    )
}

/// [`every`] with the identity predicate over boolean values.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::every_true;
///
/// assert!(every_true(&[true, true]));
/// assert!(!every_true(&[true, false]));
/// ```
pub fn every_true<C>(collection: &C) -> bool
where
    C: Collection<Item = bool> + ?Sized,
{
    every(collection, |value| crate::basics::identity(*value))
}

/// Returns the index of the first element equal to `target`.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::index_of;
///
/// assert_eq!(index_of(&[10, 20, 10], &10), Some(0));
/// assert_eq!(index_of(&[10, 20, 10], &30), None);
/// ```
pub fn index_of<T>(array: &[T], target: &T) -> Option<usize>
where
    T: PartialEq,
{
    let mut found = None;
    each(array, |value, key, _| {
        if found.is_none() && value == target {
            found = key.as_index();
        }
    });
    found
}

/// Returns the number of entries in the container, or the number of
/// characters in a string.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::size;
/// use std::collections::HashMap;
///
/// assert_eq!(size(&[1, 2, 3]), 3);
/// assert_eq!(size(&HashMap::from([("a".to_string(), 1)])), 1);
/// assert_eq!(size("héllo"), 5);
/// ```
#[inline]
pub fn size<C>(collection: &C) -> usize
where
    C: Measure + ?Sized,
{
    collection.measure()
}
