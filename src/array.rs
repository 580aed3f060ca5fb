//! Helpers over ordered slices.
//!
//! All functions borrow their input and return either a sub-slice or a new
//! `Vec`; the input is never modified.
//!
//! # Examples
//!
//! ```rust
//! use loscore::array::{head, tail, take, take_right, uniq};
//!
//! let values = [1, 2, 3, 2, 1];
//!
//! assert_eq!(head(&values), Some(&1));
//! assert_eq!(tail(&values), &[2, 3, 2, 1]);
//! assert_eq!(take(&values, 2), &[1, 2]);
//! assert_eq!(take_right(&values, 2), &[2, 1]);
//! assert_eq!(uniq(&values), vec![1, 2, 3]);
//! ```

use std::hash::Hash;

use crate::hash::FastHashSet;

/// Returns the first element, or `None` for an empty slice.
#[inline]
pub fn head<T>(array: &[T]) -> Option<&T> {
    array.first()
}

/// Returns every element after the first.
///
/// An empty slice yields an empty slice.
///
/// # Examples
///
/// ```rust
/// use loscore::array::tail;
///
/// assert_eq!(tail(&[1, 2, 3]), &[2, 3]);
/// assert!(tail::<i32>(&[]).is_empty());
/// ```
#[inline]
pub fn tail<T>(array: &[T]) -> &[T] {
    array.get(1..).unwrap_or(&[])
}

/// Takes `count` elements from the front, or from the back when `count` is
/// negative.
///
/// - `count == 0` returns an empty slice
/// - `count > 0` returns the first `count` elements
/// - `count < 0` returns the last `|count|` elements
///
/// Counts larger than the slice are clamped to its length.
///
/// # Examples
///
/// ```rust
/// use loscore::array::take;
///
/// let values = [1, 2, 3, 4];
/// assert_eq!(take(&values, 2), &[1, 2]);
/// assert_eq!(take(&values, -1), &[4]);
/// assert_eq!(take(&values, 10), &[1, 2, 3, 4]);
/// assert!(take(&values, 0).is_empty());
/// ```
pub fn take<T>(array: &[T], count: isize) -> &[T] {
    let length = array.len();
    let magnitude = count.unsigned_abs().min(length);
    if count >= 0 {
        &array[..magnitude]
    } else {
        &array[length - magnitude..]
    }
}

/// Takes `count` elements from the back; the mirror image of [`take`].
///
/// A negative `count` therefore takes from the front.
///
/// # Examples
///
/// ```rust
/// use loscore::array::take_right;
///
/// assert_eq!(take_right(&[1, 2, 3, 4], 3), &[2, 3, 4]);
/// assert_eq!(take_right(&[1, 2, 3, 4], -1), &[1]);
/// ```
#[inline]
pub fn take_right<T>(array: &[T], count: isize) -> &[T] {
    take(array, count.saturating_neg())
}

/// Returns the distinct elements in order of first occurrence.
///
/// # Examples
///
/// ```rust
/// use loscore::array::uniq;
///
/// assert_eq!(uniq(&["a", "b", "a", "c", "b"]), vec!["a", "b", "c"]);
/// ```
pub fn uniq<T>(array: &[T]) -> Vec<T>
where
    T: Eq + Hash + Clone,
{
    let mut seen = FastHashSet::default();
    array
        .iter()
        .filter(|element| seen.insert(*element))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_head_of_empty_slice() {
        assert_eq!(head::<i32>(&[]), None);
    }

    #[test]
    fn test_take_with_minimum_count_does_not_overflow() {
        assert_eq!(take(&[1, 2, 3], isize::MIN), &[1, 2, 3]);
        assert_eq!(take_right(&[1, 2, 3], isize::MIN), &[1, 2, 3]);
    }

    #[test]
    fn test_uniq_keeps_first_occurrence_order() {
        assert_eq!(uniq(&[3, 1, 3, 2, 1]), vec![3, 1, 2]);
    }
}
