//! Elementary functions used as defaults by the rest of the library.
//!
//! - [`identity`]: returns its argument unchanged
//! - [`add`]: adds two values with the `+` operator

use std::ops::Add;

/// Returns the value unchanged.
///
/// Used as the default predicate of [`every_true`](crate::collection::every_true)
/// and handy wherever a function argument is required but no transformation
/// is wanted.
///
/// # Examples
///
/// ```
/// use loscore::basics::identity;
///
/// assert_eq!(identity(42), 42);
/// assert_eq!(identity("hello"), "hello");
/// assert_eq!(identity(vec![1, 2, 3]), vec![1, 2, 3]);
/// ```
#[inline]
pub fn identity<T>(value: T) -> T {
    value
}

/// Adds two values.
///
/// Works for anything implementing [`Add`], so numbers add and owned strings
/// concatenate with a borrowed right-hand side.
///
/// # Examples
///
/// ```
/// use loscore::basics::add;
///
/// assert_eq!(add(2, 3), 5);
/// assert_eq!(add(String::from("foo"), "bar"), "foobar");
/// ```
#[inline]
pub fn add<T, U>(left: T, right: U) -> T::Output
where
    T: Add<U>,
{
    left + right
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_with_unit() {
        assert_eq!(identity(()), ());
    }

    #[test]
    fn test_add_floats() {
        assert!((add(0.5_f64, 0.25) - 0.75).abs() < f64::EPSILON);
    }

    #[test]
    fn test_add_is_usable_as_fold_step() {
        let total = [1, 2, 3, 4].into_iter().fold(0, add);
        assert_eq!(total, 10);
    }
}
