//! Memoizing wrappers for single-argument functions.
//!
//! [`memoize`] keys its cache on the argument's `Display` rendering, so two
//! different arguments that print the same share one cache entry. Use
//! [`memoize_by`] to supply a stricter key.
//!
//! # Examples
//!
//! ```rust
//! use loscore::function::memoize;
//! use std::cell::Cell;
//!
//! let calls = Cell::new(0);
//! let slow_square = memoize(|value: u64| {
//!     calls.set(calls.get() + 1);
//!     value * value
//! });
//!
//! assert_eq!(slow_square.call(12), 144);
//! assert_eq!(slow_square.call(12), 144);
//! assert_eq!(calls.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt::{self, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use crate::hash::FastHashMap;

/// Key function used by [`memoize`].
pub type DisplayKey<A> = fn(&A) -> String;

pub(crate) fn display_key<A: Display>(argument: &A) -> String {
    argument.to_string()
}

/// A function wrapper that caches results per argument key.
///
/// A call computes the key of its argument. On a hit the cached value is
/// cloned and returned without calling the target; on a miss the target
/// runs, and its result is stored under the key and returned.
///
/// The cache is unbounded and lives as long as the wrapper. Each miss adds
/// exactly one entry.
///
/// # Type Parameters
///
/// * `A` - The argument type
/// * `R` - The result type
/// * `F` - The wrapped function
/// * `K` - The cache key type (defaults to `String`)
/// * `G` - The key function (defaults to the `Display` rendering)
///
/// # Thread Safety
///
/// `Memoize` uses `RefCell` internally and is not `Sync`. Use
/// [`ConcurrentMemoize`](super::ConcurrentMemoize) across threads.
///
/// # Examples
///
/// Inspecting the cache:
///
/// ```rust
/// use loscore::function::memoize;
///
/// let describe = memoize(|value: f64| format!("got {value}"));
///
/// assert_eq!(describe.call(1.0), "got 1");
/// assert_eq!(describe.len(), 1);
/// assert!(describe.is_cached(&1.0));
/// ```
pub struct Memoize<A, R, F, K = String, G = DisplayKey<A>> {
    function: F,
    key: G,
    cache: RefCell<FastHashMap<K, R>>,
    marker: PhantomData<fn(A)>,
}

/// Wraps `function` in a [`Memoize`] keyed by the argument's `Display`
/// rendering.
pub fn memoize<A, R, F>(function: F) -> Memoize<A, R, F>
where
    A: Display,
    F: Fn(A) -> R,
{
    Memoize::with_key(function, display_key::<A> as DisplayKey<A>)
}

/// Wraps `function` in a [`Memoize`] keyed by `key(&argument)`.
///
/// # Examples
///
/// ```rust
/// use loscore::function::memoize_by;
///
/// let letters = memoize_by(
///     |word: String| word.chars().filter(|c| c.is_alphabetic()).count(),
///     |word| word.to_lowercase(),
/// );
///
/// assert_eq!(letters.call("Hello!".to_string()), 5);
/// assert_eq!(letters.call("HELLO!".to_string()), 5);
/// assert_eq!(letters.len(), 1);
/// ```
pub fn memoize_by<A, R, F, K, G>(function: F, key: G) -> Memoize<A, R, F, K, G>
where
    F: Fn(A) -> R,
    K: Eq + Hash,
    G: Fn(&A) -> K,
{
    Memoize::with_key(function, key)
}

impl<A, R, F, K, G> Memoize<A, R, F, K, G>
where
    F: Fn(A) -> R,
    K: Eq + Hash,
    G: Fn(&A) -> K,
{
    /// Creates a wrapper with an empty cache and the given key function.
    pub fn with_key(function: F, key: G) -> Self {
        Self {
            function,
            key,
            cache: RefCell::new(FastHashMap::default()),
            marker: PhantomData,
        }
    }

    /// Returns the cached result for `argument`, computing it on a miss.
    ///
    /// No borrow is held while the wrapped function runs, so it may call
    /// back into the same wrapper. If a nested call already cached the key,
    /// that entry is kept.
    pub fn call(&self, argument: A) -> R
    where
        R: Clone,
    {
        let key = (self.key)(&argument);
        if let Some(cached) = self.cache.borrow().get(&key) {
            tracing::trace!("memoize cache hit");
            return cached.clone();
        }

        let result = (self.function)(argument);
        let mut cache = self.cache.borrow_mut();
        tracing::trace!(cached = cache.len() + 1, "memoize cache miss");
        cache.entry(key).or_insert(result).clone()
    }

    /// Returns `true` if a result for `argument`'s key is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        self.cache.borrow().contains_key(&(self.key)(argument))
    }
}

impl<A, R, F, K, G> Memoize<A, R, F, K, G> {
    /// Returns the number of cached results.
    #[inline]
    pub fn len(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Returns `true` when nothing has been cached yet.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A, R, F, K, G> fmt::Debug for Memoize<A, R, F, K, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("Memoize")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_string_and_number_with_same_rendering_collide() {
        let calls = Cell::new(0);
        let echo = memoize(|value: Box<dyn Display>| {
            calls.set(calls.get() + 1);
            value.to_string()
        });

        assert_eq!(echo.call(Box::new(1)), "1");
        assert_eq!(echo.call(Box::new("1")), "1");
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_miss_grows_cache_by_one() {
        let double = memoize(|value: i32| value * 2);
        assert!(double.is_empty());
        double.call(1);
        double.call(2);
        double.call(1);
        assert_eq!(double.len(), 2);
    }

    #[test]
    fn test_debug_reports_cache_size() {
        let double = memoize(|value: i32| value * 2);
        double.call(4);
        assert_eq!(format!("{double:?}"), "Memoize { cached: 1, .. }");
    }
}
