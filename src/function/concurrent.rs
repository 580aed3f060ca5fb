//! Thread-safe call-once gates and memoizing wrappers.
//!
//! Both types hold their whole state behind one `parking_lot::Mutex`, and the
//! lock is held across the check, the call into the wrapped function, and the
//! update. That keeps the at-most-once guarantees under concurrent callers at
//! the cost of serializing calls.
//!
//! # Re-entry Warning
//!
//! Calling a wrapper from inside its own wrapped function deadlocks.
//!
//! # Examples
//!
//! ```rust
//! use loscore::function::concurrent_memoize;
//! use std::sync::atomic::{AtomicUsize, Ordering};
//! use std::thread;
//!
//! let calls = AtomicUsize::new(0);
//! let cube = concurrent_memoize(|value: u32| {
//!     calls.fetch_add(1, Ordering::SeqCst);
//!     value.pow(3)
//! });
//!
//! thread::scope(|scope| {
//!     for _ in 0..4 {
//!         scope.spawn(|| assert_eq!(cube.call(3), 27));
//!     }
//! });
//! assert_eq!(calls.load(Ordering::SeqCst), 1);
//! ```

use std::fmt::{self, Display};
use std::hash::Hash;
use std::marker::PhantomData;

use parking_lot::Mutex;

use super::memoize::{DisplayKey, display_key};
use crate::hash::FastHashMap;

struct OnceState<R, F> {
    function: F,
    result: Option<R>,
}

/// A call-once gate that can be shared between threads.
///
/// Behaves like [`Once`](super::Once): the first call runs the target and
/// every later call, from any thread, returns a clone of that result. A panic
/// in the target leaves the gate open.
///
/// `ConcurrentOnce` is `Sync` when `F: Send` and `R: Send`.
pub struct ConcurrentOnce<A, R, F> {
    state: Mutex<OnceState<R, F>>,
    marker: PhantomData<fn(A)>,
}

/// Wraps `function` in a [`ConcurrentOnce`] gate.
#[inline]
pub fn concurrent_once<A, R, F>(function: F) -> ConcurrentOnce<A, R, F>
where
    F: FnMut(A) -> R,
{
    ConcurrentOnce::new(function)
}

impl<A, R, F> ConcurrentOnce<A, R, F>
where
    F: FnMut(A) -> R,
{
    /// Creates an open gate around `function`.
    pub fn new(function: F) -> Self {
        Self {
            state: Mutex::new(OnceState {
                function,
                result: None,
            }),
            marker: PhantomData,
        }
    }

    /// Calls the wrapped function, or returns the result of the first call.
    pub fn call(&self, argument: A) -> R
    where
        R: Clone,
    {
        let mut state = self.state.lock();
        if let Some(result) = &state.result {
            return result.clone();
        }

        let result = (state.function)(argument);
        tracing::trace!("concurrent once gate triggered");
        state.result = Some(result.clone());
        result
    }
}

impl<A, R, F> ConcurrentOnce<A, R, F> {
    /// Returns `true` once the wrapped function has completed a call.
    pub fn has_run(&self) -> bool {
        self.state.lock().result.is_some()
    }

    /// Returns a clone of the stored result without calling anything.
    pub fn result(&self) -> Option<R>
    where
        R: Clone,
    {
        self.state.lock().result.clone()
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for ConcurrentOnce<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        match &state.result {
            Some(result) => formatter.debug_tuple("ConcurrentOnce").field(result).finish(),
            None => formatter
                .debug_tuple("ConcurrentOnce")
                .field(&"<open>")
                .finish(),
        }
    }
}

struct MemoizeState<K, R, F> {
    function: F,
    cache: FastHashMap<K, R>,
}

/// A memoizing wrapper that can be shared between threads.
///
/// Behaves like [`Memoize`](super::Memoize), including the key collision
/// limitation of the default `Display` key. For any one key the wrapped
/// function runs at most once, no matter how many threads ask for it.
pub struct ConcurrentMemoize<A, R, F, K = String, G = DisplayKey<A>> {
    key: G,
    state: Mutex<MemoizeState<K, R, F>>,
    marker: PhantomData<fn(A)>,
}

/// Wraps `function` in a [`ConcurrentMemoize`] keyed by the argument's
/// `Display` rendering.
pub fn concurrent_memoize<A, R, F>(function: F) -> ConcurrentMemoize<A, R, F>
where
    A: Display,
    F: FnMut(A) -> R,
{
    ConcurrentMemoize::with_key(function, display_key::<A> as DisplayKey<A>)
}

/// Wraps `function` in a [`ConcurrentMemoize`] keyed by `key(&argument)`.
pub fn concurrent_memoize_by<A, R, F, K, G>(
    function: F,
    key: G,
) -> ConcurrentMemoize<A, R, F, K, G>
where
    F: FnMut(A) -> R,
    K: Eq + Hash,
    G: Fn(&A) -> K,
{
    ConcurrentMemoize::with_key(function, key)
}

impl<A, R, F, K, G> ConcurrentMemoize<A, R, F, K, G>
where
    F: FnMut(A) -> R,
    K: Eq + Hash,
    G: Fn(&A) -> K,
{
    /// Creates a wrapper with an empty cache and the given key function.
    pub fn with_key(function: F, key: G) -> Self {
        Self {
            key,
            state: Mutex::new(MemoizeState {
                function,
                cache: FastHashMap::default(),
            }),
            marker: PhantomData,
        }
    }

    /// Returns the cached result for `argument`, computing it on a miss.
    pub fn call(&self, argument: A) -> R
    where
        R: Clone,
    {
        let key = (self.key)(&argument);
        let mut state = self.state.lock();
        if let Some(cached) = state.cache.get(&key) {
            tracing::trace!("concurrent memoize cache hit");
            return cached.clone();
        }

        let result = (state.function)(argument);
        tracing::trace!(cached = state.cache.len() + 1, "concurrent memoize cache miss");
        state.cache.insert(key, result.clone());
        result
    }

    /// Returns `true` if a result for `argument`'s key is cached.
    pub fn is_cached(&self, argument: &A) -> bool {
        let key = (self.key)(argument);
        self.state.lock().cache.contains_key(&key)
    }
}

impl<A, R, F, K, G> ConcurrentMemoize<A, R, F, K, G> {
    /// Returns the number of cached results.
    pub fn len(&self) -> usize {
        self.state.lock().cache.len()
    }

    /// Returns `true` when nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl<A, R, F, K, G> fmt::Debug for ConcurrentMemoize<A, R, F, K, G> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("ConcurrentMemoize")
            .field("cached", &self.len())
            .finish_non_exhaustive()
    }
}
