//! Call-once gates.
//!
//! [`Once`] wraps a function so that only its first successful call reaches
//! the function; every later call returns the stored result. [`TryOnce`] does
//! the same for fallible functions and keeps the gate open until a call
//! succeeds.
//!
//! # Examples
//!
//! ```rust
//! use loscore::function::once;
//! use std::cell::Cell;
//!
//! let initialized = Cell::new(0);
//! let initialize = once(|label: &str| {
//!     initialized.set(initialized.get() + 1);
//!     format!("ready: {label}")
//! });
//!
//! assert_eq!(initialize.call("first"), "ready: first");
//! assert_eq!(initialize.call("second"), "ready: first");
//! assert_eq!(initialized.get(), 1);
//! ```

use std::cell::RefCell;
use std::fmt;
use std::marker::PhantomData;

/// Whether a gate has let a call through yet.
enum GateState<R> {
    Open,
    Closed(R),
}

/// A function wrapper that invokes its target at most once.
///
/// The first [`call`](Once::call) runs the target with its argument and
/// stores the result. Every later call returns a clone of that result without
/// running the target or looking at the new argument. A target returning `()`
/// or `None` still closes the gate.
///
/// If the target panics, the gate stays open and the next call tries again.
///
/// # Thread Safety
///
/// `Once` uses `RefCell` internally and is not `Sync`. Use
/// [`ConcurrentOnce`](super::ConcurrentOnce) to share a gate between threads.
///
/// # Examples
///
/// ```rust
/// use loscore::function::Once;
///
/// let square = Once::new(|value: i32| value * value);
///
/// assert!(!square.has_run());
/// assert_eq!(square.call(3), 9);
/// assert_eq!(square.call(10), 9);
/// assert_eq!(square.result(), Some(9));
/// ```
pub struct Once<A, R, F> {
    function: RefCell<F>,
    state: RefCell<GateState<R>>,
    marker: PhantomData<fn(A)>,
}

/// Wraps `function` in a [`Once`] gate.
#[inline]
pub fn once<A, R, F>(function: F) -> Once<A, R, F>
where
    F: FnMut(A) -> R,
{
    Once::new(function)
}

impl<A, R, F> Once<A, R, F>
where
    F: FnMut(A) -> R,
{
    /// Creates an open gate around `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function: RefCell::new(function),
            state: RefCell::new(GateState::Open),
            marker: PhantomData,
        }
    }

    /// Calls the wrapped function, or returns the result of the first call.
    ///
    /// # Panics
    ///
    /// Panics if called again from inside the wrapped function while the
    /// first call is still running.
    pub fn call(&self, argument: A) -> R
    where
        R: Clone,
    {
        if let GateState::Closed(result) = &*self.state.borrow() {
            tracing::trace!("once gate closed; returning stored result");
            return result.clone();
        }

        let result = {
            let mut function = self.function.borrow_mut();
            (*function)(argument)
        };
        tracing::trace!("once gate triggered");
        *self.state.borrow_mut() = GateState::Closed(result.clone());
        result
    }
}

impl<A, R, F> Once<A, R, F> {
    /// Returns `true` once the wrapped function has completed a call.
    #[inline]
    pub fn has_run(&self) -> bool {
        matches!(&*self.state.borrow(), GateState::Closed(_))
    }

    /// Returns a clone of the stored result without calling anything.
    pub fn result(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            GateState::Closed(result) => Some(result.clone()),
            GateState::Open => None,
        }
    }
}

impl<A, R: fmt::Debug, F> fmt::Debug for Once<A, R, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            GateState::Closed(result) => formatter.debug_tuple("Once").field(result).finish(),
            GateState::Open => formatter.debug_tuple("Once").field(&"<open>").finish(),
        }
    }
}

/// A call-once gate for fallible functions.
///
/// An `Err` from the wrapped function is handed back to the caller and leaves
/// the gate open, so a failed attempt can be retried. The first `Ok` closes
/// the gate; from then on every call returns a clone of that value.
///
/// # Examples
///
/// ```rust
/// use loscore::function::try_once;
///
/// let connect = try_once(|attempt: u32| {
///     if attempt < 2 { Err(format!("attempt {attempt} refused")) } else { Ok(attempt) }
/// });
///
/// assert!(connect.call(1).is_err());
/// assert!(!connect.has_run());
/// assert_eq!(connect.call(2), Ok(2));
/// assert_eq!(connect.call(5), Ok(2));
/// ```
pub struct TryOnce<A, R, E, F> {
    function: RefCell<F>,
    state: RefCell<GateState<R>>,
    marker: PhantomData<fn(A) -> E>,
}

/// Wraps a fallible `function` in a [`TryOnce`] gate.
#[inline]
pub fn try_once<A, R, E, F>(function: F) -> TryOnce<A, R, E, F>
where
    F: FnMut(A) -> Result<R, E>,
{
    TryOnce::new(function)
}

impl<A, R, E, F> TryOnce<A, R, E, F>
where
    F: FnMut(A) -> Result<R, E>,
{
    /// Creates an open gate around `function`.
    #[inline]
    pub const fn new(function: F) -> Self {
        Self {
            function: RefCell::new(function),
            state: RefCell::new(GateState::Open),
            marker: PhantomData,
        }
    }

    /// Calls the wrapped function until it first succeeds, then returns the
    /// stored value.
    ///
    /// # Errors
    ///
    /// Returns the wrapped function's error unchanged. The gate stays open.
    ///
    /// # Panics
    ///
    /// Panics if called again from inside the wrapped function.
    pub fn call(&self, argument: A) -> Result<R, E>
    where
        R: Clone,
    {
        if let GateState::Closed(result) = &*self.state.borrow() {
            return Ok(result.clone());
        }

        let outcome = {
            let mut function = self.function.borrow_mut();
            (*function)(argument)
        };
        match outcome {
            Ok(result) => {
                tracing::trace!("try_once gate triggered");
                *self.state.borrow_mut() = GateState::Closed(result.clone());
                Ok(result)
            }
            Err(error) => {
                tracing::trace!("try_once attempt failed; gate stays open");
                Err(error)
            }
        }
    }
}

impl<A, R, E, F> TryOnce<A, R, E, F> {
    /// Returns `true` once the wrapped function has succeeded.
    #[inline]
    pub fn has_run(&self) -> bool {
        matches!(&*self.state.borrow(), GateState::Closed(_))
    }

    /// Returns a clone of the stored value without calling anything.
    pub fn result(&self) -> Option<R>
    where
        R: Clone,
    {
        match &*self.state.borrow() {
            GateState::Closed(result) => Some(result.clone()),
            GateState::Open => None,
        }
    }
}

impl<A, R: fmt::Debug, E, F> fmt::Debug for TryOnce<A, R, E, F> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &*self.state.borrow() {
            GateState::Closed(result) => formatter.debug_tuple("TryOnce").field(result).finish(),
            GateState::Open => formatter.debug_tuple("TryOnce").field(&"<open>").finish(),
        }
    }
}
