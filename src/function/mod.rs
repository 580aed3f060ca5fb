//! Function combinators that wrap a target function with private state.
//!
//! - [`Once`] / [`once`]: run the target at most once and replay its result
//! - [`TryOnce`] / [`try_once`]: like `once`, but a failed call does not
//!   consume the gate
//! - [`Memoize`] / [`memoize`] / [`memoize_by`]: cache results per argument key
//! - [`invoke`] / [`invoke_with`]: call a method on every element of a
//!   collection
//!
//! With the `sync` feature, [`ConcurrentOnce`] and [`ConcurrentMemoize`]
//! provide the same guarantees across threads.
//!
//! Every wrapper owns its state exclusively; two wrappers built from the same
//! function never share a gate or a cache.
//!
//! # Examples
//!
//! ```rust
//! use loscore::function::{invoke, memoize, once};
//!
//! let greet = once(|name: &str| format!("hello, {name}"));
//! assert_eq!(greet.call("ada"), "hello, ada");
//! assert_eq!(greet.call("grace"), "hello, ada");
//!
//! let length = memoize(|word: &str| word.len());
//! assert_eq!(length.call("memo"), 4);
//! assert_eq!(length.len(), 1);
//!
//! let shouted = invoke(&["a", "b"], "to_uppercase").unwrap();
//! assert_eq!(shouted, vec!["A", "B"]);
//! ```

#[cfg(feature = "sync")]
mod concurrent;
mod invoke;
mod memoize;
mod once;

#[cfg(feature = "sync")]
pub use concurrent::{
    ConcurrentMemoize, ConcurrentOnce, concurrent_memoize, concurrent_memoize_by, concurrent_once,
};
pub use invoke::{Invocable, invoke, invoke_with};
pub use memoize::{DisplayKey, Memoize, memoize, memoize_by};
pub use once::{Once, TryOnce, once, try_once};
