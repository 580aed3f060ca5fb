//! Hash map and set aliases selected by the `fxhash` / `ahash` features.
//!
//! `fxhash` wins when both features are enabled. Without either, the standard
//! library's SipHash-based collections are used.

#![allow(dead_code)]

#[cfg(feature = "fxhash")]
pub(crate) type FastHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
#[cfg(feature = "fxhash")]
pub(crate) type FastHashSet<T> = rustc_hash::FxHashSet<T>;

#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type FastHashMap<K, V> = ahash::AHashMap<K, V>;
#[cfg(all(feature = "ahash", not(feature = "fxhash")))]
pub(crate) type FastHashSet<T> = ahash::AHashSet<T>;

#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type FastHashMap<K, V> = std::collections::HashMap<K, V>;
#[cfg(not(any(feature = "fxhash", feature = "ahash")))]
pub(crate) type FastHashSet<T> = std::collections::HashSet<T>;
