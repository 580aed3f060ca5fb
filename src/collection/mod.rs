//! Traversal primitives over ordered sequences and keyed mappings.
//!
//! This module provides:
//!
//! - [`Collection`]: the "visit `(key, value)` pairs in native order" capability
//! - [`Container`]: a sequence-or-mapping value whose shape is known at runtime
//! - [`Record`]: field lookup by name, used by [`pluck`]
//! - [`Measure`]: entry or character count, used by [`size`]
//! - Single-pass primitives: [`each`], [`map`], [`try_map`], [`filter`],
//!   [`reject`], [`pluck`], [`reduce`], [`reduce_first`], [`contains`],
//!   [`every`], [`every_true`], [`index_of`], [`size`]
//!
//! # Examples
//!
//! ```rust
//! use loscore::collection::{contains, every, filter, map, reduce, reduce_first};
//!
//! let numbers = vec![1, 2, 3, 4];
//!
//! assert_eq!(map(&numbers, |value| value * 2), vec![2, 4, 6, 8]);
//! assert_eq!(filter(&numbers, |value| value % 2 == 0), vec![2, 4]);
//! assert_eq!(reduce_first(&numbers, |total, value| total + value), Some(10));
//! assert_eq!(reduce(&numbers, |total, value| total + value, 100), 110);
//! assert!(contains(&numbers, &3));
//! assert!(!every(&numbers, |value| *value > 1));
//! ```

mod container;
mod traversal;

pub use container::{Collection, Container, Key, Measure, Record};
pub use traversal::{
    contains, each, every, every_true, filter, index_of, map, pluck, reduce, reduce_first,
    reject, size, try_map,
};
