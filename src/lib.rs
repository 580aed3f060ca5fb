//! # loscore
//!
//! Collection traversal helpers and function combinators for Rust.
//!
//! ## Overview
//!
//! - **Basics**: `identity`, `add`
//! - **Arrays**: `head`, `tail`, `take`, `take_right`, `uniq`
//! - **Collections**: `each`, `map`, `filter`, `reject`, `pluck`, `reduce`,
//!   `contains`, `every`, `index_of`, `size` over sequences and keyed mappings
//! - **Objects**: `extend`
//! - **Functions**: `once`, `memoize`, `invoke`, with thread-safe variants
//!
//! ## Feature Flags
//!
//! - `array`: Slice helpers
//! - `collection`: Traversal primitives and the `Collection` abstraction
//! - `object`: Map extension
//! - `function`: Function combinators
//! - `sync`: Thread-safe combinators (`parking_lot`)
//! - `serde`: Serialization for `Container`
//! - `fxhash` / `ahash`: Faster hashers for memoize caches and `uniq`
//! - `full`: Enable all features
//!
//! ## Example
//!
//! ```rust
//! use loscore::prelude::*;
//!
//! let doubled = map(&[1, 2, 3], |value| value * 2);
//! assert_eq!(doubled, vec![2, 4, 6]);
//!
//! let total = reduce_first(&doubled, |sum, value| sum + value);
//! assert_eq!(total, Some(12));
//!
//! let first_total = once(|value: i32| value + 1);
//! assert_eq!(first_total.call(1), 2);
//! assert_eq!(first_total.call(100), 2);
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![warn(clippy::nursery)]

/// Prelude module for convenient imports.
///
/// Re-exports every public function and type of the enabled modules.
///
/// # Usage
///
/// ```rust
/// use loscore::prelude::*;
/// ```
pub mod prelude {
    pub use crate::basics::*;
    pub use crate::error::LoscoreError;

    #[cfg(feature = "array")]
    pub use crate::array::*;

    #[cfg(feature = "collection")]
    pub use crate::collection::*;

    #[cfg(feature = "object")]
    pub use crate::object::*;

    #[cfg(feature = "function")]
    pub use crate::function::*;
}

pub mod basics;
pub mod error;
mod hash;

#[cfg(feature = "array")]
pub mod array;

#[cfg(feature = "collection")]
pub mod collection;

#[cfg(feature = "object")]
pub mod object;

#[cfg(feature = "function")]
pub mod function;

pub use error::LoscoreError;
