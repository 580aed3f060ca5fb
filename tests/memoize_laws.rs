#![cfg(feature = "function")]
//! Property-based tests for the function combinators.
//!
//! This module verifies that:
//!
//! - **Once**: the target runs exactly once for any sequence of arguments
//! - **Memoize idempotence**: repeated calls return the first result
//! - **Memoize economy**: the target runs once per distinct key

use loscore::function::{memoize, once};
use proptest::prelude::*;
use std::cell::Cell;
use std::collections::HashSet;

proptest! {
    /// Once: N calls with arbitrary arguments invoke the target once and
    /// replay the first result
    #[test]
    fn prop_once_invokes_exactly_once(arguments in prop::collection::vec(any::<i32>(), 1..50)) {
        let invocations = Cell::new(0);
        let gate = once(|value: i32| {
            invocations.set(invocations.get() + 1);
            value.wrapping_mul(3)
        });

        let expected = arguments[0].wrapping_mul(3);
        for argument in &arguments {
            prop_assert_eq!(gate.call(*argument), expected);
        }
        prop_assert_eq!(invocations.get(), 1);
    }
}

proptest! {
    /// Idempotence: calling with the same argument K times invokes the
    /// target once and always returns the same value
    #[test]
    fn prop_memoize_idempotence(value in any::<i64>(), repeats in 1usize..20) {
        let invocations = Cell::new(0);
        let cached = memoize(|argument: i64| {
            invocations.set(invocations.get() + 1);
            argument.wrapping_sub(7)
        });

        let first = cached.call(value);
        for _ in 0..repeats {
            prop_assert_eq!(cached.call(value), first);
        }
        prop_assert_eq!(invocations.get(), 1);
    }
}

proptest! {
    /// Economy: the target runs once per distinct string key
    #[test]
    fn prop_memoize_invokes_once_per_key(arguments in prop::collection::vec(0u8..20, 0..100)) {
        let invocations = Cell::new(0_usize);
        let cached = memoize(|argument: u8| {
            invocations.set(invocations.get() + 1);
            u32::from(argument) * 2
        });

        for argument in &arguments {
            prop_assert_eq!(cached.call(*argument), u32::from(*argument) * 2);
        }

        let distinct: HashSet<String> = arguments.iter().map(ToString::to_string).collect();
        prop_assert_eq!(invocations.get(), distinct.len());
        prop_assert_eq!(cached.len(), distinct.len());
    }
}
