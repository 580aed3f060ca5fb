//! Error types shared across the library.
//!
//! Most operations in this crate cannot fail: container shapes are checked by
//! the type system and an empty reduction is reported as `None`. The two
//! failure modes that remain are a method name that the receiver does not
//! understand (see [`invoke`](crate::function::invoke)) and an argument whose
//! runtime shape does not fit the operation (see
//! [`extend_container`](crate::object::extend_container)).

use thiserror::Error;

/// Errors produced by loscore operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoscoreError {
    /// The receiver does not support the requested method.
    #[error("{receiver} does not support method `{method}`")]
    InvalidOperation {
        /// The method name that was requested.
        method: String,
        /// A short name of the receiver type.
        receiver: &'static str,
    },

    /// An argument had a shape the operation cannot work with.
    #[error("invalid argument to {operation}: {reason}")]
    InvalidArgument {
        /// The operation that rejected the argument.
        operation: &'static str,
        /// Why the argument was rejected.
        reason: String,
    },
}

impl LoscoreError {
    /// Builds an [`LoscoreError::InvalidOperation`] for `method` on `receiver`.
    pub fn invalid_operation(method: impl Into<String>, receiver: &'static str) -> Self {
        Self::InvalidOperation {
            method: method.into(),
            receiver,
        }
    }

    /// Builds an [`LoscoreError::InvalidArgument`] for `operation`.
    pub fn invalid_argument(operation: &'static str, reason: impl Into<String>) -> Self {
        Self::InvalidArgument {
            operation,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn invalid_operation_display_names_method_and_receiver() {
        let error = LoscoreError::invalid_operation("shout", "String");
        assert_eq!(error.to_string(), "String does not support method `shout`");
    }

    #[test]
    fn invalid_argument_display_names_operation() {
        let error = LoscoreError::invalid_argument("extend_container", "sequence destination");
        assert_eq!(
            error.to_string(),
            "invalid argument to extend_container: sequence destination"
        );
    }
}
