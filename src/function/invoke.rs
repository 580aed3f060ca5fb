//! Calling a method on every element of a collection.
//!
//! [`invoke`] looks the method up by name through the [`Invocable`]
//! capability; [`invoke_with`] takes the function directly and hands it each
//! element as its receiver.

use crate::collection::{Collection, map, try_map};
use crate::error::LoscoreError;

/// Values that can run one of their zero-argument methods by name.
///
/// # Examples
///
/// ```rust
/// use loscore::function::Invocable;
///
/// assert_eq!("  padded ".invoke_method("trim"), Ok("padded".to_string()));
/// assert_eq!((-4_i32).invoke_method("abs"), Ok(4));
/// assert!("text".invoke_method("explode").is_err());
/// ```
pub trait Invocable {
    /// The result type of every supported method.
    type Output;

    /// Runs the method called `method`.
    ///
    /// # Errors
    ///
    /// Returns [`LoscoreError::InvalidOperation`] when the receiver has no
    /// method with that name.
    fn invoke_method(&self, method: &str) -> Result<Self::Output, LoscoreError>;
}

impl<T: Invocable + ?Sized> Invocable for &T {
    type Output = T::Output;

    #[inline]
    fn invoke_method(&self, method: &str) -> Result<Self::Output, LoscoreError> {
        (**self).invoke_method(method)
    }
}

impl Invocable for str {
    type Output = String;

    fn invoke_method(&self, method: &str) -> Result<String, LoscoreError> {
        match method {
            "to_uppercase" => Ok(self.to_uppercase()),
            "to_lowercase" => Ok(self.to_lowercase()),
            "to_ascii_uppercase" => Ok(self.to_ascii_uppercase()),
            "to_ascii_lowercase" => Ok(self.to_ascii_lowercase()),
            "trim" => Ok(self.trim().to_owned()),
            "trim_start" => Ok(self.trim_start().to_owned()),
            "trim_end" => Ok(self.trim_end().to_owned()),
            "to_string" => Ok(self.to_owned()),
            _ => Err(LoscoreError::invalid_operation(method, "str")),
        }
    }
}

impl Invocable for String {
    type Output = String;

    #[inline]
    fn invoke_method(&self, method: &str) -> Result<String, LoscoreError> {
        self.as_str().invoke_method(method)
    }
}

macro_rules! impl_invocable_for_signed {
    ($($integer:ty),* $(,)?) => {
        $(
            impl Invocable for $integer {
                type Output = $integer;

                fn invoke_method(&self, method: &str) -> Result<$integer, LoscoreError> {
                    match method {
                        "abs" => Ok(self.saturating_abs()),
                        "signum" => Ok(self.signum()),
                        _ => Err(LoscoreError::invalid_operation(method, stringify!($integer))),
                    }
                }
            }
        )*
    };
}

impl_invocable_for_signed!(i8, i16, i32, i64, i128, isize);

macro_rules! impl_invocable_for_float {
    ($($float:ty),* $(,)?) => {
        $(
            impl Invocable for $float {
                type Output = $float;

                fn invoke_method(&self, method: &str) -> Result<$float, LoscoreError> {
                    match method {
                        "abs" => Ok(self.abs()),
                        "signum" => Ok(self.signum()),
                        "floor" => Ok(self.floor()),
                        "ceil" => Ok(self.ceil()),
                        "round" => Ok(self.round()),
                        "trunc" => Ok(self.trunc()),
                        "fract" => Ok(self.fract()),
                        "sqrt" => Ok(self.sqrt()),
                        _ => Err(LoscoreError::invalid_operation(method, stringify!($float))),
                    }
                }
            }
        )*
    };
}

impl_invocable_for_float!(f32, f64);

/// Runs the method named `method` on every element, in order.
///
/// The call aborts at the first element that does not support the method;
/// no partial results are returned.
///
/// # Errors
///
/// Returns [`LoscoreError::InvalidOperation`] from the first failing element.
///
/// # Examples
///
/// ```rust
/// use loscore::function::invoke;
///
/// assert_eq!(
///     invoke(&["hello", "world"], "to_uppercase"),
///     Ok(vec!["HELLO".to_string(), "WORLD".to_string()])
/// );
/// assert!(invoke(&["hello"], "reverse").is_err());
/// ```
pub fn invoke<C>(
    collection: &C,
    method: &str,
) -> Result<Vec<<C::Item as Invocable>::Output>, LoscoreError>
where
    C: Collection + ?Sized,
    C::Item: Invocable,
{
    try_map(collection, |element| element.invoke_method(method)).inspect_err(|error| {
        tracing::debug!(%error, "invoke aborted");
    })
}

/// Calls `function` with every element as its receiver, in order.
///
/// # Examples
///
/// ```rust
/// use loscore::function::invoke_with;
///
/// let lengths = invoke_with(&vec!["one".to_string(), "three".to_string()], String::len);
/// assert_eq!(lengths, vec![3, 5]);
/// ```
pub fn invoke_with<C, R, F>(collection: &C, function: F) -> Vec<R>
where
    C: Collection + ?Sized,
    F: FnMut(&C::Item) -> R,
{
    map(collection, function)
}
