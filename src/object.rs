//! Extending keyed mappings with the entries of other mappings.
//!
//! # Examples
//!
//! ```rust
//! use loscore::object::extend;
//! use std::collections::BTreeMap;
//!
//! let defaults = BTreeMap::from([("color".to_string(), "red"), ("size".to_string(), "m")]);
//! let chosen = BTreeMap::from([("size".to_string(), "xl")]);
//!
//! let merged = extend(defaults, [chosen]);
//! assert_eq!(merged["color"], "red");
//! assert_eq!(merged["size"], "xl");
//! ```

use std::collections::BTreeMap;

use crate::collection::Container;
use crate::error::LoscoreError;

/// Assigns every entry of every source into `destination` and returns it.
///
/// Sources are applied in order, so a key present in several sources ends
/// up with the value from the last one. Works for any map that implements
/// [`Extend`] over `(key, value)` pairs.
///
/// # Examples
///
/// ```rust
/// use loscore::object::extend;
/// use std::collections::HashMap;
///
/// let base = HashMap::from([("a", 1)]);
/// let merged = extend(base, [HashMap::from([("b", 2)]), HashMap::from([("a", 3)])]);
///
/// assert_eq!(merged, HashMap::from([("a", 3), ("b", 2)]));
/// ```
pub fn extend<M, I, S, K, V>(mut destination: M, sources: I) -> M
where
    M: Extend<(K, V)>,
    I: IntoIterator<Item = S>,
    S: IntoIterator<Item = (K, V)>,
{
    for source in sources {
        destination.extend(source);
    }
    destination
}

/// [`extend`] for runtime-shaped containers.
///
/// A sequence source contributes its elements under the keys `"0"`, `"1"`,
/// and so on.
///
/// # Errors
///
/// Returns [`LoscoreError::InvalidArgument`] when `destination` is a
/// [`Container::Sequence`], which cannot hold named keys.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::Container;
/// use loscore::object::extend_container;
/// use std::collections::BTreeMap;
///
/// let destination = Container::from(BTreeMap::from([("a".to_string(), 1)]));
/// let merged = extend_container(destination, [Container::from(vec![7])]).unwrap();
///
/// assert_eq!(
///     merged,
///     Container::from(BTreeMap::from([("0".to_string(), 7), ("a".to_string(), 1)]))
/// );
/// ```
pub fn extend_container<T, I>(
    destination: Container<T>,
    sources: I,
) -> Result<Container<T>, LoscoreError>
where
    I: IntoIterator<Item = Container<T>>,
{
    let Container::Mapping(entries) = destination else {
        return Err(LoscoreError::invalid_argument(
            "extend_container",
            "a sequence destination cannot receive named keys",
        ));
    };

    let merged = extend(entries, sources.into_iter().map(into_named_entries));
    Ok(Container::Mapping(merged))
}

fn into_named_entries<T>(source: Container<T>) -> BTreeMap<String, T> {
    match source {
        Container::Sequence(elements) => elements
            .into_iter()
            .enumerate()
            .map(|(index, element)| (index.to_string(), element))
            .collect(),
        Container::Mapping(entries) => entries,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extend_without_sources_returns_destination() {
        let destination = BTreeMap::from([("a".to_string(), 1)]);
        let merged = extend(destination.clone(), Vec::<BTreeMap<String, i32>>::new());
        assert_eq!(merged, destination);
    }

    #[test]
    fn test_extend_container_rejects_sequence_destination() {
        let result = extend_container(Container::from(vec![1]), [Container::from(vec![2])]);
        assert!(matches!(result, Err(LoscoreError::InvalidArgument { .. })));
    }
}
