//! The container abstraction shared by all traversal primitives.
//!
//! A container is either an ordered sequence, visited in index order, or a
//! keyed mapping from string keys to values, visited in the mapping's own
//! order. The [`Collection`] trait captures "yields `(key, value)` pairs in
//! native order"; [`Container`] is a tagged variant for callers who only know
//! the shape at runtime.

use std::collections::{BTreeMap, HashMap};
use std::fmt;
use std::hash::BuildHasher;

/// The position of an entry within a [`Collection`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Key<'a> {
    /// Zero-based position in an ordered sequence.
    Index(usize),
    /// Key of an entry in a keyed mapping.
    Name(&'a str),
}

impl<'a> Key<'a> {
    /// Returns the index if this key addresses a sequence position.
    #[inline]
    pub const fn as_index(&self) -> Option<usize> {
        match self {
            Self::Index(index) => Some(*index),
            Self::Name(_) => None,
        }
    }

    /// Returns the name if this key addresses a mapping entry.
    #[inline]
    pub const fn as_name(&self) -> Option<&'a str> {
        match self {
            Self::Index(_) => None,
            Self::Name(name) => Some(*name),
        }
    }
}

impl fmt::Display for Key<'_> {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(index) => write!(formatter, "{index}"),
            Self::Name(name) => formatter.write_str(name),
        }
    }
}

/// A container whose entries can be visited in native order.
///
/// Sequences yield [`Key::Index`] keys in ascending order. Mappings yield
/// [`Key::Name`] keys in the order the mapping iterates: ascending for
/// `BTreeMap`, unspecified for `HashMap`.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::{Collection, Key};
/// use std::collections::BTreeMap;
///
/// let sequence = vec!["a", "b"];
/// let keys: Vec<Key<'_>> = sequence.entries().map(|(key, _)| key).collect();
/// assert_eq!(keys, vec![Key::Index(0), Key::Index(1)]);
///
/// let mapping = BTreeMap::from([("y".to_string(), 2), ("x".to_string(), 1)]);
/// let values: Vec<&i32> = Collection::values(&mapping).collect();
/// assert_eq!(values, vec![&1, &2]);
/// ```
pub trait Collection {
    /// The element type.
    type Item;

    /// Iterates over `(key, value)` pairs in native order.
    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &Self::Item)>;

    /// Iterates over values in native order.
    fn values(&self) -> impl Iterator<Item = &Self::Item> {
        self.entries().map(|(_, value)| value)
    }

    /// Returns the number of entries.
    fn size(&self) -> usize {
        self.entries().count()
    }
}

impl<T> Collection for [T] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter()
            .enumerate()
            .map(|(index, value)| (Key::Index(index), value))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, const N: usize> Collection for [T; N] {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }

    #[inline]
    fn size(&self) -> usize {
        N
    }
}

impl<T> Collection for Vec<T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.as_slice().entries()
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T> Collection for BTreeMap<String, T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter().map(|(name, value)| (Key::Name(name.as_str()), value))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

impl<T, S> Collection for HashMap<String, T, S> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        self.iter().map(|(name, value)| (Key::Name(name.as_str()), value))
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// Values with a length that [`size`](super::size) can report.
///
/// Every [`Collection`] measures its entry count. Strings measure their
/// `char` count, not their byte length.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::Measure;
///
/// assert_eq!([1, 2, 3].measure(), 3);
/// assert_eq!("naïve".measure(), 5);
/// ```
pub trait Measure {
    /// Returns the number of entries, or of characters for strings.
    fn measure(&self) -> usize;
}

impl<C: Collection + ?Sized> Measure for C {
    #[inline]
    fn measure(&self) -> usize {
        self.size()
    }
}

impl Measure for str {
    #[inline]
    fn measure(&self) -> usize {
        self.chars().count()
    }
}

impl Measure for String {
    #[inline]
    fn measure(&self) -> usize {
        self.as_str().measure()
    }
}

/// A container whose shape is decided at runtime.
///
/// With the `serde` feature a `Container` serializes untagged: a sequence as
/// an array and a mapping as an object.
///
/// # Examples
///
/// ```rust
/// use loscore::collection::{Collection, Container};
/// use std::collections::BTreeMap;
///
/// let sequence = Container::from(vec![1, 2, 3]);
/// let mapping = Container::from(BTreeMap::from([("a".to_string(), 1)]));
///
/// assert!(sequence.is_sequence());
/// assert!(mapping.is_mapping());
/// assert_eq!(sequence.size() + mapping.size(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Container<T> {
    /// An ordered sequence.
    Sequence(Vec<T>),
    /// A keyed mapping, iterated in ascending key order.
    Mapping(BTreeMap<String, T>),
}

impl<T> Container<T> {
    /// Returns `true` for [`Container::Sequence`].
    #[inline]
    pub const fn is_sequence(&self) -> bool {
        matches!(self, Self::Sequence(_))
    }

    /// Returns `true` for [`Container::Mapping`].
    #[inline]
    pub const fn is_mapping(&self) -> bool {
        matches!(self, Self::Mapping(_))
    }

    /// Returns the number of entries.
    #[inline]
    pub fn len(&self) -> usize {
        match self {
            Self::Sequence(elements) => elements.len(),
            Self::Mapping(entries) => entries.len(),
        }
    }

    /// Returns `true` when the container has no entries.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Looks up an entry by key.
    ///
    /// A [`Key::Index`] never matches a mapping and a [`Key::Name`] never
    /// matches a sequence.
    pub fn get(&self, key: Key<'_>) -> Option<&T> {
        match (self, key) {
            (Self::Sequence(elements), Key::Index(index)) => elements.get(index),
            (Self::Mapping(entries), Key::Name(name)) => entries.get(name),
            _ => None,
        }
    }
}

impl<T> Default for Container<T> {
    fn default() -> Self {
        Self::Sequence(Vec::new())
    }
}

impl<T> From<Vec<T>> for Container<T> {
    fn from(elements: Vec<T>) -> Self {
        Self::Sequence(elements)
    }
}

impl<T> From<BTreeMap<String, T>> for Container<T> {
    fn from(entries: BTreeMap<String, T>) -> Self {
        Self::Mapping(entries)
    }
}

/// Iterator over the entries of either container variant.
enum Entries<S, M> {
    Sequence(S),
    Mapping(M),
}

impl<I, S, M> Iterator for Entries<S, M>
where
    S: Iterator<Item = I>,
    M: Iterator<Item = I>,
{
    type Item = I;

    fn next(&mut self) -> Option<Self::Item> {
        match self {
            Self::Sequence(inner) => inner.next(),
            Self::Mapping(inner) => inner.next(),
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        match self {
            Self::Sequence(inner) => inner.size_hint(),
            Self::Mapping(inner) => inner.size_hint(),
        }
    }
}

impl<T> Collection for Container<T> {
    type Item = T;

    fn entries(&self) -> impl Iterator<Item = (Key<'_>, &T)> {
        match self {
            Self::Sequence(elements) => Entries::Sequence(elements.entries()),
            Self::Mapping(entries) => Entries::Mapping(entries.entries()),
        }
    }

    #[inline]
    fn size(&self) -> usize {
        self.len()
    }
}

/// A value whose fields can be looked up by name.
///
/// Used by [`pluck`](super::pluck). A [`Container::Sequence`] treats a field
/// name that parses as an unsigned integer as a position.
pub trait Record {
    /// The field value type.
    type Value;

    /// Returns the value stored under `name`, if any.
    fn field(&self, name: &str) -> Option<&Self::Value>;
}

impl<V> Record for BTreeMap<String, V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V, S: BuildHasher> Record for HashMap<String, V, S> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        self.get(name)
    }
}

impl<V> Record for Container<V> {
    type Value = V;

    fn field(&self, name: &str) -> Option<&V> {
        match self {
            Self::Sequence(elements) => name
                .parse::<usize>()
                .ok()
                .and_then(|index| elements.get(index)),
            Self::Mapping(entries) => entries.get(name),
        }
    }
}
