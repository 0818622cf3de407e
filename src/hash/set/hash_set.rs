use std::borrow::Borrow;
use std::collections::HashMap;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};

use super::{Difference, Intersection, Iter, SymmetricDifference, Union};
use crate::util::fmt::{DebugRaw, write_set};

/// An unordered collection of items, wherein each item is unique.
///
/// Set is a map of items to the unit type: only the presence of a key carries any information. It
/// is a logic error for an item to be modified in a way that changes its hash or equality while it
/// is in the set. Because of this, Set's API never hands out mutable access to its items.
///
/// Iteration order is unspecified and may change between runs, or between two calls on a set that
/// was modified in between.
///
/// A Set created with [`new`](Set::new) or [`default`](Default::default) doesn't allocate until
/// the first item is added, but is otherwise indistinguishable from any other empty set.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the Set.
/// - `m`: The number of items in the other collection.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `add` | `O(1)`* |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `contains_all` | `O(m)`* |
/// | `add_all`, `add_set` | `O(m)`* |
/// | `remove_all`, `remove_set` | `O(m)`* |
/// | `items` | `O(n)` |
/// | `clear` | `O(n)` |
///
/// \* Amortized, assuming a reasonable hash distribution.
pub struct Set<T: Hash + Eq, B: BuildHasher = RandomState> {
    // Unit values occupy no space, leaving a map that only tracks keys.
    pub(crate) inner: HashMap<T, (), B>,
}

impl<T: Hash + Eq> Set<T> {
    /// Creates a new, empty Set using [`RandomState`]. No memory is allocated until an item is
    /// added.
    pub fn new() -> Set<T> {
        Set::with_hasher(RandomState::new())
    }

    /// Creates a new Set with enough capacity for `cap` items to be added without reallocation.
    pub fn with_cap(cap: usize) -> Set<T> {
        Set::with_cap_and_hasher(cap, RandomState::new())
    }

    /// Creates a new Set containing exactly the distinct items of `items`. Duplicate items collapse
    /// into a single entry.
    ///
    /// ```
    /// use uniset::Set;
    ///
    /// let set: Set<_> = Set::of([1, 2, 2, 3, 1]);
    /// assert_eq!(set.len(), 3);
    /// ```
    pub fn of<I: IntoIterator<Item = T>>(items: I) -> Set<T> {
        items.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    /// Creates a new, empty Set which will use the provided `hasher`.
    pub fn with_hasher(hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_hasher(hasher),
        }
    }

    /// Creates a new Set with the provided `cap`acity and `hasher`.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> Set<T, B> {
        Set {
            inner: HashMap::with_capacity_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of distinct items in the Set.
    pub fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the Set contains no items.
    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Returns the number of items the Set can hold without reallocating.
    pub fn cap(&self) -> usize {
        self.inner.capacity()
    }

    /// Returns a reference to the Set's hasher.
    pub fn hasher(&self) -> &B {
        self.inner.hasher()
    }

    /// Returns true if `item` is in the Set.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains_key(item)
    }

    /// Returns true if every one of `items` is in the Set. Checking stops at the first missing
    /// item, and an empty `items` is always contained.
    ///
    /// ```
    /// use uniset::set;
    ///
    /// let set = set![1, 2, 3];
    /// assert!(set.contains_all(&[1, 3]));
    /// assert!(!set.contains_all(&[3, 4]));
    /// assert!(set.contains_all(&[] as &[i32]));
    /// ```
    pub fn contains_all<'a, Q, I>(&self, items: I) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        items.into_iter().all(|item| self.contains(item))
    }

    /// Returns all items in the Set as an owned list, in no particular order. The list contains no
    /// duplicates and its length is always [`len`](Set::len).
    pub fn items(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }

    /// Returns an iterator over all items in the Set, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Removes all items from the Set, keeping the allocated memory for reuse.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Adds `item` to the Set. Returns true if the item was not already present, otherwise the
    /// Set is left unchanged and the provided item is dropped.
    pub fn add(&mut self, item: T) -> bool {
        // An existing key is kept as is, only the unit value is replaced.
        self.inner.insert(item, ()).is_none()
    }

    /// Adds every one of `items` to the Set, as if by calling [`add`](Set::add) on each.
    pub fn add_all<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.extend(items)
    }

    /// Adds every item of `other` to the Set.
    pub fn add_set<O: BuildHasher>(&mut self, other: &Set<T, O>)
    where
        T: Clone,
    {
        self.reserve(other.len());
        for item in other {
            if !self.contains(item) {
                self.inner.insert(item.clone(), ());
            }
        }
    }

    /// Removes `item` from the Set, returning true if it was present. Removing an item that isn't
    /// present is not an error.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes every one of `items` that is present in the Set, ignoring the rest.
    pub fn remove_all<'a, Q, I>(&mut self, items: I)
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized + 'a,
        I: IntoIterator<Item = &'a Q>,
    {
        for item in items {
            self.remove(item);
        }
    }

    /// Removes every item of `other` from the Set.
    pub fn remove_set<O: BuildHasher>(&mut self, other: &Set<T, O>) {
        // Walk whichever side is smaller.
        if other.len() < self.len() {
            for item in other {
                self.remove(item);
            }
        } else {
            self.retain(|item| !other.contains(item));
        }
    }

    /// Keeps only the items for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        self.inner.retain(|item, _| keep(item))
    }

    /// Reserves capacity for at least `extra` more items.
    pub fn reserve(&mut self, extra: usize) {
        self.inner.reserve(extra)
    }

    /// Creates a borrowed iterator over all items that are in `self` but not `other`.
    /// (`self \ other`)
    pub fn difference<'a>(&'a self, other: &'a Set<T, B>) -> Difference<'a, T, B> {
        Difference {
            inner: self.iter(),
            other,
        }
    }

    /// Creates a borrowed iterator over all items that are in `self` or `other` but not both.
    /// (`self △ other`)
    pub fn symmetric_difference<'a>(&'a self, other: &'a Set<T, B>) -> SymmetricDifference<'a, T, B> {
        SymmetricDifference {
            inner: self.difference(other).chain(other.difference(self)),
        }
    }

    /// Creates a borrowed iterator over all items that are in both `self` and `other`.
    /// (`self ∩ other`)
    pub fn intersection<'a>(&'a self, other: &'a Set<T, B>) -> Intersection<'a, T, B> {
        // Iterate the smaller set, probe the larger.
        let (smaller, larger) = match self.len() <= other.len() {
            true => (self, other),
            false => (other, self),
        };
        Intersection {
            inner: smaller.iter(),
            other: larger,
        }
    }

    /// Creates a borrowed iterator over all items that are in either `self` or `other`.
    /// (`self ∪ other`)
    pub fn union<'a>(&'a self, other: &'a Set<T, B>) -> Union<'a, T, B> {
        Union {
            inner: self.iter().chain(other.difference(self)),
        }
    }

    /// Returns true if `other` contains every item of `self`. (`self ⊆ other`)
    pub fn is_subset(&self, other: &Set<T, B>) -> bool {
        self.len() <= other.len() && self.iter().all(|item| other.contains(item))
    }

    /// Returns true if `self` contains every item of `other`. (`self ⊇ other`)
    pub fn is_superset(&self, other: &Set<T, B>) -> bool {
        other.is_subset(self)
    }

    /// Returns true if `self` and `other` have no items in common.
    pub fn is_disjoint(&self, other: &Set<T, B>) -> bool {
        self.intersection(other).next().is_none()
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for Set<T, B> {
    fn default() -> Self {
        Set::with_hasher(B::default())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for Set<T, B> {
    fn clone(&self) -> Self {
        Set {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for Set<T, B> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for Set<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for Set<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(value: I) -> Self {
        let mut set = Set::default();
        set.extend(value);
        set
    }
}

impl<T: Hash + Eq, const N: usize> From<[T; N]> for Set<T> {
    fn from(value: [T; N]) -> Self {
        Set::of(value)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Duplicates may make the hint an overestimate, so only reserve up front for an empty set.
        if self.is_empty() {
            self.reserve(iter.size_hint().0);
        }
        for item in iter {
            self.add(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for Set<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher> Debug for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Set")
            .field(
                "contents",
                &DebugRaw::new(|f| {
                    write_set(f, self.iter(), |f, item| write!(f, "{item:?}"))
                }),
            )
            .field("len", &self.len())
            .field("cap", &self.cap())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for Set<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_set(f, self.iter(), |f, item| write!(f, "{item}"))
    }
}
