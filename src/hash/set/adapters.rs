//! Helpers for deriving a [`Set`] from the keys or values of a map.
//!
//! Both functions accept anything that iterates as `(&K, &V)` pairs, which covers `&HashMap`,
//! `&BTreeMap` and their `iter()` adapters.

use std::hash::{BuildHasher, Hash};

use super::Set;

/// Adds every key of `src` to `dst`.
///
/// ```
/// use std::collections::HashMap;
/// use uniset::{Set, add_keys_from};
///
/// let ages = HashMap::from([("ann", 31), ("bob", 27)]);
/// let mut names = Set::new();
/// add_keys_from(&mut names, &ages);
/// assert!(names.contains_all(&["ann", "bob"]));
/// ```
pub fn add_keys_from<'a, K, V, B, M>(dst: &mut Set<K, B>, src: M)
where
    K: Hash + Eq + Clone + 'a,
    V: 'a,
    B: BuildHasher,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    dst.extend(src.into_iter().map(|(key, _)| key.clone()))
}

/// Adds every value of `src` to `dst`. Values shared by several keys end up in `dst` once.
pub fn add_values_from<'a, K, V, B, M>(dst: &mut Set<V, B>, src: M)
where
    K: 'a,
    V: Hash + Eq + Clone + 'a,
    B: BuildHasher,
    M: IntoIterator<Item = (&'a K, &'a V)>,
{
    dst.extend(src.into_iter().map(|(_, value)| value.clone()))
}
