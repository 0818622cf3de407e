use std::collections::hash_map::{IntoKeys, Keys};
use std::hash::{BuildHasher, Hash};
use std::iter::{Chain, FusedIterator};

use super::Set;

impl<T: Hash + Eq, B: BuildHasher> IntoIterator for Set<T, B> {
    type Item = T;

    type IntoIter = IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        IntoIter(self.inner.into_keys())
    }
}

/// An owned iterator over the items of a [`Set`], in no particular order.
pub struct IntoIter<T> (
    pub(crate) IntoKeys<T, ()>,
);

impl<T> Iterator for IntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for IntoIter<T> {}

impl<T> FusedIterator for IntoIter<T> {}

impl<'a, T: Hash + Eq, B: BuildHasher> IntoIterator for &'a Set<T, B> {
    type Item = &'a T;

    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        Iter(self.inner.keys())
    }
}

/// A borrowed iterator over the items of a [`Set`], in no particular order.
pub struct Iter<'a, T> (
    pub(crate) Keys<'a, T, ()>,
);

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.0.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.0.size_hint()
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Iter(self.0.clone())
    }
}

/// Items of one set which are absent from another, see [`Set::difference`].
pub struct Difference<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, B>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Difference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next && self.other.contains(item) {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Difference<'_, T, B> {}

/// Items in exactly one of two sets, see [`Set::symmetric_difference`].
pub struct SymmetricDifference<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Difference<'a, T, B>, Difference<'a, T, B>>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for SymmetricDifference<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for SymmetricDifference<'_, T, B> {}

/// Items present in both of two sets, see [`Set::intersection`].
pub struct Intersection<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Iter<'a, T>,
    pub(crate) other: &'a Set<T, B>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Intersection<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let mut next = self.inner.next();
        while let Some(item) = next && !self.other.contains(item) {
            next = self.inner.next();
        }
        next
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, self.inner.size_hint().1)
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Intersection<'_, T, B> {}

/// Items present in either of two sets, see [`Set::union`].
pub struct Union<'a, T: Hash + Eq, B: BuildHasher> {
    pub(crate) inner: Chain<Iter<'a, T>, Difference<'a, T, B>>,
}

impl<'a, T: Hash + Eq, B: BuildHasher> Iterator for Union<'a, T, B> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<T: Hash + Eq, B: BuildHasher> FusedIterator for Union<'_, T, B> {}
