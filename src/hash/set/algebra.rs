use std::hash::{BuildHasher, Hash};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Set;

/// Returns a new set of the items which are members of either `a` or `b`.
///
/// Neither operand is modified and both may be the same set.
///
/// ```
/// use uniset::{set, union};
///
/// let u = union(&set![1, 2, 3], &set![3, 4, 5]);
/// assert_eq!(u.len(), 5);
/// ```
pub fn union<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Default,
{
    let mut out = Set::with_cap_and_hasher(a.len().max(b.len()), B::default());
    out.extend(a.union(b).cloned());
    out
}

/// Returns a new set of the items which are members of both `a` and `b`.
pub fn intersection<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Default,
{
    a.intersection(b).cloned().collect()
}

/// Returns a new set of the items which are members of `a` but not of `b`. Unlike [`union`] and
/// [`intersection`], the order of the operands matters.
pub fn difference<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Default,
{
    a.difference(b).cloned().collect()
}

/// Returns a new set of the items which are members of exactly one of `a` and `b`.
pub fn symmetric_difference<T, B>(a: &Set<T, B>, b: &Set<T, B>) -> Set<T, B>
where
    T: Hash + Eq + Clone,
    B: BuildHasher + Default,
{
    a.symmetric_difference(b).cloned().collect()
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitor(self, rhs: Self) -> Self::Output {
        union(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for Set<T, B> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitand(self, rhs: Self) -> Self::Output {
        intersection(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for Set<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &Set<T, B> {
    type Output = Set<T, B>;

    fn bitxor(self, rhs: Self) -> Self::Output {
        symmetric_difference(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for Set<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.add(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &Set<T, B> {
    type Output = Set<T, B>;

    fn sub(self, rhs: Self) -> Self::Output {
        difference(self, rhs)
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for Set<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        self.remove_set(&rhs)
    }
}
