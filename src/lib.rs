//! A generic set: an unordered collection in which every item is unique.
//!
//! # Representation
//! [`Set`] is a map from items to the unit type. The values carry nothing, only the presence of
//! a key matters, so uniqueness is enforced structurally by the map. Iteration order is whatever
//! the map produces and must not be relied upon.
//!
//! A freshly constructed set doesn't allocate. Reading from it behaves exactly like reading from
//! any other empty set and memory is only allocated on the first insertion.
//!
//! # Set Algebra
//! [`union`], [`intersection`] and [`difference`] (and [`symmetric_difference`]) always return a
//! new set, leaving both operands untouched. The lazy, borrowed versions are available as methods
//! on [`Set`], for when a full set isn't needed.
//!
//! # Serialization
//! The external form of a set is a plain list of its items. With the `serde` feature, [`Set`]
//! serializes as a sequence and can be deserialized from one, collapsing duplicates. Decoding into
//! an existing set merges the decoded items in, but only once the whole list has been decoded, so
//! a malformed input never leaves a half-merged set behind. The `json` feature adds
//! [`serde_json`]-backed helpers with strongly typed errors.
//!
//! # Concurrency
//! There is none. All mutation goes through `&mut self`, so sharing a set between threads requires
//! external synchronization, which the borrow checker enforces.
//!
//! ```
//! use uniset::{Set, set};
//!
//! let a = set![1, 2, 3];
//! let b = set![3, 4, 5];
//!
//! assert_eq!(uniset::union(&a, &b), set![1, 2, 3, 4, 5]);
//! assert_eq!(uniset::intersection(&a, &b), set![3]);
//! assert_eq!(uniset::difference(&a, &b), set![1, 2]);
//! ```
#![warn(clippy::missing_const_for_fn)]
#![warn(clippy::missing_panics_doc)]
#![warn(clippy::unwrap_used)]
#![allow(clippy::module_inception)]

pub mod hash;

pub(crate) mod util;

#[doc(inline)]
pub use hash::set::{
    Set, add_keys_from, add_values_from, difference, intersection, symmetric_difference, union,
};

#[cfg(feature = "json")]
#[doc(inline)]
pub use hash::set::{DecodeError, EncodeError};

/// Creates a [`Set`] containing the provided items. Duplicates collapse into a single item.
///
/// ```
/// use uniset::set;
///
/// let s = set![1, 2, 2, 3];
/// assert_eq!(s.len(), 3);
///
/// let empty: uniset::Set<u8> = set![];
/// assert!(empty.is_empty());
/// ```
#[macro_export]
macro_rules! set {
    () => {
        $crate::Set::new()
    };
    ($($item:expr),+ $(,)?) => {
        $crate::Set::of([$($item),+])
    };
}
