//! A module containing [`Set`] and associated types and functions.
//!
//! Some of these types provide owned and borrowed iteration over a set's items while others are
//! iterators over the result of set operations on two Sets. The free functions [`union`],
//! [`intersection`], [`difference`] and [`symmetric_difference`] collect those iterators into new
//! sets.
//!
//! As a note, there is no mutable iterator over the items of a set because mutating the entries
//! in place would cause a logic error.
//!
//! [`Set`] is also re-exported under the parent module.

mod adapters;
mod algebra;
mod codec;
mod hash_set;
mod iter;

#[cfg(feature = "json")]
mod error;


pub use adapters::*;
pub use algebra::*;
pub use hash_set::*;
pub use iter::*;

#[cfg(feature = "json")]
pub use error::*;
