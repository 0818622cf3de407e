//! The list encoding of a [`Set`].
//!
//! Externally, a set is a list of its items, each exactly once, in whatever order the set
//! enumerates them. [`Set::export`] and [`Set::import`] work with an already decoded list and don't
//! depend on any serialization library. With the `serde` feature, Set is (de)serializable as a
//! sequence in any serde format, and the `json` feature adds helpers built on [`serde_json`].
//!
//! Decoding into an existing set always decodes the complete list before touching the set, so a
//! malformed input leaves the target exactly as it was.

use std::hash::{BuildHasher, Hash};

use super::Set;

impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
    /// Returns the list form of the Set: every item exactly once, in no particular order.
    pub fn export(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.items()
    }

    /// Merges a decoded list into the Set. The list may contain duplicates and items which are
    /// already present; the result is the distinct union of both.
    pub fn import<I: IntoIterator<Item = T>>(&mut self, items: I) {
        self.add_all(items)
    }
}

#[cfg(feature = "serde")]
mod serde_impl {
    use std::fmt::{self, Formatter};
    use std::hash::{BuildHasher, Hash};
    use std::marker::PhantomData;

    use serde::de::{Deserialize, Deserializer, SeqAccess, Visitor};
    use serde::ser::{Serialize, SerializeSeq, Serializer};

    use crate::hash::set::Set;

    // Caps the up front reservation, a hostile length hint shouldn't decide our allocation.
    const MAX_PREALLOCATED_ITEMS: usize = 4096;

    impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
        /// Decodes a list of items from `deserializer` and merges it into the Set.
        ///
        /// The whole list is decoded before any item is added, so on error the Set is unchanged.
        pub fn merge_from<'de, D>(&mut self, deserializer: D) -> Result<(), D::Error>
        where
            T: Deserialize<'de>,
            D: Deserializer<'de>,
        {
            let items = Vec::<T>::deserialize(deserializer)?;
            self.import(items);
            Ok(())
        }
    }

    impl<T: Hash + Eq + Serialize, B: BuildHasher> Serialize for Set<T, B> {
        fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
            let mut seq = serializer.serialize_seq(Some(self.len()))?;
            for item in self {
                seq.serialize_element(item)?;
            }
            seq.end()
        }
    }

    struct SetVisitor<T, B> {
        marker: PhantomData<fn() -> (T, B)>,
    }

    impl<'de, T, B> Visitor<'de> for SetVisitor<T, B>
    where
        T: Hash + Eq + Deserialize<'de>,
        B: BuildHasher + Default,
    {
        type Value = Set<T, B>;

        fn expecting(&self, formatter: &mut Formatter<'_>) -> fmt::Result {
            formatter.write_str("a list of set items")
        }

        fn visit_seq<A: SeqAccess<'de>>(self, mut seq: A) -> Result<Self::Value, A::Error> {
            let cap = seq.size_hint().unwrap_or(0).min(MAX_PREALLOCATED_ITEMS);
            let mut set = Set::with_cap_and_hasher(cap, B::default());
            while let Some(item) = seq.next_element()? {
                set.add(item);
            }
            Ok(set)
        }
    }

    impl<'de, T, B> Deserialize<'de> for Set<T, B>
    where
        T: Hash + Eq + Deserialize<'de>,
        B: BuildHasher + Default,
    {
        fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
            deserializer.deserialize_seq(SetVisitor {
                marker: PhantomData,
            })
        }
    }
}

#[cfg(feature = "json")]
mod json {
    use std::hash::{BuildHasher, Hash};

    use serde::Serialize;
    use serde::de::DeserializeOwned;

    use crate::hash::set::{DecodeError, EncodeError, Set};

    impl<T: Hash + Eq, B: BuildHasher> Set<T, B> {
        /// Encodes the Set as a JSON array.
        ///
        /// ```
        /// use uniset::set;
        ///
        /// assert_eq!(set![7].to_json().unwrap(), "[7]");
        /// ```
        pub fn to_json(&self) -> Result<String, EncodeError>
        where
            T: Serialize,
        {
            Ok(serde_json::to_string(self)?)
        }

        /// Decodes a new Set from a JSON array. Duplicate items collapse.
        pub fn from_json(json: &str) -> Result<Set<T, B>, DecodeError>
        where
            T: DeserializeOwned,
            B: Default,
        {
            let mut set = Set::default();
            set.merge_json(json)?;
            Ok(set)
        }

        /// Decodes a JSON array and merges its items into the Set. If `json` is not an array of
        /// items, an error is returned and the Set is left unchanged.
        ///
        /// ```
        /// use uniset::set;
        ///
        /// let mut s = set![1, 2, 3];
        /// s.merge_json("[1, 4, 6, 1, 6, 2]").unwrap();
        /// assert_eq!(s, set![1, 2, 3, 4, 6]);
        ///
        /// assert!(s.merge_json("{\"a\": 1}").is_err());
        /// assert_eq!(s.len(), 5);
        /// ```
        pub fn merge_json(&mut self, json: &str) -> Result<(), DecodeError>
        where
            T: DeserializeOwned,
        {
            let items: Vec<T> = serde_json::from_str(json).inspect_err(|error| {
                log::debug!("Rejected set encoding: {error}");
            })?;

            let decoded = items.len();
            let before = self.len();
            self.import(items);
            log::trace!(
                "Merged {decoded} decoded items into set, {} of them new ({} total)",
                self.len() - before,
                self.len(),
            );
            Ok(())
        }
    }
}
