//! # Common Types and Traits
use core::{
    fmt::{Debug, Display},
    hash::Hash,
};

use num_traits::{FromPrimitive, PrimInt, ToPrimitive, Unsigned};

/// A type that can be used as a token id.
///
/// Ids are vocabulary ranks, so they are 1-based;
/// the largest rank in a vocabulary must be representable by `T`.
pub trait TokenType:
    'static
    + PrimInt
    + FromPrimitive
    + ToPrimitive
    + Unsigned
    + Hash
    + Default
    + Debug
    + Display
    + Send
    + Sync
{
}

impl<T> TokenType for T where
    T: 'static
        + PrimInt
        + FromPrimitive
        + ToPrimitive
        + Unsigned
        + Hash
        + Default
        + Debug
        + Display
        + Send
        + Sync
{
}

cfg_if::cfg_if! {
    if #[cfg(feature = "ahash")] {
        /// Type Alias for hash maps in this crate.
        pub type SylHashMap<K, V> = ahash::AHashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SylHashMap<K, V> {
            SylHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type SylHashSet<V> = ahash::AHashSet<V>;

    } else if #[cfg(feature = "foldhash")] {
        /// Type Alias for hash maps in this crate.
        pub type SylHashMap<K, V> = foldhash::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SylHashMap<K, V> {
            foldhash::HashMapExt::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type SylHashSet<V> = foldhash::HashSet<V>;

    } else {
        /// Type Alias for hash maps in this crate.
        pub type SylHashMap<K, V> = std::collections::HashMap<K, V>;

        /// Create a new empty hash map.
        pub fn hash_map_new<K, V>() -> SylHashMap<K, V> {
            SylHashMap::new()
        }

        /// Type Alias for hash sets in this crate.
        pub type SylHashSet<V> = std::collections::HashSet<V>;
    }
}
