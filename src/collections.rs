use std::hash::BuildHasherDefault;
use indexmap::IndexMap;
use rustc_hash::FxHasher;


/// Use indexmap for fast lookups and rustc_hash for fast hashing
pub type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;

/// Plain hash map with the fast hasher, used where order does not matter
pub type FxHashMap<K, V> = rustc_hash::FxHashMap<K, V>;
