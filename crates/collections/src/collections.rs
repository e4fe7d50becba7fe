//! Hash collection aliases shared across BTerm crates.
//!
//! Key files keep their sections and keys in file order, so the ordered maps
//! are the ones most crates want. Lookup-only tables use `FxHashMap`.

pub use rustc_hash::{FxBuildHasher, FxHashMap};

/// Insertion-ordered hash map with FxHash.
pub type IndexMap<K, V> = indexmap::IndexMap<K, V, FxBuildHasher>;
