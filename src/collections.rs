use std::hash::BuildHasherDefault;
use indexmap::IndexSet;
use rustc_hash::FxHasher;


/// Insertion-ordered set with fast hashing, position doubles as a dense index
pub(crate) type FxIndexSet<T> = IndexSet<T, BuildHasherDefault<FxHasher>>;
