//! Containers generic over the [`Comparable`](crate::contract::Comparable) capability.
//!
//! They consult only `equals`, `compare` and `hash_value`, never the std operator traits,
//! so a type's contract is all they rely on.
//!
//! # Submodules
//!
//! - `hashed_set`: [`HashedSet`], hash-based deduplication
//! - `sorted_set`: [`SortedSet`], ordered deduplication by binary search
//! - `registry`: [`HashRegistry`], free hash functions looked up by type

mod hashed_set;
mod registry;
mod sorted_set;

pub use hashed_set::*;
pub use registry::*;
pub use sorted_set::*;
