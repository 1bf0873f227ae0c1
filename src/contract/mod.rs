//! The comparison capability a value type provides, and the helpers used to build it.
//!
//! A value type exposes three primitives (equality, three-way comparison and hashing);
//! every other relational operator is derived from those so they can never disagree.
//!
//! # Submodules
//!
//! - `comparable`: the [`Comparable`] capability and the std bridge macro
//! - `lexicographic`: memberwise lexicographic composition of field comparisons
//! - `hash_combine`: order-sensitive combination of per-field hashes

mod comparable;
mod hash_combine;
mod lexicographic;

pub use comparable::*;
pub use hash_combine::*;
pub use lexicographic::*;
