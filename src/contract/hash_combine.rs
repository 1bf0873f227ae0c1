use std::{
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

/// How per-field hashes are folded into one value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CombineStrategy {
    /// Field `i` contributes `hash << i`, xor-accumulated. Two fields give `h1 ^ (h2 << 1)`.
    #[default]
    ShiftXor,
    /// Golden-ratio mixing, `seed ^ (h + φ + (seed << 6) + (seed >> 2))`.
    Golden,
}

const GOLDEN_RATIO: u64 = 0x9e37_79b9_7f4a_7c15;

/// Folds the hashes of a value's fields, in declared order, into a single hash.
///
/// Feed exactly the fields compared by the value's equality; then equal values
/// hash equally. The result is order-sensitive but not injective.
#[derive(Debug, Clone, Copy)]
pub struct HashCombiner {
    strategy: CombineStrategy,
    state: u64,
    fields: u32,
}

impl HashCombiner {
    pub fn new(strategy: CombineStrategy) -> Self {
        HashCombiner {
            strategy,
            state: 0,
            fields: 0,
        }
    }

    /// Hashes `field` on its own and folds it in.
    pub fn field<T: Hash + ?Sized>(self, field: &T) -> Self {
        self.combine(field_hash(field))
    }

    /// Folds an already computed field hash in.
    pub fn combine(self, hash: u64) -> Self {
        let state = match self.strategy {
            CombineStrategy::ShiftXor => self.state ^ hash.wrapping_shl(self.fields),
            CombineStrategy::Golden => {
                let seed = self.state;
                seed ^ hash
                    .wrapping_add(GOLDEN_RATIO)
                    .wrapping_add(seed << 6)
                    .wrapping_add(seed >> 2)
            }
        };
        HashCombiner {
            strategy: self.strategy,
            state,
            fields: self.fields + 1,
        }
    }

    pub fn fields(&self) -> u32 {
        self.fields
    }

    pub fn finish(self) -> u64 {
        self.state
    }
}

impl Default for HashCombiner {
    fn default() -> Self {
        HashCombiner::new(CombineStrategy::default())
    }
}

/// Hash of a single field under a zero-keyed hasher.
pub fn field_hash<T: Hash + ?Sized>(field: &T) -> u64 {
    let mut state = DefaultHasher::new();
    field.hash(&mut state);
    state.finish()
}
