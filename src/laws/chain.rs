use std::fmt::Debug;

use serde::Serialize;
use tracing::debug;

use crate::{laws::ContractViolation, relations::Relation};

/// A chain `c[0] == c[1] == ... == c[k]` of adjacent equal pairs whose endpoints
/// are not equal.
///
/// Because `k` is the first index where `c[0] != c[k]`, the triple
/// `(c[0], c[k - 1], c[k])` is a direct counterexample to transitivity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChainBreak {
    pub relation: String,
    /// Index of the first element no longer equal to the start of the chain.
    pub index: usize,
    pub first: String,
    pub pivot: String,
    pub breaking: String,
}

impl ChainBreak {
    pub fn into_violation(self) -> ContractViolation {
        ContractViolation::EqualityTransitivity {
            relation: self.relation,
            x: self.first,
            y: self.pivot,
            z: self.breaking,
        }
    }
}

/// Walks `chain` while adjacent elements are `equal`, and returns the first element that
/// is no longer `equal` to `chain[0]`.
///
/// Returns `None` when the adjacent-equal prefix stays equal to its start throughout,
/// which a transitive equality always does.
pub fn find_chain_break<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    chain: &[T],
) -> Option<ChainBreak> {
    let first = chain.first()?;
    for (index, pair) in chain.windows(2).enumerate() {
        let (pivot, next) = (&pair[0], &pair[1]);
        if !relation.equal(pivot, next) {
            debug!(
                relation = relation.name(),
                index = index + 1,
                "chain ends, adjacent elements differ"
            );
            return None;
        }
        if !relation.equal(first, next) {
            return Some(ChainBreak {
                relation: relation.name().to_string(),
                index: index + 1,
                first: format!("{first:?}"),
                pivot: format!("{pivot:?}"),
                breaking: format!("{next:?}"),
            });
        }
    }
    None
}

/// Number of leading adjacent pairs that are `equal`.
pub fn adjacent_equal_pairs<T, R: Relation<T> + ?Sized>(relation: &R, chain: &[T]) -> usize {
    chain
        .windows(2)
        .take_while(|pair| relation.equal(&pair[0], &pair[1]))
        .count()
}
