use std::{cmp::Ordering, fmt, hash::Hasher};

use serde::{Deserialize, Serialize};

use crate::{
    comparable_via_std,
    contract::{Comparable, HashCombiner, LessChain, Lexicographic},
};

/// A two-field value: a text label and an integer count.
///
/// Fields are compared in declared order, label first. Two records with equal fields
/// are interchangeable for every purpose.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Record {
    label: String,
    count: i32,
}

impl Record {
    pub fn new(label: impl Into<String>, count: i32) -> Self {
        Record {
            label: label.into(),
            count,
        }
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn count(&self) -> i32 {
        self.count
    }

    /// Strict ordering written only in terms of the fields' `<`.
    ///
    /// Always agrees with [`Comparable::less`].
    pub fn less_by_fields(&self, other: &Self) -> bool {
        LessChain::new()
            .then(&self.label, &other.label)
            .then(&self.count, &other.count)
            .finish()
    }
}

impl Comparable for Record {
    fn equals(&self, other: &Self) -> bool {
        self.label == other.label && self.count == other.count
    }

    fn compare(&self, other: &Self) -> Ordering {
        Lexicographic::new()
            .then(&self.label, &other.label)
            .then(&self.count, &other.count)
            .finish()
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        let combined = HashCombiner::default()
            .field(&self.label)
            .field(&self.count)
            .finish();
        state.write_u64(combined);
    }
}

comparable_via_std!(Record);

impl fmt::Display for Record {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:?}, {})", self.label, self.count)
    }
}
