use crate::{
    contract::field_hash,
    relations::Relation,
    values::{Quantity, Tolerance},
};

/// Closeness used as if it were equality, with an ordering derived from it.
///
/// This is the unsound design: `equal` is not transitive, `less` is not a strict weak
/// order and no hash can agree with `equal`. It exists so the law checker has
/// something to find counterexamples in.
#[derive(Debug, Clone, Copy)]
pub struct ToleranceRelation {
    tolerance: Tolerance,
}

impl ToleranceRelation {
    pub fn new(tolerance: Tolerance) -> Self {
        ToleranceRelation { tolerance }
    }

    pub fn tolerance(&self) -> Tolerance {
        self.tolerance
    }

    /// `lhs < rhs || close(lhs, rhs)`.
    pub fn less_or_equal(&self, lhs: &Quantity, rhs: &Quantity) -> bool {
        lhs.value() < rhs.value() || self.equal(lhs, rhs)
    }

    /// The same disjunction with its operands swapped.
    pub fn less_or_equal_commuted(&self, lhs: &Quantity, rhs: &Quantity) -> bool {
        self.equal(lhs, rhs) || lhs.value() < rhs.value()
    }
}

impl Relation<Quantity> for ToleranceRelation {
    fn name(&self) -> &str {
        "tolerance"
    }

    fn equal(&self, lhs: &Quantity, rhs: &Quantity) -> bool {
        lhs.is_close_to(rhs, self.tolerance)
    }

    fn less(&self, lhs: &Quantity, rhs: &Quantity) -> bool {
        self.less_or_equal(lhs, rhs) && !self.equal(lhs, rhs)
    }

    fn hash_of(&self, value: &Quantity) -> u64 {
        field_hash(&value.value().to_bits())
    }
}
