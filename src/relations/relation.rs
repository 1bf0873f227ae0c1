use crate::contract::Comparable;

/// An equality, a strict ordering and a hash over `T`, examined together.
pub trait Relation<T> {
    /// Name used when reporting a violation.
    fn name(&self) -> &str;

    fn equal(&self, lhs: &T, rhs: &T) -> bool;

    fn less(&self, lhs: &T, rhs: &T) -> bool;

    fn hash_of(&self, value: &T) -> u64;

    /// Neither operand orders before the other.
    fn incomparable(&self, lhs: &T, rhs: &T) -> bool {
        !self.less(lhs, rhs) && !self.less(rhs, lhs)
    }
}

/// The relations a [`Comparable`] type defines for itself.
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical;

impl<T: Comparable> Relation<T> for Canonical {
    fn name(&self) -> &str {
        "canonical"
    }

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        lhs.equals(rhs)
    }

    fn less(&self, lhs: &T, rhs: &T) -> bool {
        lhs.less(rhs)
    }

    fn hash_of(&self, value: &T) -> u64 {
        value.hash_value()
    }
}
