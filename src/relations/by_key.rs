use crate::{contract::Comparable, relations::Relation};

/// A coarser relation: two values are equivalent when their projected keys are equal.
///
/// Still a strict weak order (incomparability is key equality, which is transitive), but
/// not an equality of the value type itself. The canonical relation must refine it.
#[derive(Debug, Clone)]
pub struct ByKey<T, K> {
    name: String,
    key: fn(&T) -> K,
}

impl<T, K: Comparable> ByKey<T, K> {
    pub fn new(name: impl Into<String>, key: fn(&T) -> K) -> Self {
        ByKey {
            name: name.into(),
            key,
        }
    }

    pub fn key_of(&self, value: &T) -> K {
        (self.key)(value)
    }
}

impl<T, K: Comparable> Relation<T> for ByKey<T, K> {
    fn name(&self) -> &str {
        &self.name
    }

    fn equal(&self, lhs: &T, rhs: &T) -> bool {
        self.key_of(lhs).equals(&self.key_of(rhs))
    }

    fn less(&self, lhs: &T, rhs: &T) -> bool {
        self.key_of(lhs).less(&self.key_of(rhs))
    }

    fn hash_of(&self, value: &T) -> u64 {
        self.key_of(value).hash_value()
    }
}
