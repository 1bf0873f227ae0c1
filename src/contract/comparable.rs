use std::{
    cmp::Ordering,
    collections::hash_map::DefaultHasher,
    hash::{Hash, Hasher},
};

/// The comparison capability of a value type.
///
/// Implementors supply exactly three primitives: [`equals`](Comparable::equals),
/// [`compare`](Comparable::compare) and [`hash_into`](Comparable::hash_into). Every other
/// relation is provided in terms of those and should not be overridden.
///
/// Implementations must satisfy:
/// * `equals` is an equivalence relation depending only on the two operands' values
/// * `compare` induces a strict weak order whose incomparable classes are exactly the
///   `equals` classes, i.e. `equals(x, y)` iff `compare(x, y) == Ordering::Equal`
/// * `equals(x, y)` implies `hash_value(x) == hash_value(y)`
pub trait Comparable {
    /// Memberwise equality.
    fn equals(&self, other: &Self) -> bool;

    /// Three-way comparison, usually a lexicographic composition of the fields.
    fn compare(&self, other: &Self) -> Ordering;

    /// Feeds exactly the fields that take part in [`equals`](Comparable::equals) into `state`.
    fn hash_into<H: Hasher>(&self, state: &mut H);

    fn not_equal(&self, other: &Self) -> bool {
        !self.equals(other)
    }

    fn less(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Less
    }

    fn greater(&self, other: &Self) -> bool {
        other.less(self)
    }

    fn less_or_equal(&self, other: &Self) -> bool {
        !self.greater(other)
    }

    fn greater_or_equal(&self, other: &Self) -> bool {
        !self.less(other)
    }

    /// Hash of the value under a zero-keyed hasher, stable for the lifetime of the process.
    fn hash_value(&self) -> u64 {
        let mut state = DefaultHasher::new();
        self.hash_into(&mut state);
        state.finish()
    }
}

macro_rules! comparable_from_ord {
    ($($t:ty),* $(,)?) => {
        $(
            impl Comparable for $t {
                fn equals(&self, other: &Self) -> bool {
                    self == other
                }

                fn compare(&self, other: &Self) -> Ordering {
                    Ord::cmp(self, other)
                }

                fn hash_into<H: Hasher>(&self, state: &mut H) {
                    Hash::hash(self, state)
                }
            }
        )*
    };
}

comparable_from_ord!(bool, char, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, String);

/// Implements `PartialEq`, `Eq`, `PartialOrd`, `Ord` and `Hash` for a type in terms of its
/// [`Comparable`](crate::contract::Comparable) implementation, so that std and hashbrown
/// containers see exactly the same relations as the capability.
#[macro_export]
macro_rules! comparable_via_std {
    ($t:ty) => {
        impl PartialEq for $t {
            fn eq(&self, other: &Self) -> bool {
                $crate::contract::Comparable::equals(self, other)
            }
        }

        impl Eq for $t {}

        impl PartialOrd for $t {
            fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
                Some(self.cmp(other))
            }
        }

        impl Ord for $t {
            fn cmp(&self, other: &Self) -> std::cmp::Ordering {
                $crate::contract::Comparable::compare(self, other)
            }
        }

        impl std::hash::Hash for $t {
            fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
                $crate::contract::Comparable::hash_into(self, state)
            }
        }
    };
}
