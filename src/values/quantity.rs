use std::{
    cmp::Ordering,
    fmt,
    hash::{Hash, Hasher},
};

use serde::{Deserialize, Serialize};

use crate::{comparable_via_std, contract::Comparable, values::Tolerance};

/// A floating-point magnitude with exact equality and a total order.
///
/// Plain f64 has neither a reflexive equality (NaN) nor a total order, so equality here
/// compares bit patterns and ordering follows IEEE-754 `totalOrder`: NaN equals itself and
/// sorts above infinity, and -0.0 sorts strictly below +0.0.
///
/// Closeness is a separate, explicitly named predicate ([`Quantity::is_close_to`]) and is
/// never used by containers or hashing.
#[derive(Debug, Copy, Clone, Default, Serialize, Deserialize)]
#[repr(transparent)]
pub struct Quantity(pub f64);

impl Quantity {
    pub fn value(&self) -> f64 {
        self.0
    }

    /// `|self - other| < epsilon`. Not transitive, so not an equality.
    pub fn is_close_to(&self, other: &Quantity, tolerance: Tolerance) -> bool {
        tolerance.close(self.0, other.0)
    }
}

impl Comparable for Quantity {
    fn equals(&self, other: &Self) -> bool {
        self.0.to_bits() == other.0.to_bits()
    }

    fn compare(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        self.0.to_bits().hash(state);
    }
}

comparable_via_std!(Quantity);

impl From<f64> for Quantity {
    fn from(x: f64) -> Self {
        Quantity(x)
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_equality() {
        let a = Quantity(1.0);
        let b = Quantity(1.0);
        let c = Quantity(0.9999999);

        assert!(a.equals(&b));
        assert!(a.not_equal(&c));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_nan_equality() {
        let nan = Quantity(f64::NAN);

        assert!(nan.equals(&nan));
        assert!(!nan.less(&nan));
        assert_eq!(nan.hash_value(), Quantity(f64::NAN).hash_value());
    }

    #[test]
    fn test_signed_zeros() {
        let pos = Quantity(0.0);
        let neg = Quantity(-0.0);

        assert!(pos.not_equal(&neg));
        assert!(neg.less(&pos));
        assert_ne!(pos.hash_value(), neg.hash_value());
    }

    #[test]
    fn test_ordering() {
        let values = [
            Quantity(0.9999999),
            Quantity(0.99999995),
            Quantity(0.99999996),
            Quantity(1.0),
        ];
        for pair in values.windows(2) {
            assert!(pair[0].less(&pair[1]));
            assert!(!pair[1].less(&pair[0]));
        }
        assert!(values[0].less(&values[3]));
    }

    #[test]
    fn test_sort_with_specials() {
        let mut values = vec![
            Quantity(3.0),
            Quantity(f64::NAN),
            Quantity(f64::NEG_INFINITY),
            Quantity(0.0),
            Quantity(-0.0),
            Quantity(f64::INFINITY),
        ];
        values.sort();

        assert_eq!(values[0], Quantity(f64::NEG_INFINITY));
        assert_eq!(values[1], Quantity(-0.0));
        assert_eq!(values[2], Quantity(0.0));
        assert_eq!(values[3], Quantity(3.0));
        assert_eq!(values[4], Quantity(f64::INFINITY));
        assert_eq!(values[5], Quantity(f64::NAN));
    }

    #[test]
    fn test_closeness_is_separate_from_equality() {
        let a = Quantity(1.0);
        let b = Quantity(0.99999995);

        assert!(a.is_close_to(&b, Tolerance::DEFAULT));
        assert!(a.not_equal(&b));
    }

    #[test]
    fn test_from_f64() {
        let q: Quantity = 2.5f64.into();
        assert_eq!(q.value(), 2.5);
        assert_eq!(q.to_string(), "2.5");
    }

    proptest! {
        #[test]
        fn equal_iff_compare_equal(a in any::<f64>(), b in any::<f64>()) {
            let (a, b) = (Quantity(a), Quantity(b));
            prop_assert_eq!(a.equals(&b), a.compare(&b) == Ordering::Equal);
        }

        #[test]
        fn copies_hash_alike(a in any::<f64>()) {
            let copy = Quantity(a);
            prop_assert_eq!(Quantity(a).hash_value(), copy.hash_value());
        }

        #[test]
        fn exactly_one_relation_holds(a in any::<f64>(), b in any::<f64>()) {
            let (a, b) = (Quantity(a), Quantity(b));
            let holds = [a.less(&b), a.equals(&b), b.less(&a)];
            prop_assert_eq!(holds.iter().filter(|h| **h).count(), 1);
        }
    }
}
