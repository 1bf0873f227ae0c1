use std::{cmp::Ordering, fmt::Debug};

use crate::{contract::Comparable, laws::ContractViolation, relations::Relation};

fn show<T: Debug>(value: &T) -> String {
    format!("{value:?}")
}

/// `equal(x, x)`.
pub fn check_reflexivity<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
) -> Result<(), ContractViolation> {
    if relation.equal(x, x) {
        Ok(())
    } else {
        Err(ContractViolation::Reflexivity {
            relation: relation.name().to_string(),
            x: show(x),
        })
    }
}

/// `!less(x, x)`.
pub fn check_irreflexivity<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
) -> Result<(), ContractViolation> {
    if relation.less(x, x) {
        Err(ContractViolation::Irreflexivity {
            relation: relation.name().to_string(),
            x: show(x),
        })
    } else {
        Ok(())
    }
}

/// `equal(x, y) == equal(y, x)`.
pub fn check_symmetry<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
) -> Result<(), ContractViolation> {
    if relation.equal(x, y) == relation.equal(y, x) {
        Ok(())
    } else {
        Err(ContractViolation::Symmetry {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
        })
    }
}

/// `less(x, y) => !less(y, x)`.
pub fn check_asymmetry<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
) -> Result<(), ContractViolation> {
    if relation.less(x, y) && relation.less(y, x) {
        Err(ContractViolation::Asymmetry {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
        })
    } else {
        Ok(())
    }
}

/// `equal(x, y) => !less(x, y) && !less(y, x)`.
pub fn check_consistency<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
) -> Result<(), ContractViolation> {
    if relation.equal(x, y) && !relation.incomparable(x, y) {
        Err(ContractViolation::Consistency {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
        })
    } else {
        Ok(())
    }
}

/// Exactly one of `less(x, y)`, `equal(x, y)`, `less(y, x)`.
pub fn check_trichotomy<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
) -> Result<(), ContractViolation> {
    let holding = [
        relation.less(x, y),
        relation.equal(x, y),
        relation.less(y, x),
    ]
    .into_iter()
    .filter(|holds| *holds)
    .count();

    if holding == 1 {
        Ok(())
    } else {
        Err(ContractViolation::Trichotomy {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
            holding,
        })
    }
}

/// `equal(x, y) => hash(x) == hash(y)`.
pub fn check_hash_consistency<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
) -> Result<(), ContractViolation> {
    if !relation.equal(x, y) {
        return Ok(());
    }
    let (x_hash, y_hash) = (relation.hash_of(x), relation.hash_of(y));
    if x_hash == y_hash {
        Ok(())
    } else {
        Err(ContractViolation::HashConsistency {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
            x_hash,
            y_hash,
        })
    }
}

/// `equal(x, y) && equal(y, z) => equal(x, z)`.
pub fn check_equality_transitivity<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
    z: &T,
) -> Result<(), ContractViolation> {
    if relation.equal(x, y) && relation.equal(y, z) && !relation.equal(x, z) {
        Err(ContractViolation::EqualityTransitivity {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
            z: show(z),
        })
    } else {
        Ok(())
    }
}

/// `less(x, y) && less(y, z) => less(x, z)`.
pub fn check_order_transitivity<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
    z: &T,
) -> Result<(), ContractViolation> {
    if relation.less(x, y) && relation.less(y, z) && !relation.less(x, z) {
        Err(ContractViolation::OrderTransitivity {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
            z: show(z),
        })
    } else {
        Ok(())
    }
}

/// `incomparable(x, y) && incomparable(y, z) => incomparable(x, z)`.
pub fn check_incomparability_transitivity<T: Debug, R: Relation<T> + ?Sized>(
    relation: &R,
    x: &T,
    y: &T,
    z: &T,
) -> Result<(), ContractViolation> {
    if relation.incomparable(x, y) && relation.incomparable(y, z) && !relation.incomparable(x, z)
    {
        Err(ContractViolation::IncomparabilityTransitivity {
            relation: relation.name().to_string(),
            x: show(x),
            y: show(y),
            z: show(z),
        })
    } else {
        Ok(())
    }
}

/// Checks that every derived operator of a [`Comparable`] type agrees with the primitives,
/// including the alternative `less_or_equal = less || equals` derivation.
pub fn check_derived_operators<T: Comparable + Debug>(
    x: &T,
    y: &T,
) -> Result<(), ContractViolation> {
    let agreements: [(&'static str, bool); 7] = [
        ("compare", x.equals(y) == (x.compare(y) == Ordering::Equal)),
        ("not_equal", x.not_equal(y) == !x.equals(y)),
        ("greater", x.greater(y) == y.less(x)),
        ("less_or_equal", x.less_or_equal(y) == !x.greater(y)),
        ("greater_or_equal", x.greater_or_equal(y) == !x.less(y)),
        ("less_or_equal_alt", x.less_or_equal(y) == (x.less(y) || x.equals(y))),
        ("greater_or_equal_alt", x.greater_or_equal(y) == (x.greater(y) || x.equals(y))),
    ];

    match agreements.into_iter().find(|(_, agrees)| !agrees) {
        Some((operator, _)) => Err(ContractViolation::DerivedOperator {
            operator,
            x: show(x),
            y: show(y),
        }),
        None => Ok(()),
    }
}

/// Checks that `fine` refines `coarse`: `fine` equality implies `coarse` equality, and a
/// strict `coarse` ordering is never contradicted by `fine`.
pub fn check_refinement<T, F, C>(fine: &F, coarse: &C, x: &T, y: &T) -> Result<(), ContractViolation>
where
    T: Debug,
    F: Relation<T> + ?Sized,
    C: Relation<T> + ?Sized,
{
    let equal_kept = !fine.equal(x, y) || coarse.equal(x, y);
    let order_kept = !coarse.less(x, y) || fine.less(x, y);
    if equal_kept && order_kept {
        Ok(())
    } else {
        Err(ContractViolation::Refinement {
            fine: fine.name().to_string(),
            coarse: coarse.name().to_string(),
            x: show(x),
            y: show(y),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        relations::{ByKey, Canonical, ToleranceRelation},
        values::{Quantity, Record, Tolerance},
    };

    /// `less` is `<=`, so it is reflexive.
    struct LessEqual;

    impl Relation<i32> for LessEqual {
        fn name(&self) -> &str {
            "less-equal"
        }
        fn equal(&self, lhs: &i32, rhs: &i32) -> bool {
            lhs == rhs
        }
        fn less(&self, lhs: &i32, rhs: &i32) -> bool {
            lhs <= rhs
        }
        fn hash_of(&self, value: &i32) -> u64 {
            *value as u64
        }
    }

    struct NeverEqual;

    impl Relation<i32> for NeverEqual {
        fn name(&self) -> &str {
            "never-equal"
        }
        fn equal(&self, _: &i32, _: &i32) -> bool {
            false
        }
        fn less(&self, lhs: &i32, rhs: &i32) -> bool {
            lhs < rhs
        }
        fn hash_of(&self, _: &i32) -> u64 {
            0
        }
    }

    #[test]
    fn test_canonical_passes_everything() {
        let a = Record::new("abc", 4);
        let b = Record::new("abc", 0);
        let c = Record::new("def", 0);

        assert_eq!(check_reflexivity(&Canonical, &a), Ok(()));
        assert_eq!(check_irreflexivity(&Canonical, &a), Ok(()));
        assert_eq!(check_symmetry(&Canonical, &a, &b), Ok(()));
        assert_eq!(check_asymmetry(&Canonical, &a, &b), Ok(()));
        assert_eq!(check_consistency(&Canonical, &a, &a.clone()), Ok(()));
        assert_eq!(check_trichotomy(&Canonical, &a, &b), Ok(()));
        assert_eq!(check_hash_consistency(&Canonical, &a, &a.clone()), Ok(()));
        assert_eq!(check_equality_transitivity(&Canonical, &a, &a, &a), Ok(()));
        assert_eq!(check_order_transitivity(&Canonical, &b, &a, &c), Ok(()));
        assert_eq!(check_incomparability_transitivity(&Canonical, &a, &a, &b), Ok(()));
        assert_eq!(check_derived_operators(&a, &b), Ok(()));
        assert_eq!(check_derived_operators(&a, &a), Ok(()));
    }

    #[test]
    fn test_irreflexivity_violation() {
        let violation = check_irreflexivity(&LessEqual, &3).unwrap_err();
        assert_eq!(
            violation,
            ContractViolation::Irreflexivity {
                relation: "less-equal".into(),
                x: "3".into(),
            }
        );
    }

    #[test]
    fn test_consistency_and_trichotomy_violations() {
        assert_eq!(check_consistency(&LessEqual, &3, &3).unwrap_err().law(), "consistency");
        let violation = check_trichotomy(&LessEqual, &3, &3).unwrap_err();
        assert!(matches!(violation, ContractViolation::Trichotomy { holding: 3, .. }));
    }

    #[test]
    fn test_asymmetry_violation() {
        assert_eq!(check_asymmetry(&LessEqual, &3, &3).unwrap_err().law(), "asymmetry");
    }

    #[test]
    fn test_reflexivity_violation() {
        assert_eq!(check_reflexivity(&NeverEqual, &1).unwrap_err().law(), "reflexivity");
        let violation = check_trichotomy(&NeverEqual, &1, &1).unwrap_err();
        assert!(matches!(violation, ContractViolation::Trichotomy { holding: 0, .. }));
    }

    #[test]
    fn test_tolerance_violations() {
        let relation = ToleranceRelation::new(Tolerance::DEFAULT);
        let (x, y, z) = (Quantity(0.0), Quantity(0.6e-6), Quantity(1.2e-6));

        let violation = check_equality_transitivity(&relation, &x, &y, &z).unwrap_err();
        assert_eq!(violation.law(), "equality_transitivity");

        let violation = check_incomparability_transitivity(&relation, &x, &y, &z).unwrap_err();
        assert_eq!(violation.law(), "incomparability_transitivity");

        let violation = check_hash_consistency(&relation, &x, &y).unwrap_err();
        assert_eq!(violation.law(), "hash_consistency");

        assert_eq!(check_symmetry(&relation, &x, &y), Ok(()));
        assert_eq!(check_trichotomy(&relation, &x, &y), Ok(()));
    }

    #[test]
    fn test_refinement() {
        let by_label = ByKey::new("by-label", |record: &Record| record.label().to_string());
        let a = Record::new("abc", 4);
        let b = Record::new("abc", 0);
        let c = Record::new("def", 0);

        for (x, y) in [(&a, &b), (&b, &a), (&a, &c), (&c, &b), (&a, &a)] {
            assert_eq!(check_refinement(&Canonical, &by_label, x, y), Ok(()));
        }

        let violation = check_refinement(&by_label, &Canonical, &a, &b).unwrap_err();
        assert_eq!(
            violation.to_string(),
            "by-label does not refine canonical for Record { label: \"abc\", count: 4 } and \
             Record { label: \"abc\", count: 0 }"
        );
    }
}
