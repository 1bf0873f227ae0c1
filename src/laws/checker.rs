use std::fmt::Debug;

use serde::Serialize;
use tracing::{debug, info};

use crate::{
    contract::Comparable,
    laws::{
        ContractViolation, check_asymmetry, check_consistency, check_derived_operators,
        check_equality_transitivity, check_hash_consistency, check_incomparability_transitivity,
        check_irreflexivity, check_order_transitivity, check_reflexivity, check_refinement,
        check_symmetry, check_trichotomy,
    },
    relations::{Canonical, Relation},
};

/// What a successful verification covered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LawReport {
    pub relation: String,
    pub values: usize,
    pub pairs: usize,
    pub triples: usize,
}

/// Exhaustively checks the equivalence, strict-weak-order and hash-consistency laws of a
/// relation over every value, pair and triple drawn from a sample set.
///
/// Checking stops at the first violation.
pub struct LawChecker<'a, R: ?Sized> {
    relation: &'a R,
    trichotomy: bool,
}

impl<'a, R: ?Sized> LawChecker<'a, R> {
    pub fn new(relation: &'a R) -> Self {
        LawChecker {
            relation,
            trichotomy: true,
        }
    }

    /// Skips the "exactly one of less, equal, greater" check, for relations whose
    /// equality is deliberately finer than incomparability.
    pub fn without_trichotomy(mut self) -> Self {
        self.trichotomy = false;
        self
    }

    pub fn verify<T: Debug>(&self, samples: &[T]) -> Result<LawReport, ContractViolation>
    where
        R: Relation<T>,
    {
        let relation = self.relation;
        debug!(relation = relation.name(), values = samples.len(), "checking unary laws");
        for x in samples {
            check_reflexivity(relation, x)?;
            check_irreflexivity(relation, x)?;
        }

        debug!(relation = relation.name(), "checking pairwise laws");
        for x in samples {
            for y in samples {
                check_symmetry(relation, x, y)?;
                check_asymmetry(relation, x, y)?;
                check_consistency(relation, x, y)?;
                check_hash_consistency(relation, x, y)?;
                if self.trichotomy {
                    check_trichotomy(relation, x, y)?;
                }
            }
        }

        debug!(relation = relation.name(), "checking transitivity laws");
        for x in samples {
            for y in samples {
                for z in samples {
                    check_equality_transitivity(relation, x, y, z)?;
                    check_order_transitivity(relation, x, y, z)?;
                    check_incomparability_transitivity(relation, x, y, z)?;
                }
            }
        }

        let values = samples.len();
        let report = LawReport {
            relation: relation.name().to_string(),
            values,
            pairs: values * values,
            triples: values * values * values,
        };
        info!(
            relation = %report.relation,
            values = report.values,
            triples = report.triples,
            "all laws hold"
        );
        Ok(report)
    }
}

/// Checks the canonical relations of a [`Comparable`] type, plus agreement of every
/// derived operator with the primitives.
pub fn verify_comparable<T: Comparable + Debug>(
    samples: &[T],
) -> Result<LawReport, ContractViolation> {
    let report = LawChecker::new(&Canonical).verify(samples)?;
    for x in samples {
        for y in samples {
            check_derived_operators(x, y)?;
        }
    }
    Ok(report)
}

/// Checks `coarse` is itself lawful and that `fine` refines it on every pair.
pub fn verify_refinement<T, F, C>(
    fine: &F,
    coarse: &C,
    samples: &[T],
) -> Result<LawReport, ContractViolation>
where
    T: Debug,
    F: Relation<T> + ?Sized,
    C: Relation<T> + ?Sized,
{
    let report = LawChecker::new(coarse).verify(samples)?;
    for x in samples {
        for y in samples {
            check_refinement(fine, coarse, x, y)?;
        }
    }
    debug!(fine = fine.name(), coarse = coarse.name(), "refinement holds");
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        relations::{ByKey, ToleranceRelation},
        values::{Quantity, Record, Tolerance},
    };

    fn records() -> Vec<Record> {
        vec![
            Record::new("abc", 4),
            Record::new("abc", 0),
            Record::new("def", 0),
            Record::new("hiijkl", -10),
            Record::new("abc", 4),
            Record::default(),
        ]
    }

    #[test]
    fn test_records_are_lawful() {
        let report = verify_comparable(&records()).unwrap();

        assert_eq!(
            report,
            LawReport {
                relation: "canonical".into(),
                values: 6,
                pairs: 36,
                triples: 216,
            }
        );
    }

    #[test]
    fn test_quantities_with_specials_are_lawful() {
        let samples = [0.0, -0.0, 1.0, 0.99999995, f64::NAN, f64::INFINITY, f64::NEG_INFINITY]
            .map(Quantity);

        assert!(verify_comparable(&samples).is_ok());
    }

    #[test]
    fn test_empty_samples() {
        let report = verify_comparable::<Record>(&[]).unwrap();
        assert_eq!(report.values, 0);
        assert_eq!(report.triples, 0);
    }

    #[test]
    fn test_tolerance_relation_is_rejected() {
        let relation = ToleranceRelation::new(Tolerance::DEFAULT);
        let samples = [0.0, 0.6e-6, 1.2e-6].map(Quantity);

        let violation = LawChecker::new(&relation).verify(&samples).unwrap_err();

        assert_eq!(violation.law(), "hash_consistency");
    }

    #[test]
    fn test_tolerance_relation_rejected_without_hashing() {
        struct Unhashed(ToleranceRelation);

        impl Relation<Quantity> for Unhashed {
            fn name(&self) -> &str {
                "tolerance-unhashed"
            }
            fn equal(&self, lhs: &Quantity, rhs: &Quantity) -> bool {
                self.0.equal(lhs, rhs)
            }
            fn less(&self, lhs: &Quantity, rhs: &Quantity) -> bool {
                self.0.less(lhs, rhs)
            }
            fn hash_of(&self, _: &Quantity) -> u64 {
                0
            }
        }

        let relation = Unhashed(ToleranceRelation::new(Tolerance::DEFAULT));
        let samples = [0.0, 0.6e-6, 1.2e-6].map(Quantity);

        let violation = LawChecker::new(&relation).verify(&samples).unwrap_err();

        assert_eq!(
            violation,
            ContractViolation::EqualityTransitivity {
                relation: "tolerance-unhashed".into(),
                x: "Quantity(0.0)".into(),
                y: "Quantity(6e-7)".into(),
                z: "Quantity(1.2e-6)".into(),
            }
        );
    }

    #[test]
    fn test_finer_equality_needs_without_trichotomy() {
        struct LabelOrder;

        impl Relation<Record> for LabelOrder {
            fn name(&self) -> &str {
                "label-order"
            }
            fn equal(&self, lhs: &Record, rhs: &Record) -> bool {
                lhs.equals(rhs)
            }
            fn less(&self, lhs: &Record, rhs: &Record) -> bool {
                lhs.label() < rhs.label()
            }
            fn hash_of(&self, value: &Record) -> u64 {
                value.hash_value()
            }
        }

        let violation = LawChecker::new(&LabelOrder).verify(&records()).unwrap_err();
        assert_eq!(violation.law(), "trichotomy");

        let report = LawChecker::new(&LabelOrder)
            .without_trichotomy()
            .verify(&records())
            .unwrap();
        assert_eq!(report.values, 6);
    }

    #[test]
    fn test_coarse_relation_refined_by_canonical() {
        let by_label = ByKey::new("by-label", |record: &Record| record.label().to_string());

        let report = verify_refinement(&Canonical, &by_label, &records()).unwrap();
        assert_eq!(report.relation, "by-label");

        let violation = verify_refinement(&by_label, &Canonical, &records()).unwrap_err();
        assert_eq!(violation.law(), "refinement");
    }
}
