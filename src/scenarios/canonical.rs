use serde::Serialize;
use tracing::info;

use crate::{
    collections::{HashedSet, SortedSet},
    contract::Comparable,
    laws::{LawReport, verify_comparable, verify_refinement},
    relations::{ByKey, Canonical},
    scenarios::{ScenarioError, expect},
    values::Record,
};

const SCENARIO: &str = "canonical";

/// The fixed records: four distinct values and three copies of `a` made in different ways.
#[derive(Debug, Clone)]
pub struct CanonicalRecords {
    pub a: Record,
    pub b: Record,
    pub c: Record,
    pub d: Record,
    pub copied: Record,
    pub assigned: Record,
    pub fresh: Record,
}

impl CanonicalRecords {
    pub fn new() -> Self {
        let a = Record::new("abc", 4);
        let copied = a.clone();
        let mut assigned = Record::default();
        assigned.clone_from(&a);
        CanonicalRecords {
            b: Record::new("abc", 0),
            c: Record::new("def", 0),
            d: Record::new("hiijkl", -10),
            fresh: Record::new("abc", 4),
            a,
            copied,
            assigned,
        }
    }

    pub fn all(&self) -> Vec<Record> {
        vec![
            self.a.clone(),
            self.b.clone(),
            self.c.clone(),
            self.d.clone(),
            self.copied.clone(),
            self.assigned.clone(),
            self.fresh.clone(),
        ]
    }
}

impl Default for CanonicalRecords {
    fn default() -> Self {
        CanonicalRecords::new()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ScenarioOutcome {
    pub scenario: &'static str,
    pub expectations: usize,
    pub laws: Vec<LawReport>,
}

/// Checks the expected ordering, equality and hashing of the fixed records, then every
/// law over them, including refinement of the coarser by-label relation.
pub fn run_canonical() -> Result<ScenarioOutcome, ScenarioError> {
    let CanonicalRecords {
        a,
        b,
        c,
        d,
        copied,
        assigned,
        fresh,
    } = CanonicalRecords::new();

    let expectations = [
        ("B < A", b.less(&a)),
        ("A < C", a.less(&c)),
        ("C < D", c.less(&d)),
        ("B < D", b.less(&a) && a.less(&d) && b.less(&d)),
        ("copy of A equals A", copied.equals(&a) && a.equals(&copied)),
        ("assigned copy of A equals A", assigned.equals(&a) && a.equals(&assigned)),
        ("fresh A equals A", fresh.equals(&a) && a.equals(&fresh)),
        ("A differs from B", a.not_equal(&b) && b.not_equal(&a)),
        ("hash(A) != hash(C)", a.hash_value() != c.hash_value()),
        ("hash(copy of A) == hash(A)", copied.hash_value() == a.hash_value()),
        ("hash(assigned) == hash(copy)", assigned.hash_value() == copied.hash_value()),
    ];

    let samples = CanonicalRecords::new().all();
    let hashed: HashedSet<Record> = samples.iter().cloned().collect();
    let sorted: SortedSet<Record> = samples.iter().cloned().collect();
    let order: Vec<&Record> = sorted.iter().collect();
    let containers = [
        ("hashed set keeps 4 distinct records", hashed.len() == 4),
        (
            "sorted set orders B, A, C, D",
            order.len() == 4
                && order[0].equals(&b)
                && order[1].equals(&a)
                && order[2].equals(&c)
                && order[3].equals(&d),
        ),
    ];
    for (expectation, holds) in expectations.into_iter().chain(containers) {
        expect(SCENARIO, expectation, holds)?;
    }
    let checked = expectations.len() + containers.len();

    let by_label = ByKey::new("by-label", |record: &Record| record.label().to_string());
    let laws = vec![
        verify_comparable(&samples)?,
        verify_refinement(&Canonical, &by_label, &samples)?,
    ];

    info!(scenario = SCENARIO, expectations = checked, "scenario passed");
    Ok(ScenarioOutcome {
        scenario: SCENARIO,
        expectations: checked,
        laws,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixed_records() {
        let records = CanonicalRecords::default();

        assert!(records.assigned.equals(&records.a));
        assert_eq!(records.all().len(), 7);
    }

    #[test]
    fn test_run_canonical() {
        let outcome = run_canonical().unwrap();

        assert_eq!(outcome.scenario, "canonical");
        assert_eq!(outcome.expectations, 13);
        assert_eq!(outcome.laws.len(), 2);
        assert_eq!(outcome.laws[0].relation, "canonical");
        assert_eq!(outcome.laws[0].values, 7);
        assert_eq!(outcome.laws[1].relation, "by-label");
    }
}
