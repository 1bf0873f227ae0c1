use comparable::{
    collections::{HashedSet, SortedSet},
    comparable_via_std,
    contract::{Comparable, HashCombiner, Lexicographic},
    laws::{find_chain_break, verify_comparable},
    relations::ToleranceRelation,
    samples::tolerance_chain,
    scenarios::{RunConfig, run_all},
    values::Tolerance,
};
use std::{cmp::Ordering, collections::BTreeSet, hash::Hasher};

/// A three-field type defined outside the crate, built only from the public helpers.
#[derive(Debug, Clone)]
struct Version {
    major: u32,
    minor: u32,
    tag: String,
}

impl Version {
    fn new(major: u32, minor: u32, tag: &str) -> Self {
        Version {
            major,
            minor,
            tag: tag.to_string(),
        }
    }
}

impl Comparable for Version {
    fn equals(&self, other: &Self) -> bool {
        self.major == other.major && self.minor == other.minor && self.tag == other.tag
    }

    fn compare(&self, other: &Self) -> Ordering {
        Lexicographic::new()
            .then(&self.major, &other.major)
            .then(&self.minor, &other.minor)
            .then(&self.tag, &other.tag)
            .finish()
    }

    fn hash_into<H: Hasher>(&self, state: &mut H) {
        state.write_u64(
            HashCombiner::default()
                .field(&self.major)
                .field(&self.minor)
                .field(&self.tag)
                .finish(),
        );
    }
}

comparable_via_std!(Version);

fn versions() -> Vec<Version> {
    vec![
        Version::new(1, 0, ""),
        Version::new(1, 0, "rc1"),
        Version::new(1, 2, ""),
        Version::new(0, 9, "beta"),
        Version::new(1, 0, "rc1"),
        Version::new(2, 0, ""),
    ]
}

#[test]
fn user_defined_type_satisfies_the_laws() {
    let report = verify_comparable(&versions()).unwrap();
    assert_eq!(report.values, 6);
}

#[test]
fn user_defined_type_in_containers() {
    let hashed: HashedSet<Version> = versions().into_iter().collect();
    let sorted: SortedSet<Version> = versions().into_iter().collect();
    let std_sorted: BTreeSet<Version> = versions().into_iter().collect();

    assert_eq!(hashed.len(), 5);
    assert_eq!(sorted.len(), 5);
    assert!(sorted.iter().zip(std_sorted.iter()).all(|(a, b)| a.equals(b)));
    assert!(sorted.first().is_some_and(|v| v.major == 0));
    assert!(sorted.last().is_some_and(|v| v.major == 2));
}

#[test]
fn closeness_chain_counterexample() {
    let relation = ToleranceRelation::new(Tolerance::DEFAULT);
    let chain = tolerance_chain(0.5, Tolerance::DEFAULT, 20).unwrap();

    let found = find_chain_break(&relation, &chain).expect("closeness must break transitivity");
    let violation = found.into_violation();

    assert_eq!(violation.law(), "equality_transitivity");
}

#[test]
fn full_run_succeeds() {
    let report = run_all(&RunConfig::default()).unwrap();

    assert!(report.tolerance.chain_break.index > 1);
    assert!(report.tolerance.less_or_equal_commutes);
}
