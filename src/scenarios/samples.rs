use tracing::info;

use crate::{
    collections::HashRegistry,
    laws::{LawChecker, verify_comparable, verify_refinement},
    relations::{ByKey, Canonical},
    samples::{SampleConfig, quantities, records},
    scenarios::{ScenarioError, ScenarioOutcome},
    values::{Quantity, Record},
};

const SCENARIO: &str = "samples";

/// The laws over seeded random records and quantities, the by-label refinement, and
/// the registry-provided hashes.
pub fn run_samples(config: &SampleConfig) -> Result<ScenarioOutcome, ScenarioError> {
    let records = records(config)?;
    let quantities = quantities(config);

    let by_label = ByKey::new("by-label", |record: &Record| record.label().to_string());
    let by_count = ByKey::new("by-count", |record: &Record| record.count());

    let mut registry = HashRegistry::new();
    registry.register_comparable::<Record>();
    registry.register_comparable::<Quantity>();

    let laws = vec![
        verify_comparable(&records)?,
        verify_comparable(&quantities)?,
        verify_refinement(&Canonical, &by_label, &records)?,
        LawChecker::new(&by_count).verify(&records)?,
        LawChecker::new(&registry.relation::<Record>()).verify(&records)?,
        LawChecker::new(&registry.relation::<Quantity>()).verify(&quantities)?,
    ];

    info!(
        scenario = SCENARIO,
        seed = config.seed,
        count = config.count,
        "scenario passed"
    );
    Ok(ScenarioOutcome {
        scenario: SCENARIO,
        expectations: 0,
        laws,
    })
}
