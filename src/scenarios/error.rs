use thiserror::Error;

use crate::{laws::ContractViolation, samples::SampleError, values::ToleranceError};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("contract violation: {0}")]
    Violation(#[from] ContractViolation),

    #[error("{scenario}: expected {expectation}")]
    Expectation {
        scenario: &'static str,
        expectation: &'static str,
    },

    #[error("no transitivity counterexample in a chain of {len} values spaced {epsilon}/2 apart")]
    MissingCounterexample { epsilon: f64, len: usize },

    #[error(transparent)]
    Tolerance(#[from] ToleranceError),

    #[error(transparent)]
    Samples(#[from] SampleError),
}

/// Fails the scenario unless `holds`.
pub(crate) fn expect(
    scenario: &'static str,
    expectation: &'static str,
    holds: bool,
) -> Result<(), ScenarioError> {
    if holds {
        Ok(())
    } else {
        Err(ScenarioError::Expectation {
            scenario,
            expectation,
        })
    }
}
