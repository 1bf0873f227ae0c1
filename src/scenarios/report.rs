use serde::Serialize;
use tracing::info;

use crate::{
    samples::SampleConfig,
    scenarios::{
        ScenarioError, ScenarioOutcome, ToleranceOutcome, run_canonical, run_quantity,
        run_samples, run_tolerance,
    },
    values::Tolerance,
};

/// Parameters of a full run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RunConfig {
    pub tolerance: Tolerance,
    pub chain_len: usize,
    pub samples: SampleConfig,
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            tolerance: Tolerance::DEFAULT,
            chain_len: 20,
            samples: SampleConfig::default(),
        }
    }
}

/// Everything a successful run verified.
#[derive(Debug, Clone, Serialize)]
pub struct RunReport {
    pub config: RunConfig,
    pub canonical: ScenarioOutcome,
    pub quantity: ScenarioOutcome,
    pub tolerance: ToleranceOutcome,
    pub samples: ScenarioOutcome,
}

impl RunReport {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Runs every scenario in order, stopping at the first failure.
pub fn run_all(config: &RunConfig) -> Result<RunReport, ScenarioError> {
    let canonical = run_canonical()?;
    let quantity = run_quantity(config.tolerance)?;
    let tolerance = run_tolerance(config.tolerance, config.chain_len)?;
    let samples = run_samples(&config.samples)?;

    info!("all scenarios passed");
    Ok(RunReport {
        config: config.clone(),
        canonical,
        quantity,
        tolerance,
        samples,
    })
}
