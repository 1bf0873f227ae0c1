use serde::Serialize;
use tracing::{info, warn};

use crate::{
    laws::{ChainBreak, ContractViolation, LawChecker, adjacent_equal_pairs, find_chain_break},
    relations::{Relation, ToleranceRelation},
    samples::tolerance_chain,
    scenarios::{ScenarioError, expect},
    values::Tolerance,
};

const SCENARIO: &str = "tolerance";

/// What the closeness-as-equality scenario found.
#[derive(Debug, Clone, Serialize)]
pub struct ToleranceOutcome {
    pub epsilon: f64,
    pub len: usize,
    pub adjacent_equal: usize,
    /// The explicit transitivity counterexample along the chain.
    pub chain_break: ChainBreak,
    /// First law the exhaustive checker rejects the relation on.
    pub rejected_by: ContractViolation,
    /// Whether `a < b || eq` and `eq || a < b` agreed on every pair of the chain.
    pub less_or_equal_commutes: bool,
}

/// Builds a chain of `len` values spaced `epsilon / 2` apart and shows that treating
/// closeness as equality breaks transitivity on it.
///
/// Succeeds only if the counterexample is found: every adjacent pair must be "equal",
/// the chain must break, and the law checker must reject the relation.
pub fn run_tolerance(tolerance: Tolerance, len: usize) -> Result<ToleranceOutcome, ScenarioError> {
    let relation = ToleranceRelation::new(tolerance);
    let chain = tolerance_chain(1.0, tolerance, len)?;

    let adjacent_equal = adjacent_equal_pairs(&relation, &chain);
    expect(
        SCENARIO,
        "every adjacent pair of the chain to be close",
        adjacent_equal + 1 >= chain.len(),
    )?;

    let chain_break =
        find_chain_break(&relation, &chain).ok_or(ScenarioError::MissingCounterexample {
            epsilon: tolerance.epsilon(),
            len,
        })?;
    warn!(
        relation = relation.name(),
        index = chain_break.index,
        first = %chain_break.first,
        breaking = %chain_break.breaking,
        "closeness is not transitive"
    );

    let rejected_by = match LawChecker::new(&relation).verify(&chain) {
        Ok(_) => {
            return Err(ScenarioError::MissingCounterexample {
                epsilon: tolerance.epsilon(),
                len,
            });
        }
        Err(violation) => violation,
    };

    let less_or_equal_commutes = chain.iter().all(|x| {
        chain
            .iter()
            .all(|y| relation.less_or_equal(x, y) == relation.less_or_equal_commuted(x, y))
    });
    expect(
        SCENARIO,
        "commuting the operands of less-or-equal to change nothing",
        less_or_equal_commutes,
    )?;

    info!(
        scenario = SCENARIO,
        len,
        index = chain_break.index,
        law = rejected_by.law(),
        "counterexample found"
    );
    Ok(ToleranceOutcome {
        epsilon: tolerance.epsilon(),
        len,
        adjacent_equal,
        chain_break,
        rejected_by,
        less_or_equal_commutes,
    })
}
