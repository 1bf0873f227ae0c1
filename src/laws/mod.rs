//! Verification of the equivalence, strict-weak-order and hash-consistency laws.
//!
//! Every check is fail-fast and reports the first violated property together with the
//! operands that violate it, as a [`ContractViolation`].
//!
//! # Submodules
//!
//! - `violation`: the [`ContractViolation`] error
//! - `checks`: one function per property, for a single operand tuple
//! - `checker`: [`LawChecker`], exhaustive verification over a set of samples
//! - `chain`: [`find_chain_break`], explicit transitivity counterexamples along a chain

mod chain;
mod checker;
mod checks;
mod violation;

pub use chain::*;
pub use checker::*;
pub use checks::*;
pub use violation::*;
