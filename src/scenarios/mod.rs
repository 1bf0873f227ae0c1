//! The fixed verification scenarios run by the binary, and their report.
//!
//! - [`run_canonical`]: the (text, integer) record scenario
//! - [`run_quantity`]: exact floating-point quantities, signed zeros and NaN included
//! - [`run_tolerance`]: closeness used as equality, producing a transitivity counterexample
//! - [`run_samples`]: the laws over seeded random samples
//! - [`run_all`]: all of the above, aggregated into a [`RunReport`]

mod canonical;
mod error;
mod quantity;
mod report;
mod samples;
mod tolerance;

pub use canonical::*;
pub use error::*;
pub use quantity::*;
pub use report::*;
pub use samples::*;
pub use tolerance::*;
