//! Deterministic generation of sample values for stress-checking the laws.
//!
//! All generators are seeded, so a failing run can be reproduced from its seed.

mod generate;

pub use generate::*;
