//! Concrete value types carrying the comparison capability.
//!
//! - [`Record`]: a (text, integer) aggregate compared memberwise and lexicographically
//! - [`Quantity`]: a floating-point magnitude with exact, bit-level equality and a total order
//! - [`Tolerance`]: the closeness predicate, kept apart from equality

mod quantity;
mod record;
mod tolerance;

pub use quantity::*;
pub use record::*;
pub use tolerance::*;
