//! Equality/ordering/hash triples viewed as a single object, so the law checker can be
//! pointed at sound and unsound designs alike.
//!
//! - [`Canonical`]: the relations of any [`Comparable`](crate::contract::Comparable) type
//! - [`ByKey`]: a coarser relation comparing a projected key only
//! - [`ToleranceRelation`]: closeness used as equality; deliberately broken

mod by_key;
mod relation;
mod tolerance;

pub use by_key::*;
pub use relation::*;
pub use tolerance::*;
