use serde::Serialize;
use thiserror::Error;

/// A law that the relations of a value type fail to satisfy, with the offending operands
/// rendered through `Debug`.
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "law", rename_all = "snake_case")]
pub enum ContractViolation {
    #[error("{relation}: equality is not reflexive, {x} does not equal itself")]
    Reflexivity { relation: String, x: String },

    #[error("{relation}: ordering is not irreflexive, {x} orders before itself")]
    Irreflexivity { relation: String, x: String },

    #[error("{relation}: equality is not symmetric for {x} and {y}")]
    Symmetry {
        relation: String,
        x: String,
        y: String,
    },

    #[error("{relation}: ordering is not asymmetric, {x} < {y} and {y} < {x}")]
    Asymmetry {
        relation: String,
        x: String,
        y: String,
    },

    #[error("{relation}: equality is not transitive, {x} == {y} and {y} == {z} but {x} != {z}")]
    EqualityTransitivity {
        relation: String,
        x: String,
        y: String,
        z: String,
    },

    #[error("{relation}: ordering is not transitive, {x} < {y} and {y} < {z} but not {x} < {z}")]
    OrderTransitivity {
        relation: String,
        x: String,
        y: String,
        z: String,
    },

    #[error(
        "{relation}: incomparability is not transitive, {x} ~ {y} and {y} ~ {z} but not {x} ~ {z}"
    )]
    IncomparabilityTransitivity {
        relation: String,
        x: String,
        y: String,
        z: String,
    },

    #[error("{relation}: {x} == {y} yet one orders before the other")]
    Consistency {
        relation: String,
        x: String,
        y: String,
    },

    #[error("{relation}: {holding} of less, equal, greater hold for {x} and {y}, expected exactly one")]
    Trichotomy {
        relation: String,
        x: String,
        y: String,
        holding: usize,
    },

    #[error("{relation}: {x} == {y} but their hashes differ ({x_hash:#018x} vs {y_hash:#018x})")]
    HashConsistency {
        relation: String,
        x: String,
        y: String,
        x_hash: u64,
        y_hash: u64,
    },

    #[error("derived operator `{operator}` disagrees with the primitives for {x} and {y}")]
    DerivedOperator {
        operator: &'static str,
        x: String,
        y: String,
    },

    #[error("{fine} does not refine {coarse} for {x} and {y}")]
    Refinement {
        fine: String,
        coarse: String,
        x: String,
        y: String,
    },
}

impl ContractViolation {
    /// Short name of the violated law.
    pub fn law(&self) -> &'static str {
        match self {
            ContractViolation::Reflexivity { .. } => "reflexivity",
            ContractViolation::Irreflexivity { .. } => "irreflexivity",
            ContractViolation::Symmetry { .. } => "symmetry",
            ContractViolation::Asymmetry { .. } => "asymmetry",
            ContractViolation::EqualityTransitivity { .. } => "equality_transitivity",
            ContractViolation::OrderTransitivity { .. } => "order_transitivity",
            ContractViolation::IncomparabilityTransitivity { .. } => {
                "incomparability_transitivity"
            }
            ContractViolation::Consistency { .. } => "consistency",
            ContractViolation::Trichotomy { .. } => "trichotomy",
            ContractViolation::HashConsistency { .. } => "hash_consistency",
            ContractViolation::DerivedOperator { .. } => "derived_operator",
            ContractViolation::Refinement { .. } => "refinement",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_names_operands() {
        let violation = ContractViolation::EqualityTransitivity {
            relation: "tolerance".into(),
            x: "Quantity(0.0)".into(),
            y: "Quantity(5e-7)".into(),
            z: "Quantity(1e-6)".into(),
        };

        assert_eq!(
            violation.to_string(),
            "tolerance: equality is not transitive, Quantity(0.0) == Quantity(5e-7) and \
             Quantity(5e-7) == Quantity(1e-6) but Quantity(0.0) != Quantity(1e-6)"
        );
        assert_eq!(violation.law(), "equality_transitivity");
    }

    #[test]
    fn test_serializes_with_law_tag() {
        let violation = ContractViolation::Irreflexivity {
            relation: "canonical".into(),
            x: "1".into(),
        };
        let json = serde_json::to_value(&violation).unwrap();

        assert_eq!(json["law"], "irreflexivity");
        assert_eq!(json["x"], "1");
    }

    #[test]
    fn test_hash_message_is_hex() {
        let violation = ContractViolation::HashConsistency {
            relation: "r".into(),
            x: "a".into(),
            y: "b".into(),
            x_hash: 1,
            y_hash: 255,
        };
        assert!(violation.to_string().contains("0x0000000000000001 vs 0x00000000000000ff"));
    }
}
