use tracing::info;

use crate::{
    contract::Comparable,
    laws::verify_comparable,
    scenarios::{ScenarioError, ScenarioOutcome, expect},
    values::{Quantity, Tolerance},
};

const SCENARIO: &str = "quantity";

/// Quantities under exact equality: nearby values stay distinct,
/// copies stay equal, and the closeness predicate is available but separate.
pub fn run_quantity(tolerance: Tolerance) -> Result<ScenarioOutcome, ScenarioError> {
    let v1 = Quantity(1.0);
    let v2 = Quantity(0.9999999);
    let v3 = Quantity(0.99999995);
    let v4 = Quantity(0.99999996);
    let v11 = v1;
    let mut v12 = Quantity::default();
    v12.clone_from(&v1);
    let v13 = Quantity(0.999999951);

    let expectations = [
        ("v2 < v3 < v4 < v1", v2.less(&v3) && v3.less(&v4) && v4.less(&v1)),
        ("v2 < v1 by transitivity", v2.less(&v1)),
        ("v1 == copy == assigned", v1.equals(&v11) && v11.equals(&v12) && v1.equals(&v12)),
        ("v13 distinct from v1", v13.not_equal(&v1) && v1.not_equal(&v13)),
        (
            "v1, v2, v3, v4 pairwise distinct",
            v1.not_equal(&v2) && v1.not_equal(&v3) && v1.not_equal(&v4),
        ),
        ("hash(v1) != hash(v3)", v1.hash_value() != v3.hash_value()),
        ("hash(v2) != hash(v3)", v2.hash_value() != v3.hash_value()),
        ("hash(v1) == hash(copy)", v1.hash_value() == v11.hash_value()),
        ("hash(assigned) == hash(copy)", v12.hash_value() == v11.hash_value()),
        (
            "v1 close to v13 yet not equal",
            v1.is_close_to(&v13, Tolerance::DEFAULT) && v1.not_equal(&v13),
        ),
        (
            "closeness of v1 and v13 to follow epsilon",
            v1.is_close_to(&v13, tolerance)
                == ((v1.value() - v13.value()).abs() < tolerance.epsilon()),
        ),
        ("-0.0 < +0.0", Quantity(-0.0).less(&Quantity(0.0))),
        ("NaN equals itself", Quantity(f64::NAN).equals(&Quantity(f64::NAN))),
    ];
    for (expectation, holds) in expectations {
        expect(SCENARIO, expectation, holds)?;
    }

    let samples = [
        v1,
        v2,
        v3,
        v4,
        v11,
        v12,
        v13,
        Quantity(0.0),
        Quantity(-0.0),
        Quantity(f64::INFINITY),
        Quantity(f64::NEG_INFINITY),
        Quantity(f64::NAN),
    ];
    let laws = vec![verify_comparable(&samples)?];

    info!(scenario = SCENARIO, expectations = expectations.len(), "scenario passed");
    Ok(ScenarioOutcome {
        scenario: SCENARIO,
        expectations: expectations.len(),
        laws,
    })
}
