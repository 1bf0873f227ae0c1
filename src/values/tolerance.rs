use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Copy, PartialEq, Error)]
pub enum ToleranceError {
    #[error("tolerance must be finite and strictly positive, got {0}")]
    InvalidEpsilon(f64),
}

/// A closeness threshold, `|a - b| < epsilon`.
///
/// Closeness is neither transitive nor a function of its two operands alone (epsilon is
/// a third operand, a reference scale), so it is only suitable for approximate checks
/// such as convergence, never as the equality of a type.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Tolerance {
    epsilon: f64,
}

impl Tolerance {
    pub const DEFAULT: Tolerance = Tolerance { epsilon: 1e-6 };

    pub fn new(epsilon: f64) -> Result<Self, ToleranceError> {
        if epsilon.is_finite() && epsilon > 0.0 {
            Ok(Tolerance { epsilon })
        } else {
            Err(ToleranceError::InvalidEpsilon(epsilon))
        }
    }

    pub fn epsilon(&self) -> f64 {
        self.epsilon
    }

    pub fn close(&self, a: f64, b: f64) -> bool {
        (a - b).abs() < self.epsilon
    }

    /// Whether an iterative computation has reached `target`.
    pub fn converged(&self, value: f64, target: f64) -> bool {
        self.close(value, target)
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Tolerance::DEFAULT
    }
}
