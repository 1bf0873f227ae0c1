use rand::{Rng, SeedableRng, distr::uniform::Error as UniformError, rngs::StdRng};
use rand_distr::{StandardNormal, Uniform};
use serde::Serialize;
use thiserror::Error;

use crate::values::{Quantity, Record, Tolerance};

#[derive(Debug, Error)]
pub enum SampleError {
    #[error("label alphabet is empty")]
    EmptyAlphabet,
    #[error("invalid sampling range: {0}")]
    Range(#[from] UniformError),
    #[error("chain from {start} in steps of {epsilon}/2 is not finite and strictly increasing")]
    DegenerateChain { start: f64, epsilon: f64 },
}

/// Parameters of a sample run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SampleConfig {
    pub count: usize,
    pub seed: u64,
    /// Letters labels are drawn from. Kept small so that labels tie often.
    pub label_alphabet: String,
    pub label_len_max: usize,
    /// Inclusive range of record counts.
    pub count_range: (i32, i32),
}

impl Default for SampleConfig {
    fn default() -> Self {
        SampleConfig {
            count: 64,
            seed: 42,
            label_alphabet: "abc".to_string(),
            label_len_max: 3,
            count_range: (-3, 3),
        }
    }
}

const SPECIAL_VALUES: [f64; 5] = [0.0, -0.0, f64::INFINITY, f64::NEG_INFINITY, f64::NAN];

/// Random records with short labels over a small alphabet.
pub fn records(config: &SampleConfig) -> Result<Vec<Record>, SampleError> {
    let alphabet: Vec<char> = config.label_alphabet.chars().collect();
    if alphabet.is_empty() {
        return Err(SampleError::EmptyAlphabet);
    }
    let lengths = Uniform::new_inclusive(0, config.label_len_max)?;
    let letters = Uniform::new(0, alphabet.len())?;
    let counts = Uniform::new_inclusive(config.count_range.0, config.count_range.1)?;

    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let len = rng.sample(lengths);
        let mut label = String::with_capacity(len);
        for _ in 0..len {
            label.push(alphabet[rng.sample(letters)]);
        }
        samples.push(Record::new(label, rng.sample(counts)));
    }
    Ok(samples)
}

/// Random quantities: mostly normally distributed, with repeats of earlier values and
/// the occasional signed zero, infinity or NaN.
pub fn quantities(config: &SampleConfig) -> Vec<Quantity> {
    let mut rng = StdRng::seed_from_u64(config.seed);
    let mut samples: Vec<Quantity> = Vec::with_capacity(config.count);
    for _ in 0..config.count {
        let value = if rng.random_bool(0.1) {
            SPECIAL_VALUES[rng.random_range(0..SPECIAL_VALUES.len())]
        } else if !samples.is_empty() && rng.random_bool(0.2) {
            samples[rng.random_range(0..samples.len())].value()
        } else {
            rng.sample::<f64, _>(StandardNormal)
        };
        samples.push(Quantity(value));
    }
    samples
}

/// A strictly increasing chain of `len` quantities starting at `start`, spaced
/// `epsilon / 2` apart, so every adjacent pair is close.
///
/// Fails when a step is lost to rounding or the chain overflows to infinity.
pub fn tolerance_chain(
    start: f64,
    tolerance: Tolerance,
    len: usize,
) -> Result<Vec<Quantity>, SampleError> {
    let step = tolerance.epsilon() / 2.0;
    let chain: Vec<Quantity> = (0..len)
        .map(|i| Quantity(start + i as f64 * step))
        .collect();

    let finite = chain.iter().all(|q| q.value().is_finite());
    let increasing = chain.windows(2).all(|pair| pair[0].value() < pair[1].value());
    if finite && increasing {
        Ok(chain)
    } else {
        Err(SampleError::DegenerateChain {
            start,
            epsilon: tolerance.epsilon(),
        })
    }
}
