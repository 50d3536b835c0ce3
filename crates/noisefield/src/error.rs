//! Construction errors.
//!
//! Every variant is an invalid argument detected while building a table or
//! evaluator. Evaluation itself never fails.

use thiserror::Error;

/// Errors raised while constructing noise tables, evaluators, or fractals.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum NoiseError {
    #[error("sample count must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("uniform_int upper bound must be positive, got {0}")]
    InvalidUpperBound(usize),

    #[error("octave count must be at least 1, got {0}")]
    InvalidOctaveCount(u32),

    #[error("octave count must be at most {max}, got {octaves}")]
    TooManyOctaves { octaves: usize, max: usize },

    #[error("{name} must be positive and finite, got {value}")]
    InvalidMultiplier { name: &'static str, value: f64 },

    #[error("permutation of length {len} is not a bijection over 0..{len}")]
    NotAPermutation { len: usize },

    #[error("expected {expected} lattice samples, got {actual}")]
    SampleCountMismatch { expected: usize, actual: usize },
}

impl NoiseError {
    /// Checks that `value` is finite and strictly positive.
    pub(crate) fn require_positive(name: &'static str, value: f64) -> Result<(), NoiseError> {
        if value.is_finite() && value > 0.0 {
            Ok(())
        } else {
            Err(NoiseError::InvalidMultiplier { name, value })
        }
    }
}
