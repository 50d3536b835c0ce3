//! Type-erased 2D evaluator handed to raster sinks.

use super::fractal::{Fractal, FractalSettings};
use super::lattice_noise::{GradientNoise, ValueNoise};
use super::Noise2D;
use crate::error::NoiseError;
use crate::rng::DeterministicRng;

/// Any 2D noise this crate can build.
#[derive(Debug, Clone)]
pub enum Evaluator2D {
    /// Value noise.
    Value(ValueNoise),
    /// Gradient noise.
    Gradient(GradientNoise),
    /// Fractal sum of evaluators.
    Fractal(Fractal<Evaluator2D>),
}

impl Evaluator2D {
    /// Seeded value noise with default easing.
    pub fn value(sample_count: usize, seed: u32) -> Result<Self, NoiseError> {
        Ok(Evaluator2D::Value(ValueNoise::new(sample_count, seed)?))
    }

    /// Seeded gradient noise with default easing and offsets.
    pub fn gradient(sample_count: usize, seed: u32) -> Result<Self, NoiseError> {
        Ok(Evaluator2D::Gradient(GradientNoise::new(sample_count, seed)?))
    }
}

impl Noise2D for Evaluator2D {
    #[inline]
    fn sample(&self, x: f64, y: f64) -> f64 {
        match self {
            Evaluator2D::Value(noise) => noise.sample(x, y),
            Evaluator2D::Gradient(noise) => noise.sample(x, y),
            Evaluator2D::Fractal(noise) => noise.sample(x, y),
        }
    }

    fn bounds(&self) -> (f64, f64) {
        match self {
            Evaluator2D::Value(noise) => noise.bounds(),
            Evaluator2D::Gradient(noise) => noise.bounds(),
            Evaluator2D::Fractal(noise) => noise.bounds(),
        }
    }
}

impl From<ValueNoise> for Evaluator2D {
    fn from(noise: ValueNoise) -> Self {
        Evaluator2D::Value(noise)
    }
}

impl From<GradientNoise> for Evaluator2D {
    fn from(noise: GradientNoise) -> Self {
        Evaluator2D::Gradient(noise)
    }
}

impl From<Fractal<Evaluator2D>> for Evaluator2D {
    fn from(noise: Fractal<Evaluator2D>) -> Self {
        Evaluator2D::Fractal(noise)
    }
}

/// Value noise seeded from OS entropy.
pub fn build_value_noise_2d(sample_count: usize) -> Result<Evaluator2D, NoiseError> {
    let mut rng = DeterministicRng::from_entropy();
    Ok(Evaluator2D::Value(ValueNoise::from_rng(sample_count, &mut rng)?))
}

/// Gradient noise seeded from OS entropy.
pub fn build_gradient_noise_2d(sample_count: usize) -> Result<Evaluator2D, NoiseError> {
    let mut rng = DeterministicRng::from_entropy();
    Ok(Evaluator2D::Gradient(GradientNoise::from_rng(
        sample_count,
        &mut rng,
    )?))
}

/// Fractal of `octaves` evaluators, one per call to `base_evaluator_factory`.
///
/// Octave `i` samples at `base_frequency * frequency_mult^i` with weight
/// `base_amplitude * amplitude_mult^i`.
pub fn build_fractal<F>(
    base_evaluator_factory: F,
    octaves: u32,
    base_frequency: f64,
    base_amplitude: f64,
    frequency_mult: f64,
    amplitude_mult: f64,
) -> Result<Evaluator2D, NoiseError>
where
    F: FnMut(u32) -> Result<Evaluator2D, NoiseError>,
{
    let settings = FractalSettings::new(octaves)
        .with_base(base_frequency, base_amplitude)
        .with_frequency_mult(frequency_mult)
        .with_amplitude_mult(amplitude_mult);
    Ok(Evaluator2D::Fractal(Fractal::build(
        base_evaluator_factory,
        settings,
    )?))
}
