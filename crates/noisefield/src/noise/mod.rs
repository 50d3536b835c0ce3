//! Noise generation primitives.
//!
//! Tables are built once from a [`RandomSource`](crate::rng::RandomSource)
//! and never mutated, so every evaluator here can be shared across threads
//! and sampled without locking.

mod evaluator;
mod fractal;
mod interpolate;
mod lattice;
mod lattice_noise;
mod permutation;

pub use evaluator::{build_fractal, build_gradient_noise_2d, build_value_noise_2d, Evaluator2D};
pub use fractal::{Fractal, FractalSettings, Octave};
pub use interpolate::{bilinear, ease_cosine, lerp, quintic, smoothstep, Easing};
pub use lattice::{Gradient, LatticeSample, LatticeTable, Offset, Scalar};
pub use lattice_noise::{GradientNoise, LatticeNoise, OffsetMode, ValueNoise};
pub use permutation::{shuffle, PermutationTable};

/// Trait for 2D noise generators.
pub trait Noise2D {
    /// Sample the noise at a given 2D coordinate.
    ///
    /// Non-finite coordinates produce NaN.
    fn sample(&self, x: f64, y: f64) -> f64;

    /// Documented `(min, max)` range of [`sample`](Noise2D::sample).
    fn bounds(&self) -> (f64, f64);

    /// Sample and rescale [`bounds`](Noise2D::bounds) to `[0, 1]`, clamping.
    fn sample_01(&self, x: f64, y: f64) -> f64 {
        let (lo, hi) = self.bounds();
        ((self.sample(x, y) - lo) / (hi - lo)).clamp(0.0, 1.0)
    }
}

/// Trait for 1D noise generators.
pub trait Noise1D {
    /// Sample the noise at a given coordinate.
    ///
    /// Non-finite coordinates produce NaN.
    fn sample_1d(&self, x: f64) -> f64;

    /// Documented `(min, max)` range of [`sample_1d`](Noise1D::sample_1d).
    fn bounds_1d(&self) -> (f64, f64);
}
