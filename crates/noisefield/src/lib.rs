//! Noisefield
//!
//! Deterministic lattice noise: value and gradient noise in one and two
//! dimensions, fractal octave sums, and a raster sink with PNG export.
//!
//! # Determinism
//!
//! Every table is built from a [`RandomSource`]. With a seeded
//! [`DeterministicRng`] the same seed produces the same table and therefore
//! bit-identical samples. Fractal octaves seeded through [`generate`] derive
//! their per-octave seeds with BLAKE3, so adding an octave never perturbs the
//! ones before it.
//!
//! # Example
//!
//! ```
//! use noisefield::{build_fractal, Evaluator2D, Noise2D};
//!
//! let noise = build_fractal(|i| Evaluator2D::gradient(256, 7 + i), 4, 0.5, 1.0, 2.0, 0.5)
//!     .unwrap();
//! let (lo, hi) = noise.bounds();
//! let v = noise.sample(12.3, 4.56);
//! assert!(v >= lo && v <= hi);
//! ```
//!
//! # Modules
//!
//! - [`rng`]: Random sources and octave seed derivation
//! - [`noise`]: Permutation and lattice tables, kernels, evaluators, fractals
//! - [`raster`]: Grid sampling and normalization
//! - [`png`]: Deterministic grayscale PNG output
//! - [`generate`]: Spec-driven construction and rendering

pub mod error;
pub mod generate;
pub mod noise;
pub mod png;
pub mod raster;
pub mod rng;

pub use error::NoiseError;
pub use generate::{build_evaluator, render, render_png, GenerateError};
pub use noise::{
    build_fractal, build_gradient_noise_2d, build_value_noise_2d, Easing, Evaluator2D, Fractal,
    FractalSettings, GradientNoise, Noise1D, Noise2D, OffsetMode, ValueNoise,
};
pub use png::{PngConfig, PngError};
pub use raster::{rasterize, rasterize_normalized, GrayscaleBuffer, Normalization};
pub use rng::{DeterministicRng, RandomSource};
