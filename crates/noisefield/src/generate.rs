//! Spec-driven generation.
//!
//! Turns a [`NoiseSpec`] document into an [`Evaluator2D`] and a normalized
//! raster, validating the spec first.

use std::path::Path;

use noisefield_spec::validation::validate_spec;
use noisefield_spec::{
    FieldParams, FractalParams, InterpolationKind, NoiseKind, NoiseSpec, NormalizationKind,
    OctaveLattice, OffsetKind, SpecError,
};
use thiserror::Error;
use tracing::{debug, warn};

use crate::error::NoiseError;
use crate::noise::{
    Easing, Evaluator2D, Fractal, FractalSettings, GradientNoise, OffsetMode, ValueNoise,
};
use crate::png::{write_grayscale, PngConfig, PngError};
use crate::raster::{rasterize_normalized, GrayscaleBuffer, Normalization};
use crate::rng::DeterministicRng;

/// Errors from spec-driven generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Spec(#[from] SpecError),

    #[error("noise construction failed: {0}")]
    Noise(#[from] NoiseError),

    #[error("PNG export failed: {0}")]
    Png(#[from] PngError),
}

impl From<InterpolationKind> for Easing {
    fn from(kind: InterpolationKind) -> Self {
        match kind {
            InterpolationKind::Linear => Easing::Linear,
            InterpolationKind::Cosine => Easing::Cosine,
            InterpolationKind::Smoothstep => Easing::Smoothstep,
            InterpolationKind::Quintic => Easing::Quintic,
        }
    }
}

impl From<OffsetKind> for OffsetMode {
    fn from(kind: OffsetKind) -> Self {
        match kind {
            OffsetKind::CornerToPoint => OffsetMode::CornerToPoint,
            OffsetKind::Complementary => OffsetMode::Complementary,
        }
    }
}

impl From<NormalizationKind> for Normalization {
    fn from(kind: NormalizationKind) -> Self {
        match kind {
            NormalizationKind::Clamp => Normalization::Clamp,
            NormalizationKind::MinMax => Normalization::MinMax,
        }
    }
}

impl From<&FractalParams> for FractalSettings {
    fn from(params: &FractalParams) -> Self {
        FractalSettings::new(params.octaves)
            .with_base(params.base_frequency, params.base_amplitude)
            .with_frequency_mult(params.frequency_mult)
            .with_amplitude_mult(params.amplitude_mult)
    }
}

/// Build the field described by `field` from `seed`.
fn build_field(field: &FieldParams, seed: u32) -> Result<Evaluator2D, NoiseError> {
    let sample_count = field.sample_count as usize;
    let easing = Easing::from(field.easing);
    let evaluator = match field.kind {
        NoiseKind::Value => ValueNoise::new(sample_count, seed)?
            .with_easing(easing)
            .into(),
        NoiseKind::Gradient => GradientNoise::new(sample_count, seed)?
            .with_easing(easing)
            .with_offsets(field.offsets.into())
            .into(),
    };
    Ok(evaluator)
}

/// Validate `spec` and build its evaluator.
pub fn build_evaluator(spec: &NoiseSpec) -> Result<Evaluator2D, GenerateError> {
    let warnings = validate_spec(spec).into_result()?;
    for warning in &warnings {
        warn!(code = %warning.code, path = ?warning.path, "{}", warning.message);
    }

    let Some(ref fractal) = spec.fractal else {
        return Ok(build_field(&spec.field, spec.seed)?);
    };

    let settings = FractalSettings::from(fractal);
    let composed = match fractal.lattice {
        OctaveLattice::Independent => Fractal::build(
            |octave| {
                let seed = DeterministicRng::derive_octave_seed(spec.seed, octave);
                build_field(&spec.field, seed)
            },
            settings,
        )?,
        OctaveLattice::Shared => Fractal::shared(build_field(&spec.field, spec.seed)?, settings)?,
    };
    Ok(composed.into())
}

/// Validate `spec`, build its evaluator, and sample it onto a normalized grid.
pub fn render(spec: &NoiseSpec) -> Result<GrayscaleBuffer, GenerateError> {
    let evaluator = build_evaluator(spec)?;
    let raster = spec.raster_or_default();
    let [width, height] = raster.resolution;
    debug!(seed = spec.seed, width, height, "rendering noise spec");
    Ok(rasterize_normalized(
        &evaluator,
        width,
        height,
        raster.scale,
        raster.normalization.into(),
    ))
}

/// Render `spec` and write it to `path` as an 8-bit grayscale PNG.
pub fn render_png(spec: &NoiseSpec, path: &Path) -> Result<GrayscaleBuffer, GenerateError> {
    let buffer = render(spec)?;
    write_grayscale(&buffer, path, &PngConfig::default())?;
    Ok(buffer)
}
