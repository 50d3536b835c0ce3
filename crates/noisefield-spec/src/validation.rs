//! Spec validation.
//!
//! Validation collects every problem in a spec rather than stopping at the
//! first one. Errors make the spec unusable; warnings flag legal but unusual
//! settings.

use crate::error::{ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode};
use crate::recipe::{FieldParams, FractalParams, RasterParams};
use crate::spec::NoiseSpec;

/// Largest accepted lattice sample count.
pub const MAX_SAMPLE_COUNT: u32 = 1 << 20;

/// Largest accepted raster dimension.
pub const MAX_DIMENSION: u32 = 8192;

/// Octave count above which a warning is emitted.
pub const OCTAVE_WARNING_THRESHOLD: u32 = 16;

/// Largest accepted octave count.
pub const MAX_OCTAVES: u32 = 64;

/// Validates a complete spec.
pub fn validate_spec(spec: &NoiseSpec) -> ValidationResult {
    let mut result = ValidationResult::success();

    validate_field(&spec.field, &mut result);
    if let Some(ref fractal) = spec.fractal {
        validate_fractal(fractal, &mut result);
    }
    if let Some(ref raster) = spec.raster {
        validate_raster(raster, &mut result);
    }

    result
}

fn validate_field(field: &FieldParams, result: &mut ValidationResult) {
    if field.sample_count == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidSampleCount,
            "sample_count must be at least 1",
            "field.sample_count",
        ));
        return;
    }

    if field.sample_count > MAX_SAMPLE_COUNT {
        result.add_error(ValidationError::with_path(
            ErrorCode::SampleCountTooLarge,
            format!(
                "sample_count must be at most {}, got {}",
                MAX_SAMPLE_COUNT, field.sample_count
            ),
            "field.sample_count",
        ));
        return;
    }

    if !field.sample_count.is_power_of_two() {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SampleCountNotPowerOfTwo,
            format!("sample_count {} is not a power of two", field.sample_count),
            "field.sample_count",
        ));
    }
}

fn validate_fractal(fractal: &FractalParams, result: &mut ValidationResult) {
    if fractal.octaves == 0 {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidOctaveCount,
            "octaves must be at least 1",
            "fractal.octaves",
        ));
    } else if fractal.octaves == 1 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::SingleOctaveFractal,
            "a single-octave fractal is the base field scaled",
            "fractal.octaves",
        ));
    } else if fractal.octaves > MAX_OCTAVES {
        result.add_error(ValidationError::with_path(
            ErrorCode::TooManyOctaves,
            format!(
                "octaves must be at most {}, got {}",
                MAX_OCTAVES, fractal.octaves
            ),
            "fractal.octaves",
        ));
    } else if fractal.octaves > OCTAVE_WARNING_THRESHOLD {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::ExcessiveOctaves,
            format!(
                "{} octaves exceeds {}; later octaves are below pixel scale",
                fractal.octaves, OCTAVE_WARNING_THRESHOLD
            ),
            "fractal.octaves",
        ));
    }

    let positives = [
        (
            ErrorCode::InvalidBaseFrequency,
            "fractal.base_frequency",
            fractal.base_frequency,
        ),
        (
            ErrorCode::InvalidBaseAmplitude,
            "fractal.base_amplitude",
            fractal.base_amplitude,
        ),
        (
            ErrorCode::InvalidFrequencyMult,
            "fractal.frequency_mult",
            fractal.frequency_mult,
        ),
        (
            ErrorCode::InvalidAmplitudeMult,
            "fractal.amplitude_mult",
            fractal.amplitude_mult,
        ),
    ];
    let mut factors_ok = true;
    for (code, path, value) in positives {
        if let Err(message) = validate_positive(path, value) {
            result.add_error(ValidationError::with_path(code, message, path));
            factors_ok = false;
        }
    }

    if factors_ok && fractal.octaves <= MAX_OCTAVES {
        if let Err(message) = validate_octave_progression(fractal) {
            result.add_error(ValidationError::with_path(
                ErrorCode::OctaveOutOfRange,
                message,
                "fractal",
            ));
        }
    }

    if fractal.amplitude_mult.is_finite() && fractal.amplitude_mult > 1.0 {
        result.add_warning(ValidationWarning::with_path(
            WarningCode::AmplitudeGrows,
            format!(
                "amplitude_mult {} makes finer octaves dominate",
                fractal.amplitude_mult
            ),
            "fractal.amplitude_mult",
        ));
    }
}

/// Checks that every octave's derived frequency and amplitude stays positive
/// and finite.
fn validate_octave_progression(fractal: &FractalParams) -> Result<(), String> {
    let mut frequency = fractal.base_frequency;
    let mut amplitude = fractal.base_amplitude;
    for octave in 0..fractal.octaves {
        validate_positive(&format!("octave {} frequency", octave), frequency)?;
        validate_positive(&format!("octave {} amplitude", octave), amplitude)?;
        frequency *= fractal.frequency_mult;
        amplitude *= fractal.amplitude_mult;
    }
    Ok(())
}

fn validate_raster(raster: &RasterParams, result: &mut ValidationResult) {
    let [width, height] = raster.resolution;
    if let Err(message) = validate_resolution(width, height) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidResolution,
            message,
            "raster.resolution",
        ));
    }

    if let Err(message) = validate_positive("raster.scale", raster.scale) {
        result.add_error(ValidationError::with_path(
            ErrorCode::InvalidScale,
            message,
            "raster.scale",
        ));
    }
}

/// Validates that a value is finite and strictly positive.
///
/// # Example
/// ```
/// use noisefield_spec::validation::validate_positive;
///
/// assert!(validate_positive("scale", 0.5).is_ok());
/// assert!(validate_positive("scale", 0.0).is_err());
/// assert!(validate_positive("scale", f64::NAN).is_err());
/// ```
pub fn validate_positive(name: &str, value: f64) -> Result<(), String> {
    if !value.is_finite() {
        return Err(format!("{} must be finite, got {}", name, value));
    }
    if value <= 0.0 {
        return Err(format!("{} must be positive, got {}", name, value));
    }
    Ok(())
}

/// Validates that a resolution is at least 1x1 and within [`MAX_DIMENSION`].
pub fn validate_resolution(width: u32, height: u32) -> Result<(), String> {
    if width == 0 || height == 0 {
        return Err(format!(
            "resolution must be at least 1x1, got [{}, {}]",
            width, height
        ));
    }
    if width > MAX_DIMENSION || height > MAX_DIMENSION {
        return Err(format!(
            "resolution is too large: max is {}x{}, got [{}, {}]",
            MAX_DIMENSION, MAX_DIMENSION, width, height
        ));
    }
    Ok(())
}
