//! Noise field, fractal, and raster parameter types.

use serde::{Deserialize, Serialize};

/// Payload attached to each lattice point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NoiseKind {
    /// A random scalar in [0, 1) per lattice point.
    Value,
    /// A random unit direction per lattice point (Perlin-style).
    Gradient,
}

/// Easing applied to the blend weight before interpolating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationKind {
    /// Plain linear blending.
    Linear,
    /// `(1 - cos(mu * pi)) / 2`.
    #[default]
    Cosine,
    /// `t * t * (3 - 2t)`.
    Smoothstep,
    /// `6t^5 - 15t^4 + 10t^3`.
    Quintic,
}

/// How gradient noise forms the vector dotted with each corner gradient.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OffsetKind {
    /// Offset from the lattice corner to the sample point.
    #[default]
    CornerToPoint,
    /// Legacy `(1 - x_mu, y_mu)` style weights. Not standard Perlin noise.
    Complementary,
}

/// Whether fractal octaves own their lattice tables.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OctaveLattice {
    /// Each octave builds its own table from a derived seed.
    #[default]
    Independent,
    /// All octaves evaluate one table at different frequencies.
    Shared,
}

/// How the raster sink maps sampled values to [0, 1].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NormalizationKind {
    /// Rescale the evaluator's documented bounds to [0, 1] and clamp.
    #[default]
    Clamp,
    /// Rescale by the observed minimum and maximum of the grid.
    MinMax,
}

/// Parameters of a single lattice noise field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldParams {
    /// Sample kind.
    pub kind: NoiseKind,
    /// Number of lattice samples; the field repeats with this period on each axis.
    #[serde(default = "default_sample_count")]
    pub sample_count: u32,
    /// Easing kernel.
    #[serde(default)]
    pub easing: InterpolationKind,
    /// Gradient offset convention (ignored for value noise).
    #[serde(default)]
    pub offsets: OffsetKind,
}

fn default_sample_count() -> u32 {
    256
}

impl FieldParams {
    /// Creates field params with default easing and offsets.
    pub fn new(kind: NoiseKind, sample_count: u32) -> Self {
        Self {
            kind,
            sample_count,
            easing: InterpolationKind::default(),
            offsets: OffsetKind::default(),
        }
    }

    /// Sets the easing kernel.
    pub fn with_easing(mut self, easing: InterpolationKind) -> Self {
        self.easing = easing;
        self
    }

    /// Sets the gradient offset convention.
    pub fn with_offsets(mut self, offsets: OffsetKind) -> Self {
        self.offsets = offsets;
        self
    }
}

impl Default for FieldParams {
    fn default() -> Self {
        Self::new(NoiseKind::Value, default_sample_count())
    }
}

/// Parameters of a fractal (octave) sum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FractalParams {
    /// Number of octaves (at least 1).
    pub octaves: u32,
    /// Frequency of the first octave.
    #[serde(default = "default_one")]
    pub base_frequency: f64,
    /// Amplitude of the first octave.
    #[serde(default = "default_one")]
    pub base_amplitude: f64,
    /// Frequency multiplier per octave (lacunarity).
    #[serde(default = "default_frequency_mult")]
    pub frequency_mult: f64,
    /// Amplitude multiplier per octave (persistence).
    #[serde(default = "default_amplitude_mult")]
    pub amplitude_mult: f64,
    /// Lattice sharing between octaves.
    #[serde(default)]
    pub lattice: OctaveLattice,
}

fn default_one() -> f64 {
    1.0
}

fn default_frequency_mult() -> f64 {
    2.0
}

fn default_amplitude_mult() -> f64 {
    0.5
}

impl FractalParams {
    /// Creates fractal params with the usual doubling/halving progression.
    pub fn new(octaves: u32) -> Self {
        Self {
            octaves,
            base_frequency: default_one(),
            base_amplitude: default_one(),
            frequency_mult: default_frequency_mult(),
            amplitude_mult: default_amplitude_mult(),
            lattice: OctaveLattice::default(),
        }
    }

    /// Sets the base frequency and amplitude.
    pub fn with_base(mut self, frequency: f64, amplitude: f64) -> Self {
        self.base_frequency = frequency;
        self.base_amplitude = amplitude;
        self
    }

    /// Sets the per-octave frequency and amplitude multipliers.
    pub fn with_multipliers(mut self, frequency_mult: f64, amplitude_mult: f64) -> Self {
        self.frequency_mult = frequency_mult;
        self.amplitude_mult = amplitude_mult;
        self
    }

    /// Sets the lattice sharing mode.
    pub fn with_lattice(mut self, lattice: OctaveLattice) -> Self {
        self.lattice = lattice;
        self
    }
}

/// Parameters for sampling the field onto a pixel grid.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RasterParams {
    /// Grid resolution [width, height] in pixels.
    pub resolution: [u32; 2],
    /// Noise-space distance between neighbouring pixels.
    #[serde(default = "default_scale")]
    pub scale: f64,
    /// Normalization applied before quantizing.
    #[serde(default)]
    pub normalization: NormalizationKind,
}

fn default_scale() -> f64 {
    0.01
}

impl RasterParams {
    /// Creates raster params with the default scale and normalization.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            resolution: [width, height],
            scale: default_scale(),
            normalization: NormalizationKind::default(),
        }
    }

    /// Sets the coordinate scale.
    pub fn with_scale(mut self, scale: f64) -> Self {
        self.scale = scale;
        self
    }

    /// Sets the normalization.
    pub fn with_normalization(mut self, normalization: NormalizationKind) -> Self {
        self.normalization = normalization;
        self
    }
}

impl Default for RasterParams {
    fn default() -> Self {
        Self::new(256, 256)
    }
}
