//! Pixel sink: samples an evaluator over a grid and normalizes the result.

use tracing::debug;

use crate::noise::Noise2D;

/// Grayscale buffer (single channel).
#[derive(Debug, Clone, PartialEq)]
pub struct GrayscaleBuffer {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Pixel data (single channel, row-major).
    pub data: Vec<f64>,
}

impl GrayscaleBuffer {
    /// Create a new grayscale buffer filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Get a pixel at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Set a pixel at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    /// Smallest and largest non-NaN values, or `None` if there are none.
    pub fn min_max(&self) -> Option<(f64, f64)> {
        self.data
            .iter()
            .copied()
            .filter(|v| !v.is_nan())
            .fold(None, |acc, v| match acc {
                None => Some((v, v)),
                Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
            })
    }

    /// Convert to 8-bit bytes, clamping to `[0, 1]`. NaN maps to 0.
    pub fn to_bytes(&self) -> Vec<u8> {
        self.data
            .iter()
            .map(|&v| (v.clamp(0.0, 1.0) * 255.0).round() as u8)
            .collect()
    }
}

/// How raw samples are mapped to `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Normalization {
    /// Leave values as sampled.
    None,
    /// Rescale the evaluator's documented bounds to `[0, 1]` and clamp.
    #[default]
    Clamp,
    /// Rescale by the observed extremes. A constant grid maps to 0.
    MinMax,
}

impl Normalization {
    /// Normalize a buffer in place. `bounds` are the evaluator's bounds.
    pub fn apply(self, buffer: &mut GrayscaleBuffer, bounds: (f64, f64)) {
        let (lo, hi) = match self {
            Normalization::None => return,
            Normalization::Clamp => bounds,
            Normalization::MinMax => match buffer.min_max() {
                Some(extremes) => extremes,
                None => return,
            },
        };

        let range = hi - lo;
        for v in &mut buffer.data {
            *v = if range > 0.0 {
                ((*v - lo) / range).clamp(0.0, 1.0)
            } else {
                0.0
            };
        }
    }
}

/// Sample `noise` once per cell at `(x * scale, y * scale)`.
pub fn rasterize<N: Noise2D + ?Sized>(
    noise: &N,
    width: u32,
    height: u32,
    scale: f64,
) -> GrayscaleBuffer {
    let mut buffer = GrayscaleBuffer::new(width, height, 0.0);
    for y in 0..height {
        for x in 0..width {
            buffer.set(x, y, noise.sample(x as f64 * scale, y as f64 * scale));
        }
    }
    buffer
}

/// Sample and normalize in one step.
pub fn rasterize_normalized<N: Noise2D + ?Sized>(
    noise: &N,
    width: u32,
    height: u32,
    scale: f64,
    normalization: Normalization,
) -> GrayscaleBuffer {
    let mut buffer = rasterize(noise, width, height, scale);
    normalization.apply(&mut buffer, noise.bounds());
    debug!(width, height, scale, ?normalization, "rasterized noise");
    buffer
}
