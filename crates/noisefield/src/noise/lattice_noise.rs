//! Value and gradient noise over a lattice table.

use std::sync::Arc;

use tracing::debug;

use super::interpolate::Easing;
use super::lattice::{Gradient, LatticeSample, LatticeTable, Offset, Scalar};
use super::{Noise1D, Noise2D};
use crate::error::NoiseError;
use crate::rng::{DeterministicRng, RandomSource};

/// How the vector dotted with a corner gradient is formed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum OffsetMode {
    /// Offset from the lattice corner to the sample point, e.g.
    /// `(x_mu - 1, y_mu)` for the `(x1, y0)` corner. Standard Perlin noise.
    #[default]
    CornerToPoint,
    /// Absolute distances to the corner, e.g. `(1 - x_mu, y_mu)` for the
    /// `(x1, y0)` corner. Matches older output but is not standard Perlin
    /// noise and is not smooth across cell boundaries.
    Complementary,
}

impl OffsetMode {
    #[inline]
    fn apply(self, dx: f64, dy: f64) -> Offset {
        match self {
            OffsetMode::CornerToPoint => [dx, dy],
            OffsetMode::Complementary => [dx.abs(), dy.abs()],
        }
    }
}

/// Lattice noise, parametrized by sample kind and easing.
///
/// Cloning shares the underlying table.
#[derive(Debug, Clone)]
pub struct LatticeNoise<S> {
    table: Arc<LatticeTable<S>>,
    easing: Easing,
    offsets: OffsetMode,
}

/// Noise interpolating a random scalar per lattice point. Range `[0, 1)`.
pub type ValueNoise = LatticeNoise<Scalar>;

/// Noise interpolating gradient/offset dot products (Perlin-style). Zero at
/// every lattice point.
pub type GradientNoise = LatticeNoise<Gradient>;

impl<S: LatticeSample> LatticeNoise<S> {
    /// Create a noise field with `sample_count` lattice samples from a seed.
    pub fn new(sample_count: usize, seed: u32) -> Result<Self, NoiseError> {
        let mut rng = DeterministicRng::new(seed);
        Self::from_rng(sample_count, &mut rng)
    }

    /// Create a noise field drawing from the given source.
    pub fn from_rng<R: RandomSource + ?Sized>(
        sample_count: usize,
        rng: &mut R,
    ) -> Result<Self, NoiseError> {
        let table = LatticeTable::build(sample_count, rng)?;
        debug!(kind = S::KIND, sample_count, "built lattice table");
        Ok(Self::from_table(table))
    }

    /// Wrap an existing table with default easing and offsets.
    pub fn from_table(table: LatticeTable<S>) -> Self {
        Self {
            table: Arc::new(table),
            easing: Easing::default(),
            offsets: OffsetMode::default(),
        }
    }

    /// Set the easing kernel.
    pub fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Set the offset mode. Only gradient noise is affected.
    pub fn with_offsets(mut self, offsets: OffsetMode) -> Self {
        self.offsets = offsets;
        self
    }

    /// The lattice table.
    pub fn table(&self) -> &LatticeTable<S> {
        &self.table
    }

    /// The easing kernel.
    pub fn easing(&self) -> Easing {
        self.easing
    }

    /// The period on each axis.
    pub fn sample_count(&self) -> usize {
        self.table.sample_count()
    }

    /// Lattice cell of `x` wrapped into `[0, N)`, and the offset within it.
    #[inline]
    fn cell(&self, x: f64) -> (i64, f64) {
        let floor = x.floor();
        let wrapped = floor.rem_euclid(self.table.sample_count() as f64);
        (wrapped as i64, x - floor)
    }

    #[inline]
    fn corner_2d(&self, x: i64, y: i64, dx: f64, dy: f64) -> f64 {
        self.table
            .lookup_2d(x, y)
            .contribution(self.offsets.apply(dx, dy))
    }

    #[inline]
    fn corner_1d(&self, x: i64, dx: f64) -> f64 {
        self.table
            .lookup_1d(x)
            .contribution(self.offsets.apply(dx, 0.0))
    }
}

impl<S: LatticeSample> Noise2D for LatticeNoise<S> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        if !(x.is_finite() && y.is_finite()) {
            return f64::NAN;
        }

        let (x0, x_mu) = self.cell(x);
        let (y0, y_mu) = self.cell(y);
        let x1 = x0 + 1;
        let y1 = y0 + 1;

        let n00 = self.corner_2d(x0, y0, x_mu, y_mu);
        let n10 = self.corner_2d(x1, y0, x_mu - 1.0, y_mu);
        let n01 = self.corner_2d(x0, y1, x_mu, y_mu - 1.0);
        let n11 = self.corner_2d(x1, y1, x_mu - 1.0, y_mu - 1.0);

        self.easing.interpolate_2d(n00, n10, n01, n11, x_mu, y_mu)
    }

    fn bounds(&self) -> (f64, f64) {
        S::bounds(2)
    }
}

impl<S: LatticeSample> Noise1D for LatticeNoise<S> {
    fn sample_1d(&self, x: f64) -> f64 {
        if !x.is_finite() {
            return f64::NAN;
        }

        let (x0, mu) = self.cell(x);
        let n0 = self.corner_1d(x0, mu);
        let n1 = self.corner_1d(x0 + 1, mu - 1.0);

        self.easing.interpolate(n0, n1, mu)
    }

    fn bounds_1d(&self) -> (f64, f64) {
        S::bounds(1)
    }
}
