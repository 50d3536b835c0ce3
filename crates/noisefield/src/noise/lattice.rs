//! Lattice sample tables.
//!
//! A [`LatticeTable`] pairs a [`PermutationTable`] with one payload per
//! permutation slot and resolves integer lattice coordinates to payloads.

use std::f64::consts::TAU;

use super::permutation::PermutationTable;
use crate::error::NoiseError;
use crate::rng::RandomSource;

/// Offset from a lattice corner to the sample point, after any
/// [`OffsetMode`](super::OffsetMode) has been applied.
pub type Offset = [f64; 2];

/// Payload anchored at a lattice point.
pub trait LatticeSample: Copy + std::fmt::Debug + Send + Sync + 'static {
    /// Human readable kind, used in log fields.
    const KIND: &'static str;

    /// Draw a random payload.
    fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Self;

    /// The corner's contribution at `offset` from the corner.
    fn contribution(&self, offset: Offset) -> f64;

    /// Bounds of the interpolated field in the given number of dimensions.
    fn bounds(dimensions: u32) -> (f64, f64);
}

/// A scalar in `[0, 1)`; value noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Scalar(pub f64);

impl LatticeSample for Scalar {
    const KIND: &'static str = "value";

    fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Scalar(rng.uniform_float())
    }

    #[inline]
    fn contribution(&self, _offset: Offset) -> f64 {
        self.0
    }

    fn bounds(_dimensions: u32) -> (f64, f64) {
        (0.0, 1.0)
    }
}

/// A unit direction; gradient noise.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Gradient(pub [f64; 2]);

impl Gradient {
    /// The unit vector at angle `theta` radians.
    pub fn from_angle(theta: f64) -> Self {
        Gradient([theta.cos(), theta.sin()])
    }
}

impl LatticeSample for Gradient {
    const KIND: &'static str = "gradient";

    fn draw<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Gradient::from_angle(rng.uniform_float() * TAU)
    }

    #[inline]
    fn contribution(&self, offset: Offset) -> f64 {
        self.0[0] * offset[0] + self.0[1] * offset[1]
    }

    /// `sqrt(d) / 2`, reached at a cell centre when every gradient points
    /// at it. Holds for every easing and offset mode.
    fn bounds(dimensions: u32) -> (f64, f64) {
        let extent = (dimensions as f64).sqrt() / 2.0;
        (-extent, extent)
    }
}

/// Immutable permutation plus per-slot samples.
#[derive(Debug, Clone, PartialEq)]
pub struct LatticeTable<S> {
    permutation: PermutationTable,
    samples: Vec<S>,
}

impl<S: LatticeSample> LatticeTable<S> {
    /// Shuffle a permutation and draw `sample_count` samples.
    pub fn build<R: RandomSource + ?Sized>(
        sample_count: usize,
        rng: &mut R,
    ) -> Result<Self, NoiseError> {
        let permutation = PermutationTable::build(sample_count, rng)?;
        let samples = (0..sample_count).map(|_| S::draw(rng)).collect();
        Ok(Self {
            permutation,
            samples,
        })
    }

    /// Assemble a table from explicit parts.
    pub fn from_parts(permutation: PermutationTable, samples: Vec<S>) -> Result<Self, NoiseError> {
        let expected = permutation.sample_count();
        if samples.len() != expected {
            return Err(NoiseError::SampleCountMismatch {
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self {
            permutation,
            samples,
        })
    }

    /// The period N.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.samples.len()
    }

    /// The permutation table.
    pub fn permutation(&self) -> &PermutationTable {
        &self.permutation
    }

    /// The raw samples, indexed by permutation slot.
    pub fn samples(&self) -> &[S] {
        &self.samples
    }

    /// `samples[perm[x mod N]]`.
    #[inline]
    pub fn lookup_1d(&self, x: i64) -> S {
        self.samples[self.permutation.index_1d(x)]
    }

    /// `samples[perm[perm[x mod N] + (y mod N)]]`.
    #[inline]
    pub fn lookup_2d(&self, x: i64, y: i64) -> S {
        self.samples[self.permutation.index_2d(x, y)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::DeterministicRng;

    fn scenario_table() -> LatticeTable<Scalar> {
        let permutation = PermutationTable::from_permutation(vec![2, 0, 3, 1]).unwrap();
        let samples = [0.1, 0.9, 0.5, 0.3].map(Scalar).to_vec();
        LatticeTable::from_parts(permutation, samples).unwrap()
    }

    #[test]
    fn test_lookup_2d_scenario() {
        let table = scenario_table();
        // samples[perm[perm[0] + 0]] = samples[perm[2]] = samples[3]
        assert_eq!(table.lookup_2d(0, 0), Scalar(0.3));
    }

    #[test]
    fn test_lookup_1d() {
        let table = scenario_table();
        assert_eq!(table.lookup_1d(0), Scalar(0.5));
        assert_eq!(table.lookup_1d(1), Scalar(0.1));
        assert_eq!(table.lookup_1d(5), Scalar(0.1));
        assert_eq!(table.lookup_1d(-3), Scalar(0.1));
    }

    #[test]
    fn test_lookup_is_periodic() {
        let mut rng = DeterministicRng::new(3);
        let table = LatticeTable::<Scalar>::build(7, &mut rng).unwrap();
        for x in -10..10 {
            assert_eq!(table.lookup_1d(x), table.lookup_1d(x + 7));
            for y in -10..10 {
                assert_eq!(table.lookup_2d(x, y), table.lookup_2d(x + 7, y));
                assert_eq!(table.lookup_2d(x, y), table.lookup_2d(x, y - 7));
            }
        }
    }

    #[test]
    fn test_mismatched_samples_rejected() {
        let permutation = PermutationTable::from_permutation(vec![1, 0]).unwrap();
        let result = LatticeTable::from_parts(permutation, vec![Scalar(0.5)]);
        assert_eq!(
            result,
            Err(NoiseError::SampleCountMismatch {
                expected: 2,
                actual: 1
            })
        );
    }

    #[test]
    fn test_scalar_samples_in_unit_interval() {
        let mut rng = DeterministicRng::new(11);
        let table = LatticeTable::<Scalar>::build(256, &mut rng).unwrap();
        assert!(table.samples().iter().all(|s| (0.0..1.0).contains(&s.0)));
    }

    #[test]
    fn test_gradients_are_unit_length() {
        let mut rng = DeterministicRng::new(11);
        let table = LatticeTable::<Gradient>::build(256, &mut rng).unwrap();
        for g in table.samples() {
            let len = (g.0[0] * g.0[0] + g.0[1] * g.0[1]).sqrt();
            assert!((len - 1.0).abs() < 1e-12, "gradient length {}", len);
        }
    }

    #[test]
    fn test_gradient_contribution_is_dot_product() {
        let g = Gradient([0.6, 0.8]);
        assert!((g.contribution([1.0, 1.0]) - 1.4).abs() < 1e-12);
        assert_eq!(g.contribution([0.0, 0.0]), 0.0);
    }
}
