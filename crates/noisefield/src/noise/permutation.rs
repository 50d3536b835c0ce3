//! Permutation table with a duplicated second half.

use crate::error::NoiseError;
use crate::rng::RandomSource;

/// A shuffled bijection over `0..N` stored twice end to end.
///
/// The duplicated half lets `perm[perm[x] + y]` index up to `2N - 2` without
/// wrapping.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PermutationTable {
    entries: Vec<usize>,
}

impl PermutationTable {
    /// Shuffle `0..sample_count` and duplicate the result.
    pub fn build<R: RandomSource + ?Sized>(
        sample_count: usize,
        rng: &mut R,
    ) -> Result<Self, NoiseError> {
        if sample_count == 0 {
            return Err(NoiseError::InvalidSampleCount(sample_count));
        }
        let mut source: Vec<usize> = (0..sample_count).collect();
        shuffle(&mut source, rng)?;
        Ok(Self::doubled(source))
    }

    /// Use an explicit permutation instead of a shuffled one.
    pub fn from_permutation(permutation: Vec<usize>) -> Result<Self, NoiseError> {
        let len = permutation.len();
        if len == 0 {
            return Err(NoiseError::InvalidSampleCount(0));
        }
        let mut seen = vec![false; len];
        for &p in &permutation {
            if p >= len || seen[p] {
                return Err(NoiseError::NotAPermutation { len });
            }
            seen[p] = true;
        }
        Ok(Self::doubled(permutation))
    }

    fn doubled(mut source: Vec<usize>) -> Self {
        source.extend_from_within(..);
        Self { entries: source }
    }

    /// The period N.
    #[inline]
    pub fn sample_count(&self) -> usize {
        self.entries.len() / 2
    }

    /// All 2N entries.
    #[inline]
    pub fn as_slice(&self) -> &[usize] {
        &self.entries
    }

    /// The shuffled bijection (first half).
    #[inline]
    pub fn permutation(&self) -> &[usize] {
        &self.entries[..self.sample_count()]
    }

    /// Slot for a 1D lattice coordinate: `perm[x mod N]`.
    #[inline]
    pub fn index_1d(&self, x: i64) -> usize {
        self.entries[wrap(x, self.sample_count())]
    }

    /// Slot for a 2D lattice coordinate: `perm[perm[x mod N] + (y mod N)]`.
    #[inline]
    pub fn index_2d(&self, x: i64, y: i64) -> usize {
        let n = self.sample_count();
        self.entries[self.entries[wrap(x, n)] + wrap(y, n)]
    }
}

/// Euclidean `x mod n`, never negative.
#[inline]
pub(crate) fn wrap(x: i64, n: usize) -> usize {
    x.rem_euclid(n as i64) as usize
}

/// Fisher-Yates shuffle.
///
/// `j` is drawn from `0..=i`, so an element may stay in place and every
/// permutation is reachable.
pub fn shuffle<T, R: RandomSource + ?Sized>(
    items: &mut [T],
    rng: &mut R,
) -> Result<(), NoiseError> {
    for i in (1..items.len()).rev() {
        let j = rng.uniform_int(i + 1)?;
        items.swap(i, j);
    }
    Ok(())
}
