//! Fractal (octave) summation.
//!
//! A fractal sums octaves of a base noise, each sampled at a scaled
//! coordinate and weighted by its amplitude. No normalization is applied;
//! [`Fractal::amplitude_sum`] and the reported bounds let callers rescale.

use noisefield_spec::validation::MAX_OCTAVES;
use tracing::debug;

use super::{Noise1D, Noise2D};
use crate::error::NoiseError;

/// One noise layer in a fractal sum.
#[derive(Debug, Clone)]
pub struct Octave<N> {
    /// Coordinates are multiplied by this before sampling.
    pub frequency: f64,
    /// The sampled value is multiplied by this.
    pub amplitude: f64,
    /// The layer's noise.
    pub noise: N,
}

/// Frequency and amplitude progression of a fractal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FractalSettings {
    /// Number of octaves to combine.
    pub octaves: u32,
    /// Frequency of the first octave.
    pub base_frequency: f64,
    /// Amplitude of the first octave.
    pub base_amplitude: f64,
    /// How much detail increases with each octave.
    /// Typical value: 2.0 (each octave is twice the frequency).
    pub frequency_mult: f64,
    /// How much each octave contributes relative to the previous.
    /// Typical value: 0.5 (each octave is half the amplitude).
    pub amplitude_mult: f64,
}

impl FractalSettings {
    /// Settings with unit base frequency and amplitude, doubling frequency
    /// and halving amplitude per octave.
    pub fn new(octaves: u32) -> Self {
        Self {
            octaves,
            base_frequency: 1.0,
            base_amplitude: 1.0,
            frequency_mult: 2.0,
            amplitude_mult: 0.5,
        }
    }

    /// Set the first octave's frequency and amplitude.
    pub fn with_base(mut self, frequency: f64, amplitude: f64) -> Self {
        self.base_frequency = frequency;
        self.base_amplitude = amplitude;
        self
    }

    /// Set the frequency multiplier (lacunarity).
    pub fn with_frequency_mult(mut self, frequency_mult: f64) -> Self {
        self.frequency_mult = frequency_mult;
        self
    }

    /// Set the amplitude multiplier (persistence).
    pub fn with_amplitude_mult(mut self, amplitude_mult: f64) -> Self {
        self.amplitude_mult = amplitude_mult;
        self
    }

    /// Check the octave count and that every factor, and every octave's
    /// derived frequency and amplitude, is positive and finite.
    pub fn validate(&self) -> Result<(), NoiseError> {
        if self.octaves == 0 {
            return Err(NoiseError::InvalidOctaveCount(self.octaves));
        }
        if self.octaves > MAX_OCTAVES {
            return Err(NoiseError::TooManyOctaves {
                octaves: self.octaves as usize,
                max: MAX_OCTAVES as usize,
            });
        }
        NoiseError::require_positive("base_frequency", self.base_frequency)?;
        NoiseError::require_positive("base_amplitude", self.base_amplitude)?;
        NoiseError::require_positive("frequency_mult", self.frequency_mult)?;
        NoiseError::require_positive("amplitude_mult", self.amplitude_mult)?;
        for (frequency, amplitude) in self.progression() {
            NoiseError::require_positive("octave frequency", frequency)?;
            NoiseError::require_positive("octave amplitude", amplitude)?;
        }
        Ok(())
    }

    /// `(frequency, amplitude)` of each octave in order.
    pub fn progression(&self) -> impl Iterator<Item = (f64, f64)> {
        let settings = *self;
        (0..settings.octaves).scan(
            (settings.base_frequency, settings.base_amplitude),
            move |state, _| {
                let current = *state;
                state.0 *= settings.frequency_mult;
                state.1 *= settings.amplitude_mult;
                Some(current)
            },
        )
    }
}

impl Default for FractalSettings {
    fn default() -> Self {
        Self::new(4)
    }
}

/// Weighted sum of noise octaves.
#[derive(Debug, Clone)]
pub struct Fractal<N> {
    octaves: Vec<Octave<N>>,
}

impl<N> Fractal<N> {
    /// Build one independent noise per octave.
    ///
    /// `factory` is called with each octave index in order. Independent
    /// tables decorrelate the octaves.
    pub fn build<F>(mut factory: F, settings: FractalSettings) -> Result<Self, NoiseError>
    where
        F: FnMut(u32) -> Result<N, NoiseError>,
    {
        settings.validate()?;
        let octaves = (0..settings.octaves)
            .zip(settings.progression())
            .map(|(index, (frequency, amplitude))| {
                Ok(Octave {
                    frequency,
                    amplitude,
                    noise: factory(index)?,
                })
            })
            .collect::<Result<Vec<_>, NoiseError>>()?;
        debug!(octaves = settings.octaves, shared = false, "built fractal");
        Ok(Self { octaves })
    }

    /// Evaluate one noise at every octave's frequency.
    ///
    /// Cheaper to build than [`Fractal::build`], but the octaves are
    /// correlated since they read the same table.
    pub fn shared(noise: N, settings: FractalSettings) -> Result<Self, NoiseError>
    where
        N: Clone,
    {
        settings.validate()?;
        let octaves = settings
            .progression()
            .map(|(frequency, amplitude)| Octave {
                frequency,
                amplitude,
                noise: noise.clone(),
            })
            .collect();
        debug!(octaves = settings.octaves, shared = true, "built fractal");
        Ok(Self { octaves })
    }

    /// Use an explicit list of octaves.
    pub fn from_octaves(octaves: Vec<Octave<N>>) -> Result<Self, NoiseError> {
        if octaves.is_empty() {
            return Err(NoiseError::InvalidOctaveCount(0));
        }
        if octaves.len() > MAX_OCTAVES as usize {
            return Err(NoiseError::TooManyOctaves {
                octaves: octaves.len(),
                max: MAX_OCTAVES as usize,
            });
        }
        for octave in &octaves {
            NoiseError::require_positive("frequency", octave.frequency)?;
            NoiseError::require_positive("amplitude", octave.amplitude)?;
        }
        Ok(Self { octaves })
    }

    /// The octaves in summation order.
    pub fn octaves(&self) -> &[Octave<N>] {
        &self.octaves
    }

    /// Sum of all amplitudes.
    pub fn amplitude_sum(&self) -> f64 {
        self.octaves.iter().map(|o| o.amplitude).sum()
    }

    fn weighted_bounds(&self, bounds: impl Fn(&N) -> (f64, f64)) -> (f64, f64) {
        self.octaves.iter().fold((0.0, 0.0), |(lo, hi), octave| {
            let (l, h) = bounds(&octave.noise);
            (lo + l * octave.amplitude, hi + h * octave.amplitude)
        })
    }
}

impl<N: Noise2D> Noise2D for Fractal<N> {
    fn sample(&self, x: f64, y: f64) -> f64 {
        self.octaves
            .iter()
            .map(|o| o.amplitude * o.noise.sample(x * o.frequency, y * o.frequency))
            .sum()
    }

    fn bounds(&self) -> (f64, f64) {
        self.weighted_bounds(|n| n.bounds())
    }
}

impl<N: Noise1D> Noise1D for Fractal<N> {
    fn sample_1d(&self, x: f64) -> f64 {
        self.octaves
            .iter()
            .map(|o| o.amplitude * o.noise.sample_1d(x * o.frequency))
            .sum()
    }

    fn bounds_1d(&self) -> (f64, f64) {
        self.weighted_bounds(|n| n.bounds_1d())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{GradientNoise, ValueNoise};

    #[test]
    fn test_progression_halves_and_doubles() {
        let steps: Vec<_> = FractalSettings::new(4).progression().collect();
        assert_eq!(
            steps,
            vec![(1.0, 1.0), (2.0, 0.5), (4.0, 0.25), (8.0, 0.125)]
        );
    }

    #[test]
    fn test_single_octave_is_identity() {
        let base = GradientNoise::new(64, 42).unwrap();
        let fractal = Fractal::shared(base.clone(), FractalSettings::new(1)).unwrap();

        for i in 0..100 {
            let x = i as f64 * 0.1;
            let y = i as f64 * 0.13;
            assert_eq!(fractal.sample(x, y), base.sample(x, y));
            assert_eq!(fractal.sample_1d(x), base.sample_1d(x));
        }
        assert_eq!(fractal.bounds(), base.bounds());
    }

    #[test]
    fn test_sum_matches_definition() {
        let settings = FractalSettings::new(3).with_base(0.5, 2.0);
        let fractal = Fractal::build(|i| ValueNoise::new(32, 100 + i), settings).unwrap();

        let (x, y) = (3.7, -1.2);
        let expected: f64 = (0..3)
            .map(|i| {
                let f = 0.5 * 2f64.powi(i);
                let a = 2.0 * 0.5f64.powi(i);
                let noise = ValueNoise::new(32, 100 + i as u32).unwrap();
                a * noise.sample(x * f, y * f)
            })
            .sum();
        assert!((fractal.sample(x, y) - expected).abs() < 1e-12);
    }

    #[test]
    fn test_independent_octaves_use_distinct_tables() {
        let fractal = Fractal::build(|i| ValueNoise::new(64, i), FractalSettings::new(3)).unwrap();
        let octaves = fractal.octaves();
        assert_ne!(octaves[0].noise.table(), octaves[1].noise.table());
    }

    #[test]
    fn test_shared_octaves_share_one_table() {
        let base = ValueNoise::new(64, 1).unwrap();
        let fractal = Fractal::shared(base, FractalSettings::new(3)).unwrap();
        let octaves = fractal.octaves();
        assert!(std::ptr::eq(octaves[0].noise.table(), octaves[2].noise.table()));
    }

    #[test]
    fn test_bounds_weighted_by_amplitude() {
        let base = GradientNoise::new(16, 1).unwrap();
        let fractal = Fractal::shared(base, FractalSettings::new(3)).unwrap();
        let extent = 2f64.sqrt() / 2.0 * 1.75;
        let (lo, hi) = fractal.bounds();
        assert!((lo + extent).abs() < 1e-12);
        assert!((hi - extent).abs() < 1e-12);
        assert_eq!(fractal.amplitude_sum(), 1.75);
    }

    #[test]
    fn test_invalid_settings_rejected() {
        let base = ValueNoise::new(4, 0).unwrap();
        assert_eq!(
            Fractal::shared(base.clone(), FractalSettings::new(0)).unwrap_err(),
            NoiseError::InvalidOctaveCount(0)
        );
        let err = Fractal::shared(base.clone(), FractalSettings::new(2).with_amplitude_mult(0.0))
            .unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidMultiplier { name: "amplitude_mult", .. }
        ));
        let err = Fractal::shared(base, FractalSettings::new(2).with_frequency_mult(f64::NAN))
            .unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidMultiplier { name: "frequency_mult", .. }
        ));
    }

    #[test]
    fn test_overflowing_octave_frequency_rejected() {
        let base = ValueNoise::new(16, 0).unwrap();
        let settings = FractalSettings::new(12).with_frequency_mult(1e30);
        let err = Fractal::shared(base.clone(), settings).unwrap_err();
        assert_eq!(
            err,
            NoiseError::InvalidMultiplier {
                name: "octave frequency",
                value: f64::INFINITY
            }
        );

        // Eleven octaves top out at 1e300 and stay finite.
        let fractal = Fractal::shared(base, FractalSettings::new(11).with_frequency_mult(1e30))
            .unwrap();
        assert!(fractal.sample(0.3, 0.7).is_finite());
    }

    #[test]
    fn test_underflowing_octave_amplitude_rejected() {
        let settings = FractalSettings::new(8).with_amplitude_mult(1e-100);
        let err = Fractal::build(|i| ValueNoise::new(16, i), settings).unwrap_err();
        assert!(matches!(
            err,
            NoiseError::InvalidMultiplier { name: "octave amplitude", .. }
        ));
    }

    #[test]
    fn test_octave_count_capped() {
        let mut calls = 0;
        let err = Fractal::build(
            |i| {
                calls += 1;
                ValueNoise::new(4, i)
            },
            FractalSettings::new(4_000_000_000),
        )
        .unwrap_err();
        assert_eq!(
            err,
            NoiseError::TooManyOctaves {
                octaves: 4_000_000_000,
                max: MAX_OCTAVES as usize
            }
        );
        assert_eq!(calls, 0);
        let base = ValueNoise::new(4, 0).unwrap();
        assert!(Fractal::shared(base, FractalSettings::new(MAX_OCTAVES)).is_ok());
    }

    #[test]
    fn test_factory_errors_propagate() {
        let result = Fractal::build(|i| ValueNoise::new(i as usize, 0), FractalSettings::new(2));
        assert_eq!(result.unwrap_err(), NoiseError::InvalidSampleCount(0));
    }

    #[test]
    fn test_from_octaves_validates() {
        let noise = ValueNoise::new(4, 0).unwrap();
        assert!(Fractal::<ValueNoise>::from_octaves(vec![]).is_err());
        let bad = vec![Octave {
            frequency: -1.0,
            amplitude: 1.0,
            noise,
        }];
        assert!(Fractal::from_octaves(bad).is_err());
    }
}
