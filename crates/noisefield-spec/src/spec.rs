//! Main spec type and builder.

use serde::{Deserialize, Serialize};

use crate::error::SpecError;
use crate::recipe::{FieldParams, FractalParams, RasterParams};

/// A complete noise generation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NoiseSpec {
    /// Seed for every random draw made while building lattice tables.
    pub seed: u32,
    /// The base noise field.
    pub field: FieldParams,
    /// Optional fractal layering of the base field.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fractal: Option<FractalParams>,
    /// Optional raster settings; defaults apply when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub raster: Option<RasterParams>,
}

impl NoiseSpec {
    /// Creates a new builder.
    pub fn builder() -> NoiseSpecBuilder {
        NoiseSpecBuilder::new()
    }

    /// Parses a spec from a JSON string.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a spec from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self, SpecError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Serializes the spec to a compact JSON string.
    pub fn to_json(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string(self)?)
    }

    /// Serializes the spec to a pretty-printed JSON string.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Returns the raster settings, falling back to defaults.
    pub fn raster_or_default(&self) -> RasterParams {
        self.raster.clone().unwrap_or_default()
    }
}

/// Builder for [`NoiseSpec`].
#[derive(Debug, Clone, Default)]
pub struct NoiseSpecBuilder {
    seed: u32,
    field: FieldParams,
    fractal: Option<FractalParams>,
    raster: Option<RasterParams>,
}

impl NoiseSpecBuilder {
    /// Creates a builder for a 256-sample value noise field with seed 0.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the seed.
    pub fn seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    /// Sets the base field.
    pub fn field(mut self, field: FieldParams) -> Self {
        self.field = field;
        self
    }

    /// Layers the field as a fractal.
    pub fn fractal(mut self, fractal: FractalParams) -> Self {
        self.fractal = Some(fractal);
        self
    }

    /// Sets the raster settings.
    pub fn raster(mut self, raster: RasterParams) -> Self {
        self.raster = Some(raster);
        self
    }

    /// Builds the spec.
    pub fn build(self) -> NoiseSpec {
        NoiseSpec {
            seed: self.seed,
            field: self.field,
            fractal: self.fractal,
            raster: self.raster,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::recipe::{NoiseKind, NormalizationKind, OctaveLattice};
    use pretty_assertions::assert_eq;

    #[test]
    fn test_parse_full_document() {
        let json = r#"{
            "seed": 42,
            "field": { "kind": "gradient", "sample_count": 128, "easing": "smoothstep" },
            "fractal": { "octaves": 4, "lattice": "shared" },
            "raster": { "resolution": [64, 32], "scale": 0.05, "normalization": "min_max" }
        }"#;
        let spec = NoiseSpec::from_json(json).unwrap();

        assert_eq!(spec.seed, 42);
        assert_eq!(spec.field.kind, NoiseKind::Gradient);
        assert_eq!(spec.field.sample_count, 128);
        let fractal = spec.fractal.as_ref().unwrap();
        assert_eq!(fractal.octaves, 4);
        assert_eq!(fractal.lattice, OctaveLattice::Shared);
        let raster = spec.raster_or_default();
        assert_eq!(raster.resolution, [64, 32]);
        assert_eq!(raster.normalization, NormalizationKind::MinMax);
    }

    #[test]
    fn test_json_round_trip() {
        let spec = NoiseSpec::builder()
            .seed(7)
            .field(FieldParams::new(NoiseKind::Value, 64))
            .fractal(FractalParams::new(3).with_multipliers(3.0, 0.25))
            .raster(RasterParams::new(16, 16).with_scale(0.1))
            .build();

        let parsed = NoiseSpec::from_json(&spec.to_json_pretty().unwrap()).unwrap();
        assert_eq!(parsed, spec);
    }

    #[test]
    fn test_optional_sections_are_omitted() {
        let spec = NoiseSpec::builder().seed(1).build();
        let json = spec.to_json().unwrap();
        assert!(!json.contains("fractal"));
        assert!(!json.contains("raster"));
        assert_eq!(spec.raster_or_default(), RasterParams::default());
    }

    #[test]
    fn test_invalid_json_is_parse_error() {
        let err = NoiseSpec::from_json("{ not json").unwrap_err();
        assert!(matches!(err, SpecError::JsonParse(_)));
    }
}
