//! Noisefield Spec Library
//!
//! This crate provides the declarative document types and validation for
//! noisefield generation requests. Specs are JSON documents that describe a
//! lattice noise field, an optional fractal layering of it, and how it should
//! be rasterized.
//!
//! # Overview
//!
//! - **Field**: lattice sample kind (value or gradient), sample count, easing
//! - **Fractal**: octave count and per-octave frequency/amplitude progression
//! - **Raster**: resolution, coordinate scale, and normalization for the sink
//!
//! # Example
//!
//! ```
//! use noisefield_spec::{NoiseSpec, FieldParams, FractalParams, NoiseKind};
//! use noisefield_spec::validation::validate_spec;
//!
//! let spec = NoiseSpec::builder()
//!     .seed(42)
//!     .field(FieldParams::new(NoiseKind::Gradient, 256))
//!     .fractal(FractalParams::new(4))
//!     .build();
//!
//! let result = validate_spec(&spec);
//! assert!(result.is_ok());
//!
//! let json = spec.to_json().unwrap();
//! assert_eq!(NoiseSpec::from_json(&json).unwrap(), spec);
//! ```
//!
//! # Modules
//!
//! - [`error`]: Error and warning types for validation
//! - [`recipe`]: Field, fractal, and raster parameter types
//! - [`spec`]: Main spec type and builder
//! - [`validation`]: Spec validation functions

pub mod error;
pub mod recipe;
pub mod spec;
pub mod validation;

pub use error::{
    ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
pub use recipe::{
    FieldParams, FractalParams, InterpolationKind, NoiseKind, NormalizationKind, OctaveLattice,
    OffsetKind, RasterParams,
};
pub use spec::{NoiseSpec, NoiseSpecBuilder};
