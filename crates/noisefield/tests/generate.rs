//! Spec-driven generation tests.
//!
//! Parses JSON spec documents, renders them, and checks that PNG output is
//! byte-identical across runs.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p noisefield --test generate
//! ```

use std::path::Path;

use noisefield::generate::{build_evaluator, render, render_png, GenerateError};
use noisefield::png::{write_grayscale_to_writer, PngConfig};
use noisefield::{Evaluator2D, Noise2D};
use noisefield_spec::{ErrorCode, NoiseSpec, SpecError, WarningCode};
use noisefield_spec::validation::validate_spec;

const FRACTAL_SPEC: &str = r#"{
    "seed": 7,
    "field": {
        "kind": "gradient",
        "sample_count": 128,
        "easing": "quintic"
    },
    "fractal": {
        "octaves": 5,
        "base_frequency": 1.0,
        "base_amplitude": 1.0,
        "frequency_mult": 2.0,
        "amplitude_mult": 0.5
    },
    "raster": {
        "resolution": [32, 24],
        "scale": 0.05,
        "normalization": "min_max"
    }
}"#;

fn read_bytes(path: &Path) -> Vec<u8> {
    std::fs::read(path).expect("failed to read rendered PNG")
}

// ============================================================================
// Parsing and building
// ============================================================================

#[test]
fn json_spec_builds_fractal() {
    let spec = NoiseSpec::from_json(FRACTAL_SPEC).unwrap();
    let evaluator = build_evaluator(&spec).unwrap();
    let Evaluator2D::Fractal(fractal) = &evaluator else {
        panic!("expected fractal evaluator");
    };
    assert_eq!(fractal.octaves().len(), 5);
    assert!((fractal.amplitude_sum() - 1.9375).abs() < 1e-15);
}

#[test]
fn minimal_spec_uses_defaults() {
    let spec = NoiseSpec::from_json(r#"{"seed": 1, "field": {"kind": "value"}}"#).unwrap();
    let buffer = render(&spec).unwrap();
    assert_eq!((buffer.width, buffer.height), (256, 256));

    let evaluator = build_evaluator(&spec).unwrap();
    assert_eq!(evaluator.bounds(), (0.0, 1.0));
}

#[test]
fn invalid_spec_reports_every_error() {
    let json = r#"{
        "seed": 1,
        "field": {"kind": "value", "sample_count": 0},
        "fractal": {"octaves": 0},
        "raster": {"resolution": [0, 16]}
    }"#;
    let spec = NoiseSpec::from_json(json).unwrap();

    let result = validate_spec(&spec);
    assert!(result.has_error(ErrorCode::InvalidSampleCount));
    assert!(result.has_error(ErrorCode::InvalidOctaveCount));
    assert!(result.has_error(ErrorCode::InvalidResolution));

    match render(&spec) {
        Err(GenerateError::Spec(SpecError::ValidationFailed(errors))) => {
            assert_eq!(errors.len(), 3);
        }
        other => panic!("expected validation failure, got {:?}", other.map(|b| b.width)),
    }
}

#[test]
fn warnings_do_not_block_generation() {
    let json = r#"{
        "seed": 3,
        "field": {"kind": "gradient", "sample_count": 100},
        "raster": {"resolution": [8, 8]}
    }"#;
    let spec = NoiseSpec::from_json(json).unwrap();
    assert!(validate_spec(&spec).has_warning(WarningCode::SampleCountNotPowerOfTwo));
    assert!(render(&spec).is_ok());
}

// ============================================================================
// Rendering and PNG output
// ============================================================================

#[test]
fn min_max_render_spans_unit_range() {
    let spec = NoiseSpec::from_json(FRACTAL_SPEC).unwrap();
    let buffer = render(&spec).unwrap();
    assert_eq!(buffer.data.len(), 32 * 24);
    assert_eq!(buffer.min_max(), Some((0.0, 1.0)));
}

#[test]
fn png_output_is_byte_identical() {
    let spec = NoiseSpec::from_json(FRACTAL_SPEC).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let first = dir.path().join("first.png");
    let second = dir.path().join("second.png");

    render_png(&spec, &first).unwrap();
    render_png(&spec, &second).unwrap();

    let bytes = read_bytes(&first);
    assert_eq!(&bytes[..8], b"\x89PNG\r\n\x1a\n");
    assert_eq!(bytes, read_bytes(&second));
}

#[test]
fn png_matches_in_memory_encoding() {
    let spec = NoiseSpec::from_json(FRACTAL_SPEC).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("noise.png");

    let buffer = render_png(&spec, &path).unwrap();
    let mut encoded = Vec::new();
    write_grayscale_to_writer(&buffer, &mut encoded, &PngConfig::default()).unwrap();
    assert_eq!(read_bytes(&path), encoded);
}

#[test]
fn spec_round_trips_through_file() {
    let spec = NoiseSpec::from_json(FRACTAL_SPEC).unwrap();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("spec.json");
    std::fs::write(&path, spec.to_json_pretty().unwrap()).unwrap();

    let loaded = NoiseSpec::from_file(&path).unwrap();
    assert_eq!(loaded, spec);
    assert_eq!(render(&loaded).unwrap(), render(&spec).unwrap());
}

#[test]
fn seed_changes_output() {
    let spec = NoiseSpec::from_json(FRACTAL_SPEC).unwrap();
    let mut reseeded = spec.clone();
    reseeded.seed = 8;
    assert_ne!(render(&spec).unwrap(), render(&reseeded).unwrap());

    let json: serde_json::Value = serde_json::from_str(&reseeded.to_json().unwrap()).unwrap();
    assert_eq!(json["seed"], 8);
}
