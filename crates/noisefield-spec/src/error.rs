//! Error types for spec validation and processing.

use thiserror::Error;

/// Error codes for spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Field errors (E001-E009)
    /// E001: Sample count must be at least 1
    InvalidSampleCount,
    /// E002: Sample count exceeds the supported maximum
    SampleCountTooLarge,

    // Fractal errors (E010-E019)
    /// E010: Octave count must be at least 1
    InvalidOctaveCount,
    /// E011: Base frequency must be positive and finite
    InvalidBaseFrequency,
    /// E012: Base amplitude must be positive and finite
    InvalidBaseAmplitude,
    /// E013: Frequency multiplier must be positive and finite
    InvalidFrequencyMult,
    /// E014: Amplitude multiplier must be positive and finite
    InvalidAmplitudeMult,
    /// E015: Octave count exceeds the supported maximum
    TooManyOctaves,
    /// E016: A derived octave frequency or amplitude overflows or underflows
    OctaveOutOfRange,

    // Raster errors (E020-E029)
    /// E020: Resolution is zero or too large
    InvalidResolution,
    /// E021: Coordinate scale must be positive and finite
    InvalidScale,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::InvalidSampleCount => "E001",
            ErrorCode::SampleCountTooLarge => "E002",
            ErrorCode::InvalidOctaveCount => "E010",
            ErrorCode::InvalidBaseFrequency => "E011",
            ErrorCode::InvalidBaseAmplitude => "E012",
            ErrorCode::InvalidFrequencyMult => "E013",
            ErrorCode::InvalidAmplitudeMult => "E014",
            ErrorCode::TooManyOctaves => "E015",
            ErrorCode::OctaveOutOfRange => "E016",
            ErrorCode::InvalidResolution => "E020",
            ErrorCode::InvalidScale => "E021",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for spec validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: Sample count is not a power of two
    SampleCountNotPowerOfTwo,
    /// W002: Amplitude grows with each octave
    AmplitudeGrows,
    /// W003: Octave count is high enough that later octaves fall below pixel scale
    ExcessiveOctaves,
    /// W004: Fractal settings given but the spec has a single octave
    SingleOctaveFractal,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::SampleCountNotPowerOfTwo => "W001",
            WarningCode::AmplitudeGrows => "W002",
            WarningCode::ExcessiveOctaves => "W003",
            WarningCode::SingleOctaveFractal => "W004",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// JSON path to the problematic field (e.g., "fractal.octaves").
    pub path: Option<String>,
}

impl ValidationError {
    /// Creates a new validation error.
    pub fn new(code: ErrorCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation error with a JSON path.
    pub fn with_path(code: ErrorCode, message: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

impl std::error::Error for ValidationError {}

/// A validation warning with code, message, and optional JSON path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// JSON path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning with a JSON path.
    pub fn with_path(
        code: WarningCode,
        message: impl Into<String>,
        path: impl Into<String>,
    ) -> Self {
        Self {
            code,
            message: message.into(),
            path: Some(path.into()),
        }
    }
}

impl std::fmt::Display for ValidationWarning {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if let Some(ref path) = self.path {
            write!(f, "{}: {} (at {})", self.code, self.message, path)
        } else {
            write!(f, "{}: {}", self.code, self.message)
        }
    }
}

/// Top-level error type for spec operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// Spec validation failed with one or more errors.
    #[error("spec validation failed with {} error(s): {}", .0.len(), join_errors(.0))]
    ValidationFailed(Vec<ValidationError>),

    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

fn join_errors(errors: &[ValidationError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

/// Result of spec validation.
#[derive(Debug, Clone)]
pub struct ValidationResult {
    /// Whether validation passed (no errors).
    pub ok: bool,
    /// List of validation errors.
    pub errors: Vec<ValidationError>,
    /// List of validation warnings.
    pub warnings: Vec<ValidationWarning>,
}

impl ValidationResult {
    /// Creates a successful validation result.
    pub fn success() -> Self {
        Self {
            ok: true,
            errors: Vec::new(),
            warnings: Vec::new(),
        }
    }

    /// Adds an error to the result.
    pub fn add_error(&mut self, error: ValidationError) {
        self.errors.push(error);
        self.ok = false;
    }

    /// Adds a warning to the result.
    pub fn add_warning(&mut self, warning: ValidationWarning) {
        self.warnings.push(warning);
    }

    /// Returns true if there are no errors.
    pub fn is_ok(&self) -> bool {
        self.ok
    }

    /// Returns true if any error carries the given code.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Returns true if any warning carries the given code.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, SpecError> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(SpecError::ValidationFailed(self.errors))
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}
