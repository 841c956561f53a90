//! Error types for request validation, configuration, and record codecs.

use thiserror::Error;

/// Error codes for request and configuration validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorCode {
    // Request errors (E001-E009)
    /// E001: Coordinate list is empty
    EmptyCoordinateList,
    /// E002: Coordinate lies outside the grid
    CoordinateOutOfBounds,
    /// E003: Discretization count is zero
    ZeroDiscretization,
    /// E004: Total time is zero
    ZeroDuration,
    /// E005: Modulation rate is zero or not finite
    InvalidModulationRate,
    /// E006: Carrier frequency is zero
    ZeroCarrierFrequency,
    /// E007: Block frequency is zero or not finite
    InvalidBlockFrequency,
    /// E008: Amplitude fraction outside [0, 1]
    FractionOutOfRange,
    /// E009: Fixed amplitude outside [-max_amp, max_amp]
    AmplitudeOutOfRange,

    // Config errors (E010-E015)
    /// E010: A configured value set is empty
    EmptyValueSet,
    /// E011: Grid dimensions are zero or exceed the coordinate encoding
    InvalidGridSize,
    /// E012: Actuator count range is inverted or empty
    InvalidActuatorRange,
    /// E013: Maximum amplitude is zero
    InvalidMaxAmplitude,
    /// E014: Preview settings are unusable
    InvalidPreviewSettings,
    /// E015: A total time is shorter than one time step
    DurationBelowTimeStep,
}

impl ErrorCode {
    /// Returns the error code string (e.g., "E001").
    pub fn code(&self) -> &'static str {
        match self {
            ErrorCode::EmptyCoordinateList => "E001",
            ErrorCode::CoordinateOutOfBounds => "E002",
            ErrorCode::ZeroDiscretization => "E003",
            ErrorCode::ZeroDuration => "E004",
            ErrorCode::InvalidModulationRate => "E005",
            ErrorCode::ZeroCarrierFrequency => "E006",
            ErrorCode::InvalidBlockFrequency => "E007",
            ErrorCode::FractionOutOfRange => "E008",
            ErrorCode::AmplitudeOutOfRange => "E009",
            ErrorCode::EmptyValueSet => "E010",
            ErrorCode::InvalidGridSize => "E011",
            ErrorCode::InvalidActuatorRange => "E012",
            ErrorCode::InvalidMaxAmplitude => "E013",
            ErrorCode::InvalidPreviewSettings => "E014",
            ErrorCode::DurationBelowTimeStep => "E015",
        }
    }
}

impl std::fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Warning codes for request validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WarningCode {
    /// W001: The same coordinate appears more than once
    DuplicateCoordinate,
    /// W002: A fixed amplitude was given to a wave kind that ignores it
    UnusedAmplitude,
    /// W003: The sine step policy ignores the requested discretization count
    SineStepsOverridden,
}

impl WarningCode {
    /// Returns the warning code string (e.g., "W001").
    pub fn code(&self) -> &'static str {
        match self {
            WarningCode::DuplicateCoordinate => "W001",
            WarningCode::UnusedAmplitude => "W002",
            WarningCode::SineStepsOverridden => "W003",
        }
    }
}

impl std::fmt::Display for WarningCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// A validation error with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// The error code.
    pub code: ErrorCode,
    /// Human-readable error message.
    pub message: String,
    /// Path to the problematic field (e.g., "coordinates\[2\]").
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

    /// Creates a new validation error with a field path.
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

/// A validation warning with code, message, and optional field path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationWarning {
    /// The warning code.
    pub code: WarningCode,
    /// Human-readable warning message.
    pub message: String,
    /// Path to the problematic field.
    pub path: Option<String>,
}

impl ValidationWarning {
    /// Creates a new validation warning.
    pub fn new(code: WarningCode, message: impl Into<String>) -> Self {
        Self {
            code,
            message: message.into(),
            path: None,
        }
    }

    /// Creates a new validation warning with a field path.
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

/// Top-level error type for data model operations.
#[derive(Debug, Error)]
pub enum SpecError {
    /// JSON parsing error.
    #[error("JSON parse error: {0}")]
    JsonParse(#[from] serde_json::Error),

    /// Binary record decoding error.
    #[error("UBJSON decode error at byte {offset}: {message}")]
    Ubjson {
        /// Byte offset where decoding failed.
        offset: usize,
        /// What went wrong.
        message: String,
    },

    /// A wave kind name is not one of the supported kinds.
    #[error("unknown wave kind '{0}' (expected constant, sine, sawtooth, block, or hanning)")]
    UnknownWaveKind(String),

    /// A pattern mode name is not one of the supported modes.
    #[error("unknown pattern mode '{0}'")]
    UnknownPatternMode(String),

    /// A fused coordinate could not be decoded.
    #[error("invalid coordinate encoding: {0}")]
    InvalidCoordinate(i64),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl SpecError {
    /// Creates a UBJSON decode error.
    pub fn ubjson(offset: usize, message: impl Into<String>) -> Self {
        Self::Ubjson {
            offset,
            message: message.into(),
        }
    }
}

/// Result of request or config validation.
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

    /// Returns true if an error with the given code was recorded.
    pub fn has_error(&self, code: ErrorCode) -> bool {
        self.errors.iter().any(|e| e.code == code)
    }

    /// Returns true if a warning with the given code was recorded.
    pub fn has_warning(&self, code: WarningCode) -> bool {
        self.warnings.iter().any(|w| w.code == code)
    }

    /// Converts to a Result, returning Err if there are errors.
    pub fn into_result(self) -> Result<Vec<ValidationWarning>, Vec<ValidationError>> {
        if self.ok {
            Ok(self.warnings)
        } else {
            Err(self.errors)
        }
    }
}

impl Default for ValidationResult {
    fn default() -> Self {
        Self::success()
    }
}

/// Common trait for backend errors.
///
/// Each backend error type implements this trait so the CLI can report
/// stable codes and categories without knowing the concrete error type.
pub trait BackendError: std::error::Error {
    /// Get the error code for reporting.
    ///
    /// Returns a static string like "PATTERN_001" or "PREVIEW_002".
    fn code(&self) -> &'static str;

    /// Get a human-readable message describing the error.
    fn message(&self) -> String {
        self.to_string()
    }

    /// Get the error category for grouping related errors.
    fn category(&self) -> &'static str;
}
