//! Error types for the pattern backend.

use tactigen_spec::{BackendError, SpecError, ValidationError};
use thiserror::Error;

/// Result type for pattern operations.
pub type PatternResult<T> = Result<T, PatternError>;

/// Errors that can occur during pattern generation.
#[derive(Debug, Error)]
pub enum PatternError {
    /// The request failed validation.
    #[error("invalid request: {}", summarize(.errors))]
    InvalidRequest {
        /// Validation errors, in the order they were found.
        errors: Vec<ValidationError>,
    },

    /// The generator config failed validation.
    #[error("invalid config: {}", summarize(.errors))]
    InvalidConfig {
        /// Validation errors, in the order they were found.
        errors: Vec<ValidationError>,
    },

    /// A rate or frequency the synthesizer divides by is zero or not finite.
    #[error("{name} must be finite and non-zero, got {value}")]
    ZeroRate {
        /// Name of the offending field.
        name: &'static str,
        /// The rejected value.
        value: f64,
    },

    /// A wave kind name is not recognized.
    #[error("unknown wave kind '{0}'")]
    UnknownWaveKind(String),

    /// A config value set that must be drawn from is empty.
    #[error("cannot draw from empty value set '{name}'")]
    EmptyValueSet {
        /// Name of the config field.
        name: &'static str,
    },

    /// Invalid parameter value.
    #[error("invalid parameter '{name}': {message}")]
    InvalidParameter {
        /// Parameter name.
        name: String,
        /// Error message.
        message: String,
    },

    /// Data model error.
    #[error(transparent)]
    Spec(SpecError),
}

fn summarize(errors: &[ValidationError]) -> String {
    match errors {
        [] => "no details".to_string(),
        [only] => only.to_string(),
        [first, rest @ ..] => format!("{} (and {} more)", first, rest.len()),
    }
}

impl PatternError {
    /// Creates an invalid parameter error.
    pub fn invalid_param(name: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidParameter {
            name: name.into(),
            message: message.into(),
        }
    }

    /// Returns the validation errors carried by this error, if any.
    pub fn validation_errors(&self) -> &[ValidationError] {
        match self {
            PatternError::InvalidRequest { errors } | PatternError::InvalidConfig { errors } => {
                errors
            }
            _ => &[],
        }
    }
}

impl From<SpecError> for PatternError {
    fn from(err: SpecError) -> Self {
        match err {
            SpecError::UnknownWaveKind(name) => PatternError::UnknownWaveKind(name),
            other => PatternError::Spec(other),
        }
    }
}

impl BackendError for PatternError {
    fn code(&self) -> &'static str {
        match self {
            PatternError::InvalidRequest { .. } => "PATTERN_001",
            PatternError::InvalidConfig { .. } => "PATTERN_002",
            PatternError::ZeroRate { .. } => "PATTERN_003",
            PatternError::UnknownWaveKind(_) => "PATTERN_004",
            PatternError::EmptyValueSet { .. } => "PATTERN_005",
            PatternError::InvalidParameter { .. } => "PATTERN_006",
            PatternError::Spec(_) => "PATTERN_007",
        }
    }

    fn category(&self) -> &'static str {
        "pattern"
    }
}
