//! Generator configuration.
//!
//! [`GeneratorConfig`] is an immutable value passed into every generation
//! call. It holds the value sets that random requests are drawn from, the
//! grid geometry, and the preview settings. Every field has a default, so a
//! JSON config file only needs to name the fields it overrides.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{ErrorCode, SpecError, ValidationError, ValidationResult};
use crate::grid::{GridSize, MAX_GRID_DIMENSION};
use crate::wave::SineStepPolicy;

/// Inclusive range of actuator counts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ActuatorRange {
    /// Smallest count, inclusive.
    pub min: usize,
    /// Largest count, inclusive.
    pub max: usize,
}

impl ActuatorRange {
    /// Creates a range.
    pub fn new(min: usize, max: usize) -> Self {
        Self { min, max }
    }

    /// Returns true if the range contains at least one count.
    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

/// Settings for GIF previews.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PreviewSettings {
    /// Frames per second.
    pub fps: u16,
    /// Pixels per actuator cell along each axis.
    pub scale: u16,
    /// Gray level of inactive cells.
    pub background: u8,
    /// Draw `255 - amplitude` instead of the amplitude.
    pub invert: bool,
}

impl Default for PreviewSettings {
    fn default() -> Self {
        Self {
            fps: 25,
            scale: 16,
            background: 0,
            invert: false,
        }
    }
}

/// Configuration for pattern generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Actuator grid dimensions.
    pub grid: GridSize,
    /// Largest amplitude an actuator accepts.
    pub max_amp: i32,
    /// Amplitudes drawn for constant, block and hanning waves.
    pub amplitudes: Vec<i32>,
    /// Envelope modulation rates in Hz.
    pub modulation_rates_hz: Vec<f64>,
    /// Pattern durations in milliseconds.
    pub total_times_ms: Vec<u32>,
    /// Fraction of `max_amp` the sine wave bottoms out at.
    pub fraction: f64,
    /// Phase offsets in seconds.
    pub phase_offsets: Vec<f64>,
    /// Samples per waveform window.
    pub discretization_rate: usize,
    /// Actuator counts for static patterns.
    pub static_actuators: ActuatorRange,
    /// Actuator counts for dynamic and path-like patterns.
    pub dynamic_actuators: ActuatorRange,
    /// Carrier frequencies in Hz.
    pub carrier_frequencies_hz: Vec<u32>,
    /// Block wave frequencies in Hz.
    pub block_frequencies_hz: Vec<f64>,
    /// How many coordinate sets a dynamic pattern draws.
    pub dynamic_pattern_counts: Vec<usize>,
    /// Length of one discrete time step in milliseconds.
    pub time_step_ms: u32,
    /// Sample count policy for sine waves.
    pub sine_steps: SineStepPolicy,
    /// GIF preview settings.
    pub preview: PreviewSettings,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            grid: GridSize::default(),
            max_amp: 255,
            amplitudes: vec![100, 255],
            modulation_rates_hz: vec![60.0],
            total_times_ms: vec![92, 392],
            fraction: 0.5,
            phase_offsets: vec![0.0, 0.2, 0.4, 0.6, 0.8],
            discretization_rate: 8,
            static_actuators: ActuatorRange::new(1, 8),
            dynamic_actuators: ActuatorRange::new(2, 16),
            carrier_frequencies_hz: vec![300],
            block_frequencies_hz: vec![60.0],
            dynamic_pattern_counts: vec![8],
            time_step_ms: 10,
            sine_steps: SineStepPolicy::default(),
            preview: PreviewSettings::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parses a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SpecError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads and parses a JSON config file.
    pub fn from_json_file(path: &Path) -> Result<Self, SpecError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_json(&content)
    }

    /// Serializes the config as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, SpecError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks that every value set can be drawn from and every rate is usable.
    pub fn validate(&self) -> ValidationResult {
        let mut result = ValidationResult::success();

        if self.grid.width == 0
            || self.grid.height == 0
            || self.grid.width > MAX_GRID_DIMENSION
            || self.grid.height > MAX_GRID_DIMENSION
        {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidGridSize,
                format!(
                    "grid must be between 1x1 and {0}x{0}, got {1}x{2}",
                    MAX_GRID_DIMENSION, self.grid.width, self.grid.height
                ),
                "grid",
            ));
        }

        if self.max_amp <= 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidMaxAmplitude,
                format!("max_amp must be positive, got {}", self.max_amp),
                "max_amp",
            ));
        }

        let empty_sets = [
            ("amplitudes", self.amplitudes.is_empty()),
            ("modulation_rates_hz", self.modulation_rates_hz.is_empty()),
            ("total_times_ms", self.total_times_ms.is_empty()),
            ("phase_offsets", self.phase_offsets.is_empty()),
            ("carrier_frequencies_hz", self.carrier_frequencies_hz.is_empty()),
            ("block_frequencies_hz", self.block_frequencies_hz.is_empty()),
            ("dynamic_pattern_counts", self.dynamic_pattern_counts.is_empty()),
        ];
        for (name, empty) in empty_sets {
            if empty {
                result.add_error(ValidationError::with_path(
                    ErrorCode::EmptyValueSet,
                    format!("{} must contain at least one value", name),
                    name,
                ));
            }
        }

        for (i, amp) in self.amplitudes.iter().enumerate() {
            if amp.abs() > self.max_amp {
                result.add_error(ValidationError::with_path(
                    ErrorCode::AmplitudeOutOfRange,
                    format!("amplitude {} exceeds max_amp {}", amp, self.max_amp),
                    format!("amplitudes[{}]", i),
                ));
            }
        }

        for (i, rate) in self.modulation_rates_hz.iter().enumerate() {
            if !rate.is_finite() || *rate == 0.0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidModulationRate,
                    format!("modulation rate must be finite and non-zero, got {}", rate),
                    format!("modulation_rates_hz[{}]", i),
                ));
            }
        }

        for (i, freq) in self.block_frequencies_hz.iter().enumerate() {
            if !freq.is_finite() || *freq == 0.0 {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidBlockFrequency,
                    format!("block frequency must be finite and non-zero, got {}", freq),
                    format!("block_frequencies_hz[{}]", i),
                ));
            }
        }

        if let Some(i) = self.carrier_frequencies_hz.iter().position(|f| *f == 0) {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroCarrierFrequency,
                "carrier frequency must be non-zero",
                format!("carrier_frequencies_hz[{}]", i),
            ));
        }

        if let Some(i) = self.total_times_ms.iter().position(|t| *t == 0) {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroDuration,
                "total time must be non-zero",
                format!("total_times_ms[{}]", i),
            ));
        }

        if self.time_step_ms == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroDuration,
                "time step must be non-zero",
                "time_step_ms",
            ));
        } else if let Some(i) = self
            .total_times_ms
            .iter()
            .position(|t| *t != 0 && *t < self.time_step_ms)
        {
            // The constant wave would emit no samples.
            result.add_error(ValidationError::with_path(
                ErrorCode::DurationBelowTimeStep,
                format!(
                    "total time {} ms is shorter than the {} ms time step",
                    self.total_times_ms[i], self.time_step_ms
                ),
                format!("total_times_ms[{}]", i),
            ));
        }

        if self.discretization_rate == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroDiscretization,
                "discretization rate must be non-zero",
                "discretization_rate",
            ));
        }

        if !self.fraction.is_finite() || !(0.0..=1.0).contains(&self.fraction) {
            result.add_error(ValidationError::with_path(
                ErrorCode::FractionOutOfRange,
                format!("fraction must be in [0, 1], got {}", self.fraction),
                "fraction",
            ));
        }

        for (name, range, floor) in [
            ("static_actuators", self.static_actuators, 1),
            ("dynamic_actuators", self.dynamic_actuators, 1),
        ] {
            if !range.is_valid() || range.min < floor {
                result.add_error(ValidationError::with_path(
                    ErrorCode::InvalidActuatorRange,
                    format!(
                        "actuator range must satisfy {} <= min <= max, got {}..={}",
                        floor, range.min, range.max
                    ),
                    name,
                ));
            }
        }

        if self.dynamic_pattern_counts.iter().any(|n| *n == 0) {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyValueSet,
                "dynamic pattern counts must be non-zero",
                "dynamic_pattern_counts",
            ));
        }

        if self.preview.fps == 0 || self.preview.fps > 100 || self.preview.scale == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidPreviewSettings,
                format!(
                    "preview needs 1 <= fps <= 100 and scale >= 1, got fps {} scale {}",
                    self.preview.fps, self.preview.scale
                ),
                "preview",
            ));
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_default_config_is_valid() {
        let result = GeneratorConfig::default().validate();
        assert!(result.is_ok(), "errors: {:?}", result.errors);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = GeneratorConfig::from_json(r#"{ "max_amp": 200, "amplitudes": [50] }"#)
            .unwrap();
        assert_eq!(config.max_amp, 200);
        assert_eq!(config.amplitudes, vec![50]);
        assert_eq!(config.grid, GridSize::new(4, 6));
        assert_eq!(config.total_times_ms, vec![92, 392]);
    }

    #[test]
    fn test_json_round_trip() {
        let config = GeneratorConfig {
            sine_steps: SineStepPolicy::PerRate,
            ..GeneratorConfig::default()
        };
        let json = config.to_json_pretty().unwrap();
        assert_eq!(GeneratorConfig::from_json(&json).unwrap(), config);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(GeneratorConfig::from_json(r#"{ "maxAmp": 3 }"#).is_err());
    }

    #[test]
    fn test_zero_rates_rejected() {
        let config = GeneratorConfig {
            modulation_rates_hz: vec![0.0],
            block_frequencies_hz: vec![f64::NAN],
            carrier_frequencies_hz: vec![300, 0],
            ..GeneratorConfig::default()
        };
        let result = config.validate();
        assert!(result.has_error(ErrorCode::InvalidModulationRate));
        assert!(result.has_error(ErrorCode::InvalidBlockFrequency));
        assert!(result.has_error(ErrorCode::ZeroCarrierFrequency));
    }

    #[test]
    fn test_grid_limited_by_coordinate_encoding() {
        let config = GeneratorConfig {
            grid: GridSize::new(10, 6),
            ..GeneratorConfig::default()
        };
        assert!(config.validate().has_error(ErrorCode::InvalidGridSize));
    }

    #[test]
    fn test_empty_sets_and_inverted_ranges_rejected() {
        let config = GeneratorConfig {
            amplitudes: vec![],
            static_actuators: ActuatorRange::new(5, 2),
            ..GeneratorConfig::default()
        };
        let result = config.validate();
        assert!(result.has_error(ErrorCode::EmptyValueSet));
        assert!(result.has_error(ErrorCode::InvalidActuatorRange));
    }

    #[test]
    fn test_duration_below_time_step_rejected() {
        let config = GeneratorConfig {
            total_times_ms: vec![92, 5],
            time_step_ms: 10,
            ..GeneratorConfig::default()
        };
        let result = config.validate();
        let err = result
            .errors
            .iter()
            .find(|e| e.code == ErrorCode::DurationBelowTimeStep)
            .unwrap();
        assert_eq!(err.path.as_deref(), Some("total_times_ms[1]"));

        let config = GeneratorConfig {
            total_times_ms: vec![10],
            time_step_ms: 10,
            ..GeneratorConfig::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_amplitude_above_max_rejected() {
        let config = GeneratorConfig {
            amplitudes: vec![100, 300],
            ..GeneratorConfig::default()
        };
        let result = config.validate();
        let err = result
            .errors
            .iter()
            .find(|e| e.code == ErrorCode::AmplitudeOutOfRange)
            .unwrap();
        assert_eq!(err.path.as_deref(), Some("amplitudes[1]"));
    }

    #[test]
    fn test_from_json_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "fraction": 0.25 }"#).unwrap();
        let config = GeneratorConfig::from_json_file(&path).unwrap();
        assert_eq!(config.fraction, 0.25);
    }
}
