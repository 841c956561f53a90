//! Modulation requests: the full parameter set for one pattern.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::config::GeneratorConfig;
use crate::error::{
    ErrorCode, ValidationError, ValidationResult, ValidationWarning, WarningCode,
};
use crate::grid::GridPosition;
use crate::wave::{PatternMode, SineStepPolicy, WaveKind};

/// Everything needed to synthesize and assemble one pattern.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ModulationRequest {
    /// Waveform archetype.
    pub kind: WaveKind,
    /// Coordinate strategy.
    pub mode: PatternMode,
    /// Pattern duration in milliseconds.
    pub total_time_ms: u32,
    /// Envelope modulation rate in Hz.
    pub modulation_rate_hz: f64,
    /// Fraction of `max_amp` the sine wave bottoms out at.
    pub amplitude_fraction: f64,
    /// Phase offset in seconds.
    pub phase_offset: f64,
    /// Samples per waveform window.
    pub discretization_count: usize,
    /// Coordinates the pattern plays on, in order.
    pub coordinates: Vec<GridPosition>,
    /// Carrier frequency written into every motor event.
    pub carrier_frequency_hz: u32,
    /// Frequency of the block wave in Hz.
    pub block_frequency_hz: f64,
    /// Fixed amplitude for constant, block and hanning waves.
    ///
    /// When `None`, one amplitude is drawn from the configured set per synthesis.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amplitude: Option<i32>,
}

impl ModulationRequest {
    /// Starts building a request with the default timing parameters.
    pub fn builder(kind: WaveKind, mode: PatternMode) -> ModulationRequestBuilder {
        ModulationRequestBuilder::new(kind, mode)
    }

    /// Returns true for static patterns.
    pub fn is_static(&self) -> bool {
        self.mode.is_static()
    }

    /// Returns true for path-like patterns of either stride.
    pub fn is_path_like(&self) -> bool {
        self.mode.is_path_like()
    }

    /// Validates the request against a config.
    ///
    /// Duplicate coordinates are reported as warnings: random draws sample
    /// with replacement and walks may hold position, so repeats are legal.
    pub fn validate(&self, config: &GeneratorConfig) -> ValidationResult {
        let mut result = ValidationResult::success();

        if self.discretization_count == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroDiscretization,
                "discretization_count must be greater than zero",
                "discretization_count",
            ));
        }

        if self.total_time_ms == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroDuration,
                "total_time_ms must be greater than zero",
                "total_time_ms",
            ));
        }

        if self.coordinates.is_empty() {
            result.add_error(ValidationError::with_path(
                ErrorCode::EmptyCoordinateList,
                "coordinate list must not be empty",
                "coordinates",
            ));
        }

        let mut seen = HashSet::new();
        for (i, pos) in self.coordinates.iter().enumerate() {
            if !config.grid.contains(*pos) {
                result.add_error(ValidationError::with_path(
                    ErrorCode::CoordinateOutOfBounds,
                    format!(
                        "coordinate {} is outside the {}x{} grid",
                        pos, config.grid.width, config.grid.height
                    ),
                    format!("coordinates[{}]", i),
                ));
            }
            if !seen.insert(*pos) {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::DuplicateCoordinate,
                    format!("coordinate {} appears more than once", pos),
                    format!("coordinates[{}]", i),
                ));
            }
        }

        let rate_ok = self.modulation_rate_hz.is_finite() && self.modulation_rate_hz != 0.0;
        if matches!(self.kind, WaveKind::Sine | WaveKind::Sawtooth) && !rate_ok {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidModulationRate,
                format!(
                    "{} waves need a finite, non-zero modulation rate, got {}",
                    self.kind, self.modulation_rate_hz
                ),
                "modulation_rate_hz",
            ));
        }

        if self.kind == WaveKind::Sawtooth && self.carrier_frequency_hz == 0 {
            result.add_error(ValidationError::with_path(
                ErrorCode::ZeroCarrierFrequency,
                "sawtooth waves need a non-zero carrier frequency",
                "carrier_frequency_hz",
            ));
        }

        if self.kind == WaveKind::Block
            && (!self.block_frequency_hz.is_finite() || self.block_frequency_hz == 0.0)
        {
            result.add_error(ValidationError::with_path(
                ErrorCode::InvalidBlockFrequency,
                format!(
                    "block waves need a finite, non-zero frequency, got {}",
                    self.block_frequency_hz
                ),
                "block_frequency_hz",
            ));
        }

        if !self.amplitude_fraction.is_finite() || !(0.0..=1.0).contains(&self.amplitude_fraction)
        {
            result.add_error(ValidationError::with_path(
                ErrorCode::FractionOutOfRange,
                format!("fraction must be in [0, 1], got {}", self.amplitude_fraction),
                "amplitude_fraction",
            ));
        }

        if let Some(amp) = self.amplitude {
            if amp.abs() > config.max_amp {
                result.add_error(ValidationError::with_path(
                    ErrorCode::AmplitudeOutOfRange,
                    format!("amplitude {} exceeds max_amp {}", amp, config.max_amp),
                    "amplitude",
                ));
            }
            if !self.kind.uses_amplitude() {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::UnusedAmplitude,
                    format!("{} waves scale max_amp and ignore the amplitude", self.kind),
                    "amplitude",
                ));
            }
        }

        if self.kind == WaveKind::Sine && config.sine_steps != SineStepPolicy::Discretization {
            let steps = config
                .sine_steps
                .steps(self.total_time_ms, self.discretization_count);
            if steps != self.discretization_count {
                result.add_warning(ValidationWarning::with_path(
                    WarningCode::SineStepsOverridden,
                    format!(
                        "sine step policy emits {} samples instead of {}",
                        steps, self.discretization_count
                    ),
                    "discretization_count",
                ));
            }
        }

        result
    }
}

/// Builder for [`ModulationRequest`].
#[derive(Debug, Clone)]
pub struct ModulationRequestBuilder {
    request: ModulationRequest,
}

impl ModulationRequestBuilder {
    /// Creates a builder with default timing parameters and no coordinates.
    pub fn new(kind: WaveKind, mode: PatternMode) -> Self {
        Self {
            request: ModulationRequest {
                kind,
                mode,
                total_time_ms: 392,
                modulation_rate_hz: 60.0,
                amplitude_fraction: 0.5,
                phase_offset: 0.0,
                discretization_count: 8,
                coordinates: Vec::new(),
                carrier_frequency_hz: 300,
                block_frequency_hz: 60.0,
                amplitude: None,
            },
        }
    }

    /// Sets the duration in milliseconds.
    pub fn total_time_ms(mut self, total_time_ms: u32) -> Self {
        self.request.total_time_ms = total_time_ms;
        self
    }

    /// Sets the modulation rate in Hz.
    pub fn modulation_rate_hz(mut self, rate: f64) -> Self {
        self.request.modulation_rate_hz = rate;
        self
    }

    /// Sets the amplitude fraction.
    pub fn amplitude_fraction(mut self, fraction: f64) -> Self {
        self.request.amplitude_fraction = fraction;
        self
    }

    /// Sets the phase offset in seconds.
    pub fn phase_offset(mut self, phase: f64) -> Self {
        self.request.phase_offset = phase;
        self
    }

    /// Sets the discretization count.
    pub fn discretization_count(mut self, count: usize) -> Self {
        self.request.discretization_count = count;
        self
    }

    /// Appends one coordinate.
    pub fn coordinate(mut self, pos: impl Into<GridPosition>) -> Self {
        self.request.coordinates.push(pos.into());
        self
    }

    /// Appends several coordinates.
    pub fn coordinates<I, P>(mut self, positions: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<GridPosition>,
    {
        self.request
            .coordinates
            .extend(positions.into_iter().map(Into::into));
        self
    }

    /// Sets the carrier frequency in Hz.
    pub fn carrier_frequency_hz(mut self, freq: u32) -> Self {
        self.request.carrier_frequency_hz = freq;
        self
    }

    /// Sets the block wave frequency in Hz.
    pub fn block_frequency_hz(mut self, freq: f64) -> Self {
        self.request.block_frequency_hz = freq;
        self
    }

    /// Fixes the amplitude instead of drawing it.
    pub fn amplitude(mut self, amplitude: i32) -> Self {
        self.request.amplitude = Some(amplitude);
        self
    }

    /// Builds the request.
    pub fn build(self) -> ModulationRequest {
        self.request
    }
}
