//! Waveform kinds, pattern modes, and the sine step policy.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::SpecError;

/// Waveform archetypes a pattern can be modulated with.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WaveKind {
    /// Fixed amplitude for the whole duration.
    Constant,
    /// Raised sine between a floor and the maximum amplitude.
    Sine,
    /// Rising ramp mapped to `[0, max_amp]`.
    Sawtooth,
    /// Square wave alternating between `+a` and `-a`.
    Block,
    /// Raised-cosine (Hann) window.
    Hanning,
}

impl WaveKind {
    /// All wave kinds, in declaration order.
    pub const ALL: [WaveKind; 5] = [
        WaveKind::Constant,
        WaveKind::Sine,
        WaveKind::Sawtooth,
        WaveKind::Block,
        WaveKind::Hanning,
    ];

    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            WaveKind::Constant => "constant",
            WaveKind::Sine => "sine",
            WaveKind::Sawtooth => "sawtooth",
            WaveKind::Block => "block",
            WaveKind::Hanning => "hanning",
        }
    }

    /// Returns true if the kind scales a chosen amplitude rather than `max_amp`.
    pub fn uses_amplitude(&self) -> bool {
        matches!(self, WaveKind::Constant | WaveKind::Block | WaveKind::Hanning)
    }
}

impl std::fmt::Display for WaveKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for WaveKind {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "constant" => Ok(WaveKind::Constant),
            "sin" | "sine" => Ok(WaveKind::Sine),
            "sawtooth" => Ok(WaveKind::Sawtooth),
            "block" => Ok(WaveKind::Block),
            "hanning" => Ok(WaveKind::Hanning),
            other => Err(SpecError::UnknownWaveKind(other.to_string())),
        }
    }
}

/// How the active coordinates of a pattern are chosen over time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatternMode {
    /// One random coordinate set, active for every iteration.
    Static,
    /// A random subset of the motor pool is active each iteration.
    DynamicRandom,
    /// A bounded random walk with unit steps.
    PathLike,
    /// A bounded random walk with steps of two.
    StriddenPathLike,
}

impl PatternMode {
    /// Returns the canonical name.
    pub fn as_str(&self) -> &'static str {
        match self {
            PatternMode::Static => "static",
            PatternMode::DynamicRandom => "dynamic_random",
            PatternMode::PathLike => "path_like",
            PatternMode::StriddenPathLike => "stridden_path_like",
        }
    }

    /// Returns true for the static mode.
    pub fn is_static(&self) -> bool {
        matches!(self, PatternMode::Static)
    }

    /// Returns true for both walk modes.
    pub fn is_path_like(&self) -> bool {
        self.walk_step().is_some()
    }

    /// Step size of the random walk, if this mode walks.
    pub fn walk_step(&self) -> Option<u8> {
        match self {
            PatternMode::PathLike => Some(1),
            PatternMode::StriddenPathLike => Some(2),
            PatternMode::Static | PatternMode::DynamicRandom => None,
        }
    }

    /// Builds a mode from the legacy flag triple.
    ///
    /// Returns `None` for combinations that have no meaning: static with
    /// path-like, or stridden without path-like.
    pub fn from_flags(is_static: bool, path_like: bool, stridden: bool) -> Option<Self> {
        match (is_static, path_like, stridden) {
            (true, false, false) => Some(PatternMode::Static),
            (false, false, false) => Some(PatternMode::DynamicRandom),
            (false, true, false) => Some(PatternMode::PathLike),
            (false, true, true) => Some(PatternMode::StriddenPathLike),
            _ => None,
        }
    }
}

impl std::fmt::Display for PatternMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PatternMode {
    type Err = SpecError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "static" => Ok(PatternMode::Static),
            "dynamic" | "dynamic_random" => Ok(PatternMode::DynamicRandom),
            "path_like" => Ok(PatternMode::PathLike),
            "stridden_path_like" => Ok(PatternMode::StriddenPathLike),
            other => Err(SpecError::UnknownPatternMode(other.to_string())),
        }
    }
}

/// Durations with a hard-wired sine step count under [`SineStepPolicy::LegacyLookup`].
///
/// The step count does not follow from the discretization rate. Existing
/// pattern sets were generated with these values.
pub const LEGACY_SINE_STEPS: &[(u32, usize)] = &[(400, 80)];

/// Sine step count for durations missing from [`LEGACY_SINE_STEPS`].
pub const LEGACY_SINE_DEFAULT_STEPS: usize = 24;

/// How many samples the sine synthesizer emits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SineStepPolicy {
    /// Fixed lookup keyed on the total time (80 for 400 ms, otherwise 24).
    #[default]
    LegacyLookup,
    /// Exactly `discretization_count` samples.
    Discretization,
    /// `total_time_ms / discretization_count` samples, at least one.
    PerRate,
}

impl SineStepPolicy {
    /// Number of sine samples for the given duration and discretization.
    pub fn steps(&self, total_time_ms: u32, discretization_count: usize) -> usize {
        match self {
            SineStepPolicy::LegacyLookup => LEGACY_SINE_STEPS
                .iter()
                .find(|(time, _)| *time == total_time_ms)
                .map(|(_, steps)| *steps)
                .unwrap_or(LEGACY_SINE_DEFAULT_STEPS),
            SineStepPolicy::Discretization => discretization_count,
            SineStepPolicy::PerRate => {
                (total_time_ms as usize / discretization_count.max(1)).max(1)
            }
        }
    }
}
