//! Static phoneme patterns.
//!
//! Each preset is a static sine pattern on a fixed group of actuators, with
//! every coordinate written as `(column, row)` on the default 4x6 grid.

use crate::grid::GridPosition;
use crate::request::ModulationRequest;
use crate::wave::{PatternMode, WaveKind};

/// One phoneme preset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PhonemePreset {
    /// Phoneme name, e.g. "B" or "NG".
    pub name: &'static str,
    /// Duration in milliseconds.
    pub total_time_ms: u32,
    /// Envelope modulation rate in Hz.
    pub modulation_rate_hz: f64,
    /// Fraction of `max_amp` the envelope bottoms out at.
    pub fraction: f64,
    /// Phase offset in seconds.
    pub phase_offset: f64,
    /// Discretization rate.
    pub discretization_count: usize,
    /// Active actuators as `(column, row)`.
    pub coordinates: &'static [(u8, u8)],
    /// Carrier frequency in Hz.
    pub carrier_frequency_hz: u32,
}

const fn preset(
    name: &'static str,
    total_time_ms: u32,
    modulation_rate_hz: f64,
    discretization_count: usize,
    coordinates: &'static [(u8, u8)],
    carrier_frequency_hz: u32,
) -> PhonemePreset {
    PhonemePreset {
        name,
        total_time_ms,
        modulation_rate_hz,
        fraction: 0.5,
        phase_offset: 0.0,
        discretization_count,
        coordinates,
        carrier_frequency_hz,
    }
}

/// All phoneme presets.
pub const PHONEME_PRESETS: &[PhonemePreset] = &[
    preset("B", 92, 30.0, 6, &[(1, 5), (1, 6), (2, 5), (2, 6)], 300),
    preset("M", 392, 8.0, 12, &[(1, 5), (1, 6), (2, 5), (2, 6)], 60),
    preset("J", 392, 8.0, 12, &[(1, 1), (1, 6), (2, 1), (2, 6)], 300),
    preset("D", 92, 30.0, 6, &[(3, 3), (3, 4), (4, 3), (4, 4)], 300),
    preset("G", 92, 30.0, 6, &[(1, 1), (1, 2), (2, 1), (2, 2)], 300),
    preset("V", 392, 8.0, 12, &[(1, 6), (2, 6), (3, 6), (4, 6)], 300),
    preset("DH", 392, 8.0, 12, &[(1, 3), (1, 4), (2, 3), (2, 4)], 300),
    preset("Z", 392, 8.0, 12, &[(1, 1), (2, 1), (3, 1), (4, 1)], 300),
    preset("ZH", 392, 8.0, 12, &[(3, 1), (3, 2), (4, 1), (4, 2)], 60),
    preset("N", 392, 8.0, 12, &[(3, 3), (3, 4), (4, 3), (4, 4)], 60),
    preset("NG", 392, 8.0, 12, &[(1, 1), (1, 2), (2, 1), (2, 2)], 60),
    preset(
        "W",
        392,
        8.0,
        12,
        &[(1, 3), (1, 4), (1, 5), (1, 6), (3, 3), (3, 4), (3, 5), (3, 6)],
        60,
    ),
    preset("L", 392, 30.0, 12, &[(3, 5), (3, 6), (4, 5), (4, 6)], 300),
    preset("R", 392, 30.0, 12, &[(3, 1), (3, 2), (4, 1), (4, 2)], 300),
];

/// Looks up a preset by name, ignoring ASCII case.
pub fn find_preset(name: &str) -> Option<&'static PhonemePreset> {
    PHONEME_PRESETS
        .iter()
        .find(|p| p.name.eq_ignore_ascii_case(name))
}

impl PhonemePreset {
    /// Active actuators as grid positions.
    pub fn positions(&self) -> Vec<GridPosition> {
        self.coordinates.iter().copied().map(GridPosition::from).collect()
    }

    /// Builds the static sine request this preset describes.
    pub fn request(&self) -> ModulationRequest {
        ModulationRequest::builder(WaveKind::Sine, PatternMode::Static)
            .total_time_ms(self.total_time_ms)
            .modulation_rate_hz(self.modulation_rate_hz)
            .amplitude_fraction(self.fraction)
            .phase_offset(self.phase_offset)
            .discretization_count(self.discretization_count)
            .coordinates(self.coordinates.iter().copied())
            .carrier_frequency_hz(self.carrier_frequency_hz)
            .build()
    }
}
