//! Waveform synthesis.
//!
//! Each wave kind turns a handful of timing parameters into an ordered list
//! of integer amplitude samples. Synthesizers know nothing about the grid;
//! the strategy layer decides which actuators the samples drive.
//!
//! - `constant` - Fixed amplitude, one sample per time step
//! - `sine` - Raised sine envelope between a floor and `max_amp`
//! - `sawtooth` - Rising ramp mapped to `[0, max_amp]`
//! - `block` - Square wave of `+a` and `-a`
//! - `hanning` - Raised-cosine window scaled to `a`

pub mod block;
pub mod constant;
pub mod hanning;
pub mod sawtooth;
pub mod sine;

use rand::seq::SliceRandom;
use rand_pcg::Pcg32;
use tactigen_spec::{GeneratorConfig, ModulationRequest, WaveKind};

use crate::error::{PatternError, PatternResult};

pub use block::BlockWave;
pub use constant::ConstantWave;
pub use hanning::HanningWave;
pub use sawtooth::SawtoothWave;
pub use sine::SineWave;

/// Common trait for all waveform synthesizers.
pub trait Modulator {
    /// Generates the amplitude samples.
    ///
    /// The RNG is only consulted by kinds that draw their amplitude.
    fn samples(&self, rng: &mut Pcg32) -> Vec<i32>;
}

/// Where a wave's peak amplitude comes from.
#[derive(Debug, Clone, PartialEq)]
pub enum AmplitudeSource {
    /// Always this amplitude.
    Fixed(i32),
    /// One of these, drawn uniformly on every synthesis call.
    Drawn(Vec<i32>),
}

impl AmplitudeSource {
    /// Uses the request's fixed amplitude or falls back to the config set.
    pub fn from_request(
        request: &ModulationRequest,
        config: &GeneratorConfig,
    ) -> PatternResult<Self> {
        match request.amplitude {
            Some(amp) => Ok(AmplitudeSource::Fixed(amp)),
            None if config.amplitudes.is_empty() => {
                Err(PatternError::EmptyValueSet { name: "amplitudes" })
            }
            None => Ok(AmplitudeSource::Drawn(config.amplitudes.clone())),
        }
    }

    /// Returns the amplitude for one synthesis call.
    pub fn pick(&self, rng: &mut Pcg32) -> i32 {
        match self {
            AmplitudeSource::Fixed(amp) => *amp,
            AmplitudeSource::Drawn(set) => set.choose(rng).copied().unwrap_or_default(),
        }
    }
}

/// Returns `n` evenly spaced points over `[start, stop]`, both ends included.
///
/// The last point is exactly `stop`. A single point is `start`.
pub fn linspace(start: f64, stop: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (stop - start) / (n - 1) as f64;
            let mut points: Vec<f64> = (0..n).map(|i| start + step * i as f64).collect();
            points[n - 1] = stop;
            points
        }
    }
}

/// Parses a wave kind name.
pub fn parse_wave_kind(name: &str) -> PatternResult<WaveKind> {
    Ok(name.parse::<WaveKind>()?)
}

fn require_rate(name: &'static str, value: f64) -> PatternResult<f64> {
    if value.is_finite() && value != 0.0 {
        Ok(value)
    } else {
        Err(PatternError::ZeroRate { name, value })
    }
}

/// Synthesizes the amplitude samples for a request.
///
/// Rates the chosen kind divides by are checked here, so a request that
/// skipped validation still fails cleanly instead of producing NaN samples.
pub fn synthesize(
    request: &ModulationRequest,
    config: &GeneratorConfig,
    rng: &mut Pcg32,
) -> PatternResult<Vec<i32>> {
    if request.discretization_count == 0 {
        return Err(PatternError::invalid_param(
            "discretization_count",
            "must be greater than zero",
        ));
    }

    let samples = match request.kind {
        WaveKind::Constant => {
            if config.time_step_ms == 0 {
                return Err(PatternError::invalid_param("time_step_ms", "must be greater than zero"));
            }
            ConstantWave {
                amplitude: AmplitudeSource::from_request(request, config)?,
                total_time_ms: request.total_time_ms,
                time_step_ms: config.time_step_ms,
            }
            .samples(rng)
        }
        WaveKind::Sine => SineWave {
            total_time_ms: request.total_time_ms,
            modulation_rate_hz: require_rate("modulation_rate_hz", request.modulation_rate_hz)?,
            fraction: request.amplitude_fraction,
            phase_offset: request.phase_offset,
            steps: config
                .sine_steps
                .steps(request.total_time_ms, request.discretization_count),
            max_amp: config.max_amp,
        }
        .samples(rng),
        WaveKind::Sawtooth => {
            require_rate("modulation_rate_hz", request.modulation_rate_hz)?;
            SawtoothWave {
                total_time_ms: request.total_time_ms,
                carrier_frequency_hz: require_rate(
                    "carrier_frequency_hz",
                    f64::from(request.carrier_frequency_hz),
                )?,
                phase_offset: request.phase_offset,
                steps: request.discretization_count,
                max_amp: config.max_amp,
            }
            .samples(rng)
        }
        WaveKind::Block => BlockWave {
            amplitude: AmplitudeSource::from_request(request, config)?,
            total_time_ms: request.total_time_ms,
            frequency_hz: require_rate("block_frequency_hz", request.block_frequency_hz)?,
            steps: request.discretization_count,
        }
        .samples(rng),
        WaveKind::Hanning => HanningWave {
            amplitude: AmplitudeSource::from_request(request, config)?,
            steps: request.discretization_count,
        }
        .samples(rng),
    };

    tracing::trace!(kind = %request.kind, samples = samples.len(), "synthesized waveform");
    Ok(samples)
}
