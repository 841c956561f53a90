//! Raised sine envelope.

use std::f64::consts::PI;

use rand_pcg::Pcg32;

use super::{linspace, Modulator};

/// `A * sin(B * (t - phi)) + D`, truncated toward zero.
///
/// `A = max_amp * (1 - fraction) / 2` and `D = max_amp - A`, so the wave
/// swings between `fraction * max_amp` and `max_amp`.
#[derive(Debug, Clone)]
pub struct SineWave {
    /// Duration in milliseconds; samples span `[0, total_time_ms / 1000]` seconds.
    pub total_time_ms: u32,
    /// Envelope rate in Hz.
    pub modulation_rate_hz: f64,
    /// Floor as a fraction of `max_amp`.
    pub fraction: f64,
    /// Phase offset in seconds.
    pub phase_offset: f64,
    /// Number of samples.
    pub steps: usize,
    /// Peak amplitude.
    pub max_amp: i32,
}

impl SineWave {
    /// Half the peak-to-peak swing.
    pub fn swing(&self) -> f64 {
        f64::from(self.max_amp) * (1.0 - self.fraction) / 2.0
    }

    /// Center line of the wave.
    pub fn offset(&self) -> f64 {
        f64::from(self.max_amp) - self.swing()
    }
}

impl Modulator for SineWave {
    fn samples(&self, _rng: &mut Pcg32) -> Vec<i32> {
        let a = self.swing();
        let d = self.offset();
        let b = 2.0 * PI * self.modulation_rate_hz;
        let stop = f64::from(self.total_time_ms) / 1000.0;

        linspace(0.0, stop, self.steps)
            .into_iter()
            .map(|t| (a * (b * (t - self.phase_offset)).sin() + d) as i32)
            .collect()
    }
}
