//! Square wave.

use rand_pcg::Pcg32;

use super::{linspace, AmplitudeSource, Modulator};

/// `+a` during the first half of each `2 / frequency` cycle, `-a` otherwise.
#[derive(Debug, Clone)]
pub struct BlockWave {
    /// Peak amplitude, drawn once per call when not fixed.
    pub amplitude: AmplitudeSource,
    /// Duration in milliseconds.
    pub total_time_ms: u32,
    /// Block frequency in Hz; one half-cycle lasts `1 / frequency_hz` seconds.
    pub frequency_hz: f64,
    /// Number of samples.
    pub steps: usize,
}

impl BlockWave {
    /// Sign of the wave at time `t` seconds.
    pub fn sign_at(&self, t: f64) -> i32 {
        let period = 1.0 / self.frequency_hz;
        if t.rem_euclid(2.0 * period) < period {
            1
        } else {
            -1
        }
    }
}

impl Modulator for BlockWave {
    fn samples(&self, rng: &mut Pcg32) -> Vec<i32> {
        let amp = self.amplitude.pick(rng);
        let stop = f64::from(self.total_time_ms) / 1000.0;

        linspace(0.0, stop, self.steps)
            .into_iter()
            .map(|t| amp * self.sign_at(t))
            .collect()
    }
}
