//! Constant amplitude.

use rand_pcg::Pcg32;

use super::{AmplitudeSource, Modulator};

/// Holds one amplitude for the whole duration.
///
/// Emits one sample per time step, so a 100 ms wave at 10 ms steps has
/// ten samples.
#[derive(Debug, Clone)]
pub struct ConstantWave {
    /// Amplitude of every sample.
    pub amplitude: AmplitudeSource,
    /// Duration in milliseconds.
    pub total_time_ms: u32,
    /// Length of one step in milliseconds.
    pub time_step_ms: u32,
}

impl Modulator for ConstantWave {
    fn samples(&self, rng: &mut Pcg32) -> Vec<i32> {
        let count = (self.total_time_ms / self.time_step_ms.max(1)) as usize;
        let amp = self.amplitude.pick(rng);
        vec![amp; count]
    }
}
