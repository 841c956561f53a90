//! Rising sawtooth mapped to `[0, max_amp]`.

use rand_pcg::Pcg32;

use super::{linspace, Modulator};

/// Ramp in `[-1, 1)` with period `1 / frequency`, scaled to `[0, max_amp)`.
///
/// Sample = `(max_amp * saw(t) + max_amp) / 2`, truncated toward zero.
#[derive(Debug, Clone)]
pub struct SawtoothWave {
    /// Duration in milliseconds.
    pub total_time_ms: u32,
    /// Ramp frequency in Hz.
    pub carrier_frequency_hz: f64,
    /// Phase offset in seconds.
    pub phase_offset: f64,
    /// Number of samples.
    pub steps: usize,
    /// Peak amplitude.
    pub max_amp: i32,
}

/// Unit sawtooth: `-1` at the start of each period, rising toward `+1`.
pub fn unit_sawtooth(cycles: f64) -> f64 {
    let frac = cycles - cycles.floor();
    2.0 * frac - 1.0
}

impl Modulator for SawtoothWave {
    fn samples(&self, _rng: &mut Pcg32) -> Vec<i32> {
        let max = f64::from(self.max_amp);
        let stop = f64::from(self.total_time_ms) / 1000.0;

        linspace(0.0, stop, self.steps)
            .into_iter()
            .map(|t| {
                let saw = unit_sawtooth(self.carrier_frequency_hz * (t - self.phase_offset));
                ((max * saw + max) / 2.0) as i32
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_unit_sawtooth() {
        assert_eq!(unit_sawtooth(0.0), -1.0);
        assert_eq!(unit_sawtooth(0.5), 0.0);
        assert_eq!(unit_sawtooth(1.0), -1.0);
        assert_eq!(unit_sawtooth(-0.25), 0.5);
    }

    #[test]
    fn test_one_hertz_ramp_over_one_second() {
        let wave = SawtoothWave {
            total_time_ms: 1000,
            carrier_frequency_hz: 1.0,
            phase_offset: 0.0,
            steps: 4,
            max_amp: 255,
        };
        assert_eq!(wave.samples(&mut create_rng(0)), vec![0, 85, 170, 0]);
    }

    #[test]
    fn test_samples_within_range() {
        let wave = SawtoothWave {
            total_time_ms: 392,
            carrier_frequency_hz: 300.0,
            phase_offset: 0.4,
            steps: 64,
            max_amp: 255,
        };
        for s in wave.samples(&mut create_rng(0)) {
            assert!((0..=255).contains(&s));
        }
    }
}
