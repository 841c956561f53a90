//! Hann window.

use std::f64::consts::PI;

use rand_pcg::Pcg32;

use super::{AmplitudeSource, Modulator};

/// `a * 0.5 * (1 - cos(2 pi k / (N - 1)))`, truncated toward zero.
///
/// Each sample is computed from its distance to the nearer edge, so the
/// window is exactly symmetric after truncation.
#[derive(Debug, Clone)]
pub struct HanningWave {
    /// Peak amplitude, drawn once per call when not fixed.
    pub amplitude: AmplitudeSource,
    /// Window length.
    pub steps: usize,
}

/// Hann window coefficients in `[0, 1]`.
pub fn hann(n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![1.0],
        _ => {
            let denom = (n - 1) as f64;
            (0..n)
                .map(|i| {
                    let k = i.min(n - 1 - i) as f64;
                    0.5 * (1.0 - (2.0 * PI * k / denom).cos())
                })
                .collect()
        }
    }
}

impl Modulator for HanningWave {
    fn samples(&self, rng: &mut Pcg32) -> Vec<i32> {
        let amp = f64::from(self.amplitude.pick(rng));
        hann(self.steps).into_iter().map(|w| (amp * w) as i32).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_window_shape() {
        let w = hann(5);
        assert_eq!(w[0], 0.0);
        assert_eq!(w[4], 0.0);
        assert!((w[2] - 1.0).abs() < 1e-12);
        assert_eq!(w[1], w[3]);
    }

    #[test]
    fn test_single_point_window() {
        let wave = HanningWave {
            amplitude: AmplitudeSource::Fixed(255),
            steps: 1,
        };
        assert_eq!(wave.samples(&mut create_rng(0)), vec![255]);
    }

    #[test]
    fn test_samples_are_symmetric_with_zero_edges() {
        let wave = HanningWave {
            amplitude: AmplitudeSource::Fixed(255),
            steps: 8,
        };
        let samples = wave.samples(&mut create_rng(0));
        assert_eq!(samples.len(), 8);
        assert_eq!(samples[0], 0);
        assert_eq!(samples[7], 0);
        for i in 0..8 {
            assert_eq!(samples[i], samples[7 - i]);
        }
        assert!(samples.iter().all(|s| (0..=255).contains(s)));
    }
}
