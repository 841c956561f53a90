//! Pattern assembly: merging samples and coordinates into timed iterations.

use rand::Rng;
use rand_pcg::Pcg32;
use tactigen_spec::{GridPosition, ModulationRequest, MotorEvent, Pattern, PatternIteration, PatternMode};

/// Merges synthesized samples with the request's coordinates.
///
/// Every mode emits one iteration per sample:
/// - static: every coordinate carries sample `i`, each iteration lasts `time_step_ms`
/// - dynamic: the motor pool grows by one event per coordinate at sample `i`,
///   then `k` events in `1..=pool` are drawn from it with replacement
/// - path-like: the `i`-th path position (cycling over all but the last)
///   carries sample `i`, and each iteration lasts `total_time_ms / path length`
pub fn assemble(
    request: &ModulationRequest,
    samples: &[i32],
    time_step_ms: u32,
    rng: &mut Pcg32,
) -> Pattern {
    let freq = request.carrier_frequency_hz;
    let coords = &request.coordinates;

    let iterations = match request.mode {
        PatternMode::Static => static_iterations(coords, samples, freq, time_step_ms),
        PatternMode::DynamicRandom => {
            dynamic_iterations(coords, samples, freq, time_step_ms, rng)
        }
        PatternMode::PathLike | PatternMode::StriddenPathLike => {
            path_iterations(coords, samples, freq, request.total_time_ms)
        }
    };

    Pattern::new(iterations)
}

fn static_iterations(
    coords: &[GridPosition],
    samples: &[i32],
    freq: u32,
    time_step_ms: u32,
) -> Vec<PatternIteration> {
    let time = f64::from(time_step_ms);
    samples
        .iter()
        .map(|&amp| {
            let events = coords
                .iter()
                .map(|&coord| MotorEvent::new(coord, amp, freq))
                .collect();
            PatternIteration::new(events, time)
        })
        .collect()
}

fn dynamic_iterations(
    coords: &[GridPosition],
    samples: &[i32],
    freq: u32,
    time_step_ms: u32,
    rng: &mut Pcg32,
) -> Vec<PatternIteration> {
    let time = f64::from(time_step_ms);
    let mut pool: Vec<MotorEvent> = Vec::with_capacity(coords.len() * samples.len());
    let mut iterations = Vec::with_capacity(samples.len());

    for &amp in samples {
        pool.extend(coords.iter().map(|&coord| MotorEvent::new(coord, amp, freq)));
        if pool.is_empty() {
            iterations.push(PatternIteration::new(Vec::new(), time));
            continue;
        }
        let k = rng.gen_range(1..=pool.len());
        let events = (0..k)
            .map(|_| pool[rng.gen_range(0..pool.len())])
            .collect();
        iterations.push(PatternIteration::new(events, time));
    }
    iterations
}

fn path_iterations(
    coords: &[GridPosition],
    samples: &[i32],
    freq: u32,
    total_time_ms: u32,
) -> Vec<PatternIteration> {
    if coords.is_empty() {
        return Vec::new();
    }
    let time = f64::from(total_time_ms) / coords.len() as f64;
    let cycle = coords.len().saturating_sub(1).max(1);

    samples
        .iter()
        .enumerate()
        .map(|(i, &amp)| {
            let event = MotorEvent::new(coords[i % cycle], amp, freq);
            PatternIteration::new(vec![event], time)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;
    use pretty_assertions::assert_eq;
    use tactigen_spec::WaveKind;

    fn request(mode: PatternMode, coords: &[(u8, u8)]) -> ModulationRequest {
        ModulationRequest::builder(WaveKind::Constant, mode)
            .total_time_ms(100)
            .carrier_frequency_hz(300)
            .coordinates(coords.iter().copied())
            .build()
    }

    #[test]
    fn test_static_broadcasts_each_sample() {
        let req = request(PatternMode::Static, &[(1, 1), (2, 2)]);
        let pattern = assemble(&req, &[10, 20, 30], 10, &mut create_rng(0));
        assert_eq!(pattern.len(), 3);
        for (it, amp) in pattern.iterations().iter().zip([10, 20, 30]) {
            assert_eq!(it.time, 10.0);
            assert_eq!(
                it.events,
                vec![
                    MotorEvent::new(GridPosition::new(1, 1), amp, 300),
                    MotorEvent::new(GridPosition::new(2, 2), amp, 300),
                ]
            );
        }
    }

    #[test]
    fn test_dynamic_draws_from_growing_pool() {
        let req = request(PatternMode::DynamicRandom, &[(1, 1), (3, 4)]);
        let samples = [5, 6, 7, 8];
        let pattern = assemble(&req, &samples, 10, &mut create_rng(4));
        assert_eq!(pattern.len(), 4);

        for (i, it) in pattern.iterations().iter().enumerate() {
            let pool_size = 2 * (i + 1);
            assert!(!it.events.is_empty() && it.events.len() <= pool_size);
            for event in &it.events {
                // Only samples seen so far are in the pool.
                assert!(samples[..=i].contains(&event.amplitude));
                assert!(req.coordinates.contains(&event.coord));
            }
        }
    }

    #[test]
    fn test_path_cycles_over_all_but_last_position() {
        let req = request(PatternMode::PathLike, &[(1, 1), (1, 2), (2, 2)]);
        let pattern = assemble(&req, &[1, 2, 3, 4, 5], 10, &mut create_rng(0));
        let coords: Vec<_> = pattern
            .iterations()
            .iter()
            .map(|it| it.events[0].coord)
            .collect();
        assert_eq!(
            coords,
            vec![
                GridPosition::new(1, 1),
                GridPosition::new(1, 2),
                GridPosition::new(1, 1),
                GridPosition::new(1, 2),
                GridPosition::new(1, 1),
            ]
        );
        let amps: Vec<_> = pattern.iterations().iter().map(|it| it.events[0].amplitude).collect();
        assert_eq!(amps, vec![1, 2, 3, 4, 5]);
        assert!((pattern.iterations()[0].time - 100.0 / 3.0).abs() < 1e-12);
    }

    #[test]
    fn test_single_position_path() {
        let req = request(PatternMode::StriddenPathLike, &[(2, 2)]);
        let pattern = assemble(&req, &[9, 9], 10, &mut create_rng(0));
        assert_eq!(pattern.len(), 2);
        assert_eq!(pattern.iterations()[1].events[0].coord, GridPosition::new(2, 2));
        assert_eq!(pattern.iterations()[0].time, 100.0);
    }

    #[test]
    fn test_no_samples_no_iterations() {
        let req = request(PatternMode::Static, &[(1, 1)]);
        assert!(assemble(&req, &[], 10, &mut create_rng(0)).is_empty());
    }
}
