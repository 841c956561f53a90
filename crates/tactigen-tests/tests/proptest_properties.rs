//! Property-based tests for Tactigen using proptest.
//!
//! These cover the waveform, random-walk and record properties that must hold
//! for every valid input, not just the hand-picked scenarios.
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tactigen-tests --test proptest_properties
//! ```

use proptest::prelude::*;

use tactigen_backend_pattern::strategy::random_walk;
use tactigen_backend_pattern::waveform::{
    AmplitudeSource, ConstantWave, HanningWave, Modulator, SawtoothWave, SineWave,
};
use tactigen_backend_pattern::{create_rng, generate};
use tactigen_spec::{GeneratorConfig, GridPosition, GridSize, Pattern, PatternMode, WaveKind};

// ============================================================================
// 1. Waveform Synthesis
// ============================================================================

proptest! {
    /// Constant waves emit one sample per 10 ms step, all equal to the amplitude.
    #[test]
    fn constant_length_and_value(
        amplitude in -255i32..=255,
        total_time_ms in 1u32..2000,
        seed in any::<u32>()
    ) {
        let wave = ConstantWave {
            amplitude: AmplitudeSource::Fixed(amplitude),
            total_time_ms,
            time_step_ms: 10,
        };
        let samples = wave.samples(&mut create_rng(seed));
        prop_assert_eq!(samples.len(), (total_time_ms / 10) as usize);
        prop_assert!(samples.iter().all(|&s| s == amplitude));
    }

    /// Hanning windows are symmetric with zero edges.
    #[test]
    fn hanning_symmetric_with_zero_edges(
        steps in 2usize..200,
        amplitude in 0i32..=255
    ) {
        let wave = HanningWave {
            amplitude: AmplitudeSource::Fixed(amplitude),
            steps,
        };
        let samples = wave.samples(&mut create_rng(0));
        prop_assert_eq!(samples.len(), steps);
        prop_assert_eq!(samples[0], 0);
        prop_assert_eq!(samples[steps - 1], 0);
        for i in 0..steps {
            prop_assert_eq!(samples[i], samples[steps - 1 - i], "asymmetric at {}", i);
        }
    }

    /// With fraction 0.5 the sine stays in [max_amp/2 - 1, max_amp].
    #[test]
    fn sine_half_fraction_range(
        total_time_ms in 1u32..1000,
        modulation_rate_hz in 0.5f64..500.0,
        phase_offset in 0.0f64..1.0,
        steps in 1usize..200,
        max_amp in 2i32..=255
    ) {
        let wave = SineWave {
            total_time_ms,
            modulation_rate_hz,
            fraction: 0.5,
            phase_offset,
            steps,
            max_amp,
        };
        for sample in wave.samples(&mut create_rng(0)) {
            prop_assert!(sample >= max_amp / 2 - 1 && sample <= max_amp, "sample {}", sample);
        }
    }

    /// Sawtooth samples stay in [0, max_amp].
    #[test]
    fn sawtooth_range(
        total_time_ms in 1u32..2000,
        carrier_frequency_hz in 1.0f64..400.0,
        phase_offset in 0.0f64..1.0,
        steps in 1usize..100
    ) {
        let wave = SawtoothWave {
            total_time_ms,
            carrier_frequency_hz,
            phase_offset,
            steps,
            max_amp: 255,
        };
        let samples = wave.samples(&mut create_rng(0));
        prop_assert_eq!(samples.len(), steps);
        prop_assert!(samples.iter().all(|&s| (0..=255).contains(&s)));
    }
}

// ============================================================================
// 2. Random Walk
// ============================================================================

fn grid_and_start() -> impl Strategy<Value = (GridSize, GridPosition)> {
    (1u8..=9, 1u8..=9).prop_flat_map(|(width, height)| {
        (Just(GridSize::new(width, height)), 1..=width, 1..=height)
            .prop_map(|(grid, column, row)| (grid, GridPosition::new(column, row)))
    })
}

proptest! {
    /// Walks stay on the grid and move at most `step` per axis.
    #[test]
    fn walk_bounded_and_local(
        (grid, start) in grid_and_start(),
        steps in 0usize..40,
        step in 1u8..=2,
        seed in any::<u32>()
    ) {
        let path = random_walk(grid, start, steps, step, &mut create_rng(seed));
        prop_assert_eq!(path.len(), steps + 1);
        prop_assert_eq!(path[0], start);
        for pos in &path {
            prop_assert!(grid.contains(*pos), "{} off grid", pos);
        }
        for pair in path.windows(2) {
            prop_assert!(pair[0].column.abs_diff(pair[1].column) <= step);
            prop_assert!(pair[0].row.abs_diff(pair[1].row) <= step);
        }
    }
}

// ============================================================================
// 3. Generated Patterns
// ============================================================================

fn wave_kind() -> impl Strategy<Value = WaveKind> {
    prop::sample::select(WaveKind::ALL.to_vec())
}

fn pattern_mode() -> impl Strategy<Value = PatternMode> {
    prop::sample::select(tactigen_tests::ALL_MODES.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    /// Generated patterns survive both record codecs unchanged.
    #[test]
    fn generated_patterns_round_trip(
        kind in wave_kind(),
        mode in pattern_mode(),
        seed in any::<u32>()
    ) {
        let result = generate(&GeneratorConfig::default(), kind, mode, seed).unwrap();

        let json = result.pattern.to_json().unwrap();
        prop_assert_eq!(&Pattern::from_json(&json).unwrap(), &result.pattern);

        let ubj = result.pattern.to_ubjson().unwrap();
        prop_assert_eq!(&Pattern::from_ubjson(&ubj).unwrap(), &result.pattern);
    }

    /// Every emitted coordinate lies on the configured grid.
    #[test]
    fn generated_coordinates_on_grid(
        kind in wave_kind(),
        mode in pattern_mode(),
        seed in any::<u32>()
    ) {
        let config = GeneratorConfig::default();
        let result = generate(&config, kind, mode, seed).unwrap();
        for it in result.pattern.iterations() {
            prop_assert!(it.time > 0.0);
            for event in &it.events {
                prop_assert!(config.grid.contains(event.coord), "{} off grid", event.coord);
            }
        }
    }
}
