//! End-to-end generation tests for fixed, hand-checked requests.

use pretty_assertions::assert_eq;
use tactigen_backend_pattern::strategy::{random_position, random_walk};
use tactigen_backend_pattern::{create_rng, generate_from_request, synthesize};
use tactigen_spec::{GeneratorConfig, GridSize, ModulationRequest, PatternMode, WaveKind};

#[test]
fn test_constant_single_actuator_record() {
    let request = ModulationRequest::builder(WaveKind::Constant, PatternMode::Static)
        .total_time_ms(100)
        .amplitude(100)
        .carrier_frequency_hz(300)
        .coordinate((1, 1))
        .build();

    let result = generate_from_request(&request, &GeneratorConfig::default(), 0).unwrap();
    let json: serde_json::Value = serde_json::from_str(&result.pattern.to_json().unwrap()).unwrap();

    let iterations = json["pattern"].as_array().unwrap();
    assert_eq!(iterations.len(), 10);
    for it in iterations {
        assert_eq!(
            it["iteration"],
            serde_json::json!([{ "coord": 11, "amplitude": 100, "frequency": 300 }])
        );
        assert_eq!(it["time"].as_f64(), Some(10.0));
    }
}

#[test]
fn test_sawtooth_one_hertz_over_one_second() {
    let request = ModulationRequest::builder(WaveKind::Sawtooth, PatternMode::Static)
        .carrier_frequency_hz(1)
        .total_time_ms(1000)
        .discretization_count(4)
        .phase_offset(0.0)
        .coordinate((2, 2))
        .build();
    let config = GeneratorConfig::default();

    let samples = synthesize(&request, &config, &mut create_rng(0)).unwrap();
    assert_eq!(samples, vec![0, 85, 170, 0]);
    assert!(samples.iter().all(|s| (0..=config.max_amp).contains(s)));
}

#[test]
fn test_path_walk_of_five_steps() {
    let grid = GridSize::new(4, 6);
    for seed in [0, 1, 42, 1234] {
        let mut rng = create_rng(seed);
        let start = random_position(grid, &mut rng);
        let path = random_walk(grid, start, 5, 1, &mut rng);

        assert_eq!(path.len(), 6);
        assert!(path.iter().all(|p| grid.contains(*p)));
        for pair in path.windows(2) {
            assert!(pair[0].column.abs_diff(pair[1].column) <= 1);
            assert!(pair[0].row.abs_diff(pair[1].row) <= 1);
        }
    }
}

#[test]
fn test_path_like_pattern_timing() {
    let request = ModulationRequest::builder(WaveKind::Hanning, PatternMode::PathLike)
        .total_time_ms(392)
        .discretization_count(8)
        .amplitude(255)
        .coordinates([(1, 1), (2, 2), (2, 3), (3, 3)])
        .build();
    let result = generate_from_request(&request, &GeneratorConfig::default(), 5).unwrap();

    assert_eq!(result.pattern.len(), 8);
    for it in result.pattern.iterations() {
        assert_eq!(it.events.len(), 1);
        assert_eq!(it.time, 98.0);
    }
    let amps: Vec<i32> = result
        .pattern
        .iterations()
        .iter()
        .map(|it| it.events[0].amplitude)
        .collect();
    assert_eq!(amps.first(), Some(&0));
    assert_eq!(amps.last(), Some(&0));
}

#[test]
fn test_block_pattern_uses_block_frequency() {
    let request = ModulationRequest::builder(WaveKind::Block, PatternMode::Static)
        .total_time_ms(1000)
        .block_frequency_hz(2.0)
        .discretization_count(5)
        .amplitude(100)
        .coordinate((4, 6))
        .build();
    let result = generate_from_request(&request, &GeneratorConfig::default(), 0).unwrap();
    let amps: Vec<i32> = result
        .pattern
        .iterations()
        .iter()
        .map(|it| it.events[0].amplitude)
        .collect();
    assert_eq!(amps, vec![100, 100, -100, -100, 100]);
}
