//! Drawing random requests from a config.

use rand::seq::SliceRandom;
use rand::Rng;
use rand_pcg::Pcg32;
use tactigen_spec::{ActuatorRange, GeneratorConfig, ModulationRequest, PatternMode, WaveKind};

use crate::error::{PatternError, PatternResult};
use crate::strategy::coordinates_for_mode;

fn choose<T: Copy>(set: &[T], name: &'static str, rng: &mut Pcg32) -> PatternResult<T> {
    set.choose(rng)
        .copied()
        .ok_or(PatternError::EmptyValueSet { name })
}

fn draw_count(range: ActuatorRange, name: &'static str, rng: &mut Pcg32) -> PatternResult<usize> {
    if !range.is_valid() {
        return Err(PatternError::invalid_param(
            name,
            format!("empty range {}..={}", range.min, range.max),
        ));
    }
    Ok(rng.gen_range(range.min..=range.max))
}

/// Draws a random request of the given kind and mode.
///
/// Timing parameters are drawn from the config's value sets. Static
/// patterns size their coordinate set from `static_actuators`; dynamic and
/// path-like patterns use `dynamic_actuators`. The amplitude is left unset
/// so amplitude-driven waves draw it at synthesis time.
pub fn draw_request(
    config: &GeneratorConfig,
    kind: WaveKind,
    mode: PatternMode,
    rng: &mut Pcg32,
) -> PatternResult<ModulationRequest> {
    let total_time_ms = choose(&config.total_times_ms, "total_times_ms", rng)?;
    let modulation_rate_hz = choose(&config.modulation_rates_hz, "modulation_rates_hz", rng)?;
    let phase_offset = choose(&config.phase_offsets, "phase_offsets", rng)?;
    let carrier_frequency_hz = choose(&config.carrier_frequencies_hz, "carrier_frequencies_hz", rng)?;
    let block_frequency_hz = choose(&config.block_frequencies_hz, "block_frequencies_hz", rng)?;

    let (actuators, pattern_sets) = if mode.is_static() {
        (draw_count(config.static_actuators, "static_actuators", rng)?, 1)
    } else {
        let sets = choose(&config.dynamic_pattern_counts, "dynamic_pattern_counts", rng)?;
        (draw_count(config.dynamic_actuators, "dynamic_actuators", rng)?, sets)
    };
    let coordinates = coordinates_for_mode(mode, config.grid, actuators, pattern_sets, rng);

    tracing::debug!(
        %kind,
        %mode,
        total_time_ms,
        actuators,
        coordinates = coordinates.len(),
        "drew request"
    );

    Ok(ModulationRequest::builder(kind, mode)
        .total_time_ms(total_time_ms)
        .modulation_rate_hz(modulation_rate_hz)
        .amplitude_fraction(config.fraction)
        .phase_offset(phase_offset)
        .discretization_count(config.discretization_rate)
        .coordinates(coordinates)
        .carrier_frequency_hz(carrier_frequency_hz)
        .block_frequency_hz(block_frequency_hz)
        .build())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::create_rng;

    #[test]
    fn test_drawn_values_come_from_config() {
        let config = GeneratorConfig::default();
        let mut rng = create_rng(17);
        for _ in 0..20 {
            let req = draw_request(&config, WaveKind::Sine, PatternMode::Static, &mut rng).unwrap();
            assert!(config.total_times_ms.contains(&req.total_time_ms));
            assert!(config.phase_offsets.contains(&req.phase_offset));
            assert_eq!(req.discretization_count, config.discretization_rate);
            assert!((1..=8).contains(&req.coordinates.len()));
            assert!(req.amplitude.is_none());
            assert!(req.validate(&config).is_ok());
        }
    }

    #[test]
    fn test_path_like_request_is_a_walk() {
        let config = GeneratorConfig::default();
        let mut rng = create_rng(3);
        let req = draw_request(&config, WaveKind::Block, PatternMode::PathLike, &mut rng).unwrap();
        // dynamic_actuators steps plus the start.
        assert!((3..=17).contains(&req.coordinates.len()));
        assert!(req.is_path_like());
    }

    #[test]
    fn test_draw_is_deterministic() {
        let config = GeneratorConfig::default();
        let a = draw_request(&config, WaveKind::Hanning, PatternMode::DynamicRandom, &mut create_rng(8))
            .unwrap();
        let b = draw_request(&config, WaveKind::Hanning, PatternMode::DynamicRandom, &mut create_rng(8))
            .unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_empty_set_reported_by_name() {
        let config = GeneratorConfig {
            phase_offsets: vec![],
            ..GeneratorConfig::default()
        };
        let err = draw_request(&config, WaveKind::Sine, PatternMode::Static, &mut create_rng(0))
            .unwrap_err();
        assert!(matches!(err, PatternError::EmptyValueSet { name: "phase_offsets" }));
    }

    #[test]
    fn test_inverted_range_rejected() {
        let config = GeneratorConfig {
            dynamic_actuators: ActuatorRange::new(9, 2),
            ..GeneratorConfig::default()
        };
        let err = draw_request(&config, WaveKind::Sine, PatternMode::DynamicRandom, &mut create_rng(0))
            .unwrap_err();
        assert!(matches!(err, PatternError::InvalidParameter { .. }));
    }
}
