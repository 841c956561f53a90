//! Main entry points for pattern generation.

use rand_pcg::Pcg32;
use tactigen_spec::{
    derive_pattern_seed, pattern_hash, GeneratorConfig, ModulationRequest, Pattern, PatternMode,
    ValidationWarning, WaveKind,
};

use crate::draw::draw_request;
use crate::error::{PatternError, PatternResult};
use crate::rng::create_rng;
use crate::strategy::assemble;
use crate::waveform::synthesize;

/// Result of pattern generation.
#[derive(Debug, Clone)]
pub struct GenerateResult {
    /// The generated pattern.
    pub pattern: Pattern,
    /// Seed the pattern was generated from.
    pub seed: u32,
    /// BLAKE3 hash of the compact JSON record.
    pub pattern_hash: String,
    /// The request the pattern was built from.
    pub request: ModulationRequest,
    /// Validation warnings raised by the request.
    pub warnings: Vec<ValidationWarning>,
}

/// Validates a config, failing with every error it found.
pub fn check_config(config: &GeneratorConfig) -> PatternResult<()> {
    let result = config.validate();
    if result.is_ok() {
        Ok(())
    } else {
        Err(PatternError::InvalidConfig {
            errors: result.errors,
        })
    }
}

/// Generates one pattern from an explicit request.
///
/// The request is validated first; warnings are logged and the pattern is
/// still built.
pub fn generate_pattern(
    request: &ModulationRequest,
    config: &GeneratorConfig,
    rng: &mut Pcg32,
) -> PatternResult<Pattern> {
    generate_pattern_with_warnings(request, config, rng).map(|(pattern, _)| pattern)
}

fn generate_pattern_with_warnings(
    request: &ModulationRequest,
    config: &GeneratorConfig,
    rng: &mut Pcg32,
) -> PatternResult<(Pattern, Vec<ValidationWarning>)> {
    let warnings = request
        .validate(config)
        .into_result()
        .map_err(|errors| PatternError::InvalidRequest { errors })?;
    for warning in &warnings {
        tracing::warn!(code = %warning.code, "{}", warning);
    }

    let samples = synthesize(request, config, rng)?;
    let pattern = assemble(request, &samples, config.time_step_ms, rng);

    tracing::debug!(
        kind = %request.kind,
        mode = %request.mode,
        samples = samples.len(),
        iterations = pattern.len(),
        events = pattern.event_count(),
        "generated pattern"
    );
    Ok((pattern, warnings))
}

/// Generates a pattern from an explicit request and seed.
pub fn generate_from_request(
    request: &ModulationRequest,
    config: &GeneratorConfig,
    seed: u32,
) -> PatternResult<GenerateResult> {
    check_config(config)?;
    let mut rng = create_rng(seed);
    let (pattern, warnings) = generate_pattern_with_warnings(request, config, &mut rng)?;
    finish(pattern, seed, request.clone(), warnings)
}

/// Draws a random request and generates its pattern.
pub fn generate(
    config: &GeneratorConfig,
    kind: WaveKind,
    mode: PatternMode,
    seed: u32,
) -> PatternResult<GenerateResult> {
    check_config(config)?;
    let mut rng = create_rng(seed);
    let request = draw_request(config, kind, mode, &mut rng)?;
    let (pattern, warnings) = generate_pattern_with_warnings(&request, config, &mut rng)?;
    tracing::debug!(seed, "pattern seed");
    finish(pattern, seed, request, warnings)
}

/// Generates `count` patterns, pattern `i` seeded with `derive_pattern_seed(base_seed, i)`.
///
/// Fails on the first pattern that fails; nothing after it is generated.
pub fn generate_batch(
    config: &GeneratorConfig,
    kind: WaveKind,
    mode: PatternMode,
    base_seed: u32,
    count: u32,
) -> PatternResult<Vec<GenerateResult>> {
    (0..count)
        .map(|i| generate(config, kind, mode, derive_pattern_seed(base_seed, i)))
        .collect()
}

fn finish(
    pattern: Pattern,
    seed: u32,
    request: ModulationRequest,
    warnings: Vec<ValidationWarning>,
) -> PatternResult<GenerateResult> {
    let pattern_hash = pattern_hash(&pattern)?;
    Ok(GenerateResult {
        pattern,
        seed,
        pattern_hash,
        request,
        warnings,
    })
}
