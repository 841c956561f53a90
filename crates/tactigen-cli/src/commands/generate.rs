//! Generate command implementation
//!
//! Draws random modulation requests from the config and writes one set of
//! records per pattern.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use std::time::Instant;
use tactigen_backend_pattern::{generate, PatternError};
use tactigen_spec::derive_pattern_seed;

use super::output::{
    check_config, load_config, out_dir, pattern_stem, print_validation_errors, print_warnings,
    write_pattern,
};
use crate::cli_args::{ModeFlags, OutputArgs, WaveFlags};

/// Run the generate command
///
/// Pattern `i` is generated from `derive_pattern_seed(base_seed, i)`, so a
/// batch is reproduced exactly by passing the printed seed back in.
///
/// # Returns
/// Exit code: 0 success, 1 config or request error, 2 generation or write error
pub fn run(
    count: u32,
    wave: WaveFlags,
    mode: ModeFlags,
    seed: Option<u32>,
    output: &OutputArgs,
) -> Result<ExitCode> {
    let start = Instant::now();
    let kind = wave.kind();
    let mode = mode
        .mode()
        .ok_or_else(|| anyhow::anyhow!("--stridden needs --pathLike, which excludes --static"))?;
    let out_dir = out_dir(output);
    let base_seed = seed.unwrap_or_else(rand::random);

    println!("{} {} ({})", "Generating:".cyan().bold(), kind, mode);
    println!("{} {}", "Patterns:".cyan().bold(), count);
    println!("{} {}", "Output dir:".cyan().bold(), out_dir.display());
    println!("{} {}", "Seed:".cyan().bold(), base_seed);

    let config = load_config(output.config.as_deref())?;
    if !check_config(&config) {
        return Ok(ExitCode::from(1));
    }

    let mut written = 0usize;
    for index in 0..count {
        let stem = pattern_stem(index);
        let result = match generate(&config, kind, mode, derive_pattern_seed(base_seed, index)) {
            Ok(result) => result,
            Err(e) => return Ok(report_failure(&stem, &e)),
        };
        print_warnings(&stem, &result.warnings);

        match write_pattern(&out_dir, &stem, &result.pattern, &config, output) {
            Ok(files) => written += files.len(),
            Err(e) => {
                println!("\n{} {}: {:#}", "FAILED".red().bold(), stem, e);
                return Ok(ExitCode::from(2));
            }
        }

        println!(
            "  {} {} {} iterations {}",
            "+".green(),
            stem,
            result.pattern.len(),
            result.pattern_hash[..16].dimmed()
        );
    }

    println!(
        "\n{} Generated {} pattern(s), {} file(s) in {}ms",
        "SUCCESS".green().bold(),
        count,
        written,
        start.elapsed().as_millis()
    );
    Ok(ExitCode::SUCCESS)
}

/// Prints a generation failure and picks its exit code.
pub(crate) fn report_failure(label: &str, err: &PatternError) -> ExitCode {
    match err {
        PatternError::InvalidRequest { errors } | PatternError::InvalidConfig { errors } => {
            print_validation_errors(errors);
            println!(
                "\n{} {}: validation failed with {} error(s)",
                "FAILED".red().bold(),
                label,
                errors.len()
            );
            ExitCode::from(1)
        }
        other => {
            println!("\n{} {}: {}", "FAILED".red().bold(), label, other);
            ExitCode::from(2)
        }
    }
}
