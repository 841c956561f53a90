//! Phoneme command implementation
//!
//! Builds a static sine pattern from the built-in phoneme preset table.

use anyhow::Result;
use colored::Colorize;
use std::process::ExitCode;
use tactigen_backend_pattern::generate_from_request;
use tactigen_spec::{find_preset, PhonemePreset, SineStepPolicy, PHONEME_PRESETS};

use super::generate::report_failure;
use super::output::{check_config, load_config, out_dir, print_warnings, write_pattern};
use crate::cli_args::OutputArgs;

/// Run the phoneme command
///
/// Without `--config`, sine patterns use [`SineStepPolicy::PerRate`], which
/// matches the sample counts the preset table was tuned for.
///
/// # Returns
/// Exit code: 0 success, 1 unknown phoneme or config error, 2 generation or write error
pub fn run(name: Option<&str>, list: bool, output: &OutputArgs) -> Result<ExitCode> {
    if list {
        print_table();
        return Ok(ExitCode::SUCCESS);
    }
    let name = name.ok_or_else(|| anyhow::anyhow!("either --name or --list is required"))?;

    let Some(preset) = find_preset(name) else {
        println!("{} Unknown phoneme '{}'", "FAILED".red().bold(), name);
        let names: Vec<&str> = PHONEME_PRESETS.iter().map(|p| p.name).collect();
        println!("{} {}", "Available:".dimmed(), names.join(", "));
        return Ok(ExitCode::from(1));
    };

    let mut config = load_config(output.config.as_deref())?;
    if output.config.is_none() {
        config.sine_steps = SineStepPolicy::PerRate;
    }
    if !check_config(&config) {
        return Ok(ExitCode::from(1));
    }

    let out_dir = out_dir(output);
    let stem = format!("phoneme_{}", preset.name);
    println!("{} {}", "Phoneme:".cyan().bold(), preset.name);
    println!("{} {}", "Output dir:".cyan().bold(), out_dir.display());

    // The request is fully specified; the seed only feeds an unused RNG.
    let result = match generate_from_request(&preset.request(), &config, 0) {
        Ok(result) => result,
        Err(e) => return Ok(report_failure(&stem, &e)),
    };
    print_warnings(&stem, &result.warnings);

    let files = match write_pattern(&out_dir, &stem, &result.pattern, &config, output) {
        Ok(files) => files,
        Err(e) => {
            println!("\n{} {}: {:#}", "FAILED".red().bold(), stem, e);
            return Ok(ExitCode::from(2));
        }
    };

    println!(
        "\n{} {} iterations, {} file(s) {}",
        "SUCCESS".green().bold(),
        result.pattern.len(),
        files.len(),
        result.pattern_hash[..16].dimmed()
    );
    Ok(ExitCode::SUCCESS)
}

fn print_table() {
    println!(
        "{}",
        format!(
            "{:<4} {:>6} {:>6} {:>5} {:>5} {:>4} {:>6}  {}",
            "name", "ms", "rate", "frac", "phase", "disc", "freq", "actuators"
        )
        .bold()
    );
    for preset in PHONEME_PRESETS {
        println!("{}", table_row(preset));
    }
}

fn table_row(preset: &PhonemePreset) -> String {
    let actuators: Vec<String> = preset.positions().iter().map(|p| p.to_string()).collect();
    format!(
        "{:<4} {:>6} {:>6} {:>5} {:>5} {:>4} {:>6}  {}",
        preset.name,
        preset.total_time_ms,
        preset.modulation_rate_hz,
        preset.fraction,
        preset.phase_offset,
        preset.discretization_count,
        preset.carrier_frequency_hz,
        actuators.join(" ")
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tactigen_spec::Pattern;

    #[test]
    fn test_table_row_lists_actuators() {
        let preset = find_preset("B").unwrap();
        let row = table_row(preset);
        assert!(row.starts_with("B "));
        assert!(row.contains(&preset.positions()[0].to_string()));
    }

    #[test]
    fn test_unknown_phoneme_exits_one() {
        let code = run(Some("QQ"), false, &OutputArgs::default()).unwrap();
        assert_eq!(code, ExitCode::from(1));
    }

    #[test]
    fn test_phoneme_pattern_is_static() {
        let tmp = tempfile::tempdir().unwrap();
        let args = OutputArgs {
            json_only: true,
            out_dir: Some(tmp.path().to_string_lossy().into_owned()),
            ..OutputArgs::default()
        };
        let code = run(Some("b"), false, &args).unwrap();
        assert_eq!(code, ExitCode::SUCCESS);

        let preset = find_preset("B").unwrap();
        let json = fs::read_to_string(tmp.path().join("phoneme_B.json")).unwrap();
        let pattern = Pattern::from_json(&json).unwrap();
        let expected = SineStepPolicy::PerRate
            .steps(preset.total_time_ms, preset.discretization_count);
        assert_eq!(pattern.len(), expected);
        for it in pattern.iterations() {
            let coords: Vec<_> = it.events.iter().map(|e| e.coord).collect();
            assert_eq!(coords, preset.positions());
        }
    }
}
