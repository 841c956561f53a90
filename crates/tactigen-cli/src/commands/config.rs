//! Config command implementation

use anyhow::{Context, Result};
use colored::Colorize;
use std::path::Path;
use std::process::ExitCode;
use tactigen_spec::GeneratorConfig;

use super::output::write_file;

/// Run the config command
///
/// Prints the default generator config as pretty JSON, or writes it to
/// `output`. The result is a complete starting point for `--config`.
pub fn run(output: Option<&str>) -> Result<ExitCode> {
    let json = GeneratorConfig::default()
        .to_json_pretty()
        .context("Failed to serialize default config")?;

    match output {
        Some(path) => {
            write_file(Path::new(path), format!("{}\n", json).as_bytes())?;
            println!("{} {}", "Config written to:".green().bold(), path);
        }
        None => println!("{}", json),
    }
    Ok(ExitCode::SUCCESS)
}
