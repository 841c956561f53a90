//! Render command implementation
//!
//! Converts an existing JSON pattern record into an animated GIF preview.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tactigen_backend_preview::{render_gif, AmplitudeGrid};
use tactigen_spec::Pattern;

use super::output::{check_config, load_config, write_file};

/// Run the render command
///
/// # Arguments
/// * `input` - Path to a JSON pattern record
/// * `output` - GIF path (default: `input` with a `.gif` extension)
/// * `config` - Optional generator config supplying grid and preview settings
///
/// # Returns
/// Exit code: 0 success, 1 record or config error, 2 render error
pub fn run(input: &str, output: Option<&str>, config: Option<&str>) -> Result<ExitCode> {
    let output: PathBuf = output
        .map(PathBuf::from)
        .unwrap_or_else(|| Path::new(input).with_extension("gif"));

    println!("{} {}", "Rendering:".cyan().bold(), input);

    let config = load_config(config)?;
    if !check_config(&config) {
        return Ok(ExitCode::from(1));
    }

    let json = fs::read_to_string(input)
        .with_context(|| format!("Failed to read pattern file: {}", input))?;
    let pattern = match Pattern::from_json(&json) {
        Ok(pattern) => pattern,
        Err(e) => {
            println!("\n{} Invalid pattern record: {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(1));
        }
    };

    let grid = match AmplitudeGrid::from_pattern(&pattern, config.grid) {
        Ok(grid) => grid,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(1));
        }
    };

    let gif = match render_gif(&grid, &config.preview) {
        Ok(bytes) => bytes,
        Err(e) => {
            println!("\n{} {}", "FAILED".red().bold(), e);
            return Ok(ExitCode::from(2));
        }
    };
    write_file(&output, &gif)?;

    println!(
        "\n{} {} frame(s) written to {}",
        "SUCCESS".green().bold(),
        grid.len(),
        output.display()
    );
    Ok(ExitCode::SUCCESS)
}
