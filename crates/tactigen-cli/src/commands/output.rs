//! Shared helpers for loading configs and writing pattern records.

use anyhow::{Context, Result};
use colored::Colorize;
use std::fs;
use std::path::{Path, PathBuf};
use tactigen_backend_preview::{render_gif, render_npy, AmplitudeGrid};
use tactigen_spec::{GeneratorConfig, Pattern, ValidationError, ValidationWarning};

use crate::cli_args::OutputArgs;

/// Loads the config at `path`, or the default config.
pub(crate) fn load_config(path: Option<&str>) -> Result<GeneratorConfig> {
    match path {
        Some(path) => GeneratorConfig::from_json_file(Path::new(path))
            .with_context(|| format!("Failed to load config file: {}", path)),
        None => Ok(GeneratorConfig::default()),
    }
}

/// Prints config validation errors. Returns false if there were any.
pub(crate) fn check_config(config: &GeneratorConfig) -> bool {
    let result = config.validate();
    if result.is_ok() {
        return true;
    }
    print_validation_errors(&result.errors);
    println!(
        "\n{} Config validation failed with {} error(s)",
        "FAILED".red().bold(),
        result.errors.len()
    );
    false
}

pub(crate) fn print_validation_errors(errors: &[ValidationError]) {
    println!("\n{}", "Errors:".red().bold());
    for error in errors {
        let path = error
            .path
            .as_ref()
            .map(|p| format!(" at {}", p))
            .unwrap_or_default();
        println!(
            "  {} [{}]{}: {}",
            "x".red(),
            error.code.to_string().red(),
            path.dimmed(),
            error.message
        );
    }
}

pub(crate) fn print_warnings(label: &str, warnings: &[ValidationWarning]) {
    for warning in warnings {
        println!(
            "  {} [{}] {}: {}",
            "!".yellow(),
            warning.code.to_string().yellow(),
            label.dimmed(),
            warning.message
        );
    }
}

/// Resolved output directory.
pub(crate) fn out_dir(args: &OutputArgs) -> PathBuf {
    PathBuf::from(args.out_dir.as_deref().unwrap_or("."))
}

/// File stem of the `index`-th generated pattern.
pub(crate) fn pattern_stem(index: u32) -> String {
    format!("p_{}", index)
}

/// Writes every requested artifact for one pattern.
///
/// `<stem>.json` is always written. `gifs/<stem>.gif` is skipped with
/// `--jsonOnly`, `<stem>.npy` needs `--numpy` and no `--jsonOnly`, and
/// `<stem>.ubj` needs `--ubjson`.
pub(crate) fn write_pattern(
    out_dir: &Path,
    stem: &str,
    pattern: &Pattern,
    config: &GeneratorConfig,
    args: &OutputArgs,
) -> Result<Vec<PathBuf>> {
    let mut written = Vec::new();

    let json_path = out_dir.join(format!("{}.json", stem));
    let json = pattern
        .to_json()
        .with_context(|| format!("Failed to serialize pattern {}", stem))?;
    write_file(&json_path, json.as_bytes())?;
    written.push(json_path);

    if args.ubjson {
        let ubj_path = out_dir.join(format!("{}.ubj", stem));
        let bytes = pattern
            .to_ubjson()
            .with_context(|| format!("Failed to encode pattern {} as UBJSON", stem))?;
        write_file(&ubj_path, &bytes)?;
        written.push(ubj_path);
    }

    if args.json_only {
        return Ok(written);
    }

    let grid = AmplitudeGrid::from_pattern(pattern, config.grid)
        .with_context(|| format!("Failed to rasterize pattern {}", stem))?;

    let gif_path = out_dir.join("gifs").join(format!("{}.gif", stem));
    let gif = render_gif(&grid, &config.preview)
        .with_context(|| format!("Failed to render GIF for pattern {}", stem))?;
    write_file(&gif_path, &gif)?;
    written.push(gif_path);

    if args.numpy {
        let npy_path = out_dir.join(format!("{}.npy", stem));
        let npy = render_npy(&grid)
            .with_context(|| format!("Failed to encode NumPy array for pattern {}", stem))?;
        write_file(&npy_path, &npy)?;
        written.push(npy_path);
    }

    Ok(written)
}

/// Writes `bytes` to `path`, creating parent directories.
pub(crate) fn write_file(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
    }
    fs::write(path, bytes).with_context(|| format!("Failed to write file: {}", path.display()))?;
    tracing::debug!(path = %path.display(), bytes = bytes.len(), "wrote file");
    Ok(())
}
