//! Tactigen CLI - Command-line interface for tactile pattern generation
//!
//! This binary draws modulation requests, synthesizes tactile patterns for a
//! vibrotactile grid, and writes their JSON, UBJSON, GIF and NumPy records.

use clap::Parser;
use std::process::ExitCode;
use tracing::Level;

use tactigen_cli::cli_args::{Cli, Commands};
use tactigen_cli::commands;

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_max_level(level)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let result = match cli.command {
        Commands::Generate {
            count,
            wave,
            mode,
            seed,
            output,
        } => commands::generate::run(count, wave, mode, seed, &output),
        Commands::Render {
            input,
            output,
            config,
        } => commands::render::run(&input, output.as_deref(), config.as_deref()),
        Commands::Phoneme { name, list, output } => {
            commands::phoneme::run(name.as_deref(), list, &output)
        }
        Commands::Config { output } => commands::config::run(output.as_deref()),
    };

    match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("{}: {:#}", colored::Colorize::red("error"), e);
            ExitCode::from(1)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cli_parses_render() {
        let cli = Cli::try_parse_from(["tactigen", "render", "--input", "p_0.json"]).unwrap();
        match cli.command {
            Commands::Render {
                input,
                output,
                config,
            } => {
                assert_eq!(input, "p_0.json");
                assert!(output.is_none());
                assert!(config.is_none());
            }
            _ => panic!("expected render command"),
        }
    }

    #[test]
    fn test_cli_parses_phoneme() {
        let cli = Cli::try_parse_from(["tactigen", "phoneme", "--name", "NG", "--numpy"]).unwrap();
        match cli.command {
            Commands::Phoneme { name, list, output } => {
                assert_eq!(name.as_deref(), Some("NG"));
                assert!(!list);
                assert!(output.numpy);
            }
            _ => panic!("expected phoneme command"),
        }
    }

    #[test]
    fn test_cli_parses_config() {
        let cli = Cli::try_parse_from(["tactigen", "config", "-o", "tactigen.json"]).unwrap();
        match cli.command {
            Commands::Config { output } => assert_eq!(output.as_deref(), Some("tactigen.json")),
            _ => panic!("expected config command"),
        }
    }

    #[test]
    fn test_unknown_subcommand_fails() {
        assert!(Cli::try_parse_from(["tactigen", "play"]).is_err());
    }
}
