//! CLI argument definitions for the Tactigen command-line interface.
//!
//! All `#[derive(Parser)]` and `#[derive(Subcommand)]` types are defined here,
//! keeping `main.rs` focused on dispatch logic.

use clap::{ArgAction, Args, Parser, Subcommand};
use tactigen_spec::{PatternMode, WaveKind};

/// Tactigen - Tactile Pattern Generator
#[derive(Parser, Debug)]
#[command(name = "tactigen")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate random tactile patterns
    Generate {
        /// Number of patterns to generate
        #[arg(short = 'n', long = "count")]
        count: u32,

        #[command(flatten)]
        wave: WaveFlags,

        #[command(flatten)]
        mode: ModeFlags,

        /// Base seed (default: drawn from the OS RNG and printed)
        #[arg(long)]
        seed: Option<u32>,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Render an existing JSON pattern record to a GIF preview
    Render {
        /// Path to the JSON pattern record
        #[arg(short, long)]
        input: String,

        /// Output GIF path (default: input path with a .gif extension)
        #[arg(short, long)]
        output: Option<String>,

        /// Path to a JSON generator config (grid and preview settings)
        #[arg(long)]
        config: Option<String>,
    },

    /// Generate a static phoneme pattern from the built-in preset table
    Phoneme {
        /// Preset name (e.g. B, DH, NG)
        #[arg(long, required_unless_present = "list", conflicts_with = "list")]
        name: Option<String>,

        /// List the available presets
        #[arg(long)]
        list: bool,

        #[command(flatten)]
        output: OutputArgs,
    },

    /// Print the default generator config as JSON
    Config {
        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Waveform selection. At most one flag may be set; none selects sine.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct WaveFlags {
    /// Hanning window waveform
    #[arg(long, conflicts_with_all = ["block", "sawtooth", "constant"])]
    pub hanning: bool,

    /// Block (square) waveform
    #[arg(long, conflicts_with_all = ["hanning", "sawtooth", "constant"])]
    pub block: bool,

    /// Sawtooth waveform
    #[arg(long, conflicts_with_all = ["hanning", "block", "constant"])]
    pub sawtooth: bool,

    /// Constant amplitude
    #[arg(long, conflicts_with_all = ["hanning", "block", "sawtooth"])]
    pub constant: bool,
}

impl WaveFlags {
    /// The selected wave kind.
    pub fn kind(&self) -> WaveKind {
        if self.hanning {
            WaveKind::Hanning
        } else if self.block {
            WaveKind::Block
        } else if self.sawtooth {
            WaveKind::Sawtooth
        } else if self.constant {
            WaveKind::Constant
        } else {
            WaveKind::Sine
        }
    }
}

/// Coordinate strategy selection. No flag selects dynamic-random.
#[derive(Args, Debug, Clone, Copy, Default)]
pub struct ModeFlags {
    /// One coordinate set, active for the whole pattern
    #[arg(long = "static", conflicts_with = "path_like")]
    pub is_static: bool,

    /// Random walk over the grid
    #[arg(long = "pathLike", visible_alias = "path-like")]
    pub path_like: bool,

    /// Walk in steps of two (requires --pathLike)
    #[arg(long, requires = "path_like")]
    pub stridden: bool,
}

impl ModeFlags {
    /// The selected pattern mode, or `None` for a meaningless combination.
    pub fn mode(&self) -> Option<PatternMode> {
        PatternMode::from_flags(self.is_static, self.path_like, self.stridden)
    }
}

/// Where and in which formats pattern records are written.
#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write only the JSON records (no GIF or NumPy previews)
    #[arg(long = "jsonOnly", visible_alias = "json-only")]
    pub json_only: bool,

    /// Also write p_<i>.npy amplitude arrays
    #[arg(long)]
    pub numpy: bool,

    /// Also write p_<i>.ubj binary records
    #[arg(long)]
    pub ubjson: bool,

    /// Path to a JSON generator config
    #[arg(long)]
    pub config: Option<String>,

    /// Output directory (default: current directory)
    #[arg(long)]
    pub out_dir: Option<String>,
}
