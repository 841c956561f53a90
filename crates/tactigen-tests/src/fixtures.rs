//! Test fixtures: temporary output directories with config files.

use std::fs;
use std::path::{Path, PathBuf};

use tactigen_spec::{GeneratorConfig, PatternMode};
use tempfile::TempDir;

/// Every pattern mode, in declaration order.
pub const ALL_MODES: [PatternMode; 4] = [
    PatternMode::Static,
    PatternMode::DynamicRandom,
    PatternMode::PathLike,
    PatternMode::StriddenPathLike,
];

/// A temporary directory holding a config file and an output directory.
pub struct ConfigFixture {
    pub root: TempDir,
    pub config_path: PathBuf,
    pub out_dir: PathBuf,
}

impl ConfigFixture {
    /// Writes `config` into a fresh temporary directory.
    pub fn new(config: &GeneratorConfig) -> Self {
        let root = TempDir::new().expect("Failed to create temp dir");
        let config_path = root.path().join("tactigen.json");
        let json = config.to_json_pretty().expect("Failed to serialize config");
        fs::write(&config_path, json).expect("Failed to write config file");
        let out_dir = root.path().join("out");
        Self {
            root,
            config_path,
            out_dir,
        }
    }

    /// Writes raw JSON as the config file, for malformed-config tests.
    pub fn with_raw_config(json: &str) -> Self {
        let fixture = Self::new(&GeneratorConfig::default());
        fs::write(&fixture.config_path, json).expect("Failed to write config file");
        fixture
    }

    /// Root of the fixture.
    pub fn path(&self) -> &Path {
        self.root.path()
    }

    /// Config path as a string, for CLI arguments.
    pub fn config_arg(&self) -> String {
        self.config_path.to_string_lossy().into_owned()
    }

    /// Output directory as a string, for CLI arguments.
    pub fn out_arg(&self) -> String {
        self.out_dir.to_string_lossy().into_owned()
    }

    /// Files directly inside the output directory, sorted by name.
    pub fn output_files(&self) -> Vec<String> {
        let Ok(entries) = fs::read_dir(&self.out_dir) else {
            return Vec::new();
        };
        let mut names: Vec<String> = entries
            .filter_map(|e| e.ok())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        names.sort();
        names
    }
}
