//! Tactigen data model.
//!
//! This crate holds the types shared by the pattern generator, the preview
//! renderers and the CLI: grid geometry and the fused coordinate encoding,
//! wave kinds and pattern modes, modulation requests, the generator config,
//! the pattern record and its JSON/UBJSON codecs, phoneme presets, and
//! seed derivation.
//!
//! # Example
//!
//! ```
//! use tactigen_spec::{GeneratorConfig, ModulationRequest, PatternMode, WaveKind};
//!
//! let request = ModulationRequest::builder(WaveKind::Constant, PatternMode::Static)
//!     .total_time_ms(100)
//!     .amplitude(100)
//!     .coordinate((1, 1))
//!     .build();
//!
//! let result = request.validate(&GeneratorConfig::default());
//! assert!(result.is_ok());
//! ```
//!
//! # Modules
//!
//! - [`config`]: Generator configuration and its validation
//! - [`error`]: Error, warning and validation types
//! - [`grid`]: Grid positions and the fused coordinate encoding
//! - [`hash`]: Seed derivation and pattern hashing
//! - [`pattern`]: The pattern record
//! - [`presets`]: Static phoneme patterns
//! - [`request`]: Modulation requests and their builder
//! - [`ubjson`]: Binary record codec
//! - [`wave`]: Wave kinds, pattern modes and the sine step policy

pub mod config;
pub mod error;
pub mod grid;
pub mod hash;
pub mod pattern;
pub mod presets;
pub mod request;
pub mod ubjson;
pub mod wave;

pub use config::{ActuatorRange, GeneratorConfig, PreviewSettings};
pub use error::{
    BackendError, ErrorCode, SpecError, ValidationError, ValidationResult, ValidationWarning,
    WarningCode,
};
pub use grid::{decode_coord, encode_coord, GridPosition, GridSize, MAX_GRID_DIMENSION};
pub use hash::{blake3_hash, derive_pattern_seed, pattern_hash};
pub use pattern::{MotorEvent, Pattern, PatternIteration};
pub use presets::{find_preset, PhonemePreset, PHONEME_PRESETS};
pub use request::{ModulationRequest, ModulationRequestBuilder};
pub use wave::{PatternMode, SineStepPolicy, WaveKind};

/// Result type for data model operations.
pub type Result<T> = std::result::Result<T, SpecError>;
