//! Tactigen Pattern Backend
//!
//! This crate turns modulation requests into tactile patterns for a grid of
//! vibrotactile actuators.
//!
//! # Overview
//!
//! Generation runs in three stages:
//!
//! - **Drawing** - a random [`ModulationRequest`](tactigen_spec::ModulationRequest)
//!   is drawn from the config's value sets (skipped for explicit requests)
//! - **Synthesis** - the wave kind produces integer amplitude samples
//! - **Assembly** - the pattern mode maps samples onto coordinates, one
//!   iteration per sample
//!
//! # Determinism
//!
//! All randomness flows through a caller-supplied PCG32. Given the same
//! config, request kind, mode and seed, the output is identical across runs.
//!
//! # Example
//!
//! ```
//! use tactigen_backend_pattern::generate;
//! use tactigen_spec::{GeneratorConfig, PatternMode, WaveKind};
//!
//! let config = GeneratorConfig::default();
//! let result = generate(&config, WaveKind::Sine, PatternMode::PathLike, 42).unwrap();
//! assert!(!result.pattern.is_empty());
//! ```
//!
//! # Crate Structure
//!
//! - [`generate()`] - Draw and generate one pattern
//! - [`draw`] - Random requests from a config
//! - [`rng`] - Deterministic RNG
//! - [`strategy`] - Coordinate strategies and pattern assembly
//! - [`waveform`] - Waveform synthesizers

pub mod draw;
pub mod error;
pub mod generate;
pub mod rng;
pub mod strategy;
pub mod waveform;

pub use draw::draw_request;
pub use error::{PatternError, PatternResult};
pub use generate::{
    check_config, generate, generate_batch, generate_from_request, generate_pattern,
    GenerateResult,
};
pub use rng::{create_pattern_rng, create_rng};
pub use waveform::{synthesize, Modulator};
