//! Tactigen End-to-End Test Infrastructure
//!
//! This crate provides integration tests across the workspace:
//!
//! - Generation: config and seed -> pattern records
//! - Codecs: JSON, UBJSON, GIF and NumPy outputs
//! - **Determinism**: byte-identical records across runs
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p tactigen-tests
//! ```

pub mod determinism;
pub mod fixtures;

pub use determinism::{compute_hash, verify_determinism, DeterminismResult};
pub use fixtures::{ConfigFixture, ALL_MODES};
