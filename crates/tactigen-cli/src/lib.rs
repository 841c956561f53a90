//! Tactigen CLI library.
//!
//! This crate provides the argument definitions and command implementations
//! behind the `tactigen` binary, so integration tests can drive them without
//! spawning a process.

pub mod cli_args;
pub mod commands;
