//! Command implementations for the Tactigen CLI.

pub mod config;
pub mod generate;
pub mod phoneme;
pub mod render;

mod output;
