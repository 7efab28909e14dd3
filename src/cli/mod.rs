//! CLI interface for min-edit-distance
//!
//! A thin adapter over the distance engine: argument parsing, cost
//! configuration and output formatting.

pub mod args;
pub mod commands;
pub mod config;

pub use args::{Cli, Commands, CostArgs};
pub use config::{config_dir, resolve_config, ConfigSource, CostConfig};
