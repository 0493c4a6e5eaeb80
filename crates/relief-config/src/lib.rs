//! Configuration system for the Relief terrain generator.
//!
//! Provides runtime-configurable settings that persist to disk as RON files,
//! with CLI overrides via clap and hot-reload detection.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{
    Config, DebugConfig, ExportConfig, NoiseConfig, TerrainConfig, default_config_dir,
};
pub use error::ConfigError;
