//! Command-line argument parsing for the Relief terrain generator.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Relief terrain generator command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "relief", about = "Procedural terrain mesh generator")]
pub struct CliArgs {
    /// Noise seed.
    #[arg(long)]
    pub seed: Option<u32>,

    /// Heightmap side length, border ring included.
    #[arg(long)]
    pub bordered_side: Option<usize>,

    /// Vertical scale applied after the height curve.
    #[arg(long)]
    pub height_multiplier: Option<f32>,

    /// Generate only this LOD level instead of the configured list.
    #[arg(long)]
    pub lod: Option<u32>,

    /// Directory OBJ files are written into.
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(seed) = args.seed {
            self.noise.seed = seed;
        }
        if let Some(side) = args.bordered_side {
            self.terrain.bordered_side = side;
        }
        if let Some(multiplier) = args.height_multiplier {
            self.terrain.height_multiplier = multiplier;
        }
        if let Some(lod) = args.lod {
            self.terrain.lod_levels = vec![lod];
        }
        if let Some(ref dir) = args.output_dir {
            self.export.output_dir = dir.clone();
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
