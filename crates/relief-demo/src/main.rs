//! Demo binary that generates LOD terrain meshes from fractal noise and
//! writes them out as Wavefront OBJ files.
//!
//! Configuration is loaded from `config.ron` and can be overridden via CLI
//! flags. Run with `cargo run -p relief-demo` for the default island, or
//! `cargo run -p relief-demo -- --seed 7 --lod 2` to override settings.

use std::time::Instant;

use clap::Parser;
use relief_config::{CliArgs, Config, default_config_dir};
use relief_heightmap::{Keyframe, NoiseMapParams, PiecewiseCurve, generate_noise_map};
use relief_log::init_logging;
use relief_mesh::{export_obj_to_path, generate_terrain_mesh};
use tracing::{info, warn};

fn main() {
    let args = CliArgs::parse();
    let config_dir = args.config.clone().unwrap_or_else(default_config_dir);
    let mut config = match Config::load_or_create(&config_dir) {
        Ok(config) => config,
        Err(err) => {
            eprintln!("failed to load config from {}: {err}", config_dir.display());
            std::process::exit(1);
        }
    };
    config.apply_cli_overrides(&args);

    init_logging(None, cfg!(debug_assertions), Some(&config));

    if let Err(err) = run(&config) {
        tracing::error!("terrain generation failed: {err}");
        std::process::exit(1);
    }
}

fn run(config: &Config) -> Result<(), Box<dyn std::error::Error>> {
    let noise = &config.noise;
    let params = NoiseMapParams {
        seed: noise.seed,
        octaves: noise.octaves,
        lacunarity: noise.lacunarity,
        persistence: noise.persistence,
        frequency: noise.frequency,
        offset: noise.offset,
    };

    let start = Instant::now();
    let heightmap = generate_noise_map(&params, config.terrain.bordered_side);
    info!(
        side = config.terrain.bordered_side,
        seed = noise.seed,
        elapsed_ms = start.elapsed().as_millis() as u64,
        "generated noise heightmap"
    );

    let curve = build_curve(&config.terrain.height_curve);
    std::fs::create_dir_all(&config.export.output_dir)?;

    for &lod in &config.terrain.lod_levels {
        let start = Instant::now();
        let mesh =
            generate_terrain_mesh(&heightmap, config.terrain.height_multiplier, &curve, lod)?;
        info!(
            lod,
            vertices = mesh.vertex_count(),
            triangles = mesh.triangle_count(),
            elapsed_ms = start.elapsed().as_millis() as u64,
            "generated terrain mesh"
        );

        let path = config
            .export
            .output_dir
            .join(format!("{}_lod{lod}.obj", config.export.file_stem));
        export_obj_to_path(&mesh, &path)?;
        info!("wrote {}", path.display());
    }

    Ok(())
}

/// Build the remap curve from configured keyframes, falling back to the
/// identity remap when fewer than two keys are given.
fn build_curve(keys: &[(f32, f32)]) -> PiecewiseCurve {
    let keyframes: Vec<Keyframe> = keys
        .iter()
        .map(|&(time, value)| Keyframe::new(time, value))
        .collect();
    match PiecewiseCurve::new(keyframes) {
        Ok(curve) => curve,
        Err(err) => {
            warn!("invalid height curve in config ({err}), using identity remap");
            identity_curve()
        }
    }
}

fn identity_curve() -> PiecewiseCurve {
    PiecewiseCurve::new(vec![Keyframe::new(0.0, 0.0), Keyframe::new(1.0, 1.0)])
        .expect("identity curve keys are valid")
}
