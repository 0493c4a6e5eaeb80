//! Heightmap generation for the terrain mesher: bordered sample grids,
//! multi-octave fractal noise, and height remap curves.

mod curve;
mod grid;
mod noise_map;

pub use curve::{CurveError, HeightCurve, Keyframe, PiecewiseCurve};
pub use grid::{Heightmap, HeightmapError};
pub use noise_map::{NoiseMapParams, NoiseMapSampler, generate_noise_map};
