//! Multi-octave fractal Brownian motion (fBm) heightmap provider.
//!
//! Composites multiple octaves of Perlin noise into a bordered [`Heightmap`]
//! of samples normalized to `[0, 1]`, ready for remapping and mesh
//! generation.

use noise::{NoiseFn, Perlin};

use crate::grid::Heightmap;

/// Configuration for multi-octave fBm noise used in heightmap generation.
#[derive(Clone, Debug, PartialEq)]
pub struct NoiseMapParams {
    /// World seed for deterministic generation.
    pub seed: u32,
    /// Number of noise octaves to composite. More octaves add finer detail
    /// at the cost of additional computation. Typical range: 4-8.
    pub octaves: u32,
    /// Frequency multiplier between successive octaves. Default: 2.0.
    pub lacunarity: f64,
    /// Amplitude multiplier between successive octaves. Default: 0.5.
    pub persistence: f64,
    /// Frequency of the first (lowest) octave. Controls the spatial scale of
    /// the broadest terrain features. Default: 0.03.
    pub frequency: f64,
    /// World-space offset of the grid origin, in samples. Adjacent chunks
    /// sampled with matching offsets line up seamlessly.
    pub offset: [f64; 2],
}

impl Default for NoiseMapParams {
    fn default() -> Self {
        Self {
            seed: 0,
            octaves: 4,
            lacunarity: 2.0,
            persistence: 0.5,
            frequency: 0.03,
            offset: [0.0, 0.0],
        }
    }
}

/// Samples fBm elevation values over Perlin noise.
///
/// Each sample composites multiple octaves, where each successive octave
/// scales frequency by the lacunarity and amplitude by the persistence,
/// producing self-similar detail at progressively finer scales.
pub struct NoiseMapSampler {
    noise: Perlin,
    params: NoiseMapParams,
}

impl NoiseMapSampler {
    /// Create a new sampler with the given parameters.
    pub fn new(params: NoiseMapParams) -> Self {
        let noise = Perlin::new(params.seed);
        Self { noise, params }
    }

    /// Sample the raw (unnormalized) fBm value at a world-space coordinate.
    ///
    /// The theoretical range is `[-max_amplitude, +max_amplitude]`.
    pub fn sample(&self, x: f64, y: f64) -> f64 {
        let mut total = 0.0;
        let mut frequency = self.params.frequency;
        let mut amplitude = 1.0;

        for _ in 0..self.params.octaves {
            let nx = x * frequency;
            let ny = y * frequency;
            total += self.noise.get([nx, ny]) * amplitude;

            frequency *= self.params.lacunarity;
            amplitude *= self.params.persistence;
        }

        total
    }

    /// Sample normalized to `[0, 1]`.
    ///
    /// With zero octaves the amplitude sum is zero and every sample maps to
    /// the midpoint 0.5.
    pub fn sample01(&self, x: f64, y: f64) -> f32 {
        let max_amp = self.max_amplitude();
        if max_amp == 0.0 {
            return 0.5;
        }
        let normalized = (self.sample(x, y) / max_amp + 1.0) * 0.5;
        normalized.clamp(0.0, 1.0) as f32
    }

    /// Compute the theoretical maximum absolute amplitude (geometric series sum).
    pub fn max_amplitude(&self) -> f64 {
        let mut sum = 0.0;
        let mut amp = 1.0;
        for _ in 0..self.params.octaves {
            sum += amp;
            amp *= self.params.persistence;
        }
        sum
    }

    /// Return a reference to the current parameters.
    pub fn params(&self) -> &NoiseMapParams {
        &self.params
    }
}

/// Generate a bordered heightmap of normalized fBm samples.
///
/// Grid coordinate `(x, y)` samples the noise field at
/// `(offset.x + x, offset.y + y)`, so two grids whose offsets differ by a
/// whole number of samples share identical values where they overlap.
///
/// # Panics
///
/// Panics if `bordered_side < 3` (the grid must hold an interior plus the
/// border ring).
pub fn generate_noise_map(params: &NoiseMapParams, bordered_side: usize) -> Heightmap {
    let sampler = NoiseMapSampler::new(params.clone());
    let [ox, oy] = params.offset;
    Heightmap::from_fn(bordered_side, |x, y| {
        sampler.sample01(ox + x as f64, oy + y as f64)
    })
}
