//! Bordered heightmap grid shared between the noise provider and the mesher.
//!
//! The grid is square and includes a one-sample border ring around the
//! renderable interior. The mesher uses the ring to compute seamless edge
//! normals; it never appears in the output geometry.

/// Errors that can occur when constructing a [`Heightmap`].
#[derive(Debug, thiserror::Error)]
pub enum HeightmapError {
    /// The side length cannot hold an interior plus the border ring.
    #[error("heightmap side must be at least 3 to include the border ring, got {0}")]
    SideTooSmall(usize),

    /// The sample buffer does not match the declared side length.
    #[error("expected {expected} samples for side {side}, got {actual}")]
    SampleCountMismatch {
        /// Declared side length.
        side: usize,
        /// `side * side`.
        expected: usize,
        /// Actual sample buffer length.
        actual: usize,
    },
}

/// A square grid of elevation samples, stored row-major, border ring included.
///
/// Samples are immutable once constructed. Elevations are expected to be
/// finite; non-finite values are not rejected here and simply propagate into
/// generated geometry.
#[derive(Clone, Debug, PartialEq)]
pub struct Heightmap {
    side: usize,
    samples: Vec<f32>,
}

impl Heightmap {
    /// Wrap an existing row-major sample buffer.
    ///
    /// # Errors
    ///
    /// Returns [`HeightmapError::SideTooSmall`] if `side < 3` and
    /// [`HeightmapError::SampleCountMismatch`] if the buffer length is not
    /// `side * side`.
    pub fn from_samples(side: usize, samples: Vec<f32>) -> Result<Self, HeightmapError> {
        if side < 3 {
            return Err(HeightmapError::SideTooSmall(side));
        }
        let expected = side * side;
        if samples.len() != expected {
            return Err(HeightmapError::SampleCountMismatch {
                side,
                expected,
                actual: samples.len(),
            });
        }
        Ok(Self { side, samples })
    }

    /// Fill a grid by evaluating `f(x, y)` for every coordinate, row-major.
    ///
    /// # Panics
    ///
    /// Panics if `side < 3`.
    pub fn from_fn(side: usize, mut f: impl FnMut(usize, usize) -> f32) -> Self {
        assert!(
            side >= 3,
            "heightmap side must be at least 3 to include the border ring, got {side}"
        );
        let mut samples = Vec::with_capacity(side * side);
        for y in 0..side {
            for x in 0..side {
                samples.push(f(x, y));
            }
        }
        Self { side, samples }
    }

    /// Side length of the grid, border ring included.
    pub fn side(&self) -> usize {
        self.side
    }

    /// Elevation sample at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if either coordinate is outside `0..side`.
    pub fn get(&self, x: usize, y: usize) -> f32 {
        assert!(
            x < self.side && y < self.side,
            "heightmap coordinate ({x}, {y}) out of bounds for side {}",
            self.side
        );
        self.samples[y * self.side + x]
    }

    /// The raw row-major sample buffer.
    pub fn samples(&self) -> &[f32] {
        &self.samples
    }
}
