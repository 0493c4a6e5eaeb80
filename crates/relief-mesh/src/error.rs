//! Mesh generation error types.

/// Errors that can occur while generating a terrain mesh.
#[derive(Debug, thiserror::Error)]
pub enum MeshError {
    /// The heightmap extent cannot be tiled evenly by the simplification
    /// step derived from the requested level of detail. Checked before any
    /// buffer allocation.
    #[error(
        "heightmap side {bordered_side} is incompatible with simplification step {increment}"
    )]
    InvalidDimension {
        /// Side length of the bordered heightmap.
        bordered_side: usize,
        /// Simplification step derived from the LOD level.
        increment: usize,
    },
}
