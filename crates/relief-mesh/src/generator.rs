//! Terrain mesh generation: bordered heightmap in, renderable buffers out.

use glam::{Vec2, Vec3};
use relief_heightmap::{HeightCurve, Heightmap};

use crate::error::MeshError;
use crate::lod::simplification_increment;
use crate::mesh_data::{TerrainMesh, TerrainMeshData};
use crate::topology::{GridTopology, VertexRef};

/// Generate an indexed triangle mesh from a bordered heightmap.
///
/// Every elevation sample is remapped through `curve` and scaled by
/// `height_multiplier` to produce the vertex Y coordinate. `lod` selects the
/// grid decimation step (see [`simplification_increment`]); the mesh is
/// centered on the origin in the XZ plane regardless of LOD, so different
/// LOD levels of the same heightmap align spatially.
///
/// The heightmap's outer ring never appears in the output. Its vertices and
/// triangles participate only in normal accumulation, so the mesh's edge
/// normals match what an adjacent chunk would compute for the same boundary.
///
/// The call is pure and deterministic: identical inputs yield identical
/// buffers, and no state is shared across calls. Per-chunk parallel
/// generation is safe as long as the shared `curve` is `Sync`.
///
/// # Errors
///
/// Returns [`MeshError::InvalidDimension`] when the heightmap side cannot be
/// tiled evenly by the LOD's simplification step. Non-finite curve output is
/// not an error; it propagates into the geometry.
pub fn generate_terrain_mesh<C>(
    heightmap: &Heightmap,
    height_multiplier: f32,
    curve: &C,
    lod: u32,
) -> Result<TerrainMesh, MeshError>
where
    C: HeightCurve + ?Sized,
{
    let increment = simplification_increment(lod);
    let bordered_side = heightmap.side();
    let topology = GridTopology::map(bordered_side, increment)?;

    let mesh_size = (bordered_side - 2 * increment) as f32;
    let mesh_size_unsimplified = (bordered_side - 2) as f32;
    let top_left_x = -(mesh_size_unsimplified - 1.0) / 2.0;
    let top_left_z = (mesh_size_unsimplified - 1.0) / 2.0;

    let mut data = TerrainMeshData::with_capacity(
        topology.interior_count() as usize,
        topology.border_count() as usize,
    );

    for (x, y) in topology.sample_coords() {
        // Percent space spans the interior; ring samples land just outside
        // [0, 1], which pushes their XZ positions past the interior edge.
        let percent = Vec2::new(
            (x as f32 - increment as f32) / mesh_size,
            (y as f32 - increment as f32) / mesh_size,
        );
        let height = curve.evaluate(heightmap.get(x, y)) * height_multiplier;
        let position = Vec3::new(
            top_left_x + percent.x * mesh_size_unsimplified,
            height,
            top_left_z - percent.y * mesh_size_unsimplified,
        );

        let pushed = match topology.get(x, y) {
            VertexRef::Interior(_) => data.push_interior(position, percent),
            VertexRef::Border(_) => data.push_border(position),
        };
        // Scan order matches the topology's dense index assignment.
        debug_assert_eq!(pushed, topology.get(x, y));
    }

    for corners in topology.triangles() {
        data.push_triangle(corners);
    }

    Ok(data.build())
}
