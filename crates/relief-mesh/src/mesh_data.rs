//! Growable vertex and triangle stores plus normal reconstruction.
//!
//! Interior vertices carry position and UV and are renderable; border
//! vertices carry position only and exist solely so edge normals average
//! data from both sides of a chunk seam. Insertion order defines the dense
//! vertex index, so no pre-sized buffers or write cursors are needed.

use glam::{Vec2, Vec3};

use crate::topology::VertexRef;

/// Accumulates vertices and triangles during generation, then assembles the
/// final renderable buffers.
#[derive(Clone, Debug, Default)]
pub struct TerrainMeshData {
    positions: Vec<Vec3>,
    uvs: Vec<Vec2>,
    border_positions: Vec<Vec3>,
    triangles: Vec<[u32; 3]>,
    border_triangles: Vec<[VertexRef; 3]>,
}

impl TerrainMeshData {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store with capacity for the expected vertex counts.
    pub fn with_capacity(interior: usize, border: usize) -> Self {
        Self {
            positions: Vec::with_capacity(interior),
            uvs: Vec::with_capacity(interior),
            border_positions: Vec::with_capacity(border),
            triangles: Vec::new(),
            border_triangles: Vec::new(),
        }
    }

    /// Append an interior vertex and return its reference.
    pub fn push_interior(&mut self, position: Vec3, uv: Vec2) -> VertexRef {
        let index = self.positions.len() as u32;
        self.positions.push(position);
        self.uvs.push(uv);
        VertexRef::Interior(index)
    }

    /// Append a border vertex (position only, never rendered) and return its
    /// reference.
    pub fn push_border(&mut self, position: Vec3) -> VertexRef {
        let index = self.border_positions.len() as u32;
        self.border_positions.push(position);
        VertexRef::Border(index)
    }

    /// Route a triangle to the renderable list or the border-only list.
    ///
    /// A triangle is renderable only when all three corners are interior;
    /// anything touching the ring is kept purely for normal accumulation.
    pub fn push_triangle(&mut self, corners: [VertexRef; 3]) {
        match corners {
            [VertexRef::Interior(a), VertexRef::Interior(b), VertexRef::Interior(c)] => {
                self.triangles.push([a, b, c]);
            }
            _ => self.border_triangles.push(corners),
        }
    }

    /// Number of interior vertices pushed so far.
    pub fn interior_vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of renderable triangles pushed so far.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len()
    }

    fn position(&self, vref: VertexRef) -> Vec3 {
        match vref {
            VertexRef::Interior(i) => self.positions[i as usize],
            VertexRef::Border(i) => self.border_positions[i as usize],
        }
    }

    /// Unnormalized face normal of a triangle, `(B-A) x (C-A)`.
    ///
    /// The magnitude is proportional to the triangle's area, so nearer and
    /// larger faces weigh more when accumulated onto shared vertices.
    fn face_normal(&self, [a, b, c]: [VertexRef; 3]) -> Vec3 {
        let pa = self.position(a);
        let ab = self.position(b) - pa;
        let ac = self.position(c) - pa;
        ab.cross(ac)
    }

    /// Per-vertex smooth normals by area-weighted face-normal accumulation.
    ///
    /// Renderable triangles contribute to all three corners. Border
    /// triangles contribute only to the interior corners they touch; border
    /// vertices never receive a normal since they are discarded. A vertex
    /// referenced by no triangle keeps the zero vector.
    fn compute_normals(&self) -> Vec<Vec3> {
        let mut normals = vec![Vec3::ZERO; self.positions.len()];

        for &[a, b, c] in &self.triangles {
            let face = self.face_normal([
                VertexRef::Interior(a),
                VertexRef::Interior(b),
                VertexRef::Interior(c),
            ]);
            normals[a as usize] += face;
            normals[b as usize] += face;
            normals[c as usize] += face;
        }

        for &corners in &self.border_triangles {
            let face = self.face_normal(corners);
            for vref in corners {
                if let VertexRef::Interior(i) = vref {
                    normals[i as usize] += face;
                }
            }
        }

        for normal in &mut normals {
            *normal = normal.normalize_or_zero();
        }
        normals
    }

    /// Consume the store and assemble the final mesh.
    ///
    /// Border vertices and triangles are dropped after the normal pass; only
    /// interior topology reaches the output.
    pub fn build(self) -> TerrainMesh {
        let normals = self.compute_normals();
        let mut indices = Vec::with_capacity(self.triangles.len() * 3);
        for tri in &self.triangles {
            indices.extend_from_slice(tri);
        }
        TerrainMesh {
            positions: self.positions,
            uvs: self.uvs,
            indices,
            normals,
        }
    }
}

/// Final renderable terrain mesh buffers.
///
/// `positions[i]`, `uvs[i]`, and `normals[i]` all describe vertex `i`;
/// `indices` holds flattened renderable triangles. Immutable once returned.
#[derive(Clone, Debug, PartialEq)]
pub struct TerrainMesh {
    /// Vertex positions (x, remapped height, z).
    pub positions: Vec<Vec3>,
    /// Texture coordinates spanning the interior extent.
    pub uvs: Vec<Vec2>,
    /// Flattened triangle index list, three entries per face.
    pub indices: Vec<u32>,
    /// Unit-length smooth shading normals (zero for unreferenced vertices).
    pub normals: Vec<Vec3>,
}

impl TerrainMesh {
    /// Number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of triangles.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insertion_order_defines_indices() {
        let mut data = TerrainMeshData::new();
        assert_eq!(
            data.push_interior(Vec3::ZERO, Vec2::ZERO),
            VertexRef::Interior(0)
        );
        assert_eq!(
            data.push_interior(Vec3::X, Vec2::X),
            VertexRef::Interior(1)
        );
        assert_eq!(data.push_border(Vec3::Z), VertexRef::Border(0));
        assert_eq!(data.push_border(Vec3::Y), VertexRef::Border(1));
    }

    #[test]
    fn test_triangle_routing() {
        let mut data = TerrainMeshData::new();
        let i0 = data.push_interior(Vec3::ZERO, Vec2::ZERO);
        let i1 = data.push_interior(Vec3::X, Vec2::ZERO);
        let i2 = data.push_interior(Vec3::Z, Vec2::ZERO);
        let b0 = data.push_border(Vec3::new(-1.0, 0.0, 0.0));

        data.push_triangle([i0, i2, i1]);
        data.push_triangle([b0, i0, i2]);
        assert_eq!(data.triangle_count(), 1);

        let mesh = data.build();
        assert_eq!(mesh.indices, vec![0, 2, 1]);
    }

    #[test]
    fn test_flat_triangle_normal_points_up() {
        let mut data = TerrainMeshData::new();
        let a = data.push_interior(Vec3::new(0.0, 0.0, 0.0), Vec2::ZERO);
        let b = data.push_interior(Vec3::new(1.0, 0.0, 0.0), Vec2::ZERO);
        let c = data.push_interior(Vec3::new(0.0, 0.0, -1.0), Vec2::ZERO);
        // CCW seen from above (+Y): a -> b -> c.
        data.push_triangle([a, b, c]);

        let mesh = data.build();
        for normal in &mesh.normals {
            assert!((*normal - Vec3::Y).length() < 1e-6, "normal {normal} != +Y");
        }
    }

    #[test]
    fn test_border_triangle_contributes_to_interior_normals_only() {
        let mut data = TerrainMeshData::new();
        let i0 = data.push_interior(Vec3::new(0.0, 0.0, 0.0), Vec2::ZERO);
        let i1 = data.push_interior(Vec3::new(1.0, 0.0, 0.0), Vec2::ZERO);
        let b0 = data.push_border(Vec3::new(0.0, 0.0, -1.0));
        data.push_triangle([i0, i1, b0]);

        let mesh = data.build();
        // No renderable triangles, but the border one still smooths normals.
        assert!(mesh.indices.is_empty());
        assert!((mesh.normals[0] - Vec3::Y).length() < 1e-6);
        assert!((mesh.normals[1] - Vec3::Y).length() < 1e-6);
    }

    #[test]
    fn test_unreferenced_vertex_keeps_zero_normal() {
        let mut data = TerrainMeshData::new();
        data.push_interior(Vec3::ZERO, Vec2::ZERO);
        let mesh = data.build();
        assert_eq!(mesh.normals, vec![Vec3::ZERO]);
    }

    #[test]
    fn test_area_weighted_accumulation() {
        // Two faces share vertex 0: a small upward-facing triangle and a
        // large one facing +X. The larger face dominates the averaged normal.
        let mut data = TerrainMeshData::new();
        let shared = data.push_interior(Vec3::ZERO, Vec2::ZERO);
        let s1 = data.push_interior(Vec3::new(0.1, 0.0, 0.0), Vec2::ZERO);
        let s2 = data.push_interior(Vec3::new(0.0, 0.0, -0.1), Vec2::ZERO);
        let l1 = data.push_interior(Vec3::new(0.0, 0.0, -10.0), Vec2::ZERO);
        let l2 = data.push_interior(Vec3::new(0.0, 10.0, 0.0), Vec2::ZERO);
        data.push_triangle([shared, s1, s2]);
        data.push_triangle([shared, l1, l2]);

        let mesh = data.build();
        let n = mesh.normals[0];
        assert!(n.x > 0.9, "large +X face should dominate, got {n}");
        assert!(n.y > 0.0 && n.y < 0.1);
    }
}
