//! Grid-to-topology mapping: classifies sampled grid coordinates as interior
//! or border vertices, assigns dense indices, and emits triangle topology
//! for every simplified quad.

use crate::error::MeshError;

/// Reference to a vertex in either the renderable interior set or the border
/// ring used only for normal smoothing.
///
/// Both kinds are densely indexed in row-major scan order over the sampled
/// grid, so identical inputs always produce identical references.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum VertexRef {
    /// Dense index into the interior vertex buffers.
    Interior(u32),
    /// Dense index into the border-only position buffer.
    Border(u32),
}

impl VertexRef {
    /// Returns `true` for interior references.
    pub fn is_interior(self) -> bool {
        matches!(self, VertexRef::Interior(_))
    }
}

/// Vertex classification and triangle topology for one simplified bordered
/// grid. Built once per generation call and discarded after use.
#[derive(Clone, Debug)]
pub struct GridTopology {
    bordered_side: usize,
    increment: usize,
    samples_per_line: usize,
    refs: Vec<VertexRef>,
    interior_count: u32,
    border_count: u32,
}

impl GridTopology {
    /// Classify every sampled coordinate of a bordered grid.
    ///
    /// Rows and columns are scanned with step `increment` from `0` to
    /// `bordered_side - 1` inclusive. A coordinate on the outer ring becomes
    /// a border vertex; everything else becomes an interior vertex.
    ///
    /// # Errors
    ///
    /// Returns [`MeshError::InvalidDimension`] when `increment` is zero, the
    /// grid is too small to hold a simplified interior, or the side cannot
    /// be tiled evenly by `increment`.
    pub fn map(bordered_side: usize, increment: usize) -> Result<Self, MeshError> {
        if increment == 0
            || bordered_side < 2 * increment + 1
            || (bordered_side - 2 * increment - 1) % increment != 0
        {
            return Err(MeshError::InvalidDimension {
                bordered_side,
                increment,
            });
        }

        let samples_per_line = (bordered_side - 1) / increment + 1;
        let mut refs = Vec::with_capacity(samples_per_line * samples_per_line);
        let mut interior_count = 0u32;
        let mut border_count = 0u32;

        for y in (0..bordered_side).step_by(increment) {
            for x in (0..bordered_side).step_by(increment) {
                let on_ring =
                    x == 0 || y == 0 || x == bordered_side - 1 || y == bordered_side - 1;
                if on_ring {
                    refs.push(VertexRef::Border(border_count));
                    border_count += 1;
                } else {
                    refs.push(VertexRef::Interior(interior_count));
                    interior_count += 1;
                }
            }
        }

        Ok(Self {
            bordered_side,
            increment,
            samples_per_line,
            refs,
            interior_count,
            border_count,
        })
    }

    /// Side length of the bordered grid.
    pub fn bordered_side(&self) -> usize {
        self.bordered_side
    }

    /// Simplification step between sampled coordinates.
    pub fn increment(&self) -> usize {
        self.increment
    }

    /// Number of interior (renderable) vertices.
    pub fn interior_count(&self) -> u32 {
        self.interior_count
    }

    /// Number of border-ring vertices.
    pub fn border_count(&self) -> u32 {
        self.border_count
    }

    /// Look up the vertex reference for a sampled grid coordinate.
    ///
    /// Both coordinates must be multiples of the simplification step.
    pub fn get(&self, x: usize, y: usize) -> VertexRef {
        debug_assert_eq!(x % self.increment, 0, "x={x} is not a sampled coordinate");
        debug_assert_eq!(y % self.increment, 0, "y={y} is not a sampled coordinate");
        self.refs[(y / self.increment) * self.samples_per_line + (x / self.increment)]
    }

    /// Iterate sampled `(x, y)` grid coordinates in scan order.
    pub fn sample_coords(&self) -> impl Iterator<Item = (usize, usize)> + '_ {
        let side = self.bordered_side;
        let inc = self.increment;
        (0..side)
            .step_by(inc)
            .flat_map(move |y| (0..side).step_by(inc).map(move |x| (x, y)))
    }

    /// Iterate the two triangles of every simplified quad, in scan order.
    ///
    /// For a quad with top-left sampled corner `a`, top-right `b`,
    /// bottom-left `c`, and bottom-right `d`, the triangles are `(a, d, c)`
    /// and `(d, a, b)`. This diagonal and winding make every face
    /// counter-clockwise seen from above (+Y), so reconstructed normals
    /// point out of the surface.
    pub fn triangles(&self) -> impl Iterator<Item = [VertexRef; 3]> + '_ {
        let side = self.bordered_side;
        let inc = self.increment;
        (0..side - 1).step_by(inc).flat_map(move |y| {
            (0..side - 1).step_by(inc).flat_map(move |x| {
                let a = self.get(x, y);
                let b = self.get(x + inc, y);
                let c = self.get(x, y + inc);
                let d = self.get(x + inc, y + inc);
                [[a, d, c], [d, a, b]]
            })
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_zero_increment() {
        assert!(matches!(
            GridTopology::map(9, 0),
            Err(MeshError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_rejects_grid_too_small_for_step() {
        // Side 5 cannot hold an interior once 2*4 ring samples are removed.
        assert!(matches!(
            GridTopology::map(5, 4),
            Err(MeshError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_rejects_uneven_tiling() {
        // (10 - 2*2 - 1) = 5 is not divisible by 2.
        assert!(matches!(
            GridTopology::map(10, 2),
            Err(MeshError::InvalidDimension { .. })
        ));
    }

    #[test]
    fn test_counts_for_full_detail_grid() {
        let topology = GridTopology::map(5, 1).unwrap();
        assert_eq!(topology.interior_count(), 9);
        assert_eq!(topology.border_count(), 16);
    }

    #[test]
    fn test_ring_classification() {
        let topology = GridTopology::map(5, 1).unwrap();
        assert!(!topology.get(0, 0).is_interior());
        assert!(!topology.get(4, 2).is_interior());
        assert!(!topology.get(2, 4).is_interior());
        assert!(topology.get(1, 1).is_interior());
        assert!(topology.get(3, 3).is_interior());
    }

    #[test]
    fn test_dense_scan_order_indices() {
        let topology = GridTopology::map(5, 1).unwrap();
        // First row is all border, assigned left to right.
        assert_eq!(topology.get(0, 0), VertexRef::Border(0));
        assert_eq!(topology.get(4, 0), VertexRef::Border(4));
        // Second row: ring, three interiors, ring.
        assert_eq!(topology.get(0, 1), VertexRef::Border(5));
        assert_eq!(topology.get(1, 1), VertexRef::Interior(0));
        assert_eq!(topology.get(3, 1), VertexRef::Interior(2));
        assert_eq!(topology.get(4, 1), VertexRef::Border(6));
        // Interior indices continue row-major.
        assert_eq!(topology.get(1, 2), VertexRef::Interior(3));
    }

    #[test]
    fn test_index_assignment_is_a_bijection() {
        for (side, inc) in [(5, 1), (13, 2), (17, 4)] {
            let topology = GridTopology::map(side, inc).unwrap();
            let mut interior_seen = vec![false; topology.interior_count() as usize];
            let mut border_seen = vec![false; topology.border_count() as usize];
            for (x, y) in topology.sample_coords() {
                match topology.get(x, y) {
                    VertexRef::Interior(i) => {
                        assert!(!interior_seen[i as usize], "interior index {i} repeated");
                        interior_seen[i as usize] = true;
                    }
                    VertexRef::Border(i) => {
                        assert!(!border_seen[i as usize], "border index {i} repeated");
                        border_seen[i as usize] = true;
                    }
                }
            }
            assert!(interior_seen.into_iter().all(|seen| seen));
            assert!(border_seen.into_iter().all(|seen| seen));
        }
    }

    #[test]
    fn test_quad_count_matches_grid() {
        let topology = GridTopology::map(5, 1).unwrap();
        // 4x4 quads, two triangles each.
        assert_eq!(topology.triangles().count(), 32);

        let simplified = GridTopology::map(13, 2).unwrap();
        // 6x6 simplified quads.
        assert_eq!(simplified.triangles().count(), 72);
    }

    #[test]
    fn test_interior_and_border_triangle_split() {
        let topology = GridTopology::map(5, 1).unwrap();
        let (interior, border): (Vec<_>, Vec<_>) = topology
            .triangles()
            .partition(|tri| tri.iter().all(|v| v.is_interior()));
        // A 3x3 interior grid renders 2x2 quads; the remaining triangles all
        // touch the ring.
        assert_eq!(interior.len(), 8);
        assert_eq!(border.len(), 24);
        assert!(
            border
                .iter()
                .all(|tri| tri.iter().any(|v| !v.is_interior()))
        );
    }
}
