//! Wavefront OBJ export for generated terrain meshes.
//!
//! Emits a minimal OBJ with `v`/`vt`/`vn`/`f` records. Every vertex carries
//! position, UV, and normal, so faces use the `i/i/i` reference form with
//! 1-based indices.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use crate::mesh_data::TerrainMesh;

/// Errors that can occur while exporting a mesh.
#[derive(Debug, thiserror::Error)]
pub enum ObjExportError {
    /// The underlying writer failed.
    #[error("failed to write OBJ: {0}")]
    Io(#[from] std::io::Error),
}

/// Write the mesh as OBJ records to `writer`.
pub fn write_obj<W: Write>(mesh: &TerrainMesh, writer: &mut W) -> Result<(), ObjExportError> {
    for p in &mesh.positions {
        writeln!(writer, "v {} {} {}", p.x, p.y, p.z)?;
    }
    for uv in &mesh.uvs {
        writeln!(writer, "vt {} {}", uv.x, uv.y)?;
    }
    for n in &mesh.normals {
        writeln!(writer, "vn {} {} {}", n.x, n.y, n.z)?;
    }
    for tri in mesh.indices.chunks_exact(3) {
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }
    Ok(())
}

/// Write the mesh to a file at `path`, buffered.
pub fn export_obj_to_path<P: AsRef<Path>>(
    mesh: &TerrainMesh,
    path: P,
) -> Result<(), ObjExportError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_obj(mesh, &mut writer)?;
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    fn single_triangle_mesh() -> TerrainMesh {
        TerrainMesh {
            positions: vec![
                Vec3::new(0.0, 0.0, 0.0),
                Vec3::new(1.0, 0.0, 0.0),
                Vec3::new(0.0, 0.0, -1.0),
            ],
            uvs: vec![Vec2::ZERO, Vec2::X, Vec2::Y],
            indices: vec![0, 1, 2],
            normals: vec![Vec3::Y, Vec3::Y, Vec3::Y],
        }
    }

    #[test]
    fn test_record_counts_match_mesh() {
        let mesh = single_triangle_mesh();
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().filter(|l| l.starts_with("v ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("vt ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("vn ")).count(), 3);
        assert_eq!(text.lines().filter(|l| l.starts_with("f ")).count(), 1);
    }

    #[test]
    fn test_face_indices_are_one_based() {
        let mesh = single_triangle_mesh();
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        let face = text.lines().find(|l| l.starts_with("f ")).unwrap();
        assert_eq!(face, "f 1/1/1 2/2/2 3/3/3");
    }

    #[test]
    fn test_vertex_record_format() {
        let mesh = single_triangle_mesh();
        let mut out = Vec::new();
        write_obj(&mesh, &mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert!(text.starts_with("v 0 0 0\n"));
        assert!(text.contains("vn 0 1 0"));
    }
}
