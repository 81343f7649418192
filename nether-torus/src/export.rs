//! Wavefront OBJ export

use std::io::Write;

use crate::error::Result;
use crate::mesh::TorusMesh;

/// Write a mesh as a Wavefront OBJ object
///
/// Emits `v`, `vt` and `vn` records in vertex order, then one
/// `f v/vt/vn` record per triangle (OBJ indices are 1-based). Line indices
/// are not exported.
pub fn write_obj<W: Write>(mesh: &TorusMesh, writer: &mut W, name: &str) -> Result<()> {
    writeln!(writer, "# nether-torus")?;
    writeln!(
        writer,
        "# {} vertices, {} triangles",
        mesh.vertex_count(),
        mesh.triangle_count()
    )?;
    writeln!(writer, "o {}", name)?;

    for [x, y, z] in mesh.positions() {
        writeln!(writer, "v {} {} {}", x, y, z)?;
    }
    for [s, t] in mesh.tex_coords() {
        writeln!(writer, "vt {} {}", s, t)?;
    }
    for [x, y, z] in mesh.normals() {
        writeln!(writer, "vn {} {} {}", x, y, z)?;
    }

    for tri in mesh.indices().chunks_exact(3) {
        let [a, b, c] = [tri[0] + 1, tri[1] + 1, tri[2] + 1];
        writeln!(writer, "f {a}/{a}/{a} {b}/{b}/{b} {c}/{c}/{c}")?;
    }

    writer.flush()?;
    Ok(())
}
