//! Torus mesh storage and in-place transforms
//!
//! [`TorusMesh`] keeps positions, normals and texture coordinates as
//! parallel arrays alongside the triangle list, the wireframe line list and
//! an interleaved copy of the vertex attributes. Consumers only get shared
//! slices; every mutation goes through methods that keep the interleaved
//! copy in step with the source arrays.

use bytemuck::cast_slice;
use glam::{Mat3, Vec2, Vec3};
use tracing::debug;

use crate::axis::{UpAxis, remap_matrix};
use crate::interleave::{INTERLEAVED_STRIDE, InterleavedVertex, interleave};

/// Sink for generated geometry
///
/// The sampler and index builder only talk to this trait, which keeps them
/// independent of how the arrays are stored.
pub trait MeshBuilder {
    /// Add a vertex with position, normal and texture coordinate, returning its index
    fn add_vertex(&mut self, position: Vec3, normal: Vec3, tex_coord: Vec2) -> u32;

    /// Add a triangle using three vertex indices
    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32);

    /// Add a wireframe edge between two vertices
    fn add_line(&mut self, i0: u32, i1: u32);
}

/// Generated torus geometry
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TorusMesh {
    positions: Vec<[f32; 3]>,
    normals: Vec<[f32; 3]>,
    tex_coords: Vec<[f32; 2]>,
    indices: Vec<u32>,
    line_indices: Vec<u32>,
    interleaved: Vec<InterleavedVertex>,
}

impl MeshBuilder for TorusMesh {
    fn add_vertex(&mut self, position: Vec3, normal: Vec3, tex_coord: Vec2) -> u32 {
        debug_assert!(
            self.positions.len() < u32::MAX as usize,
            "torus mesh exceeds u32 vertex indices"
        );
        let index = self.positions.len() as u32;
        self.positions.push(position.to_array());
        self.normals.push(normal.to_array());
        self.tex_coords.push(tex_coord.to_array());
        index
    }

    fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
        self.indices.extend_from_slice(&[i0, i1, i2]);
    }

    fn add_line(&mut self, i0: u32, i1: u32) {
        self.line_indices.extend_from_slice(&[i0, i1]);
    }
}

impl TorusMesh {
    /// Create an empty mesh
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty mesh with room for the given vertex and triangle counts
    pub fn with_capacity(vertex_capacity: usize, triangle_capacity: usize) -> Self {
        Self {
            positions: Vec::with_capacity(vertex_capacity),
            normals: Vec::with_capacity(vertex_capacity),
            tex_coords: Vec::with_capacity(vertex_capacity),
            indices: Vec::with_capacity(triangle_capacity * 3),
            // Two line indices per triangle
            line_indices: Vec::with_capacity(triangle_capacity * 2),
            interleaved: Vec::with_capacity(vertex_capacity),
        }
    }

    // ------------------------------------------------------------------------
    // Counts and sizes
    // ------------------------------------------------------------------------

    /// Number of vertices
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Number of normals (always equal to the vertex count)
    pub fn normal_count(&self) -> usize {
        self.normals.len()
    }

    /// Number of texture coordinates (always equal to the vertex count)
    pub fn tex_coord_count(&self) -> usize {
        self.tex_coords.len()
    }

    /// Number of triangle indices
    pub fn index_count(&self) -> usize {
        self.indices.len()
    }

    /// Number of wireframe line indices
    pub fn line_index_count(&self) -> usize {
        self.line_indices.len()
    }

    /// Number of triangles
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Number of interleaved records (one per vertex)
    pub fn interleaved_vertex_count(&self) -> usize {
        self.interleaved.len()
    }

    /// Size of the position array in bytes
    pub fn vertex_size(&self) -> usize {
        std::mem::size_of_val(self.positions.as_slice())
    }

    /// Size of the normal array in bytes
    pub fn normal_size(&self) -> usize {
        std::mem::size_of_val(self.normals.as_slice())
    }

    /// Size of the texture coordinate array in bytes
    pub fn tex_coord_size(&self) -> usize {
        std::mem::size_of_val(self.tex_coords.as_slice())
    }

    /// Size of the triangle index array in bytes
    pub fn index_size(&self) -> usize {
        std::mem::size_of_val(self.indices.as_slice())
    }

    /// Size of the line index array in bytes
    pub fn line_index_size(&self) -> usize {
        std::mem::size_of_val(self.line_indices.as_slice())
    }

    /// Size of the interleaved buffer in bytes
    pub fn interleaved_vertex_size(&self) -> usize {
        std::mem::size_of_val(self.interleaved.as_slice())
    }

    /// Byte stride of the interleaved buffer (always 32)
    pub fn interleaved_stride(&self) -> usize {
        INTERLEAVED_STRIDE
    }

    // ------------------------------------------------------------------------
    // Read-only views
    // ------------------------------------------------------------------------

    /// Vertex positions, one `[x, y, z]` per vertex
    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    /// Vertex normals, parallel to [`TorusMesh::positions`]
    pub fn normals(&self) -> &[[f32; 3]] {
        &self.normals
    }

    /// Texture coordinates in `[0, 1]`, parallel to [`TorusMesh::positions`]
    pub fn tex_coords(&self) -> &[[f32; 2]] {
        &self.tex_coords
    }

    /// Triangle list indices, three per triangle, counter-clockwise front faces
    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    /// Line list indices, two per edge
    pub fn line_indices(&self) -> &[u32] {
        &self.line_indices
    }

    /// Interleaved position/normal/texcoord records
    pub fn interleaved(&self) -> &[InterleavedVertex] {
        &self.interleaved
    }

    /// Positions as a flat `[x0, y0, z0, x1, ...]` slice
    pub fn positions_flat(&self) -> &[f32] {
        cast_slice(&self.positions)
    }

    /// Normals as a flat `[x0, y0, z0, x1, ...]` slice
    pub fn normals_flat(&self) -> &[f32] {
        cast_slice(&self.normals)
    }

    /// Texture coordinates as a flat `[s0, t0, s1, ...]` slice
    pub fn tex_coords_flat(&self) -> &[f32] {
        cast_slice(&self.tex_coords)
    }

    /// Interleaved buffer as floats, 8 per vertex
    pub fn interleaved_floats(&self) -> &[f32] {
        cast_slice(&self.interleaved)
    }

    /// Interleaved buffer as raw bytes for GPU upload
    pub fn interleaved_bytes(&self) -> &[u8] {
        cast_slice(&self.interleaved)
    }

    /// Triangle indices as raw bytes for GPU upload
    pub fn index_bytes(&self) -> &[u8] {
        cast_slice(&self.indices)
    }

    /// Line indices as raw bytes for GPU upload
    pub fn line_index_bytes(&self) -> &[u8] {
        cast_slice(&self.line_indices)
    }

    /// Returns the three vertex indices of triangle `t`
    #[inline]
    pub fn triangle(&self, t: usize) -> [u32; 3] {
        let base = t * 3;
        [
            self.indices[base],
            self.indices[base + 1],
            self.indices[base + 2],
        ]
    }

    /// Position of vertex `i`
    #[inline]
    pub fn position(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.positions[i])
    }

    /// Normal of vertex `i`
    #[inline]
    pub fn normal(&self, i: usize) -> Vec3 {
        Vec3::from_array(self.normals[i])
    }

    // ------------------------------------------------------------------------
    // Mutation
    // ------------------------------------------------------------------------

    /// Regenerate the interleaved buffer from the source arrays
    pub fn rebuild_interleaved(&mut self) {
        self.interleaved = interleave(&self.positions, &self.normals, &self.tex_coords);
    }

    /// Rebuild the interleaved buffer if vertices were added since the last build
    fn ensure_interleaved(&mut self) {
        if self.interleaved.len() != self.positions.len() {
            self.rebuild_interleaved();
        }
    }

    /// Rotate data built with `from` up so that `to` is up
    ///
    /// Same-axis requests do nothing. Positions, normals and their
    /// interleaved copies are updated in the same pass.
    pub fn change_up_axis(&mut self, from: UpAxis, to: UpAxis) {
        if let Some(matrix) = remap_matrix(from, to) {
            debug!(
                "Remapping torus up axis {} -> {} ({} vertices)",
                from.name(),
                to.name(),
                self.positions.len()
            );
            self.transform(matrix);
        }
    }

    /// Apply a linear transform to every position and normal
    ///
    /// Normals are transformed with the same matrix, which is only correct
    /// for rotations; callers pass the axis permutations from [`remap_matrix`].
    fn transform(&mut self, matrix: Mat3) {
        self.ensure_interleaved();

        for ((position, normal), record) in self
            .positions
            .iter_mut()
            .zip(self.normals.iter_mut())
            .zip(self.interleaved.iter_mut())
        {
            *position = (matrix * Vec3::from_array(*position)).to_array();
            *normal = (matrix * Vec3::from_array(*normal)).to_array();

            record.position = *position;
            record.normal = *normal;
        }
    }

    /// Flip every normal and reverse the winding of every triangle
    ///
    /// Line indices are left alone. Applying this twice restores the
    /// original data exactly.
    pub fn reverse_normals(&mut self) {
        self.ensure_interleaved();

        for (normal, record) in self.normals.iter_mut().zip(self.interleaved.iter_mut()) {
            *normal = normal.map(|c| -c);
            record.normal = *normal;
        }

        for triangle in self.indices.chunks_exact_mut(3) {
            triangle.swap(0, 2);
        }

        debug!(
            "Reversed {} normals and {} triangle windings",
            self.normals.len(),
            self.indices.len() / 3
        );
    }

    /// Check the structural invariants of the mesh
    ///
    /// Returns a description of the first violation found.
    pub fn check_invariants(&self) -> Result<(), String> {
        let n = self.positions.len();

        if self.normals.len() != n {
            return Err(format!(
                "Normal count ({}) != vertex count ({})",
                self.normals.len(),
                n
            ));
        }
        if self.tex_coords.len() != n {
            return Err(format!(
                "TexCoord count ({}) != vertex count ({})",
                self.tex_coords.len(),
                n
            ));
        }
        if self.interleaved.len() != n {
            return Err(format!(
                "Interleaved record count ({}) != vertex count ({})",
                self.interleaved.len(),
                n
            ));
        }
        if self.indices.len() % 3 != 0 {
            return Err("Index count is not divisible by 3".into());
        }
        if self.line_indices.len() % 2 != 0 {
            return Err("Line index count is not divisible by 2".into());
        }

        let out_of_range = |list: &[u32]| list.iter().position(|&i| i as usize >= n);
        if let Some(at) = out_of_range(&self.indices) {
            return Err(format!(
                "Index {} at position {} is out of range (vertex count: {})",
                self.indices[at], at, n
            ));
        }
        if let Some(at) = out_of_range(&self.line_indices) {
            return Err(format!(
                "Line index {} at position {} is out of range (vertex count: {})",
                self.line_indices[at], at, n
            ));
        }

        for (i, record) in self.interleaved.iter().enumerate() {
            if record.position != self.positions[i]
                || record.normal != self.normals[i]
                || record.tex_coord != self.tex_coords[i]
            {
                return Err(format!("Interleaved record {} is stale", i));
            }
        }

        Ok(())
    }
}
