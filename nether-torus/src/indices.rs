//! Triangle and wireframe index generation
//!
//! Both layouts walk the same `tube_count x ring_count` quad grid. Smooth
//! meshes index into the shared `(tube_count + 1) x (ring_count + 1)`
//! vertex grid; flat meshes index into four private vertices per quad.
//! Line indices come from the grid directly, never from the triangles.

use crate::mesh::MeshBuilder;

/// Indices for the shared-vertex grid
///
/// ```text
/// k1--k1+1
/// |  / |
/// | /  |
/// k2--k2+1
/// ```
///
/// Two triangles and two edges (k1-k2 along the tube, k1-k1+1 along the
/// ring) per quad.
pub fn build_smooth_indices<M: MeshBuilder>(mesh: &mut M, ring_count: u32, tube_count: u32) {
    for i in 0..tube_count {
        let mut k1 = i * (ring_count + 1); // start of current tube row
        let mut k2 = k1 + ring_count + 1; // start of next tube row

        for _ in 0..ring_count {
            mesh.add_triangle(k1, k2, k1 + 1);
            mesh.add_triangle(k1 + 1, k2, k2 + 1);

            mesh.add_line(k1, k2);
            mesh.add_line(k1, k1 + 1);

            k1 += 1;
            k2 += 1;
        }
    }
}

/// Indices for four-vertices-per-quad meshes
///
/// Quad corners arrive as v1, v2, v3, v4 (see [`crate::sample_flat`]).
pub fn build_flat_indices<M: MeshBuilder>(mesh: &mut M, ring_count: u32, tube_count: u32) {
    let mut index = 0;

    for _ in 0..tube_count * ring_count {
        mesh.add_triangle(index, index + 1, index + 2);
        mesh.add_triangle(index + 2, index + 1, index + 3);

        mesh.add_line(index, index + 1);
        mesh.add_line(index, index + 2);

        index += 4;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::{Vec2, Vec3};

    #[derive(Default)]
    struct IndexSink {
        triangles: Vec<u32>,
        lines: Vec<u32>,
    }

    impl MeshBuilder for IndexSink {
        fn add_vertex(&mut self, _: Vec3, _: Vec3, _: Vec2) -> u32 {
            unreachable!("index builders never add vertices")
        }

        fn add_triangle(&mut self, i0: u32, i1: u32, i2: u32) {
            self.triangles.extend([i0, i1, i2]);
        }

        fn add_line(&mut self, i0: u32, i1: u32) {
            self.lines.extend([i0, i1]);
        }
    }

    #[test]
    fn test_smooth_counts_and_range() {
        let mut sink = IndexSink::default();
        build_smooth_indices(&mut sink, 4, 3);

        assert_eq!(sink.triangles.len(), 24 * 3);
        assert_eq!(sink.lines.len(), 48);

        let vertex_count = (4 + 1) * (3 + 1);
        assert!(sink.triangles.iter().all(|&i| i < vertex_count));
        assert!(sink.lines.iter().all(|&i| i < vertex_count));
    }

    #[test]
    fn test_smooth_first_cell() {
        let mut sink = IndexSink::default();
        build_smooth_indices(&mut sink, 4, 3);

        assert_eq!(&sink.triangles[..6], &[0, 5, 1, 1, 5, 6]);
        assert_eq!(&sink.lines[..4], &[0, 5, 0, 1]);

        // Second row starts at k1 = ring_count + 1
        let row = 4 * 6;
        assert_eq!(&sink.triangles[row..row + 3], &[5, 10, 6]);
    }

    #[test]
    fn test_flat_counts_and_pattern() {
        let mut sink = IndexSink::default();
        build_flat_indices(&mut sink, 4, 3);

        assert_eq!(sink.triangles.len(), 24 * 3);
        assert_eq!(sink.lines.len(), 48);
        assert_eq!(&sink.triangles[..6], &[0, 1, 2, 2, 1, 3]);
        assert_eq!(&sink.triangles[6..12], &[4, 5, 6, 6, 5, 7]);
        assert_eq!(&sink.lines[..8], &[0, 1, 0, 2, 4, 5, 4, 6]);
        assert!(sink.triangles.iter().all(|&i| i < 48));
    }
}
