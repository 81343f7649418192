//! Parametric surface sampling
//!
//! The torus is built around +Z from
//!
//! ```text
//! x = (R + r * cos(u)) * cos(v)
//! y = (R + r * cos(u)) * sin(v)
//! z = r * sin(u)
//! ```
//!
//! where `u` is the tube angle, swept from pi down to -pi so the first
//! column starts on the inner equator, and `v` is the ring angle from 0 to
//! 2pi. Both sweeps include their end point: the seam vertices share a
//! position and normal with the first column/row but carry texture
//! coordinates of 1.0.

use glam::{Vec2, Vec3};
use std::f32::consts::PI;

use crate::mesh::MeshBuilder;
use crate::params::TorusSpec;

/// Cross products shorter than this are treated as degenerate triangles
pub const FACE_NORMAL_EPSILON: f32 = 0.000001;

/// Position and texture coordinate of one grid sample (no normal yet)
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct GridVertex {
    pub position: Vec3,
    pub tex_coord: Vec2,
}

/// Sample the torus with shared grid vertices and analytic normals
///
/// Emits `(tube_count + 1) * (ring_count + 1)` vertices, tube-major.
pub fn sample_smooth<M: MeshBuilder>(mesh: &mut M, spec: &TorusSpec) {
    let rings = spec.ring_count;
    let tubes = spec.tube_count;
    let major = spec.major_radius;
    let length_inv = 1.0 / spec.minor_radius;

    let ring_step = 2.0 * PI / rings as f32;
    let tube_step = 2.0 * PI / tubes as f32;

    for i in 0..=tubes {
        let tube_angle = PI - i as f32 * tube_step;
        let xy = spec.minor_radius * tube_angle.cos();
        let z = spec.minor_radius * tube_angle.sin();
        let t = i as f32 / tubes as f32;

        for j in 0..=rings {
            let ring_angle = j as f32 * ring_step;
            let (sin_v, cos_v) = ring_angle.sin_cos();

            // Offset from the tube center; already of length r
            let offset = Vec3::new(xy * cos_v, xy * sin_v, z);
            let normal = offset * length_inv;
            let position = offset + Vec3::new(major * cos_v, major * sin_v, 0.0);

            let s = j as f32 / rings as f32;
            mesh.add_vertex(position, normal, Vec2::new(s, t));
        }
    }
}

/// Sample the torus with four private vertices per quad and face normals
///
/// For every grid quad the corners are emitted as
///
/// ```text
/// v1--v3
/// |    |
/// v2--v4
/// ```
///
/// all four carrying the normal of triangle v1-v2-v3. Emits
/// `4 * ring_count * tube_count` vertices.
pub fn sample_flat<M: MeshBuilder>(mesh: &mut M, spec: &TorusSpec) {
    let grid = sample_grid(spec);
    let stride = spec.ring_count as usize + 1;

    for i in 0..spec.tube_count as usize {
        let row = i * stride;
        let next_row = (i + 1) * stride;

        for j in 0..spec.ring_count as usize {
            let v1 = grid[row + j];
            let v2 = grid[next_row + j];
            let v3 = grid[row + j + 1];
            let v4 = grid[next_row + j + 1];

            let normal = face_normal(v1.position, v2.position, v3.position);
            for v in [v1, v2, v3, v4] {
                mesh.add_vertex(v.position, normal, v.tex_coord);
            }
        }
    }
}

/// Positions and texture coordinates of the full sampling grid
///
/// Same angular sweep and ordering as [`sample_smooth`].
pub(crate) fn sample_grid(spec: &TorusSpec) -> Vec<GridVertex> {
    let rings = spec.ring_count;
    let tubes = spec.tube_count;
    let ring_step = 2.0 * PI / rings as f32;
    let tube_step = 2.0 * PI / tubes as f32;

    let mut grid = Vec::with_capacity((rings as usize + 1) * (tubes as usize + 1));

    for i in 0..=tubes {
        let tube_angle = PI - i as f32 * tube_step;
        let xy = spec.major_radius + spec.minor_radius * tube_angle.cos();
        let z = spec.minor_radius * tube_angle.sin();
        let t = i as f32 / tubes as f32;

        for j in 0..=rings {
            let (sin_v, cos_v) = (j as f32 * ring_step).sin_cos();
            grid.push(GridVertex {
                position: Vec3::new(xy * cos_v, xy * sin_v, z),
                tex_coord: Vec2::new(j as f32 / rings as f32, t),
            });
        }
    }

    grid
}

/// Unit normal of triangle v1-v2-v3 (counter-clockwise front)
///
/// Returns the zero vector for degenerate triangles instead of dividing by
/// a near-zero length.
pub fn face_normal(v1: Vec3, v2: Vec3, v3: Vec3) -> Vec3 {
    let n = (v2 - v1).cross(v3 - v1);
    let length = n.length();

    if length > FACE_NORMAL_EPSILON {
        n / length
    } else {
        Vec3::ZERO
    }
}
