//! Interleaved V/N/T vertex records
//!
//! One record per vertex: position (3 floats), normal (3 floats), texture
//! coordinate (2 floats). 8 floats, 32 bytes. Renderers bind the buffer with
//! this stride and the attribute offsets below, so the layout is fixed.

use bytemuck::{Pod, Zeroable};

/// Number of floats per interleaved record
pub const INTERLEAVED_FLOATS: usize = 8;

/// Byte stride between interleaved records
pub const INTERLEAVED_STRIDE: usize = std::mem::size_of::<InterleavedVertex>();

/// Byte offset of the position attribute within a record
pub const POSITION_OFFSET: usize = 0;
/// Byte offset of the normal attribute within a record
pub const NORMAL_OFFSET: usize = 12;
/// Byte offset of the texture coordinate attribute within a record
pub const TEX_COORD_OFFSET: usize = 24;

/// A single interleaved vertex record (`#[repr(C)]`, 32 bytes)
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, Pod, Zeroable)]
pub struct InterleavedVertex {
    pub position: [f32; 3],
    pub normal: [f32; 3],
    pub tex_coord: [f32; 2],
}

const _: () = assert!(INTERLEAVED_STRIDE == INTERLEAVED_FLOATS * 4);

impl InterleavedVertex {
    pub fn new(position: [f32; 3], normal: [f32; 3], tex_coord: [f32; 2]) -> Self {
        Self {
            position,
            normal,
            tex_coord,
        }
    }
}

/// Pack parallel attribute arrays into interleaved records
///
/// All three slices must have the same length; the record order matches
/// the input order.
pub fn interleave(
    positions: &[[f32; 3]],
    normals: &[[f32; 3]],
    tex_coords: &[[f32; 2]],
) -> Vec<InterleavedVertex> {
    debug_assert_eq!(positions.len(), normals.len());
    debug_assert_eq!(positions.len(), tex_coords.len());

    positions
        .iter()
        .zip(normals)
        .zip(tex_coords)
        .map(|((&p, &n), &t)| InterleavedVertex::new(p, n, t))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::mem::offset_of;

    #[test]
    fn test_layout() {
        assert_eq!(INTERLEAVED_STRIDE, 32);
        assert_eq!(offset_of!(InterleavedVertex, position), POSITION_OFFSET);
        assert_eq!(offset_of!(InterleavedVertex, normal), NORMAL_OFFSET);
        assert_eq!(offset_of!(InterleavedVertex, tex_coord), TEX_COORD_OFFSET);
    }

    #[test]
    fn test_interleave_field_order() {
        let positions = [[1.0, 2.0, 3.0], [4.0, 5.0, 6.0]];
        let normals = [[0.0, 0.0, 1.0], [0.0, 1.0, 0.0]];
        let tex_coords = [[0.25, 0.5], [0.75, 1.0]];

        let records = interleave(&positions, &normals, &tex_coords);
        let floats: &[f32] = bytemuck::cast_slice(&records);

        assert_eq!(
            floats,
            &[
                1.0, 2.0, 3.0, 0.0, 0.0, 1.0, 0.25, 0.5, //
                4.0, 5.0, 6.0, 0.0, 1.0, 0.0, 0.75, 1.0,
            ]
        );
    }

    #[test]
    fn test_interleave_empty() {
        assert!(interleave(&[], &[], &[]).is_empty());
    }
}
