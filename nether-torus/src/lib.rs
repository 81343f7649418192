//! Nether-Torus: parametric torus mesh generator
//!
//! Builds the vertex, normal, texture coordinate and index buffers of a
//! torus for any real-time renderer.
//!
//! # Key Features
//!
//! - **Two shading topologies**: smooth (shared grid vertices with exact
//!   analytic normals) and flat (four private vertices per quad with a
//!   single face normal)
//! - **Wireframe indices**: a separate line list built from the sampling grid
//! - **Interleaved buffer**: position/normal/texcoord records with a fixed
//!   32-byte stride for single-buffer upload
//! - **Up-axis remap**: X, Y or Z up without resampling
//! - **Normal flip**: negates normals and reverses triangle winding
//!
//! Out-of-range parameters never fail: ring and tube counts are clamped to
//! their minimums and non-positive radii keep their previous value. Use
//! [`TorusSpec::try_new`] for fail-fast validation instead.
//!
//! # Usage
//!
//! ```
//! use nether_torus::{ShadingMode, Torus, UpAxis};
//!
//! let mut torus = Torus::new(1.0, 0.5, 36, 18, ShadingMode::Smooth, UpAxis::Z);
//! torus.set_up_axis(UpAxis::Y);
//!
//! let mesh = torus.mesh();
//! assert_eq!(mesh.interleaved_stride(), 32);
//! assert_eq!(mesh.vertex_count(), 37 * 19);
//! let _upload: &[u8] = mesh.interleaved_bytes();
//! ```

mod axis;
mod config;
mod error;
mod export;
mod indices;
mod interleave;
mod mesh;
mod params;
mod sampler;
mod torus;

pub use axis::{UpAxis, remap_matrix};
pub use config::TorusConfig;
pub use error::{Result, TorusError};
pub use export::write_obj;
pub use indices::{build_flat_indices, build_smooth_indices};
pub use interleave::{
    INTERLEAVED_FLOATS, INTERLEAVED_STRIDE, InterleavedVertex, NORMAL_OFFSET, POSITION_OFFSET,
    TEX_COORD_OFFSET, interleave,
};
pub use mesh::{MeshBuilder, TorusMesh};
pub use params::{ShadingMode, TorusSpec};
pub use sampler::{FACE_NORMAL_EPSILON, face_normal, sample_flat, sample_smooth};
pub use torus::{Torus, generate_torus};

// =============================================================================
// Constants
// =============================================================================

/// Minimum number of segments around the central axis
pub const MIN_RING_COUNT: u32 = 3;

/// Minimum number of segments around the tube (2 gives a flat washer)
pub const MIN_TUBE_COUNT: u32 = 2;

/// Default distance from the torus center to the tube center
pub const DEFAULT_MAJOR_RADIUS: f32 = 1.0;

/// Default tube radius
pub const DEFAULT_MINOR_RADIUS: f32 = 0.5;

/// Default segments around the central axis
pub const DEFAULT_RING_COUNT: u32 = 36;

/// Default segments around the tube
pub const DEFAULT_TUBE_COUNT: u32 = 18;
