//! Torus generator
//!
//! [`Torus`] owns a [`TorusSpec`] and the [`TorusMesh`] built from it.
//! Changing radii, resolution or shading resamples the surface into a fresh
//! mesh that replaces the old one; changing the up axis rotates the
//! existing data in place.

use std::fmt;
use std::path::Path;

use tracing::debug;

use crate::axis::UpAxis;
use crate::config::TorusConfig;
use crate::error::Result;
use crate::export::write_obj;
use crate::indices::{build_flat_indices, build_smooth_indices};
use crate::mesh::TorusMesh;
use crate::params::{ShadingMode, TorusSpec};
use crate::sampler::{sample_flat, sample_smooth};

/// Build a complete mesh for `spec`
///
/// Samples around +Z, builds indices and the interleaved buffer, then
/// rotates into `spec.up_axis`. The result is independent of any existing
/// generator, so callers can build off to the side and swap it in.
/// Out-of-range fields are normalized first.
pub fn generate_torus(spec: &TorusSpec) -> TorusMesh {
    let spec = &spec.normalized();
    let mut mesh = TorusMesh::with_capacity(spec.vertex_count(), spec.triangle_count());

    match spec.shading {
        ShadingMode::Smooth => {
            sample_smooth(&mut mesh, spec);
            build_smooth_indices(&mut mesh, spec.ring_count, spec.tube_count);
        }
        ShadingMode::Flat => {
            sample_flat(&mut mesh, spec);
            build_flat_indices(&mut mesh, spec.ring_count, spec.tube_count);
        }
    }

    mesh.rebuild_interleaved();
    mesh.change_up_axis(UpAxis::Z, spec.up_axis);

    debug!(
        "Built {:?} torus: {} vertices, {} triangles (R={}, r={}, rings={}, tubes={}, up={})",
        spec.shading,
        mesh.vertex_count(),
        mesh.triangle_count(),
        spec.major_radius,
        spec.minor_radius,
        spec.ring_count,
        spec.tube_count,
        spec.up_axis.name()
    );

    mesh
}

/// Torus mesh generator
#[derive(Debug, Clone)]
pub struct Torus {
    spec: TorusSpec,
    mesh: TorusMesh,
}

impl Default for Torus {
    fn default() -> Self {
        Self::from_spec(TorusSpec::default())
    }
}

impl Torus {
    /// Create a torus, clamping out-of-range parameters
    pub fn new(
        major_radius: f32,
        minor_radius: f32,
        ring_count: u32,
        tube_count: u32,
        shading: ShadingMode,
        up_axis: UpAxis,
    ) -> Self {
        Self::from_spec(TorusSpec::new(
            major_radius,
            minor_radius,
            ring_count,
            tube_count,
            shading,
            up_axis,
        ))
    }

    /// Create a torus from a spec, normalizing it like [`Torus::new`]
    pub fn from_spec(spec: TorusSpec) -> Self {
        let spec = spec.normalized();
        let torus = Self {
            mesh: generate_torus(&spec),
            spec,
        };
        torus.debug_check();
        torus
    }

    /// Create a torus from configuration values (normalized like [`Torus::new`])
    pub fn from_config(config: &TorusConfig) -> Self {
        Self::from_spec(config.to_spec())
    }

    /// Reconfigure every parameter and rebuild
    ///
    /// Non-positive radii keep their current value; counts are clamped.
    pub fn set(
        &mut self,
        major_radius: f32,
        minor_radius: f32,
        ring_count: u32,
        tube_count: u32,
        shading: ShadingMode,
        up_axis: UpAxis,
    ) {
        let spec = self.spec.with_requested(
            major_radius,
            minor_radius,
            ring_count,
            tube_count,
            shading,
            up_axis,
        );
        self.rebuild(spec);
    }

    /// Reconfigure from integer-style inputs (`up_axis` 1=X, 2=Y, 3=Z)
    pub fn set_raw(
        &mut self,
        major_radius: f32,
        minor_radius: f32,
        ring_count: i32,
        tube_count: i32,
        smooth: bool,
        up_axis: i32,
    ) {
        let spec = self.spec.with_requested_raw(
            major_radius,
            minor_radius,
            ring_count,
            tube_count,
            smooth,
            up_axis,
        );
        self.rebuild(spec);
    }

    fn rebuild(&mut self, spec: TorusSpec) {
        self.mesh = generate_torus(&spec);
        self.spec = spec;
        self.debug_check();
    }

    fn reconfigure(&mut self, spec: TorusSpec) {
        if spec.needs_rebuild(&self.spec) {
            self.rebuild(spec);
        }
    }

    /// Set R, resampling if it changes; non-positive values are ignored
    pub fn set_major_radius(&mut self, major_radius: f32) {
        let s = self.spec;
        self.reconfigure(s.with_requested(
            major_radius,
            s.minor_radius,
            s.ring_count,
            s.tube_count,
            s.shading,
            s.up_axis,
        ));
    }

    /// Set r, resampling if it changes; non-positive values are ignored
    pub fn set_minor_radius(&mut self, minor_radius: f32) {
        let s = self.spec;
        self.reconfigure(s.with_requested(
            s.major_radius,
            minor_radius,
            s.ring_count,
            s.tube_count,
            s.shading,
            s.up_axis,
        ));
    }

    /// Set the ring segment count (min 3), resampling if it changes
    pub fn set_ring_count(&mut self, ring_count: u32) {
        let s = self.spec;
        self.reconfigure(s.with_requested(
            s.major_radius,
            s.minor_radius,
            ring_count,
            s.tube_count,
            s.shading,
            s.up_axis,
        ));
    }

    /// Set the tube segment count (min 2), resampling if it changes
    pub fn set_tube_count(&mut self, tube_count: u32) {
        let s = self.spec;
        self.reconfigure(s.with_requested(
            s.major_radius,
            s.minor_radius,
            s.ring_count,
            tube_count,
            s.shading,
            s.up_axis,
        ));
    }

    /// Switch shading mode, resampling only if it actually changes
    pub fn set_shading(&mut self, shading: ShadingMode) {
        if self.spec.shading != shading {
            self.rebuild(TorusSpec {
                shading,
                ..self.spec
            });
        }
    }

    /// Convenience for `set_shading(ShadingMode::from_smooth(smooth))`
    pub fn set_smooth(&mut self, smooth: bool) {
        self.set_shading(ShadingMode::from_smooth(smooth));
    }

    /// Re-orient the existing mesh without resampling
    pub fn set_up_axis(&mut self, up_axis: UpAxis) {
        if self.spec.up_axis == up_axis {
            return;
        }

        self.mesh.change_up_axis(self.spec.up_axis, up_axis);
        self.spec.up_axis = up_axis;
        self.debug_check();
    }

    /// Numeric variant of [`Torus::set_up_axis`]; out-of-range selectors are ignored
    pub fn set_up_axis_index(&mut self, up_axis: i32) {
        if let Some(axis) = UpAxis::try_from_index(up_axis) {
            self.set_up_axis(axis);
        }
    }

    /// Flip all normals and the winding of every triangle
    pub fn reverse_normals(&mut self) {
        self.mesh.reverse_normals();
        self.debug_check();
    }

    // ------------------------------------------------------------------------
    // Accessors
    // ------------------------------------------------------------------------

    /// Current normalized parameters
    pub fn spec(&self) -> &TorusSpec {
        &self.spec
    }

    /// Read-only view of the generated buffers
    pub fn mesh(&self) -> &TorusMesh {
        &self.mesh
    }

    /// Give up the generator and keep the mesh
    pub fn into_mesh(self) -> TorusMesh {
        self.mesh
    }

    /// Distance from the torus center to the tube center
    pub fn major_radius(&self) -> f32 {
        self.spec.major_radius
    }

    /// Tube radius
    pub fn minor_radius(&self) -> f32 {
        self.spec.minor_radius
    }

    /// Segments around the central axis
    pub fn ring_count(&self) -> u32 {
        self.spec.ring_count
    }

    /// Segments around the tube
    pub fn tube_count(&self) -> u32 {
        self.spec.tube_count
    }

    /// Current shading mode
    pub fn shading(&self) -> ShadingMode {
        self.spec.shading
    }

    /// Axis the torus hole faces
    pub fn up_axis(&self) -> UpAxis {
        self.spec.up_axis
    }

    /// Current parameters as a serializable config
    pub fn config(&self) -> TorusConfig {
        TorusConfig::from(&self.spec)
    }

    /// Write the current mesh as a Wavefront OBJ file
    pub fn save_obj(&self, path: impl AsRef<Path>) -> Result<()> {
        let file = std::fs::File::create(path.as_ref())?;
        let mut writer = std::io::BufWriter::new(file);
        write_obj(&self.mesh, &mut writer, "torus")?;
        Ok(())
    }

    fn debug_check(&self) {
        debug_assert!(
            self.mesh.check_invariants().is_ok(),
            "torus mesh invariant violated: {:?}",
            self.mesh.check_invariants()
        );
    }
}

impl fmt::Display for Torus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mesh = &self.mesh;
        writeln!(f, "===== Torus =====")?;
        writeln!(f, "  Major Radius: {}", self.spec.major_radius)?;
        writeln!(f, "  Minor Radius: {}", self.spec.minor_radius)?;
        writeln!(f, "    Ring Count: {}", self.spec.ring_count)?;
        writeln!(f, "    Tube Count: {}", self.spec.tube_count)?;
        writeln!(f, "Smooth Shading: {}", self.spec.shading.is_smooth())?;
        writeln!(f, "       Up Axis: {}", self.spec.up_axis.name())?;
        writeln!(f, "Triangle Count: {}", mesh.triangle_count())?;
        writeln!(f, "   Index Count: {}", mesh.index_count())?;
        writeln!(f, "  Vertex Count: {}", mesh.vertex_count())?;
        writeln!(f, "  Normal Count: {}", mesh.normal_count())?;
        write!(f, "TexCoord Count: {}", mesh.tex_coord_count())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small(shading: ShadingMode) -> Torus {
        Torus::new(1.0, 0.5, 4, 3, shading, UpAxis::Z)
    }

    #[test]
    fn test_default_parameters() {
        let torus = Torus::default();
        assert_eq!(torus.major_radius(), 1.0);
        assert_eq!(torus.minor_radius(), 0.5);
        assert_eq!(torus.ring_count(), 36);
        assert_eq!(torus.tube_count(), 18);
        assert_eq!(torus.shading(), ShadingMode::Smooth);
        assert_eq!(torus.up_axis(), UpAxis::Z);
        assert_eq!(torus.mesh().vertex_count(), 37 * 19);
    }

    #[test]
    fn test_smooth_scenario() {
        let torus = small(ShadingMode::Smooth);
        let mesh = torus.mesh();
        assert_eq!(mesh.vertex_count(), 20);
        assert_eq!(mesh.triangle_count(), 24);
        assert_eq!(mesh.line_index_count(), 48);
        assert_eq!(mesh.interleaved_vertex_count(), 20);
    }

    #[test]
    fn test_flat_scenario() {
        let torus = small(ShadingMode::Flat);
        assert_eq!(torus.mesh().vertex_count(), 48);
        assert_eq!(torus.mesh().triangle_count(), 24);
        assert_eq!(torus.mesh().line_index_count(), 48);
    }

    #[test]
    fn test_set_shading_rebuilds() {
        let mut torus = small(ShadingMode::Smooth);
        torus.set_shading(ShadingMode::Flat);
        assert_eq!(torus.mesh().vertex_count(), 48);

        torus.set_smooth(true);
        assert_eq!(torus.mesh().vertex_count(), 20);
    }

    #[test]
    fn test_single_field_setters_keep_other_fields() {
        let mut torus = Torus::new(2.0, 0.25, 8, 6, ShadingMode::Flat, UpAxis::Y);

        torus.set_tube_count(1);
        assert_eq!(torus.tube_count(), 2);
        assert_eq!(torus.ring_count(), 8);
        assert_eq!(torus.major_radius(), 2.0);
        assert_eq!(torus.minor_radius(), 0.25);
        assert_eq!(torus.shading(), ShadingMode::Flat);
        assert_eq!(torus.up_axis(), UpAxis::Y);
        assert_eq!(torus.mesh().vertex_count(), 4 * 8 * 2);

        torus.set_major_radius(-3.0);
        assert_eq!(torus.major_radius(), 2.0);

        torus.set_minor_radius(0.5);
        assert_eq!(torus.minor_radius(), 0.5);

        torus.set_ring_count(10);
        assert_eq!(torus.mesh().vertex_count(), 4 * 10 * 2);
    }

    #[test]
    fn test_set_reconfigures_everything() {
        let mut torus = Torus::default();
        torus.set(3.0, 1.0, 5, 4, ShadingMode::Flat, UpAxis::X);
        assert_eq!(torus.spec(), &TorusSpec::new(3.0, 1.0, 5, 4, ShadingMode::Flat, UpAxis::X));
        assert_eq!(torus.mesh().vertex_count(), 80);

        torus.set_raw(0.0, 0.0, 1, 0, true, 42);
        assert_eq!(torus.major_radius(), 3.0);
        assert_eq!(torus.minor_radius(), 1.0);
        assert_eq!(torus.ring_count(), 3);
        assert_eq!(torus.tube_count(), 2);
        assert_eq!(torus.up_axis(), UpAxis::Z);
    }

    #[test]
    fn test_set_up_axis_matches_fresh_build() {
        let mut torus = small(ShadingMode::Smooth);
        torus.set_up_axis(UpAxis::Y);
        let fresh = Torus::new(1.0, 0.5, 4, 3, ShadingMode::Smooth, UpAxis::Y);

        for (a, b) in torus.mesh().positions().iter().zip(fresh.mesh().positions()) {
            for k in 0..3 {
                assert!((a[k] - b[k]).abs() < 1e-6);
            }
        }
        assert_eq!(torus.mesh().indices(), fresh.mesh().indices());
    }

    #[test]
    fn test_set_up_axis_index_ignores_invalid() {
        let mut torus = small(ShadingMode::Smooth);
        let before = torus.mesh().clone();

        torus.set_up_axis_index(0);
        torus.set_up_axis_index(7);
        assert_eq!(torus.up_axis(), UpAxis::Z);
        assert_eq!(torus.mesh(), &before);

        torus.set_up_axis_index(1);
        assert_eq!(torus.up_axis(), UpAxis::X);
    }

    #[test]
    fn test_from_spec_normalizes_literal_spec() {
        let torus = Torus::from_spec(TorusSpec {
            major_radius: -2.0,
            minor_radius: f32::NAN,
            ring_count: 1,
            tube_count: 0,
            ..TorusSpec::default()
        });

        assert_eq!(torus.spec(), &TorusSpec::new(1.0, 0.5, 3, 2, ShadingMode::Smooth, UpAxis::Z));
        assert_eq!(torus.mesh().vertex_count(), 4 * 3);
        assert!(torus.mesh().tex_coords_flat().iter().all(|t| t.is_finite()));
        assert_eq!(torus.mesh().check_invariants(), Ok(()));
    }

    #[test]
    fn test_display_summary() {
        let text = small(ShadingMode::Smooth).to_string();
        assert!(text.starts_with("===== Torus ====="));
        assert!(text.contains("Triangle Count: 24"));
        assert!(text.contains("  Vertex Count: 20"));
        assert!(text.contains("       Up Axis: Z"));
    }
}
