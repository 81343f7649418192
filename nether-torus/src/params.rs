//! Torus parameters and their normalization
//!
//! Requested parameters are never rejected on the default path: resolutions
//! are clamped to their minimums, unknown axis selectors fall back to Z and
//! non-positive radii keep their previous value. [`TorusSpec::try_new`] is
//! the fail-fast alternative for callers that would rather see an error.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::axis::UpAxis;
use crate::error::{Result, TorusError};
use crate::{DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_RADIUS, DEFAULT_RING_COUNT, DEFAULT_TUBE_COUNT};
use crate::{MIN_RING_COUNT, MIN_TUBE_COUNT};

/// Vertex topology used when sampling the surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ShadingMode {
    /// Grid vertices shared between faces, analytic per-vertex normals
    #[default]
    Smooth,
    /// Four private vertices per quad carrying one face normal
    Flat,
}

impl ShadingMode {
    /// Build from the classic `smooth: bool` flag
    pub fn from_smooth(smooth: bool) -> Self {
        if smooth { Self::Smooth } else { Self::Flat }
    }

    /// Whether this is smooth shading
    pub fn is_smooth(self) -> bool {
        self == Self::Smooth
    }
}

/// Validated torus parameters
///
/// `ring_count >= 3` and `tube_count >= 2` hold for every value produced by
/// this module, whatever the caller asked for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TorusSpec {
    /// Distance from the torus center to the center of the tube (R)
    pub major_radius: f32,
    /// Radius of the tube (r)
    pub minor_radius: f32,
    /// Segments around the central axis (sectors)
    pub ring_count: u32,
    /// Segments around the tube cross-section (sides)
    pub tube_count: u32,
    /// Smooth or flat shading
    pub shading: ShadingMode,
    /// Facing direction of the torus hole
    pub up_axis: UpAxis,
}

impl Default for TorusSpec {
    fn default() -> Self {
        Self {
            major_radius: DEFAULT_MAJOR_RADIUS,
            minor_radius: DEFAULT_MINOR_RADIUS,
            ring_count: DEFAULT_RING_COUNT,
            tube_count: DEFAULT_TUBE_COUNT,
            shading: ShadingMode::Smooth,
            up_axis: UpAxis::Z,
        }
    }
}

impl TorusSpec {
    /// Normalize requested parameters against the defaults
    ///
    /// Equivalent to `TorusSpec::default().with_requested(...)`.
    pub fn new(
        major_radius: f32,
        minor_radius: f32,
        ring_count: u32,
        tube_count: u32,
        shading: ShadingMode,
        up_axis: UpAxis,
    ) -> Self {
        Self::default().with_requested(
            major_radius,
            minor_radius,
            ring_count,
            tube_count,
            shading,
            up_axis,
        )
    }

    /// Normalize requested parameters against this spec's current values
    ///
    /// Non-positive radii keep the value already stored in `self`; counts
    /// below their minimum are raised to it.
    pub fn with_requested(
        self,
        major_radius: f32,
        minor_radius: f32,
        ring_count: u32,
        tube_count: u32,
        shading: ShadingMode,
        up_axis: UpAxis,
    ) -> Self {
        let major_radius = if major_radius > 0.0 {
            major_radius
        } else {
            warn!(
                "major_radius must be > 0.0 (got {}), keeping {}",
                major_radius, self.major_radius
            );
            self.major_radius
        };

        let minor_radius = if minor_radius > 0.0 {
            minor_radius
        } else {
            warn!(
                "minor_radius must be > 0.0 (got {}), keeping {}",
                minor_radius, self.minor_radius
            );
            self.minor_radius
        };

        Self {
            major_radius,
            minor_radius,
            ring_count: clamp_count("ring_count", ring_count, MIN_RING_COUNT),
            tube_count: clamp_count("tube_count", tube_count, MIN_TUBE_COUNT),
            shading,
            up_axis,
        }
    }

    /// Re-run this spec's own values through the normalizer
    ///
    /// Fields are public, so a literal or struct-update spec can hold
    /// anything. Non-positive radii fall back to the defaults.
    pub fn normalized(self) -> Self {
        Self::default().with_requested(
            self.major_radius,
            self.minor_radius,
            self.ring_count,
            self.tube_count,
            self.shading,
            self.up_axis,
        )
    }

    /// Same as [`TorusSpec::with_requested`] but with signed counts and a
    /// numeric axis selector, as older integer-based callers supply them
    ///
    /// Negative counts clamp to the minimum, unknown selectors become Z.
    pub fn with_requested_raw(
        self,
        major_radius: f32,
        minor_radius: f32,
        ring_count: i32,
        tube_count: i32,
        smooth: bool,
        up_axis: i32,
    ) -> Self {
        let axis = UpAxis::try_from_index(up_axis).unwrap_or_else(|| {
            warn!("up_axis must be 1, 2 or 3 (got {}), using Z", up_axis);
            UpAxis::Z
        });

        self.with_requested(
            major_radius,
            minor_radius,
            ring_count.max(0) as u32,
            tube_count.max(0) as u32,
            ShadingMode::from_smooth(smooth),
            axis,
        )
    }

    /// Fail-fast construction: reject anything the default path would clamp
    pub fn try_new(
        major_radius: f32,
        minor_radius: f32,
        ring_count: u32,
        tube_count: u32,
        shading: ShadingMode,
        up_axis: i32,
    ) -> Result<Self> {
        if major_radius.is_nan() || major_radius <= 0.0 {
            return Err(TorusError::InvalidRadius {
                name: "major_radius",
                value: major_radius,
            });
        }
        if minor_radius.is_nan() || minor_radius <= 0.0 {
            return Err(TorusError::InvalidRadius {
                name: "minor_radius",
                value: minor_radius,
            });
        }
        if ring_count < MIN_RING_COUNT {
            return Err(TorusError::RingCountTooSmall(ring_count));
        }
        if tube_count < MIN_TUBE_COUNT {
            return Err(TorusError::TubeCountTooSmall(tube_count));
        }
        let up_axis = UpAxis::try_from_index(up_axis).ok_or(TorusError::InvalidUpAxis(up_axis))?;

        Ok(Self {
            major_radius,
            minor_radius,
            ring_count,
            tube_count,
            shading,
            up_axis,
        })
    }

    /// Vertex count a mesh built from this spec will have
    pub fn vertex_count(&self) -> usize {
        let rings = self.ring_count as usize;
        let tubes = self.tube_count as usize;
        match self.shading {
            ShadingMode::Smooth => (rings + 1) * (tubes + 1),
            ShadingMode::Flat => 4 * rings * tubes,
        }
    }

    /// Triangle count a mesh built from this spec will have (both modes)
    pub fn triangle_count(&self) -> usize {
        2 * self.ring_count as usize * self.tube_count as usize
    }

    /// Whether `other` differs in anything that requires resampling
    ///
    /// Only the up axis can change without a rebuild.
    pub(crate) fn needs_rebuild(&self, other: &Self) -> bool {
        self.major_radius != other.major_radius
            || self.minor_radius != other.minor_radius
            || self.ring_count != other.ring_count
            || self.tube_count != other.tube_count
            || self.shading != other.shading
    }
}

fn clamp_count(name: &str, requested: u32, min: u32) -> u32 {
    if requested < min {
        warn!("{} must be >= {} (got {}), clamping", name, min, requested);
        min
    } else {
        requested
    }
}
