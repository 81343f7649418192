//! Up-axis conventions and the basis permutations between them
//!
//! The sampler always builds the torus around +Z. Other conventions are
//! reached by rotating already-generated data with one of six fixed
//! permutation-with-sign matrices, so switching axes never resamples.

use glam::{Mat3, Vec3};
use serde::{Deserialize, Serialize};

/// Which world axis the torus treats as "up" (the axis its hole faces)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum UpAxis {
    /// +X up (selector 1)
    X,
    /// +Y up (selector 2)
    Y,
    /// +Z up (selector 3, the sampler's native frame)
    #[default]
    Z,
}

impl UpAxis {
    /// Map a numeric selector (1=X, 2=Y, 3=Z) to an axis
    ///
    /// Anything outside 1..=3 falls back to the default, Z.
    pub fn from_index(index: i32) -> Self {
        Self::try_from_index(index).unwrap_or_default()
    }

    /// Map a numeric selector to an axis, or `None` if out of range
    pub fn try_from_index(index: i32) -> Option<Self> {
        match index {
            1 => Some(Self::X),
            2 => Some(Self::Y),
            3 => Some(Self::Z),
            _ => None,
        }
    }

    /// Numeric selector for this axis (1=X, 2=Y, 3=Z)
    pub fn index(self) -> i32 {
        match self {
            Self::X => 1,
            Self::Y => 2,
            Self::Z => 3,
        }
    }

    /// Unit vector along this axis
    pub fn unit(self) -> Vec3 {
        match self {
            Self::X => Vec3::X,
            Self::Y => Vec3::Y,
            Self::Z => Vec3::Z,
        }
    }

    /// Single-letter name used in summaries
    pub fn name(self) -> &'static str {
        match self {
            Self::X => "X",
            Self::Y => "Y",
            Self::Z => "Z",
        }
    }
}

/// Rotation taking data built with `from` up to `to` up
///
/// Columns are the images of the X, Y and Z basis vectors. Every matrix is
/// a proper rotation (determinant +1), so triangle winding survives the
/// remap. Returns `None` when `from == to`; callers treat that as a no-op.
pub fn remap_matrix(from: UpAxis, to: UpAxis) -> Option<Mat3> {
    use UpAxis::*;

    let (tx, ty, tz) = match (from, to) {
        (X, Y) => (Vec3::Y, Vec3::NEG_X, Vec3::Z),
        (X, Z) => (Vec3::Z, Vec3::Y, Vec3::NEG_X),
        (Y, X) => (Vec3::NEG_Y, Vec3::X, Vec3::Z),
        (Y, Z) => (Vec3::X, Vec3::Z, Vec3::NEG_Y),
        (Z, X) => (Vec3::NEG_Z, Vec3::Y, Vec3::X),
        (Z, Y) => (Vec3::X, Vec3::NEG_Z, Vec3::Y),
        (X, X) | (Y, Y) | (Z, Z) => return None,
    };

    Some(Mat3::from_cols(tx, ty, tz))
}
