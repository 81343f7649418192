//! Torus configuration (TOML)
//!
//! A config file only needs the keys it wants to change:
//!
//! ```toml
//! major_radius = 2.0
//! ring_count = 48
//! shading = "flat"
//! up_axis = "y"
//! ```
//!
//! Values are normalized the same way constructor arguments are, so a
//! config with `tube_count = 0` yields a torus with two tube segments.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::axis::UpAxis;
use crate::error::Result;
use crate::params::{ShadingMode, TorusSpec};
use crate::{DEFAULT_MAJOR_RADIUS, DEFAULT_MINOR_RADIUS, DEFAULT_RING_COUNT, DEFAULT_TUBE_COUNT};

/// Serializable torus parameters
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TorusConfig {
    /// Distance from the torus center to the tube center (default: 1.0)
    #[serde(default = "default_major_radius")]
    pub major_radius: f32,
    /// Tube radius (default: 0.5)
    #[serde(default = "default_minor_radius")]
    pub minor_radius: f32,
    /// Segments around the central axis (default: 36, min 3)
    #[serde(default = "default_ring_count")]
    pub ring_count: u32,
    /// Segments around the tube (default: 18, min 2)
    #[serde(default = "default_tube_count")]
    pub tube_count: u32,
    /// "smooth" or "flat" (default: smooth)
    #[serde(default)]
    pub shading: ShadingMode,
    /// "x", "y" or "z" (default: z)
    #[serde(default)]
    pub up_axis: UpAxis,
}

fn default_major_radius() -> f32 {
    DEFAULT_MAJOR_RADIUS
}
fn default_minor_radius() -> f32 {
    DEFAULT_MINOR_RADIUS
}
fn default_ring_count() -> u32 {
    DEFAULT_RING_COUNT
}
fn default_tube_count() -> u32 {
    DEFAULT_TUBE_COUNT
}

impl Default for TorusConfig {
    fn default() -> Self {
        Self {
            major_radius: default_major_radius(),
            minor_radius: default_minor_radius(),
            ring_count: default_ring_count(),
            tube_count: default_tube_count(),
            shading: ShadingMode::default(),
            up_axis: UpAxis::default(),
        }
    }
}

impl From<&TorusSpec> for TorusConfig {
    fn from(spec: &TorusSpec) -> Self {
        Self {
            major_radius: spec.major_radius,
            minor_radius: spec.minor_radius,
            ring_count: spec.ring_count,
            tube_count: spec.tube_count,
            shading: spec.shading,
            up_axis: spec.up_axis,
        }
    }
}

impl TorusConfig {
    /// Parse a config from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    /// Serialize this config as pretty TOML
    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Load a config file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or is not valid TOML.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_toml_str(&content)
    }

    /// Save this config, creating parent directories as needed
    pub fn save(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        if let Some(dir) = path.parent() {
            std::fs::create_dir_all(dir)?;
        }
        std::fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Normalized parameters for these values
    pub fn to_spec(&self) -> TorusSpec {
        TorusSpec::new(
            self.major_radius,
            self.minor_radius,
            self.ring_count,
            self.tube_count,
            self.shading,
            self.up_axis,
        )
    }
}
