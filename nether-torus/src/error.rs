//! Error types for torus configuration, strict validation and export

use thiserror::Error;

/// Errors surfaced by the torus generator
///
/// Geometry construction itself never fails: out-of-range parameters are
/// clamped. These variants cover file I/O, config parsing and the opt-in
/// strict validator ([`crate::TorusSpec::try_new`]).
#[derive(Debug, Error)]
pub enum TorusError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse torus config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Failed to serialize torus config: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    #[error("Invalid {name}: {value} (must be > 0.0)")]
    InvalidRadius { name: &'static str, value: f32 },

    #[error("Ring count too small: {0} (min {min})", min = crate::MIN_RING_COUNT)]
    RingCountTooSmall(u32),

    #[error("Tube count too small: {0} (min {min})", min = crate::MIN_TUBE_COUNT)]
    TubeCountTooSmall(u32),

    #[error("Invalid up axis: {0} (expected 1=X, 2=Y or 3=Z)")]
    InvalidUpAxis(i32),
}

/// Result alias used throughout the crate
pub type Result<T> = std::result::Result<T, TorusError>;
