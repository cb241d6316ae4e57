//! Error types for GeoRegion

use thiserror::Error;

#[derive(Debug, Error)]
pub enum GeoregionError {
    // Shape errors
    #[error("Invalid geometry for {shape}: {reason}")]
    InvalidGeometry { shape: String, reason: String },

    #[error("Invalid coordinate at {location}: {reason}")]
    InvalidCoordinate { location: String, reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },
}

impl GeoregionError {
    pub fn invalid_geometry(shape: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoregionError::InvalidGeometry { shape: shape.into(), reason: reason.into() }
    }

    pub fn invalid_coordinate(location: impl Into<String>, reason: impl Into<String>) -> Self {
        GeoregionError::InvalidCoordinate { location: location.into(), reason: reason.into() }
    }
}

pub type Result<T> = std::result::Result<T, GeoregionError>;
