use thiserror::Error;

/// Top-level error type for the ribbon-bubbles library.
#[derive(Debug, Error)]
pub enum RibbonError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error(transparent)]
    Color(#[from] ColorError),

    #[error(transparent)]
    Market(#[from] MarketError),
}

/// Errors related to geometric computations.
#[derive(Debug, Error)]
pub enum GeometryError {
    #[error("point at z = {z} lies on or behind the eye plane for focal length {focal_length}")]
    ProjectionSingularity { z: f64, focal_length: f64 },

    #[error("focal length must be finite and positive, got {0}")]
    InvalidFocalLength(f64),

    #[error("parameter {parameter} = {value} is out of range [{min}, {max}]")]
    ParameterOutOfRange {
        parameter: &'static str,
        value: f64,
        min: f64,
        max: f64,
    },

    #[error("parameter {0} must be finite")]
    NonFinite(&'static str),
}

/// Errors related to color parsing.
#[derive(Debug, Error)]
pub enum ColorError {
    #[error("invalid hex color: {0:?}")]
    InvalidHex(String),
}

/// Errors related to the market-data feed.
#[derive(Debug, Error)]
pub enum MarketError {
    #[error("transport failed: {0}")]
    Transport(String),

    #[error("api returned code {code}: {message}")]
    Api { code: i64, message: String },

    #[error("malformed ticker envelope: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("no usable ticker records")]
    NoUsableRecords,
}

/// Convenience type alias for results using [`RibbonError`].
pub type Result<T> = std::result::Result<T, RibbonError>;
