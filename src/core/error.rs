//! Error types for zone liquid synthesis

use thiserror::Error;

/// Per-shape synthesis failure. Always recovered at single-shape
/// granularity: the offending shape is logged and skipped, the rest of
/// the zone still converts.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ShapeError {
    #[error("degenerate shape: {reason}")]
    DegenerateShape { reason: String },

    #[error("invalid slant: high z {high_z} is below low z {low_z}")]
    InvalidSlant { high_z: f32, low_z: f32 },
}

impl ShapeError {
    /// Shorthand for a degenerate-shape failure.
    pub fn degenerate(reason: impl Into<String>) -> Self {
        Self::DegenerateShape { reason: reason.into() }
    }
}

/// Main error type for the crate
#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("shape error: {0}")]
    Shape(#[from] ShapeError),
}
