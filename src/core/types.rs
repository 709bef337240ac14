//! Core type aliases and re-exports
//!
//! Coordinate convention throughout the crate: +X east, +Y north, +Z up.
//! All coordinates are in source-engine units, pre world-scale (the
//! exporter applies the global scale after synthesis).

pub use glam::{Vec2, Vec3};

/// Standard Result type for the crate
pub type Result<T> = std::result::Result<T, crate::core::error::Error>;
