//! Mathematical utilities and data structures

pub mod aabb;
pub mod polygon;

pub use aabb::Aabb;
