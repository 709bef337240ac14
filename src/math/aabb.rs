//! Axis-aligned bounding box

use serde::{Deserialize, Serialize};

use crate::core::types::{Vec2, Vec3};

/// Axis-aligned bounding box defined by min and max corners.
///
/// Used for liquid volumes, geometry-discard boxes, surface bounds, and
/// zone-area trigger boxes. Constructors normalize unordered corners so
/// callers may pass any two opposite corners.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Aabb {
    pub min: Vec3,
    pub max: Vec3,
}

impl Aabb {
    /// Create AABB from two opposite corners, in any order
    pub fn from_corners(a: Vec3, b: Vec3) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Create AABB from an XY footprint plus a top and bottom Z, in any order
    pub fn from_footprint(corner_a: Vec2, corner_b: Vec2, z_a: f32, z_b: f32) -> Self {
        Self::from_corners(
            Vec3::new(corner_a.x, corner_a.y, z_a),
            Vec3::new(corner_b.x, corner_b.y, z_b),
        )
    }

    /// Get center point
    pub fn center(&self) -> Vec3 {
        (self.min + self.max) * 0.5
    }

    /// Get size (max - min)
    pub fn size(&self) -> Vec3 {
        self.max - self.min
    }

    /// Check if point is inside AABB
    pub fn contains_point(&self, p: Vec3) -> bool {
        p.x >= self.min.x && p.x <= self.max.x &&
        p.y >= self.min.y && p.y <= self.max.y &&
        p.z >= self.min.z && p.z <= self.max.z
    }

    /// Check if two AABBs intersect
    pub fn intersects(&self, other: &Aabb) -> bool {
        self.min.x <= other.max.x && self.max.x >= other.min.x &&
        self.min.y <= other.max.y && self.max.y >= other.min.y &&
        self.min.z <= other.max.z && self.max.z >= other.min.z
    }

    /// Expand AABB to include point
    pub fn expand(&mut self, point: Vec3) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    /// Return merged AABB containing both
    pub fn merged(&self, other: &Aabb) -> Aabb {
        Aabb {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Return this box with every coordinate multiplied by `factor`.
    ///
    /// Exporter-boundary helper: synthesis itself never scales.
    pub fn scaled(&self, factor: f32) -> Aabb {
        Aabb::from_corners(self.min * factor, self.max * factor)
    }
}
