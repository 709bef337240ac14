//! XY polygon helpers for winding and degeneracy checks

use crate::core::types::Vec2;

/// Signed area of a simple XY polygon (shoelace formula).
///
/// Positive when the vertices wind counter-clockwise viewed from +Z.
pub fn signed_area(points: &[Vec2]) -> f32 {
    if points.len() < 3 {
        return 0.0;
    }
    let mut sum = 0.0;
    for i in 0..points.len() {
        let a = points[i];
        let b = points[(i + 1) % points.len()];
        sum += a.x * b.y - b.x * a.y;
    }
    sum * 0.5
}

/// True when the polygon winds counter-clockwise viewed from above (+Z)
pub fn is_ccw(points: &[Vec2]) -> bool {
    signed_area(points) > 0.0
}

/// Arithmetic centroid of the vertex set
pub fn centroid(points: &[Vec2]) -> Vec2 {
    if points.is_empty() {
        return Vec2::ZERO;
    }
    points.iter().copied().sum::<Vec2>() / points.len() as f32
}
