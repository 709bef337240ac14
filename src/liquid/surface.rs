//! Synthesized output records
//!
//! Everything here is immutable once produced and owned exclusively by
//! the registry that requested it.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;
use crate::liquid::types::LiquidType;
use crate::math::Aabb;

/// One tessellated liquid polygon: an ordered vertex fan (triangle or
/// quad, counter-clockwise viewed from above for upward-facing surfaces)
/// bound to a material and liquid type.
///
/// `top_z` / `bottom_z` are the vertical extent of the liquid body at
/// this surface's footprint: top of the visible surface and top minus
/// depth. For side walls and caps they are simply the surface's own
/// vertical extent.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SynthesizedSurface {
    pub vertices: Vec<Vec3>,
    pub material: String,
    pub liquid: LiquidType,
    pub top_z: f32,
    pub bottom_z: f32,
}

impl SynthesizedSurface {
    /// Bounding box covering the polygon and its depth extrusion
    pub fn bounds(&self) -> Aabb {
        let mut bounds = Aabb::from_corners(self.vertices[0], self.vertices[0]);
        for v in &self.vertices[1..] {
            bounds.expand(*v);
        }
        bounds.expand(Vec3::new(bounds.min.x, bounds.min.y, self.bottom_z));
        bounds
    }

    /// Exporter-boundary helper: all coordinates multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            vertices: self.vertices.iter().map(|v| *v * factor).collect(),
            material: self.material.clone(),
            liquid: self.liquid,
            top_z: self.top_z * factor,
            bottom_z: self.bottom_z * factor,
        }
    }
}

/// Solid axis-aligned region of liquid with no visible surface.
///
/// Consumed only by the downstream collision / "is submerged" query.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct LiquidVolume {
    pub liquid: LiquidType,
    pub bounds: Aabb,
}

impl LiquidVolume {
    /// True when the point sits inside the liquid region
    pub fn is_submerged(&self, p: Vec3) -> bool {
        self.bounds.contains_point(p)
    }
}

/// Axis-aligned box flagging enclosed solid geometry as a
/// suppressed-collision artifact. Not a liquid; shares the registry
/// because it is authored alongside liquid bodies.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DiscardBox {
    pub bounds: Aabb,
    /// Free-form authoring note carried through for diagnostics
    #[serde(default)]
    pub label: String,
}
