//! Parametric liquid shape descriptors
//!
//! One descriptor is one row in a zone's declarative data table. Each is
//! a transient value: constructed (usually by serde), handed to the
//! synthesizer once, and dropped. All coordinates are in source-engine
//! units, pre world-scale.

use serde::{Deserialize, Serialize};

use crate::core::types::{Vec2, Vec3};
use crate::liquid::types::{LiquidType, SlantType};

/// Axis-aligned rectangle used to clamp cylinder cap and wall vertices
/// that would otherwise extend past surrounding structural geometry.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct ClampRect {
    pub min: Vec2,
    pub max: Vec2,
}

impl ClampRect {
    /// Clamp a point into this rectangle
    pub fn clamp(&self, p: Vec2) -> Vec2 {
        p.clamp(self.min, self.max)
    }
}

/// The closed vocabulary of liquid shapes.
///
/// Every variant except `Volume` and `DiscardGeometryBox` produces at
/// least one closed top polygon plus a bottom derived from `depth`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ShapeDescriptor {
    /// Flat rectangular surface at a single Z level. Corners may be given
    /// in any order; synthesis normalizes them.
    FlatRectangle {
        liquid: LiquidType,
        material: String,
        corner_a: Vec2,
        corner_b: Vec2,
        z: f32,
        depth: f32,
    },

    /// Rectangle whose top surface slopes linearly from a high edge to a
    /// low edge, selected by `slant`. Depth is uniform below every top
    /// vertex (the bottom re-slopes with the top).
    SlantedRectangle {
        liquid: LiquidType,
        material: String,
        corner_a: Vec2,
        corner_b: Vec2,
        high_z: f32,
        low_z: f32,
        slant: SlantType,
        depth: f32,
    },

    /// Axis-aligned trapezoid at constant Z. The north edge spans the
    /// full west-east extent; the south edge narrows to `taper` times
    /// that width, centered. `taper == 0` degenerates gracefully into a
    /// triangle.
    Trapezoid {
        liquid: LiquidType,
        material: String,
        north_y: f32,
        south_y: f32,
        west_x: f32,
        east_x: f32,
        taper: f32,
        z: f32,
        depth: f32,
    },

    /// South-edge-aligned triangle at constant Z. The base runs along
    /// `base_y` from `west_x` to `east_x`; the apex sits at `apex_y`,
    /// positioned along the base extent by `apex_ratio` (0 = west end,
    /// 1 = east end).
    Triangle {
        liquid: LiquidType,
        material: String,
        apex_y: f32,
        base_y: f32,
        west_x: f32,
        east_x: f32,
        apex_ratio: f32,
        z: f32,
        depth: f32,
    },

    /// Four explicit corners at constant Z, each pulled toward the
    /// polygon centroid by its own inset magnitude (in world units).
    /// Used to fit liquid under irregular structural geometry.
    /// Insets are in corner order: north, west, south, east.
    Quadrilateral {
        liquid: LiquidType,
        material: String,
        north: Vec2,
        west: Vec2,
        south: Vec2,
        east: Vec2,
        insets: [f32; 4],
        z: f32,
        depth: f32,
    },

    /// Eight-cornered ring (counter-clockwise viewed from above) with a
    /// raised inner cap. The inner ring is the outer ring shrunk toward
    /// the centroid by `dome_ratio` (0 < ratio < 1) and lifted to
    /// `inner_z`; the rim stays at `outer_z`.
    Octagon {
        liquid: LiquidType,
        material: String,
        corners: [Vec2; 8],
        outer_z: f32,
        inner_z: f32,
        dome_ratio: f32,
        depth: f32,
    },

    /// Vertical liquid column: top cap, bottom cap, and ruled side walls
    /// at fixed radius. Tessellation density comes from the synthesizer
    /// configuration. `clamp` optionally constrains vertices to an
    /// axis-aligned footprint.
    Cylinder {
        liquid: LiquidType,
        material: String,
        center: Vec2,
        radius: f32,
        top_z: f32,
        height: f32,
        #[serde(default)]
        clamp: Option<ClampRect>,
    },

    /// Solid box of liquid with no visible surface. Consumed only by the
    /// downstream submersion query, never by the renderer.
    Volume {
        liquid: LiquidType,
        corner_a: Vec2,
        corner_b: Vec2,
        high_z: f32,
        low_z: f32,
    },

    /// Not a liquid: flags enclosed solid geometry whose collision should
    /// be suppressed (known authoring artifacts near liquid bodies).
    DiscardGeometryBox {
        corner_a: Vec3,
        corner_b: Vec3,
        #[serde(default)]
        label: String,
    },
}

impl ShapeDescriptor {
    /// Short name of the variant, for log messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::FlatRectangle { .. } => "flat_rectangle",
            Self::SlantedRectangle { .. } => "slanted_rectangle",
            Self::Trapezoid { .. } => "trapezoid",
            Self::Triangle { .. } => "triangle",
            Self::Quadrilateral { .. } => "quadrilateral",
            Self::Octagon { .. } => "octagon",
            Self::Cylinder { .. } => "cylinder",
            Self::Volume { .. } => "volume",
            Self::DiscardGeometryBox { .. } => "discard_geometry_box",
        }
    }

    /// Material bound to the shape, if it renders one.
    pub fn material(&self) -> Option<&str> {
        match self {
            Self::FlatRectangle { material, .. }
            | Self::SlantedRectangle { material, .. }
            | Self::Trapezoid { material, .. }
            | Self::Triangle { material, .. }
            | Self::Quadrilateral { material, .. }
            | Self::Octagon { material, .. }
            | Self::Cylinder { material, .. } => Some(material),
            Self::Volume { .. } | Self::DiscardGeometryBox { .. } => None,
        }
    }
}
