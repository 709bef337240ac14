//! Liquid surface synthesizer
//!
//! Pure, deterministic shape-to-mesh conversion: one
//! [`ShapeDescriptor`] in, zero or more [`SynthesizedSurface`] records
//! out. No I/O, no shared state, no world scaling. Failures are
//! per-shape ([`ShapeError`]) and never abort a whole zone pass.

use crate::core::error::ShapeError;
use crate::core::types::{Vec2, Vec3};
use crate::liquid::shape::{ClampRect, ShapeDescriptor};
use crate::liquid::surface::{DiscardBox, LiquidVolume, SynthesizedSurface};
use crate::liquid::types::{LiquidType, SlantType};
use crate::math::{polygon, Aabb};

/// Minimum XY polygon area before a shape counts as degenerate
const AREA_EPSILON: f32 = 1e-6;

/// Tessellation parameters for shapes without an exact polygon form
#[derive(Clone, Copy, Debug)]
pub struct SynthesisConfig {
    /// Radial segment count for cylinder caps and walls (>= 3)
    pub radial_segments: usize,
}

impl Default for SynthesisConfig {
    fn default() -> Self {
        Self { radial_segments: 16 }
    }
}

/// Result of synthesizing one shape descriptor
#[derive(Clone, Debug, PartialEq)]
pub enum Synthesized {
    /// Renderable liquid geometry
    Surfaces(Vec<SynthesizedSurface>),
    /// Implicit submerged region, no visible surface
    Volume(LiquidVolume),
    /// Collision-suppression box, forwarded untouched
    Discard(DiscardBox),
}

impl Synthesized {
    /// Surfaces produced, empty for volume and discard outputs
    pub fn surfaces(&self) -> &[SynthesizedSurface] {
        match self {
            Self::Surfaces(surfaces) => surfaces,
            _ => &[],
        }
    }
}

/// Converts shape descriptors into tessellated liquid geometry.
#[derive(Clone, Debug, Default)]
pub struct LiquidSynthesizer {
    config: SynthesisConfig,
}

impl LiquidSynthesizer {
    pub fn new(config: SynthesisConfig) -> Self {
        Self { config }
    }

    /// Synthesize one shape.
    ///
    /// Surface-producing variants yield their top polygon(s) first,
    /// followed by walls/caps where applicable, with the depth-extruded
    /// bottom polygon last in each top/bottom pair.
    pub fn synthesize(&self, shape: &ShapeDescriptor) -> Result<Synthesized, ShapeError> {
        match shape {
            ShapeDescriptor::FlatRectangle { liquid, material, corner_a, corner_b, z, depth } => {
                flat_rectangle(*liquid, material, *corner_a, *corner_b, *z, *depth)
                    .map(Synthesized::Surfaces)
            }
            ShapeDescriptor::SlantedRectangle {
                liquid, material, corner_a, corner_b, high_z, low_z, slant, depth,
            } => slanted_rectangle(*liquid, material, *corner_a, *corner_b, *high_z, *low_z, *slant, *depth)
                .map(Synthesized::Surfaces),
            ShapeDescriptor::Trapezoid {
                liquid, material, north_y, south_y, west_x, east_x, taper, z, depth,
            } => trapezoid(*liquid, material, *north_y, *south_y, *west_x, *east_x, *taper, *z, *depth)
                .map(Synthesized::Surfaces),
            ShapeDescriptor::Triangle {
                liquid, material, apex_y, base_y, west_x, east_x, apex_ratio, z, depth,
            } => triangle(*liquid, material, *apex_y, *base_y, *west_x, *east_x, *apex_ratio, *z, *depth)
                .map(Synthesized::Surfaces),
            ShapeDescriptor::Quadrilateral {
                liquid, material, north, west, south, east, insets, z, depth,
            } => quadrilateral(*liquid, material, [*north, *west, *south, *east], *insets, *z, *depth)
                .map(Synthesized::Surfaces),
            ShapeDescriptor::Octagon {
                liquid, material, corners, outer_z, inner_z, dome_ratio, depth,
            } => octagon(*liquid, material, *corners, *outer_z, *inner_z, *dome_ratio, *depth)
                .map(Synthesized::Surfaces),
            ShapeDescriptor::Cylinder {
                liquid, material, center, radius, top_z, height, clamp,
            } => cylinder(
                *liquid, material, *center, *radius, *top_z, *height, *clamp,
                self.config.radial_segments,
            )
            .map(Synthesized::Surfaces),
            ShapeDescriptor::Volume { liquid, corner_a, corner_b, high_z, low_z } => {
                volume(*liquid, *corner_a, *corner_b, *high_z, *low_z).map(Synthesized::Volume)
            }
            ShapeDescriptor::DiscardGeometryBox { corner_a, corner_b, label } => {
                Ok(Synthesized::Discard(DiscardBox {
                    bounds: Aabb::from_corners(*corner_a, *corner_b),
                    label: label.clone(),
                }))
            }
        }
    }
}

fn check_depth(depth: f32) -> Result<(), ShapeError> {
    if depth > 0.0 {
        Ok(())
    } else {
        Err(ShapeError::degenerate(format!("depth must be > 0, got {depth}")))
    }
}

fn check_slant(high_z: f32, low_z: f32) -> Result<(), ShapeError> {
    if high_z >= low_z {
        Ok(())
    } else {
        Err(ShapeError::InvalidSlant { high_z, low_z })
    }
}

/// Build the standard top/bottom surface pair for a constant-depth body.
///
/// `top` must wind counter-clockwise viewed from above; the bottom is
/// the same footprint shifted down by `depth` with reversed winding so
/// its normal faces down.
fn extruded_pair(
    top: Vec<Vec3>,
    depth: f32,
    material: &str,
    liquid: LiquidType,
) -> Vec<SynthesizedSurface> {
    let top_z = top.iter().map(|v| v.z).fold(f32::NEG_INFINITY, f32::max);
    let lowest_top = top.iter().map(|v| v.z).fold(f32::INFINITY, f32::min);
    let bottom_z = lowest_top - depth;
    let bottom: Vec<Vec3> = top
        .iter()
        .rev()
        .map(|v| Vec3::new(v.x, v.y, v.z - depth))
        .collect();
    vec![
        SynthesizedSurface {
            vertices: top,
            material: material.to_string(),
            liquid,
            top_z,
            bottom_z,
        },
        SynthesizedSurface {
            vertices: bottom,
            material: material.to_string(),
            liquid,
            top_z,
            bottom_z,
        },
    ]
}

/// Lift an XY polygon to constant Z and emit its top/bottom pair after
/// an area sanity check.
fn flat_pair(
    footprint: Vec<Vec2>,
    z: f32,
    depth: f32,
    material: &str,
    liquid: LiquidType,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    check_depth(depth)?;
    let area = polygon::signed_area(&footprint);
    if area.abs() <= AREA_EPSILON {
        return Err(ShapeError::degenerate(format!(
            "zero-area footprint (area = {area})"
        )));
    }
    let footprint: Vec<Vec2> = if area < 0.0 {
        // restore counter-clockwise winding for mislabeled corners
        footprint.into_iter().rev().collect()
    } else {
        footprint
    };
    let top: Vec<Vec3> = footprint.iter().map(|p| Vec3::new(p.x, p.y, z)).collect();
    Ok(extruded_pair(top, depth, material, liquid))
}

pub(crate) fn flat_rectangle(
    liquid: LiquidType,
    material: &str,
    corner_a: Vec2,
    corner_b: Vec2,
    z: f32,
    depth: f32,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    check_depth(depth)?;
    let min = corner_a.min(corner_b);
    let max = corner_a.max(corner_b);
    let size = max - min;
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(ShapeError::degenerate(format!(
            "rectangle resolves to zero extent (width = {}, height = {})",
            size.x, size.y
        )));
    }
    let top = vec![
        Vec3::new(min.x, min.y, z),
        Vec3::new(max.x, min.y, z),
        Vec3::new(max.x, max.y, z),
        Vec3::new(min.x, max.y, z),
    ];
    Ok(extruded_pair(top, depth, material, liquid))
}

/// Interpolation factor toward the high edge for a point inside the
/// slanted rectangle's footprint. Corners land exactly on 0 or 1 so
/// edge vertices hit `high_z` / `low_z` without rounding.
fn slant_factor(slant: SlantType, p: Vec2, min: Vec2, max: Vec2) -> f32 {
    match slant {
        SlantType::NorthHighSouthLow => (p.y - min.y) / (max.y - min.y),
        SlantType::SouthHighNorthLow => (max.y - p.y) / (max.y - min.y),
        SlantType::EastHighWestLow => (p.x - min.x) / (max.x - min.x),
        SlantType::WestHighEastLow => (max.x - p.x) / (max.x - min.x),
    }
}

fn slanted_rectangle(
    liquid: LiquidType,
    material: &str,
    corner_a: Vec2,
    corner_b: Vec2,
    high_z: f32,
    low_z: f32,
    slant: SlantType,
    depth: f32,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    check_slant(high_z, low_z)?;
    check_depth(depth)?;
    let min = corner_a.min(corner_b);
    let max = corner_a.max(corner_b);
    let size = max - min;
    if size.x <= 0.0 || size.y <= 0.0 {
        return Err(ShapeError::degenerate(format!(
            "rectangle resolves to zero extent (width = {}, height = {})",
            size.x, size.y
        )));
    }
    let footprint = [
        Vec2::new(min.x, min.y),
        Vec2::new(max.x, min.y),
        Vec2::new(max.x, max.y),
        Vec2::new(min.x, max.y),
    ];
    let top: Vec<Vec3> = footprint
        .iter()
        .map(|p| {
            // two-sided lerp so edge vertices hit high_z / low_z exactly
            let t = slant_factor(slant, *p, min, max);
            Vec3::new(p.x, p.y, low_z * (1.0 - t) + high_z * t)
        })
        .collect();
    Ok(extruded_pair(top, depth, material, liquid))
}

fn trapezoid(
    liquid: LiquidType,
    material: &str,
    north_y: f32,
    south_y: f32,
    west_x: f32,
    east_x: f32,
    taper: f32,
    z: f32,
    depth: f32,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    if north_y <= south_y {
        return Err(ShapeError::degenerate(format!(
            "north edge must lie north of south edge (north_y = {north_y}, south_y = {south_y})"
        )));
    }
    if east_x <= west_x {
        return Err(ShapeError::degenerate(format!(
            "east extent must exceed west extent (west_x = {west_x}, east_x = {east_x})"
        )));
    }
    if !(0.0..=1.0).contains(&taper) {
        return Err(ShapeError::degenerate(format!(
            "taper ratio must be within [0, 1], got {taper}"
        )));
    }
    let center_x = (west_x + east_x) * 0.5;
    let narrow_half = (east_x - west_x) * taper * 0.5;
    // south edge collapsed to a point: a triangle, not a quad
    let footprint = if narrow_half <= AREA_EPSILON {
        vec![
            Vec2::new(east_x, north_y),
            Vec2::new(west_x, north_y),
            Vec2::new(center_x, south_y),
        ]
    } else {
        vec![
            Vec2::new(east_x, north_y),
            Vec2::new(west_x, north_y),
            Vec2::new(center_x - narrow_half, south_y),
            Vec2::new(center_x + narrow_half, south_y),
        ]
    };
    flat_pair(footprint, z, depth, material, liquid)
}

fn triangle(
    liquid: LiquidType,
    material: &str,
    apex_y: f32,
    base_y: f32,
    west_x: f32,
    east_x: f32,
    apex_ratio: f32,
    z: f32,
    depth: f32,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    if apex_y <= base_y {
        return Err(ShapeError::degenerate(format!(
            "apex must lie north of the base edge (apex_y = {apex_y}, base_y = {base_y})"
        )));
    }
    if east_x <= west_x {
        return Err(ShapeError::degenerate(format!(
            "base edge resolves to zero width (west_x = {west_x}, east_x = {east_x})"
        )));
    }
    let apex_x = west_x + (east_x - west_x) * apex_ratio;
    let footprint = vec![
        Vec2::new(apex_x, apex_y),
        Vec2::new(west_x, base_y),
        Vec2::new(east_x, base_y),
    ];
    flat_pair(footprint, z, depth, material, liquid)
}

fn quadrilateral(
    liquid: LiquidType,
    material: &str,
    corners: [Vec2; 4],
    insets: [f32; 4],
    z: f32,
    depth: f32,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    let centroid = polygon::centroid(&corners);
    let mut adjusted = Vec::with_capacity(4);
    for (corner, inset) in corners.iter().zip(insets.iter()) {
        if *inset < 0.0 {
            return Err(ShapeError::degenerate(format!(
                "corner inset must be >= 0, got {inset}"
            )));
        }
        let toward_center = centroid - *corner;
        let distance = toward_center.length();
        if *inset == 0.0 || distance <= AREA_EPSILON {
            adjusted.push(*corner);
        } else {
            // never pull past the centroid
            let pull = inset.min(distance);
            adjusted.push(*corner + toward_center / distance * pull);
        }
    }
    flat_pair(adjusted, z, depth, material, liquid)
}

fn octagon(
    liquid: LiquidType,
    material: &str,
    corners: [Vec2; 8],
    outer_z: f32,
    inner_z: f32,
    dome_ratio: f32,
    depth: f32,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    check_slant(inner_z, outer_z)?;
    check_depth(depth)?;
    if !(dome_ratio > 0.0 && dome_ratio < 1.0) {
        return Err(ShapeError::degenerate(format!(
            "dome ratio must be within (0, 1), got {dome_ratio}"
        )));
    }
    let area = polygon::signed_area(&corners);
    if area.abs() <= AREA_EPSILON {
        return Err(ShapeError::degenerate(format!(
            "zero-area octagon (area = {area})"
        )));
    }
    let mut outer = corners.to_vec();
    if area < 0.0 {
        outer.reverse();
    }
    let centroid = polygon::centroid(&outer);
    let inner: Vec<Vec2> = outer
        .iter()
        .map(|c| centroid + (*c - centroid) * dome_ratio)
        .collect();

    let mut surfaces = Vec::with_capacity(10);
    // ring of wall quads rising from the rim to the raised inner cap
    for i in 0..8 {
        let j = (i + 1) % 8;
        let vertices = vec![
            Vec3::new(outer[i].x, outer[i].y, outer_z),
            Vec3::new(outer[j].x, outer[j].y, outer_z),
            Vec3::new(inner[j].x, inner[j].y, inner_z),
            Vec3::new(inner[i].x, inner[i].y, inner_z),
        ];
        surfaces.push(SynthesizedSurface {
            vertices,
            material: material.to_string(),
            liquid,
            top_z: inner_z,
            bottom_z: outer_z,
        });
    }
    // raised cap
    surfaces.push(SynthesizedSurface {
        vertices: inner.iter().map(|p| Vec3::new(p.x, p.y, inner_z)).collect(),
        material: material.to_string(),
        liquid,
        top_z: inner_z,
        bottom_z: inner_z - depth,
    });
    // depth-extruded bottom across the full rim footprint
    surfaces.push(SynthesizedSurface {
        vertices: outer
            .iter()
            .rev()
            .map(|p| Vec3::new(p.x, p.y, outer_z - depth))
            .collect(),
        material: material.to_string(),
        liquid,
        top_z: outer_z,
        bottom_z: outer_z - depth,
    });
    Ok(surfaces)
}

fn ring_point(center: Vec2, radius: f32, segment: usize, segments: usize, clamp: Option<ClampRect>) -> Vec2 {
    let angle = std::f32::consts::TAU * segment as f32 / segments as f32;
    let p = center + Vec2::new(angle.cos(), angle.sin()) * radius;
    match clamp {
        Some(rect) => rect.clamp(p),
        None => p,
    }
}

fn cylinder(
    liquid: LiquidType,
    material: &str,
    center: Vec2,
    radius: f32,
    top_z: f32,
    height: f32,
    clamp: Option<ClampRect>,
    segments: usize,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    if radius <= 0.0 {
        return Err(ShapeError::degenerate(format!("radius must be > 0, got {radius}")));
    }
    if height <= 0.0 {
        return Err(ShapeError::degenerate(format!("height must be > 0, got {height}")));
    }
    if segments < 3 {
        return Err(ShapeError::degenerate(format!(
            "cylinder needs at least 3 radial segments, got {segments}"
        )));
    }
    let bottom_z = top_z - height;
    let ring: Vec<Vec2> = (0..segments)
        .map(|i| ring_point(center, radius, i, segments, clamp))
        .collect();

    let mut surfaces = Vec::with_capacity(segments + 2);
    // top cap, counter-clockwise from above
    surfaces.push(SynthesizedSurface {
        vertices: ring.iter().map(|p| Vec3::new(p.x, p.y, top_z)).collect(),
        material: material.to_string(),
        liquid,
        top_z,
        bottom_z,
    });
    // bottom cap, reversed so its normal faces down
    surfaces.push(SynthesizedSurface {
        vertices: ring.iter().rev().map(|p| Vec3::new(p.x, p.y, bottom_z)).collect(),
        material: material.to_string(),
        liquid,
        top_z,
        bottom_z,
    });
    // ruled side walls, outward-facing
    for i in 0..segments {
        let j = (i + 1) % segments;
        surfaces.push(SynthesizedSurface {
            vertices: vec![
                Vec3::new(ring[i].x, ring[i].y, top_z),
                Vec3::new(ring[i].x, ring[i].y, bottom_z),
                Vec3::new(ring[j].x, ring[j].y, bottom_z),
                Vec3::new(ring[j].x, ring[j].y, top_z),
            ],
            material: material.to_string(),
            liquid,
            top_z,
            bottom_z,
        });
    }
    Ok(surfaces)
}

fn volume(
    liquid: LiquidType,
    corner_a: Vec2,
    corner_b: Vec2,
    high_z: f32,
    low_z: f32,
) -> Result<LiquidVolume, ShapeError> {
    check_slant(high_z, low_z)?;
    let size = corner_a.max(corner_b) - corner_a.min(corner_b);
    if size.x <= 0.0 || size.y <= 0.0 || high_z - low_z <= 0.0 {
        return Err(ShapeError::degenerate(format!(
            "volume resolves to zero extent ({} x {} x {})",
            size.x,
            size.y,
            high_z - low_z
        )));
    }
    Ok(LiquidVolume {
        liquid,
        bounds: Aabb::from_footprint(corner_a, corner_b, high_z, low_z),
    })
}
