//! Radial-falloff dome approximation
//!
//! Approximates a wide, shallow liquid dome (a hemisphere no exact
//! primitive represents) with a grid of small flat tiles whose top Z
//! falls off radially from the dome center, plus one tall center
//! column. The result is a stepped, radially thinning stack of
//! rectangles rather than a smooth curved surface, which is within the
//! target renderer's tessellation granularity.

use serde::{Deserialize, Serialize};

use crate::core::error::ShapeError;
use crate::core::types::Vec2;
use crate::liquid::surface::SynthesizedSurface;
use crate::liquid::synth;
use crate::liquid::types::LiquidType;

/// Overlap lip added to each tile's far edge so adjacent tiles never
/// leave a hairline gap
const TILE_OVERLAP: f32 = 0.01;

/// One dome-shaped liquid body, pre world-scale
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomeParams {
    pub liquid: LiquidType,
    pub material: String,
    /// XY center of the dome footprint
    pub center: Vec2,
    /// Outer radius of the circular footprint
    pub radius: f32,
    /// Apex of the dome (highest liquid surface)
    pub top_z: f32,
    /// Absolute floor; no tile's bottom extends below this
    pub bottom_z: f32,
    /// Grid step for the square tiles
    pub tile_size: f32,
}

/// Falloff constants for the tile-height heuristic.
///
/// These are tunables, not hard correctness requirements: the defaults
/// reproduce the hand-calibrated proportions of the one known dome
/// (radius 24, flat core 10, falloff normalization 35, max drop 42 of a
/// 43-unit height).
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct DomeTuning {
    /// Fraction of the radius treated as a flat core with no falloff
    pub flat_radius_ratio: f32,
    /// Falloff normalization distance, as a fraction of the radius
    pub falloff_radius_ratio: f32,
    /// Maximum drop at full falloff, as a fraction of the dome height
    pub drop_ratio: f32,
}

impl Default for DomeTuning {
    fn default() -> Self {
        Self {
            flat_radius_ratio: 10.0 / 24.0,
            falloff_radius_ratio: 35.0 / 24.0,
            drop_ratio: 42.0 / 43.0,
        }
    }
}

/// Grid offsets along one axis: (start offset, tile size).
///
/// Regular `tile`-sized steps, except a tile that would straddle the
/// center-column window gets widened to end flush with the window's far
/// edge so no sliver tile is left against the column.
fn axis_steps(span: f32, tile: f32, column_lo: f32, column_hi: f32) -> Vec<(f32, f32)> {
    let mut steps = Vec::new();
    let mut offset = 0.0_f32;
    while offset < span - 1e-4 {
        let mut size = tile;
        if offset < column_lo && offset + tile > column_lo + 1e-4 {
            size = column_hi - offset;
        }
        steps.push((offset, size));
        offset += size;
    }
    steps
}

/// Synthesize the dome's tile set.
///
/// The explicit center column comes first, then surviving grid tiles in
/// row-major order. Each tile contributes a top/bottom surface pair.
pub fn synthesize_dome(
    params: &DomeParams,
    tuning: &DomeTuning,
) -> Result<Vec<SynthesizedSurface>, ShapeError> {
    let DomeParams { liquid, material, center, radius, top_z, bottom_z, tile_size } = params;
    let (liquid, center, radius, top_z, bottom_z, tile) =
        (*liquid, *center, *radius, *top_z, *bottom_z, *tile_size);

    if radius <= 0.0 {
        return Err(ShapeError::degenerate(format!("dome radius must be > 0, got {radius}")));
    }
    if tile <= 0.0 {
        return Err(ShapeError::degenerate(format!("dome tile size must be > 0, got {tile}")));
    }
    if top_z < bottom_z {
        return Err(ShapeError::InvalidSlant { high_z: top_z, low_z: bottom_z });
    }
    let height = top_z - bottom_z;
    if height <= 0.0 {
        return Err(ShapeError::degenerate("dome has zero height".to_string()));
    }

    let true_center_z = (top_z + bottom_z) * 0.5;
    let max_x = center.x + radius;
    let max_y = center.y + radius;
    let span = radius * 2.0;

    let flat_radius = radius * tuning.flat_radius_ratio;
    let falloff_radius = radius * tuning.falloff_radius_ratio;
    let max_drop = height * tuning.drop_ratio;

    // the explicit center column occupies a 4-tile-wide square window;
    // grid tiles fully inside the window are skipped
    let column_half = tile * 2.0;
    let column_lo = radius - column_half;
    let column_hi = radius + column_half;

    let mut surfaces = Vec::new();

    // tall center column spanning the full dome height
    let lip = column_half + TILE_OVERLAP;
    surfaces.extend(synth::flat_rectangle(
        liquid,
        material,
        Vec2::new(center.x + lip, center.y + lip),
        Vec2::new(center.x - lip, center.y - lip),
        top_z,
        height,
    )?);

    let steps = axis_steps(span, tile, column_lo, column_hi);
    let radius_sq = radius * radius;
    for &(xo, xt) in &steps {
        for &(yo, yt) in &steps {
            // skip tiles the center column already covers
            if xo >= column_lo - 1e-4
                && xo + xt <= column_hi + 1e-4
                && yo >= column_lo - 1e-4
                && yo + yt <= column_hi + 1e-4
            {
                continue;
            }

            // approximate circular footprint: keep the tile if any of
            // four inward-inset sample points falls inside the circle
            let x_samples = [max_x - (xo + xt * 0.625), max_x - (xo + xt * 0.375)];
            let y_samples = [max_y - (yo + yt * 0.625), max_y - (yo + yt * 0.375)];
            let inside = x_samples.iter().any(|sx| {
                y_samples
                    .iter()
                    .any(|sy| (sx - center.x).powi(2) + (sy - center.y).powi(2) <= radius_sq)
            });
            if !inside {
                continue;
            }

            let x_hi = max_x - xo;
            let x_lo = max_x - (xo + xt + TILE_OVERLAP);
            let y_hi = max_y - yo;
            let y_lo = max_y - (yo + yt + TILE_OVERLAP);

            // linear falloff of the tile's top from the flat core outward,
            // clamped so no tile rises above the apex
            let tile_center = Vec2::new((x_hi + x_lo) * 0.5, (y_hi + y_lo) * 0.5);
            let distance = (tile_center - center).length() - flat_radius;
            let drop = (distance / falloff_radius) * max_drop;
            let z = (top_z - drop).min(top_z);

            // depth thins toward the rim, bounded by the dome floor
            let depth = ((z - true_center_z) * 2.0 + tile).min(z - bottom_z);
            if depth <= 0.0 {
                continue;
            }

            surfaces.extend(synth::flat_rectangle(
                liquid,
                material,
                Vec2::new(x_hi, y_hi),
                Vec2::new(x_lo, y_lo),
                z,
                depth,
            )?);
        }
    }

    Ok(surfaces)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;

    fn params() -> DomeParams {
        DomeParams {
            liquid: LiquidType::GreenWater,
            material: "t50_grnwtr1".to_string(),
            center: Vec2::new(0.0, 0.0),
            radius: 24.0,
            top_z: -50.0,
            bottom_z: -93.0,
            tile_size: 2.0,
        }
    }

    #[test]
    fn test_dome_center_column_present() {
        let surfaces = synthesize_dome(&params(), &DomeTuning::default()).unwrap();
        // center column is the first pair: full height, footprint around the center
        let column_top = &surfaces[0];
        assert_eq!(column_top.top_z, -50.0);
        assert_eq!(column_top.bottom_z, -93.0);
        let bounds = column_top.bounds();
        assert!(bounds.contains_point(Vec3::new(0.0, 0.0, -50.0)));
    }

    #[test]
    fn test_dome_no_tile_rises_above_apex() {
        let surfaces = synthesize_dome(&params(), &DomeTuning::default()).unwrap();
        for surface in &surfaces {
            assert!(surface.top_z <= -50.0 + 1e-4);
        }
    }

    #[test]
    fn test_dome_no_tile_extends_below_floor() {
        let surfaces = synthesize_dome(&params(), &DomeTuning::default()).unwrap();
        for surface in &surfaces {
            assert!(surface.bottom_z >= -93.0 - 1e-3);
        }
    }

    #[test]
    fn test_dome_tiles_pass_inclusion_test() {
        let p = params();
        let surfaces = synthesize_dome(&p, &DomeTuning::default()).unwrap();
        // skip the center column pair; every grid tile must have kept at
        // least one inset sample point inside the dome circle
        for pair in surfaces[2..].chunks(2) {
            let top = &pair[0];
            let bounds = top.bounds();
            let size_x = bounds.max.x - bounds.min.x - TILE_OVERLAP;
            let size_y = bounds.max.y - bounds.min.y - TILE_OVERLAP;
            let x_samples = [bounds.max.x - size_x * 0.625, bounds.max.x - size_x * 0.375];
            let y_samples = [bounds.max.y - size_y * 0.625, bounds.max.y - size_y * 0.375];
            let inside = x_samples.iter().any(|sx| {
                y_samples
                    .iter()
                    .any(|sy| sx * sx + sy * sy <= p.radius * p.radius + 1e-3)
            });
            assert!(inside, "tile at {:?} fully outside the dome circle", bounds);
        }
    }

    #[test]
    fn test_dome_tiles_thin_toward_rim() {
        let surfaces = synthesize_dome(&params(), &DomeTuning::default()).unwrap();
        // rim tiles must be shallower than the center column
        let column_depth = surfaces[0].top_z - surfaces[0].bottom_z;
        let mut saw_shallower = false;
        for pair in surfaces[2..].chunks(2) {
            let depth = pair[0].top_z - pair[0].bottom_z;
            assert!(depth > 0.0);
            if depth < column_depth * 0.5 {
                saw_shallower = true;
            }
        }
        assert!(saw_shallower, "expected rim tiles much shallower than the core");
    }

    #[test]
    fn test_dome_is_deterministic() {
        let a = synthesize_dome(&params(), &DomeTuning::default()).unwrap();
        let b = synthesize_dome(&params(), &DomeTuning::default()).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_dome_zero_radius_is_degenerate() {
        let mut p = params();
        p.radius = 0.0;
        assert!(matches!(
            synthesize_dome(&p, &DomeTuning::default()),
            Err(ShapeError::DegenerateShape { .. })
        ));
    }

    #[test]
    fn test_dome_inverted_z_is_invalid_slant() {
        let mut p = params();
        p.top_z = -93.0;
        p.bottom_z = -50.0;
        assert!(matches!(
            synthesize_dome(&p, &DomeTuning::default()),
            Err(ShapeError::InvalidSlant { .. })
        ));
    }

    #[test]
    fn test_axis_steps_widen_at_column_seam() {
        // a grid whose tiles straddle the column window start gets one
        // widened tile ending flush with the window's far edge
        let steps = axis_steps(20.0, 3.0, 8.0, 14.0);
        // offsets: 0, 3, 6 (straddles 8 -> widened to 14), 14, 17
        assert_eq!(steps[0], (0.0, 3.0));
        assert_eq!(steps[1], (3.0, 3.0));
        assert_eq!(steps[2], (6.0, 8.0));
        assert_eq!(steps[3], (14.0, 3.0));
        assert_eq!(steps[4], (17.0, 3.0));
        assert_eq!(steps.len(), 5);
    }
}
