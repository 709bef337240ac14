//! Per-zone accumulation of synthesized liquid geometry
//!
//! One registry instance lives for exactly one zone-conversion pass:
//! append-only while the zone definition executes, then finalized into
//! a [`ZoneLiquidSet`] for the exporter and discarded. Never shared
//! across zones or threads.

use serde::{Deserialize, Serialize};

use crate::core::types::Vec3;
use crate::liquid::surface::{DiscardBox, LiquidVolume, SynthesizedSurface};
use crate::liquid::synth::Synthesized;
use crate::math::Aabb;

/// Ordered, append-only collector for one zone's liquid output.
///
/// Performs no shape validation; the synthesizer already did.
#[derive(Clone, Debug, Default)]
pub struct ZoneLiquidRegistry {
    zone: String,
    surfaces: Vec<SynthesizedSurface>,
    volumes: Vec<LiquidVolume>,
    discard_boxes: Vec<DiscardBox>,
    collision_disabled_materials: Vec<String>,
}

impl ZoneLiquidRegistry {
    pub fn new(zone: impl Into<String>) -> Self {
        Self {
            zone: zone.into(),
            ..Default::default()
        }
    }

    /// Zone this registry belongs to
    pub fn zone(&self) -> &str {
        &self.zone
    }

    /// Append synthesized surfaces, preserving order
    pub fn register(&mut self, surfaces: Vec<SynthesizedSurface>) {
        self.surfaces.extend(surfaces);
    }

    /// Append an implicit submerged liquid region
    pub fn register_volume(&mut self, volume: LiquidVolume) {
        self.volumes.push(volume);
    }

    /// Append a solid-geometry collision-suppression box
    pub fn register_discard_box(&mut self, discard: DiscardBox) {
        self.discard_boxes.push(discard);
    }

    /// Route one synthesizer output to the right list
    pub fn register_output(&mut self, output: Synthesized) {
        match output {
            Synthesized::Surfaces(surfaces) => self.register(surfaces),
            Synthesized::Volume(volume) => self.register_volume(volume),
            Synthesized::Discard(discard) => self.register_discard_box(discard),
        }
    }

    /// Mark material names whose solid-world collision must be disabled
    /// (known overlap artifacts under liquid bodies). Duplicates are
    /// dropped, first-seen order kept.
    pub fn register_collision_disabled<I, S>(&mut self, names: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for name in names {
            let name = name.into();
            if !self.collision_disabled_materials.contains(&name) {
                self.collision_disabled_materials.push(name);
            }
        }
    }

    pub fn surface_count(&self) -> usize {
        self.surfaces.len()
    }

    pub fn is_empty(&self) -> bool {
        self.surfaces.is_empty()
            && self.volumes.is_empty()
            && self.discard_boxes.is_empty()
            && self.collision_disabled_materials.is_empty()
    }

    /// Hand the accumulated set to the exporter and end this pass
    pub fn finalize(self) -> ZoneLiquidSet {
        ZoneLiquidSet {
            zone: self.zone,
            surfaces: self.surfaces,
            volumes: self.volumes,
            discard_boxes: self.discard_boxes,
            collision_disabled_materials: self.collision_disabled_materials,
        }
    }
}

/// Everything the exporter needs for one zone's liquids.
///
/// Coordinates are still pre-scale; the exporter applies the global
/// world-scale multiplier via [`ZoneLiquidSet::scaled`].
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneLiquidSet {
    pub zone: String,
    pub surfaces: Vec<SynthesizedSurface>,
    pub volumes: Vec<LiquidVolume>,
    pub discard_boxes: Vec<DiscardBox>,
    pub collision_disabled_materials: Vec<String>,
}

impl ZoneLiquidSet {
    /// Apply the global world-scale multiplier. Exporter boundary only;
    /// synthesis never scales.
    pub fn scaled(&self, world_scale: f32) -> ZoneLiquidSet {
        ZoneLiquidSet {
            zone: self.zone.clone(),
            surfaces: self.surfaces.iter().map(|s| s.scaled(world_scale)).collect(),
            volumes: self
                .volumes
                .iter()
                .map(|v| LiquidVolume {
                    liquid: v.liquid,
                    bounds: v.bounds.scaled(world_scale),
                })
                .collect(),
            discard_boxes: self
                .discard_boxes
                .iter()
                .map(|d| DiscardBox {
                    bounds: d.bounds.scaled(world_scale),
                    label: d.label.clone(),
                })
                .collect(),
            collision_disabled_materials: self.collision_disabled_materials.clone(),
        }
    }

    /// Bounding box over all surfaces and volumes, if any exist
    pub fn bounds(&self) -> Option<Aabb> {
        let mut bounds: Option<Aabb> = None;
        for surface in &self.surfaces {
            let b = surface.bounds();
            bounds = Some(match bounds {
                Some(existing) => existing.merged(&b),
                None => b,
            });
        }
        for volume in &self.volumes {
            bounds = Some(match bounds {
                Some(existing) => existing.merged(&volume.bounds),
                None => volume.bounds,
            });
        }
        bounds
    }

    /// Downstream submersion query over the implicit liquid volumes
    pub fn is_submerged(&self, point: Vec3) -> bool {
        self.volumes.iter().any(|v| v.is_submerged(point))
    }
}
