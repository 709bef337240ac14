//! One zone-conversion pass
//!
//! Feeds every descriptor in a [`ZoneDefinition`] through the
//! synthesizer and collects the results. Shape failures are contained:
//! a degenerate or inverted shape is logged and skipped, and the rest
//! of the zone still converts.

use log::warn;

use crate::liquid::dome::{synthesize_dome, DomeTuning};
use crate::liquid::registry::{ZoneLiquidRegistry, ZoneLiquidSet};
use crate::liquid::synth::LiquidSynthesizer;
use crate::zone::area::ZoneAreaRegistry;
use crate::zone::definition::ZoneDefinition;

/// Output of one zone-conversion pass, pre world-scale.
#[derive(Clone, Debug)]
pub struct ZoneConversion {
    pub liquid: ZoneLiquidSet,
    pub areas: ZoneAreaRegistry,
    /// Shapes and domes dropped for per-shape errors
    pub skipped_shapes: usize,
}

/// Drives zone definitions through liquid synthesis.
#[derive(Clone, Debug, Default)]
pub struct ZoneBuilder {
    synth: LiquidSynthesizer,
    tuning: DomeTuning,
}

impl ZoneBuilder {
    pub fn new(synth: LiquidSynthesizer, tuning: DomeTuning) -> Self {
        Self { synth, tuning }
    }

    /// Convert one zone. Never fails as a whole: bad shapes are logged
    /// with their index and skipped.
    pub fn convert(&self, definition: &ZoneDefinition) -> ZoneConversion {
        let mut registry = ZoneLiquidRegistry::new(&definition.name);
        let mut skipped = 0usize;

        for (index, shape) in definition.shapes.iter().enumerate() {
            match self.synth.synthesize(shape) {
                Ok(output) => registry.register_output(output),
                Err(err) => {
                    warn!(
                        "zone {}: skipping {} shape at index {index}: {err}",
                        definition.name,
                        shape.kind(),
                    );
                    skipped += 1;
                }
            }
        }

        for (index, dome) in definition.domes.iter().enumerate() {
            match synthesize_dome(dome, &self.tuning) {
                Ok(surfaces) => registry.register(surfaces),
                Err(err) => {
                    warn!(
                        "zone {}: skipping dome at index {index}: {err}",
                        definition.name,
                    );
                    skipped += 1;
                }
            }
        }

        registry.register_collision_disabled(definition.collision_disabled_materials.clone());

        let mut areas = ZoneAreaRegistry::new();
        for area in &definition.areas {
            areas.register(area.clone());
        }

        ZoneConversion {
            liquid: registry.finalize(),
            areas,
            skipped_shapes: skipped,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec2;
    use crate::liquid::shape::ShapeDescriptor;
    use crate::liquid::types::LiquidType;

    fn rect(z: f32, depth: f32) -> ShapeDescriptor {
        ShapeDescriptor::FlatRectangle {
            liquid: LiquidType::Water,
            material: "t50_w1".to_string(),
            corner_a: Vec2::new(10.0, 10.0),
            corner_b: Vec2::ZERO,
            z,
            depth,
        }
    }

    #[test]
    fn test_convert_collects_surfaces_and_areas() {
        let def = ZoneDefinition::from_json_str(
            r#"{
                "name": "oasis",
                "shapes": [
                    {
                        "shape": "flat_rectangle",
                        "liquid": "water",
                        "material": "t50_w1",
                        "corner_a": [50.0, 50.0],
                        "corner_b": [-50.0, -50.0],
                        "z": 0.0,
                        "depth": 20.0
                    },
                    {
                        "shape": "volume",
                        "liquid": "water",
                        "corner_a": [-10.0, -10.0],
                        "corner_b": [10.0, 10.0],
                        "high_z": -20.0,
                        "low_z": -30.0
                    }
                ],
                "collision_disabled_materials": ["t25_sand1"],
                "areas": [{"name": "Oasis of Marr"}]
            }"#,
        )
        .unwrap();

        let result = ZoneBuilder::default().convert(&def);
        assert_eq!(result.liquid.zone, "oasis");
        assert_eq!(result.liquid.surfaces.len(), 2);
        assert_eq!(result.liquid.volumes.len(), 1);
        assert_eq!(result.liquid.collision_disabled_materials, vec!["t25_sand1"]);
        assert_eq!(result.areas.len(), 1);
        assert_eq!(result.skipped_shapes, 0);
    }

    #[test]
    fn test_bad_shape_skipped_rest_converted() {
        let def = ZoneDefinition {
            name: "qeynos".to_string(),
            shapes: vec![
                rect(0.0, 0.0),  // degenerate depth
                rect(10.0, 5.0), // valid
            ],
            domes: vec![],
            collision_disabled_materials: vec![],
            areas: vec![],
        };
        let result = ZoneBuilder::default().convert(&def);
        assert_eq!(result.skipped_shapes, 1);
        assert_eq!(result.liquid.surfaces.len(), 2);
        assert_eq!(result.liquid.surfaces[0].top_z, 10.0);
    }

    #[test]
    fn test_all_shapes_bad_yields_empty_set() {
        let def = ZoneDefinition {
            name: "blackburrow".to_string(),
            shapes: vec![rect(0.0, -1.0)],
            domes: vec![],
            collision_disabled_materials: vec![],
            areas: vec![],
        };
        let result = ZoneBuilder::default().convert(&def);
        assert_eq!(result.skipped_shapes, 1);
        assert!(result.liquid.surfaces.is_empty());
    }
}
