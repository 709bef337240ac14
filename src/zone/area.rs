//! Named trigger regions inside a zone
//!
//! Areas are axis-aligned boxes with display and audio metadata. They
//! are authored alongside liquid bodies in the same data tables but are
//! otherwise independent of liquid synthesis; they pass through the
//! conversion untouched apart from the world scale at the exporter
//! boundary.

use serde::{Deserialize, Serialize};

use crate::math::Aabb;

fn default_music_volume() -> f32 {
    1.0
}

/// One named region of a zone, made of one or more bounding boxes.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneArea {
    /// Display name shown when entering the area
    pub name: String,
    /// Enclosing area whose properties this one inherits, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub parent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub music_night: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_day: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ambient_night: Option<String>,
    #[serde(default = "default_music_volume")]
    pub music_volume: f32,
    #[serde(default)]
    pub music_loop: bool,
    /// Boxes that together make up the area footprint
    #[serde(default)]
    pub boxes: Vec<Aabb>,
}

/// Ordered collection of a zone's areas.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ZoneAreaRegistry {
    areas: Vec<ZoneArea>,
}

impl ZoneAreaRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(&mut self, area: ZoneArea) {
        self.areas.push(area);
    }

    pub fn areas(&self) -> &[ZoneArea] {
        &self.areas
    }

    pub fn len(&self) -> usize {
        self.areas.len()
    }

    pub fn is_empty(&self) -> bool {
        self.areas.is_empty()
    }

    /// Exporter-boundary helper: all box coordinates multiplied by `factor`.
    pub fn scaled(&self, factor: f32) -> Self {
        Self {
            areas: self
                .areas
                .iter()
                .map(|a| ZoneArea {
                    boxes: a.boxes.iter().map(|b| b.scaled(factor)).collect(),
                    ..a.clone()
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::Vec3;

    #[test]
    fn test_area_defaults_from_minimal_json() {
        let area: ZoneArea = serde_json::from_str(r#"{"name": "The Arena"}"#).unwrap();
        assert_eq!(area.name, "The Arena");
        assert_eq!(area.parent, None);
        assert_eq!(area.music_volume, 1.0);
        assert!(!area.music_loop);
        assert!(area.boxes.is_empty());
    }

    #[test]
    fn test_registry_preserves_order_and_scales() {
        let mut registry = ZoneAreaRegistry::new();
        registry.register(ZoneArea {
            name: "Docks".to_string(),
            parent: None,
            music_day: Some("track03".to_string()),
            music_night: None,
            ambient_day: None,
            ambient_night: None,
            music_volume: 0.5,
            music_loop: true,
            boxes: vec![Aabb::from_corners(
                Vec3::new(-10.0, -10.0, 0.0),
                Vec3::new(10.0, 10.0, 20.0),
            )],
        });
        registry.register(ZoneArea {
            name: "Gates".to_string(),
            parent: Some("Docks".to_string()),
            music_day: None,
            music_night: None,
            ambient_day: None,
            ambient_night: None,
            music_volume: 1.0,
            music_loop: false,
            boxes: vec![],
        });
        assert_eq!(registry.len(), 2);
        assert_eq!(registry.areas()[0].name, "Docks");

        let scaled = registry.scaled(0.5);
        assert_eq!(scaled.areas()[0].boxes[0].max, Vec3::new(5.0, 5.0, 10.0));
        // metadata passes through untouched
        assert_eq!(scaled.areas()[1].parent.as_deref(), Some("Docks"));
    }
}
