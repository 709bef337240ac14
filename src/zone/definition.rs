//! Declarative zone data tables
//!
//! One JSON document per zone: the shape descriptors, domes, areas, and
//! material flags the conversion pass consumes. This is the only
//! inbound I/O in the crate.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::types::Result;
use crate::liquid::dome::DomeParams;
use crate::liquid::shape::ShapeDescriptor;
use crate::zone::area::ZoneArea;

/// Everything a zone declares about its liquids and areas.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ZoneDefinition {
    /// Short zone identifier, used for logging and output file names
    pub name: String,
    #[serde(default)]
    pub shapes: Vec<ShapeDescriptor>,
    #[serde(default)]
    pub domes: Vec<DomeParams>,
    /// Material names whose solid-world collision is suppressed
    #[serde(default)]
    pub collision_disabled_materials: Vec<String>,
    #[serde(default)]
    pub areas: Vec<ZoneArea>,
}

impl ZoneDefinition {
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &Path) -> Result<Self> {
        Self::from_json_str(&fs::read_to_string(path)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const GUKTOP: &str = r#"{
        "name": "guktop",
        "shapes": [
            {
                "shape": "flat_rectangle",
                "liquid": "water",
                "material": "t50_wguk1",
                "corner_a": [60.0, 80.0],
                "corner_b": [-20.0, -40.0],
                "z": -10.0,
                "depth": 50.0
            }
        ],
        "collision_disabled_materials": ["t50_wguk1"],
        "areas": [{"name": "Upper Guk"}]
    }"#;

    #[test]
    fn test_definition_from_json_str() {
        let def = ZoneDefinition::from_json_str(GUKTOP).unwrap();
        assert_eq!(def.name, "guktop");
        assert_eq!(def.shapes.len(), 1);
        assert!(def.domes.is_empty());
        assert_eq!(def.collision_disabled_materials, vec!["t50_wguk1"]);
        assert_eq!(def.areas[0].name, "Upper Guk");
    }

    #[test]
    fn test_definition_from_json_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(GUKTOP.as_bytes()).unwrap();
        let def = ZoneDefinition::from_json_file(file.path()).unwrap();
        assert_eq!(def.name, "guktop");
    }

    #[test]
    fn test_definition_rejects_unknown_shape_tag() {
        let json = r#"{"name": "bad", "shapes": [{"shape": "pentagon"}]}"#;
        assert!(ZoneDefinition::from_json_str(json).is_err());
    }

    #[test]
    fn test_definition_minimal() {
        let def = ZoneDefinition::from_json_str(r#"{"name": "arena"}"#).unwrap();
        assert!(def.shapes.is_empty());
        assert!(def.areas.is_empty());
    }
}
