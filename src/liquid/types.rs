//! Liquid categorization enums

use serde::{Deserialize, Serialize};

/// Kind of liquid a surface or volume holds.
///
/// Determines shading and physics categorization downstream; synthesis
/// itself treats it as an opaque tag.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LiquidType {
    Water,
    GreenWater,
    Blood,
    Magma,
}

/// Which edge of a sloped liquid plane is elevated.
///
/// Convention: +X east, +Y north, +Z up.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SlantType {
    NorthHighSouthLow,
    SouthHighNorthLow,
    EastHighWestLow,
    WestHighEastLow,
}
