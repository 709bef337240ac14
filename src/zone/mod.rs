//! Zone data layer
//!
//! Deserializes declarative zone data tables and drives one
//! zone-conversion pass over them. All geometry work happens in
//! [`crate::liquid`]; this module only parses, dispatches, and
//! collects.

pub mod area;
pub mod builder;
pub mod definition;

pub use area::{ZoneArea, ZoneAreaRegistry};
pub use builder::{ZoneBuilder, ZoneConversion};
pub use definition::ZoneDefinition;
