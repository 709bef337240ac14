//! Liquid-surface geometry synthesis
//!
//! The pipeline is small and strictly ordered:
//! 1. A [`shape::ShapeDescriptor`] arrives from a zone data table.
//! 2. [`synth::LiquidSynthesizer`] turns it into immutable
//!    [`surface::SynthesizedSurface`] records (or an implicit volume /
//!    discard box).
//! 3. [`registry::ZoneLiquidRegistry`] accumulates everything for one
//!    zone-conversion pass and finalizes into a
//!    [`registry::ZoneLiquidSet`] for the exporter.
//!
//! Synthesis is pure: no I/O, no shared state, no world scaling.

pub mod types;
pub mod shape;
pub mod surface;
pub mod synth;
pub mod dome;
pub mod registry;

pub use types::{LiquidType, SlantType};
pub use shape::ShapeDescriptor;
pub use surface::{DiscardBox, LiquidVolume, SynthesizedSurface};
pub use synth::{LiquidSynthesizer, Synthesized, SynthesisConfig};
pub use dome::{synthesize_dome, DomeParams, DomeTuning};
pub use registry::{ZoneLiquidRegistry, ZoneLiquidSet};
