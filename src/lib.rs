//! Zonetide - liquid-surface geometry synthesis for game-zone conversion
//!
//! Turns parametric liquid shape descriptions (rectangles, slants,
//! trapezoids, cylinders, domes, ...) into watertight, depth-extruded
//! surface geometry for a target engine's renderer and collision system.

pub mod core;
pub mod math;
pub mod liquid;
pub mod zone;
