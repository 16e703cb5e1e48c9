//! Radar sweep scene
//!
//! Concentric rings, a rotating gradient wedge, and fixed target blips,
//! rendered as an egui display list once per frame.

pub mod data;
mod renderer;

pub use data::{SweepGeometry, SweepState, Target, RING_COUNT, WEDGE_HALF_ANGLE};
pub use renderer::SweepRenderer;
