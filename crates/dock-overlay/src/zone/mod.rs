//! Dock zone generation
//!
//! Every region in a layout snapshot gets eight candidate dock targets:
//! four corner squares and four edge strips between them. Targets are
//! recreated from scratch for every snapshot and never mutated.

mod kind;
mod target;
mod generator;

pub use kind::{DockKind, DockKindError};
pub use target::{generate_targets, targets_for_region, DockTarget, ZoneGeometry};
pub use generator::{Zone, ZoneGenerator};

/// Side length of the corner targets
pub const CORNER_SIZE: f32 = 40.0;

/// Thickness of the edge strip targets
pub const SIDE_THICKNESS: f32 = 20.0;

/// Number of targets generated per region
pub const TARGETS_PER_REGION: usize = 8;
