//! Dock placement
//!
//! Maps a dock target kind and its region to the screen position of the
//! docked element. Placement is a pure function of its inputs and is re-run
//! on every layout update while a binding is active.

use serde::{Deserialize, Serialize};

use crate::layout::{LayoutSnapshot, Region};
use crate::math::{Size, Vec2};
use crate::render::Renderable;
use crate::zone::DockKind;

/// Association between the docked element and one dock target
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DockBinding {
    pub kind: DockKind,
    pub region_index: usize,
}

impl DockBinding {
    /// Create a new binding
    #[inline]
    pub const fn new(kind: DockKind, region_index: usize) -> Self {
        Self { kind, region_index }
    }

    /// Placement for this binding under `snapshot`, if its region still exists
    pub fn resolve(&self, snapshot: &LayoutSnapshot, element: Size) -> Option<Placement> {
        let region = snapshot.region(self.region_index)?;
        Some(compute_placement(self.kind, region, element, snapshot.window_height()))
    }
}

/// Screen position and orientation of a docked element
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Placement {
    /// Left edge in screen space
    pub x: f32,
    /// Top edge in screen space (already flipped)
    pub y: f32,
    /// Rotated 90 degrees about the bottom-left corner, vertical presentation
    pub rotated: bool,
}

impl Placement {
    /// Top-left corner as a vector
    #[inline]
    pub fn position(&self) -> Vec2 {
        Vec2::new(self.x, self.y)
    }
}

/// Compute where an element of `element` size lands when docked to `kind` of `region`
///
/// `region` is in host space (Y up); the result is in screen space (Y down).
/// Side-left and side-right placements are rotated in place, so the element's
/// width becomes its vertical extent in the centring term.
pub fn compute_placement(
    kind: DockKind,
    region: &Region,
    element: Size,
    window_height: f32,
) -> Placement {
    let ew = element.width;
    let eh = element.height;
    let near_top = window_height - region.y - eh;
    let far_top = window_height - (region.y + region.height);
    let centered_x = region.x + (region.width - ew) / 2.0;
    let right_x = region.x + region.width - ew;
    let vertical_y = window_height - region.y - (region.height + ew) / 2.0;

    let (x, y) = match kind {
        DockKind::CornerTopLeft => (region.x, near_top),
        DockKind::CornerTopRight => (right_x, near_top),
        DockKind::CornerBottomLeft => (region.x, far_top),
        DockKind::CornerBottomRight => (right_x, far_top),
        DockKind::SideTop => (centered_x, near_top),
        DockKind::SideBottom => (centered_x, far_top),
        DockKind::SideLeft => (region.x, vertical_y),
        DockKind::SideRight => (region.x + region.width - eh, vertical_y),
    };

    Placement {
        x,
        y,
        rotated: kind.is_vertical(),
    }
}

/// Move and orient `element` according to `placement`
pub fn apply_placement<E: Renderable>(element: &mut E, placement: &Placement) {
    element.set_position(placement.position());
    element.set_rotated(placement.rotated);
}
