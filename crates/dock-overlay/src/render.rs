//! Rendering capabilities required by the docking core
//!
//! The core never touches a concrete UI toolkit. Dock targets, the toolbar
//! and its drag handle are [`Renderable`] elements created and discovered
//! through a [`Surface`]. The `wasm` feature provides DOM-backed
//! implementations; [`crate::testing`] provides recording mocks.

use crate::math::{Rect, Size, Vec2};
use crate::zone::DockTarget;

/// A visual element the core can query and move
pub trait Renderable {
    /// Current on-screen bounding rectangle (after any rotation)
    fn bounds(&self) -> Rect;

    /// Unrotated layout size of the element
    fn size(&self) -> Size;

    /// Move the element's top-left corner to `position` in screen space,
    /// dropping any right/bottom anchoring it had
    fn set_position(&mut self, position: Vec2);

    /// Show the element and let it receive pointer input, or hide it
    /// and let input pass through
    fn set_visible(&mut self, visible: bool);

    /// Mark the element as the active one of its kind (hovered dock
    /// target, toolbar being dragged)
    fn set_highlighted(&mut self, highlighted: bool);

    /// Rotate 90 degrees about the bottom-left corner and switch to the
    /// vertical presentation, or restore the horizontal one
    fn set_rotated(&mut self, rotated: bool);
}

/// The shared visual tree the overlay renders into
pub trait Surface {
    /// Element type produced by this surface
    type Element: Renderable;

    /// Create the visual for one dock target, placed at `target.rect`
    ///
    /// Returns `None` if the visual could not be created; the target is
    /// then skipped.
    fn create_target(&mut self, target: &DockTarget, visible: bool) -> Option<Self::Element>;

    /// Remove a dock target visual previously created by this surface
    fn remove_target(&mut self, element: Self::Element);

    /// Bounding rectangles of every element marked as an interactive region
    fn interactive_regions(&self) -> Vec<Rect>;
}
