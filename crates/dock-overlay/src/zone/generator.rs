//! Rendered dock zones

use log::{debug, warn};

use crate::layout::LayoutSnapshot;
use crate::math::Vec2;
use crate::render::{Renderable, Surface};
use super::{generate_targets, DockTarget, ZoneGeometry};

/// A dock target together with its visual
pub struct Zone<E> {
    pub target: DockTarget,
    pub element: E,
}

/// Builds and owns the visuals for every dock target of the current snapshot
pub struct ZoneGenerator<S: Surface> {
    geometry: ZoneGeometry,
    zones: Vec<Zone<S::Element>>,
    /// Index of the zone currently marked as hovered
    hovered: Option<usize>,
}

impl<S: Surface> Default for ZoneGenerator<S> {
    fn default() -> Self {
        Self::new(ZoneGeometry::default())
    }
}

impl<S: Surface> ZoneGenerator<S> {
    /// Create an empty generator
    pub fn new(geometry: ZoneGeometry) -> Self {
        Self {
            geometry,
            zones: Vec::new(),
            hovered: None,
        }
    }

    /// Geometry used for new targets
    #[inline]
    pub fn geometry(&self) -> &ZoneGeometry {
        &self.geometry
    }

    /// Rendered zones in generation order
    #[inline]
    pub fn zones(&self) -> &[Zone<S::Element>] {
        &self.zones
    }

    /// Number of rendered targets
    #[inline]
    pub fn len(&self) -> usize {
        self.zones.len()
    }

    /// Check if no targets are rendered
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    /// Replace every rendered target with fresh ones for `snapshot`
    ///
    /// With `highlight` off the targets still exist (so their bounds can be
    /// queried) but are invisible and let pointer input through.
    pub fn rebuild(&mut self, surface: &mut S, snapshot: &LayoutSnapshot, highlight: bool) {
        self.clear(surface);

        for target in generate_targets(snapshot, &self.geometry) {
            match surface.create_target(&target, highlight) {
                Some(element) => self.zones.push(Zone { target, element }),
                None => warn!("[zones] could not create {}", target.id()),
            }
        }

        debug!(
            "[zones] rebuilt {} targets for {} regions (highlight={})",
            self.zones.len(),
            snapshot.regions.len(),
            highlight
        );
    }

    /// Remove every rendered target
    pub fn clear(&mut self, surface: &mut S) {
        self.hovered = None;
        for zone in self.zones.drain(..) {
            surface.remove_target(zone.element);
        }
    }

    /// Show or hide all targets, marking at most one as hovered
    pub fn set_highlight(&mut self, visible: bool, hovered: Option<usize>) {
        let hovered = if visible { hovered } else { None };
        for (index, zone) in self.zones.iter_mut().enumerate() {
            zone.element.set_visible(visible);
            zone.element.set_highlighted(hovered == Some(index));
        }
        self.hovered = hovered;
    }

    /// Index of the zone currently marked as hovered
    #[inline]
    pub fn hovered(&self) -> Option<usize> {
        self.hovered
    }

    /// Index of the first zone whose rendered bounds contain `point`
    ///
    /// Bounds are inclusive on all four edges. Zones with no area are skipped.
    pub fn index_at(&self, point: Vec2) -> Option<usize> {
        self.zones.iter().position(|zone| {
            let bounds = zone.element.bounds();
            !bounds.is_empty() && bounds.contains_inclusive(point)
        })
    }

    /// First target whose rendered bounds contain `point`
    pub fn target_at(&self, point: Vec2) -> Option<DockTarget> {
        self.index_at(point).map(|index| self.zones[index].target)
    }
}
