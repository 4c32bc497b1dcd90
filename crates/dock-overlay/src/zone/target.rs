//! Dock target geometry

use serde::Serialize;

use crate::dock::DockBinding;
use crate::layout::{LayoutSnapshot, Region};
use crate::math::Rect;
use super::{DockKind, CORNER_SIZE, SIDE_THICKNESS};

/// Sizes used when carving a region into dock targets
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ZoneGeometry {
    /// Side length of the corner squares
    pub corner_size: f32,
    /// Thickness of the edge strips
    pub side_thickness: f32,
}

impl Default for ZoneGeometry {
    fn default() -> Self {
        Self {
            corner_size: CORNER_SIZE,
            side_thickness: SIDE_THICKNESS,
        }
    }
}

impl ZoneGeometry {
    /// Target rectangle in host space (origin bottom-left, Y up)
    ///
    /// Strip lengths are clamped at zero for regions narrower than two
    /// corners; such strips have no area and are never hit.
    pub fn host_rect(&self, kind: DockKind, region: &Region) -> Rect {
        let c = self.corner_size;
        let t = self.side_thickness;
        let strip_w = (region.width - 2.0 * c).max(0.0);
        let strip_h = (region.height - 2.0 * c).max(0.0);
        let right = region.x + region.width;
        let far = region.y + region.height;

        match kind {
            DockKind::CornerTopLeft => Rect::new(region.x, region.y, c, c),
            DockKind::CornerTopRight => Rect::new(right - c, region.y, c, c),
            DockKind::CornerBottomLeft => Rect::new(region.x, far - c, c, c),
            DockKind::CornerBottomRight => Rect::new(right - c, far - c, c, c),
            DockKind::SideTop => Rect::new(region.x + c, region.y, strip_w, t),
            DockKind::SideBottom => Rect::new(region.x + c, far - t, strip_w, t),
            DockKind::SideLeft => Rect::new(region.x, region.y + c, t, strip_h),
            DockKind::SideRight => Rect::new(right - t, region.y + c, t, strip_h),
        }
    }
}

/// One candidate snap zone, positioned in screen space
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DockTarget {
    /// Which of the eight zones this is
    pub kind: DockKind,
    /// Index of the owning region in the snapshot
    pub region_index: usize,
    /// Screen-space rectangle (origin top-left, Y down)
    pub rect: Rect,
}

impl DockTarget {
    /// Stable element id, e.g. `corner-top-left-0`
    pub fn id(&self) -> String {
        format!("{}-{}", self.kind.as_str(), self.region_index)
    }

    /// Binding that docking onto this target would create
    #[inline]
    pub fn binding(&self) -> DockBinding {
        DockBinding::new(self.kind, self.region_index)
    }
}

/// Generate the eight targets of one region
pub fn targets_for_region(
    region: &Region,
    region_index: usize,
    window_height: f32,
    geometry: &ZoneGeometry,
) -> Vec<DockTarget> {
    DockKind::ALL
        .into_iter()
        .map(|kind| DockTarget {
            kind,
            region_index,
            rect: geometry.host_rect(kind, region).flip_y(window_height),
        })
        .collect()
}

/// Generate targets for every region of a snapshot, in region order
pub fn generate_targets(snapshot: &LayoutSnapshot, geometry: &ZoneGeometry) -> Vec<DockTarget> {
    snapshot
        .regions
        .iter()
        .enumerate()
        .flat_map(|(index, region)| {
            targets_for_region(region, index, snapshot.window_height(), geometry)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::Size;
    use crate::zone::TARGETS_PER_REGION;

    fn find(targets: &[DockTarget], kind: DockKind) -> Rect {
        targets.iter().find(|t| t.kind == kind).unwrap().rect
    }

    fn assert_rect(actual: Rect, x: f32, y: f32, w: f32, h: f32) {
        assert!((actual.x - x).abs() < 0.001, "x: {} != {}", actual.x, x);
        assert!((actual.y - y).abs() < 0.001, "y: {} != {}", actual.y, y);
        assert!((actual.width - w).abs() < 0.001, "w: {} != {}", actual.width, w);
        assert!((actual.height - h).abs() < 0.001, "h: {} != {}", actual.height, h);
    }

    #[test]
    fn test_corner_squares_are_flush() {
        let region = Region::new(100.0, 50.0, 400.0, 300.0);
        let targets = targets_for_region(&region, 0, 600.0, &ZoneGeometry::default());

        assert_rect(find(&targets, DockKind::CornerTopLeft), 100.0, 510.0, 40.0, 40.0);
        assert_rect(find(&targets, DockKind::CornerTopRight), 460.0, 510.0, 40.0, 40.0);
        assert_rect(find(&targets, DockKind::CornerBottomLeft), 100.0, 250.0, 40.0, 40.0);
        assert_rect(find(&targets, DockKind::CornerBottomRight), 460.0, 250.0, 40.0, 40.0);
    }

    #[test]
    fn test_strips_span_between_corners() {
        let region = Region::new(100.0, 50.0, 400.0, 300.0);
        let targets = targets_for_region(&region, 0, 600.0, &ZoneGeometry::default());

        assert_rect(find(&targets, DockKind::SideTop), 140.0, 530.0, 320.0, 20.0);
        assert_rect(find(&targets, DockKind::SideBottom), 140.0, 250.0, 320.0, 20.0);
        assert_rect(find(&targets, DockKind::SideLeft), 100.0, 290.0, 20.0, 220.0);
        assert_rect(find(&targets, DockKind::SideRight), 480.0, 290.0, 20.0, 220.0);

        // Horizontal strips start at the left corner's inner edge and stop at the right corner
        let top = find(&targets, DockKind::SideTop);
        let left_corner = find(&targets, DockKind::CornerTopLeft);
        let right_corner = find(&targets, DockKind::CornerTopRight);
        assert!((top.x - left_corner.right()).abs() < 0.001);
        assert!((top.right() - right_corner.x).abs() < 0.001);

        // Vertical strips sit between the two corners on their edge
        let left = find(&targets, DockKind::SideLeft);
        let lower = find(&targets, DockKind::CornerBottomLeft);
        assert!((left.y - lower.bottom()).abs() < 0.001);
        assert!((left.bottom() - left_corner.y).abs() < 0.001);
    }

    #[test]
    fn test_small_region_strips_clamped() {
        let region = Region::new(0.0, 0.0, 60.0, 50.0);
        let targets = targets_for_region(&region, 3, 100.0, &ZoneGeometry::default());

        assert_eq!(targets.len(), TARGETS_PER_REGION);
        assert!((find(&targets, DockKind::SideTop).width - 0.0).abs() < 0.001);
        assert!((find(&targets, DockKind::SideLeft).height - 0.0).abs() < 0.001);
        assert!(find(&targets, DockKind::SideTop).is_empty());
        assert!(targets.iter().all(|t| t.region_index == 3));
    }

    #[test]
    fn test_generate_targets_orders_by_region() {
        let snapshot = LayoutSnapshot::new(
            Size::new(800.0, 600.0),
            vec![
                Region::new(0.0, 0.0, 400.0, 600.0),
                Region::new(400.0, 0.0, 400.0, 600.0),
            ],
        );
        let targets = generate_targets(&snapshot, &ZoneGeometry::default());

        assert_eq!(targets.len(), 2 * TARGETS_PER_REGION);
        assert!(targets[..8].iter().all(|t| t.region_index == 0));
        assert!(targets[8..].iter().all(|t| t.region_index == 1));
        assert_eq!(targets[0].kind, DockKind::CornerTopLeft);
        assert_eq!(targets[8].id(), "corner-top-left-1");
    }

    #[test]
    fn test_custom_geometry() {
        let geometry = ZoneGeometry { corner_size: 10.0, side_thickness: 5.0 };
        let region = Region::new(0.0, 0.0, 100.0, 100.0);
        let targets = targets_for_region(&region, 0, 100.0, &geometry);

        assert_rect(find(&targets, DockKind::SideTop), 10.0, 95.0, 80.0, 5.0);
    }
}
