//! Host layout snapshots
//!
//! The host describes its window and the rectangular areas inside it. Each
//! message replaces the previous snapshot wholesale; there is no diffing.
//! Region order is significant: a [`crate::DockBinding`] refers to regions by
//! index and is re-resolved against whatever region sits at that index in
//! the next snapshot.

mod host;

pub use host::{HostArea, HostLayout, HostScreen, HostWindow};

use thiserror::Error;

use crate::math::{Rect, Size};

/// Rectangle in host-window coordinates (origin bottom-left, Y up)
pub type Region = Rect;

/// Reasons a host layout message is rejected
#[derive(Debug, Error)]
pub enum LayoutError {
    #[error("malformed layout message: {0}")]
    Malformed(#[from] serde_json::Error),

    #[error("layout message has no windows")]
    NoWindow,

    #[error("first window has no areas")]
    NoRegions,

    #[error("window has invalid dimensions {width}x{height}")]
    InvalidWindow { width: f32, height: f32 },

    #[error("area {index} has invalid dimensions {width}x{height}")]
    InvalidRegion { index: usize, width: f32, height: f32 },
}

/// Complete description of the host window at one point in time
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayoutSnapshot {
    /// Host window dimensions
    pub window: Size,
    /// Regions in host order
    pub regions: Vec<Region>,
}

impl LayoutSnapshot {
    /// Create a snapshot from window dimensions and regions
    pub fn new(window: Size, regions: Vec<Region>) -> Self {
        Self { window, regions }
    }

    /// Parse a raw host message
    ///
    /// Only the first window is consulted. A window without areas means the
    /// host has no layout to offer yet and is reported as [`LayoutError::NoRegions`].
    pub fn from_host_json(raw: &str) -> Result<Self, LayoutError> {
        let layout: HostLayout = serde_json::from_str(raw)?;
        Self::from_host_layout(layout)
    }

    /// Convert the host wire shape into a snapshot, applying shape checks
    pub fn from_host_layout(layout: HostLayout) -> Result<Self, LayoutError> {
        let window = layout.windows.into_iter().next().ok_or(LayoutError::NoWindow)?;

        if !is_valid_extent(window.width) || !is_valid_extent(window.height) {
            return Err(LayoutError::InvalidWindow {
                width: window.width,
                height: window.height,
            });
        }

        let areas = window.screen.areas;
        if areas.is_empty() {
            return Err(LayoutError::NoRegions);
        }

        let mut regions = Vec::with_capacity(areas.len());
        for (index, area) in areas.into_iter().enumerate() {
            if !is_valid_extent(area.width) || !is_valid_extent(area.height) {
                return Err(LayoutError::InvalidRegion {
                    index,
                    width: area.width,
                    height: area.height,
                });
            }
            regions.push(Region::new(area.x, area.y, area.width, area.height));
        }

        Ok(Self {
            window: Size::new(window.width, window.height),
            regions,
        })
    }

    /// Host window height, used for every Y flip
    #[inline]
    pub fn window_height(&self) -> f32 {
        self.window.height
    }

    /// Look up a region by its stable index
    #[inline]
    pub fn region(&self, index: usize) -> Option<&Region> {
        self.regions.get(index)
    }
}

fn is_valid_extent(value: f32) -> bool {
    value.is_finite() && value >= 0.0
}
