//! Overlay configuration

use serde::{Deserialize, Serialize};

use crate::zone::ZoneGeometry;

/// Tunables for the overlay; every field has a default
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct OverlayConfig {
    /// Periodic interactive-region report interval (ms)
    pub report_interval_ms: f64,
    /// Delay of the region resync after a panel opens or closes (ms)
    pub resync_delay_ms: f64,
    /// Web heartbeat driving timers (ms)
    pub heartbeat_ms: u32,
    /// Side of the square corner targets
    pub corner_size: f32,
    /// Thickness of the edge strip targets
    pub side_thickness: f32,
    /// Class marking elements reported as interactive regions
    pub interactive_marker: String,
    /// Class given to dock target elements
    pub zone_class: String,
    /// Base URL script bodies are fetched from
    pub scripts_base_url: String,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            report_interval_ms: 2000.0,
            resync_delay_ms: 100.0,
            heartbeat_ms: 50,
            corner_size: 40.0,
            side_thickness: 20.0,
            interactive_marker: "clickable-area".to_string(),
            zone_class: "anchor-zone".to_string(),
            scripts_base_url: "./scripts/".to_string(),
        }
    }
}

impl OverlayConfig {
    /// Parse from JSON; an empty string yields the defaults
    pub fn from_json(raw: &str) -> Result<Self, serde_json::Error> {
        if raw.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_json::from_str(raw)
    }

    /// Dock target geometry
    pub fn geometry(&self) -> ZoneGeometry {
        ZoneGeometry {
            corner_size: self.corner_size,
            side_thickness: self.side_thickness,
        }
    }
}
