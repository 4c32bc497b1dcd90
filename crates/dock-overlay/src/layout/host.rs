//! Wire shape of the layout message pushed by the host
//!
//! ```json
//! { "windows": [ { "width": 1920, "height": 1080,
//!                  "screen": { "areas": [ { "x": 0, "y": 0, "width": 960, "height": 1080 } ] } } ] }
//! ```

use serde::{Deserialize, Serialize};

/// Top-level host layout message
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HostLayout {
    #[serde(default)]
    pub windows: Vec<HostWindow>,
}

/// One host window
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HostWindow {
    pub width: f32,
    pub height: f32,
    #[serde(default)]
    pub screen: HostScreen,
}

/// Screen contents of a host window
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HostScreen {
    #[serde(default)]
    pub areas: Vec<HostArea>,
}

/// One area in host coordinates (origin bottom-left, Y up)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct HostArea {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}
