//! Auxiliary panel visibility

use std::fmt;
use std::str::FromStr;

use log::debug;
use serde::{Deserialize, Serialize};

/// Panels hosted inside the overlay
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum PanelId {
    /// Script catalog browser
    Catalog,
    /// Embedded painting tool
    PaintTool,
}

impl PanelId {
    pub const ALL: [PanelId; 2] = [PanelId::Catalog, PanelId::PaintTool];

    pub fn as_str(&self) -> &'static str {
        match self {
            PanelId::Catalog => "catalog",
            PanelId::PaintTool => "paint-tool",
        }
    }

    fn slot(self) -> usize {
        match self {
            PanelId::Catalog => 0,
            PanelId::PaintTool => 1,
        }
    }
}

impl fmt::Display for PanelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PanelId {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PanelId::ALL
            .into_iter()
            .find(|panel| panel.as_str() == s)
            .ok_or_else(|| format!("unknown panel: {}", s))
    }
}

type ChangeHandler = Box<dyn FnMut(bool)>;

#[derive(Default)]
struct PanelSlot {
    open: bool,
    on_change: Option<ChangeHandler>,
}

/// Open/closed state per panel with one change subscriber each
///
/// Transitions return true only when the state actually changed; the
/// subscriber fires under the same condition.
#[derive(Default)]
pub struct PanelCoordinator {
    slots: [PanelSlot; 2],
}

impl PanelCoordinator {
    /// Create with every panel closed
    pub fn new() -> Self {
        Self::default()
    }

    /// Check if `panel` is open
    #[inline]
    pub fn is_open(&self, panel: PanelId) -> bool {
        self.slots[panel.slot()].open
    }

    /// Register the change subscriber for `panel` (last registration wins)
    pub fn on_change(&mut self, panel: PanelId, handler: impl FnMut(bool) + 'static) {
        self.slots[panel.slot()].on_change = Some(Box::new(handler));
    }

    /// Open `panel`
    pub fn open(&mut self, panel: PanelId) -> bool {
        self.set(panel, true)
    }

    /// Close `panel`
    pub fn close(&mut self, panel: PanelId) -> bool {
        self.set(panel, false)
    }

    /// Flip `panel`; always a change
    pub fn toggle(&mut self, panel: PanelId) -> bool {
        let open = !self.is_open(panel);
        self.set(panel, open)
    }

    /// Panels currently open
    pub fn open_panels(&self) -> Vec<PanelId> {
        PanelId::ALL.into_iter().filter(|p| self.is_open(*p)).collect()
    }

    fn set(&mut self, panel: PanelId, open: bool) -> bool {
        let slot = &mut self.slots[panel.slot()];
        if slot.open == open {
            return false;
        }
        slot.open = open;
        debug!("[panels] {} {}", panel, if open { "opened" } else { "closed" });
        if let Some(handler) = slot.on_change.as_mut() {
            handler(open);
        }
        true
    }
}
