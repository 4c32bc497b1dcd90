//! Docking overlay for a browser view embedded in a native host window
//!
//! This crate provides the overlay's core functionality:
//! - Dock target generation from host layout snapshots
//! - Toolbar dragging with hit testing against dock targets
//! - Dock placement with host-to-screen coordinate flipping
//! - Host messaging and interactive-region reporting
//! - Panel visibility and the script catalog
//!
//! ## Architecture
//!
//! - [`math`]: Geometry types (`Vec2`, `Size`, `Rect`)
//! - [`layout`]: Host layout snapshots
//! - [`zone`]: Dock target kinds, geometry and rendered zones
//! - [`dock`]: Placement of a docked element
//! - [`input`]: Drag state machine
//! - [`bridge`]: Host channel, region reports and their schedule
//! - [`panels`]: Panel visibility
//! - [`catalog`]: Script catalog and the `SCRIPT_LOAD:` payload
//!
//! [`OverlayEngine`] owns all of the above and is the entry point.
//!
//! ## Example
//!
//! ```rust
//! use dock_overlay::testing::{MockChannel, MockElement, MockSurface};
//! use dock_overlay::{OverlayConfig, OverlayEngine, Rect};
//!
//! let mut engine = OverlayEngine::new(
//!     OverlayConfig::default(),
//!     MockSurface::new(),
//!     Some(MockChannel::new()),
//! );
//! engine.attach_toolbar(
//!     MockElement::new(Rect::new(0.0, 0.0, 20.0, 40.0)),
//!     MockElement::new(Rect::new(0.0, 0.0, 200.0, 40.0)),
//! );
//! engine.handle_host_message(
//!     r#"{"windows":[{"width":800,"height":600,"screen":{"areas":[{"x":0,"y":0,"width":800,"height":600}]}}]}"#,
//! );
//! assert_eq!(engine.zones().len(), 8);
//! ```
//!
//! ## Design Principles
//!
//! 1. **Pure Rust Core**: All state management is pure Rust, testable without a browser
//! 2. **Injected Time**: Timers take `now_ms`, so scheduling is deterministic in tests
//! 3. **Rendering Behind Traits**: The core only sees [`Renderable`] and [`Surface`]

pub mod bridge;
pub mod catalog;
pub mod dock;
pub mod input;
pub mod layout;
pub mod math;
pub mod panels;
pub mod render;
pub mod testing;
pub mod zone;

mod config;
mod engine;

// Browser bindings (only available with "wasm" feature)
#[cfg(feature = "wasm")]
pub mod web;

pub use bridge::{format_region_report, parse_region_report, HostBridge, HostChannel, ReportSchedule};
pub use catalog::{
    builtin_scripts, CatalogError, CatalogQuery, CatalogSession, CatalogState, ParameterValue,
    ScriptEntry, ScriptLoad, CATEGORIES, SCRIPT_LOAD_PREFIX,
};
pub use config::OverlayConfig;
pub use dock::{apply_placement, compute_placement, DockBinding, Placement};
pub use input::{DragController, DragOutcome, DragSession};
pub use layout::{LayoutError, LayoutSnapshot, Region};
pub use math::{Rect, Size, Vec2};
pub use panels::{PanelCoordinator, PanelId};
pub use render::{Renderable, Surface};
pub use zone::{DockKind, DockKindError, DockTarget, ZoneGenerator, ZoneGeometry};

pub use engine::OverlayEngine;
