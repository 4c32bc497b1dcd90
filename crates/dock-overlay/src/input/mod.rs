//! Pointer-driven dragging of the dockable element
//!
//! Provides the `Idle -> Dragging -> Idle` state machine that moves the
//! element under the pointer and tracks which dock target it hovers.

mod controller;
mod drag;
mod result;

pub use controller::DragController;
pub use drag::DragSession;
pub use result::DragOutcome;
