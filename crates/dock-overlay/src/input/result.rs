//! Drag outcome type

use serde::Serialize;

use crate::zone::DockTarget;

/// Result of feeding a pointer event to the drag controller
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum DragOutcome {
    /// Event did not affect the drag (nothing bound, not dragging, missed the handle)
    Ignored,
    /// A drag started; the browser's default drag behaviour should be suppressed
    Started,
    /// The element moved
    Moved {
        /// Target under the pointer, if any
        hovered: Option<DockTarget>,
    },
    /// The drag ended
    Ended {
        /// Target the element was dropped on, if any
        target: Option<DockTarget>,
    },
}
