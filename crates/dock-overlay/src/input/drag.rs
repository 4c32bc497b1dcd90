//! Drag session state

use crate::math::Vec2;

/// State of an active drag, alive between pointer-down and pointer-up
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DragSession {
    /// Offset from the element's top-left corner to the pointer at grab time
    pub offset: Vec2,
    /// Latest pointer position (screen coords)
    pub pointer: Vec2,
}

impl DragSession {
    /// Start a session grabbing an element whose top-left is at `origin`
    #[inline]
    pub fn grab(pointer: Vec2, origin: Vec2) -> Self {
        Self {
            offset: pointer - origin,
            pointer,
        }
    }

    /// Where the element's top-left corner belongs for the current pointer
    #[inline]
    pub fn element_origin(&self) -> Vec2 {
        self.pointer - self.offset
    }
}
