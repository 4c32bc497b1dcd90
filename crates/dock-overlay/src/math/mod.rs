//! Core geometry types for the overlay
//!
//! Host layout, dock targets and on-screen elements all share these
//! value types. None of them know which coordinate convention they are in;
//! callers flip between host (Y-up) and screen (Y-down) space explicitly.

mod vec2;
mod rect;
mod size;

pub use vec2::Vec2;
pub use rect::Rect;
pub use size::Size;
