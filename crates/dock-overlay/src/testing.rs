//! Recording mocks for testing without a browser
//!
//! [`MockSurface`] and [`MockElement`] stand in for the DOM, and
//! [`MockChannel`] records everything sent to the host.

use std::cell::RefCell;
use std::rc::Rc;

use crate::bridge::HostChannel;
use crate::math::{Rect, Size, Vec2};
use crate::render::{Renderable, Surface};
use crate::zone::DockTarget;

/// In-memory element
#[derive(Clone, Debug, PartialEq)]
pub struct MockElement {
    position: Vec2,
    size: Size,
    visible: bool,
    highlighted: bool,
    rotated: bool,
}

impl MockElement {
    /// Visible, unrotated element occupying `rect`
    pub fn new(rect: Rect) -> Self {
        Self {
            position: rect.position(),
            size: rect.size(),
            visible: true,
            highlighted: false,
            rotated: false,
        }
    }

    pub fn position(&self) -> Vec2 {
        self.position
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub fn highlighted(&self) -> bool {
        self.highlighted
    }

    pub fn rotated(&self) -> bool {
        self.rotated
    }

    pub fn set_size(&mut self, size: Size) {
        self.size = size;
    }
}

impl Renderable for MockElement {
    fn bounds(&self) -> Rect {
        if self.rotated {
            // 90 degrees clockwise about the bottom-left corner
            Rect::new(
                self.position.x,
                self.position.y + self.size.height,
                self.size.height,
                self.size.width,
            )
        } else {
            Rect::from_pos_size(self.position, self.size)
        }
    }

    fn size(&self) -> Size {
        self.size
    }

    fn set_position(&mut self, position: Vec2) {
        self.position = position;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        self.highlighted = highlighted;
    }

    fn set_rotated(&mut self, rotated: bool) {
        self.rotated = rotated;
    }
}

/// Surface that counts dock target visuals and reports fixed regions
#[derive(Debug, Default)]
pub struct MockSurface {
    created: usize,
    removed: usize,
    interactive: Vec<Rect>,
}

impl MockSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// Dock target visuals currently alive
    pub fn live_targets(&self) -> usize {
        self.created - self.removed
    }

    /// Dock target visuals removed so far
    pub fn removed_targets(&self) -> usize {
        self.removed
    }

    /// Add a rectangle to the interactive-region list
    pub fn add_interactive(&mut self, rect: Rect) {
        self.interactive.push(rect);
    }
}

impl Surface for MockSurface {
    type Element = MockElement;

    fn create_target(&mut self, target: &DockTarget, visible: bool) -> Option<MockElement> {
        self.created += 1;
        let mut element = MockElement::new(target.rect);
        element.visible = visible;
        Some(element)
    }

    fn remove_target(&mut self, _element: MockElement) {
        self.removed += 1;
    }

    fn interactive_regions(&self) -> Vec<Rect> {
        self.interactive.clone()
    }
}

/// Host channel recording every message
///
/// Clones share the same log, so a test can keep one handle while the
/// bridge owns another.
#[derive(Clone, Debug, Default)]
pub struct MockChannel {
    sent: Rc<RefCell<Vec<String>>>,
}

impl MockChannel {
    pub fn new() -> Self {
        Self::default()
    }

    /// Messages sent so far
    pub fn sent(&self) -> Vec<String> {
        self.sent.borrow().clone()
    }

    /// Most recent message
    pub fn last(&self) -> Option<String> {
        self.sent.borrow().last().cloned()
    }

    pub fn clear(&self) {
        self.sent.borrow_mut().clear();
    }
}

impl HostChannel for MockChannel {
    fn post_message(&mut self, message: &str) {
        self.sent.borrow_mut().push(message.to_string());
    }
}
