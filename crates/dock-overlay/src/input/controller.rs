//! Drag controller state machine

use log::debug;

use crate::math::Vec2;
use crate::render::{Renderable, Surface};
use crate::zone::{DockTarget, ZoneGenerator};
use super::{DragOutcome, DragSession};

type StartHandler = Box<dyn FnMut()>;
type EndHandler = Box<dyn FnMut(Option<DockTarget>)>;

/// Handle and dragged element bound by [`DragController::initialize`]
struct Bound<E> {
    handle: E,
    element: E,
}

/// Tracks the drag lifecycle of a single element
///
/// Until [`initialize`](Self::initialize) is called every operation is a
/// no-op returning [`DragOutcome::Ignored`]. Subscribers are single slots;
/// registering again replaces the previous handler.
pub struct DragController<E> {
    bound: Option<Bound<E>>,
    session: Option<DragSession>,
    on_start: Option<StartHandler>,
    on_end: Option<EndHandler>,
}

impl<E> Default for DragController<E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<E> DragController<E> {
    /// Create an uninitialized controller
    pub fn new() -> Self {
        Self {
            bound: None,
            session: None,
            on_start: None,
            on_end: None,
        }
    }

    /// Check if a drag is in progress
    #[inline]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Current drag session
    #[inline]
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    /// The dragged element
    pub fn element(&self) -> Option<&E> {
        self.bound.as_ref().map(|b| &b.element)
    }

    /// The dragged element, mutably
    pub fn element_mut(&mut self) -> Option<&mut E> {
        self.bound.as_mut().map(|b| &mut b.element)
    }

    /// Register the drag-start subscriber (last registration wins)
    pub fn on_drag_start(&mut self, handler: impl FnMut() + 'static) {
        self.on_start = Some(Box::new(handler));
    }

    /// Register the drag-end subscriber (last registration wins)
    pub fn on_drag_end(&mut self, handler: impl FnMut(Option<DockTarget>) + 'static) {
        self.on_end = Some(Box::new(handler));
    }

    /// Drop the bound elements and any drag in progress
    pub fn release(&mut self) -> Option<(E, E)> {
        self.session = None;
        self.bound.take().map(|b| (b.handle, b.element))
    }
}

impl<E: Renderable> DragController<E> {
    /// Bind the drag handle and the element it moves
    ///
    /// Pointer-down is only honoured inside the handle, widened to whole
    /// pixels since pointer coordinates are integral while docked
    /// placements can be fractional. Move and up are accepted anywhere so a
    /// drag survives the pointer leaving the handle.
    pub fn initialize(&mut self, handle: E, element: E) {
        self.session = None;
        self.bound = Some(Bound { handle, element });
    }

    /// Handle pointer down
    pub fn pointer_down<S>(&mut self, pointer: Vec2, zones: &mut ZoneGenerator<S>) -> DragOutcome
    where
        S: Surface<Element = E>,
    {
        let bound = match self.bound.as_mut() {
            Some(bound) => bound,
            None => return DragOutcome::Ignored,
        };
        if self.session.is_some() || !bound.handle.bounds().snap_out().contains_inclusive(pointer) {
            return DragOutcome::Ignored;
        }

        let origin = bound.element.bounds().position();
        self.session = Some(DragSession::grab(pointer, origin));
        bound.element.set_highlighted(true);
        zones.set_highlight(true, None);
        debug!("[drag] started at ({}, {})", pointer.x, pointer.y);

        if let Some(handler) = self.on_start.as_mut() {
            handler();
        }
        DragOutcome::Started
    }

    /// Handle pointer move
    ///
    /// The element leaves any docked orientation and follows the pointer;
    /// the target under the pointer is highlighted.
    pub fn pointer_move<S>(&mut self, pointer: Vec2, zones: &mut ZoneGenerator<S>) -> DragOutcome
    where
        S: Surface<Element = E>,
    {
        let (bound, session) = match (self.bound.as_mut(), self.session.as_mut()) {
            (Some(bound), Some(session)) => (bound, session),
            _ => return DragOutcome::Ignored,
        };

        session.pointer = pointer;
        bound.element.set_rotated(false);
        bound.element.set_position(session.element_origin());

        let hovered = zones.index_at(pointer);
        zones.set_highlight(true, hovered);

        DragOutcome::Moved {
            hovered: hovered.map(|index| zones.zones()[index].target),
        }
    }

    /// Handle pointer up
    pub fn pointer_up<S>(&mut self, pointer: Vec2, zones: &mut ZoneGenerator<S>) -> DragOutcome
    where
        S: Surface<Element = E>,
    {
        let bound = match self.bound.as_mut() {
            Some(bound) => bound,
            None => return DragOutcome::Ignored,
        };
        if self.session.take().is_none() {
            return DragOutcome::Ignored;
        }

        bound.element.set_highlighted(false);
        zones.set_highlight(false, None);

        let target = self.find_target_at(zones, pointer.x, pointer.y);
        debug!(
            "[drag] ended at ({}, {}) over {}",
            pointer.x,
            pointer.y,
            target.map(|t| t.id()).unwrap_or_else(|| "nothing".to_string())
        );

        if let Some(handler) = self.on_end.as_mut() {
            handler(target);
        }
        DragOutcome::Ended { target }
    }

    /// First rendered dock target containing `(x, y)`, edges inclusive
    pub fn find_target_at<S>(&self, zones: &ZoneGenerator<S>, x: f32, y: f32) -> Option<DockTarget>
    where
        S: Surface<Element = E>,
    {
        zones.target_at(Vec2::new(x, y))
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::layout::{LayoutSnapshot, Region};
    use crate::math::{Rect, Size};
    use crate::testing::{MockElement, MockSurface};
    use crate::zone::DockKind;

    fn setup() -> (DragController<MockElement>, ZoneGenerator<MockSurface>) {
        let mut surface = MockSurface::new();
        let mut zones = ZoneGenerator::default();
        zones.rebuild(
            &mut surface,
            &LayoutSnapshot::new(Size::new(800.0, 600.0), vec![Region::new(0.0, 0.0, 800.0, 600.0)]),
            false,
        );

        let mut drag = DragController::new();
        drag.initialize(
            MockElement::new(Rect::new(300.0, 300.0, 20.0, 40.0)),
            MockElement::new(Rect::new(300.0, 300.0, 200.0, 40.0)),
        );
        (drag, zones)
    }

    #[test]
    fn test_uninitialized_is_noop() {
        let mut zones = ZoneGenerator::<MockSurface>::default();
        let mut drag = DragController::<MockElement>::new();

        assert_eq!(drag.pointer_down(Vec2::new(1.0, 1.0), &mut zones), DragOutcome::Ignored);
        assert_eq!(drag.pointer_move(Vec2::new(2.0, 2.0), &mut zones), DragOutcome::Ignored);
        assert_eq!(drag.pointer_up(Vec2::new(2.0, 2.0), &mut zones), DragOutcome::Ignored);
        assert!(!drag.is_dragging());
        assert!(drag.element().is_none());
    }

    #[test]
    fn test_pointer_down_outside_handle_ignored() {
        let (mut drag, mut zones) = setup();
        assert_eq!(drag.pointer_down(Vec2::new(400.0, 310.0), &mut zones), DragOutcome::Ignored);
        assert!(!drag.is_dragging());
    }

    #[test]
    fn test_pointer_down_on_fractional_handle_edge() {
        let mut zones = ZoneGenerator::<MockSurface>::default();
        let mut drag = DragController::new();
        drag.initialize(
            MockElement::new(Rect::new(760.0, 200.5, 20.0, 40.0)),
            MockElement::new(Rect::new(760.0, 200.5, 200.0, 40.0)),
        );

        // First pixel row of a handle docked at y = 200.5
        assert_eq!(drag.pointer_down(Vec2::new(765.0, 200.0), &mut zones), DragOutcome::Started);
        assert!(drag.is_dragging());
    }

    #[test]
    fn test_pointer_down_beyond_pixel_edge_ignored() {
        let mut zones = ZoneGenerator::<MockSurface>::default();
        let mut drag = DragController::new();
        drag.initialize(
            MockElement::new(Rect::new(760.0, 200.5, 20.0, 40.0)),
            MockElement::new(Rect::new(760.0, 200.5, 200.0, 40.0)),
        );

        assert_eq!(drag.pointer_down(Vec2::new(765.0, 199.0), &mut zones), DragOutcome::Ignored);
        assert_eq!(drag.pointer_down(Vec2::new(782.0, 220.0), &mut zones), DragOutcome::Ignored);
    }

    #[test]
    fn test_full_drag_cycle() {
        let (mut drag, mut zones) = setup();

        let started = Rc::new(RefCell::new(0));
        let ended = Rc::new(RefCell::new(Vec::new()));
        {
            let started = started.clone();
            drag.on_drag_start(move || *started.borrow_mut() += 1);
            let ended = ended.clone();
            drag.on_drag_end(move |target| ended.borrow_mut().push(target));
        }

        assert_eq!(drag.pointer_down(Vec2::new(310.0, 320.0), &mut zones), DragOutcome::Started);
        assert!(drag.is_dragging());
        assert_eq!(*started.borrow(), 1);
        assert!(drag.element().unwrap().highlighted());
        assert!(zones.zones().iter().all(|z| z.element.visible()));

        let offset = drag.session().unwrap().offset;
        assert_eq!(offset, Vec2::new(10.0, 20.0));

        // Move over corner-bottom-right (screen 760..800, 0..40)
        let moved = drag.pointer_move(Vec2::new(780.0, 20.0), &mut zones);
        match moved {
            DragOutcome::Moved { hovered: Some(target) } => {
                assert_eq!(target.kind, DockKind::CornerBottomRight)
            }
            other => panic!("unexpected outcome {:?}", other),
        }
        assert_eq!(drag.element().unwrap().position(), Vec2::new(770.0, 0.0));
        assert_eq!(zones.zones().iter().filter(|z| z.element.highlighted()).count(), 1);

        let ended_outcome = drag.pointer_up(Vec2::new(780.0, 20.0), &mut zones);
        assert!(matches!(ended_outcome, DragOutcome::Ended { target: Some(_) }));
        assert!(!drag.is_dragging());
        assert!(!drag.element().unwrap().highlighted());
        assert!(zones.zones().iter().all(|z| !z.element.visible() && !z.element.highlighted()));

        let ended = ended.borrow();
        assert_eq!(ended.len(), 1);
        assert_eq!(ended[0].map(|t| t.binding()), Some(crate::DockBinding::new(DockKind::CornerBottomRight, 0)));
    }

    #[test]
    fn test_move_clears_rotation() {
        let (mut drag, mut zones) = setup();
        drag.element_mut().unwrap().set_rotated(true);

        drag.pointer_down(Vec2::new(305.0, 305.0), &mut zones);
        drag.pointer_move(Vec2::new(400.0, 400.0), &mut zones);

        assert!(!drag.element().unwrap().rotated());
    }

    #[test]
    fn test_drop_outside_targets() {
        let (mut drag, mut zones) = setup();
        drag.pointer_down(Vec2::new(305.0, 305.0), &mut zones);
        drag.pointer_move(Vec2::new(400.0, 300.0), &mut zones);

        assert_eq!(
            drag.pointer_up(Vec2::new(400.0, 300.0), &mut zones),
            DragOutcome::Ended { target: None }
        );
    }

    #[test]
    fn test_move_and_up_without_down_ignored() {
        let (mut drag, mut zones) = setup();
        assert_eq!(drag.pointer_move(Vec2::new(10.0, 10.0), &mut zones), DragOutcome::Ignored);
        assert_eq!(drag.pointer_up(Vec2::new(10.0, 10.0), &mut zones), DragOutcome::Ignored);
    }

    #[test]
    fn test_find_target_at_boundary() {
        let (drag, zones) = setup();
        let target = drag.find_target_at(&zones, 760.0, 40.0).unwrap();
        assert_eq!(target.kind, DockKind::CornerBottomRight);
        assert!(drag.find_target_at(&zones, 400.0, 300.0).is_none());
    }

    #[test]
    fn test_last_subscriber_wins() {
        let (mut drag, mut zones) = setup();
        let calls = Rc::new(RefCell::new(Vec::new()));
        {
            let calls = calls.clone();
            drag.on_drag_start(move || calls.borrow_mut().push("first"));
        }
        {
            let calls = calls.clone();
            drag.on_drag_start(move || calls.borrow_mut().push("second"));
        }

        drag.pointer_down(Vec2::new(305.0, 305.0), &mut zones);
        assert_eq!(*calls.borrow(), vec!["second"]);
    }
}
