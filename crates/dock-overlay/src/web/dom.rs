//! DOM-backed rendering

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

use crate::config::OverlayConfig;
use crate::dock::DockBinding;
use crate::math::{Rect, Size, Vec2};
use crate::render::{Renderable, Surface};
use crate::zone::{DockKind, DockTarget};

const ZONE_BORDER: &str = "orange";
const ZONE_BORDER_HOVERED: &str = "lime";
const ZONE_OPACITY: &str = "0.7";

/// How an element presents the generic render states
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ElementRole {
    /// Dock target: visibility is opacity plus pointer-events, hover is the border colour
    Zone,
    /// Toolbar or handle: visibility is `display`, highlight is the `dragging` class
    Plain,
}

/// An `HtmlElement` the core can move and restyle
#[derive(Clone, Debug)]
pub struct DomElement {
    element: HtmlElement,
    role: ElementRole,
}

impl DomElement {
    pub fn new(element: HtmlElement, role: ElementRole) -> Self {
        Self { element, role }
    }

    /// Look up a plain element by id
    pub fn by_id(document: &Document, id: &str) -> Option<Self> {
        let element = document.get_element_by_id(id)?.dyn_into::<HtmlElement>().ok()?;
        Some(Self::new(element, ElementRole::Plain))
    }

    #[inline]
    pub fn element(&self) -> &HtmlElement {
        &self.element
    }

    #[inline]
    pub fn role(&self) -> ElementRole {
        self.role
    }

    fn style(&self, property: &str, value: &str) {
        let _ = self.element.style().set_property(property, value);
    }

    fn class(&self, name: &str, on: bool) {
        let _ = self.element.class_list().toggle_with_force(name, on);
    }
}

fn rect_of(element: &Element) -> Rect {
    let r = element.get_bounding_client_rect();
    Rect::new(r.left() as f32, r.top() as f32, r.width() as f32, r.height() as f32)
}

impl Renderable for DomElement {
    fn bounds(&self) -> Rect {
        rect_of(&self.element)
    }

    fn size(&self) -> Size {
        Size::new(
            self.element.offset_width() as f32,
            self.element.offset_height() as f32,
        )
    }

    fn set_position(&mut self, position: Vec2) {
        self.style("position", "absolute");
        self.style("left", &format!("{}px", position.x));
        self.style("top", &format!("{}px", position.y));
        self.style("right", "auto");
        self.style("bottom", "auto");
    }

    fn set_visible(&mut self, visible: bool) {
        match self.role {
            ElementRole::Zone => {
                self.style("opacity", if visible { ZONE_OPACITY } else { "0" });
                self.style("pointer-events", if visible { "auto" } else { "none" });
            }
            ElementRole::Plain => {
                if visible {
                    let _ = self.element.style().remove_property("display");
                } else {
                    self.style("display", "none");
                }
            }
        }
    }

    fn set_highlighted(&mut self, highlighted: bool) {
        match self.role {
            ElementRole::Zone => self.style(
                "border-color",
                if highlighted { ZONE_BORDER_HOVERED } else { ZONE_BORDER },
            ),
            ElementRole::Plain => self.class("dragging", highlighted),
        }
    }

    fn set_rotated(&mut self, rotated: bool) {
        if rotated {
            self.style("transform", "rotate(90deg)");
            self.style("transform-origin", "left bottom");
        } else {
            self.style("transform", "none");
            self.style("transform-origin", "initial");
        }
        self.class("vertical", rotated);
    }
}

/// Read the dock binding a target element was created for
///
/// Elements without valid markers give `None`.
pub fn read_binding(element: &HtmlElement) -> Option<DockBinding> {
    let dataset = element.dataset();
    let kind = dataset.get("dockPosition")?.parse::<DockKind>().ok()?;
    let region_index = dataset.get("areaIndex")?.parse::<usize>().ok()?;
    Some(DockBinding::new(kind, region_index))
}

/// The document body as a render surface
pub struct DomSurface {
    document: Document,
    container: HtmlElement,
    zone_class: String,
    marker_selector: String,
}

impl DomSurface {
    /// Render into `document.body`
    pub fn new(document: Document, config: &OverlayConfig) -> Option<Self> {
        let container = document.body()?;
        Some(Self {
            document,
            container,
            zone_class: config.zone_class.clone(),
            marker_selector: format!(".{}", config.interactive_marker),
        })
    }

    pub fn document(&self) -> &Document {
        &self.document
    }
}

impl Surface for DomSurface {
    type Element = DomElement;

    fn create_target(&mut self, target: &DockTarget, visible: bool) -> Option<DomElement> {
        let element = self
            .document
            .create_element("div")
            .ok()?
            .dyn_into::<HtmlElement>()
            .ok()?;
        element.set_class_name(&self.zone_class);
        element.set_id(&target.id());

        let dataset = element.dataset();
        let _ = dataset.set("dockPosition", target.kind.as_str());
        let _ = dataset.set("areaIndex", &target.region_index.to_string());

        let style = element.style();
        let rect = target.rect;
        for (property, value) in [
            ("position", "absolute".to_string()),
            ("left", format!("{}px", rect.x)),
            ("top", format!("{}px", rect.y)),
            ("width", format!("{}px", rect.width)),
            ("height", format!("{}px", rect.height)),
            ("border", format!("2px dashed {}", ZONE_BORDER)),
            ("box-sizing", "border-box".to_string()),
            ("z-index", "1000".to_string()),
        ] {
            let _ = style.set_property(property, &value);
        }

        let mut zone = DomElement::new(element, ElementRole::Zone);
        zone.set_visible(visible);
        self.container.append_child(zone.element()).ok()?;
        Some(zone)
    }

    fn remove_target(&mut self, element: DomElement) {
        element.element().remove();
    }

    fn interactive_regions(&self) -> Vec<Rect> {
        let Ok(nodes) = self.document.query_selector_all(&self.marker_selector) else {
            return Vec::new();
        };
        (0..nodes.length())
            .filter_map(|i| nodes.get(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(|element| rect_of(&element))
            .collect()
    }
}
