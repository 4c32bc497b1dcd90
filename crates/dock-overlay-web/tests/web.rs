//! Browser tests, run with `wasm-pack test --headless --firefox`

#![cfg(target_arch = "wasm32")]

use dock_overlay::web::{read_binding, DomElement, DomSurface, ElementRole};
use dock_overlay::{
    DockBinding, DockKind, DockTarget, OverlayConfig, Rect, Renderable, Surface, Vec2,
};
use std::cell::RefCell;
use std::rc::Rc;

use dock_overlay_web::OverlayApp;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use wasm_bindgen_test::*;
use web_sys::{Document, HtmlElement};

wasm_bindgen_test_configure!(run_in_browser);

fn document() -> Document {
    web_sys::window().unwrap().document().unwrap()
}

fn div(document: &Document, class: &str) -> HtmlElement {
    let element: HtmlElement = document.create_element("div").unwrap().dyn_into().unwrap();
    element.set_class_name(class);
    document.body().unwrap().append_child(&element).unwrap();
    element
}

fn target() -> DockTarget {
    DockTarget {
        kind: DockKind::SideLeft,
        region_index: 2,
        rect: Rect::new(10.0, 60.0, 20.0, 200.0),
    }
}

#[wasm_bindgen_test]
fn test_zone_markers() {
    let mut surface = DomSurface::new(document(), &OverlayConfig::default()).unwrap();
    let zone = surface.create_target(&target(), false).unwrap();

    let element = zone.element();
    assert_eq!(element.id(), "side-left-2");
    assert_eq!(element.class_name(), "anchor-zone");
    assert_eq!(element.style().get_property_value("opacity").unwrap(), "0");
    assert_eq!(element.style().get_property_value("pointer-events").unwrap(), "none");
    assert_eq!(read_binding(element), Some(DockBinding::new(DockKind::SideLeft, 2)));

    surface.remove_target(zone);
    assert!(document().get_element_by_id("side-left-2").is_none());
}

#[wasm_bindgen_test]
fn test_zone_highlight_styles() {
    let mut surface = DomSurface::new(document(), &OverlayConfig::default()).unwrap();
    let mut zone = surface.create_target(&target(), true).unwrap();

    zone.set_highlighted(true);
    assert_eq!(zone.element().style().get_property_value("border-color").unwrap(), "lime");
    assert_eq!(zone.element().style().get_property_value("opacity").unwrap(), "0.7");

    surface.remove_target(zone);
}

#[wasm_bindgen_test]
fn test_bad_marker_is_no_target() {
    let element = div(&document(), "anchor-zone");
    element.dataset().set("dockPosition", "middle").unwrap();
    element.dataset().set("areaIndex", "0").unwrap();

    assert!(read_binding(&element).is_none());
    element.remove();
}

#[wasm_bindgen_test]
fn test_toolbar_rotation_and_position() {
    let element = div(&document(), "toolbar");
    let mut toolbar = DomElement::new(element.clone(), ElementRole::Plain);

    toolbar.set_position(Vec2::new(15.0, 25.0));
    toolbar.set_rotated(true);
    assert!(element.class_list().contains("vertical"));
    assert_eq!(element.style().get_property_value("left").unwrap(), "15px");
    assert_eq!(element.style().get_property_value("right").unwrap(), "auto");

    toolbar.set_highlighted(true);
    toolbar.set_rotated(false);
    assert!(!element.class_list().contains("vertical"));
    assert!(element.class_list().contains("dragging"));
    element.remove();
}

#[wasm_bindgen_test]
fn test_interactive_regions_skip_unmarked() {
    let document = document();
    let surface = DomSurface::new(document.clone(), &OverlayConfig::default()).unwrap();
    let before = surface.interactive_regions().len();

    let marked = div(&document, "clickable-area");
    let unmarked = div(&document, "decoration");
    assert_eq!(surface.interactive_regions().len(), before + 1);

    marked.remove();
    unmarked.remove();
}

fn start_app(prefix: &str) -> (OverlayApp, HtmlElement, HtmlElement) {
    let document = document();
    let toolbar = div(&document, "toolbar");
    toolbar.set_id(&format!("{}-toolbar", prefix));
    let handle = div(&document, "drag-handle");
    handle.set_id(&format!("{}-handle", prefix));

    let app = OverlayApp::new(&toolbar.id(), &handle.id(), "").unwrap();
    (app, toolbar, handle)
}

#[wasm_bindgen_test]
fn test_panel_callback_can_call_back_in() {
    let (app, toolbar, handle) = start_app("reentry");
    let app = Rc::new(app);
    let seen = Rc::new(RefCell::new(Vec::new()));

    let callback = {
        let app = app.clone();
        let seen = seen.clone();
        Closure::wrap(Box::new(move |open: bool| {
            seen.borrow_mut().push((open, app.is_panel_open("catalog").unwrap()));
            if open {
                // Nested transition from inside the callback
                app.close_panel("catalog").unwrap();
            }
        }) as Box<dyn FnMut(bool)>)
    };
    app.on_panel_change("catalog", callback.as_ref().unchecked_ref::<js_sys::Function>().clone())
        .unwrap();

    assert!(app.open_panel("catalog").unwrap());
    assert_eq!(*seen.borrow(), vec![(true, true), (false, false)]);
    assert!(!app.is_panel_open("catalog").unwrap());

    app.shutdown();
    toolbar.remove();
    handle.remove();
}

#[wasm_bindgen_test]
fn test_shutdown_then_drop() {
    let (app, toolbar, handle) = start_app("lifecycle");
    app.shutdown();
    app.shutdown();
    assert!(document().query_selector(".anchor-zone").unwrap().is_none());
    assert_eq!(app.dock_binding_json(), "null");
    drop(app);

    let (app, toolbar2, handle2) = start_app("dropped");
    drop(app);
    assert!(document().query_selector(".anchor-zone").unwrap().is_none());

    for element in [toolbar, handle, toolbar2, handle2] {
        element.remove();
    }
}
