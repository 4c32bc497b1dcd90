//! Browser entry point for the dock overlay
//!
//! Wires [`dock_overlay::OverlayEngine`] to the page: the toolbar and its
//! drag handle, `document.body` as the render surface, the WebView2 host
//! channel when present, and one heartbeat interval driving report timers.
//!
//! ```js
//! const app = new OverlayApp("toolbar", "dragHandle", "{}");
//! app.on_panel_change("catalog", (open) => render(open));
//! document.querySelector("[data-tool=render]").onclick = () => app.open_panel("catalog");
//! ```

mod events;
mod fetch;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use dock_overlay::web::{now_ms, ConsoleLogger, DomElement, DomSurface, WebViewChannel};
use dock_overlay::{OverlayConfig, OverlayEngine, ParameterValue, PanelId, CATEGORIES};
use log::{info, warn, LevelFilter};
use wasm_bindgen::prelude::*;

use events::{with_engine, Listeners};

type Engine = OverlayEngine<DomSurface, WebViewChannel>;

type PanelEvents = Rc<RefCell<Vec<(PanelId, bool)>>>;

fn js_err(e: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&e.to_string())
}

fn panel(name: &str) -> Result<PanelId, JsValue> {
    name.parse::<PanelId>().map_err(|e| JsValue::from_str(&e))
}

/// The running overlay
#[wasm_bindgen]
///
/// Every export takes `&self`, so JS callbacks may call back into the app.
/// Dropping it (`free()` on the JS side) detaches the same way as
/// [`shutdown`](Self::shutdown).
pub struct OverlayApp {
    engine: Rc<RefCell<Engine>>,
    listeners: RefCell<Option<Listeners>>,
    /// Panel transitions waiting to be delivered to JS
    panel_events: PanelEvents,
    panel_callbacks: RefCell<HashMap<PanelId, js_sys::Function>>,
}

#[wasm_bindgen]
impl OverlayApp {
    /// Start the overlay on the toolbar `toolbar_id` dragged by `handle_id`
    ///
    /// `config_json` overrides [`OverlayConfig`] fields; pass `""` for defaults.
    #[wasm_bindgen(constructor)]
    pub fn new(toolbar_id: &str, handle_id: &str, config_json: &str) -> Result<OverlayApp, JsValue> {
        #[cfg(feature = "console_error_panic_hook")]
        console_error_panic_hook::set_once();
        ConsoleLogger::init(LevelFilter::Debug);

        let config = OverlayConfig::from_json(config_json).map_err(js_err)?;
        let window = web_sys::window().ok_or_else(|| js_err("no window"))?;
        let document = window.document().ok_or_else(|| js_err("no document"))?;

        let toolbar = DomElement::by_id(&document, toolbar_id)
            .ok_or_else(|| js_err(format!("no element #{}", toolbar_id)))?;
        let handle = DomElement::by_id(&document, handle_id)
            .ok_or_else(|| js_err(format!("no element #{}", handle_id)))?;
        let handle_target = handle.element().clone().into();
        let surface = DomSurface::new(document.clone(), &config).ok_or_else(|| js_err("no document body"))?;

        let channel = WebViewChannel::detect();
        if channel.is_none() {
            info!("[overlay] no host channel, running detached");
        }

        let heartbeat_ms = config.heartbeat_ms;
        let mut engine = OverlayEngine::new(config, surface, channel);
        engine.attach_toolbar(handle, toolbar);
        engine.start_reporting(None, now_ms());

        let panel_events: PanelEvents = Rc::new(RefCell::new(Vec::new()));
        for id in PanelId::ALL {
            let events = panel_events.clone();
            engine.on_panel_change(id, move |open| events.borrow_mut().push((id, open)));
        }

        let engine = Rc::new(RefCell::new(engine));
        let listeners = Listeners::install(window, handle_target, document.into(), &engine, heartbeat_ms)?;

        info!("[overlay] started");
        Ok(Self {
            engine,
            listeners: RefCell::new(Some(listeners)),
            panel_events,
            panel_callbacks: RefCell::new(HashMap::new()),
        })
    }

    // =========================================================================
    // Panels
    // =========================================================================

    /// Open a panel (`catalog` or `paint-tool`); true when it was closed
    #[wasm_bindgen]
    pub fn open_panel(&self, name: &str) -> Result<bool, JsValue> {
        let id = panel(name)?;
        let changed = with_engine(&self.engine, |e| e.open_panel(id, now_ms())).unwrap_or(false);
        self.flush_panel_events();
        Ok(changed)
    }

    /// Close a panel; true when it was open
    #[wasm_bindgen]
    pub fn close_panel(&self, name: &str) -> Result<bool, JsValue> {
        let id = panel(name)?;
        let changed = with_engine(&self.engine, |e| e.close_panel(id, now_ms())).unwrap_or(false);
        self.flush_panel_events();
        Ok(changed)
    }

    /// Flip a panel
    #[wasm_bindgen]
    pub fn toggle_panel(&self, name: &str) -> Result<bool, JsValue> {
        let id = panel(name)?;
        let changed = with_engine(&self.engine, |e| e.toggle_panel(id, now_ms())).unwrap_or(false);
        self.flush_panel_events();
        Ok(changed)
    }

    #[wasm_bindgen]
    pub fn is_panel_open(&self, name: &str) -> Result<bool, JsValue> {
        let id = panel(name)?;
        Ok(self.engine.try_borrow().map(|e| e.is_panel_open(id)).unwrap_or(false))
    }

    /// Call `callback(open)` whenever the panel opens or closes (last registration wins)
    #[wasm_bindgen]
    pub fn on_panel_change(&self, name: &str, callback: js_sys::Function) -> Result<(), JsValue> {
        self.panel_callbacks.borrow_mut().insert(panel(name)?, callback);
        Ok(())
    }

    /// Deliver queued panel transitions
    ///
    /// No borrow is held across a callback, so a callback may re-register
    /// itself or open and close panels; those transitions are delivered by
    /// the nested call.
    fn flush_panel_events(&self) {
        let events: Vec<(PanelId, bool)> = self.panel_events.borrow_mut().drain(..).collect();
        for (id, open) in events {
            let callback = self.panel_callbacks.borrow().get(&id).cloned();
            if let Some(callback) = callback {
                if let Err(e) = callback.call1(&JsValue::NULL, &JsValue::from_bool(open)) {
                    warn!("[overlay] {} change callback threw: {:?}", id, e);
                }
            }
        }
    }

    // =========================================================================
    // Host bridge
    // =========================================================================

    /// Pass a raw string to the host
    #[wasm_bindgen]
    pub fn send_message(&self, raw: &str) -> bool {
        with_engine(&self.engine, |e| e.send_message(raw)).unwrap_or(false)
    }

    /// Restart periodic region reports, optionally at a new interval
    #[wasm_bindgen]
    pub fn start_reporting(&self, interval_ms: Option<f64>) {
        with_engine(&self.engine, |e| e.start_reporting(interval_ms, now_ms()));
    }

    #[wasm_bindgen]
    pub fn stop_reporting(&self) {
        with_engine(&self.engine, |e| e.stop_reporting());
    }

    /// Send a region report now; returns it, or nothing when detached
    #[wasm_bindgen]
    pub fn report_now(&self) -> Option<String> {
        with_engine(&self.engine, |e| e.report_now()).flatten()
    }

    /// Active dock binding as JSON (`null` when undocked)
    #[wasm_bindgen]
    pub fn dock_binding_json(&self) -> String {
        let binding = self.engine.try_borrow().ok().and_then(|e| e.dock_binding());
        serde_json::to_string(&binding).unwrap_or_else(|_| "null".to_string())
    }

    // =========================================================================
    // Script catalog
    // =========================================================================

    /// Category names as a JSON array
    #[wasm_bindgen]
    pub fn categories_json(&self) -> String {
        serde_json::to_string(&CATEGORIES).unwrap_or_else(|_| "[]".to_string())
    }

    /// Apply a search term and category, returning matching scripts as JSON
    #[wasm_bindgen]
    pub fn filter_scripts(&self, search: &str, category: &str) -> Result<String, JsValue> {
        with_engine(&self.engine, |e| {
            let catalog = e.catalog_mut();
            catalog.query_mut().set_category(category).map_err(js_err)?;
            catalog.query_mut().set_search(search);
            serde_json::to_string(&catalog.visible()).map_err(js_err)
        })
        .unwrap_or_else(|| Err(js_err("overlay busy")))
    }

    /// Fetch the body of script `id` and open its parameter step
    ///
    /// Resolves to the parameter defaults as JSON; rejects if the fetch
    /// fails, in which case the catalog is back to browsing.
    #[wasm_bindgen]
    pub fn load_script(&self, id: String) -> Result<js_sys::Promise, JsValue> {
        let url = with_engine(&self.engine, |e| e.select_script(&id))
            .ok_or_else(|| js_err("overlay busy"))?
            .map_err(js_err)?;
        let engine = self.engine.clone();

        Ok(wasm_bindgen_futures::future_to_promise(async move {
            match fetch::fetch_text(&url).await {
                Ok(content) => {
                    with_engine(&engine, |e| e.script_loaded(&id, content))
                        .ok_or_else(|| js_err("overlay busy"))?
                        .map_err(js_err)?;
                    let params = engine
                        .try_borrow()
                        .ok()
                        .and_then(|e| e.catalog().script(&id).map(|s| s.parameters.clone()))
                        .unwrap_or_default();
                    Ok(JsValue::from_str(&serde_json::to_string(&params).map_err(js_err)?))
                }
                Err(e) => {
                    with_engine(&engine, |eng| eng.script_failed(&id));
                    Err(e)
                }
            }
        }))
    }

    /// Change one parameter; `value_json` must keep the parameter's type
    #[wasm_bindgen]
    pub fn set_script_parameter(&self, name: &str, value_json: &str) -> Result<(), JsValue> {
        let value: ParameterValue = serde_json::from_str(value_json).map_err(js_err)?;
        with_engine(&self.engine, |e| e.set_script_parameter(name, value))
            .ok_or_else(|| js_err("overlay busy"))?
            .map_err(js_err)
    }

    /// Leave the parameter step without sending
    #[wasm_bindgen]
    pub fn cancel_script(&self) {
        with_engine(&self.engine, |e| e.catalog_mut().cancel());
    }

    /// Send the prepared script to the host and close the catalog
    #[wasm_bindgen]
    pub fn submit_script(&self) -> Result<String, JsValue> {
        let load = with_engine(&self.engine, |e| e.submit_script(now_ms()))
            .ok_or_else(|| js_err("overlay busy"))?
            .map_err(js_err)?;
        self.flush_panel_events();
        Ok(load.to_message())
    }

    // =========================================================================
    // Lifecycle
    // =========================================================================

    /// Detach all listeners, stop timers and remove dock targets
    ///
    /// Later calls do nothing.
    #[wasm_bindgen]
    pub fn shutdown(&self) {
        let listeners = match self.listeners.borrow_mut().take() {
            Some(listeners) => listeners,
            None => return,
        };
        match self.engine.try_borrow() {
            Ok(engine) => listeners.remove(engine.bridge().channel()),
            Err(_) => listeners.remove(None),
        }
        with_engine(&self.engine, |e| e.teardown());
        self.panel_callbacks.borrow_mut().clear();
        info!("[overlay] stopped");
    }
}

impl Drop for OverlayApp {
    fn drop(&mut self) {
        self.shutdown();
    }
}
