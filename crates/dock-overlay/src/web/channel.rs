//! WebView2 host channel

use js_sys::{Function, Reflect};
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::MessageEvent;

use crate::bridge::HostChannel;

/// `window.chrome.webview`, present only when hosted by WebView2
pub struct WebViewChannel {
    webview: JsValue,
}

fn property(target: &JsValue, name: &str) -> Option<JsValue> {
    let value = Reflect::get(target, &JsValue::from_str(name)).ok()?;
    if value.is_undefined() || value.is_null() {
        None
    } else {
        Some(value)
    }
}

impl WebViewChannel {
    /// Look up the host object; `None` in a plain browser
    pub fn detect() -> Option<Self> {
        let window = web_sys::window()?;
        let chrome = property(&window, "chrome")?;
        let webview = property(&chrome, "webview")?;
        Some(Self { webview })
    }

    /// Subscribe `listener` to host messages
    ///
    /// The closure must be kept alive for as long as messages should arrive.
    pub fn add_message_listener(
        &self,
        listener: &Closure<dyn FnMut(MessageEvent)>,
    ) -> Result<(), JsValue> {
        self.call("addEventListener", |f, this| {
            f.call2(this, &JsValue::from_str("message"), listener.as_ref().unchecked_ref())
        })
    }

    /// Unsubscribe a listener added with [`add_message_listener`](Self::add_message_listener)
    pub fn remove_message_listener(
        &self,
        listener: &Closure<dyn FnMut(MessageEvent)>,
    ) -> Result<(), JsValue> {
        self.call("removeEventListener", |f, this| {
            f.call2(this, &JsValue::from_str("message"), listener.as_ref().unchecked_ref())
        })
    }

    fn call(
        &self,
        method: &str,
        invoke: impl FnOnce(&Function, &JsValue) -> Result<JsValue, JsValue>,
    ) -> Result<(), JsValue> {
        let function: Function = property(&self.webview, method)
            .ok_or_else(|| JsValue::from_str(method))?
            .dyn_into()?;
        invoke(&function, &self.webview).map(|_| ())
    }
}

impl HostChannel for WebViewChannel {
    fn post_message(&mut self, message: &str) {
        let result = self.call("postMessage", |f, this| {
            f.call1(this, &JsValue::from_str(message))
        });
        if let Err(e) = result {
            warn!("[bridge] postMessage failed: {:?}", e);
        }
    }
}
