//! Browser bindings
//!
//! DOM-backed [`Renderable`](crate::Renderable) and [`Surface`](crate::Surface)
//! implementations, the WebView2 host channel and a console logger.

mod channel;
mod dom;
mod logger;

pub use channel::WebViewChannel;
pub use dom::{read_binding, DomElement, DomSurface, ElementRole};
pub use logger::ConsoleLogger;

/// Wall-clock milliseconds, the time base fed to the engine
pub fn now_ms() -> f64 {
    js_sys::Date::now()
}
