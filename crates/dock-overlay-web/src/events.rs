//! DOM event wiring
//!
//! Every closure handed to the browser is stored here so it stays alive
//! until [`Listeners::remove`] detaches it.

use std::cell::RefCell;
use std::rc::Rc;

use dock_overlay::web::{now_ms, WebViewChannel};
use dock_overlay::DragOutcome;
use log::warn;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{EventTarget, MessageEvent, MouseEvent, Window};

use crate::Engine;

type MouseClosure = Closure<dyn FnMut(MouseEvent)>;

pub struct Listeners {
    window: Window,
    handle: EventTarget,
    document: EventTarget,
    mousedown: MouseClosure,
    mousemove: MouseClosure,
    mouseup: MouseClosure,
    message: Option<Closure<dyn FnMut(MessageEvent)>>,
    _heartbeat: Closure<dyn FnMut()>,
    interval_id: i32,
}

/// Run `f` with the engine borrowed mutably
///
/// A re-entrant call (a JS handler calling back into the overlay while the
/// engine is busy) is dropped with a warning.
pub fn with_engine<R>(engine: &Rc<RefCell<Engine>>, f: impl FnOnce(&mut Engine) -> R) -> Option<R> {
    match engine.try_borrow_mut() {
        Ok(mut engine) => Some(f(&mut engine)),
        Err(_) => {
            warn!("[overlay] engine busy, event dropped");
            None
        }
    }
}

fn pointer(event: &MouseEvent) -> (f32, f32) {
    (event.client_x() as f32, event.client_y() as f32)
}

impl Listeners {
    /// Attach pointer, host message and heartbeat handlers
    pub fn install(
        window: Window,
        handle: EventTarget,
        document: EventTarget,
        engine: &Rc<RefCell<Engine>>,
        heartbeat_ms: u32,
    ) -> Result<Self, JsValue> {
        let mousedown = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = pointer(&event);
                if with_engine(&engine, |e| e.pointer_down(x, y)) == Some(DragOutcome::Started) {
                    event.prevent_default();
                }
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let mousemove = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = pointer(&event);
                with_engine(&engine, |e| e.pointer_move(x, y));
            }) as Box<dyn FnMut(MouseEvent)>)
        };
        let mouseup = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move |event: MouseEvent| {
                let (x, y) = pointer(&event);
                with_engine(&engine, |e| e.pointer_up(x, y));
            }) as Box<dyn FnMut(MouseEvent)>)
        };

        handle.add_event_listener_with_callback("mousedown", mousedown.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())?;
        document.add_event_listener_with_callback("mouseup", mouseup.as_ref().unchecked_ref())?;

        let message = Self::install_message(engine)?;

        let heartbeat = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move || {
                with_engine(&engine, |e| e.tick(now_ms()));
            }) as Box<dyn FnMut()>)
        };
        let interval_id = window.set_interval_with_callback_and_timeout_and_arguments_0(
            heartbeat.as_ref().unchecked_ref(),
            heartbeat_ms as i32,
        )?;

        Ok(Self {
            window,
            handle,
            document,
            mousedown,
            mousemove,
            mouseup,
            message,
            _heartbeat: heartbeat,
            interval_id,
        })
    }

    fn install_message(
        engine: &Rc<RefCell<Engine>>,
    ) -> Result<Option<Closure<dyn FnMut(MessageEvent)>>, JsValue> {
        let listener = {
            let engine = engine.clone();
            Closure::wrap(Box::new(move |event: MessageEvent| {
                if let Some(raw) = event.data().as_string() {
                    with_engine(&engine, |e| e.handle_host_message(&raw));
                }
            }) as Box<dyn FnMut(MessageEvent)>)
        };

        let engine = engine.borrow();
        match engine.bridge().channel() {
            Some(channel) => {
                channel.add_message_listener(&listener)?;
                Ok(Some(listener))
            }
            None => Ok(None),
        }
    }

    /// Detach everything and stop the heartbeat
    pub fn remove(self, channel: Option<&WebViewChannel>) {
        self.window.clear_interval_with_handle(self.interval_id);
        let _ = self
            .handle
            .remove_event_listener_with_callback("mousedown", self.mousedown.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mousemove", self.mousemove.as_ref().unchecked_ref());
        let _ = self
            .document
            .remove_event_listener_with_callback("mouseup", self.mouseup.as_ref().unchecked_ref());
        if let (Some(channel), Some(message)) = (channel, self.message.as_ref()) {
            let _ = channel.remove_message_listener(message);
        }
    }
}
