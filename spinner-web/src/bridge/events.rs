//! DOM event plumbing: sample extraction, viewport snapshot, listeners

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, EventTarget, MouseEvent, Touch, TouchEvent, Window};

use super::error::BridgeError;
use crate::geometry::{Point, PointerLike, Viewport};
use crate::input::{InputError, InputMode, RawSample};

impl PointerLike for MouseEvent {
    fn client_x(&self) -> f64 {
        MouseEvent::client_x(self) as f64
    }

    fn client_y(&self) -> f64 {
        MouseEvent::client_y(self) as f64
    }
}

impl PointerLike for Touch {
    fn client_x(&self) -> f64 {
        Touch::client_x(self) as f64
    }

    fn client_y(&self) -> f64 {
        Touch::client_y(self) as f64
    }
}

/// Convert an event with the converter for `mode`
///
/// Touch events use the first active contact, falling back to the first
/// changed one so that `touchend` still yields the lifted finger.
pub fn sample_event(mode: InputMode, event: &Event) -> Result<Point, InputError> {
    let sample = match mode {
        InputMode::Mouse => event
            .dyn_ref::<MouseEvent>()
            .map(|e| RawSample::Mouse(Point::from_pointer(e))),
        InputMode::Touch => event.dyn_ref::<TouchEvent>().map(|e| {
            let contact = e.touches().item(0).or_else(|| e.changed_touches().item(0));
            RawSample::Touch(contact.map(|t| Point::from_pointer(&t)))
        }),
    };
    mode.accept(sample.unwrap_or(RawSample::Other))
}

/// Current viewport size, read fresh on every call
pub fn current_viewport(window: &Window) -> Viewport {
    if let Some(root) = window.document().and_then(|d| d.document_element()) {
        return Viewport::new(root.client_width() as f64, root.client_height() as f64);
    }
    let dimension = |v: Result<JsValue, JsValue>| v.ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Viewport::new(dimension(window.inner_width()), dimension(window.inner_height()))
}

/// Event listener removed from its target on drop
pub(crate) struct Listener {
    target: EventTarget,
    name: &'static str,
    closure: Closure<dyn FnMut(Event)>,
}

impl Listener {
    pub fn attach(
        target: &EventTarget,
        name: &'static str,
        handler: impl FnMut(Event) + 'static,
    ) -> Result<Self, BridgeError> {
        let closure = Closure::wrap(Box::new(handler) as Box<dyn FnMut(Event)>);
        target.add_event_listener_with_callback(name, closure.as_ref().unchecked_ref())?;
        Ok(Self {
            target: target.clone(),
            name,
            closure,
        })
    }
}

impl Drop for Listener {
    fn drop(&mut self) {
        let _ = self
            .target
            .remove_event_listener_with_callback(self.name, self.closure.as_ref().unchecked_ref());
    }
}
