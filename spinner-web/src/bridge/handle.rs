//! Spinner handle - the object JavaScript holds
//!
//! Owns the spinner state, the inertia timer and the input listeners.
//! Dropping (or `free()`-ing from JS) stops the timer and unhooks input.

use std::cell::RefCell;
use std::rc::Rc;

use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Event, HtmlElement, MouseEvent, Window};

use super::error::BridgeError;
use super::events::{current_viewport, sample_event, Listener};
use super::target::ElementTarget;
use crate::config::SpinnerConfig;
use crate::input::InputMode;
use crate::spinner::Spinner;

type SharedSpinner = Rc<RefCell<Spinner<ElementTarget>>>;

/// Primary button only, as reported by `MouseEvent.buttons`
const PRIMARY_BUTTON: u16 = 1;

#[wasm_bindgen]
pub struct SpinnerHandle {
    spinner: SharedSpinner,
    window: Window,
    mode: InputMode,
    tick: Closure<dyn FnMut()>,
    interval_ms: u32,
    interval: Option<i32>,
    _listeners: Vec<Listener>,
}

/// Attach a spinner with default settings to the first element matching `selector`
///
/// The timer is not running until `start()` is called.
#[wasm_bindgen]
pub fn mount(selector: &str) -> Result<SpinnerHandle, JsValue> {
    Ok(SpinnerHandle::attach(selector, &SpinnerConfig::default())?)
}

#[wasm_bindgen]
pub fn mount_with_config(selector: &str, config: &SpinnerConfig) -> Result<SpinnerHandle, JsValue> {
    Ok(SpinnerHandle::attach(selector, config)?)
}

impl SpinnerHandle {
    fn attach(selector: &str, config: &SpinnerConfig) -> Result<Self, BridgeError> {
        let config = config.validated();
        let window = web_sys::window().ok_or(BridgeError::NoWindow)?;
        let document = window.document().ok_or(BridgeError::NoDocument)?;
        let element = document
            .query_selector(selector)?
            .ok_or_else(|| BridgeError::TargetNotFound(selector.to_string()))?
            .dyn_into::<HtmlElement>()
            .map_err(|_| BridgeError::NotAnHtmlElement)?;

        let target = ElementTarget::new(element);
        let rotation = target.inline_rotation();
        let spinner = Rc::new(RefCell::new(Spinner::with_config(target, rotation, &config)));

        let mode = InputMode::detect(&window.navigator().user_agent().unwrap_or_default());
        let listeners = Self::listen(&window, mode, &spinner)?;

        let tick = {
            let spinner = spinner.clone();
            Closure::wrap(Box::new(move || spinner.borrow_mut().tick()) as Box<dyn FnMut()>)
        };

        console_log!("🌀 Spinner mounted on '{}' ({:?} input)", selector, mode);

        Ok(Self {
            spinner,
            window,
            mode,
            tick,
            interval_ms: config.tick_interval_ms,
            interval: None,
            _listeners: listeners,
        })
    }

    /// Press / drag / release handlers for the selected input mode
    fn listen(window: &Window, mode: InputMode, spinner: &SharedSpinner) -> Result<Vec<Listener>, BridgeError> {
        let [press_name, drag_name, release_name] = mode.event_names();

        let press = {
            let spinner = spinner.clone();
            move |event: Event| match sample_event(mode, &event) {
                Ok(point) => spinner.borrow_mut().on_press(point),
                Err(e) => warn(&format!("{} ignored: {}", press_name, e)),
            }
        };

        let drag = {
            let spinner = spinner.clone();
            let window = window.clone();
            move |event: Event| {
                if mode == InputMode::Mouse
                    && event.dyn_ref::<MouseEvent>().map(|e| e.buttons()) != Some(PRIMARY_BUTTON)
                {
                    return;
                }
                match sample_event(mode, &event) {
                    Ok(point) => {
                        spinner.borrow_mut().on_drag(point, &current_viewport(&window));
                    }
                    Err(e) => warn(&format!("{} ignored: {}", drag_name, e)),
                }
            }
        };

        let release = {
            let spinner = spinner.clone();
            let window = window.clone();
            move |event: Event| {
                let point = sample_event(mode, &event)
                    .map_err(|e| warn(&format!("{} without final point: {}", release_name, e)))
                    .ok();
                spinner.borrow_mut().on_release(point, &current_viewport(&window));
            }
        };

        Ok(vec![
            Listener::attach(window, press_name, press)?,
            Listener::attach(window, drag_name, drag)?,
            Listener::attach(window, release_name, release)?,
        ])
    }
}

#[wasm_bindgen]
impl SpinnerHandle {
    /// Start the inertia timer; no-op if already running
    pub fn start(&mut self) -> Result<(), JsValue> {
        if self.interval.is_some() {
            return Ok(());
        }
        let id = self.window.set_interval_with_callback_and_timeout_and_arguments_0(
            self.tick.as_ref().unchecked_ref(),
            self.interval_ms as i32,
        )?;
        self.interval = Some(id);
        Ok(())
    }

    /// Stop the inertia timer; gestures still rotate the target directly
    pub fn stop(&mut self) {
        if let Some(id) = self.interval.take() {
            self.window.clear_interval_with_handle(id);
        }
    }

    #[wasm_bindgen(getter, js_name = isRunning)]
    pub fn is_running(&self) -> bool {
        self.interval.is_some()
    }

    #[wasm_bindgen(getter)]
    pub fn rotation(&self) -> f64 {
        self.spinner.borrow().engine().rotation()
    }

    #[wasm_bindgen(getter)]
    pub fn accel(&self) -> f64 {
        self.spinner.borrow().engine().accel()
    }

    #[wasm_bindgen(getter, js_name = isTouch)]
    pub fn is_touch(&self) -> bool {
        self.mode == InputMode::Touch
    }

    /// Rotate by `radians` as if dragged: applied now and kept as velocity
    #[wasm_bindgen(js_name = setRotate)]
    pub fn set_rotate(&self, radians: f64) {
        self.spinner.borrow_mut().engine_mut().set_rotate(radians);
    }
}

impl Drop for SpinnerHandle {
    fn drop(&mut self) {
        self.stop();
    }
}

fn warn(message: &str) {
    web_sys::console::warn_1(&message.into());
}
