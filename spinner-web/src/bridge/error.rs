//! Errors raised while wiring the spinner into the page

use thiserror::Error;
use wasm_bindgen::prelude::*;

use crate::input::InputError;

#[derive(Debug, Error)]
pub enum BridgeError {
    #[error("No window found")]
    NoWindow,
    #[error("No document found")]
    NoDocument,
    #[error("No element matches '{0}'")]
    TargetNotFound(String),
    #[error("Target element is not an HTMLElement")]
    NotAnHtmlElement,
    #[error("JavaScript error: {0}")]
    Js(String),
}

impl From<JsValue> for BridgeError {
    fn from(value: JsValue) -> Self {
        BridgeError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl From<BridgeError> for JsValue {
    fn from(err: BridgeError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

impl From<InputError> for JsValue {
    fn from(err: InputError) -> Self {
        js_sys::TypeError::new(&err.to_string()).into()
    }
}
