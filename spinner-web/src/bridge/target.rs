//! DOM rotation target - writes `transform` on an HTML element

use web_sys::HtmlElement;

use crate::render::{rotation_or_zero, to_css, RotationTarget};

pub struct ElementTarget {
    element: HtmlElement,
}

impl ElementTarget {
    pub fn new(element: HtmlElement) -> Self {
        Self { element }
    }

    /// Rotation already present in the element's inline style, or 0
    pub fn inline_rotation(&self) -> f64 {
        let transform = self.element.style().get_property_value("transform").ok();
        rotation_or_zero(transform.as_deref())
    }
}

impl RotationTarget for ElementTarget {
    fn render(&mut self, radians: f64) {
        if let Err(e) = self.element.style().set_property("transform", &to_css(radians)) {
            web_sys::console::warn_1(&format!("Failed to write transform: {:?}", e).into());
        }
    }
}
