//! Mouse vs. touch selection, decided once from the user agent

use super::error::InputError;
use crate::geometry::Point;

/// User-agent fragments that select touch handling
pub const MOBILE_PLATFORMS: [&str; 5] = ["iPad", "iPhone", "iPod", "Mobile", "Android"];

/// What an incoming event turned out to be
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum RawSample {
    Mouse(Point),
    /// Touch event and its first contact, if any
    Touch(Option<Point>),
    /// Neither of the above
    Other,
}

/// Which family of events drives the spinner
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InputMode {
    Mouse,
    Touch,
}

impl InputMode {
    pub fn detect(user_agent: &str) -> Self {
        if MOBILE_PLATFORMS.iter().any(|p| user_agent.contains(p)) {
            InputMode::Touch
        } else {
            InputMode::Mouse
        }
    }

    /// DOM event names for press, drag and release
    pub fn event_names(self) -> [&'static str; 3] {
        match self {
            InputMode::Mouse => ["mousedown", "mousemove", "mouseup"],
            InputMode::Touch => ["touchstart", "touchmove", "touchend"],
        }
    }

    /// Name of the event type this mode converts, for error messages
    pub fn expected_event(self) -> &'static str {
        match self {
            InputMode::Mouse => "MouseEvent",
            InputMode::Touch => "TouchEvent",
        }
    }

    /// Point of a sample, if it is the kind this mode handles
    pub fn accept(self, sample: RawSample) -> Result<Point, InputError> {
        match (self, sample) {
            (InputMode::Mouse, RawSample::Mouse(point)) => Ok(point),
            (InputMode::Touch, RawSample::Touch(Some(point))) => Ok(point),
            (InputMode::Touch, RawSample::Touch(None)) => Err(InputError::NoContact),
            _ => Err(InputError::InvalidInput { expected: self.expected_event() }),
        }
    }
}
