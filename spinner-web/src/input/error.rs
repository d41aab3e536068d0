use thiserror::Error;

/// A sample could not be turned into a point
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InputError {
    /// The event is not the kind the active converter handles
    #[error("argument is not a {expected}")]
    InvalidInput { expected: &'static str },

    /// A touch event without any touch point
    #[error("touch event carries no contact point")]
    NoContact,
}
