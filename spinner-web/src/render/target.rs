//! Rotation sink

/// Receives the current rotation every time it changes
///
/// The engine owns the numeric rotation; a target only displays it.
pub trait RotationTarget {
    fn render(&mut self, radians: f64);
}

impl<T: RotationTarget + ?Sized> RotationTarget for &mut T {
    fn render(&mut self, radians: f64) {
        (**self).render(radians);
    }
}
