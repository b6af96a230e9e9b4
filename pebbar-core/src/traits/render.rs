//! Render and feedback collaborators

use crate::layout::Layout;

/// Draws an accepted layout
///
/// Called once per accepted message, never for skipped or rejected ones.
/// Implementations own all geometry: positioning, text measurement,
/// icon placement.
pub trait Renderer {
    fn render(&mut self, layout: &Layout);
}

/// Vibration motor
pub trait Haptics {
    /// Short pulse signalling that the face changed
    fn short_pulse(&mut self);
}

impl<T: Renderer + ?Sized> Renderer for &mut T {
    fn render(&mut self, layout: &Layout) {
        (**self).render(layout)
    }
}

impl<T: Haptics + ?Sized> Haptics for &mut T {
    fn short_pulse(&mut self) {
        (**self).short_pulse()
    }
}

/// No-op feedback, for builds without a vibration motor
impl Haptics for () {
    fn short_pulse(&mut self) {}
}
