//! The rendering seam between the controller and a concrete UI toolkit.

use carbon_button_style::StyleSnapshot;

use crate::view::ControlView;

/// A drawable target for one control.
///
/// The controller builds a [`ControlView`] on every render pass and hands
/// it over whole; interaction transitions in between only patch the visual
/// properties through [`apply_style`](Self::apply_style).
pub trait ControlSurface: Send {
    /// Replace the rendered content with `view`.
    fn render(&mut self, view: &ControlView);

    /// Patch the control's colours, shadow, transform and opacity.
    fn apply_style(&mut self, snapshot: &StyleSnapshot);

    /// Height of the rendered content in pixels, as the host should size
    /// the frame.
    fn rendered_height(&self) -> f32;
}

impl<S: ControlSurface + ?Sized> ControlSurface for Box<S> {
    fn render(&mut self, view: &ControlView) {
        (**self).render(view)
    }

    fn apply_style(&mut self, snapshot: &StyleSnapshot) {
        (**self).apply_style(snapshot)
    }

    fn rendered_height(&self) -> f32 {
        (**self).rendered_height()
    }
}
