//! Shadow and lift recipes for each interaction phase.

use crate::types::{BoxShadow, Rgba, Shadow};

/// Glow colour of the default (call-to-action) control.
const GLOW: Rgba = Rgba::rgb(80, 228, 224);

/// Lift of a default control at rest, in pixels.
pub const DEFAULT_REST_LIFT: f32 = 2.0;
/// Lift of a default control while hovered, in pixels.
pub const DEFAULT_HOVER_LIFT: f32 = 3.0;
/// Lift of any other control while hovered, in pixels.
pub const HOVER_LIFT: f32 = 1.0;

/// Opacity of a disabled control.
pub const DISABLED_OPACITY: f32 = 0.5;

/// Resting shadow of the secondary variant.
pub fn subtle_drop() -> Shadow {
    Shadow::layered([
        BoxShadow::new(Rgba::rgba(0, 0, 0, 0.12))
            .with_offset(0.0, 1.0)
            .with_blur(3.0),
        BoxShadow::new(Rgba::rgba(0, 0, 0, 0.05))
            .with_offset(0.0, 1.0)
            .with_blur(2.0),
    ])
}

/// Resting glow of a default control.
pub fn default_glow() -> Shadow {
    Shadow::single(
        BoxShadow::new(GLOW.with_alpha(0.4))
            .with_offset(0.0, 4.0)
            .with_blur(12.0),
    )
}

/// Intensified glow of a hovered default control.
pub fn default_glow_hover() -> Shadow {
    Shadow::single(
        BoxShadow::new(GLOW.with_alpha(0.5))
            .with_offset(0.0, 6.0)
            .with_blur(16.0),
    )
}

/// Neutral shadow of any other hovered control.
pub fn hover_drop() -> Shadow {
    Shadow::single(
        BoxShadow::new(Rgba::rgba(0, 0, 0, 0.15))
            .with_offset(0.0, 2.0)
            .with_blur(6.0),
    )
}

/// Inset shadow signalling a pressed control.
pub fn pressed_inset() -> Shadow {
    Shadow::single(
        BoxShadow::new(Rgba::rgba(0, 0, 0, 0.2))
            .with_offset(0.0, 1.0)
            .with_blur(2.0)
            .inset(),
    )
}
