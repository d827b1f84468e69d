//! Box shadows and offset transforms.

use std::fmt;

use super::Rgba;

/// A single box shadow layer.
///
/// # Example
///
/// ```
/// use carbon_button_style::types::{BoxShadow, Rgba};
///
/// let glow = BoxShadow::new(Rgba::rgba(80, 228, 224, 0.4))
///     .with_offset(0.0, 4.0)
///     .with_blur(12.0);
/// assert_eq!(glow.to_string(), "0 4px 12px rgba(80, 228, 224, 0.4)");
///
/// let pressed = BoxShadow::new(Rgba::rgba(0, 0, 0, 0.2))
///     .with_offset(0.0, 1.0)
///     .with_blur(2.0)
///     .inset();
/// assert_eq!(pressed.to_string(), "inset 0 1px 2px rgba(0, 0, 0, 0.2)");
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxShadow {
    /// Shadow color (with alpha for transparency).
    pub color: Rgba,
    /// Horizontal offset in pixels. Positive moves shadow right.
    pub offset_x: f32,
    /// Vertical offset in pixels. Positive moves shadow down.
    pub offset_y: f32,
    /// Blur radius in pixels.
    pub blur_radius: f32,
    /// Spread radius in pixels.
    pub spread_radius: f32,
    /// Whether this is an inset (inner) shadow.
    pub inset: bool,
}

impl BoxShadow {
    /// Create a new box shadow with the given color.
    ///
    /// Default values: no offset, no blur, no spread, outer shadow.
    #[inline]
    pub const fn new(color: Rgba) -> Self {
        Self {
            color,
            offset_x: 0.0,
            offset_y: 0.0,
            blur_radius: 0.0,
            spread_radius: 0.0,
            inset: false,
        }
    }

    /// Set the shadow offset.
    #[inline]
    pub const fn with_offset(mut self, x: f32, y: f32) -> Self {
        self.offset_x = x;
        self.offset_y = y;
        self
    }

    /// Set the blur radius.
    #[inline]
    pub const fn with_blur(mut self, blur: f32) -> Self {
        self.blur_radius = blur;
        self
    }

    /// Set the spread radius.
    #[inline]
    pub const fn with_spread(mut self, spread: f32) -> Self {
        self.spread_radius = spread;
        self
    }

    /// Make this an inset shadow.
    #[inline]
    pub const fn inset(mut self) -> Self {
        self.inset = true;
        self
    }
}

impl fmt::Display for BoxShadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.inset {
            f.write_str("inset ")?;
        }
        write!(
            f,
            "{} {} {}",
            Px(self.offset_x),
            Px(self.offset_y),
            Px(self.blur_radius)
        )?;
        if self.spread_radius != 0.0 {
            write!(f, " {}", Px(self.spread_radius))?;
        }
        write!(f, " {}", self.color)
    }
}

/// An ordered list of shadow layers; empty renders as `none`.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Shadow {
    layers: Vec<BoxShadow>,
}

impl Shadow {
    /// No shadow.
    pub const fn none() -> Self {
        Self { layers: Vec::new() }
    }

    /// A single-layer shadow.
    pub fn single(layer: BoxShadow) -> Self {
        Self {
            layers: vec![layer],
        }
    }

    /// A shadow built from several layers, painted first to last.
    pub fn layered(layers: impl IntoIterator<Item = BoxShadow>) -> Self {
        Self {
            layers: layers.into_iter().collect(),
        }
    }

    /// Whether there is no shadow at all.
    pub fn is_none(&self) -> bool {
        self.layers.is_empty()
    }

    /// Whether any layer is inset.
    pub fn is_inset(&self) -> bool {
        self.layers.iter().any(|layer| layer.inset)
    }

    /// The individual layers.
    pub fn layers(&self) -> &[BoxShadow] {
        &self.layers
    }
}

impl fmt::Display for Shadow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.layers.is_empty() {
            return f.write_str("none");
        }
        for (index, layer) in self.layers.iter().enumerate() {
            if index > 0 {
                f.write_str(", ")?;
            }
            layer.fmt(f)?;
        }
        Ok(())
    }
}

/// Vertical offset applied to the control's surface.
///
/// Negative `translate_y` moves the control up.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Transform {
    /// Vertical translation in pixels.
    pub translate_y: f32,
}

impl Transform {
    /// No offset.
    pub const IDENTITY: Self = Self { translate_y: 0.0 };

    /// Raise the control by `px` pixels.
    #[inline]
    pub const fn lift(px: f32) -> Self {
        Self { translate_y: -px }
    }

    /// How far the control is raised, in pixels.
    #[inline]
    pub fn lift_px(&self) -> f32 {
        -self.translate_y
    }

    /// Whether the control is raised at all.
    #[inline]
    pub fn is_lifted(&self) -> bool {
        self.translate_y < 0.0
    }
}

impl fmt::Display for Transform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "translateY({})", Px(self.translate_y))
    }
}

/// Pixel length, written as a bare `0` when zero.
struct Px(f32);

impl fmt::Display for Px {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 == 0.0 {
            f.write_str("0")
        } else {
            write!(f, "{}px", self.0)
        }
    }
}
