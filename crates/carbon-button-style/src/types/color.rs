//! Colour values.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// An sRGB colour with 8-bit channels and a fractional alpha.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Alpha in the 0.0-1.0 range.
    pub a: f32,
}

impl Rgba {
    /// Create an opaque colour from 8-bit RGB components.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Create a colour from 8-bit RGB components and an alpha.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Return the colour with a different alpha.
    #[inline]
    pub const fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Whether the colour is fully opaque.
    #[inline]
    pub fn is_opaque(&self) -> bool {
        self.a >= 1.0
    }

    pub const BLACK: Self = Self::rgb(0x00, 0x00, 0x00);
    pub const WHITE: Self = Self::rgb(0xff, 0xff, 0xff);
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
        }
    }
}

/// A colour as it appears in a resolved style.
///
/// Built-in palette entries are [`CssColor::Rgba`] or
/// [`CssColor::Transparent`]. Author-supplied override values are kept
/// verbatim as [`CssColor::Custom`] and are never validated; the rendering
/// surface receives exactly the text the host supplied.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum CssColor {
    /// A concrete sRGB colour.
    Rgba(Rgba),
    /// The CSS `transparent` keyword.
    Transparent,
    /// Author-supplied colour text, passed through untouched.
    Custom(Arc<str>),
}

impl CssColor {
    /// Wrap author-supplied colour text.
    pub fn custom(value: impl Into<Arc<str>>) -> Self {
        Self::Custom(value.into())
    }

    /// Create an opaque colour from 8-bit RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::Rgba(Rgba::rgb(r, g, b))
    }

    /// Whether this colour came from the author rather than a palette.
    pub fn is_custom(&self) -> bool {
        matches!(self, Self::Custom(_))
    }

    /// Whether this is a custom value with no text.
    pub fn is_blank(&self) -> bool {
        matches!(self, Self::Custom(text) if text.trim().is_empty())
    }
}

impl From<Rgba> for CssColor {
    fn from(color: Rgba) -> Self {
        Self::Rgba(color)
    }
}

impl From<String> for CssColor {
    fn from(value: String) -> Self {
        Self::Custom(value.into())
    }
}

impl From<&str> for CssColor {
    fn from(value: &str) -> Self {
        Self::Custom(value.into())
    }
}

impl From<CssColor> for String {
    fn from(color: CssColor) -> Self {
        color.to_string()
    }
}

impl fmt::Display for CssColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Rgba(rgba) => rgba.fmt(f),
            Self::Transparent => f.write_str("transparent"),
            Self::Custom(text) => f.write_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_uses_hex_when_opaque() {
        assert_eq!(Rgba::rgb(0xe6, 0xe2, 0xe2).to_string(), "#e6e2e2");
        assert_eq!(
            Rgba::rgba(80, 228, 224, 0.4).to_string(),
            "rgba(80, 228, 224, 0.4)"
        );
    }

    #[test]
    fn custom_colors_are_verbatim() {
        let color = CssColor::from("hsl(120deg 50% 50%)");
        assert!(color.is_custom());
        assert_eq!(color.to_string(), "hsl(120deg 50% 50%)");
        assert_eq!(CssColor::Transparent.to_string(), "transparent");
    }

    #[test]
    fn custom_colors_deserialize_from_strings() {
        let color: CssColor = serde_json::from_str("\"#6929c4\"").unwrap();
        assert_eq!(color, CssColor::custom("#6929c4"));
        assert_eq!(serde_json::to_string(&color).unwrap(), "\"#6929c4\"");
    }
}
