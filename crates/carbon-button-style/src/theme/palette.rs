//! Built-in colour palettes.

use crate::state::{ColorSchemeMode, Variant};
use crate::types::{CssColor, Rgba};

/// Shared teal accent behind every non-danger active background (light mode).
pub const ACCENT_TEAL: Rgba = Rgba::rgb(0x50, 0xe4, 0xe0);
/// Shared teal accent behind every non-danger active background (dark mode).
pub const ACCENT_TEAL_DARK: Rgba = Rgba::rgb(0x67, 0xcc, 0xcc);

/// Colours of one variant under one colour-scheme mode.
///
/// There is no built-in hover text or border: hover reuses the resting
/// text and border colours. Active text lives in [`active_text`] because it
/// depends only on the mode.
#[derive(Debug, Clone, PartialEq)]
pub struct VariantPalette {
    /// Resting background.
    pub background: CssColor,
    /// Resting text, also used on hover.
    pub text: CssColor,
    /// Resting border, also used on hover and while pressed.
    pub border: CssColor,
    /// Background while hovered.
    pub hover_background: CssColor,
    /// Background while pressed.
    pub active_background: CssColor,
}

impl VariantPalette {
    /// The built-in palette for `variant` under `mode`.
    pub fn builtin(variant: Variant, mode: ColorSchemeMode) -> Self {
        match mode {
            ColorSchemeMode::Light => Self::light(variant),
            ColorSchemeMode::Dark => Self::dark(variant),
        }
    }

    /// Light mode palette: subtle greys with a teal accent.
    pub fn light(variant: Variant) -> Self {
        match variant {
            Variant::Primary | Variant::Secondary => Self {
                background: CssColor::rgb(0xe6, 0xe2, 0xe2),
                text: CssColor::rgb(0x1a, 0x1a, 0x1a),
                border: CssColor::rgb(0xcc, 0xcc, 0xcc),
                hover_background: CssColor::rgb(0xf5, 0xf5, 0xf5),
                active_background: ACCENT_TEAL.into(),
            },
            Variant::Danger => Self {
                background: CssColor::rgb(0xf4, 0xe3, 0xe3),
                text: CssColor::rgb(0x4a, 0x14, 0x14),
                border: CssColor::rgb(0xe0, 0xc0, 0xc0),
                hover_background: CssColor::rgb(0xfa, 0xf0, 0xf0),
                active_background: CssColor::rgb(0xe4, 0x80, 0x7a),
            },
            Variant::Ghost => Self {
                background: CssColor::Transparent,
                text: CssColor::rgb(0x26, 0x26, 0x26),
                border: CssColor::rgb(0xe0, 0xe0, 0xe0),
                hover_background: CssColor::rgb(0xfa, 0xfa, 0xfa),
                active_background: ACCENT_TEAL.into(),
            },
        }
    }

    /// Dark mode palette: pink-greys with a deeper teal accent.
    pub fn dark(variant: Variant) -> Self {
        match variant {
            Variant::Primary => Self {
                background: CssColor::rgb(0xec, 0xdc, 0xdc),
                text: CssColor::rgb(0x1a, 0x1a, 0x1a),
                border: CssColor::rgb(0x40, 0x40, 0x40),
                hover_background: CssColor::rgb(0x4a, 0x4a, 0x4a),
                active_background: ACCENT_TEAL_DARK.into(),
            },
            Variant::Secondary => Self {
                hover_background: CssColor::rgb(0xf6, 0xf4, 0xf4),
                ..Self::dark(Variant::Primary)
            },
            Variant::Danger => Self {
                background: CssColor::rgb(0xf0, 0xd0, 0xd0),
                text: CssColor::rgb(0x4a, 0x14, 0x14),
                border: CssColor::rgb(0x5a, 0x40, 0x40),
                hover_background: CssColor::rgb(0x5a, 0x43, 0x43),
                active_background: CssColor::rgb(0xcc, 0x66, 0x66),
            },
            Variant::Ghost => Self {
                background: CssColor::Transparent,
                text: CssColor::rgb(0x26, 0x26, 0x26),
                border: CssColor::rgb(0x40, 0x40, 0x40),
                hover_background: CssColor::rgb(0x2a, 0x2a, 0x2a),
                active_background: ACCENT_TEAL_DARK.into(),
            },
        }
    }
}

/// Text colour while pressed, chosen for contrast against the teal accent.
pub const fn active_text(mode: ColorSchemeMode) -> Rgba {
    match mode {
        ColorSchemeMode::Dark => Rgba::BLACK,
        ColorSchemeMode::Light => Rgba::WHITE,
    }
}
