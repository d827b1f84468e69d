//! Fully resolved visual state of a control.

use crate::types::{CssColor, Shadow, Transform};

/// The concrete visual properties for one combination of variant,
/// colour-scheme mode, interaction phase and overrides.
///
/// Snapshots compare by value; two resolutions with identical inputs are
/// always equal.
#[derive(Debug, Clone, PartialEq)]
pub struct StyleSnapshot {
    /// Background colour.
    pub background_color: CssColor,
    /// Text and icon colour.
    pub text_color: CssColor,
    /// Border colour. Whether a border is drawn is a variant property.
    pub border_color: CssColor,
    /// Box shadow layers.
    pub box_shadow: Shadow,
    /// Vertical offset.
    pub transform: Transform,
    /// Opacity (0.0 = transparent, 1.0 = opaque).
    pub opacity: f32,
}

impl StyleSnapshot {
    /// Whether the snapshot carries the elevated "floating" treatment.
    pub fn is_elevated(&self) -> bool {
        !self.box_shadow.is_none() && self.transform.is_lifted()
    }

    /// CSS property/value pairs, in the order an adapter should apply them.
    ///
    /// ```
    /// use carbon_button_style::prelude::*;
    ///
    /// let snapshot = resolve_style(&StyleRequest::new(
    ///     Variant::Primary,
    ///     ColorSchemeMode::Light,
    ///     InteractionPhase::Rest,
    /// ));
    /// let declarations = snapshot.css_declarations();
    /// assert_eq!(declarations[0], ("background-color", "#e6e2e2".to_string()));
    /// assert_eq!(declarations[3], ("box-shadow", "none".to_string()));
    /// ```
    pub fn css_declarations(&self) -> [(&'static str, String); 6] {
        [
            ("background-color", self.background_color.to_string()),
            ("color", self.text_color.to_string()),
            ("border-color", self.border_color.to_string()),
            ("box-shadow", self.box_shadow.to_string()),
            ("transform", self.transform.to_string()),
            ("opacity", self.opacity.to_string()),
        ]
    }
}

static_assertions::assert_impl_all!(StyleSnapshot: Send, Sync);
