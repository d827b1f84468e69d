//! Author-supplied colour overrides.

use std::fmt;
use std::str::FromStr;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use carbon_button_core::logging::targets;

use crate::error::Error;
use crate::state::InteractionPhase;
use crate::types::CssColor;

/// Names one overridable colour slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OverrideKey {
    RestBg,
    RestText,
    RestBorder,
    HoverBg,
    HoverText,
    HoverBorder,
    ActiveBg,
    ActiveText,
    ActiveBorder,
}

/// The colour property an override replaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorSlot {
    Background,
    Text,
    Border,
}

impl OverrideKey {
    /// Every key, grouped by phase.
    pub const ALL: [OverrideKey; 9] = [
        OverrideKey::RestBg,
        OverrideKey::RestText,
        OverrideKey::RestBorder,
        OverrideKey::HoverBg,
        OverrideKey::HoverText,
        OverrideKey::HoverBorder,
        OverrideKey::ActiveBg,
        OverrideKey::ActiveText,
        OverrideKey::ActiveBorder,
    ];

    /// The key for `slot` during `phase`.
    pub const fn for_phase(phase: InteractionPhase, slot: ColorSlot) -> Self {
        match (phase, slot) {
            (InteractionPhase::Rest, ColorSlot::Background) => Self::RestBg,
            (InteractionPhase::Rest, ColorSlot::Text) => Self::RestText,
            (InteractionPhase::Rest, ColorSlot::Border) => Self::RestBorder,
            (InteractionPhase::Hover, ColorSlot::Background) => Self::HoverBg,
            (InteractionPhase::Hover, ColorSlot::Text) => Self::HoverText,
            (InteractionPhase::Hover, ColorSlot::Border) => Self::HoverBorder,
            (InteractionPhase::Pressed, ColorSlot::Background) => Self::ActiveBg,
            (InteractionPhase::Pressed, ColorSlot::Text) => Self::ActiveText,
            (InteractionPhase::Pressed, ColorSlot::Border) => Self::ActiveBorder,
        }
    }

    /// The wire name of this key.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::RestBg => "rest_bg",
            Self::RestText => "rest_text",
            Self::RestBorder => "rest_border",
            Self::HoverBg => "hover_bg",
            Self::HoverText => "hover_text",
            Self::HoverBorder => "hover_border",
            Self::ActiveBg => "active_bg",
            Self::ActiveText => "active_text",
            Self::ActiveBorder => "active_border",
        }
    }
}

impl FromStr for OverrideKey {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == name)
            .ok_or_else(|| Error::unknown_override_key(name))
    }
}

impl fmt::Display for OverrideKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A sparse map of colour overrides.
///
/// Missing keys fall through to the built-in palette. Values are taken
/// verbatim; unknown keys and non-string values in a decoded payload are
/// ignored.
///
/// ```
/// use carbon_button_style::{ColorOverrides, OverrideKey};
///
/// let overrides = ColorOverrides::new()
///     .with(OverrideKey::RestBg, "#6929c4")
///     .with(OverrideKey::RestText, "#ffffff");
///
/// assert_eq!(overrides.len(), 2);
/// assert!(overrides.get(OverrideKey::HoverBg).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ColorOverrides {
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub rest_bg: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub rest_text: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub rest_border: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub hover_bg: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub hover_text: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub hover_border: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub active_bg: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub active_text: Option<CssColor>,
    #[serde(skip_serializing_if = "Option::is_none", deserialize_with = "lenient_color")]
    pub active_border: Option<CssColor>,
}

impl ColorOverrides {
    /// An empty override map.
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self, key: OverrideKey) -> &Option<CssColor> {
        match key {
            OverrideKey::RestBg => &self.rest_bg,
            OverrideKey::RestText => &self.rest_text,
            OverrideKey::RestBorder => &self.rest_border,
            OverrideKey::HoverBg => &self.hover_bg,
            OverrideKey::HoverText => &self.hover_text,
            OverrideKey::HoverBorder => &self.hover_border,
            OverrideKey::ActiveBg => &self.active_bg,
            OverrideKey::ActiveText => &self.active_text,
            OverrideKey::ActiveBorder => &self.active_border,
        }
    }

    fn slot_mut(&mut self, key: OverrideKey) -> &mut Option<CssColor> {
        match key {
            OverrideKey::RestBg => &mut self.rest_bg,
            OverrideKey::RestText => &mut self.rest_text,
            OverrideKey::RestBorder => &mut self.rest_border,
            OverrideKey::HoverBg => &mut self.hover_bg,
            OverrideKey::HoverText => &mut self.hover_text,
            OverrideKey::HoverBorder => &mut self.hover_border,
            OverrideKey::ActiveBg => &mut self.active_bg,
            OverrideKey::ActiveText => &mut self.active_text,
            OverrideKey::ActiveBorder => &mut self.active_border,
        }
    }

    /// The override for `key`, if present.
    pub fn get(&self, key: OverrideKey) -> Option<&CssColor> {
        self.slot(key).as_ref()
    }

    /// Set or replace the override for `key`.
    pub fn set(&mut self, key: OverrideKey, color: impl Into<CssColor>) {
        *self.slot_mut(key) = Some(color.into());
    }

    /// Remove the override for `key`, returning it.
    pub fn remove(&mut self, key: OverrideKey) -> Option<CssColor> {
        self.slot_mut(key).take()
    }

    /// Set an override using builder pattern.
    pub fn with(mut self, key: OverrideKey, color: impl Into<CssColor>) -> Self {
        self.set(key, color);
        self
    }

    /// Iterate over present overrides in key order.
    pub fn iter(&self) -> impl Iterator<Item = (OverrideKey, &CssColor)> + '_ {
        OverrideKey::ALL
            .into_iter()
            .filter_map(|key| self.get(key).map(|color| (key, color)))
    }

    /// Drop overrides whose value is blank, so the palette applies instead.
    pub fn without_blank(mut self) -> Self {
        for key in OverrideKey::ALL {
            if self.get(key).is_some_and(CssColor::is_blank) {
                self.remove(key);
            }
        }
        self
    }

    /// Number of present overrides.
    pub fn len(&self) -> usize {
        self.iter().count()
    }

    /// Whether no override is present.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawColor {
    Text(String),
    Other(IgnoredAny),
}

fn lenient_color<'de, D>(deserializer: D) -> Result<Option<CssColor>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match RawColor::deserialize(deserializer)? {
        RawColor::Text(text) => Some(CssColor::from(text)),
        RawColor::Other(_) => {
            tracing::debug!(target: targets::RESOLVE, "non-string colour override ignored");
            None
        }
    })
}

impl<C: Into<CssColor>> FromIterator<(OverrideKey, C)> for ColorOverrides {
    fn from_iter<I: IntoIterator<Item = (OverrideKey, C)>>(iter: I) -> Self {
        let mut overrides = Self::new();
        for (key, color) in iter {
            overrides.set(key, color);
        }
        overrides
    }
}
