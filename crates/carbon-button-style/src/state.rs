//! Inputs that select a style: variant, colour-scheme mode, interaction phase.

use std::fmt;

use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

/// The semantic role of a control, driving its base palette.
///
/// Decoding never fails: an unknown name, or a value that is not a string
/// at all, becomes [`Variant::Primary`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(into = "&'static str")]
pub enum Variant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl Variant {
    /// All variants, in declaration order.
    pub const ALL: [Variant; 4] = [
        Variant::Primary,
        Variant::Secondary,
        Variant::Danger,
        Variant::Ghost,
    ];

    /// Look up a variant by its wire name.
    ///
    /// Unknown names fall back to [`Variant::Primary`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "primary" => Self::Primary,
            "secondary" => Self::Secondary,
            "danger" => Self::Danger,
            "ghost" => Self::Ghost,
            other => {
                tracing::debug!(
                    target: carbon_button_core::logging::targets::RESOLVE,
                    variant = other,
                    "unknown variant, using primary"
                );
                Self::Primary
            }
        }
    }

    /// The wire name of this variant.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Secondary => "secondary",
            Self::Danger => "danger",
            Self::Ghost => "ghost",
        }
    }

    /// Whether the variant draws a visible border.
    pub const fn has_border(self) -> bool {
        matches!(self, Self::Secondary | Self::Ghost)
    }

    /// Whether author colour overrides are honoured for this variant.
    pub const fn accepts_overrides(self) -> bool {
        matches!(self, Self::Secondary)
    }
}

impl From<String> for Variant {
    fn from(name: String) -> Self {
        Self::from_name(&name)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawVariant {
    Name(String),
    Other(IgnoredAny),
}

impl<'de> Deserialize<'de> for Variant {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawVariant::deserialize(deserializer)? {
            RawVariant::Name(name) => Self::from_name(&name),
            RawVariant::Other(_) => {
                tracing::debug!(
                    target: carbon_button_core::logging::targets::RESOLVE,
                    "non-string variant, using primary"
                );
                Self::Primary
            }
        })
    }
}

impl From<Variant> for &'static str {
    fn from(variant: Variant) -> Self {
        variant.as_str()
    }
}

impl fmt::Display for Variant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The host environment's light/dark display preference.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ColorSchemeMode {
    #[default]
    Light,
    Dark,
}

impl ColorSchemeMode {
    /// Derive the mode from a "prefers dark colour scheme" query result.
    pub const fn from_prefers_dark(prefers_dark: bool) -> Self {
        if prefers_dark { Self::Dark } else { Self::Light }
    }

    /// Returns true for the dark mode.
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }
}

/// The pointer-driven interaction state of a control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum InteractionPhase {
    #[default]
    Rest,
    Hover,
    Pressed,
}

impl InteractionPhase {
    /// All phases, in declaration order.
    pub const ALL: [InteractionPhase; 3] = [
        InteractionPhase::Rest,
        InteractionPhase::Hover,
        InteractionPhase::Pressed,
    ];
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn variant_names_round_trip() {
        for variant in Variant::ALL {
            assert_eq!(Variant::from_name(variant.as_str()), variant);
        }
    }

    #[test]
    fn unknown_variant_falls_back_to_primary() {
        assert_eq!(Variant::from_name("tertiary"), Variant::Primary);
        assert_eq!(Variant::from_name(""), Variant::Primary);
        assert_eq!(Variant::from_name("Secondary"), Variant::Primary);

        let parsed: Variant = serde_json::from_str("\"warning\"").unwrap();
        assert_eq!(parsed, Variant::Primary);
    }

    #[test]
    fn non_string_variant_decodes_as_primary() {
        for payload in ["3", "true", "[\"secondary\"]", "{\"name\": \"ghost\"}"] {
            let parsed: Variant = serde_json::from_str(payload).unwrap();
            assert_eq!(parsed, Variant::Primary, "{payload}");
        }
        let parsed: Variant = serde_json::from_str("\"danger\"").unwrap();
        assert_eq!(parsed, Variant::Danger);
    }

    #[test]
    fn only_secondary_accepts_overrides() {
        let accepting: Vec<_> = Variant::ALL
            .into_iter()
            .filter(|v| v.accepts_overrides())
            .collect();
        assert_eq!(accepting, vec![Variant::Secondary]);
    }

    #[test]
    fn mode_from_query() {
        assert_eq!(ColorSchemeMode::from_prefers_dark(true), ColorSchemeMode::Dark);
        assert_eq!(ColorSchemeMode::from_prefers_dark(false), ColorSchemeMode::Light);
    }
}
