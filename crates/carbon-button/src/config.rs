//! Host-supplied control configuration.
//!
//! The host hands the control a JSON object on every render pass. Decoding is
//! lenient: missing or `null` fields mean "absent", an unrecognised
//! `buttonType` falls back to `primary`, unknown colour keys are ignored and a
//! malformed `default` value reads as zero.

use carbon_button_core::logging::targets;
use carbon_button_style::{
    ColorOverrides, ColorSchemeMode, InteractionPhase, StyleRequest, Variant,
};
use serde::de::IgnoredAny;
use serde::{Deserialize, Deserializer, Serialize};

use crate::error::Result;

/// The declarative description of one control.
///
/// # Example
///
/// ```
/// use carbon_button::Configuration;
/// use carbon_button::style::Variant;
///
/// let config = Configuration::from_json(
///     r#"{"label": "Save", "buttonType": "secondary", "default": 3}"#,
/// )
/// .unwrap();
///
/// assert_eq!(config.label.as_deref(), Some("Save"));
/// assert_eq!(config.variant, Variant::Secondary);
/// assert_eq!(config.default_value, 3);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Configuration {
    /// Visible text.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,

    /// Icon markup, inserted verbatim into the icon slot.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,

    /// Visual variant.
    #[serde(rename = "buttonType", deserialize_with = "null_as_default")]
    pub variant: Variant,

    /// When set, the control ignores interaction and renders muted.
    #[serde(deserialize_with = "null_as_default")]
    pub disabled: bool,

    /// Stretch to the container's width.
    #[serde(deserialize_with = "null_as_default")]
    pub use_container_width: bool,

    /// Author colour overrides, honoured for `secondary` only.
    #[serde(rename = "colors", skip_serializing_if = "Option::is_none")]
    pub color_overrides: Option<ColorOverrides>,

    /// Marks the page's primary call to action.
    #[serde(deserialize_with = "null_as_default")]
    pub is_default: bool,

    /// Explicit accessible name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub aria_label: Option<String>,

    /// Initial click count.
    #[serde(rename = "default", deserialize_with = "lenient_count")]
    pub default_value: u64,
}

impl Configuration {
    /// An enabled `primary` control with nothing else set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Decode a host payload.
    pub fn from_json(payload: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(payload)?;
        Ok(config.normalized())
    }

    /// Decode an already-parsed host payload.
    pub fn from_value(payload: serde_json::Value) -> Result<Self> {
        let config: Self = serde_json::from_value(payload)?;
        Ok(config.normalized())
    }

    fn normalized(mut self) -> Self {
        self.color_overrides = self
            .color_overrides
            .map(ColorOverrides::without_blank)
            .filter(|overrides| !overrides.is_empty());
        self
    }

    /// Set the label using builder pattern.
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Set the icon markup using builder pattern.
    pub fn with_icon(mut self, icon: impl Into<String>) -> Self {
        self.icon = Some(icon.into());
        self
    }

    /// Set the variant using builder pattern.
    pub fn with_variant(mut self, variant: Variant) -> Self {
        self.variant = variant;
        self
    }

    /// Set the disabled flag using builder pattern.
    pub fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Set container-width stretching using builder pattern.
    pub fn with_container_width(mut self, use_container_width: bool) -> Self {
        self.use_container_width = use_container_width;
        self
    }

    /// Set the colour overrides using builder pattern.
    pub fn with_color_overrides(mut self, overrides: ColorOverrides) -> Self {
        self.color_overrides = Some(overrides);
        self
    }

    /// Set the default-control flag using builder pattern.
    pub fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Set the accessible name using builder pattern.
    pub fn with_aria_label(mut self, aria_label: impl Into<String>) -> Self {
        self.aria_label = Some(aria_label.into());
        self
    }

    /// Set the initial click count using builder pattern.
    pub fn with_default_value(mut self, value: u64) -> Self {
        self.default_value = value;
        self
    }

    /// The label, when it has visible content.
    pub fn visible_label(&self) -> Option<&str> {
        self.label.as_deref().filter(|label| !label.trim().is_empty())
    }

    /// The icon markup, when it has visible content.
    pub fn visible_icon(&self) -> Option<&str> {
        self.icon.as_deref().filter(|icon| !icon.trim().is_empty())
    }

    /// The control shows an icon and no label.
    pub fn is_icon_only(&self) -> bool {
        self.visible_icon().is_some() && self.visible_label().is_none()
    }

    /// The accessible name the control should expose, if any.
    ///
    /// An explicit `ariaLabel` wins. Icon-only controls fall back to the raw
    /// label, then to `"Icon button"`. Other controls rely on their text.
    pub fn accessible_label(&self) -> Option<&str> {
        if let Some(aria) = self.aria_label.as_deref().filter(|aria| !aria.is_empty()) {
            return Some(aria);
        }
        if self.is_icon_only() {
            return Some(
                self.label
                    .as_deref()
                    .filter(|label| !label.is_empty())
                    .unwrap_or("Icon button"),
            );
        }
        None
    }

    /// The style inputs for this configuration.
    pub fn style_request(
        &self,
        mode: ColorSchemeMode,
        phase: InteractionPhase,
    ) -> StyleRequest<'_> {
        StyleRequest::new(self.variant, mode, phase)
            .with_overrides(self.color_overrides.as_ref())
            .with_default(self.is_default)
            .with_disabled(self.disabled)
    }
}

fn null_as_default<'de, D, T>(deserializer: D) -> std::result::Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de> + Default,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawCount {
    Unsigned(u64),
    Signed(i64),
    Float(f64),
    Other(IgnoredAny),
}

fn lenient_count<'de, D>(deserializer: D) -> std::result::Result<u64, D::Error>
where
    D: Deserializer<'de>,
{
    let count = match RawCount::deserialize(deserializer)? {
        RawCount::Unsigned(value) => value,
        RawCount::Signed(_) => 0,
        RawCount::Float(value) if value.is_finite() && value > 0.0 => value as u64,
        RawCount::Float(value) => {
            tracing::debug!(target: targets::CONTROLLER, value, "non-positive default count, using 0");
            0
        }
        RawCount::Other(_) => {
            tracing::debug!(target: targets::CONTROLLER, "non-numeric default count, using 0");
            0
        }
    };
    Ok(count)
}
