//! Style resolution.
//!
//! [`resolve_style`] maps a [`StyleRequest`] to a [`StyleSnapshot`]. It is a
//! pure function: no caching, no shared state, identical requests always
//! produce equal snapshots.
//!
//! Colour precedence for each of background, text and border:
//!
//! 1. the override for the current phase, when the variant is `secondary`
//!    and the key is present;
//! 2. the built-in palette entry for the variant and mode (hover and active
//!    text/border resolve to the resting colours, overrides included);
//! 3. the `primary` palette, which is what any unrecognised variant name
//!    resolves to before it reaches this function.

use carbon_button_core::logging::targets;

use crate::overrides::{ColorOverrides, ColorSlot, OverrideKey};
use crate::snapshot::StyleSnapshot;
use crate::state::{ColorSchemeMode, InteractionPhase, Variant};
use crate::theme::{VariantPalette, active_text, effects};
use crate::types::{CssColor, Shadow, Transform};

/// Everything style resolution depends on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StyleRequest<'a> {
    /// The control's variant.
    pub variant: Variant,
    /// The host's colour-scheme mode.
    pub mode: ColorSchemeMode,
    /// The recorded interaction phase.
    pub phase: InteractionPhase,
    /// Author colour overrides, honoured only for `secondary`.
    pub overrides: Option<&'a ColorOverrides>,
    /// Whether the control is the page's primary call to action.
    pub is_default: bool,
    /// Whether the control is disabled.
    pub disabled: bool,
}

impl<'a> StyleRequest<'a> {
    /// A request with no overrides, not default, enabled.
    pub const fn new(variant: Variant, mode: ColorSchemeMode, phase: InteractionPhase) -> Self {
        Self {
            variant,
            mode,
            phase,
            overrides: None,
            is_default: false,
            disabled: false,
        }
    }

    /// Set the override map using builder pattern.
    pub const fn with_overrides(mut self, overrides: Option<&'a ColorOverrides>) -> Self {
        self.overrides = overrides;
        self
    }

    /// Mark the control as the default call to action.
    pub const fn with_default(mut self, is_default: bool) -> Self {
        self.is_default = is_default;
        self
    }

    /// Set the disabled flag using builder pattern.
    pub const fn with_disabled(mut self, disabled: bool) -> Self {
        self.disabled = disabled;
        self
    }

    /// Replace the phase, keeping everything else.
    pub const fn at_phase(mut self, phase: InteractionPhase) -> Self {
        self.phase = phase;
        self
    }

    /// The phase whose visuals apply. Disabled controls always rest.
    pub const fn effective_phase(&self) -> InteractionPhase {
        if self.disabled {
            InteractionPhase::Rest
        } else {
            self.phase
        }
    }

    fn effective_overrides(&self) -> Option<&'a ColorOverrides> {
        if self.variant.accepts_overrides() {
            self.overrides
        } else {
            None
        }
    }
}

/// Resolve the concrete style for `request`.
///
/// # Example
///
/// ```
/// use carbon_button_style::prelude::*;
///
/// let request = StyleRequest::new(Variant::Primary, ColorSchemeMode::Dark, InteractionPhase::Pressed);
/// let snapshot = resolve_style(&request);
///
/// assert_eq!(snapshot.text_color.to_string(), "#000000");
/// assert!(snapshot.box_shadow.is_inset());
/// ```
pub fn resolve_style(request: &StyleRequest<'_>) -> StyleSnapshot {
    let palette = VariantPalette::builtin(request.variant, request.mode);
    let overrides = request.effective_overrides();
    let phase = request.effective_phase();

    let pick = |slot: ColorSlot, phase: InteractionPhase, builtin: CssColor| {
        overrides
            .and_then(|o| o.get(OverrideKey::for_phase(phase, slot)))
            .cloned()
            .unwrap_or(builtin)
    };

    let rest_text = pick(ColorSlot::Text, InteractionPhase::Rest, palette.text);
    let rest_border = pick(ColorSlot::Border, InteractionPhase::Rest, palette.border);

    let elevated = request.is_default && !request.disabled;

    let snapshot = match phase {
        InteractionPhase::Rest => {
            let (box_shadow, transform) = if elevated {
                (effects::default_glow(), Transform::lift(effects::DEFAULT_REST_LIFT))
            } else if request.variant == Variant::Secondary {
                (effects::subtle_drop(), Transform::IDENTITY)
            } else {
                (Shadow::none(), Transform::IDENTITY)
            };
            StyleSnapshot {
                background_color: pick(ColorSlot::Background, phase, palette.background),
                text_color: rest_text,
                border_color: rest_border,
                box_shadow,
                transform,
                opacity: 1.0,
            }
        }
        InteractionPhase::Hover => {
            let (box_shadow, transform) = if request.is_default {
                (
                    effects::default_glow_hover(),
                    Transform::lift(effects::DEFAULT_HOVER_LIFT),
                )
            } else {
                (effects::hover_drop(), Transform::lift(effects::HOVER_LIFT))
            };
            StyleSnapshot {
                background_color: pick(ColorSlot::Background, phase, palette.hover_background),
                text_color: pick(ColorSlot::Text, phase, rest_text),
                border_color: pick(ColorSlot::Border, phase, rest_border),
                box_shadow,
                transform,
                opacity: 1.0,
            }
        }
        InteractionPhase::Pressed => StyleSnapshot {
            background_color: pick(ColorSlot::Background, phase, palette.active_background),
            text_color: pick(ColorSlot::Text, phase, active_text(request.mode).into()),
            border_color: pick(ColorSlot::Border, phase, rest_border),
            box_shadow: effects::pressed_inset(),
            transform: Transform::IDENTITY,
            opacity: 1.0,
        },
    };

    let snapshot = if request.disabled {
        StyleSnapshot {
            opacity: effects::DISABLED_OPACITY,
            ..snapshot
        }
    } else {
        snapshot
    };

    tracing::trace!(
        target: targets::RESOLVE,
        variant = %request.variant,
        mode = ?request.mode,
        phase = ?phase,
        background = %snapshot.background_color,
        "resolved style"
    );

    snapshot
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Rgba;

    fn request(variant: Variant, phase: InteractionPhase) -> StyleRequest<'static> {
        StyleRequest::new(variant, ColorSchemeMode::Light, phase)
    }

    #[test]
    fn rest_shadow_depends_on_variant() {
        let secondary = resolve_style(&request(Variant::Secondary, InteractionPhase::Rest));
        assert_eq!(secondary.box_shadow, effects::subtle_drop());

        for variant in [Variant::Primary, Variant::Danger, Variant::Ghost] {
            let snapshot = resolve_style(&request(variant, InteractionPhase::Rest));
            assert!(snapshot.box_shadow.is_none(), "{variant}");
            assert_eq!(snapshot.transform, Transform::IDENTITY);
        }
    }

    #[test]
    fn default_glow_overrides_variant_shadow_at_rest() {
        let snapshot = resolve_style(
            &request(Variant::Secondary, InteractionPhase::Rest).with_default(true),
        );
        assert_eq!(snapshot.box_shadow, effects::default_glow());
        assert_eq!(snapshot.transform, Transform::lift(2.0));
        assert!(snapshot.is_elevated());
    }

    #[test]
    fn hover_lift_depends_on_default() {
        let plain = resolve_style(&request(Variant::Primary, InteractionPhase::Hover));
        assert_eq!(plain.transform, Transform::lift(1.0));
        assert_eq!(plain.box_shadow, effects::hover_drop());

        let default = resolve_style(
            &request(Variant::Primary, InteractionPhase::Hover).with_default(true),
        );
        assert_eq!(default.transform, Transform::lift(3.0));
        assert_eq!(default.box_shadow, effects::default_glow_hover());
    }

    #[test]
    fn hover_reuses_resting_text_and_border() {
        for variant in Variant::ALL {
            let rest = resolve_style(&request(variant, InteractionPhase::Rest));
            let hover = resolve_style(&request(variant, InteractionPhase::Hover));
            assert_eq!(rest.text_color, hover.text_color, "{variant}");
            assert_eq!(rest.border_color, hover.border_color, "{variant}");
            assert_ne!(rest.background_color, hover.background_color, "{variant}");
        }
    }

    #[test]
    fn hover_falls_back_to_resting_overrides() {
        let overrides = ColorOverrides::new()
            .with(OverrideKey::RestText, "#ffffff")
            .with(OverrideKey::RestBorder, "#6929c4");
        let hover = resolve_style(
            &request(Variant::Secondary, InteractionPhase::Hover).with_overrides(Some(&overrides)),
        );
        assert_eq!(hover.text_color, CssColor::custom("#ffffff"));
        assert_eq!(hover.border_color, CssColor::custom("#6929c4"));
    }

    #[test]
    fn pressed_cancels_lift_and_glow() {
        let pressed = resolve_style(
            &request(Variant::Primary, InteractionPhase::Pressed).with_default(true),
        );
        assert_eq!(pressed.transform, Transform::IDENTITY);
        assert_eq!(pressed.box_shadow, effects::pressed_inset());
        assert_eq!(pressed.background_color, CssColor::from(crate::theme::ACCENT_TEAL));
    }

    #[test]
    fn pressed_text_is_mode_dependent_for_every_variant() {
        for variant in Variant::ALL {
            let light = resolve_style(&request(variant, InteractionPhase::Pressed));
            let dark = resolve_style(
                &StyleRequest::new(variant, ColorSchemeMode::Dark, InteractionPhase::Pressed),
            );
            assert_eq!(light.text_color, CssColor::Rgba(Rgba::WHITE), "{variant}");
            assert_eq!(dark.text_color, CssColor::Rgba(Rgba::BLACK), "{variant}");
        }
    }

    #[test]
    fn disabled_rests_with_reduced_opacity() {
        for phase in InteractionPhase::ALL {
            let disabled = resolve_style(
                &request(Variant::Danger, phase).with_disabled(true),
            );
            let rest = resolve_style(&request(Variant::Danger, InteractionPhase::Rest));
            assert_eq!(disabled.background_color, rest.background_color);
            assert_eq!(disabled.box_shadow, rest.box_shadow);
            assert_eq!(disabled.opacity, effects::DISABLED_OPACITY);
        }
    }
}
