//! Style resolution properties across every variant, mode and phase.

use carbon_button_style::prelude::*;
use carbon_button_style::theme::effects;

const MODES: [ColorSchemeMode; 2] = [ColorSchemeMode::Light, ColorSchemeMode::Dark];

fn full_overrides() -> ColorOverrides {
    OverrideKey::ALL
        .into_iter()
        .map(|key| (key, format!("var(--override-{key})")))
        .collect()
}

#[test]
fn test_phase_cycle_returns_to_rest_snapshot() {
    for variant in Variant::ALL {
        for mode in MODES {
            for is_default in [false, true] {
                let base = StyleRequest::new(variant, mode, InteractionPhase::Rest)
                    .with_default(is_default);
                let original = resolve_style(&base);

                let _ = resolve_style(&base.at_phase(InteractionPhase::Hover));
                let _ = resolve_style(&base.at_phase(InteractionPhase::Pressed));
                let back = resolve_style(&base.at_phase(InteractionPhase::Rest));

                assert_eq!(original, back, "{variant} {mode:?} default={is_default}");
            }
        }
    }
}

#[test]
fn test_full_override_map_wins_in_every_phase() {
    let overrides = full_overrides();

    for mode in MODES {
        for phase in InteractionPhase::ALL {
            let snapshot = resolve_style(
                &StyleRequest::new(Variant::Secondary, mode, phase).with_overrides(Some(&overrides)),
            );

            let expect = |slot| overrides.get(OverrideKey::for_phase(phase, slot)).unwrap();
            assert_eq!(&snapshot.background_color, expect(ColorSlot::Background));
            assert_eq!(&snapshot.text_color, expect(ColorSlot::Text));
            assert_eq!(&snapshot.border_color, expect(ColorSlot::Border));
            assert!(snapshot.background_color.is_custom());
        }
    }
}

#[test]
fn test_overrides_ignored_for_other_variants() {
    let overrides = full_overrides();

    for variant in [Variant::Primary, Variant::Danger, Variant::Ghost] {
        for mode in MODES {
            for phase in InteractionPhase::ALL {
                let plain = StyleRequest::new(variant, mode, phase);
                let with_overrides = plain.with_overrides(Some(&overrides));
                assert_eq!(
                    resolve_style(&plain),
                    resolve_style(&with_overrides),
                    "{variant} {mode:?} {phase:?}"
                );
            }
        }
    }
}

#[test]
fn test_partial_overrides_fall_through_to_palette() {
    let overrides = ColorOverrides::new().with(OverrideKey::RestBg, "#6929c4");
    let snapshot = resolve_style(
        &StyleRequest::new(Variant::Secondary, ColorSchemeMode::Dark, InteractionPhase::Rest)
            .with_overrides(Some(&overrides)),
    );
    let palette = VariantPalette::dark(Variant::Secondary);

    assert_eq!(snapshot.background_color, CssColor::custom("#6929c4"));
    assert_eq!(snapshot.text_color, palette.text);
    assert_eq!(snapshot.border_color, palette.border);
}

#[test]
fn test_disabled_always_resolves_rest_visuals() {
    for variant in Variant::ALL {
        for mode in MODES {
            let rest = resolve_style(
                &StyleRequest::new(variant, mode, InteractionPhase::Rest).with_disabled(true),
            );
            for phase in InteractionPhase::ALL {
                let snapshot = resolve_style(
                    &StyleRequest::new(variant, mode, phase).with_disabled(true),
                );
                assert_eq!(snapshot, rest, "{variant} {mode:?} {phase:?}");
            }
            assert!(rest.opacity < 1.0);
        }
    }
}

#[test]
fn test_default_control_is_elevated_at_rest() {
    for variant in Variant::ALL {
        for mode in MODES {
            let request = StyleRequest::new(variant, mode, InteractionPhase::Rest).with_default(true);

            let snapshot = resolve_style(&request);
            assert!(!snapshot.box_shadow.is_none());
            assert_ne!(snapshot.box_shadow.to_string(), "none");
            assert!(snapshot.transform.lift_px() > 0.0);

            let disabled = resolve_style(&request.with_disabled(true));
            assert!(!disabled.is_elevated(), "{variant} {mode:?}");
            assert_eq!(disabled.transform, Transform::IDENTITY);
            assert_eq!(
                disabled.box_shadow,
                if variant == Variant::Secondary {
                    effects::subtle_drop()
                } else {
                    Shadow::none()
                }
            );
        }
    }
}

#[test]
fn test_css_text_matches_host_expectations() {
    let rest = resolve_style(
        &StyleRequest::new(Variant::Primary, ColorSchemeMode::Light, InteractionPhase::Rest)
            .with_default(true),
    );
    assert_eq!(rest.box_shadow.to_string(), "0 4px 12px rgba(80, 228, 224, 0.4)");
    assert_eq!(rest.transform.to_string(), "translateY(-2px)");

    let pressed = resolve_style(&StyleRequest::new(
        Variant::Ghost,
        ColorSchemeMode::Dark,
        InteractionPhase::Pressed,
    ));
    assert_eq!(pressed.background_color.to_string(), "#67cccc");
    assert_eq!(pressed.box_shadow.to_string(), "inset 0 1px 2px rgba(0, 0, 0, 0.2)");
    assert_eq!(pressed.transform.to_string(), "translateY(0)");
}
