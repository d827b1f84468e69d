//! The toolkit-neutral description of what a control draws.
//!
//! [`ControlView::build`] turns the current configuration and colour-scheme
//! mode into either a loading placeholder or a fully laid-out button. The
//! view carries the resting style; interaction transitions are applied on
//! top by the controller.

use std::fmt;

use carbon_button_style::{
    ColorSchemeMode, InteractionPhase, StyleSnapshot, Variant, resolve_style,
};

use crate::config::Configuration;

/// Class of the row that holds the icon and the label.
pub const CONTENT_CLASS: &str = "carbon-button-content";
/// Class of the icon slot.
pub const ICON_CLASS: &str = "carbon-button-icon";
/// Class added to controls that show only an icon.
pub const ICON_ONLY_CLASS: &str = "carbon-button-icon-only";

/// Font stack.
pub const FONT_FAMILY: &str = r#""IBM Plex Sans", system-ui, -apple-system, sans-serif"#;
/// Font size in pixels.
pub const FONT_SIZE_PX: f32 = 14.0;
/// Font weight.
pub const FONT_WEIGHT: u16 = 400;
/// Unitless line height.
pub const LINE_HEIGHT: f32 = 1.0;
/// Corner radius in pixels.
pub const BORDER_RADIUS_PX: f32 = 0.0;
/// Transition applied to every visual property.
pub const TRANSITION: &str = "all 70ms cubic-bezier(0.2, 0, 0.38, 0.9)";
/// Accessible name used for icon-only controls with no label at all.
pub const ICON_BUTTON_LABEL: &str = "Icon button";

/// What the control draws.
#[derive(Debug, Clone, PartialEq)]
pub enum ControlView {
    /// No configuration has arrived yet.
    Loading(LoadingView),
    /// A configured button.
    Button(ButtonView),
}

impl ControlView {
    /// Lay out the control for `config` under `mode`.
    pub fn build(config: Option<&Configuration>, mode: ColorSchemeMode) -> Self {
        match config {
            Some(config) => Self::Button(ButtonView::new(config, mode)),
            None => Self::Loading(LoadingView::default()),
        }
    }

    /// The button, if configured.
    pub fn as_button(&self) -> Option<&ButtonView> {
        match self {
            Self::Button(button) => Some(button),
            Self::Loading(_) => None,
        }
    }

    /// Whether this is the loading placeholder.
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading(_))
    }
}

/// The placeholder shown before the first configuration arrives.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadingView {
    /// Placeholder text.
    pub text: &'static str,
    /// Uniform padding in pixels.
    pub padding_px: f32,
    /// CSS border shorthand.
    pub border: &'static str,
}

impl Default for LoadingView {
    fn default() -> Self {
        Self {
            text: "Loading Carbon Button...",
            padding_px: 10.0,
            border: "1px solid #ccc",
        }
    }
}

/// Padding in `rem`, clockwise from the top.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Padding {
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
    pub left: f32,
}

impl Padding {
    /// Equal padding on every side.
    pub const ICON_ONLY: Self = Self::uniform(0.75);
    /// Tighter on the icon side to balance the label's visual weight.
    pub const ICON_AND_LABEL: Self = Self {
        top: 0.75,
        right: 1.25,
        bottom: 0.75,
        left: 0.875,
    };
    /// Label only.
    pub const LABEL: Self = Self::symmetric(0.75, 1.0);

    /// The same padding on every side.
    pub const fn uniform(value: f32) -> Self {
        Self {
            top: value,
            right: value,
            bottom: value,
            left: value,
        }
    }

    /// Vertical and horizontal padding.
    pub const fn symmetric(vertical: f32, horizontal: f32) -> Self {
        Self {
            top: vertical,
            right: horizontal,
            bottom: vertical,
            left: horizontal,
        }
    }
}

impl fmt::Display for Padding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let Self {
            top,
            right,
            bottom,
            left,
        } = *self;
        if top == bottom && left == right {
            if top == left {
                write!(f, "{top}rem")
            } else {
                write!(f, "{top}rem {right}rem")
            }
        } else {
            write!(f, "{top}rem {right}rem {bottom}rem {left}rem")
        }
    }
}

/// Horizontal sizing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Width {
    /// Size to content.
    #[default]
    Auto,
    /// Fill the container.
    Full,
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Auto => "auto",
            Self::Full => "100%",
        })
    }
}

/// Pointer cursor shown over the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Cursor {
    #[default]
    Pointer,
    NotAllowed,
}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Pointer => "pointer",
            Self::NotAllowed => "not-allowed",
        })
    }
}

/// A laid-out button.
#[derive(Debug, Clone, PartialEq)]
pub struct ButtonView {
    /// The variant the style was resolved for.
    pub variant: Variant,
    /// Label text, present only when it has visible content.
    pub label: Option<String>,
    /// Icon markup for the icon slot, present only when non-blank.
    pub icon: Option<String>,
    /// Accessible name.
    pub aria_label: Option<String>,
    /// Whether the control shows an icon and no label.
    pub icon_only: bool,
    /// Whether the control is disabled.
    pub disabled: bool,
    /// Content padding.
    pub padding: Padding,
    /// Horizontal sizing.
    pub width: Width,
    /// Pointer cursor.
    pub cursor: Cursor,
    /// Whether a 1px border is drawn in the style's border colour.
    pub bordered: bool,
    /// The resting style.
    pub style: StyleSnapshot,
}

impl ButtonView {
    /// Lay out `config` under `mode`.
    pub fn new(config: &Configuration, mode: ColorSchemeMode) -> Self {
        let label = config.visible_label().map(str::to_owned);
        let icon = config.visible_icon().map(str::to_owned);
        let icon_only = config.is_icon_only();

        let padding = match (icon.is_some(), label.is_some()) {
            (true, false) => Padding::ICON_ONLY,
            (true, true) => Padding::ICON_AND_LABEL,
            _ => Padding::LABEL,
        };

        Self {
            variant: config.variant,
            aria_label: config.accessible_label().map(str::to_owned),
            label,
            icon,
            icon_only,
            disabled: config.disabled,
            padding,
            width: if config.use_container_width {
                Width::Full
            } else {
                Width::Auto
            },
            cursor: if config.disabled {
                Cursor::NotAllowed
            } else {
                Cursor::Pointer
            },
            bordered: config.variant.has_border(),
            style: resolve_style(&config.style_request(mode, InteractionPhase::Rest)),
        }
    }

    /// The class attribute for the button element.
    pub fn class_name(&self) -> &'static str {
        if self.icon_only { ICON_ONLY_CLASS } else { "" }
    }

    /// The CSS `border` shorthand.
    pub fn border(&self) -> String {
        if self.bordered {
            format!("1px solid {}", self.style.border_color)
        } else {
            "none".to_owned()
        }
    }

    /// The full inline style of the button element.
    pub fn inline_css(&self) -> String {
        let style = &self.style;
        let declarations = [
            ("background-color", style.background_color.to_string()),
            ("color", style.text_color.to_string()),
            ("border", self.border()),
            ("padding", self.padding.to_string()),
            ("font-size", format!("{FONT_SIZE_PX}px")),
            ("font-weight", FONT_WEIGHT.to_string()),
            ("border-radius", BORDER_RADIUS_PX.to_string()),
            ("cursor", self.cursor.to_string()),
            ("display", "inline-flex".to_owned()),
            ("align-items", "center".to_owned()),
            ("justify-content", "center".to_owned()),
            ("width", self.width.to_string()),
            ("transition", TRANSITION.to_owned()),
            ("font-family", FONT_FAMILY.to_owned()),
            ("line-height", LINE_HEIGHT.to_string()),
            ("opacity", style.opacity.to_string()),
            ("box-shadow", style.box_shadow.to_string()),
            ("transform", style.transform.to_string()),
            ("outline", "none".to_owned()),
        ];

        declarations
            .iter()
            .map(|(property, value)| format!("{property}: {value};"))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
