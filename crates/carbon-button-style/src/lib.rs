//! Style resolution for Carbon Button.
//!
//! This crate maps a declarative button configuration onto concrete visual
//! state. It owns no mutable state:
//!
//! - **Variants**: `primary`, `secondary`, `danger`, `ghost` base palettes
//! - **Colour schemes**: light and dark palettes for every variant
//! - **Phases**: rest, hover and pressed visuals, plus the disabled collapse
//! - **Overrides**: author colours for the `secondary` variant
//! - **Emphasis**: the elevated glow of the page's default control
//!
//! # Example
//!
//! ```
//! use carbon_button_style::prelude::*;
//!
//! let overrides = ColorOverrides::new().with(OverrideKey::HoverBg, "#491d8b");
//!
//! let request = StyleRequest::new(Variant::Secondary, ColorSchemeMode::Light, InteractionPhase::Hover)
//!     .with_overrides(Some(&overrides));
//! let snapshot = resolve_style(&request);
//!
//! assert_eq!(snapshot.background_color.to_string(), "#491d8b");
//! assert_eq!(snapshot.transform.to_string(), "translateY(-1px)");
//! ```

pub mod overrides;
pub mod resolve;
pub mod snapshot;
pub mod state;
pub mod theme;
pub mod types;

mod error;

pub use error::{Error, Result};
pub use overrides::{ColorOverrides, ColorSlot, OverrideKey};
pub use resolve::{StyleRequest, resolve_style};
pub use snapshot::StyleSnapshot;
pub use state::{ColorSchemeMode, InteractionPhase, Variant};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::overrides::{ColorOverrides, ColorSlot, OverrideKey};
    pub use crate::resolve::{StyleRequest, resolve_style};
    pub use crate::snapshot::StyleSnapshot;
    pub use crate::state::{ColorSchemeMode, InteractionPhase, Variant};
    pub use crate::theme::VariantPalette;
    pub use crate::types::{BoxShadow, CssColor, Rgba, Shadow, Transform};
}
