//! Built-in palettes and effect recipes.

pub mod effects;
mod palette;

pub use palette::{ACCENT_TEAL, ACCENT_TEAL_DARK, VariantPalette, active_text};
