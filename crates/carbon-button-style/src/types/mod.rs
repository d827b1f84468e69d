//! Value types that appear in a resolved style.

mod color;
mod shadow;

pub use color::{CssColor, Rgba};
pub use shadow::{BoxShadow, Shadow, Transform};
