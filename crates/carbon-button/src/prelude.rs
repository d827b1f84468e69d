//! Prelude module with commonly used types.
//!
//! ```
//! use carbon_button::prelude::*;
//! ```

pub use crate::channel::{Disconnected, HostChannel};
#[cfg(feature = "system-theme")]
pub use crate::color_scheme::SystemColorScheme;
pub use crate::color_scheme::{ColorSchemeSource, FixedColorScheme, MediaQuery};
pub use crate::config::Configuration;
pub use crate::controller::{InteractionController, PointerEvent, RuntimeState};
pub use crate::error::{ChannelError, ConfigError};
pub use crate::stylesheet::StyleRegistry;
pub use crate::surface::ControlSurface;
pub use crate::view::{ButtonView, ControlView};

pub use carbon_button_style::prelude::*;
