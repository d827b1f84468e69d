//! Carbon Button - an embeddable, Carbon-styled button control.
//!
//! The control is driven entirely by its host: the host supplies a
//! [`Configuration`] on every render pass, forwards pointer events, and
//! receives the click count and frame height back over a [`HostChannel`].
//! Drawing is delegated to a [`ControlSurface`]; the style of every
//! interaction phase comes from the pure resolver in [`style`].
//!
//! # Example
//!
//! ```
//! use carbon_button::prelude::*;
//!
//! #[derive(Default)]
//! struct Log(Vec<u64>);
//!
//! impl HostChannel for Log {
//!     fn report_value(&mut self, value: u64) -> Result<(), ChannelError> {
//!         self.0.push(value);
//!         Ok(())
//!     }
//!
//!     fn report_frame_height(&mut self, _height: f32) -> Result<(), ChannelError> {
//!         Ok(())
//!     }
//! }
//!
//! struct Headless;
//!
//! impl ControlSurface for Headless {
//!     fn render(&mut self, _view: &ControlView) {}
//!     fn apply_style(&mut self, _snapshot: &StyleSnapshot) {}
//!     fn rendered_height(&self) -> f32 {
//!         42.0
//!     }
//! }
//!
//! let config = Configuration::from_json(r#"{"label": "Deploy", "isDefault": true}"#)?;
//! let controller = InteractionController::new(Log::default(), Headless)
//!     .with_color_scheme(MediaQuery::new(true));
//!
//! controller.on_mount(Some(config));
//! controller.on_activate();
//! assert_eq!(controller.click_count(), 1);
//! assert_eq!(controller.color_scheme_mode(), ColorSchemeMode::Dark);
//! # Ok::<(), carbon_button::ConfigError>(())
//! ```

pub use carbon_button_core::*;

/// Style resolution module.
pub mod style {
    pub use carbon_button_style::*;
}

pub mod channel;
pub mod color_scheme;
pub mod config;
pub mod controller;
pub mod stylesheet;
pub mod surface;
pub mod view;

mod error;
pub mod prelude;

pub use channel::{Disconnected, HostChannel};
#[cfg(feature = "system-theme")]
pub use color_scheme::SystemColorScheme;
pub use color_scheme::{
    ColorSchemeListener, ColorSchemeSource, ColorSchemeSubscription, FixedColorScheme, MediaQuery,
};
pub use config::Configuration;
pub use controller::{InteractionController, PointerEvent, RuntimeState};
pub use error::{ChannelError, ConfigError, Result};
pub use stylesheet::{ICON_STYLESHEET, ICON_STYLESHEET_ID, StyleRegistry, Stylesheet};
pub use surface::ControlSurface;
pub use view::{ButtonView, ControlView, Cursor, LoadingView, Padding, Width};
