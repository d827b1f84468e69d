//! Core systems for Carbon Button.
//!
//! This crate provides the foundational pieces shared by the style resolver
//! and the interaction controller:
//!
//! - **Signal/Slot System**: Type-safe notification with RAII disconnection
//! - **Logging**: `tracing` targets, span names, and performance spans
//!
//! # Signal/Slot Example
//!
//! ```
//! use carbon_button_core::Signal;
//!
//! let value_changed = Signal::<u64>::new();
//!
//! let conn_id = value_changed.connect(|value| {
//!     println!("Value changed to: {}", value);
//! });
//!
//! value_changed.emit(42);
//! value_changed.disconnect(conn_id);
//! ```

pub mod logging;
pub mod signal;

pub use logging::PerfSpan;
pub use signal::{ConnectionGuard, ConnectionId, Signal};
