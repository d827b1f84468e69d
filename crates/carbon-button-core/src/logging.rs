//! Tracing targets and spans shared by the Carbon Button crates.
//!
//! Every event is emitted under one of the [`targets`], so a host can
//! filter per subsystem. Lifecycle handlers run inside a [`PerfSpan`]
//! named from [`span_names`].
//!
//! The library never installs a subscriber. A host that wants output does
//! so itself:
//!
//! ```ignore
//! tracing_subscriber::fmt()
//!     .with_env_filter("carbon_button=debug,carbon_button::perf=info")
//!     .init();
//! ```

/// Operation names recorded on [`PerfSpan`]s.
pub mod span_names {
    /// Mount handshake.
    pub const MOUNT: &str = "carbon_button::mount";
    /// One render pass.
    pub const RENDER: &str = "carbon_button::render";
}

/// `tracing` targets, one per subsystem.
pub mod targets {
    /// Signal connections and emission.
    pub const SIGNAL: &str = "carbon_button_core::signal";
    pub const RESOLVE: &str = "carbon_button_style::resolve";
    /// Lifecycle and interaction handlers.
    pub const CONTROLLER: &str = "carbon_button::controller";
    pub const COLOR_SCHEME: &str = "carbon_button::color_scheme";
    /// Reports sent to the host.
    pub const CHANNEL: &str = "carbon_button::channel";
    pub const STYLESHEET: &str = "carbon_button::stylesheet";
}

/// Timing span for one lifecycle operation.
///
/// Entered on creation under the `carbon_button::perf` target and exited
/// on drop.
///
/// ```
/// use carbon_button_core::PerfSpan;
/// use carbon_button_core::logging::span_names;
///
/// let _span = PerfSpan::new(span_names::RENDER);
/// ```
pub struct PerfSpan {
    _entered: tracing::span::EnteredSpan,
}

impl PerfSpan {
    pub fn new(operation: &'static str) -> Self {
        let span = tracing::info_span!(target: "carbon_button::perf", "perf", operation);
        Self {
            _entered: span.entered(),
        }
    }
}

impl std::fmt::Debug for PerfSpan {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PerfSpan").finish_non_exhaustive()
    }
}
