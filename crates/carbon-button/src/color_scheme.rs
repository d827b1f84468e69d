//! Colour-scheme preference sources.
//!
//! A control reads the environment's light/dark preference once at mount
//! and then follows change notifications until it unmounts. Three sources
//! are provided:
//!
//! - [`MediaQuery`]: host-driven; the embedder forwards its own
//!   `prefers-color-scheme` events
//! - [`FixedColorScheme`]: a constant preference that never changes
//! - `SystemColorScheme` (feature `system-theme`): the operating system's
//!   dark-mode setting, re-detected on demand or by a polling watcher

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

use carbon_button_core::logging::targets;
use carbon_button_core::{ConnectionGuard, Signal};
use carbon_button_style::ColorSchemeMode;

/// Callback invoked with the new "prefers dark" value.
pub type ColorSchemeListener = Box<dyn Fn(bool) + Send + Sync>;

/// An environment preference for dark or light presentation.
///
/// A source may invoke a listener from inside [`subscribe`](Self::subscribe)
/// or from any later call, including one made by the control's own host.
pub trait ColorSchemeSource: Send + Sync {
    /// Whether the environment currently prefers dark presentation.
    fn prefers_dark(&self) -> bool;

    /// Register `listener` for preference changes.
    ///
    /// The listener stays registered until the returned subscription is
    /// released or dropped.
    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription;

    /// The current preference as a mode.
    fn mode(&self) -> ColorSchemeMode {
        ColorSchemeMode::from_prefers_dark(self.prefers_dark())
    }
}

/// A live change subscription.
///
/// Dropping it unregisters the listener.
#[must_use = "dropping a subscription immediately unregisters its listener"]
#[derive(Debug)]
pub struct ColorSchemeSubscription {
    guard: Option<ConnectionGuard>,
}

impl ColorSchemeSubscription {
    /// A subscription backed by a signal connection.
    pub fn from_guard(guard: ConnectionGuard) -> Self {
        Self { guard: Some(guard) }
    }

    /// A subscription to a source that never changes.
    pub fn inert() -> Self {
        Self { guard: None }
    }

    /// Whether a listener is still registered through this subscription.
    pub fn is_active(&self) -> bool {
        self.guard.as_ref().is_some_and(ConnectionGuard::is_active)
    }

    /// Unregister the listener now.
    pub fn release(mut self) {
        if let Some(guard) = self.guard.take() {
            guard.disconnect();
        }
    }
}

struct MediaQueryInner {
    prefers_dark: AtomicBool,
    changed: Signal<bool>,
}

/// A host-driven `prefers-color-scheme` query.
///
/// Clones share state: the embedder keeps one handle and calls
/// [`set_prefers_dark`](Self::set_prefers_dark) whenever its environment
/// reports a change; controls subscribe through another.
///
/// ```
/// use carbon_button::{ColorSchemeSource, MediaQuery};
///
/// let query = MediaQuery::new(false);
/// let subscription = query.subscribe(Box::new(|dark: bool| println!("dark = {dark}")));
/// assert_eq!(query.listener_count(), 1);
///
/// query.set_prefers_dark(true);
/// drop(subscription);
/// assert_eq!(query.listener_count(), 0);
/// ```
#[derive(Clone)]
pub struct MediaQuery {
    inner: Arc<MediaQueryInner>,
}

impl MediaQuery {
    /// Create a query with an initial preference.
    pub fn new(prefers_dark: bool) -> Self {
        Self {
            inner: Arc::new(MediaQueryInner {
                prefers_dark: AtomicBool::new(prefers_dark),
                changed: Signal::new(),
            }),
        }
    }

    /// Record a new preference, notifying listeners if it changed.
    ///
    /// Returns `true` if listeners were notified.
    pub fn set_prefers_dark(&self, prefers_dark: bool) -> bool {
        let previous = self.inner.prefers_dark.swap(prefers_dark, Ordering::SeqCst);
        if previous == prefers_dark {
            return false;
        }
        tracing::debug!(target: targets::COLOR_SCHEME, prefers_dark, "colour scheme changed");
        self.inner.changed.emit(prefers_dark);
        true
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.changed.connection_count()
    }
}

impl Default for MediaQuery {
    fn default() -> Self {
        Self::new(false)
    }
}

impl std::fmt::Debug for MediaQuery {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MediaQuery")
            .field("prefers_dark", &self.prefers_dark())
            .field("listeners", &self.listener_count())
            .finish()
    }
}

impl ColorSchemeSource for MediaQuery {
    fn prefers_dark(&self) -> bool {
        self.inner.prefers_dark.load(Ordering::SeqCst)
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        let guard = self
            .inner
            .changed
            .connect_scoped(move |prefers_dark: &bool| listener(*prefers_dark));
        ColorSchemeSubscription::from_guard(guard)
    }
}

/// A preference that never changes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FixedColorScheme(pub ColorSchemeMode);

impl FixedColorScheme {
    /// Always light.
    pub const fn light() -> Self {
        Self(ColorSchemeMode::Light)
    }

    /// Always dark.
    pub const fn dark() -> Self {
        Self(ColorSchemeMode::Dark)
    }
}

impl ColorSchemeSource for FixedColorScheme {
    fn prefers_dark(&self) -> bool {
        self.0.is_dark()
    }

    fn subscribe(&self, _listener: ColorSchemeListener) -> ColorSchemeSubscription {
        ColorSchemeSubscription::inert()
    }
}

/// The operating system's dark-mode setting.
///
/// Detection is a one-shot query. Listeners are notified when the
/// preference is re-detected and found changed, either by an explicit
/// [`refresh`](Self::refresh) (for example on window focus) or by the
/// polling watcher started with [`start`](Self::start). Watcher
/// notifications run on the watch thread. An undetectable preference reads
/// as light.
///
/// Clones share the preference, the listeners and the watcher.
#[cfg(feature = "system-theme")]
#[derive(Debug, Clone)]
pub struct SystemColorScheme {
    inner: Arc<SystemWatch>,
}

#[cfg(feature = "system-theme")]
#[derive(Debug)]
struct SystemWatch {
    query: MediaQuery,
    running: AtomicBool,
    stop: AtomicBool,
}

#[cfg(feature = "system-theme")]
impl SystemColorScheme {
    /// Detect the current system preference.
    pub fn detect() -> Self {
        Self {
            inner: Arc::new(SystemWatch {
                query: MediaQuery::new(detect_prefers_dark()),
                running: AtomicBool::new(false),
                stop: AtomicBool::new(false),
            }),
        }
    }

    /// Re-detect the system preference, notifying listeners on change.
    pub fn refresh(&self) -> ColorSchemeMode {
        self.inner.refresh()
    }

    /// Poll the system preference every `interval` on a background thread.
    ///
    /// Does nothing if the watcher is already running. The thread exits
    /// after [`stop`](Self::stop) or once every handle has been dropped.
    pub fn start(&self, interval: std::time::Duration) -> std::io::Result<()> {
        if self.inner.running.swap(true, Ordering::SeqCst) {
            return Ok(());
        }
        self.inner.stop.store(false, Ordering::SeqCst);

        let watch = Arc::downgrade(&self.inner);
        let spawned = std::thread::Builder::new()
            .name("carbon-button-color-scheme".into())
            .spawn(move || watch_loop(&watch, interval));
        if let Err(error) = spawned {
            self.inner.running.store(false, Ordering::SeqCst);
            return Err(error);
        }
        tracing::debug!(target: targets::COLOR_SCHEME, ?interval, "system colour scheme watcher started");
        Ok(())
    }

    /// Ask the watcher to exit after its current poll.
    pub fn stop(&self) {
        self.inner.stop.store(true, Ordering::SeqCst);
    }

    /// Whether the watcher thread is running.
    pub fn is_watching(&self) -> bool {
        self.inner.running.load(Ordering::SeqCst)
    }
}

#[cfg(feature = "system-theme")]
impl SystemWatch {
    fn refresh(&self) -> ColorSchemeMode {
        let prefers_dark = detect_prefers_dark();
        self.query.set_prefers_dark(prefers_dark);
        ColorSchemeMode::from_prefers_dark(prefers_dark)
    }
}

#[cfg(feature = "system-theme")]
fn watch_loop(watch: &std::sync::Weak<SystemWatch>, interval: std::time::Duration) {
    loop {
        std::thread::sleep(interval);
        let Some(watch) = watch.upgrade() else {
            return;
        };
        if watch.stop.load(Ordering::SeqCst) {
            watch.running.store(false, Ordering::SeqCst);
            tracing::debug!(target: targets::COLOR_SCHEME, "system colour scheme watcher stopped");
            return;
        }
        watch.refresh();
    }
}

#[cfg(feature = "system-theme")]
impl ColorSchemeSource for SystemColorScheme {
    fn prefers_dark(&self) -> bool {
        self.inner.query.prefers_dark()
    }

    fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
        self.inner.query.subscribe(listener)
    }
}

#[cfg(feature = "system-theme")]
fn detect_prefers_dark() -> bool {
    match dark_light::detect() {
        dark_light::Mode::Dark => true,
        dark_light::Mode::Light => false,
        dark_light::Mode::Default => {
            tracing::debug!(target: targets::COLOR_SCHEME, "system colour scheme unknown, using light");
            false
        }
    }
}

static_assertions::assert_impl_all!(MediaQuery: Send, Sync);
static_assertions::assert_impl_all!(ColorSchemeSubscription: Send, Sync);
