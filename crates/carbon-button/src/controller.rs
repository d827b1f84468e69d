//! The interaction controller.
//!
//! [`InteractionController`] owns a control's runtime state and speaks the
//! host protocol: it reports the click count, keeps the host's frame height
//! current, follows the colour-scheme preference between mount and unmount,
//! and patches the surface's style on every pointer transition.
//!
//! Handlers run to completion on the caller's thread. The controller is a
//! cheap handle; clones drive the same control.
//!
//! # Re-entrancy
//!
//! Handlers update the runtime state under a lock and queue the resulting
//! reports and surface updates. The queue is delivered after the lock is
//! released, so a host channel, surface or colour-scheme source may call
//! back into the controller synchronously. A handler invoked during
//! delivery queues its own output behind the pending items and returns;
//! the outer delivery loop sends it in order.

use std::collections::VecDeque;
use std::fmt;
use std::sync::{Arc, Weak};

use carbon_button_core::PerfSpan;
use carbon_button_core::logging::{span_names, targets};
use carbon_button_style::{ColorSchemeMode, InteractionPhase, StyleSnapshot, resolve_style};
use parking_lot::Mutex;

use crate::channel::{Disconnected, HostChannel};
use crate::color_scheme::{ColorSchemeSource, ColorSchemeSubscription, FixedColorScheme};
use crate::config::Configuration;
use crate::error::ChannelError;
use crate::stylesheet::StyleRegistry;
use crate::surface::ControlSurface;
use crate::view::ControlView;

/// A pointer event on the control's own surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerEvent {
    Enter,
    Leave,
    Down,
    Up,
}

impl PointerEvent {
    /// The phase an enabled control moves to on this event.
    ///
    /// The target does not depend on the current phase. Release always
    /// re-enters hover, even if the pointer has already left the control;
    /// the following leave event restores rest.
    pub const fn target_phase(self) -> InteractionPhase {
        match self {
            Self::Enter | Self::Up => InteractionPhase::Hover,
            Self::Leave => InteractionPhase::Rest,
            Self::Down => InteractionPhase::Pressed,
        }
    }
}

/// The mutable state of one mounted control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RuntimeState {
    /// Completed clicks, starting from the configured default.
    pub click_count: u64,
    /// The environment's current colour-scheme mode.
    pub color_scheme_mode: ColorSchemeMode,
    /// The pointer-driven phase.
    pub interaction_phase: InteractionPhase,
}

/// A call to the host or the surface, queued under the state lock.
#[derive(Debug)]
enum Outbound {
    ReportValue(u64),
    ApplyStyle(StyleSnapshot),
    /// Render, re-apply the current phase, then report the frame height.
    Render {
        view: ControlView,
        style: Option<StyleSnapshot>,
    },
}

struct ControllerState {
    color_scheme: Arc<dyn ColorSchemeSource>,
    styles: StyleRegistry,
    config: Option<Configuration>,
    runtime: RuntimeState,
    subscription: Option<ColorSchemeSubscription>,
    mounted: bool,
    outbox: VecDeque<Outbound>,
    delivering: bool,
}

struct Host<C, S> {
    channel: C,
    surface: S,
}

struct Shared<C, S> {
    state: Mutex<ControllerState>,
    host: Mutex<Host<C, S>>,
}

/// Drives one embedded control.
///
/// # Example
///
/// ```
/// use carbon_button::prelude::*;
///
/// struct Silent;
///
/// impl ControlSurface for Silent {
///     fn render(&mut self, _view: &ControlView) {}
///     fn apply_style(&mut self, _snapshot: &StyleSnapshot) {}
///     fn rendered_height(&self) -> f32 {
///         40.0
///     }
/// }
///
/// let controller = InteractionController::detached(Silent);
/// controller.on_mount(Some(Configuration::new().with_label("Run").with_default_value(2)));
///
/// controller.on_activate();
/// assert_eq!(controller.click_count(), 3);
///
/// controller.on_pointer_enter();
/// controller.on_pointer_down();
/// assert_eq!(controller.interaction_phase(), InteractionPhase::Pressed);
/// controller.on_unmount();
/// ```
pub struct InteractionController<C, S> {
    shared: Arc<Shared<C, S>>,
}

impl<C, S> Clone for InteractionController<C, S> {
    fn clone(&self) -> Self {
        Self {
            shared: self.shared.clone(),
        }
    }
}

impl<S> InteractionController<Disconnected, S>
where
    S: ControlSurface + 'static,
{
    /// A controller with no host; reports are dropped.
    pub fn detached(surface: S) -> Self {
        Self::new(Disconnected, surface)
    }
}

impl<C, S> InteractionController<C, S>
where
    C: HostChannel + 'static,
    S: ControlSurface + 'static,
{
    /// Create an unmounted controller.
    ///
    /// The colour scheme defaults to a fixed light preference and the
    /// stylesheet registry to a private one; see
    /// [`with_color_scheme`](Self::with_color_scheme) and
    /// [`with_style_registry`](Self::with_style_registry).
    pub fn new(channel: C, surface: S) -> Self {
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(ControllerState {
                    color_scheme: Arc::new(FixedColorScheme::light()),
                    styles: StyleRegistry::new(),
                    config: None,
                    runtime: RuntimeState::default(),
                    subscription: None,
                    mounted: false,
                    outbox: VecDeque::new(),
                    delivering: false,
                }),
                host: Mutex::new(Host { channel, surface }),
            }),
        }
    }

    /// Set the colour-scheme source using builder pattern.
    ///
    /// Takes effect at the next mount.
    pub fn with_color_scheme(self, source: impl ColorSchemeSource + 'static) -> Self {
        self.shared.state.lock().color_scheme = Arc::new(source);
        self
    }

    /// Set the document stylesheet registry using builder pattern.
    pub fn with_style_registry(self, styles: StyleRegistry) -> Self {
        self.shared.state.lock().styles = styles;
        self
    }

    /// Mount the control.
    ///
    /// Installs the icon stylesheet, initialises the click count from the
    /// configured default and reports it, subscribes to colour-scheme
    /// changes, reads the current preference, renders and reports the frame
    /// height. Mounting an already mounted control does nothing.
    pub fn on_mount(&self, config: Option<Configuration>) {
        let _span = PerfSpan::new(span_names::MOUNT);
        let Some(source) = self.shared.update(|state| state.mount(config)) else {
            return;
        };

        // The source may notify from inside subscribe.
        let weak = Arc::downgrade(&self.shared);
        let subscription = source.subscribe(Box::new(move |prefers_dark: bool| {
            preference_changed(&weak, prefers_dark)
        }));
        let mode = source.mode();

        let stale = self.shared.update(|state| state.subscribed(subscription, mode));
        if let Some(stale) = stale {
            stale.release();
        }
    }

    /// Accept the configuration of a new host render pass.
    ///
    /// Re-renders and reports the frame height. The click count is not
    /// re-initialised; the default applies at mount only.
    pub fn on_configuration_changed(&self, config: Option<Configuration>) {
        self.shared.update(|state| {
            if !state.mounted {
                tracing::debug!(target: targets::CONTROLLER, "configuration before mount ignored");
                return;
            }
            tracing::debug!(
                target: targets::CONTROLLER,
                configured = config.is_some(),
                "configuration changed"
            );
            state.config = config;
            state.render();
        });
    }

    /// Handle a pointer event.
    pub fn on_pointer(&self, event: PointerEvent) {
        self.shared.update(|state| state.pointer(event));
    }

    /// The pointer entered the control.
    pub fn on_pointer_enter(&self) {
        self.on_pointer(PointerEvent::Enter);
    }

    /// The pointer left the control.
    pub fn on_pointer_leave(&self) {
        self.on_pointer(PointerEvent::Leave);
    }

    /// A pointer button was pressed over the control.
    pub fn on_pointer_down(&self) {
        self.on_pointer(PointerEvent::Down);
    }

    /// A pointer button was released.
    pub fn on_pointer_up(&self) {
        self.on_pointer(PointerEvent::Up);
    }

    /// The control was clicked.
    ///
    /// Increments the click count by one and reports the new value.
    /// Disabled and unconfigured controls ignore clicks.
    pub fn on_activate(&self) {
        self.shared.update(|state| {
            if state.interactive().is_none() {
                tracing::trace!(target: targets::CONTROLLER, "activation ignored");
                return;
            }
            let click_count = state.runtime.click_count.saturating_add(1);
            state.runtime.click_count = click_count;
            tracing::trace!(target: targets::CONTROLLER, click_count, "activated");
            state.report_value();
        });
    }

    /// Unmount the control, releasing the colour-scheme subscription.
    pub fn on_unmount(&self) {
        let subscription = self.shared.update(ControllerState::unmount);
        if let Some(subscription) = subscription {
            subscription.release();
        }
    }

    /// A copy of the runtime state.
    pub fn state(&self) -> RuntimeState {
        self.shared.state.lock().runtime
    }

    /// The current click count.
    pub fn click_count(&self) -> u64 {
        self.state().click_count
    }

    /// The recorded interaction phase.
    pub fn interaction_phase(&self) -> InteractionPhase {
        self.state().interaction_phase
    }

    /// The current colour-scheme mode.
    pub fn color_scheme_mode(&self) -> ColorSchemeMode {
        self.state().color_scheme_mode
    }

    /// Whether the control is mounted.
    pub fn is_mounted(&self) -> bool {
        self.shared.state.lock().mounted
    }

    /// The configuration of the latest render pass.
    pub fn configuration(&self) -> Option<Configuration> {
        self.shared.state.lock().config.clone()
    }

    /// The style for the current phase, if configured.
    pub fn current_style(&self) -> Option<StyleSnapshot> {
        self.shared.state.lock().current_style()
    }

    /// The stylesheet registry this control installs into.
    pub fn style_registry(&self) -> StyleRegistry {
        self.shared.state.lock().styles.clone()
    }
}

impl<C, S> fmt::Debug for InteractionController<C, S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.shared.state.lock();
        f.debug_struct("InteractionController")
            .field("runtime", &state.runtime)
            .field("mounted", &state.mounted)
            .field("configured", &state.config.is_some())
            .field("pending", &state.outbox.len())
            .finish()
    }
}

fn preference_changed<C, S>(shared: &Weak<Shared<C, S>>, prefers_dark: bool)
where
    C: HostChannel,
    S: ControlSurface,
{
    match shared.upgrade() {
        Some(shared) => shared.update(|state| state.color_scheme_changed(prefers_dark)),
        None => tracing::trace!(target: targets::COLOR_SCHEME, "controller dropped"),
    }
}

impl<C, S> Shared<C, S>
where
    C: HostChannel,
    S: ControlSurface,
{
    /// Run `f` under the state lock, then deliver whatever it queued.
    ///
    /// If another call is already delivering, that call sends the new
    /// items and this one returns at once.
    fn update<R>(&self, f: impl FnOnce(&mut ControllerState) -> R) -> R {
        let (result, deliver) = {
            let mut state = self.state.lock();
            let result = f(&mut state);
            (result, state.claim_delivery())
        };
        if deliver {
            self.deliver();
        }
        result
    }

    fn deliver(&self) {
        let _claim = DeliveryClaim { state: &self.state };
        while let Some(outbound) = self.next_outbound() {
            self.host.lock().deliver(outbound);
        }
    }

    fn next_outbound(&self) -> Option<Outbound> {
        let mut state = self.state.lock();
        let next = state.outbox.pop_front();
        if next.is_none() {
            state.delivering = false;
        }
        next
    }
}

/// Hands delivery back if a host callback unwinds.
struct DeliveryClaim<'a> {
    state: &'a Mutex<ControllerState>,
}

impl Drop for DeliveryClaim<'_> {
    fn drop(&mut self) {
        if std::thread::panicking() {
            self.state.lock().delivering = false;
        }
    }
}

impl ControllerState {
    fn claim_delivery(&mut self) -> bool {
        if self.delivering || self.outbox.is_empty() {
            return false;
        }
        self.delivering = true;
        true
    }

    /// Returns the source to subscribe to, or `None` if already mounted.
    fn mount(&mut self, config: Option<Configuration>) -> Option<Arc<dyn ColorSchemeSource>> {
        if self.mounted {
            tracing::debug!(target: targets::CONTROLLER, "already mounted");
            return None;
        }

        self.styles.register_icon_styles();
        self.runtime = RuntimeState {
            click_count: config.as_ref().map_or(0, |config| config.default_value),
            ..RuntimeState::default()
        };
        self.config = config;
        self.mounted = true;
        tracing::debug!(
            target: targets::CONTROLLER,
            click_count = self.runtime.click_count,
            configured = self.config.is_some(),
            "mounted"
        );
        self.report_value();
        Some(self.color_scheme.clone())
    }

    /// Finish mounting once the subscription exists.
    ///
    /// Returns a subscription the caller must release: the new one if the
    /// control was unmounted meanwhile, otherwise any it replaced.
    fn subscribed(
        &mut self,
        subscription: ColorSchemeSubscription,
        mode: ColorSchemeMode,
    ) -> Option<ColorSchemeSubscription> {
        if !self.mounted {
            return Some(subscription);
        }
        let replaced = self.subscription.replace(subscription);
        self.runtime.color_scheme_mode = mode;
        self.render();
        replaced
    }

    fn unmount(&mut self) -> Option<ColorSchemeSubscription> {
        if self.mounted {
            tracing::debug!(target: targets::CONTROLLER, "unmounted");
        }
        self.mounted = false;
        self.subscription.take()
    }

    /// The configuration, when the control accepts interaction.
    fn interactive(&self) -> Option<&Configuration> {
        if !self.mounted {
            return None;
        }
        self.config.as_ref().filter(|config| !config.disabled)
    }

    fn current_style(&self) -> Option<StyleSnapshot> {
        let config = self.config.as_ref()?;
        let runtime = self.runtime;
        Some(resolve_style(&config.style_request(
            runtime.color_scheme_mode,
            runtime.interaction_phase,
        )))
    }

    fn pointer(&mut self, event: PointerEvent) {
        let Some(config) = self.interactive() else {
            tracing::trace!(target: targets::CONTROLLER, ?event, "pointer event ignored");
            return;
        };
        let phase = event.target_phase();
        let snapshot = resolve_style(&config.style_request(self.runtime.color_scheme_mode, phase));

        tracing::trace!(
            target: targets::CONTROLLER,
            ?event,
            from = ?self.runtime.interaction_phase,
            to = ?phase,
            "phase transition"
        );
        self.runtime.interaction_phase = phase;
        self.outbox.push_back(Outbound::ApplyStyle(snapshot));
    }

    fn color_scheme_changed(&mut self, prefers_dark: bool) {
        if !self.mounted {
            return;
        }
        let mode = ColorSchemeMode::from_prefers_dark(prefers_dark);
        if mode == self.runtime.color_scheme_mode {
            return;
        }
        tracing::debug!(target: targets::CONTROLLER, ?mode, "colour scheme mode changed");
        self.runtime.color_scheme_mode = mode;
        self.render();
    }

    fn render(&mut self) {
        let view = ControlView::build(self.config.as_ref(), self.runtime.color_scheme_mode);
        let style = self.current_style();
        self.outbox.push_back(Outbound::Render { view, style });
    }

    fn report_value(&mut self) {
        let value = self.runtime.click_count;
        self.outbox.push_back(Outbound::ReportValue(value));
    }
}

impl<C, S> Host<C, S>
where
    C: HostChannel,
    S: ControlSurface,
{
    fn deliver(&mut self, outbound: Outbound) {
        match outbound {
            Outbound::ReportValue(value) => match self.channel.report_value(value) {
                Ok(()) => tracing::trace!(target: targets::CHANNEL, value, "reported value"),
                Err(error) => report_failed("value", &error),
            },
            Outbound::ApplyStyle(snapshot) => self.surface.apply_style(&snapshot),
            Outbound::Render { view, style } => {
                let _span = PerfSpan::new(span_names::RENDER);
                self.surface.render(&view);
                if let Some(snapshot) = style {
                    self.surface.apply_style(&snapshot);
                }
                let height = self.surface.rendered_height();
                match self.channel.report_frame_height(height) {
                    Ok(()) => {
                        tracing::trace!(target: targets::CHANNEL, height, "reported frame height")
                    }
                    Err(error) => report_failed("frame height", &error),
                }
            }
        }
    }
}

fn report_failed(report: &'static str, error: &ChannelError) {
    tracing::warn!(target: targets::CHANNEL, report, %error, "host report dropped");
}

static_assertions::assert_impl_all!(
    InteractionController<Disconnected, Box<dyn ControlSurface>>: Send, Sync
);

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color_scheme::{ColorSchemeListener, MediaQuery};
    use carbon_button_style::Variant;

    #[derive(Default)]
    struct CountingSurface {
        renders: usize,
        applied: Vec<StyleSnapshot>,
    }

    impl ControlSurface for Arc<Mutex<CountingSurface>> {
        fn render(&mut self, _view: &ControlView) {
            self.lock().renders += 1;
        }

        fn apply_style(&mut self, snapshot: &StyleSnapshot) {
            self.lock().applied.push(snapshot.clone());
        }

        fn rendered_height(&self) -> f32 {
            48.0
        }
    }

    fn controller() -> (
        InteractionController<Disconnected, Arc<Mutex<CountingSurface>>>,
        Arc<Mutex<CountingSurface>>,
    ) {
        let surface = Arc::new(Mutex::new(CountingSurface::default()));
        (InteractionController::detached(surface.clone()), surface)
    }

    #[test]
    fn target_phase_ignores_current_phase() {
        assert_eq!(PointerEvent::Enter.target_phase(), InteractionPhase::Hover);
        assert_eq!(PointerEvent::Up.target_phase(), InteractionPhase::Hover);
        assert_eq!(PointerEvent::Down.target_phase(), InteractionPhase::Pressed);
        assert_eq!(PointerEvent::Leave.target_phase(), InteractionPhase::Rest);
    }

    #[test]
    fn events_before_mount_are_ignored() {
        let (controller, surface) = controller();
        controller.on_pointer_enter();
        controller.on_activate();
        controller.on_configuration_changed(Some(Configuration::new()));

        assert_eq!(controller.state(), RuntimeState::default());
        assert_eq!(surface.lock().renders, 0);
        assert!(controller.configuration().is_none());
    }

    #[test]
    fn unconfigured_control_ignores_interaction() {
        let (controller, surface) = controller();
        controller.on_mount(None);
        controller.on_pointer_down();
        controller.on_activate();

        assert_eq!(controller.interaction_phase(), InteractionPhase::Rest);
        assert_eq!(controller.click_count(), 0);
        assert!(surface.lock().applied.is_empty());
        assert!(controller.current_style().is_none());
    }

    #[test]
    fn pointer_transition_applies_resolved_style() {
        let (controller, surface) = controller();
        let config = Configuration::new().with_variant(Variant::Danger);
        controller.on_mount(Some(config.clone()));
        surface.lock().applied.clear();

        controller.on_pointer_enter();
        let expected = resolve_style(
            &config.style_request(ColorSchemeMode::Light, InteractionPhase::Hover),
        );
        assert_eq!(surface.lock().applied, vec![expected]);
    }

    #[test]
    fn render_reapplies_transient_phase() {
        let (controller, surface) = controller();
        let config = Configuration::new().with_label("Hold");
        controller.on_mount(Some(config.clone()));
        controller.on_pointer_down();
        surface.lock().applied.clear();

        controller.on_configuration_changed(Some(config.clone()));
        let pressed = resolve_style(
            &config.style_request(ColorSchemeMode::Light, InteractionPhase::Pressed),
        );
        assert_eq!(surface.lock().applied.last(), Some(&pressed));
    }

    #[test]
    fn mounting_twice_keeps_state() {
        let (controller, _surface) = controller();
        controller.on_mount(Some(Configuration::new().with_default_value(4)));
        controller.on_activate();
        controller.on_mount(Some(Configuration::new().with_default_value(9)));
        assert_eq!(controller.click_count(), 5);
    }

    #[test]
    fn click_count_saturates() {
        let (controller, _surface) = controller();
        controller.on_mount(Some(Configuration::new().with_default_value(u64::MAX)));
        controller.on_activate();
        assert_eq!(controller.click_count(), u64::MAX);
    }

    #[test]
    fn dropped_controller_does_not_receive_preference_changes() {
        let query = MediaQuery::new(false);
        let (controller, _surface) = controller();
        let controller = controller.with_color_scheme(query.clone());
        controller.on_mount(Some(Configuration::new()));
        assert_eq!(query.listener_count(), 1);

        drop(controller);
        assert_eq!(query.listener_count(), 0);
        assert!(!query.set_prefers_dark(false));
        query.set_prefers_dark(true);
    }

    /// Reports dark and notifies the new listener before returning.
    struct EagerDark;

    impl ColorSchemeSource for EagerDark {
        fn prefers_dark(&self) -> bool {
            true
        }

        fn subscribe(&self, listener: ColorSchemeListener) -> ColorSchemeSubscription {
            listener(true);
            ColorSchemeSubscription::inert()
        }
    }

    #[test]
    fn source_may_notify_during_subscribe() {
        let (controller, surface) = controller();
        let controller = controller.with_color_scheme(EagerDark);
        controller.on_mount(Some(Configuration::new().with_label("Night")));

        assert_eq!(controller.color_scheme_mode(), ColorSchemeMode::Dark);
        assert_eq!(surface.lock().renders, 2);
        assert!(controller.is_mounted());
    }
}
