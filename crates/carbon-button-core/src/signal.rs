//! Change notification for environment subscriptions.
//!
//! Every environment subscription in the workspace is a slot connected to a
//! [`Signal`]. Slots are invoked directly on the emitting thread, in
//! connection order, before [`Signal::emit`] returns.
//!
//! Owners that must release a subscription at teardown use
//! [`Signal::connect_scoped`] and keep the returned [`ConnectionGuard`] for
//! as long as they are interested.
//!
//! ```
//! use carbon_button_core::Signal;
//!
//! let prefers_dark_changed = Signal::<bool>::new();
//!
//! let id = prefers_dark_changed.connect(|prefers_dark| {
//!     println!("prefers dark: {prefers_dark}");
//! });
//!
//! prefers_dark_changed.emit(true);
//! assert!(prefers_dark_changed.disconnect(id));
//! ```

use std::sync::{Arc, Weak};

use parking_lot::Mutex;
use slotmap::{SlotMap, new_key_type};

use crate::logging::targets;

new_key_type! {
    /// Identifies one connected slot.
    pub struct ConnectionId;
}

type Slot<Args> = Arc<dyn Fn(&Args) + Send + Sync>;
type SlotTable<Args> = Mutex<SlotMap<ConnectionId, Slot<Args>>>;

/// A notification source with any number of connected slots.
///
/// Slots are snapshotted before invocation, so a slot may connect or
/// disconnect (including dropping its own [`ConnectionGuard`]) while the
/// signal is emitting. Changes take effect from the next emission.
pub struct Signal<Args> {
    slots: Arc<SlotTable<Args>>,
}

impl<Args: 'static> Default for Signal<Args> {
    fn default() -> Self {
        Self::new()
    }
}

impl<Args: 'static> Signal<Args> {
    /// A signal with nothing connected.
    pub fn new() -> Self {
        Self {
            slots: Arc::new(Mutex::new(SlotMap::with_key())),
        }
    }

    /// Connect `slot`; it stays connected until [`disconnect`](Self::disconnect).
    pub fn connect<F>(&self, slot: F) -> ConnectionId
    where
        F: Fn(&Args) + Send + Sync + 'static,
    {
        let id = self.slots.lock().insert(Arc::new(slot));
        tracing::trace!(target: targets::SIGNAL, ?id, "slot connected");
        id
    }

    /// Connect `slot` for the lifetime of the returned guard.
    ///
    /// The guard holds only a weak reference to the slot table, so it may
    /// outlive the signal; releasing it afterwards does nothing.
    ///
    /// ```
    /// use carbon_button_core::Signal;
    /// use std::sync::atomic::{AtomicUsize, Ordering};
    /// use std::sync::Arc;
    ///
    /// let changed = Signal::<bool>::new();
    /// let renders = Arc::new(AtomicUsize::new(0));
    ///
    /// let counter = renders.clone();
    /// let guard = changed.connect_scoped(move |_| {
    ///     counter.fetch_add(1, Ordering::SeqCst);
    /// });
    /// changed.emit(true);
    /// drop(guard);
    /// changed.emit(false);
    ///
    /// assert_eq!(renders.load(Ordering::SeqCst), 1);
    /// ```
    pub fn connect_scoped<F>(&self, slot: F) -> ConnectionGuard
    where
        F: Fn(&Args) + Send + Sync + 'static,
        Args: Send,
    {
        let id = self.connect(slot);
        let table: Weak<SlotTable<Args>> = Arc::downgrade(&self.slots);
        ConnectionGuard {
            release: Some(Box::new(move || {
                if let Some(table) = table.upgrade() {
                    table.lock().remove(id);
                    tracing::trace!(target: targets::SIGNAL, ?id, "scoped slot released");
                }
            })),
        }
    }

    /// Disconnect the slot identified by `id`.
    ///
    /// Returns `false` if it was already gone.
    pub fn disconnect(&self, id: ConnectionId) -> bool {
        self.slots.lock().remove(id).is_some()
    }

    /// Number of connected slots.
    pub fn connection_count(&self) -> usize {
        self.slots.lock().len()
    }

    /// Invoke every connected slot with `args`.
    #[tracing::instrument(skip_all, target = "carbon_button_core::signal", level = "trace")]
    pub fn emit(&self, args: Args) {
        // Release the table lock before calling out.
        let slots: Vec<Slot<Args>> = self.slots.lock().values().cloned().collect();
        tracing::trace!(target: targets::SIGNAL, slots = slots.len(), "emitting");

        for slot in slots {
            slot(&args);
        }
    }
}

impl<Args> std::fmt::Debug for Signal<Args> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Signal")
            .field("slots", &self.slots.lock().len())
            .finish()
    }
}

/// Disconnects its slot when dropped.
///
/// Created by [`Signal::connect_scoped`]. The guard is type-erased, so an
/// owner can hold subscriptions to signals of different argument types.
#[must_use = "dropping the guard disconnects the slot immediately"]
pub struct ConnectionGuard {
    release: Option<Box<dyn FnOnce() + Send + Sync>>,
}

impl ConnectionGuard {
    /// Disconnect now instead of at drop.
    pub fn disconnect(mut self) {
        self.release_now();
    }

    /// Whether the guard still owns its connection.
    pub fn is_active(&self) -> bool {
        self.release.is_some()
    }

    fn release_now(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for ConnectionGuard {
    fn drop(&mut self) {
        self.release_now();
    }
}

impl std::fmt::Debug for ConnectionGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ConnectionGuard")
            .field("active", &self.is_active())
            .finish()
    }
}

static_assertions::assert_impl_all!(Signal<bool>: Send, Sync);
static_assertions::assert_impl_all!(ConnectionGuard: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;

    fn recorded() -> (Arc<Mutex<Vec<bool>>>, impl Fn(&bool) + Send + Sync + 'static) {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |&prefers_dark: &bool| sink.lock().push(prefers_dark))
    }

    #[test]
    fn slots_run_in_connection_order() {
        let signal = Signal::<bool>::new();
        let order = Arc::new(Mutex::new(Vec::new()));
        for tag in ["first", "second"] {
            let order = order.clone();
            signal.connect(move |_| order.lock().push(tag));
        }

        signal.emit(true);
        assert_eq!(*order.lock(), ["first", "second"]);
    }

    #[test]
    fn disconnect_by_id() {
        let signal = Signal::<bool>::new();
        let (seen, slot) = recorded();
        let id = signal.connect(slot);

        signal.emit(true);
        assert!(signal.disconnect(id));
        assert!(!signal.disconnect(id));
        signal.emit(false);

        assert_eq!(*seen.lock(), vec![true]);
    }

    #[test]
    fn guard_disconnects_on_drop() {
        let signal = Signal::<bool>::new();
        let (seen, slot) = recorded();
        let guard = signal.connect_scoped(slot);
        assert!(guard.is_active());
        assert_eq!(signal.connection_count(), 1);

        signal.emit(true);
        drop(guard);
        signal.emit(false);

        assert_eq!(*seen.lock(), vec![true]);
        assert_eq!(signal.connection_count(), 0);
    }

    #[test]
    fn guard_explicit_disconnect() {
        let signal = Signal::<bool>::new();
        signal.connect(|_| {});
        let guard = signal.connect_scoped(|_| {});
        guard.disconnect();
        assert_eq!(signal.connection_count(), 1);
    }

    #[test]
    fn guard_may_outlive_signal() {
        let signal = Signal::<bool>::new();
        let guard = signal.connect_scoped(|_| {});
        drop(signal);
        guard.disconnect();
    }

    #[test]
    fn slot_may_release_itself_during_emit() {
        let signal = Signal::<bool>::new();
        let own_guard: Arc<Mutex<Option<ConnectionGuard>>> = Arc::new(Mutex::new(None));
        let hits = Arc::new(Mutex::new(0));

        let cell = own_guard.clone();
        let counter = hits.clone();
        let guard = signal.connect_scoped(move |_| {
            *counter.lock() += 1;
            let released = cell.lock().take();
            drop(released);
        });
        *own_guard.lock() = Some(guard);

        signal.emit(true);
        signal.emit(false);

        assert_eq!(*hits.lock(), 1);
        assert_eq!(signal.connection_count(), 0);
    }
}
