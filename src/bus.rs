//! Notification Bus - Per-slot change listeners with coalesced delivery.
//!
//! Decouples "an item changed" from "a consumer re-renders". Mutations call
//! [`NotificationBus::notify`], which only marks the slot dirty; listeners
//! run later, when the host loop pumps [`NotificationBus::flush`]. Any number
//! of notifications for a slot between two flushes collapse into a single
//! delivery to each of that slot's listeners.
//!
//! Scoping is per slot: notifying slot "b" never reaches a listener
//! subscribed to slot "a".
//!
//! # Re-entrancy
//!
//! Listener sets and the dirty set are snapshotted before delivery, so a
//! listener may freely subscribe, unsubscribe, or trigger new notifications;
//! those take effect on the next flush.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use indexmap::IndexSet;

/// A change listener. Kept behind `Rc` so delivery can run it after the bus
/// borrow is released.
pub(crate) type Listener = Rc<dyn Fn()>;

/// Identifies one subscription for removal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct SubscriberId(usize);

struct BusInner {
    subscribers: HashMap<String, Vec<(SubscriberId, Listener)>>,
    /// Slots with undelivered changes, in notification order.
    dirty: IndexSet<String>,
    next_id: usize,
}

/// Per-slot subscriber sets plus the pending dirty-slot set.
pub(crate) struct NotificationBus {
    inner: RefCell<BusInner>,
}

impl NotificationBus {
    pub fn new() -> Self {
        Self {
            inner: RefCell::new(BusInner {
                subscribers: HashMap::new(),
                dirty: IndexSet::new(),
                next_id: 0,
            }),
        }
    }

    /// Subscribe `listener` to changes of `slot`.
    pub fn subscribe(&self, slot: &str, listener: Listener) -> SubscriberId {
        let mut inner = self.inner.borrow_mut();
        let id = SubscriberId(inner.next_id);
        inner.next_id += 1;
        inner
            .subscribers
            .entry(slot.to_string())
            .or_default()
            .push((id, listener));
        id
    }

    /// Remove a subscription. Removing one that is already gone is a no-op.
    pub fn unsubscribe(&self, slot: &str, id: SubscriberId) {
        let mut inner = self.inner.borrow_mut();
        if let Some(listeners) = inner.subscribers.get_mut(slot) {
            listeners.retain(|(listener_id, _)| *listener_id != id);
            if listeners.is_empty() {
                inner.subscribers.remove(slot);
            }
        }
    }

    /// Mark `slot` dirty. Delivery waits for the next [`flush`](Self::flush);
    /// repeated notifications collapse.
    pub fn notify(&self, slot: &str) {
        self.inner.borrow_mut().dirty.insert(slot.to_string());
    }

    /// Whether a flush would deliver anything.
    pub fn has_pending(&self) -> bool {
        !self.inner.borrow().dirty.is_empty()
    }

    /// Deliver one call to every listener of every dirty slot.
    pub fn flush(&self) {
        let batch: Vec<Listener> = {
            let mut inner = self.inner.borrow_mut();
            let dirty = std::mem::take(&mut inner.dirty);
            dirty
                .iter()
                .filter_map(|slot| inner.subscribers.get(slot))
                .flatten()
                .map(|(_, listener)| listener.clone())
                .collect()
        };

        if !batch.is_empty() {
            tracing::debug!(listeners = batch.len(), "delivering slot notifications");
        }

        // Borrow released: listeners may re-enter the bus.
        for listener in batch {
            listener();
        }
    }
}
