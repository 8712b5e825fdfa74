//! Slot Items Hook - Reactive slot reads for rendering consumers.
//!
//! One [`SlotItemsHook`] belongs to one rendering consumer. Calling
//! [`read`](SlotItemsHook::read) inside an effect does two things:
//!
//! 1. keeps the hook subscribed to the slot named by the **current** call -
//!    if the slot argument changed since the last read, the old subscription
//!    is dropped and a new one follows the new slot;
//! 2. reads the hook's generation signal, which is the reactive dependency.
//!
//! When the bus delivers a notification for the subscribed slot, the
//! generation bumps once and the owning effect recomputes once. Every read
//! re-sorts the store's current state - there is no cached item list to go
//! stale.
//!
//! Dropping the hook unsubscribes, so teardown is guaranteed on every exit
//! path.
//!
//! # Example
//!
//! ```ignore
//! use spark_signals::effect;
//!
//! let hook = menu.slot_items_hook();
//! let stop = effect(move || {
//!     for item in hook.read("toolbar") {
//!         draw((item.render)());
//!     }
//! });
//! // Later: stop(); and drop the hook.
//! ```

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use spark_signals::{signal, Signal};

use crate::bus::{NotificationBus, SubscriberId};
use crate::store::SlotStore;
use crate::types::{DEFAULT_SLOT, SlotItem};

struct Binding {
    slot: String,
    id: SubscriberId,
}

/// Binds one rendering consumer to a slot's change notifications.
pub struct SlotItemsHook<R> {
    store: Rc<RefCell<SlotStore<R>>>,
    bus: Rc<NotificationBus>,
    /// Bumps once per delivered notification; consumers depend on it.
    generation: Signal<u64>,
    counter: Rc<Cell<u64>>,
    binding: RefCell<Option<Binding>>,
}

impl<R> SlotItemsHook<R> {
    pub(crate) fn new(store: Rc<RefCell<SlotStore<R>>>, bus: Rc<NotificationBus>) -> Self {
        Self {
            store,
            bus,
            generation: signal(0u64),
            counter: Rc::new(Cell::new(0u64)),
            binding: RefCell::new(None),
        }
    }

    /// Read the slot's items: ascending priority, insertion-order ties,
    /// empty for unknown slots.
    ///
    /// Inside an effect this establishes the reactive dependency; the effect
    /// re-runs once per delivered notification for this slot.
    pub fn read(&self, slot: &str) -> Vec<SlotItem<R>> {
        self.ensure_subscribed(slot);

        // Dependency registration; the value itself is not interesting.
        let _ = self.generation.get();

        self.store.borrow().snapshot(slot)
    }

    /// [`read`](Self::read) for the `"default"` slot.
    pub fn read_default(&self) -> Vec<SlotItem<R>> {
        self.read(DEFAULT_SLOT)
    }

    /// Subscribe to `slot`, replacing a subscription to a different slot.
    fn ensure_subscribed(&self, slot: &str) {
        let mut binding = self.binding.borrow_mut();

        if let Some(bound) = binding.as_ref() {
            if bound.slot == slot {
                return;
            }
            self.bus.unsubscribe(&bound.slot, bound.id);
        }

        let counter = self.counter.clone();
        let generation = self.generation.clone();
        let id = self.bus.subscribe(
            slot,
            Rc::new(move || {
                counter.set(counter.get() + 1);
                generation.set(counter.get());
            }),
        );

        *binding = Some(Binding {
            slot: slot.to_string(),
            id,
        });
    }
}

impl<R> Drop for SlotItemsHook<R> {
    fn drop(&mut self) {
        if let Some(bound) = self.binding.borrow_mut().take() {
            self.bus.unsubscribe(&bound.slot, bound.id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Item;

    fn setup() -> (Rc<RefCell<SlotStore<String>>>, Rc<NotificationBus>) {
        (
            Rc::new(RefCell::new(SlotStore::new())),
            Rc::new(NotificationBus::new()),
        )
    }

    fn put(store: &Rc<RefCell<SlotStore<String>>>, slot: &str, id: &str, priority: i32) {
        let label = id.to_string();
        store
            .borrow_mut()
            .insert(
                slot,
                Item {
                    id: id.to_string(),
                    priority,
                    render: Rc::new(move || label.clone()),
                },
                false,
            )
            .unwrap();
    }

    #[test]
    fn test_read_returns_sorted_snapshot() {
        let (store, bus) = setup();
        put(&store, "default", "x", 10);
        put(&store, "default", "y", 1);

        let hook = SlotItemsHook::new(store, bus);
        let ids: Vec<String> = hook.read_default().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["y", "x"]);
    }

    #[test]
    fn test_read_empty_slot() {
        let (store, bus) = setup();
        let hook = SlotItemsHook::new(store, bus);
        assert!(hook.read("missing").is_empty());
    }

    #[test]
    fn test_notification_bumps_generation_once_per_flush() {
        let (store, bus) = setup();
        let hook = SlotItemsHook::new(store, bus.clone());
        hook.read("a"); // Subscribes.

        bus.notify("a");
        bus.notify("a");
        bus.flush();
        assert_eq!(hook.generation.get(), 1);

        bus.notify("a");
        bus.flush();
        assert_eq!(hook.generation.get(), 2);
    }

    #[test]
    fn test_other_slot_does_not_bump() {
        let (store, bus) = setup();
        let hook = SlotItemsHook::new(store, bus.clone());
        hook.read("a");

        bus.notify("b");
        bus.flush();
        assert_eq!(hook.generation.get(), 0);
    }

    #[test]
    fn test_resubscription_follows_current_slot() {
        let (store, bus) = setup();
        let hook = SlotItemsHook::new(store, bus.clone());

        hook.read("a");
        hook.read("b"); // Moves the subscription.

        bus.notify("a");
        bus.flush();
        assert_eq!(hook.generation.get(), 0);

        bus.notify("b");
        bus.flush();
        assert_eq!(hook.generation.get(), 1);
    }

    #[test]
    fn test_drop_unsubscribes() {
        let (store, bus) = setup();
        let hook = SlotItemsHook::new(store, bus.clone());
        hook.read("a");
        drop(hook);

        // Nothing left to deliver to - must not panic or leak a call.
        bus.notify("a");
        bus.flush();
    }
}
