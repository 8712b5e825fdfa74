//! Slot Store - Ordered per-slot item storage.
//!
//! Pure data: the store mutates its maps and nothing else. Notification is
//! the bus's job ([`crate::bus`]), wiring the two together is the menu's job
//! ([`crate::menu`]).
//!
//! Slots are created implicitly on first insert and never deleted, they just
//! become empty. Item ids are unique per slot, not globally: the same id can
//! live in two different slots at once.
//!
//! # Ordering
//!
//! Reads return items sorted ascending by priority, ties broken by insertion
//! order. Both maps are [`IndexMap`], so iteration follows insertion order
//! and a replacing insert keeps the key's original position - an override
//! does NOT move the item to the end of its priority tie group.

use indexmap::IndexMap;

use crate::error::MenuError;
use crate::types::{RenderFn, SlotItem};

/// One registered item. Replaced wholesale on override.
pub(crate) struct Item<R> {
    pub id: String,
    pub priority: i32,
    pub render: RenderFn<R>,
}

/// Slots mapped to their ordered item collections.
pub(crate) struct SlotStore<R> {
    slots: IndexMap<String, IndexMap<String, Item<R>>>,
}

impl<R> SlotStore<R> {
    pub fn new() -> Self {
        Self {
            slots: IndexMap::new(),
        }
    }

    /// Insert `item` into `slot`, creating the slot if needed.
    ///
    /// A duplicate id fails with [`MenuError::DuplicateId`] unless `replace`
    /// is set, and the failed insert leaves the store unchanged. A replacing
    /// insert updates in place, keeping the item's insertion-order position.
    pub fn insert(&mut self, slot: &str, item: Item<R>, replace: bool) -> Result<(), MenuError> {
        let items = self
            .slots
            .entry(slot.to_string())
            .or_insert_with(IndexMap::new);

        if !replace && items.contains_key(&item.id) {
            return Err(MenuError::DuplicateId {
                id: item.id.clone(),
                slot: slot.to_string(),
            });
        }

        items.insert(item.id.clone(), item);
        Ok(())
    }

    /// Remove `id` from every slot that contains it.
    ///
    /// Returns the names of the slots that actually lost an item, in slot
    /// insertion order. Unknown ids return an empty list.
    pub fn remove(&mut self, id: &str) -> Vec<String> {
        let mut touched = Vec::new();

        for (slot, items) in &mut self.slots {
            if items.shift_remove(id).is_some() {
                touched.push(slot.clone());
            }
        }

        touched
    }

    /// Sorted snapshot of a slot's items: ascending priority, insertion-order
    /// ties. Unknown or empty slots return an empty list.
    pub fn snapshot(&self, slot: &str) -> Vec<SlotItem<R>> {
        let Some(items) = self.slots.get(slot) else {
            return Vec::new();
        };

        let mut ordered: Vec<&Item<R>> = items.values().collect();
        // Vec::sort_by_key is stable, so insertion order survives ties.
        ordered.sort_by_key(|item| item.priority);

        ordered
            .into_iter()
            .map(|item| SlotItem {
                id: item.id.clone(),
                render: item.render.clone(),
            })
            .collect()
    }

    /// Number of items currently in `slot`.
    pub fn len(&self, slot: &str) -> usize {
        self.slots.get(slot).map_or(0, IndexMap::len)
    }
}
