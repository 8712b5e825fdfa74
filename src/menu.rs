//! Menu - The public registry surface.
//!
//! A [`Menu`] is one independent registry instance: slots, items, and
//! subscriptions live inside it and nowhere else. Build one with
//! [`Menu::builder`], hand out cheap clones to the call sites that
//! contribute items, and pump [`Menu::flush`] from the host loop to deliver
//! change notifications.
//!
//! Registration goes through [`ComponentHandle`]: declaring a component once
//! yields its registration function, typed to that component's props. This
//! replaces the reference design's per-name `register<Name>` functions with
//! an explicit handle per component.
//!
//! # Example
//!
//! ```ignore
//! use spark_menu::{Menu, RegisterArgs, PropsSource};
//!
//! #[derive(Default)]
//! struct LabelProps { title: String }
//!
//! let menu = Menu::<String>::builder()
//!     .slots(["toolbar", "context"])
//!     .build();
//!
//! let label = menu.component("label", |props: &LabelProps| props.title.clone());
//!
//! label.register(RegisterArgs {
//!     id: "save".into(),
//!     slot: Some("toolbar".into()),
//!     priority: 1,
//!     props: PropsSource::Static(LabelProps { title: "Save".into() }),
//!     ..Default::default()
//! })?;
//!
//! menu.flush(); // Deliver the change to subscribed consumers.
//! ```

use std::cell::RefCell;
use std::rc::Rc;

use crate::bus::NotificationBus;
use crate::error::MenuError;
use crate::hook::SlotItemsHook;
use crate::store::{Item, SlotStore};
use crate::types::{DEFAULT_PRIORITY, DEFAULT_SLOT, PropsSource, RenderFn, SlotItem};

// =============================================================================
// Menu
// =============================================================================

/// One registry instance. Clones share the same slots and subscriptions.
pub struct Menu<R> {
    store: Rc<RefCell<SlotStore<R>>>,
    bus: Rc<NotificationBus>,
    declared: Rc<[String]>,
}

impl<R> Clone for Menu<R> {
    fn clone(&self) -> Self {
        Self {
            store: self.store.clone(),
            bus: self.bus.clone(),
            declared: self.declared.clone(),
        }
    }
}

impl<R> Menu<R> {
    /// Start building a menu.
    pub fn builder() -> MenuBuilder<R> {
        MenuBuilder::new()
    }

    /// Declare a component, yielding its registration function.
    ///
    /// The name is for diagnostics only; identity for registration purposes
    /// is the item id.
    pub fn component<P>(
        &self,
        name: &str,
        render: impl Fn(&P) -> R + 'static,
    ) -> ComponentHandle<P, R> {
        ComponentHandle {
            name: Rc::from(name),
            render: Rc::new(render),
            store: self.store.clone(),
            bus: self.bus.clone(),
        }
    }

    /// Create the reactive read hook for one rendering consumer.
    pub fn slot_items_hook(&self) -> SlotItemsHook<R> {
        SlotItemsHook::new(self.store.clone(), self.bus.clone())
    }

    /// One-off sorted snapshot of a slot, without subscribing.
    pub fn slot_items(&self, slot: &str) -> Vec<SlotItem<R>> {
        self.store.borrow().snapshot(slot)
    }

    /// Remove the item with `id` from **every** slot that contains it, then
    /// notify exactly the slots that lost an item.
    ///
    /// Unknown ids are a silent no-op; calling this twice never fails.
    pub fn unregister(&self, id: &str) {
        let touched = self.store.borrow_mut().remove(id);
        if touched.is_empty() {
            return;
        }

        tracing::debug!(id, slots = ?touched, "unregistered menu item");
        for slot in &touched {
            self.bus.notify(slot);
        }
    }

    /// Deliver pending change notifications.
    ///
    /// This is the crate's only deferred boundary: registrations mutate the
    /// store synchronously, but consumers re-render here. Call once per turn
    /// of the host event loop; any burst of changes since the previous flush
    /// collapses into one recomputation per affected consumer.
    pub fn flush(&self) {
        self.bus.flush();
    }

    /// Whether a [`flush`](Self::flush) would deliver anything.
    pub fn has_pending(&self) -> bool {
        self.bus.has_pending()
    }

    /// The slot names declared at build time. A hint for tooling - items may
    /// be registered into undeclared slots, which are created on demand.
    pub fn declared_slots(&self) -> &[String] {
        &self.declared
    }
}

// =============================================================================
// MenuBuilder
// =============================================================================

/// Builds an independent [`Menu`] instance.
pub struct MenuBuilder<R> {
    slots: Vec<String>,
    _marker: std::marker::PhantomData<R>,
}

impl<R> MenuBuilder<R> {
    pub fn new() -> Self {
        Self {
            slots: vec![DEFAULT_SLOT.to_string()],
            _marker: std::marker::PhantomData,
        }
    }

    /// Declare one slot name.
    pub fn slot(mut self, name: impl Into<String>) -> Self {
        self.slots.push(name.into());
        self
    }

    /// Declare several slot names.
    pub fn slots<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
        self.slots.extend(names.into_iter().map(Into::into));
        self
    }

    pub fn build(self) -> Menu<R> {
        Menu {
            store: Rc::new(RefCell::new(SlotStore::new())),
            bus: Rc::new(NotificationBus::new()),
            declared: self.slots.into(),
        }
    }
}

impl<R> Default for MenuBuilder<R> {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// RegisterArgs
// =============================================================================

/// Arguments for one registration.
///
/// Built with struct-update syntax; only `id` has no useful default:
///
/// ```ignore
/// RegisterArgs { id: "save".into(), priority: 1, ..Default::default() }
/// ```
pub struct RegisterArgs<P> {
    /// Item id, unique within the target slot.
    pub id: String,
    /// Target slot; `None` means `"default"`. Undeclared slots are created
    /// on demand.
    pub slot: Option<String>,
    /// Sort priority, lower first. Defaults to 10.
    pub priority: i32,
    /// Replace an existing item with the same id instead of failing.
    ///
    /// The replacement keeps the original item's insertion-order position,
    /// so overriding does not demote the item within its priority tie group.
    pub override_existing: bool,
    /// Props snapshot, dynamic accessor, or none (render with defaults).
    pub props: PropsSource<P>,
}

impl<P> RegisterArgs<P> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

impl<P> Default for RegisterArgs<P> {
    fn default() -> Self {
        Self {
            id: String::new(),
            slot: None,
            priority: DEFAULT_PRIORITY,
            override_existing: false,
            props: PropsSource::None,
        }
    }
}

// =============================================================================
// ComponentHandle
// =============================================================================

/// A declared component's registration function.
///
/// Each call to [`register`](Self::register) contributes one item whose
/// render thunk closes over this component and the registration's props
/// source.
pub struct ComponentHandle<P, R> {
    name: Rc<str>,
    render: Rc<dyn Fn(&P) -> R>,
    store: Rc<RefCell<SlotStore<R>>>,
    bus: Rc<NotificationBus>,
}

impl<P, R> Clone for ComponentHandle<P, R> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            render: self.render.clone(),
            store: self.store.clone(),
            bus: self.bus.clone(),
        }
    }
}

impl<P: Default + 'static, R: 'static> ComponentHandle<P, R> {
    /// Register one item of this component into a slot.
    ///
    /// Fails with [`MenuError::DuplicateId`] when the id is taken in the
    /// target slot and `override_existing` is not set; the failed call
    /// leaves the registry untouched. On success a change notification is
    /// scheduled for the slot - consumers re-render on the next flush, not
    /// inline.
    pub fn register(&self, args: RegisterArgs<P>) -> Result<(), MenuError> {
        let RegisterArgs {
            id,
            slot,
            priority,
            override_existing,
            props,
        } = args;
        let slot = slot.unwrap_or_else(|| DEFAULT_SLOT.to_string());

        let item = Item {
            id: id.clone(),
            priority,
            render: self.bind(props),
        };
        self.store
            .borrow_mut()
            .insert(&slot, item, override_existing)?;

        tracing::debug!(
            component = %self.name,
            id = %id,
            slot = %slot,
            priority,
            "registered menu item"
        );
        self.bus.notify(&slot);
        Ok(())
    }

    /// Compose the component with a props source into a render thunk.
    ///
    /// A `Getter` is invoked on every render, so props read from signals
    /// inside it stay live; a `Static` snapshot is captured once here.
    fn bind(&self, props: PropsSource<P>) -> RenderFn<R> {
        let render = self.render.clone();
        match props {
            PropsSource::None => Rc::new(move || render(&P::default())),
            PropsSource::Static(snapshot) => Rc::new(move || render(&snapshot)),
            PropsSource::Getter(getter) => Rc::new(move || render(&getter())),
        }
    }
}
