//! # spark-menu
//!
//! Reactive slot-based menu registry for Rust UIs.
//!
//! Independent call sites contribute items to named slots at runtime; slot
//! consumers read a priority-ordered list and re-render reactively when the
//! registered set changes. Built on
//! [spark-signals](https://github.com/RLabs-Inc/spark-signals) for the
//! consumer-side reactivity; the rendering runtime itself is opaque to this
//! crate - a [`Menu`] is generic over the element type its components
//! produce.
//!
//! ## Architecture
//!
//! Registration mutates the store synchronously, but consumers re-render on
//! the next flush:
//!
//! ```text
//! register/unregister → SlotStore → NotificationBus (dirty slots)
//!                                        │ flush()
//!                                        ▼
//!                        SlotItemsHook generation Signal → consumer effect
//! ```
//!
//! Notifications are scoped per slot - registering into slot "b" never
//! re-renders a consumer of slot "a" - and any burst of changes between two
//! flushes collapses into one recomputation per affected consumer.
//!
//! ## Modules
//!
//! - [`types`] - Shared types ([`SlotItem`], [`PropsSource`], [`RenderFn`])
//! - [`error`] - Error taxonomy ([`MenuError`])
//! - `store` - Per-slot ordered item storage (internal)
//! - `bus` - Per-slot listeners with coalesced delivery (internal)
//! - [`hook`] - Reactive slot reads ([`SlotItemsHook`])
//! - [`menu`] - Public surface ([`Menu`], [`ComponentHandle`])

mod bus;
pub mod error;
pub mod hook;
pub mod menu;
mod store;
pub mod types;

pub use error::MenuError;
pub use hook::SlotItemsHook;
pub use menu::{ComponentHandle, Menu, MenuBuilder, RegisterArgs};
pub use types::{DEFAULT_PRIORITY, DEFAULT_SLOT, PropsSource, RenderFn, SlotItem};
