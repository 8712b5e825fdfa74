//! Error types for menu registration.
//!
//! Absence is never an error in this crate: reading an unknown slot returns
//! an empty list and unregistering an unknown id is a no-op. The only failure
//! is registering a duplicate id without asking for a replacement, and that
//! failure leaves the registry untouched.

use thiserror::Error;

/// Errors raised by menu operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MenuError {
    /// An item with this id is already registered in the target slot and the
    /// registration did not ask to override it.
    ///
    /// The message text is stable; tooling matches on it.
    #[error("Item with id '{id}' already exists in slot '{slot}'. Use 'override' to replace it.")]
    DuplicateId {
        /// The colliding item id.
        id: String,
        /// The slot in which the collision happened.
        slot: String,
    },
}
