//! Core types shared across the crate.

use std::fmt;
use std::rc::Rc;

/// The implicit slot every menu has, used when no slot is given.
pub const DEFAULT_SLOT: &str = "default";

/// Default ordering priority for registered items. Lower sorts first.
pub const DEFAULT_PRIORITY: i32 = 10;

/// A renderable thunk: produces one element with no further arguments.
///
/// Props were bound at registration time, so consumers just call it.
pub type RenderFn<R> = Rc<dyn Fn() -> R>;

// =============================================================================
// SlotItem - the read view of a registered item
// =============================================================================

/// One item as seen by a slot consumer: its id plus its render thunk.
pub struct SlotItem<R> {
    /// Item id, unique within its slot.
    pub id: String,
    /// Renders the item's element from the current props.
    pub render: RenderFn<R>,
}

impl<R> Clone for SlotItem<R> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            render: self.render.clone(),
        }
    }
}

impl<R> fmt::Debug for SlotItem<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotItem").field("id", &self.id).finish()
    }
}

// =============================================================================
// PropsSource - static snapshot or dynamic accessor
// =============================================================================

/// Where an item's props come from when it renders.
///
/// The variants are mutually exclusive by construction, so "both a snapshot
/// and an accessor" is unrepresentable:
///
/// - [`PropsSource::Static`] - a snapshot captured at registration time
/// - [`PropsSource::Getter`] - an accessor invoked on every render, so props
///   read from signals inside it stay live
/// - [`PropsSource::None`] - the component renders with `P::default()`
///
/// # Example
///
/// ```ignore
/// use spark_menu::PropsSource;
///
/// // Static snapshot
/// let props = PropsSource::Static(LabelProps { title: "Save".into() });
///
/// // Dynamic accessor - re-evaluated on each render
/// let count = signal(0);
/// let props = PropsSource::getter(move || LabelProps {
///     title: format!("Count: {}", count.get()),
/// });
/// ```
pub enum PropsSource<P> {
    /// Render with `P::default()`.
    None,
    /// A props snapshot captured at registration time.
    Static(P),
    /// An accessor invoked at render time, each time the item renders.
    Getter(Rc<dyn Fn() -> P>),
}

impl<P> PropsSource<P> {
    /// Wrap a dynamic props accessor.
    pub fn getter(f: impl Fn() -> P + 'static) -> Self {
        Self::Getter(Rc::new(f))
    }
}

impl<P> Default for PropsSource<P> {
    fn default() -> Self {
        Self::None
    }
}

/// A plain value is a static snapshot.
impl<P> From<P> for PropsSource<P> {
    fn from(props: P) -> Self {
        Self::Static(props)
    }
}

impl<P> fmt::Debug for PropsSource<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("PropsSource::None"),
            Self::Static(_) => f.write_str("PropsSource::Static(..)"),
            Self::Getter(_) => f.write_str("PropsSource::Getter(..)"),
        }
    }
}
