//! Named event-handler bundles that can be merged onto one element.
//!
//! ## Usage
//!
//! Combine the handlers that several services want on the same element, for
//! example thumb drag handlers and hover handlers on a slider handle.

use smallvec::SmallVec;

use crate::prop::Callback;

/// Pointer entered the element.
pub const POINTER_ENTER: &str = "pointerenter";
/// Pointer left the element.
pub const POINTER_LEAVE: &str = "pointerleave";
/// Pointer pressed on the element.
pub const POINTER_DOWN: &str = "pointerdown";
/// Key pressed while the element is focused.
pub const KEY_DOWN: &str = "keydown";

/// A bundle of handlers keyed by event name.
///
/// Several handlers may be registered for the same name; they fire in
/// insertion order.
#[derive(Clone, Default, PartialEq)]
pub struct EventProps {
    handlers: SmallVec<[(&'static str, Callback); 4]>,
}

impl EventProps {
    /// An empty bundle.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler for `event`.
    pub fn on(mut self, event: &'static str, handler: impl Into<Callback>) -> Self {
        self.handlers.push((event, handler.into()));
        self
    }

    /// Chains `other` after `self`. Handlers for a shared event name all fire,
    /// those of `self` first.
    pub fn merge(mut self, other: &EventProps) -> Self {
        self.handlers.extend(other.handlers.iter().cloned());
        self
    }

    /// Returns `true` if at least one handler is registered for `event`.
    pub fn handles(&self, event: &str) -> bool {
        self.handlers.iter().any(|(name, _)| *name == event)
    }

    /// Invokes every handler registered for `event` and returns how many ran.
    pub fn dispatch(&self, event: &str) -> usize {
        let mut fired = 0;
        for (_, handler) in self.handlers.iter().filter(|(name, _)| *name == event) {
            handler.call();
            fired += 1;
        }
        fired
    }

    /// Distinct event names in first-registration order.
    pub fn event_names(&self) -> Vec<&'static str> {
        let mut names: Vec<&'static str> = Vec::new();
        for (name, _) in &self.handlers {
            if !names.contains(name) {
                names.push(*name);
            }
        }
        names
    }

    /// Returns `true` when no handler is registered.
    pub fn is_empty(&self) -> bool {
        self.handlers.is_empty()
    }
}

impl std::fmt::Debug for EventProps {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventProps")
            .field("events", &self.event_names())
            .finish()
    }
}
