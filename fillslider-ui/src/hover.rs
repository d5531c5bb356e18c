//! Hover tracking for a single element.
//!
//! ## Usage
//!
//! Merge [`HoverService::hover_props`] onto the element and read
//! [`HoverService::is_hovered`] on the next build.

use std::sync::Arc;

use parking_lot::RwLock;

use crate::event::{EventProps, POINTER_ENTER, POINTER_LEAVE};

/// Read-only hover source for one element.
pub trait HoverService {
    /// Whether the pointer is over the element.
    fn is_hovered(&self) -> bool;

    /// Handlers that keep the hover flag up to date.
    fn hover_props(&self) -> EventProps;
}

#[derive(Debug, Default)]
struct HoverInner {
    is_hovered: bool,
    is_disabled: bool,
}

/// Shared hover flag driven by `pointerenter` / `pointerleave`.
///
/// Clones share the same flag.
#[derive(Debug, Clone, Default)]
pub struct HoverState {
    inner: Arc<RwLock<HoverInner>>,
}

impl HoverState {
    /// Creates a hover state that starts un-hovered.
    pub fn new() -> Self {
        Self::default()
    }

    /// Disables or re-enables hover tracking. Disabling clears the flag.
    pub fn set_disabled(&self, disabled: bool) {
        let mut inner = self.inner.write();
        inner.is_disabled = disabled;
        if disabled {
            inner.is_hovered = false;
        }
    }

    /// Marks the pointer as over the element.
    pub fn pointer_enter(&self) {
        let mut inner = self.inner.write();
        if !inner.is_disabled {
            inner.is_hovered = true;
        }
    }

    /// Marks the pointer as outside the element.
    pub fn pointer_leave(&self) {
        self.inner.write().is_hovered = false;
    }
}

impl HoverService for HoverState {
    fn is_hovered(&self) -> bool {
        let inner = self.inner.read();
        inner.is_hovered && !inner.is_disabled
    }

    fn hover_props(&self) -> EventProps {
        let enter = self.clone();
        let leave = self.clone();
        EventProps::new()
            .on(POINTER_ENTER, move || enter.pointer_enter())
            .on(POINTER_LEAVE, move || leave.pointer_leave())
    }
}

/// Hover source that never reports hover and contributes no handlers.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoHover;

impl HoverService for NoHover {
    fn is_hovered(&self) -> bool {
        false
    }

    fn hover_props(&self) -> EventProps {
        EventProps::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn props_toggle_flag() {
        let hover = HoverState::new();
        let props = hover.hover_props();
        assert!(!hover.is_hovered());

        props.dispatch(POINTER_ENTER);
        assert!(hover.is_hovered());

        props.dispatch(POINTER_LEAVE);
        assert!(!hover.is_hovered());
    }

    #[test]
    fn disabled_never_hovers() {
        let hover = HoverState::new();
        hover.pointer_enter();
        hover.set_disabled(true);
        assert!(!hover.is_hovered());
        hover.pointer_enter();
        assert!(!hover.is_hovered());

        hover.set_disabled(false);
        hover.pointer_enter();
        assert!(hover.is_hovered());
    }

    #[test]
    fn no_hover_is_inert() {
        assert!(!NoHover.is_hovered());
        assert!(NoHover.hover_props().is_empty());
    }
}
