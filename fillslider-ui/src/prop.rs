//! Callback handles used in component arguments.
//!
//! Handlers compare by identity, so args structs holding them can still
//! derive `PartialEq` and skip a rebuild when nothing changed.

use std::sync::Arc;

/// Shared callable compared by address.
struct SharedFn<F: ?Sized>(Arc<F>);

impl<F: ?Sized> SharedFn<F> {
    fn ptr_eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<F: ?Sized> Clone for SharedFn<F> {
    fn clone(&self) -> Self {
        Self(Arc::clone(&self.0))
    }
}

impl<F: ?Sized> std::fmt::Debug for SharedFn<F> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:p}", Arc::as_ptr(&self.0).cast::<()>())
    }
}

/// Event handler without arguments, e.g. `pointerenter`.
#[derive(Clone)]
pub struct Callback(SharedFn<dyn Fn() + Send + Sync>);

impl Callback {
    /// Wraps `handler`.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        Self(SharedFn(Arc::new(handler)))
    }

    /// Runs the handler.
    pub fn call(&self) {
        (self.0.0)()
    }
}

impl<F> From<F> for Callback
where
    F: Fn() + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

impl PartialEq for Callback {
    fn eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl Eq for Callback {}

impl std::fmt::Debug for Callback {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Callback").field(&self.0).finish()
    }
}

/// Handler taking one argument, e.g. a slider's `on_change(value)`.
pub struct CallbackWith<T, R = ()>(SharedFn<dyn Fn(T) -> R + Send + Sync>);

impl<T, R> CallbackWith<T, R> {
    /// Wraps `handler`.
    pub fn new<F>(handler: F) -> Self
    where
        F: Fn(T) -> R + Send + Sync + 'static,
    {
        Self(SharedFn(Arc::new(handler)))
    }

    /// Runs the handler with `value`.
    pub fn call(&self, value: T) -> R {
        (self.0.0)(value)
    }
}

impl<T, R, F> From<F> for CallbackWith<T, R>
where
    F: Fn(T) -> R + Send + Sync + 'static,
{
    fn from(handler: F) -> Self {
        Self::new(handler)
    }
}

// Derives would demand `T: Clone`/`T: PartialEq`.
impl<T, R> Clone for CallbackWith<T, R> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<T, R> PartialEq for CallbackWith<T, R> {
    fn eq(&self, other: &Self) -> bool {
        self.0.ptr_eq(&other.0)
    }
}

impl<T, R> Eq for CallbackWith<T, R> {}

impl<T, R> std::fmt::Debug for CallbackWith<T, R> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("CallbackWith").field(&self.0).finish()
    }
}
