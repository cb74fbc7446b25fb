//! Single-slot callbacks.
//!
//! A [`Callback<T>`] holds at most one handler. Registering a new handler
//! replaces the previous one, which is the contract controls use for
//! `on_changed`-style hooks. The handler receives a reference to the object
//! that fired it; any caller context travels inside the closure.
//!
//! Use a [`Signal`](crate::Signal) instead when several independent
//! listeners need the same notification.

use std::fmt;
use std::sync::Arc;

const TARGET: &str = crate::logging::targets::CALLBACK;

type Handler<T> = Arc<dyn Fn(&T) + Send + Sync>;

/// A replaceable handler invoked with `&T`.
///
/// # Example
///
/// ```
/// use std::sync::Arc;
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use tessera_core::Callback;
///
/// let calls = Arc::new(AtomicUsize::new(0));
/// let mut on_changed = Callback::<i32>::new();
///
/// let counter = calls.clone();
/// on_changed.set(move |_| {
///     counter.fetch_add(1, Ordering::SeqCst);
/// });
///
/// assert!(on_changed.invoke(&7));
/// assert_eq!(calls.load(Ordering::SeqCst), 1);
/// ```
pub struct Callback<T: ?Sized> {
    handler: Option<Handler<T>>,
    blocked: bool,
}

impl<T: ?Sized> Callback<T> {
    /// Create an empty callback.
    pub fn new() -> Self {
        Self {
            handler: None,
            blocked: false,
        }
    }

    /// Register the handler, replacing any previous one.
    ///
    /// The handler is not invoked at registration time.
    pub fn set<F>(&mut self, handler: F)
    where
        F: Fn(&T) + Send + Sync + 'static,
    {
        if self.handler.is_some() {
            tracing::trace!(target: TARGET, "replacing registered callback");
        }
        self.handler = Some(Arc::new(handler));
    }

    /// Remove the handler, if any.
    pub fn clear(&mut self) {
        self.handler = None;
    }

    /// Whether a handler is registered.
    pub fn is_set(&self) -> bool {
        self.handler.is_some()
    }

    /// Suppress invocation while `blocked` is true.
    pub fn set_blocked(&mut self, blocked: bool) {
        self.blocked = blocked;
    }

    /// Whether invocation is currently suppressed.
    pub fn is_blocked(&self) -> bool {
        self.blocked
    }

    /// Invoke the handler with `target`.
    ///
    /// Returns `true` if a handler ran.
    pub fn invoke(&self, target: &T) -> bool {
        if self.blocked {
            tracing::trace!(target: TARGET, "callback blocked, skipping invoke");
            return false;
        }
        match &self.handler {
            Some(handler) => {
                handler(target);
                true
            }
            None => false,
        }
    }
}

impl<T: ?Sized> Default for Callback<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: ?Sized> fmt::Debug for Callback<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Callback")
            .field("set", &self.is_set())
            .field("blocked", &self.blocked)
            .finish()
    }
}

static_assertions::assert_impl_all!(Callback<str>: Send, Sync);

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn counting(calls: &Arc<AtomicUsize>) -> impl Fn(&i32) + Send + Sync + use<> {
        let calls = calls.clone();
        move |_| {
            calls.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_empty_callback_does_nothing() {
        let callback = Callback::<i32>::new();
        assert!(!callback.is_set());
        assert!(!callback.invoke(&1));
    }

    #[test]
    fn test_set_does_not_invoke() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut callback = Callback::new();
        callback.set(counting(&calls));

        assert!(callback.is_set());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_set_replaces_previous() {
        let first = Arc::new(AtomicUsize::new(0));
        let second = Arc::new(AtomicUsize::new(0));
        let mut callback = Callback::new();

        callback.set(counting(&first));
        callback.set(counting(&second));
        callback.invoke(&5);

        assert_eq!(first.load(Ordering::SeqCst), 0);
        assert_eq!(second.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_clear() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut callback = Callback::new();
        callback.set(counting(&calls));
        callback.clear();

        assert!(!callback.invoke(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_blocked() {
        let calls = Arc::new(AtomicUsize::new(0));
        let mut callback = Callback::new();
        callback.set(counting(&calls));

        callback.set_blocked(true);
        assert!(!callback.invoke(&1));
        callback.set_blocked(false);
        assert!(callback.invoke(&1));
        assert_eq!(calls.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_handler_receives_target() {
        let seen = Arc::new(parking_lot::Mutex::new(String::new()));
        let seen_clone = seen.clone();
        let mut callback = Callback::<str>::new();

        callback.set(move |s| seen_clone.lock().push_str(s));
        callback.invoke("slider");

        assert_eq!(*seen.lock(), "slider");
    }
}
