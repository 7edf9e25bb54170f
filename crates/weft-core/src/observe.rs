#![forbid(unsafe_code)]

//! Observable state cells with explicit change notification.
//!
//! A declarative UI runtime re-runs view code when state changes; this
//! crate's replacement is explicit: an [`Observable<T>`] holds a value,
//! compares on every `set` (by `PartialEq`), and notifies registered
//! callbacks only when the value actually changed. There is no implicit
//! re-execution anywhere.
//!
//! # Invariants
//!
//! 1. `version` increments by exactly 1 on each value-changing mutation.
//! 2. `set(v)` where `v == current` is a no-op: no version bump, no
//!    notification.
//! 3. Subscribers are notified in registration order.
//! 4. Dead subscribers (dropped [`Subscription`] guards) are pruned lazily
//!    during notification.
//!
//! # Failure Modes
//!
//! - Subscribers that call `set` re-entrantly are supported: callbacks run
//!   after the cell's borrow is released.
//! - Storing a `Subscription` forever keeps its callback alive; drop the
//!   guard to unsubscribe.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use tracing::trace;

type CallbackRc<T> = Rc<dyn Fn(&T)>;
type CallbackWeak<T> = Weak<dyn Fn(&T)>;

struct Inner<T> {
    value: T,
    version: u64,
    subscribers: Vec<CallbackWeak<T>>,
}

/// A single-threaded, version-tracked value with change notification.
///
/// Cloning an `Observable` creates a new handle to the **same** inner
/// state; both handles see the same value and share subscribers.
pub struct Observable<T> {
    inner: Rc<RefCell<Inner<T>>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let inner = self.inner.borrow();
        f.debug_struct("Observable")
            .field("value", &inner.value)
            .field("version", &inner.version)
            .field("subscriber_count", &inner.subscribers.len())
            .finish()
    }
}

impl<T: Clone + PartialEq + 'static> Observable<T> {
    /// Create a new observable with the given initial value, version 0,
    /// and no subscribers.
    #[must_use]
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                value,
                version: 0,
                subscribers: Vec::new(),
            })),
        }
    }

    /// Get a clone of the current value.
    #[must_use]
    pub fn get(&self) -> T {
        self.inner.borrow().value.clone()
    }

    /// Access the current value by reference without cloning.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.borrow().value)
    }

    /// The number of value-changing mutations so far.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.inner.borrow().version
    }

    /// Set a new value. If it differs from the current value by
    /// `PartialEq`, the version is incremented and all live subscribers
    /// are notified in registration order.
    ///
    /// Safe to call re-entrantly from within subscriber callbacks.
    pub fn set(&self, value: T) {
        let (snapshot, callbacks) = {
            let mut inner = self.inner.borrow_mut();
            if inner.value == value {
                return;
            }
            inner.value = value;
            inner.version += 1;
            trace!(target: "weft::observe", version = inner.version, "observable changed");
            // Prune dead subscribers, collect live ones, then release the
            // borrow before invoking anything.
            inner.subscribers.retain(|weak| weak.strong_count() > 0);
            let callbacks: Vec<CallbackRc<T>> = inner
                .subscribers
                .iter()
                .filter_map(Weak::upgrade)
                .collect();
            (inner.value.clone(), callbacks)
        };
        for callback in callbacks {
            callback(&snapshot);
        }
    }

    /// Mutate the value in place via `f`, then notify if the result differs
    /// from the value before the call.
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        let mut next = self.get();
        f(&mut next);
        self.set(next);
    }

    /// Register a change callback. The callback stays registered until the
    /// returned [`Subscription`] is dropped.
    #[must_use]
    pub fn subscribe(&self, callback: impl Fn(&T) + 'static) -> Subscription {
        let strong: CallbackRc<T> = Rc::new(callback);
        self.inner.borrow_mut().subscribers.push(Rc::downgrade(&strong));
        Subscription {
            _guard: Rc::new(strong),
        }
    }

    /// Number of live subscribers.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner
            .borrow()
            .subscribers
            .iter()
            .filter(|weak| weak.strong_count() > 0)
            .count()
    }
}

/// RAII guard for a subscription; dropping it unsubscribes.
pub struct Subscription {
    _guard: Rc<dyn std::any::Any>,
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").finish_non_exhaustive()
    }
}
