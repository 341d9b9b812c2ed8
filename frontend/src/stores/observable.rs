//! # Observable Values
//!
//! Small single-threaded stores that hold one value and notify listeners
//! whenever it changes.
//!
//! ## Key Types:
//! - `Writable<T>` - owner of the value; the only handle that can mutate it
//! - `Readable<T>` - cheap read-only view handed out to renderers
//! - `Subscription` - guard that removes its listener when dropped
//!
//! Listeners run synchronously inside `set`/`update`, in the order they
//! subscribed, and receive a snapshot of the new value.

use std::cell::{Cell, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct StoreInner<T> {
    value: RefCell<T>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
    next_listener_id: Cell<u64>,
}

impl<T: Clone + 'static> StoreInner<T> {
    fn subscribe(self: &Rc<Self>, listener: Listener<T>) -> Subscription {
        let id = self.next_listener_id.get();
        self.next_listener_id.set(id + 1);
        self.listeners.borrow_mut().push((id, listener.clone()));

        // New subscribers always see the current value first
        let current = self.value.borrow().clone();
        listener(&current);

        let store: Weak<Self> = Rc::downgrade(self);
        Subscription {
            unsubscribe: Some(Box::new(move || {
                if let Some(store) = store.upgrade() {
                    store.listeners.borrow_mut().retain(|(listener_id, _)| *listener_id != id);
                }
            })),
        }
    }

    fn notify(&self) {
        let snapshot = self.value.borrow().clone();
        let listeners: Vec<Listener<T>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, listener)| listener.clone())
            .collect();

        for listener in listeners {
            listener(&snapshot);
        }
    }
}

/// Handle that keeps a listener registered; dropping it unsubscribes
#[must_use = "dropping a Subscription immediately unsubscribes the listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Remove the listener now instead of waiting for drop
    pub fn unsubscribe(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Mutable observable value with a single owner
pub struct Writable<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T: Clone + 'static> Writable<T> {
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(StoreInner {
                value: RefCell::new(value),
                listeners: RefCell::new(Vec::new()),
                next_listener_id: Cell::new(0),
            }),
        }
    }

    /// Snapshot of the current value
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    /// Inspect the current value without cloning it
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.value.borrow())
    }

    /// Replace the value and notify every listener
    pub fn set(&self, value: T) {
        *self.inner.value.borrow_mut() = value;
        self.inner.notify();
    }

    /// Mutate the value in place and notify every listener
    pub fn update(&self, f: impl FnOnce(&mut T)) {
        f(&mut *self.inner.value.borrow_mut());
        self.inner.notify();
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.inner.subscribe(Rc::new(listener))
    }

    /// Read-only view sharing this store's value and listeners
    pub fn readable(&self) -> Readable<T> {
        Readable {
            inner: self.inner.clone(),
        }
    }

    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }
}

impl<T: Clone + Default + 'static> Default for Writable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: fmt::Debug> fmt::Debug for Writable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Writable")
            .field("value", &self.inner.value.borrow())
            .finish()
    }
}

/// Read-only view of a `Writable`; equality is identity of the underlying store
pub struct Readable<T> {
    inner: Rc<StoreInner<T>>,
}

impl<T: Clone + 'static> Readable<T> {
    pub fn get(&self) -> T {
        self.inner.value.borrow().clone()
    }

    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&*self.inner.value.borrow())
    }

    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        self.inner.subscribe(Rc::new(listener))
    }
}

impl<T> Clone for Readable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> PartialEq for Readable<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<T: fmt::Debug> fmt::Debug for Readable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Readable")
            .field("value", &self.inner.value.borrow())
            .finish()
    }
}
