//! Plain observable values.
//!
//! Motion channels publish position and overlay strength through these cells.
//! The render layer polls `get()` (comparing `version()` when it wants cheap
//! dirty-checking) instead of subscribing to an event stream.

use std::cell::Cell;
use std::rc::Rc;

struct ValueInner<T: Copy> {
    value: Cell<T>,
    version: Cell<u64>,
}

/// Writable observable cell. Clones share the same storage.
pub struct MutableValue<T: Copy + PartialEq> {
    inner: Rc<ValueInner<T>>,
}

impl<T: Copy + PartialEq> MutableValue<T> {
    pub fn new(initial: T) -> Self {
        Self {
            inner: Rc::new(ValueInner {
                value: Cell::new(initial),
                version: Cell::new(0),
            }),
        }
    }

    pub fn get(&self) -> T {
        self.inner.value.get()
    }

    /// Writes the value, bumping the version only on an actual change so
    /// repeated identical publishes do not look dirty.
    pub fn set(&self, value: T) {
        if self.inner.value.get() != value {
            self.inner.value.set(value);
            self.inner.version.set(self.inner.version.get() + 1);
        }
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Read-only view sharing this cell's storage.
    pub fn as_value(&self) -> Value<T> {
        Value {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: Copy + PartialEq> Clone for MutableValue<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

/// Read-only handle to a [`MutableValue`].
pub struct Value<T: Copy> {
    inner: Rc<ValueInner<T>>,
}

impl<T: Copy> Value<T> {
    pub fn get(&self) -> T {
        self.inner.value.get()
    }

    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }
}

impl<T: Copy> Clone for Value<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}
