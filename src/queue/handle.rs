//! Reentrant scoped-acquisition handle shared by the expansion engine and
//! the driver loop, so both can hold one shard queue resource open without
//! either closing it prematurely (§9 Design Notes: "avoid modelling it as
//! two independently-owned handles to the same file").

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

use parking_lot::Mutex;

/// A resource that performs a checkpoint or cleanup action once the
/// outermost `enter`/`leave` scope exits.
pub(crate) trait QueueResource {
    fn on_last_leave(&mut self);
}

/// Cheaply cloneable handle to a shared, mutex-guarded queue resource. Each
/// `enter()` returns a guard; the resource's `on_last_leave` runs exactly
/// once, when the use-count drops back to zero.
pub(crate) struct QueueHandle<R: QueueResource> {
    inner: Arc<Mutex<R>>,
    count: Arc<AtomicUsize>,
}

impl<R: QueueResource> QueueHandle<R> {
    pub(crate) fn new(resource: R) -> QueueHandle<R> {
        QueueHandle {
            inner: Arc::new(Mutex::new(resource)),
            count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub(crate) fn enter(&self) -> QueueGuard<R> {
        self.count.fetch_add(1, Ordering::SeqCst);
        QueueGuard { handle: self.clone() }
    }

    pub(crate) fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        f(&mut self.inner.lock())
    }
}

impl<R: QueueResource> Clone for QueueHandle<R> {
    fn clone(&self) -> QueueHandle<R> {
        QueueHandle {
            inner: Arc::clone(&self.inner),
            count: Arc::clone(&self.count),
        }
    }
}

/// RAII scope token. The resource's `on_last_leave` runs when the last
/// live guard for a handle is dropped, never before.
pub(crate) struct QueueGuard<R: QueueResource> {
    handle: QueueHandle<R>,
}

impl<R: QueueResource> QueueGuard<R> {
    pub(crate) fn with<T>(&self, f: impl FnOnce(&mut R) -> T) -> T {
        self.handle.with(f)
    }

    /// Derive another guard over the same handle, keeping the use-count
    /// alive independently of this guard's own lifetime.
    pub(crate) fn share(&self) -> QueueHandle<R> {
        self.handle.clone()
    }
}

impl<R: QueueResource> Drop for QueueGuard<R> {
    fn drop(&mut self) {
        if self.handle.count.fetch_sub(1, Ordering::SeqCst) == 1 {
            self.handle.inner.lock().on_last_leave();
        }
    }
}
