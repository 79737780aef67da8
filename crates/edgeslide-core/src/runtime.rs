//! Frame callback registry for the UI thread.
//!
//! The embedder owns the event loop; the engine only ever asks for "one more
//! frame" by registering a callback here. Draining executes every callback
//! registered before the drain started; callbacks registered while draining
//! run on the next frame.

use smallvec::SmallVec;
use std::cell::{Cell, RefCell};
use std::rc::{Rc, Weak};

/// Identifies a registered frame callback so it can be cancelled.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameCallbackId(u64);

/// Lets the runtime request a new frame from the embedding event loop.
///
/// Registering a frame callback invokes `schedule_frame` so the embedder
/// knows to pump [`RuntimeHandle::drain_frame_callbacks`] again. Tests pump
/// frames by hand and use [`NoopScheduler`].
pub trait FrameScheduler {
    fn schedule_frame(&self);
}

/// Scheduler that does nothing. The embedder (or a test) drives frames itself.
#[derive(Default)]
pub struct NoopScheduler;

impl FrameScheduler for NoopScheduler {
    fn schedule_frame(&self) {}
}

struct FrameCallbackEntry {
    id: FrameCallbackId,
    callback: Box<dyn FnOnce(u64)>,
}

struct RuntimeInner {
    scheduler: Rc<dyn FrameScheduler>,
    next_callback_id: Cell<u64>,
    frame_callbacks: RefCell<SmallVec<[FrameCallbackEntry; 4]>>,
}

impl RuntimeInner {
    fn register_frame_callback(&self, callback: Box<dyn FnOnce(u64)>) -> FrameCallbackId {
        let id = FrameCallbackId(self.next_callback_id.get());
        self.next_callback_id.set(id.0 + 1);
        self.frame_callbacks
            .borrow_mut()
            .push(FrameCallbackEntry { id, callback });
        self.scheduler.schedule_frame();
        id
    }

    fn cancel_frame_callback(&self, id: FrameCallbackId) {
        self.frame_callbacks
            .borrow_mut()
            .retain(|entry| entry.id != id);
    }

    fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        // Swap the registry out so callbacks can register follow-ups for the
        // next frame without re-entering the borrow.
        let entries: SmallVec<[FrameCallbackEntry; 4]> =
            std::mem::take(&mut *self.frame_callbacks.borrow_mut());
        if !entries.is_empty() {
            log::trace!("draining {} frame callbacks", entries.len());
        }
        for entry in entries {
            (entry.callback)(frame_time_nanos);
        }
    }

    fn has_frame_callbacks(&self) -> bool {
        !self.frame_callbacks.borrow().is_empty()
    }
}

/// Owner of the frame callback registry. Keep it alive for the lifetime of
/// the screen; hand out [`RuntimeHandle`]s to everything else.
pub struct Runtime {
    inner: Rc<RuntimeInner>,
}

impl Runtime {
    pub fn new(scheduler: Rc<dyn FrameScheduler>) -> Self {
        Self {
            inner: Rc::new(RuntimeInner {
                scheduler,
                next_callback_id: Cell::new(1),
                frame_callbacks: RefCell::new(SmallVec::new()),
            }),
        }
    }

    pub fn handle(&self) -> RuntimeHandle {
        RuntimeHandle {
            inner: Rc::downgrade(&self.inner),
        }
    }
}

impl Default for Runtime {
    fn default() -> Self {
        Self::new(Rc::new(NoopScheduler))
    }
}

/// Weak handle to the runtime. Cheap to clone; every operation is a no-op
/// after the owning [`Runtime`] is dropped.
#[derive(Clone)]
pub struct RuntimeHandle {
    inner: Weak<RuntimeInner>,
}

impl RuntimeHandle {
    pub fn register_frame_callback(
        &self,
        callback: impl FnOnce(u64) + 'static,
    ) -> Option<FrameCallbackId> {
        self.inner
            .upgrade()
            .map(|inner| inner.register_frame_callback(Box::new(callback)))
    }

    pub fn cancel_frame_callback(&self, id: FrameCallbackId) {
        if let Some(inner) = self.inner.upgrade() {
            inner.cancel_frame_callback(id);
        }
    }

    /// Runs every callback registered before this call with the given frame
    /// timestamp. The embedder calls this once per vsync / dispatch turn.
    pub fn drain_frame_callbacks(&self, frame_time_nanos: u64) {
        if let Some(inner) = self.inner.upgrade() {
            inner.drain_frame_callbacks(frame_time_nanos);
        }
    }

    /// True while any animation (or other frame consumer) wants more frames.
    pub fn has_frame_callbacks(&self) -> bool {
        self.inner
            .upgrade()
            .map(|inner| inner.has_frame_callbacks())
            .unwrap_or(false)
    }

    pub fn frame_clock(&self) -> crate::FrameClock {
        crate::FrameClock::new(self.clone())
    }
}

#[cfg(test)]
#[path = "tests/runtime_tests.rs"]
mod tests;
