//! Frame-driven animated float.

use crate::easing::AnimationSpec;
use edgeslide_core::{FrameCallbackRegistration, MutableValue, RuntimeHandle, Value};
use std::cell::RefCell;
use std::rc::Rc;

/// An animatable `f32` published through an observable value.
///
/// `animate_to` runs a tween one frame callback at a time; `snap_to` writes
/// immediately; `stop_and_hold` freezes an in-flight animation at its current
/// value. A pending completion callback is dropped, not invoked, when the
/// animation is interrupted.
pub struct Animatable {
    inner: Rc<RefCell<AnimatableInner>>,
}

struct AnimatableInner {
    value: MutableValue<f32>,
    runtime: RuntimeHandle,
    start: f32,
    target: f32,
    spec: AnimationSpec,
    start_time_nanos: Option<u64>,
    registration: Option<FrameCallbackRegistration>,
    on_settled: Option<Box<dyn FnOnce()>>,
}

impl Animatable {
    pub fn new(initial: f32, runtime: RuntimeHandle) -> Self {
        Self {
            inner: Rc::new(RefCell::new(AnimatableInner {
                value: MutableValue::new(initial),
                runtime,
                start: initial,
                target: initial,
                spec: AnimationSpec::default(),
                start_time_nanos: None,
                registration: None,
                on_settled: None,
            })),
        }
    }

    pub fn value(&self) -> f32 {
        self.inner.borrow().value.get()
    }

    /// Read-only view the render layer observes.
    pub fn observed(&self) -> Value<f32> {
        self.inner.borrow().value.as_value()
    }

    pub fn is_animating(&self) -> bool {
        self.inner.borrow().registration.is_some()
    }

    /// Starts a tween toward `target`. Animating to the value the animatable
    /// already rests at is a no-op: the callback fires immediately and no
    /// frames are requested.
    pub fn animate_to(&self, target: f32, spec: AnimationSpec, on_settled: impl FnOnce() + 'static) {
        {
            let mut inner = self.inner.borrow_mut();
            if inner.registration.is_none() && (inner.value.get() - target).abs() <= f32::EPSILON {
                drop(inner);
                on_settled();
                return;
            }

            if let Some(registration) = inner.registration.take() {
                registration.cancel();
            }
            // An interrupted animation never settled; its callback is dropped.
            inner.on_settled = Some(Box::new(on_settled));
            inner.start = inner.value.get();
            inner.target = target;
            inner.spec = spec;
            inner.start_time_nanos = None;
        }
        Self::schedule_frame(&self.inner);
    }

    /// Writes `target` immediately, cancelling any in-flight animation.
    pub fn snap_to(&self, target: f32) {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.on_settled = None;
        inner.start = target;
        inner.target = target;
        inner.start_time_nanos = None;
        inner.value.set(target);
    }

    /// Cancels any in-flight animation, holding the value where it is now.
    /// Returns the held value.
    pub fn stop_and_hold(&self) -> f32 {
        let mut inner = self.inner.borrow_mut();
        if let Some(registration) = inner.registration.take() {
            registration.cancel();
        }
        inner.on_settled = None;
        let held = inner.value.get();
        inner.start = held;
        inner.target = held;
        inner.start_time_nanos = None;
        held
    }

    fn schedule_frame(this: &Rc<RefCell<AnimatableInner>>) {
        let clock = {
            let inner = this.borrow();
            if inner.registration.is_some() {
                return;
            }
            inner.runtime.frame_clock()
        };
        let weak = Rc::downgrade(this);
        let registration = clock.with_frame_nanos(move |time| {
            if let Some(strong) = weak.upgrade() {
                Self::on_frame(&strong, time);
            }
        });
        this.borrow_mut().registration = Some(registration);
    }

    fn on_frame(this: &Rc<RefCell<AnimatableInner>>, frame_time_nanos: u64) {
        let mut settled = None;
        let mut schedule_next = false;
        {
            let mut inner = this.borrow_mut();
            inner.registration = None;

            let start_time = *inner.start_time_nanos.get_or_insert(frame_time_nanos);
            let elapsed_nanos = frame_time_nanos.saturating_sub(start_time);
            let duration_nanos = (inner.spec.duration_millis * 1_000_000).max(1);
            let linear = (elapsed_nanos as f32 / duration_nanos as f32).clamp(0.0, 1.0);
            let eased = inner.spec.easing.transform(linear);

            let next = inner.start + (inner.target - inner.start) * eased;
            inner.value.set(next);

            if linear >= 1.0 {
                let target = inner.target;
                inner.value.set(target);
                inner.start = target;
                inner.start_time_nanos = None;
                settled = inner.on_settled.take();
            } else {
                schedule_next = true;
            }
        }

        if schedule_next {
            Self::schedule_frame(this);
        }
        // Run outside the borrow; the callback may retarget this animatable.
        if let Some(callback) = settled {
            callback();
        }
    }
}

impl Clone for Animatable {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

#[cfg(test)]
#[path = "tests/animatable_tests.rs"]
mod tests;
