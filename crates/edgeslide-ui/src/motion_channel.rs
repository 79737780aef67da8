//! Animated position/overlay channels.
//!
//! A channel carries the two continuous values one panel renders from: its
//! position in px and the 0..1 overlay strength behind it. Channels come in
//! two flavors selected at construction: [`OwnedMotionChannel`] drives its
//! own animations off the frame clock, [`DrivenMotionChannel`] mirrors values
//! an external owner animates and forwards animation requests to it.

use edgeslide_animation::{Animatable, AnimationSpec};
use edgeslide_core::{MutableValue, RuntimeHandle, Value};
use std::cell::RefCell;

/// The imperative surface a drag session or host uses to move one panel.
pub trait MotionChannel {
    /// Observable position in px.
    fn position(&self) -> Value<f32>;
    /// Observable overlay strength in `[0, 1]`.
    fn overlay(&self) -> Value<f32>;
    fn current_position(&self) -> f32;
    fn current_overlay(&self) -> f32;
    fn is_animating(&self) -> bool;
    /// Publishes a live drag frame without animating.
    fn jump_to(&self, position: f32, overlay: f32);
    /// Tweens both values; `on_settled` fires once when the position lands.
    /// Animating to the current resting values settles immediately.
    fn animate_to(&self, position: f32, overlay: f32, spec: AnimationSpec, on_settled: Box<dyn FnOnce()>);
    /// Freezes any in-flight animation at its current values.
    fn stop_and_hold(&self);
}

/// Channel that owns its animated values and runs tweens itself.
pub struct OwnedMotionChannel {
    position: Animatable,
    overlay: Animatable,
}

impl OwnedMotionChannel {
    pub fn new(runtime: RuntimeHandle, initial_position: f32) -> Self {
        Self {
            position: Animatable::new(initial_position, runtime.clone()),
            overlay: Animatable::new(0.0, runtime),
        }
    }
}

impl MotionChannel for OwnedMotionChannel {
    fn position(&self) -> Value<f32> {
        self.position.observed()
    }

    fn overlay(&self) -> Value<f32> {
        self.overlay.observed()
    }

    fn current_position(&self) -> f32 {
        self.position.value()
    }

    fn current_overlay(&self) -> f32 {
        self.overlay.value()
    }

    fn is_animating(&self) -> bool {
        self.position.is_animating() || self.overlay.is_animating()
    }

    fn jump_to(&self, position: f32, overlay: f32) {
        self.position.snap_to(position);
        self.overlay.snap_to(overlay);
    }

    fn animate_to(&self, position: f32, overlay: f32, spec: AnimationSpec, on_settled: Box<dyn FnOnce()>) {
        self.overlay.animate_to(overlay, spec, || {});
        self.position.animate_to(position, spec, on_settled);
    }

    fn stop_and_hold(&self) {
        self.position.stop_and_hold();
        self.overlay.stop_and_hold();
    }
}

/// Animation request forwarded to the external owner of a driven channel.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MotionRequest {
    Animate {
        position: f32,
        overlay: f32,
        spec: AnimationSpec,
    },
    Hold,
}

/// Channel whose values are animated by an external owner.
///
/// Live drag frames still write straight into the mirrored values; settle
/// requests are forwarded through the driver, and the owner reports the
/// landing with [`DrivenMotionChannel::complete_settle`].
pub struct DrivenMotionChannel {
    position: MutableValue<f32>,
    overlay: MutableValue<f32>,
    driver: Box<dyn Fn(MotionRequest)>,
    pending_settle: RefCell<Option<Box<dyn FnOnce()>>>,
}

impl DrivenMotionChannel {
    pub fn new(initial_position: f32, driver: Box<dyn Fn(MotionRequest)>) -> Self {
        Self {
            position: MutableValue::new(initial_position),
            overlay: MutableValue::new(0.0),
            driver,
            pending_settle: RefCell::new(None),
        }
    }

    /// The owner pushes the values it animates.
    pub fn publish(&self, position: f32, overlay: f32) {
        self.position.set(position);
        self.overlay.set(overlay);
    }

    /// The owner reports that the last requested animation landed.
    pub fn complete_settle(&self) {
        let callback = self.pending_settle.borrow_mut().take();
        if let Some(callback) = callback {
            callback();
        }
    }
}

impl MotionChannel for DrivenMotionChannel {
    fn position(&self) -> Value<f32> {
        self.position.as_value()
    }

    fn overlay(&self) -> Value<f32> {
        self.overlay.as_value()
    }

    fn current_position(&self) -> f32 {
        self.position.get()
    }

    fn current_overlay(&self) -> f32 {
        self.overlay.get()
    }

    fn is_animating(&self) -> bool {
        self.pending_settle.borrow().is_some()
    }

    fn jump_to(&self, position: f32, overlay: f32) {
        // A pending settle is superseded by live values.
        self.pending_settle.borrow_mut().take();
        self.publish(position, overlay);
    }

    fn animate_to(&self, position: f32, overlay: f32, spec: AnimationSpec, on_settled: Box<dyn FnOnce()>) {
        if self.position.get() == position
            && self.overlay.get() == overlay
            && self.pending_settle.borrow().is_none()
        {
            on_settled();
            return;
        }
        *self.pending_settle.borrow_mut() = Some(on_settled);
        (self.driver)(MotionRequest::Animate {
            position,
            overlay,
            spec,
        });
    }

    fn stop_and_hold(&self) {
        self.pending_settle.borrow_mut().take();
        (self.driver)(MotionRequest::Hold);
    }
}

#[cfg(test)]
#[path = "tests/motion_channel_tests.rs"]
mod tests;
