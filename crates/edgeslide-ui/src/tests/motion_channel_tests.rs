use super::*;
use edgeslide_core::Runtime;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

const FRAME_NANOS: u64 = 16_666_667;

fn pump_until_settled(runtime: &Runtime) {
    let handle = runtime.handle();
    let mut time = 0u64;
    for _ in 0..64 {
        if !handle.has_frame_callbacks() {
            break;
        }
        time += FRAME_NANOS;
        handle.drain_frame_callbacks(time);
    }
}

#[test]
fn owned_jump_publishes_both_values() {
    let runtime = Runtime::default();
    let channel = OwnedMotionChannel::new(runtime.handle(), -390.0);

    channel.jump_to(-200.0, 0.49);
    assert_eq!(channel.current_position(), -200.0);
    assert_eq!(channel.current_overlay(), 0.49);
    assert!(!channel.is_animating());
}

#[test]
fn owned_animate_lands_and_reports_settle() {
    let runtime = Runtime::default();
    let channel = OwnedMotionChannel::new(runtime.handle(), -390.0);
    let settled = Rc::new(Cell::new(false));

    let settled_flag = Rc::clone(&settled);
    channel.animate_to(
        0.0,
        1.0,
        AnimationSpec::default(),
        Box::new(move || settled_flag.set(true)),
    );
    assert!(channel.is_animating());

    pump_until_settled(&runtime);
    assert_eq!(channel.current_position(), 0.0);
    assert_eq!(channel.current_overlay(), 1.0);
    assert!(settled.get());
    assert!(!channel.is_animating());
}

#[test]
fn owned_animate_to_resting_values_is_a_noop() {
    let runtime = Runtime::default();
    let channel = OwnedMotionChannel::new(runtime.handle(), -390.0);
    let settled = Rc::new(Cell::new(false));

    let settled_flag = Rc::clone(&settled);
    channel.animate_to(
        -390.0,
        0.0,
        AnimationSpec::default(),
        Box::new(move || settled_flag.set(true)),
    );

    assert!(settled.get(), "no-op settle reports completion immediately");
    assert!(!runtime.handle().has_frame_callbacks());
}

#[test]
fn owned_stop_and_hold_freezes_midflight() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let channel = OwnedMotionChannel::new(handle.clone(), -390.0);

    channel.animate_to(0.0, 1.0, AnimationSpec::default(), Box::new(|| {}));
    handle.drain_frame_callbacks(FRAME_NANOS);
    handle.drain_frame_callbacks(FRAME_NANOS * 4);

    channel.stop_and_hold();
    let held = channel.current_position();
    assert!(held > -390.0 && held < 0.0);

    pump_until_settled(&runtime);
    assert_eq!(channel.current_position(), held);
}

#[test]
fn observed_values_track_the_channel() {
    let runtime = Runtime::default();
    let channel = OwnedMotionChannel::new(runtime.handle(), -390.0);
    let position = channel.position();
    let overlay = channel.overlay();

    channel.jump_to(-100.0, 0.74);
    assert_eq!(position.get(), -100.0);
    assert_eq!(overlay.get(), 0.74);
}

#[test]
fn driven_channel_forwards_animation_requests() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&requests);
    let channel = DrivenMotionChannel::new(
        390.0,
        Box::new(move |request| sink.borrow_mut().push(request)),
    );
    let settled = Rc::new(Cell::new(false));

    let settled_flag = Rc::clone(&settled);
    channel.animate_to(
        0.0,
        1.0,
        AnimationSpec::default(),
        Box::new(move || settled_flag.set(true)),
    );
    assert!(channel.is_animating());
    assert_eq!(
        requests.borrow().as_slice(),
        &[MotionRequest::Animate {
            position: 0.0,
            overlay: 1.0,
            spec: AnimationSpec::default()
        }]
    );
    assert!(!settled.get());

    // The owner animates, publishes, then reports the landing.
    channel.publish(0.0, 1.0);
    channel.complete_settle();
    assert!(settled.get());
    assert!(!channel.is_animating());
}

#[test]
fn driven_jump_supersedes_a_pending_settle() {
    let channel = DrivenMotionChannel::new(390.0, Box::new(|_| {}));
    let settled = Rc::new(Cell::new(false));

    let settled_flag = Rc::clone(&settled);
    channel.animate_to(
        0.0,
        1.0,
        AnimationSpec::default(),
        Box::new(move || settled_flag.set(true)),
    );
    channel.jump_to(200.0, 0.5);

    channel.complete_settle();
    assert!(!settled.get(), "superseded settle must not fire");
    assert_eq!(channel.current_position(), 200.0);
}

#[test]
fn driven_stop_and_hold_forwards_and_drops_callback() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&requests);
    let channel = DrivenMotionChannel::new(
        390.0,
        Box::new(move |request| sink.borrow_mut().push(request)),
    );

    channel.animate_to(0.0, 1.0, AnimationSpec::default(), Box::new(|| {}));
    channel.stop_and_hold();
    assert_eq!(requests.borrow().last(), Some(&MotionRequest::Hold));
    assert!(!channel.is_animating());
}

#[test]
fn driven_animate_at_rest_settles_immediately() {
    let requests = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&requests);
    let channel = DrivenMotionChannel::new(
        390.0,
        Box::new(move |request| sink.borrow_mut().push(request)),
    );
    let settled = Rc::new(Cell::new(false));

    let settled_flag = Rc::clone(&settled);
    channel.animate_to(
        390.0,
        0.0,
        AnimationSpec::default(),
        Box::new(move || settled_flag.set(true)),
    );
    assert!(settled.get());
    assert!(requests.borrow().is_empty());
}
