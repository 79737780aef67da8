use super::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[test]
fn callbacks_run_with_frame_time() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let seen = Rc::new(Cell::new(0u64));

    let seen_clone = Rc::clone(&seen);
    handle.register_frame_callback(move |nanos| seen_clone.set(nanos));

    handle.drain_frame_callbacks(16_000_000);
    assert_eq!(seen.get(), 16_000_000);
}

#[test]
fn cancelled_callback_never_runs() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let fired = Rc::new(Cell::new(false));

    let fired_clone = Rc::clone(&fired);
    let id = handle
        .register_frame_callback(move |_| fired_clone.set(true))
        .expect("runtime alive");
    handle.cancel_frame_callback(id);

    handle.drain_frame_callbacks(0);
    assert!(!fired.get());
}

#[test]
fn callback_registered_during_drain_runs_next_frame() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let order = Rc::new(RefCell::new(Vec::new()));

    let order_outer = Rc::clone(&order);
    let handle_inner = handle.clone();
    handle.register_frame_callback(move |_| {
        order_outer.borrow_mut().push("first");
        let order_inner = Rc::clone(&order_outer);
        handle_inner.register_frame_callback(move |_| {
            order_inner.borrow_mut().push("second");
        });
    });

    handle.drain_frame_callbacks(0);
    assert_eq!(order.borrow().as_slice(), &["first"]);

    handle.drain_frame_callbacks(16_000_000);
    assert_eq!(order.borrow().as_slice(), &["first", "second"]);
}

#[test]
fn has_frame_callbacks_tracks_pending_work() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    assert!(!handle.has_frame_callbacks());

    handle.register_frame_callback(|_| {});
    assert!(handle.has_frame_callbacks());

    handle.drain_frame_callbacks(0);
    assert!(!handle.has_frame_callbacks());
}

#[test]
fn handle_outliving_runtime_is_inert() {
    let handle = {
        let runtime = Runtime::default();
        runtime.handle()
    };

    assert!(handle.register_frame_callback(|_| {}).is_none());
    assert!(!handle.has_frame_callbacks());
    handle.drain_frame_callbacks(0);
}

#[test]
fn registration_drop_cancels_pending_callback() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let clock = handle.frame_clock();
    let fired = Rc::new(Cell::new(false));

    let fired_clone = Rc::clone(&fired);
    let registration = clock.with_frame_nanos(move |_| fired_clone.set(true));
    drop(registration);

    handle.drain_frame_callbacks(0);
    assert!(!fired.get());
}

#[test]
fn with_frame_millis_converts_nanos() {
    let runtime = Runtime::default();
    let handle = runtime.handle();
    let clock = handle.frame_clock();
    let seen = Rc::new(Cell::new(0u64));

    let seen_clone = Rc::clone(&seen);
    let _registration = clock.with_frame_millis(move |millis| seen_clone.set(millis));

    handle.drain_frame_callbacks(32_000_000);
    assert_eq!(seen.get(), 32);
}
