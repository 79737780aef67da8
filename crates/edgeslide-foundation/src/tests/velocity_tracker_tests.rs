use super::*;

#[test]
fn empty_tracker_reports_zero() {
    let tracker = VelocityTracker1D::new();
    assert_eq!(tracker.velocity(), 0.0);
}

#[test]
fn single_sample_reports_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.push(0.0, 100.0);
    assert_eq!(tracker.velocity(), 0.0);
}

#[test]
fn constant_motion_is_recovered() {
    let mut tracker = VelocityTracker1D::new();
    // 10 px every 10 ms = 1 px/ms.
    for step in 0..5 {
        tracker.push(step as f64 * 10.0, step as f32 * 10.0);
    }
    let velocity = tracker.velocity();
    assert!(
        (velocity - 1.0).abs() < 0.1,
        "expected ~1 px/ms, got {}",
        velocity
    );
}

#[test]
fn backwards_motion_is_negative() {
    let mut tracker = VelocityTracker1D::new();
    tracker.push(0.0, 300.0);
    tracker.push(10.0, 200.0);
    tracker.push(20.0, 100.0);
    assert!(tracker.velocity() < 0.0);
}

#[test]
fn reset_clears_history() {
    let mut tracker = VelocityTracker1D::new();
    tracker.push(0.0, 0.0);
    tracker.push(10.0, 100.0);
    tracker.reset();
    assert_eq!(tracker.velocity(), 0.0);
}

#[test]
fn samples_beyond_horizon_are_ignored() {
    let mut tracker = VelocityTracker1D::new();
    // Ancient sample followed by a tight recent burst.
    tracker.push(0.0, 0.0);
    tracker.push(150.0, 100.0);
    tracker.push(160.0, 200.0);
    tracker.push(170.0, 300.0);
    let velocity = tracker.velocity();
    assert!(velocity > 0.0, "recent burst should dominate");
}

#[test]
fn stop_gap_discards_stale_motion() {
    let mut tracker = VelocityTracker1D::new();
    tracker.push(0.0, 0.0);
    tracker.push(ASSUME_STOPPED_MS + 1.0, 100.0);
    assert_eq!(tracker.velocity(), 0.0);
}

#[test]
fn clamped_velocity_caps_spikes() {
    let mut tracker = VelocityTracker1D::new();
    tracker.push(0.0, 0.0);
    tracker.push(1.0, 100.0);
    tracker.push(2.0, 200.0);
    assert_eq!(tracker.velocity_clamped(8.0), 8.0);

    tracker.reset();
    tracker.push(0.0, 200.0);
    tracker.push(1.0, 100.0);
    tracker.push(2.0, 0.0);
    assert_eq!(tracker.velocity_clamped(8.0), -8.0);
}

#[test]
fn invalid_cap_reports_zero() {
    let mut tracker = VelocityTracker1D::new();
    tracker.push(0.0, 0.0);
    tracker.push(10.0, 100.0);
    assert_eq!(tracker.velocity_clamped(0.0), 0.0);
    assert_eq!(tracker.velocity_clamped(f32::NAN), 0.0);
}
