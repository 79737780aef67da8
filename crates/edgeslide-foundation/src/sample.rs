//! Pointer events and per-gesture samples.

use web_time::Instant;

std::thread_local! {
    static EPOCH: Instant = Instant::now();
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerPhase {
    Down,
    Move,
    Up,
    Cancel,
}

/// One raw pointer event as delivered by the embedder.
///
/// Coordinates are viewport-local logical pixels; `time_ms` comes from any
/// monotonic source as long as it is consistent across one gesture.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub phase: PointerPhase,
    pub x: f32,
    pub y: f32,
    pub time_ms: f64,
}

impl PointerEvent {
    pub fn new(phase: PointerPhase, x: f32, y: f32, time_ms: f64) -> Self {
        Self {
            phase,
            x,
            y,
            time_ms,
        }
    }

    /// Stamps the event with the process-local monotonic clock, for embedders
    /// whose input layer does not carry timestamps.
    pub fn stamped(phase: PointerPhase, x: f32, y: f32) -> Self {
        let time_ms = EPOCH.with(|epoch| epoch.elapsed().as_secs_f64() * 1000.0);
        Self::new(phase, x, y, time_ms)
    }
}

/// Derived view of the gesture at one instant: deltas are relative to the
/// gesture's starting point, velocities in px/ms.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GestureSample {
    pub origin_x: f32,
    pub dx: f32,
    pub dy: f32,
    pub vx: f32,
    pub vy: f32,
}

impl GestureSample {
    pub fn new(origin_x: f32, dx: f32, dy: f32, vx: f32, vy: f32) -> Self {
        Self {
            origin_x,
            dx,
            dy,
            vx,
            vy,
        }
    }
}
