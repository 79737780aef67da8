//! Shared gesture thresholds.
//!
//! One configuration value is injected into the host and both panels so the
//! open, close, and drag-to-close paths can never disagree about what counts
//! as a drag or a commit.
//!
//! Values are in logical pixels (and logical pixels per millisecond for the
//! velocity thresholds), tuned for typical phone displays.

/// Thresholds for zone claims, the tap-vs-drag guard, and the release-time
/// commit decision.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GestureConfig {
    /// Width of the left/right edge strips where a touch-down is read as an
    /// intentional panel-open request.
    pub edge_width: f32,
    /// Travel past which a release commits the panel transition.
    pub distance_threshold: f32,
    /// Speed (px/ms) past which a release commits regardless of distance.
    pub velocity_threshold: f32,
    /// Horizontal travel required before the gesture produces any motion.
    /// Below this the touch may still resolve as a tap.
    pub drag_slop: f32,
    /// Extra horizontal margin over the vertical travel. Biases ownership
    /// toward horizontal intent so a mostly-vertical scroll is never hijacked.
    pub axis_bias: f32,
    /// Travel below which a release counts as a tap rather than a drag.
    pub tap_distance: f32,
    /// Speed (px/ms) below which a release counts as a tap.
    pub tap_velocity: f32,
}

impl GestureConfig {
    /// True once a move sample shows deliberate horizontal intent.
    pub fn passes_drag_guard(&self, dx: f32, dy: f32) -> bool {
        dx.abs() > self.drag_slop && dx.abs() > dy.abs() + self.axis_bias
    }

    /// True when a release shows effectively no movement.
    pub fn is_tap(&self, dx: f32, vx: f32) -> bool {
        dx.abs() < self.tap_distance && vx.abs() < self.tap_velocity
    }
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            edge_width: 24.0,
            distance_threshold: 40.0,
            velocity_threshold: 0.2,
            drag_slop: 10.0,
            axis_bias: 3.0,
            tap_distance: 5.0,
            tap_velocity: 0.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn guard_requires_horizontal_dominance() {
        let config = GestureConfig::default();
        assert!(config.passes_drag_guard(15.0, 2.0));
        assert!(config.passes_drag_guard(-15.0, 2.0));
        // Enough travel, but not horizontal enough.
        assert!(!config.passes_drag_guard(15.0, 13.0));
        // Horizontal, but within slop.
        assert!(!config.passes_drag_guard(8.0, 0.0));
    }

    #[test]
    fn tap_needs_both_low_distance_and_low_speed() {
        let config = GestureConfig::default();
        assert!(config.is_tap(2.0, 0.05));
        assert!(!config.is_tap(2.0, 0.5));
        assert!(!config.is_tap(12.0, 0.05));
    }
}
