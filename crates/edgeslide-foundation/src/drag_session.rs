//! The single-gesture state machine.
//!
//! A `DragSession` covers one continuous gesture from grant to release or
//! termination. It consumes [`GestureSample`]s and produces live
//! [`DragFrame`]s while tracking, then resolves into a [`DragResolution`]
//! that the ui layer turns into settle animations and callbacks.
//!
//! At most one session may be active across a whole host; the
//! [`SessionArbiter`] is the shared claim flag that enforces it.

use crate::config::GestureConfig;
use crate::elastic::ElasticRange;
use crate::sample::GestureSample;
use crate::side::PanelSide;
use crate::zone::Zone;

use std::cell::Cell;
use std::rc::Rc;

/// Session lifecycle. `Tracking` spans the whole live gesture, including the
/// stretch before the tap-vs-drag guard is crossed where no motion is
/// published yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionPhase {
    Idle,
    Tracking,
    CommittingOpen,
    CommittingClose,
    Settled,
}

/// One live position update while tracking.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragFrame {
    pub side: PanelSide,
    pub position: f32,
    pub progress: f32,
}

/// Release-time outcome of a session.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragResolution {
    /// Effectively no movement happened; whatever state held before the
    /// grant is restored, regardless of the zone that claimed the touch.
    Tap {
        side: Option<PanelSide>,
        from_open: bool,
    },
    /// The commit predicate passed: finish the transition and notify.
    Commit { side: PanelSide, open: bool },
    /// The predicate failed: animate back to where the gesture began.
    Revert { side: PanelSide, open: bool },
}

/// State machine for one gesture.
pub struct DragSession {
    origin_zone: Zone,
    started_from_open: bool,
    width: f32,
    config: GestureConfig,
    target: Option<PanelSide>,
    qualified: bool,
    phase: SessionPhase,
}

impl DragSession {
    /// Grants a session for a touch-down while every panel is closed.
    /// Returns `None` when the claim surface is suppressed.
    pub fn grant(zone: Zone, width: f32, config: GestureConfig) -> Option<Self> {
        if zone == Zone::Ignored {
            log::debug!("drag grant refused: claim surface suppressed");
            return None;
        }
        Some(Self {
            origin_zone: zone,
            started_from_open: false,
            width,
            config,
            target: zone.preferred_side(),
            qualified: false,
            phase: SessionPhase::Tracking,
        })
    }

    /// Grants a drag-to-close session for a touch-down while `side` is open.
    /// The target is fixed for the session; the commit predicate inverts.
    pub fn grant_from_open(side: PanelSide, width: f32, config: GestureConfig) -> Self {
        Self {
            origin_zone: Zone::Center,
            started_from_open: true,
            width,
            config,
            target: Some(side),
            qualified: false,
            phase: SessionPhase::Tracking,
        }
    }

    pub fn phase(&self) -> SessionPhase {
        self.phase
    }

    pub fn is_active(&self) -> bool {
        self.phase == SessionPhase::Tracking
    }

    pub fn origin_zone(&self) -> Zone {
        self.origin_zone
    }

    pub fn started_from_open(&self) -> bool {
        self.started_from_open
    }

    pub fn target(&self) -> Option<PanelSide> {
        self.target
    }

    /// True once the tap-vs-drag guard has been crossed and frames are being
    /// published. The host keys its scroll-lock off this.
    pub fn has_published(&self) -> bool {
        self.qualified
    }

    /// Feeds one move sample. Returns a frame to publish once the gesture has
    /// shown horizontal intent; before that the touch is owned provisionally
    /// and produces no visible motion.
    pub fn on_move(&mut self, sample: &GestureSample) -> Option<DragFrame> {
        if self.phase != SessionPhase::Tracking {
            return None;
        }
        if !self.qualified {
            if !self.config.passes_drag_guard(sample.dx, sample.dy) {
                return None;
            }
            self.qualified = true;
            if self.target.is_none() {
                // Center grant: the sign of the first qualifying dx picks the
                // panel, permanently for this session.
                self.target = Some(if sample.dx > 0.0 {
                    PanelSide::Left
                } else {
                    PanelSide::Right
                });
                log::trace!("center drag resolved to {:?}", self.target);
            }
        }

        let side = self.target?;
        let range = ElasticRange::for_side(side, self.width);
        let raw = if self.started_from_open {
            side.open_bound() + sample.dx
        } else {
            // Opening: only travel toward open counts; the panel never digs
            // further into its closed bound.
            let toward_open = (sample.dx * side.opening_sign()).max(0.0);
            side.closed_bound(self.width) + toward_open * side.opening_sign()
        };
        let position = range.position_for(raw);
        Some(DragFrame {
            side,
            position,
            progress: range.progress(position),
        })
    }

    /// Resolves the session on finger-up. Termination by an external
    /// responder funnels through here too, with the samples captured at the
    /// moment of interruption.
    pub fn on_release(&mut self, sample: &GestureSample) -> DragResolution {
        let from_open = self.started_from_open;

        // Bare tap: nothing moved, so nothing may toggle.
        if self.config.is_tap(sample.dx, sample.vx) {
            self.phase = SessionPhase::Idle;
            return DragResolution::Tap {
                side: self.target,
                from_open,
            };
        }

        let Some(side) = self.target else {
            // Center grant that never crossed the guard: a defined idle
            // outcome, not an error.
            self.phase = SessionPhase::Idle;
            return DragResolution::Tap {
                side: None,
                from_open,
            };
        };

        let toward_open_dx = sample.dx * side.opening_sign();
        let toward_open_vx = sample.vx * side.opening_sign();

        if from_open {
            // Closing requires motion away from open past the same thresholds.
            let should_close = -toward_open_dx > self.config.distance_threshold
                || -toward_open_vx > self.config.velocity_threshold;
            if should_close {
                self.phase = SessionPhase::CommittingClose;
                DragResolution::Commit { side, open: false }
            } else {
                self.phase = SessionPhase::CommittingOpen;
                DragResolution::Revert { side, open: true }
            }
        } else {
            let should_open = toward_open_dx > self.config.distance_threshold
                || toward_open_vx > self.config.velocity_threshold;
            if should_open {
                self.phase = SessionPhase::CommittingOpen;
                DragResolution::Commit { side, open: true }
            } else {
                self.phase = SessionPhase::CommittingClose;
                DragResolution::Revert { side, open: false }
            }
        }
    }
}

/// Shared "is any session active" flag.
///
/// The host and both panel views hold clones; a grant first claims the flag
/// and a second pointer-down while it is held is refused rather than queued.
#[derive(Clone, Default)]
pub struct SessionArbiter {
    active: Rc<Cell<bool>>,
}

impl SessionArbiter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims the flag. Returns `false`, leaving the flag untouched, when a
    /// session already holds it.
    pub fn try_claim(&self) -> bool {
        if self.active.get() {
            return false;
        }
        self.active.set(true);
        true
    }

    pub fn release(&self) {
        self.active.set(false);
    }

    pub fn is_active(&self) -> bool {
        self.active.get()
    }
}

#[cfg(test)]
#[path = "tests/drag_session_tests.rs"]
mod tests;
